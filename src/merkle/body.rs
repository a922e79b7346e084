// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! The published quest commitment ("merkle body").
//!
//! Layout: the leaf level (level 0) is padded to the next power of two with
//! [`pad_leaf`]. `layers[k]` holds level `k + 1`, so for more than one leaf
//! the last layer is `[root_hash]`. A single-leaf body has no layers and its
//! root is the leaf hash.
//!
//! The root is fixed when the quest is authored. Evaluation reads the stored
//! layers and never rebuilds them.

use serde::{Deserialize, Serialize};

use super::hash::{leaf_hash, node_hash, pad_leaf, Hash256};
use super::{Side, SiblingHash};
use crate::error::{QuestError, Result};
use crate::geo::Cell;
use crate::types::{LeafIndex, QuestId};

/// A committed cell together with its stored content hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaf {
    pub cell: Cell,
    pub hash: Hash256,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerkleBody {
    pub quest_id: QuestId,
    /// Declared number of real (non-padding) leaves.
    pub leaf_count: u32,
    pub leaves: Vec<Leaf>,
    pub layers: Vec<Vec<Hash256>>,
    pub root_hash: Hash256,
}

impl MerkleBody {
    /// Authors a commitment over `cells`, in the given order.
    pub fn commit(quest_id: QuestId, cells: Vec<Cell>) -> Result<Self> {
        if cells.is_empty() {
            return Err(QuestError::InvalidGeometry(
                "cannot commit an empty cell set".to_string(),
            ));
        }
        for cell in &cells {
            cell.validate()?;
        }

        let leaves: Vec<Leaf> = cells
            .into_iter()
            .map(|cell| {
                let hash = leaf_hash(&cell);
                Leaf { cell, hash }
            })
            .collect();

        let width = leaves.len().next_power_of_two();
        let mut level: Vec<Hash256> = leaves.iter().map(|l| l.hash).collect();
        level.resize(width, pad_leaf());

        let mut layers = Vec::new();
        while level.len() > 1 {
            level = level
                .chunks(2)
                .map(|pair| node_hash(&pair[0], &pair[1]))
                .collect();
            layers.push(level.clone());
        }

        Ok(Self {
            quest_id,
            leaf_count: leaves.len() as u32,
            leaves,
            layers,
            root_hash: level[0],
        })
    }

    /// Padded width of the leaf level.
    pub fn width(&self) -> usize {
        (self.leaf_count as usize).next_power_of_two()
    }

    /// Number of levels above the leaves.
    pub fn depth(&self) -> usize {
        self.width().trailing_zeros() as usize
    }

    /// Checks the declared shape against the stored leaves and layers.
    ///
    /// Does not compare hashes; a body can be well-shaped and still fail
    /// proof self-verification.
    pub fn validate(&self) -> Result<()> {
        if self.leaf_count == 0 {
            return Err(QuestError::InvalidGeometry(
                "merkle body declares zero leaves".to_string(),
            ));
        }
        if self.leaves.len() != self.leaf_count as usize {
            return Err(QuestError::InvalidGeometry(format!(
                "merkle body declares {} leaves but carries {}",
                self.leaf_count,
                self.leaves.len()
            )));
        }

        let depth = self.depth();
        if self.layers.len() != depth {
            return Err(QuestError::InvalidGeometry(format!(
                "merkle body with {} leaves needs {} layers, found {}",
                self.leaf_count,
                depth,
                self.layers.len()
            )));
        }

        let width = self.width();
        for (k, layer) in self.layers.iter().enumerate() {
            let expected = width >> (k + 1);
            if layer.len() != expected {
                return Err(QuestError::InvalidGeometry(format!(
                    "merkle level {} has {} nodes, expected {}",
                    k + 1,
                    layer.len(),
                    expected
                )));
            }
        }

        for leaf in &self.leaves {
            leaf.cell.validate()?;
        }

        Ok(())
    }

    /// Hash at `pos` on `level` (0 = leaves, padding included).
    fn node_at(&self, level: usize, pos: usize) -> Option<Hash256> {
        if level == 0 {
            if let Some(leaf) = self.leaves.get(pos) {
                Some(leaf.hash)
            } else if pos < self.width() {
                Some(pad_leaf())
            } else {
                None
            }
        } else {
            self.layers.get(level - 1)?.get(pos).copied()
        }
    }

    /// Sibling hashes from leaf `index` up to the root.
    pub fn sibling_path(&self, index: LeafIndex) -> Result<Vec<SiblingHash>> {
        let mut pos = index.as_usize();
        if pos >= self.leaves.len() {
            return Err(QuestError::InvalidGeometry(format!(
                "leaf index {} out of range for {} leaves",
                index,
                self.leaves.len()
            )));
        }

        let depth = self.depth();
        let mut path = Vec::with_capacity(depth);
        for level in 0..depth {
            let (sibling_pos, side) = if pos % 2 == 0 {
                (pos + 1, Side::Right)
            } else {
                (pos - 1, Side::Left)
            };
            let hash = self.node_at(level, sibling_pos).ok_or_else(|| {
                QuestError::InvalidGeometry(format!(
                    "missing sibling at level {} position {}",
                    level, sibling_pos
                ))
            })?;
            path.push(SiblingHash { hash, side });
            pos /= 2;
        }

        Ok(path)
    }

    /// Rebuilds every hash from the cells and compares with what is stored.
    ///
    /// Authoring/inspection aid only; evaluation never calls this.
    pub fn is_consistent(&self) -> bool {
        if self.validate().is_err() {
            return false;
        }
        let cells = self.leaves.iter().map(|l| l.cell.clone()).collect();
        match Self::commit(self.quest_id, cells) {
            Ok(rebuilt) => rebuilt == *self,
            Err(_) => false,
        }
    }
}
