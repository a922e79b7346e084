//! Proof-of-presence submissions.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use serde::{Deserialize, Serialize};

use crate::config::{DOMAIN_CLAIM, MERKLE_PROTOCOL_VERSION};
use crate::error::{QuestError, Result};
use crate::merkle::{fold_path, leaf_hash, Hash256, MerkleBody, Side, SiblingHash};
use crate::types::{Coordinate, LeafIndex, QuestId};

/// Outcome of [`ProofSubmission::check_in`], one flag per condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofCheck {
    pub quest_matches: bool,
    pub root_matches: bool,
    /// Stored hash at `leaf_index` equals the submitted `leaf_hash`.
    pub leaf_matches: bool,
    /// Re-hashing the stored cell gives the submitted `leaf_hash`.
    pub cell_committed: bool,
    pub coordinate_in_cell: bool,
}

impl ProofCheck {
    pub fn passed(&self) -> bool {
        self.quest_matches
            && self.root_matches
            && self.leaf_matches
            && self.cell_committed
            && self.coordinate_in_cell
    }
}

/// Binds a quest, one committed leaf cell and the player's coordinate.
///
/// Field order is the wire order for both the JSON and the bincode encoding.
/// Only ever built by [`crate::geofence::MerkleGeofence`] after the path has
/// been folded back to the committed root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofSubmission {
    pub quest_id: QuestId,
    pub leaf_index: LeafIndex,
    pub leaf_hash: Hash256,
    /// Sibling hashes ordered leaf to root.
    pub sibling_path: Vec<SiblingHash>,
    pub claimed_coordinate: Coordinate,
    /// Unix time in seconds when the proof was built.
    pub timestamp: u64,
}

impl ProofSubmission {
    /// Root obtained by folding `leaf_hash` with `sibling_path`.
    pub fn fold_root(&self) -> Hash256 {
        fold_path(self.leaf_hash, &self.sibling_path)
    }

    /// Path-only check: the leaf folds to `root`. Says nothing about the
    /// claimed coordinate; use [`ProofSubmission::verify_in`] for that.
    pub fn verify_against(&self, root: &Hash256) -> bool {
        self.fold_root() == *root
    }

    /// Itemised check of this submission against a published body.
    pub fn check_in(&self, body: &MerkleBody) -> ProofCheck {
        let leaf = body.leaves.get(self.leaf_index.as_usize());
        ProofCheck {
            quest_matches: self.quest_id == body.quest_id,
            root_matches: self.verify_against(&body.root_hash),
            leaf_matches: leaf.map(|l| l.hash == self.leaf_hash).unwrap_or(false),
            cell_committed: leaf
                .map(|l| leaf_hash(&l.cell) == self.leaf_hash)
                .unwrap_or(false),
            coordinate_in_cell: leaf
                .map(|l| l.cell.contains(self.claimed_coordinate))
                .unwrap_or(false),
        }
    }

    /// Full check: right quest, path folds to the root, the indexed leaf is
    /// this leaf, its cell hashes to it, and the claimed coordinate is inside.
    pub fn verify_in(&self, body: &MerkleBody) -> bool {
        self.check_in(body).passed()
    }

    /// Digest over every field, usable as a submission id.
    ///
    /// ```text
    /// DOMAIN_CLAIM || version (u32 LE) || quest_id (u64 LE) || leaf_index (u32 LE)
    /// || leaf_hash(32) || per sibling: side (u8, 0 = left) || hash(32)
    /// || latitude (f64 LE) || longitude (f64 LE) || timestamp (u64 LE)
    /// ```
    pub fn claim_hash(&self) -> Hash256 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(DOMAIN_CLAIM);
        hasher.update(&MERKLE_PROTOCOL_VERSION.to_le_bytes());
        hasher.update(&self.quest_id.0.to_le_bytes());
        hasher.update(&self.leaf_index.0.to_le_bytes());
        hasher.update(&self.leaf_hash.0);
        for sibling in &self.sibling_path {
            let side = match sibling.side {
                Side::Left => 0u8,
                Side::Right => 1u8,
            };
            hasher.update(&[side]);
            hasher.update(&sibling.hash.0);
        }
        hasher.update(&self.claimed_coordinate.latitude.to_le_bytes());
        hasher.update(&self.claimed_coordinate.longitude.to_le_bytes());
        hasher.update(&self.timestamp.to_le_bytes());
        hasher.finalize().into()
    }

    /// Canonical binary receipt (bincode, standard config).
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serde::encode_to_vec(self, bincode::config::standard())
            .map_err(|e| QuestError::Encoding(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (proof, read): (Self, usize) =
            bincode::serde::decode_from_slice(bytes, bincode::config::standard())
                .map_err(|e| QuestError::Encoding(e.to_string()))?;
        if read != bytes.len() {
            return Err(QuestError::Encoding(format!(
                "{} trailing bytes after receipt",
                bytes.len() - read
            )));
        }
        Ok(proof)
    }
}
