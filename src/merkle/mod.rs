// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Quest area commitments: hashing, tree layout and inclusion paths.

pub mod body;
pub mod hash;

use serde::{Deserialize, Serialize};

pub use body::{Leaf, MerkleBody};
pub use hash::{leaf_hash, node_hash, pad_leaf, Hash256};

/// Which side of the running hash a sibling sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

/// One step of an inclusion path, ordered leaf to root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiblingHash {
    pub hash: Hash256,
    pub side: Side,
}

/// Recomputes a root by folding `leaf` with `path` in order.
pub fn fold_path(leaf: Hash256, path: &[SiblingHash]) -> Hash256 {
    path.iter().fold(leaf, |current, sibling| match sibling.side {
        Side::Left => node_hash(&sibling.hash, &current),
        Side::Right => node_hash(&current, &sibling.hash),
    })
}
