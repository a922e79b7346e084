// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Canonical BLAKE3 hashing for quest commitments.
//!
//! # Hash Input Structure
//! ```text
//! leaf     = BLAKE3(DOMAIN_LEAF     || cell canonical bytes)
//! pad leaf = BLAKE3(DOMAIN_PAD_LEAF)
//! node     = BLAKE3(DOMAIN_NODE     || left(32) || right(32))
//! ```
//!
//! Domain prefixes keep a leaf preimage from ever colliding with a node
//! preimage.

use core::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::{DOMAIN_LEAF, DOMAIN_NODE, DOMAIN_PAD_LEAF};
use crate::geo::Cell;

/// 32-byte BLAKE3 digest.
///
/// Serializes as a lowercase hex string in human-readable formats (JSON) and
/// as 32 raw bytes otherwise (bincode receipts).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    pub const ZERO: Hash256 = Hash256([0u8; 32]);

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn from_hex(s: &str) -> Option<Self> {
        let bytes = hex::decode(s).ok()?;
        let arr: [u8; 32] = bytes.try_into().ok()?;
        Some(Hash256(arr))
    }
}

impl From<blake3::Hash> for Hash256 {
    fn from(h: blake3::Hash) -> Self {
        Hash256(*h.as_bytes())
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", self.to_hex())
    }
}

impl Serialize for Hash256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_hex())
        } else {
            self.0.serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for Hash256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            Hash256::from_hex(&s)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid 32-byte hex digest: {:?}", s)))
        } else {
            <[u8; 32]>::deserialize(deserializer).map(Hash256)
        }
    }
}

/// Content hash of a committed cell.
pub fn leaf_hash(cell: &Cell) -> Hash256 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(DOMAIN_LEAF);
    hasher.update(&cell.canonical_bytes());
    hasher.finalize().into()
}

/// Internal node hash over an ordered child pair.
pub fn node_hash(left: &Hash256, right: &Hash256) -> Hash256 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(DOMAIN_NODE);
    hasher.update(&left.0);
    hasher.update(&right.0);
    hasher.finalize().into()
}

/// Hash standing in for the empty slots when the leaf level is padded.
pub fn pad_leaf() -> Hash256 {
    static PAD_LEAF: OnceLock<Hash256> = OnceLock::new();
    *PAD_LEAF.get_or_init(|| blake3::hash(DOMAIN_PAD_LEAF).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coordinate;

    #[test]
    fn test_node_hash_is_ordered() {
        let a = Hash256([1u8; 32]);
        let b = Hash256([2u8; 32]);
        assert_ne!(node_hash(&a, &b), node_hash(&b, &a));
    }

    #[test]
    fn test_leaf_hash_deterministic() {
        let cell = Cell::Disk {
            center: Coordinate::new(40.0, -75.0),
            radius_m: 200.0,
        };
        assert_eq!(leaf_hash(&cell), leaf_hash(&cell.clone()));
        assert_ne!(leaf_hash(&cell), pad_leaf());
    }

    #[test]
    fn test_hex_roundtrip_and_rejects_short() {
        let h = Hash256([0xab; 32]);
        assert_eq!(Hash256::from_hex(&h.to_hex()), Some(h));
        assert_eq!(Hash256::from_hex("abcd"), None);
        assert_eq!(Hash256::from_hex("zz"), None);
    }

    #[test]
    fn test_json_is_hex_string() {
        let h = Hash256([0x01; 32]);
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, format!("\"{}\"", "01".repeat(32)));
        let back: Hash256 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, h);
    }
}
