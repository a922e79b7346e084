// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! geoquest-kernel: geofenced proof-of-presence for location quests.
//!
//! Given a player coordinate and a quest's committed region (a Merkle tree of
//! leaf cells), decide whether the player stands in a committed cell and, if
//! so, build a self-verified [`proof::ProofSubmission`].

pub mod config;
pub mod error;
pub mod types;
pub mod geo;
pub mod merkle;
pub mod quest;
pub mod proof;
pub mod geofence;
pub mod format;

pub use error::{QuestError, Result};
pub use format::format_distance;
pub use geofence::{Evaluation, MerkleGeofence};
pub use merkle::MerkleBody;
pub use proof::{ProofCheck, ProofSubmission};
pub use quest::QuestArea;
pub use types::Coordinate;

#[cfg(test)]
pub mod tests;
