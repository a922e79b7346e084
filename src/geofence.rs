// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Proof-of-presence engine.
//!
//! One call to [`MerkleGeofence::evaluate`]:
//! 1. Check the body shape.
//! 2. Scan leaves by ascending index; the first cell containing the player wins.
//! 3. No match: [`Evaluation::NotInRange`].
//! 4. Match: collect the sibling path and build a [`ProofSubmission`].
//! 5. Fold the path back to a root and refuse to return the proof unless it
//!    equals the committed root.
//!
//! The engine holds no shared mutable state and only borrows the body for
//! the duration of the call.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, error, warn};

use crate::config::GeofenceConfig;
use crate::error::{QuestError, Result};
use crate::merkle::{leaf_hash, MerkleBody};
use crate::proof::ProofSubmission;
use crate::quest::QuestArea;
use crate::types::{Coordinate, LeafIndex};

/// Source of proof timestamps (Unix seconds).
pub trait Clock {
    fn now(&self) -> Result<u64>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    /// Fails with [`QuestError::Clock`] when the system time is before the epoch.
    fn now(&self) -> Result<u64> {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .map_err(|e| {
                warn!(behind_secs = e.duration().as_secs(), "System clock is before the Unix epoch");
                QuestError::Clock(e.to_string())
            })
    }
}

/// Clock pinned to one instant, for reproducible proofs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now(&self) -> Result<u64> {
        Ok(self.0)
    }
}

/// Outcome of a successful evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    Found(ProofSubmission),
    /// The player is outside every committed cell. Expected, not a failure.
    NotInRange,
}

impl Evaluation {
    pub fn is_found(&self) -> bool {
        matches!(self, Evaluation::Found(_))
    }

    pub fn into_proof(self) -> Option<ProofSubmission> {
        match self {
            Evaluation::Found(proof) => Some(proof),
            Evaluation::NotInRange => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MerkleGeofence<C: Clock = SystemClock> {
    clock: C,
    config: GeofenceConfig,
}

impl MerkleGeofence<SystemClock> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> MerkleGeofence<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            config: GeofenceConfig::default(),
        }
    }

    pub fn with_config(mut self, config: GeofenceConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &GeofenceConfig {
        &self.config
    }

    pub fn evaluate_area(&self, player: Coordinate, area: &QuestArea) -> Result<Evaluation> {
        self.evaluate(player, area.merkle_body())
    }

    pub fn evaluate(&self, player: Coordinate, body: &MerkleBody) -> Result<Evaluation> {
        body.validate()?;

        let index = match locate(player, body) {
            Some(index) => index,
            None => {
                debug!(quest_id = %body.quest_id, "player outside every committed cell");
                return Ok(Evaluation::NotInRange);
            }
        };

        let leaf = &body.leaves[index.as_usize()];
        if self.config.verify_leaf_hashes && leaf_hash(&leaf.cell) != leaf.hash {
            error!(quest_id = %body.quest_id, leaf_index = %index, "stored leaf hash does not commit to its cell");
            return Err(QuestError::InvalidGeometry(format!(
                "leaf {} hash does not commit to its cell",
                index
            )));
        }

        let proof = ProofSubmission {
            quest_id: body.quest_id,
            leaf_index: index,
            leaf_hash: leaf.hash,
            sibling_path: body.sibling_path(index)?,
            claimed_coordinate: player,
            timestamp: self.clock.now()?,
        };

        let computed = proof.fold_root();
        if computed != body.root_hash {
            error!(
                quest_id = %body.quest_id,
                leaf_index = %index,
                expected = %body.root_hash,
                computed = %computed,
                "proof self-verification failed"
            );
            return Err(QuestError::ProofConstruction {
                expected: body.root_hash,
                computed,
            });
        }

        debug!(quest_id = %body.quest_id, leaf_index = %index, "proof built");
        Ok(Evaluation::Found(proof))
    }
}

/// First leaf (by ascending index) whose cell contains `player`.
///
/// Overlapping cells are allowed; the lower index always wins.
pub fn locate(player: Coordinate, body: &MerkleBody) -> Option<LeafIndex> {
    body.leaves
        .iter()
        .position(|leaf| leaf.cell.contains(player))
        .map(|i| LeafIndex(i as u32))
}
