// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! A quest's geofenced region as seen by one play session.

use serde::{Deserialize, Serialize};

use crate::error::{QuestError, Result};
use crate::geo;
use crate::merkle::MerkleBody;
use crate::types::{Coordinate, QuestId};

/// Minimum number of hint corners describing a polygon.
pub const MIN_HINT_CORNERS: usize = 3;

/// Hint polygon plus the committed region.
///
/// The corners are a coarse display hint. They are never used to decide
/// membership and the body root is never derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawQuestArea")]
pub struct QuestArea {
    hint_corners: Vec<Coordinate>,
    merkle_body: MerkleBody,
}

#[derive(Deserialize)]
struct RawQuestArea {
    hint_corners: Vec<Coordinate>,
    merkle_body: MerkleBody,
}

impl TryFrom<RawQuestArea> for QuestArea {
    type Error = QuestError;

    fn try_from(raw: RawQuestArea) -> Result<Self> {
        QuestArea::new(raw.hint_corners, raw.merkle_body)
    }
}

impl QuestArea {
    pub fn new(hint_corners: Vec<Coordinate>, merkle_body: MerkleBody) -> Result<Self> {
        if hint_corners.len() < MIN_HINT_CORNERS {
            return Err(QuestError::InvalidGeometry(format!(
                "quest hint needs at least {} corners, got {}",
                MIN_HINT_CORNERS,
                hint_corners.len()
            )));
        }
        Ok(Self {
            hint_corners,
            merkle_body,
        })
    }

    pub fn quest_id(&self) -> QuestId {
        self.merkle_body.quest_id
    }

    pub fn hint_corners(&self) -> &[Coordinate] {
        &self.hint_corners
    }

    pub fn merkle_body(&self) -> &MerkleBody {
        &self.merkle_body
    }

    /// Centre of the hint polygon, recomputed on every call.
    pub fn centroid(&self) -> Result<Coordinate> {
        geo::centroid(&self.hint_corners)
    }

    /// Display distance from `player` to the hint centroid, in meters.
    pub fn distance_to_hint(&self, player: Coordinate) -> Result<f64> {
        Ok(geo::distance(self.centroid()?, player))
    }
}
