// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Geographic coordinate value type.

use serde::{Deserialize, Serialize};

use crate::error::{QuestError, Result};

/// A WGS84-style latitude/longitude pair in decimal degrees.
///
/// Valid ranges are [-90, 90] for latitude and [-180, 180] for longitude.
/// [`Coordinate::new`] does not check them: the player position comes from a
/// location collaborator and is taken as reported. Loaders that accept
/// untrusted text should go through [`Coordinate::checked`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Builds a coordinate, rejecting non-finite or out-of-range values.
    pub fn checked(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(QuestError::InvalidGeometry(format!(
                "latitude {} outside [-90, 90]",
                latitude
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(QuestError::InvalidGeometry(format!(
                "longitude {} outside [-180, 180]",
                longitude
            )));
        }
        Ok(Self::new(latitude, longitude))
    }

    pub fn is_valid(&self) -> bool {
        Self::checked(self.latitude, self.longitude).is_ok()
    }
}
