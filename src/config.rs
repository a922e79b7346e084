// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters (spherical approximation used by haversine).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Version of the commitment / receipt format.
pub const MERKLE_PROTOCOL_VERSION: u32 = 1;

/// Domain prefix for leaf cell hashing.
pub const DOMAIN_LEAF: &[u8] = b"GEOQUEST_LEAF_V1";

/// Domain prefix for the padding leaf.
pub const DOMAIN_PAD_LEAF: &[u8] = b"GEOQUEST_PAD_LEAF_V1";

/// Domain prefix for internal Merkle nodes.
pub const DOMAIN_NODE: &[u8] = b"GEOQUEST_NODE_V1";

/// Domain prefix for the claim digest of a proof submission.
pub const DOMAIN_CLAIM: &[u8] = b"GEOQUEST_CLAIM_V1";

/// Largest rounded meter value still shown in meters.
pub const METER_TIER_MAX: f64 = 999.0;

/// Largest kilometer value shown without the thousands suffix.
pub const KM_TIER_MAX: f64 = 999.0;

/// Runtime options for [`crate::geofence::MerkleGeofence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeofenceConfig {
    /// Re-hash the matched cell and require it to equal the stored leaf hash.
    pub verify_leaf_hashes: bool,
}

impl Default for GeofenceConfig {
    fn default() -> Self {
        Self {
            verify_leaf_hashes: true,
        }
    }
}
