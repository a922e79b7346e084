// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Spherical geometry helpers.
//!
//! Stateless. Nothing in here takes part in the proof decision except
//! [`distance`], which [`cell::Cell::Disk`] uses for its membership test.

pub mod cell;

use crate::config::EARTH_RADIUS_M;
use crate::error::{QuestError, Result};
use crate::types::Coordinate;

pub use cell::Cell;

/// Great-circle distance in meters between two coordinates (haversine).
///
/// Symmetric, and exactly `0.0` when both coordinates are equal.
/// NaN or infinite inputs yield NaN; callers get no error for them.
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    let phi_a = a.latitude.to_radians();
    let phi_b = b.latitude.to_radians();
    let d_phi = (b.latitude - a.latitude).to_radians();
    let d_lambda = (b.longitude - a.longitude).to_radians();

    let s_phi = (d_phi / 2.0).sin();
    let s_lambda = (d_lambda / 2.0).sin();
    let h = s_phi * s_phi + phi_a.cos() * phi_b.cos() * s_lambda * s_lambda;
    // Rounding can push h a hair outside [0, 1] for antipodal points.
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_M * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Arithmetic mean of latitudes and of longitudes.
///
/// Not area-weighted and not geodesically exact; good enough for the small
/// hint quadrants it is used on. Does not handle polygons spanning the
/// antimeridian.
pub fn centroid(points: &[Coordinate]) -> Result<Coordinate> {
    if points.is_empty() {
        return Err(QuestError::InvalidGeometry(
            "centroid of an empty point set".to_string(),
        ));
    }

    let n = points.len() as f64;
    let (lat_sum, lon_sum) = points.iter().fold((0.0, 0.0), |(lat, lon), p| {
        (lat + p.latitude, lon + p.longitude)
    });

    Ok(Coordinate::new(lat_sum / n, lon_sum / n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_zero_for_same_point() {
        let p = Coordinate::new(0.0, 0.0);
        assert_eq!(distance(p, p), 0.0);

        let q = Coordinate::new(40.0, -75.0);
        assert_eq!(distance(q, q), 0.0);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Coordinate::new(51.5007, -0.1246);
        let b = Coordinate::new(40.6892, -74.0445);
        assert_eq!(distance(a, b), distance(b, a));
    }

    #[test]
    fn test_distance_one_degree_latitude() {
        // One degree of arc on a 6371 km sphere: 6371000 * pi / 180
        let d = distance(Coordinate::new(40.0, -75.0), Coordinate::new(41.0, -75.0));
        assert!((d - 111_194.93).abs() < 1.0, "got {}", d);
    }

    #[test]
    fn test_distance_nan_propagates() {
        let d = distance(Coordinate::new(f64::NAN, 0.0), Coordinate::new(0.0, 0.0));
        assert!(d.is_nan());
    }

    #[test]
    fn test_centroid_square() {
        let square = [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 2.0),
            Coordinate::new(2.0, 2.0),
            Coordinate::new(2.0, 0.0),
        ];
        assert_eq!(centroid(&square).unwrap(), Coordinate::new(1.0, 1.0));
    }

    #[test]
    fn test_centroid_single_point() {
        let p = Coordinate::new(12.5, -3.25);
        assert_eq!(centroid(&[p]).unwrap(), p);
    }

    #[test]
    fn test_centroid_empty_fails() {
        assert!(matches!(centroid(&[]), Err(QuestError::InvalidGeometry(_))));
    }
}
