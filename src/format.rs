// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Display formatting of distances.

use crate::config::{KM_TIER_MAX, METER_TIER_MAX};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceTier {
    Meters,
    Kilometers,
    ThousandsOfKilometers,
}

/// Rounds to the nearest 0.1 m. Applied once, before tiering.
fn round_tenth(meters: f64) -> f64 {
    (meters * 10.0).round() / 10.0
}

pub fn tier(meters: f64) -> DistanceTier {
    let rounded = round_tenth(meters);
    if rounded > METER_TIER_MAX {
        if rounded / 1000.0 > KM_TIER_MAX {
            DistanceTier::ThousandsOfKilometers
        } else {
            DistanceTier::Kilometers
        }
    } else {
        DistanceTier::Meters
    }
}

/// Tiered label: `"500.0 M"`, `"1.5 KM"`, `"1.5K KM"`.
///
/// Total: negative values keep their sign, NaN falls in the meter tier.
pub fn format_distance(meters: f64) -> String {
    let rounded = round_tenth(meters);
    let km = rounded / 1000.0;
    match tier(meters) {
        DistanceTier::Meters => format!("{:.1} M", rounded),
        DistanceTier::Kilometers => format!("{:.1} KM", km),
        DistanceTier::ThousandsOfKilometers => format!("{:.1}K KM", km / 1000.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_tier() {
        assert_eq!(format_distance(500.0), "500.0 M");
        assert_eq!(format_distance(999.0), "999.0 M");
        assert_eq!(format_distance(12.34), "12.3 M");
        assert_eq!(tier(999.0), DistanceTier::Meters);
    }

    #[test]
    fn test_km_tier() {
        assert_eq!(format_distance(1000.0), "1.0 KM");
        assert_eq!(format_distance(1500.0), "1.5 KM");
        assert_eq!(format_distance(999_000.0), "999.0 KM");
        assert_eq!(tier(1000.0), DistanceTier::Kilometers);
    }

    #[test]
    fn test_rounding_applied_before_tiering() {
        // 999.96 rounds to 1000.0 and moves to the km tier
        assert_eq!(tier(999.96), DistanceTier::Kilometers);
        assert_eq!(format_distance(999.96), "1.0 KM");
        assert_eq!(tier(999.04), DistanceTier::Meters);
    }

    #[test]
    fn test_thousands_of_km_tier() {
        assert_eq!(format_distance(1_500_000.0), "1.5K KM");
        assert_eq!(format_distance(20_000_000.0), "20.0K KM");
        assert_eq!(tier(999_100.0), DistanceTier::ThousandsOfKilometers);
    }

    #[test]
    fn test_negative_keeps_sign() {
        assert_eq!(format_distance(-500.0), "-500.0 M");
        assert_eq!(tier(-5000.0), DistanceTier::Meters);
    }
}
