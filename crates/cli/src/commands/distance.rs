// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::path::Path;

use anyhow::Result;
use geoquest_kernel::format_distance;

use super::{load_quest, player};

/// Distance label from the player to the hint centroid.
pub fn run(quest_path: &Path, lat: f64, lon: f64) -> Result<String> {
    let area = load_quest(quest_path)?;
    let meters = area.distance_to_hint(player(lat, lon)?)?;
    let label = format_distance(meters);
    println!("{}", label);
    Ok(label)
}
