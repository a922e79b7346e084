// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod commit;
pub mod distance;
pub mod evaluate;
pub mod inspect;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use geoquest_kernel::{Coordinate, QuestArea};

/// Reads a quest file: `{ "hint_corners": [..], "merkle_body": {..} }`.
pub fn load_quest(path: &Path) -> Result<QuestArea> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read quest file {:?}", path))?;
    serde_json::from_slice(&bytes).with_context(|| format!("Failed to parse quest file {:?}", path))
}

pub fn player(lat: f64, lon: f64) -> Result<Coordinate> {
    Coordinate::checked(lat, lon).context("Invalid player coordinate")
}

pub fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("Failed to write {:?}", path))
}
