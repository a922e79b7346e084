// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::path::Path;

use anyhow::Result;
use comfy_table::Table;
use geoquest_kernel::geo::Cell;

use super::load_quest;

fn describe(cell: &Cell) -> (&'static str, String) {
    match cell {
        Cell::Polygon { vertices } => ("polygon", format!("{} vertices", vertices.len())),
        Cell::Bounds {
            south,
            west,
            north,
            east,
        } => ("bounds", format!("[{}, {}] x [{}, {}]", south, north, west, east)),
        Cell::Disk { center, radius_m } => (
            "disk",
            format!("({}, {}) r={} m", center.latitude, center.longitude, radius_m),
        ),
    }
}

pub fn run(quest_path: &Path) -> Result<()> {
    let area = load_quest(quest_path)?;
    let body = area.merkle_body();
    let centroid = area.centroid()?;

    println!("Quest:      {}", body.quest_id);
    println!("Root:       {}", body.root_hash);
    println!("Leaves:     {} (depth {})", body.leaf_count, body.depth());
    println!("Hint:       {} corners, centroid ({:.6}, {:.6})", area.hint_corners().len(), centroid.latitude, centroid.longitude);

    match body.validate() {
        Ok(()) if body.is_consistent() => println!("Status:     ✅ consistent"),
        Ok(()) => println!("Status:     ❌ stored hashes do not match cells"),
        Err(e) => println!("Status:     ❌ {}", e),
    }

    let mut table = Table::new();
    table.set_header(vec!["Leaf", "Kind", "Geometry", "Hash"]);
    for (i, leaf) in body.leaves.iter().enumerate() {
        let (kind, geometry) = describe(&leaf.cell);
        table.add_row(vec![
            i.to_string(),
            kind.to_string(),
            geometry,
            leaf.hash.to_string(),
        ]);
    }
    println!("{table}");

    Ok(())
}
