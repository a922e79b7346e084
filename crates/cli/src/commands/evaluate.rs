// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{TimeZone, Utc};
use geoquest_kernel::{Evaluation, MerkleGeofence};

use super::{load_quest, player, write_json};

pub fn run(quest_path: &Path, lat: f64, lon: f64, out: Option<&Path>) -> Result<Evaluation> {
    let area = load_quest(quest_path)?;
    let player = player(lat, lon)?;

    let evaluation = MerkleGeofence::new()
        .evaluate_area(player, &area)
        .context("Couldn't evaluate quest")?;

    match &evaluation {
        Evaluation::Found(proof) => {
            let when = Utc
                .timestamp_opt(proof.timestamp as i64, 0)
                .single()
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| proof.timestamp.to_string());
            println!("✅ In range: leaf {} of quest {}", proof.leaf_index, proof.quest_id);
            println!("Claim:  {}", proof.claim_hash());
            println!("Time:   {}", when);
            match out {
                Some(path) => {
                    write_json(path, proof)?;
                    println!("Proof written to {:?}", path);
                }
                None => println!("{}", serde_json::to_string_pretty(proof)?),
            }
        }
        Evaluation::NotInRange => {
            println!("Not in range: the quest location isn't nearby");
        }
    }

    Ok(evaluation)
}
