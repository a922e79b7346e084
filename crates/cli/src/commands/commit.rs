// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use geoquest_kernel::geo::Cell;
use geoquest_kernel::types::QuestId;
use geoquest_kernel::{Coordinate, MerkleBody, QuestArea};
use serde::Deserialize;

use super::write_json;

/// Authoring input: the hint plus the true committed cells, in leaf order.
#[derive(Deserialize, Debug)]
pub struct QuestDraft {
    pub quest_id: u64,
    pub hint_corners: Vec<Coordinate>,
    pub cells: Vec<Cell>,
}

pub fn build(draft: QuestDraft) -> Result<QuestArea> {
    let body = MerkleBody::commit(QuestId(draft.quest_id), draft.cells)
        .context("Failed to commit quest cells")?;
    let area = QuestArea::new(draft.hint_corners, body).context("Invalid quest hint")?;
    Ok(area)
}

pub fn run(draft_path: &Path, out: Option<&Path>) -> Result<()> {
    let bytes = fs::read(draft_path)
        .with_context(|| format!("Failed to read draft {:?}", draft_path))?;
    let draft: QuestDraft = serde_json::from_slice(&bytes).context("Failed to parse quest draft")?;

    let area = build(draft)?;
    let body = area.merkle_body();
    tracing::info!(
        quest_id = %body.quest_id,
        leaves = body.leaf_count,
        root = %body.root_hash,
        "quest committed"
    );

    match out {
        Some(path) => {
            write_json(path, &area)?;
            println!("Wrote quest {} to {:?}", body.quest_id, path);
            println!("Root: {}", body.root_hash);
        }
        None => println!("{}", serde_json::to_string_pretty(&area)?),
    }
    Ok(())
}
