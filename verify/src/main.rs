// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use clap::Parser;
use std::path::{Path, PathBuf};
use std::fs;
use serde::Serialize;
use anyhow::{Context, Result};
use geoquest_kernel::merkle::{Hash256, MerkleBody};
use geoquest_kernel::types::{LeafIndex, QuestId};
use geoquest_kernel::ProofSubmission;

#[derive(Parser, Debug)]
#[command(author, version, about = "Offline verifier for geoquest proof submissions", long_about = None)]
struct Args {
    /// Quest file (`{ hint_corners, merkle_body }`) or a bare merkle body
    quest: PathBuf,

    /// Proof submission (JSON, or a bincode receipt with --binary)
    proof: PathBuf,

    /// Read the proof as a bincode receipt
    #[arg(long)]
    binary: bool,
}

#[derive(Serialize, Debug)]
struct Verdict {
    quest_id: QuestId,
    leaf_index: LeafIndex,
    root_hash: Hash256,
    computed_root: Hash256,
    root_matches: bool,
    leaf_matches: bool,
    cell_committed: bool,
    coordinate_in_cell: bool,
    claim_hash: Hash256,
}

impl Verdict {
    fn accepted(&self) -> bool {
        self.root_matches && self.leaf_matches && self.cell_committed && self.coordinate_in_cell
    }
}

fn load_body(path: &Path) -> Result<MerkleBody> {
    let bytes = fs::read(path).context("Failed to read quest file")?;
    let mut value: serde_json::Value =
        serde_json::from_slice(&bytes).context("Quest file is not JSON")?;

    // Accept a full quest file as well as a bare body
    let body = if value.get("merkle_body").is_some() {
        value["merkle_body"].take()
    } else {
        value
    };
    serde_json::from_value(body).context("Failed to parse merkle body")
}

fn load_proof(path: &Path, binary: bool) -> Result<ProofSubmission> {
    let bytes = fs::read(path).context("Failed to read proof file")?;
    if binary {
        ProofSubmission::from_bytes(&bytes).context("Failed to decode proof receipt")
    } else {
        serde_json::from_slice(&bytes).context("Failed to parse proof JSON")
    }
}

/// Errors only when the proof names a different quest; every other
/// mismatch is reported in the verdict.
fn verdict(body: &MerkleBody, proof: &ProofSubmission) -> Result<Verdict> {
    if proof.quest_id != body.quest_id {
        anyhow::bail!(
            "Proof is for quest {} but the body commits quest {}",
            proof.quest_id,
            body.quest_id
        );
    }

    let check = proof.check_in(body);
    Ok(Verdict {
        quest_id: proof.quest_id,
        leaf_index: proof.leaf_index,
        root_hash: body.root_hash,
        computed_root: proof.fold_root(),
        root_matches: check.root_matches,
        leaf_matches: check.leaf_matches,
        cell_committed: check.cell_committed,
        coordinate_in_cell: check.coordinate_in_cell,
        claim_hash: proof.claim_hash(),
    })
}

fn main() -> Result<()> {
    let args = Args::parse();

    eprintln!("geoquest verifier v{}", env!("CARGO_PKG_VERSION"));

    let body = load_body(&args.quest)?;
    let proof = load_proof(&args.proof, args.binary)?;
    let verdict = verdict(&body, &proof)?;

    println!("{}", serde_json::to_string_pretty(&verdict)?);

    if !verdict.root_matches || !verdict.leaf_matches {
        anyhow::bail!("Proof does not match the committed root");
    }
    if !verdict.cell_committed {
        anyhow::bail!("Committed cell at leaf {} does not hash to its leaf", verdict.leaf_index);
    }
    if !verdict.coordinate_in_cell {
        anyhow::bail!("Claimed coordinate is outside the cell at leaf {}", verdict.leaf_index);
    }

    Ok(())
}
