// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use geoquest_cli::commands::{commit, distance, evaluate, inspect};
use geoquest_cli::telemetry;

#[derive(Parser)]
#[command(name = "geoquest")]
#[command(about = "Author quest commitments and check proof-of-presence claims", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Commit a quest draft (quest_id, hint_corners, cells) into a quest file
    Commit {
        draft: PathBuf,

        /// Output path for the quest file (stdout if omitted)
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// Show the leaves, root and hint of a quest file
    Inspect {
        quest: PathBuf,
    },
    /// Check whether a coordinate is inside the committed region and build a proof
    Evaluate {
        quest: PathBuf,

        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Write the proof JSON here instead of stdout
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// Distance label from a coordinate to the quest hint centroid
    Distance {
        quest: PathBuf,

        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
}

fn main() -> anyhow::Result<()> {
    telemetry::init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Commit { draft, out } => commit::run(&draft, out.as_deref()),
        Commands::Inspect { quest } => inspect::run(&quest),
        Commands::Evaluate {
            quest,
            lat,
            lon,
            out,
        } => evaluate::run(&quest, lat, lon, out.as_deref()).map(|_| ()),
        Commands::Distance { quest, lat, lon } => distance::run(&quest, lat, lon).map(|_| ()),
    }
}
