// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod coordinate;
pub mod id;

pub use coordinate::Coordinate;
pub use id::{LeafIndex, QuestId};
