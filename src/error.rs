// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use thiserror::Error;

use crate::merkle::Hash256;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuestError {
    /// Malformed input shape: too few corners, inconsistent tree, bad coordinate.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Self-verification of a freshly built proof failed.
    #[error("Proof construction failed: expected root {expected}, computed {computed}")]
    ProofConstruction {
        expected: Hash256,
        computed: Hash256,
    },

    #[error("Receipt encoding error: {0}")]
    Encoding(String),

    /// The timestamp source could not produce a Unix time.
    #[error("Clock error: {0}")]
    Clock(String),
}

pub type Result<T> = std::result::Result<T, QuestError>;
