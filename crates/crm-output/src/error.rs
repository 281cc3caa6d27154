//! Error types for output writers.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    // === File System ===
    /// Output file could not be created.
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing or flushing failed.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Encoding ===
    /// CSV serialization failed.
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed.
    #[error("failed to write JSON report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
