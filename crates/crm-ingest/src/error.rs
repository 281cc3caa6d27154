//! Error types for export ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the input table.
///
/// Any of these is fatal for a run: nothing is transformed when the table
/// cannot be read.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV content.
    #[error("failed to parse CSV {source_name} at line {line}: {message}")]
    CsvParse {
        source_name: String,
        line: u64,
        message: String,
    },

    /// Input has no rows at all.
    #[error("CSV input is empty: {source_name}")]
    EmptyCsv { source_name: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
