//! Output module for the persisted harvest artifacts
//!
//! Two artifacts leave the pipeline:
//! - the link file: append-only text, one absolute article URL per line
//! - the record file: CSV with one sanitized row per processed URL

pub mod links;
pub mod records;

pub use links::{append_links, read_links};
pub use records::{read_records, sanitize, write_records};

use thiserror::Error;

/// Errors that can occur while writing or reading artifacts
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
