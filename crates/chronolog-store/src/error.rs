//! Memo store errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in memo store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Memo not found.
    #[error("Memo not found: {0}")]
    NotFound(String),

    /// Failed to create a workspace directory.
    #[error("Failed to create directory at {path}: {reason}")]
    CreateDirFailed { path: PathBuf, reason: String },

    /// Invalid memo ID.
    #[error("Invalid memo ID: {0}")]
    InvalidId(String),
}
