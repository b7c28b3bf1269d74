//! Error types for dataset discovery and grouping

use std::path::PathBuf;
use thiserror::Error;

/// Result type for dataset operations
pub type Result<T> = std::result::Result<T, DatasetError>;

/// Errors that can occur while discovering or grouping dataset files
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Filename does not follow the `<label>_<id>` convention
    #[error("Malformed filename (expected <label>_<id>): {path}")]
    MalformedFilename { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
