//! Error types for output materialization

use std::path::PathBuf;
use thiserror::Error;

/// Result type for materialization operations
pub type Result<T> = std::result::Result<T, MaterializeError>;

/// Errors that can occur while creating or populating the output tree
#[derive(Debug, Error)]
pub enum MaterializeError {
    /// Output path already exists; refusing to overwrite or merge
    #[error("Output path exists, bailing out: {path}")]
    OutputExists { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
