//! Unified converter error type used across all phases.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse investigation JSON: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    #[error("investigation has no publicReleaseDate")]
    MissingDate,

    #[error("invalid publicReleaseDate '{value}'")]
    InvalidDate { value: String },

    #[error("failed to serialize RO-Crate document: {source}")]
    Render {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}
