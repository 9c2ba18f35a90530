// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeclDupError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Generic error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, DeclDupError>;

// Allow `?` on std::io::Error by converting to DeclDupError::Io with unknown path.
impl From<std::io::Error> for DeclDupError {
    fn from(source: std::io::Error) -> Self {
        DeclDupError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl DeclDupError {
    /// Attaches a concrete path to an I/O error.
    #[must_use]
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        DeclDupError::Io {
            source,
            path: path.into(),
        }
    }
}

// Gracefully convert WalkDir errors
impl From<walkdir::Error> for DeclDupError {
    fn from(e: walkdir::Error) -> Self {
        DeclDupError::Other(e.to_string())
    }
}
