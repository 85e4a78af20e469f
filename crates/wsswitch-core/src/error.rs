//! Errors returned by the core library.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SwitcherError {
    #[error("Not a workspace file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("Invalid workspace name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode workspace file: {0}")]
    Json(#[from] serde_json::Error),
}

impl SwitcherError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SwitcherError>;
