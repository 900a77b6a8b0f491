//! Error types for Habits core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-facing messages and hints.
//!
//! The Goal Store never returns an error on load, so only the Entry Store
//! surfaces `CorruptData`.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for Habits operations.
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Core error type for Habits operations.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The persisted daily log could not be parsed as tabular data
    #[error("Corrupt data in {}: {reason}", path.display())]
    CorruptData { path: PathBuf, reason: String },

    /// Filesystem read/write failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl TrackerError {
    pub(crate) fn corrupt(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        TrackerError::CorruptData {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error means the stored log needs manual repair.
    pub fn is_corrupt_data(&self) -> bool {
        matches!(self, TrackerError::CorruptData { .. })
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::Storage(format!("JSON error: {}", err))
    }
}
