//! Store locations.

use std::path::{Path, PathBuf};

/// Default file name for the daily log inside a data directory.
pub const DEFAULT_ENTRIES_FILE: &str = "data.csv";

/// Default file name for the goals record inside a data directory.
pub const DEFAULT_GOALS_FILE: &str = "goals.json";

/// File locations for both stores, passed in at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path to the CSV daily log
    pub entries_path: PathBuf,
    /// Path to the JSON goals record
    pub goals_path: PathBuf,
}

impl StoreConfig {
    pub fn new(entries_path: impl Into<PathBuf>, goals_path: impl Into<PathBuf>) -> Self {
        Self {
            entries_path: entries_path.into(),
            goals_path: goals_path.into(),
        }
    }

    /// Both files under one directory with their default names.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(DEFAULT_ENTRIES_FILE), dir.join(DEFAULT_GOALS_FILE))
    }
}
