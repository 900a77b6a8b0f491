//! Entry Store: the CSV-backed daily log, keyed by date.
//!
//! Every mutation rewrites the whole file through a temp sibling and a
//! rename, so a reader never observes two rows for the same date.

pub mod schema;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::config::StoreConfig;
use crate::error::Result;
use crate::fs::write_replace;
use crate::types::LogEntry;

use self::schema::SchemaVersion;

/// File-backed table of [`LogEntry`] rows, at most one per date.
#[derive(Debug, Clone)]
pub struct EntryStore {
    path: PathBuf,
}

impl EntryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.entries_path.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every stored entry in file order.
    ///
    /// A missing file is an empty log. Legacy files are back-filled in
    /// memory; the file on disk is left as it is.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::CorruptData` if the file is not valid tabular
    /// data in a known layout, and `TrackerError::Storage` if it cannot be read.
    pub fn load(&self) -> Result<Vec<LogEntry>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no daily log yet");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        let (version, entries) = schema::decode(&self.path, &bytes)?;
        if version == SchemaVersion::V1 && !entries.is_empty() {
            tracing::debug!(
                path = %self.path.display(),
                rows = entries.len(),
                "legacy daily log without calories/meditation columns; back-filled in memory"
            );
        }
        tracing::debug!(path = %self.path.display(), rows = entries.len(), ?version, "loaded daily log");
        Ok(entries)
    }

    /// Look up the entry for one date.
    pub fn get(&self, date: NaiveDate) -> Result<Option<LogEntry>> {
        Ok(self.load()?.into_iter().find(|entry| entry.date == date))
    }

    /// Insert or replace the entry for `entry.date`, then persist.
    ///
    /// Any existing row for that date is dropped and the new one is
    /// appended at the end.
    pub fn upsert(&self, entry: LogEntry) -> Result<()> {
        let mut entries = self.load()?;
        let before = entries.len();
        entries.retain(|existing| existing.date != entry.date);
        tracing::debug!(
            date = %entry.date,
            replaced = before - entries.len(),
            "upserting daily entry"
        );
        entries.push(entry);
        self.persist(&entries)
    }

    /// Write the full sequence in the current layout, replacing the file.
    pub fn persist(&self, entries: &[LogEntry]) -> Result<()> {
        let bytes = schema::encode(entries)?;
        write_replace(&self.path, &bytes)?;
        tracing::debug!(path = %self.path.display(), rows = entries.len(), "persisted daily log");
        Ok(())
    }
}
