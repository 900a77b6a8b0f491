//! Path resolution for the config file and both stores.

use std::path::PathBuf;

use habits_core::StoreConfig;

use crate::cli::Cli;
use crate::config::{default_config_path, default_entries_path, default_goals_path, read_config};

/// Resolve the config file path, checking HABITS_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("HABITS_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve both store locations.
///
/// Each path comes from the CLI flag (or its env var), then the config
/// file, then the XDG data directory. A missing config file is fine.
pub fn resolve_store_config(cli: &Cli) -> anyhow::Result<StoreConfig> {
    let config_path = resolve_config_path()?;
    let storage = if config_path.exists() {
        read_config(&config_path)?.storage
    } else {
        tracing::debug!(path = %config_path.display(), "no config file; using defaults");
        Default::default()
    };

    let entries_path = match cli.entries.as_ref().or(storage.entries_path.as_ref()) {
        Some(path) => PathBuf::from(path),
        None => default_entries_path()?,
    };
    let goals_path = match cli.goals.as_ref().or(storage.goals_path.as_ref()) {
        Some(path) => PathBuf::from(path),
        None => default_goals_path()?,
    };

    Ok(StoreConfig::new(entries_path, goals_path))
}
