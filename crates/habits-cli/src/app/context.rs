//! Application context for the Habits CLI.
//!
//! Bundles CLI arguments with lazily resolved store locations.

use once_cell::unsync::OnceCell;

use habits_core::{EntryStore, GoalStore, StoreConfig};

use crate::cli::Cli;
use crate::ui::UiContext;

use super::resolver::resolve_store_config;

/// Application context that bundles CLI args with the store configuration.
///
/// This avoids resolving config files repeatedly and threading paths
/// through every handler.
pub struct AppContext<'a> {
    cli: &'a Cli,
    store_config: OnceCell<StoreConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            store_config: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Resolved store locations, loaded on first use.
    pub fn store_config(&self) -> anyhow::Result<&StoreConfig> {
        self.store_config
            .get_or_try_init(|| resolve_store_config(self.cli))
    }

    pub fn entry_store(&self) -> anyhow::Result<EntryStore> {
        Ok(EntryStore::from_config(self.store_config()?))
    }

    pub fn goal_store(&self) -> anyhow::Result<GoalStore> {
        Ok(GoalStore::from_config(self.store_config()?))
    }

    /// UI context for a command with the given output flags.
    pub fn ui(&self, json: bool, format: Option<&str>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii)
    }
}
