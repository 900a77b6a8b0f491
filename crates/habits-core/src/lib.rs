//! # Habits Core
//!
//! Core library for Habits - a single-user, file-backed daily wellness tracker.
//!
//! This crate owns the data model and the two stores independent of the CLI
//! interface.
//!
//! ## Architecture
//!
//! - **store**: Entry Store (CSV daily log, upsert-by-date, legacy back-fill)
//! - **goals**: Goal Store (JSON targets, field-level merge over defaults)
//! - **report**: Sorting, history, metric series and weekly goal progress
//! - **config**: File locations handed to both stores

pub mod config;
pub mod error;
pub mod fs;
pub mod goals;
pub mod report;
pub mod store;
pub mod types;

pub use config::StoreConfig;
pub use error::{Result, TrackerError};
pub use goals::{GoalSet, GoalStore};
pub use store::EntryStore;
pub use types::{LogEntry, Mood};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
