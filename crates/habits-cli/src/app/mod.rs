//! Application-level utilities for the Habits CLI.
//!
//! This module provides:
//! - Path resolution for the config file and both stores
//! - A per-invocation context that hands out stores

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use resolver::resolve_config_path;
