//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying entries,
//! goals and progress in JSON, table and plain text form.

mod json;
mod text;

// Re-export public API
pub use json::{print_json, TrendJson};
pub use text::{
    entry_items, entry_row, goal_items, history_headers, print_goals, progress_headers,
    progress_row,
};
