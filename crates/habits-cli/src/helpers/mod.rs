//! Argument parsing helpers for the CLI.
//!
//! This module provides utilities for:
//! - Date, bounded number, mood and metric parsing used by clap (`parsing`)
//! - Output format validation (`parsing`)

mod parsing;

// Re-export public API
pub use parsing::{
    parse_date, parse_goal_sleep, parse_goal_water, parse_metric, parse_mood, parse_output_format,
    parse_sleep, parse_water,
};
