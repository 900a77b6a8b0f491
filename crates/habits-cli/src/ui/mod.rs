//! UI primitives for the Habits CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badges, ANSI styles, chart symbols
//! - **Render**: Tables, bar charts, receipts, hints, errors
//! - **Format**: String utilities (truncate, numbers, bar scaling)

mod context;
pub mod format;
pub mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;

pub use render::{bar_chart, error_message, header, hint, kv, receipt, table};
