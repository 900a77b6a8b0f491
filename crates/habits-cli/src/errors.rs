//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use habits_core::TrackerError;

use crate::constants::exit_codes;
use crate::ui::{error_message, UiContext};

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// The daily log exists but cannot be parsed
    CorruptData { message: String, hint: String },

    /// Invalid user input or a refused action
    InvalidInput {
        message: String,
        hint: Option<String>,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::CorruptData { message, .. } => write!(f, "{}", message),
            CliError::InvalidInput { message, .. } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::CorruptData { .. } => exit_codes::CORRUPT_DATA,
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
        }
    }

    fn hint(&self) -> Option<&str> {
        match self {
            CliError::CorruptData { hint, .. } => Some(hint),
            CliError::InvalidInput { hint, .. } => hint.as_deref(),
        }
    }

    /// Print error message to stderr and exit with appropriate code.
    pub fn exit(&self, ctx: &UiContext) -> ! {
        eprintln!("{}", error_message(ctx, &self.to_string(), self.hint()));
        std::process::exit(self.exit_code())
    }
}

impl From<TrackerError> for CliError {
    fn from(err: TrackerError) -> Self {
        match err {
            TrackerError::CorruptData { ref path, .. } => CliError::CorruptData {
                hint: format!(
                    "Fix or move {} by hand, then run the command again.",
                    path.display()
                ),
                message: err.to_string(),
            },
            other => CliError::InvalidInput {
                message: other.to_string(),
                hint: None,
            },
        }
    }
}

/// Convert a core error for `?` in handlers, keeping corrupt-data details.
pub fn store_error(err: TrackerError) -> anyhow::Error {
    match err {
        TrackerError::CorruptData { .. } => CliError::from(err).into(),
        other => anyhow::Error::new(other),
    }
}
