//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (unhandled errors)
/// - 2: Misuse of shell command (clap argument errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const FAILURE: i32 = 1;

    /// Invalid user input, or refusing to overwrite existing files.
    pub const INVALID_INPUT: i32 = 4;

    /// The stored daily log could not be parsed.
    pub const CORRUPT_DATA: i32 = 6;
}

/// Width of the notes column in the history table.
pub const NOTES_MAX: usize = 40;
