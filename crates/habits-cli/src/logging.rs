//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr so stdout stays parseable. The filter comes
//! from `HABITS_LOG` (e.g. `HABITS_LOG=debug`), defaulting to warnings.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "HABITS_LOG";

/// Install the stderr subscriber. `no_color` is the `--no-color` flag.
pub fn init(no_color: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let ansi = use_ansi(
        no_color,
        std::env::var_os("NO_COLOR").is_some(),
        std::io::stderr().is_terminal(),
    );
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .without_time()
        .with_target(false)
        .try_init();
}

/// Colored diagnostics only on a terminal, and never when color is turned off.
fn use_ansi(no_color_flag: bool, no_color_env: bool, stderr_is_tty: bool) -> bool {
    stderr_is_tty && !no_color_flag && !no_color_env
}
