//! Command handlers, one function per subcommand.

mod entries;
mod goals;
mod init;
mod misc;

pub use entries::{handle_history, handle_log, handle_trends};
pub use goals::{handle_goals_set, handle_goals_show, handle_progress};
pub use init::handle_init;
pub use misc::handle_completions;
