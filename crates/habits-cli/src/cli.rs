use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use habits_core::report::DEFAULT_HISTORY_LIMIT;
use habits_core::VERSION;

use crate::helpers::{parse_date, parse_metric, parse_mood, parse_sleep, parse_water};

/// Habits - a personal daily wellness tracker
#[derive(Parser)]
#[command(name = "habits")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the daily log (CSV)
    #[arg(long, global = true, env = "HABITS_ENTRIES", value_name = "PATH")]
    pub entries: Option<String>,

    /// Path to the goals record (JSON)
    #[arg(long, global = true, env = "HABITS_GOALS", value_name = "PATH")]
    pub goals: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols and table borders only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `log` command
///
/// Defaults match a fresh log form: today, 2.0 L, 7.0 h, 30 min, Happy.
#[derive(Args)]
pub struct LogArgs {
    /// Day being logged (YYYY-MM-DD, default today)
    #[arg(long, value_parser = parse_date)]
    pub date: Option<chrono::NaiveDate>,

    /// Water intake in liters (0-5)
    #[arg(long, default_value = "2.0", value_parser = parse_water)]
    pub water: f64,

    /// Sleep in hours (0-12)
    #[arg(long, default_value = "7.0", value_parser = parse_sleep)]
    pub sleep: f64,

    /// Exercise in minutes (0-300)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(0..=300))]
    pub exercise: u32,

    /// Mood (happy, neutral, stressed, tired, energetic)
    #[arg(long, default_value = "Happy", value_parser = parse_mood)]
    pub mood: habits_core::Mood,

    /// Free-text notes
    #[arg(long, default_value = "")]
    pub notes: String,

    /// Calories in kcal (0-10000)
    #[arg(long, default_value_t = 2000, value_parser = clap::value_parser!(u32).range(0..=10000))]
    pub calories: u32,

    /// Meditation in minutes (0-300)
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(0..=300))]
    pub meditation: u32,
}

/// Arguments for the `history` command
#[derive(Args)]
pub struct HistoryArgs {
    /// Number of most recent days to show (at least 1)
    #[arg(
        long,
        default_value_t = DEFAULT_HISTORY_LIMIT,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub limit: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `trends` command
#[derive(Args)]
pub struct TrendsArgs {
    /// Only chart one metric (water, sleep, exercise, calories, meditation)
    #[arg(long, value_parser = parse_metric)]
    pub metric: Option<habits_core::report::Metric>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for `goals show`
#[derive(Args)]
pub struct GoalsShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `goals set`; unset flags keep the current target
#[derive(Args)]
pub struct GoalsSetArgs {
    /// Daily water in liters (0-10)
    #[arg(long, value_parser = crate::helpers::parse_goal_water)]
    pub water: Option<f64>,

    /// Daily sleep in hours (0-24)
    #[arg(long, value_parser = crate::helpers::parse_goal_sleep)]
    pub sleep: Option<f64>,

    /// Weekly exercise in minutes (0-2000)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=2000))]
    pub exercise: Option<u32>,

    /// Daily calories in kcal (0-10000)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=10000))]
    pub calories: Option<u32>,

    /// Daily meditation in minutes (0-300)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=300))]
    pub meditation: Option<u32>,
}

#[derive(Subcommand)]
pub enum GoalsCommands {
    /// Show current targets
    Show(GoalsShowArgs),

    /// Update targets (all five are saved)
    Set(GoalsSetArgs),
}

/// Arguments for the `progress` command
#[derive(Args)]
pub struct ProgressArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default config file
    Init(InitArgs),

    /// Save the metrics for one day (replaces that day's entry)
    Log(LogArgs),

    /// Show the most recent days
    History(HistoryArgs),

    /// Chart each metric over time
    Trends(TrendsArgs),

    /// Show or update goals
    #[command(subcommand)]
    Goals(GoalsCommands),

    /// Compare the last 7 days with your goals
    Progress(ProgressArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
