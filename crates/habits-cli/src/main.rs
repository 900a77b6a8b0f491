//! Habits CLI - a personal daily wellness tracker
//!
//! Logs one row of metrics per day into a CSV file, keeps goals in a JSON
//! record, and reports history, trends and weekly progress.

use clap::{CommandFactory, Parser};

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use app::AppContext;
use cli::{Cli, Commands, GoalsCommands};
use constants::exit_codes;
use errors::CliError;
use ui::{error_message, UiContext};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.no_color);

    if let Err(err) = run(&cli) {
        let ctx = UiContext::from_env(false, None, cli.no_color, cli.ascii);
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            cli_err.exit(&ctx);
        }
        tracing::debug!(error = ?err, "command failed");
        eprintln!("{}", error_message(&ctx, &format!("{:#}", err), None));
        std::process::exit(exit_codes::FAILURE);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let ctx = AppContext::new(cli);

    match &cli.command {
        Some(Commands::Init(args)) => commands::handle_init(&ctx, args),
        Some(Commands::Log(args)) => commands::handle_log(&ctx, args),
        Some(Commands::History(args)) => commands::handle_history(&ctx, args),
        Some(Commands::Trends(args)) => commands::handle_trends(&ctx, args),
        Some(Commands::Goals(GoalsCommands::Show(args))) => {
            commands::handle_goals_show(&ctx, args)
        }
        Some(Commands::Goals(GoalsCommands::Set(args))) => commands::handle_goals_set(&ctx, args),
        Some(Commands::Progress(args)) => commands::handle_progress(&ctx, args),
        Some(Commands::Completions(args)) => commands::handle_completions(args.shell),
        None => {
            let mut cmd = Cli::command();
            cmd.print_help()?;
            println!();
            Ok(())
        }
    }
}
