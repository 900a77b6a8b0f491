use std::path::PathBuf;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_entries_path, default_goals_path, write_config, HabitsConfig};
use crate::errors::CliError;
use crate::ui::{hint, receipt};

/// Write a config file naming both store locations.
///
/// `--entries`/`--goals` are recorded when given, otherwise the XDG data
/// directory defaults. Existing configs are only replaced with `--force`.
pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input_with_hint(
            format!("Config already exists at {}", config_path.display()),
            "Run `habits init --force` to overwrite it.",
        )
        .into());
    }

    let cli = ctx.cli();
    let entries_path = match &cli.entries {
        Some(path) => PathBuf::from(path),
        None => default_entries_path()?,
    };
    let goals_path = match &cli.goals {
        Some(path) => PathBuf::from(path),
        None => default_goals_path()?,
    };

    let config = HabitsConfig::new(entries_path.clone(), goals_path.clone());
    write_config(&config_path, &config)?;
    tracing::debug!(path = %config_path.display(), "wrote config");

    if !ctx.quiet() {
        let ui = ctx.ui(false, None);
        println!(
            "{}",
            receipt(
                &ui,
                "Config written",
                &[
                    ("Config", config_path.display().to_string()),
                    ("Entries", entries_path.display().to_string()),
                    ("Goals", goals_path.display().to_string()),
                ],
            )
        );
        println!("{}", hint(&ui, "habits log --water 2.5 --mood happy"));
    }
    Ok(())
}
