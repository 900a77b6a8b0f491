use chrono::Local;

use habits_core::report::GoalProgress;

use crate::app::AppContext;
use crate::cli::{GoalsSetArgs, GoalsShowArgs, ProgressArgs};
use crate::errors::store_error;
use crate::helpers::parse_output_format;
use crate::output::{goal_items, print_goals, print_json, progress_headers, progress_row};
use crate::ui::{header, kv, receipt, table};

pub fn handle_goals_show(ctx: &AppContext, args: &GoalsShowArgs) -> anyhow::Result<()> {
    let goals = ctx.goal_store()?.load();

    let ui = ctx.ui(args.json, None);
    if ui.mode.is_json() {
        return print_json(&goals);
    }
    if !ctx.quiet() {
        println!("{}", header(&ui, "goals", None));
    }
    print_goals(&ui, &goals);
    Ok(())
}

/// Apply the given targets over the current ones and save all five.
pub fn handle_goals_set(ctx: &AppContext, args: &GoalsSetArgs) -> anyhow::Result<()> {
    let store = ctx.goal_store()?;
    let mut goals = store.load();

    if let Some(value) = args.water {
        goals.daily_water_l = value;
    }
    if let Some(value) = args.sleep {
        goals.daily_sleep_hrs = value;
    }
    if let Some(value) = args.exercise {
        goals.weekly_exercise_mins = value;
    }
    if let Some(value) = args.calories {
        goals.daily_calories_kcal = value;
    }
    if let Some(value) = args.meditation {
        goals.daily_meditation_mins = value;
    }

    store.save(&goals).map_err(store_error)?;

    if !ctx.quiet() {
        let ui = ctx.ui(false, None);
        println!("{}", receipt(&ui, "Goals saved", &goal_items(&goals)));
    }
    Ok(())
}

/// Compare the last seven days (including today) with the goals.
pub fn handle_progress(ctx: &AppContext, args: &ProgressArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    let entries = ctx.entry_store()?.load().map_err(store_error)?;
    let goals = ctx.goal_store()?.load();
    let progress = GoalProgress::compute(&entries, &goals, Local::now().date_naive());

    let ui = ctx.ui(args.json, format);
    if ui.mode.is_json() {
        return print_json(&progress);
    }

    if !ctx.quiet() {
        let context = format!("{} to {}", progress.from, progress.to);
        println!("{}", header(&ui, "progress", Some(&context)));
    }
    println!(
        "{}",
        kv(&ui, "Days logged", &progress.days_logged.to_string())
    );
    let rows: Vec<Vec<String>> = progress
        .metrics
        .iter()
        .map(|p| progress_row(&ui, p))
        .collect();
    println!("{}", table(&ui, &progress_headers(), &rows));
    Ok(())
}
