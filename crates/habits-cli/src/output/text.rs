//! Text and table output formatting for entries, goals and progress.

use habits_core::report::{Metric, Progress};
use habits_core::store::schema::COLUMNS;
use habits_core::{GoalSet, LogEntry};

use crate::constants::NOTES_MAX;
use crate::ui::format::{number, single_line, truncate};
use crate::ui::theme::{MET, MISSED};
use crate::ui::{kv, UiContext};

/// History table headers, same names and order as the stored columns.
pub fn history_headers() -> [&'static str; 8] {
    COLUMNS
}

/// One history row, columns in stored order.
///
/// Plain mode keeps rows whitespace-separable, so notes are quoted there.
pub fn entry_row(ctx: &UiContext, entry: &LogEntry) -> Vec<String> {
    let notes = truncate(&single_line(&entry.notes), NOTES_MAX);
    let notes = if ctx.mode.is_pretty() {
        notes
    } else {
        format!("{:?}", notes)
    };
    vec![
        entry.date.to_string(),
        number(entry.water_l),
        number(entry.sleep_hrs),
        entry.exercise_mins.to_string(),
        entry.mood.to_string(),
        notes,
        entry.calories_kcal.to_string(),
        entry.meditation_mins.to_string(),
    ]
}

/// Key-value lines for a saved entry.
pub fn entry_items(entry: &LogEntry) -> Vec<(&'static str, String)> {
    vec![
        ("Date", entry.date.to_string()),
        ("Water (L)", number(entry.water_l)),
        ("Sleep (Hrs)", number(entry.sleep_hrs)),
        ("Exercise (Mins)", entry.exercise_mins.to_string()),
        ("Mood", entry.mood.to_string()),
        ("Calories (kcal)", entry.calories_kcal.to_string()),
        ("Meditation (Mins)", entry.meditation_mins.to_string()),
    ]
}

/// Key-value lines for the goal targets.
pub fn goal_items(goals: &GoalSet) -> Vec<(&'static str, String)> {
    vec![
        ("Daily Water (L)", number(goals.daily_water_l)),
        ("Daily Sleep (Hrs)", number(goals.daily_sleep_hrs)),
        ("Weekly Exercise (Mins)", goals.weekly_exercise_mins.to_string()),
        ("Daily Calories (kcal)", goals.daily_calories_kcal.to_string()),
        ("Daily Meditation (Mins)", goals.daily_meditation_mins.to_string()),
    ]
}

pub fn print_goals(ctx: &UiContext, goals: &GoalSet) {
    for (key, value) in goal_items(goals) {
        println!("{}", kv(ctx, key, &value));
    }
}

pub fn progress_headers() -> [&'static str; 4] {
    ["Metric", "Actual", "Goal", "Met"]
}

pub fn progress_row(ctx: &UiContext, progress: &Progress) -> Vec<String> {
    let label = match progress.metric {
        Metric::Exercise => "Exercise (Mins, total)",
        other => other.label(),
    };
    let met = if progress.met { &MET } else { &MISSED };
    vec![
        label.to_string(),
        number(progress.actual),
        number(progress.target),
        met.get(ctx.unicode).to_string(),
    ]
}
