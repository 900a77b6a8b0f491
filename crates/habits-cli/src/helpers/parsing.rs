//! Parsing helpers for dates, bounded measurements, moods and output format.
//!
//! The `parse_*` functions double as clap value parsers, so they return
//! `Result<_, String>`. Ranges match the limits of the log form.

use chrono::NaiveDate;

use habits_core::report::Metric;
use habits_core::Mood;

/// Parse a calendar day (YYYY-MM-DD).
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| format!("Invalid date (expected YYYY-MM-DD): {}", value))
}

fn parse_bounded(value: &str, min: f64, max: f64) -> Result<f64, String> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("Invalid number: {}", value))?;
    if !parsed.is_finite() || parsed < min || parsed > max {
        return Err(format!("{} is not in {}..={}", value, min, max));
    }
    Ok(parsed)
}

/// Daily water intake in liters.
pub fn parse_water(value: &str) -> Result<f64, String> {
    parse_bounded(value, 0.0, 5.0)
}

/// Hours slept.
pub fn parse_sleep(value: &str) -> Result<f64, String> {
    parse_bounded(value, 0.0, 12.0)
}

pub fn parse_goal_water(value: &str) -> Result<f64, String> {
    parse_bounded(value, 0.0, 10.0)
}

pub fn parse_goal_sleep(value: &str) -> Result<f64, String> {
    parse_bounded(value, 0.0, 24.0)
}

pub fn parse_mood(value: &str) -> Result<Mood, String> {
    value.parse::<Mood>().map_err(|e| e.to_string())
}

pub fn parse_metric(value: &str) -> Result<Metric, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "water" => Ok(Metric::Water),
        "sleep" => Ok(Metric::Sleep),
        "exercise" => Ok(Metric::Exercise),
        "calories" => Ok(Metric::Calories),
        "meditation" => Ok(Metric::Meditation),
        _ => Err(format!(
            "Unknown metric: {} (use water, sleep, exercise, calories or meditation)",
            value
        )),
    }
}

/// Validate `--format`.
pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<&str>> {
    match value {
        None => Ok(None),
        Some(format @ ("table" | "plain")) => Ok(Some(format)),
        Some(other) => Err(anyhow::anyhow!(
            "Unsupported format: {} (use table or plain)",
            other
        )),
    }
}
