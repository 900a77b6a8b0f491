use chrono::Local;

use habits_core::report::{recent_history, series, Metric, MetricSummary};
use habits_core::LogEntry;

use crate::app::AppContext;
use crate::cli::{HistoryArgs, LogArgs, TrendsArgs};
use crate::errors::store_error;
use crate::helpers::parse_output_format;
use crate::output::{entry_items, entry_row, history_headers, print_json, TrendJson};
use crate::ui::format::number;
use crate::ui::theme::{styled, styles};
use crate::ui::{bar_chart, header, hint, kv, receipt, table, UiContext};

const EMPTY_LOG_MESSAGE: &str = "No data available. Start tracking with `habits log`.";

/// Save one day's metrics, replacing anything already logged for that date.
pub fn handle_log(ctx: &AppContext, args: &LogArgs) -> anyhow::Result<()> {
    let store = ctx.entry_store()?;
    let entry = LogEntry {
        date: args.date.unwrap_or_else(|| Local::now().date_naive()),
        water_l: args.water,
        sleep_hrs: args.sleep,
        exercise_mins: args.exercise,
        mood: args.mood,
        notes: args.notes.clone(),
        calories_kcal: args.calories,
        meditation_mins: args.meditation,
    };

    let items = entry_items(&entry);
    store.upsert(entry).map_err(store_error)?;

    if !ctx.quiet() {
        let ui = ctx.ui(false, None);
        println!("{}", receipt(&ui, "Entry saved", &items));
    }
    Ok(())
}

/// Show the most recent days, newest first.
pub fn handle_history(ctx: &AppContext, args: &HistoryArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    let entries = ctx.entry_store()?.load().map_err(store_error)?;
    let history = recent_history(&entries, args.limit);

    let ui = ctx.ui(args.json, format);
    if ui.mode.is_json() {
        return print_json(&history);
    }
    if entries.is_empty() {
        println!("{}", EMPTY_LOG_MESSAGE);
        return Ok(());
    }

    if !ctx.quiet() {
        let context = format!("last {}", history.len());
        println!("{}", header(&ui, "history", Some(&context)));
    }
    let rows: Vec<Vec<String>> = history.iter().map(|e| entry_row(&ui, e)).collect();
    println!("{}", table(&ui, &history_headers(), &rows));
    Ok(())
}

/// Chart every metric (or one) over the whole log, oldest first.
pub fn handle_trends(ctx: &AppContext, args: &TrendsArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    let entries = ctx.entry_store()?.load().map_err(store_error)?;
    let metrics: Vec<Metric> = match args.metric {
        Some(metric) => vec![metric],
        None => Metric::ALL.to_vec(),
    };

    let ui = ctx.ui(args.json, format);
    if ui.mode.is_json() {
        let all: Vec<_> = metrics.iter().map(|m| (*m, series(&entries, *m))).collect();
        let trends: Vec<TrendJson> = all
            .iter()
            .map(|(metric, points)| TrendJson {
                metric: *metric,
                label: metric.label(),
                points: points.as_slice(),
                summary: MetricSummary::of(points),
            })
            .collect();
        return print_json(&trends);
    }
    if entries.is_empty() {
        println!("{}", EMPTY_LOG_MESSAGE);
        return Ok(());
    }

    if !ctx.quiet() {
        let context = format!("{} days", entries.len());
        println!("{}", header(&ui, "trends", Some(&context)));
    }
    for (i, metric) in metrics.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_trend(&ui, *metric, &entries);
    }
    if !ctx.quiet() && args.metric.is_none() {
        println!();
        println!("{}", hint(&ui, "habits trends --metric sleep"));
    }
    Ok(())
}

fn print_trend(ui: &UiContext, metric: Metric, entries: &[LogEntry]) {
    let points = series(entries, metric);
    println!("{}", styled(metric.label(), styles::bold(), ui.color));
    if let Some(summary) = MetricSummary::of(&points) {
        let stats = format!(
            "latest {}, min {}, max {}, mean {}",
            number(summary.latest),
            number(summary.min),
            number(summary.max),
            number(summary.mean)
        );
        println!("{}", kv(ui, "Summary", &stats));
    }
    let rows: Vec<(String, f64)> = points
        .iter()
        .map(|p| (p.date.to_string(), p.value))
        .collect();
    println!("{}", bar_chart(ui, &rows));
}
