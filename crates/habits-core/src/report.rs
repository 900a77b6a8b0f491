//! Read-only views over a loaded daily log: ordering, recent history,
//! per-metric series and weekly progress against goals.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::goals::GoalSet;
use crate::types::LogEntry;

/// Rows shown by the recent-history table unless told otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Days covered by [`GoalProgress`], ending today.
pub const PROGRESS_WINDOW_DAYS: i64 = 7;

/// Oldest first.
pub fn sorted_by_date(entries: &[LogEntry]) -> Vec<LogEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|entry| entry.date);
    sorted
}

/// Newest first, at most `limit` rows.
pub fn recent_history(entries: &[LogEntry], limit: usize) -> Vec<LogEntry> {
    let mut sorted = sorted_by_date(entries);
    sorted.reverse();
    sorted.truncate(limit);
    sorted
}

/// A charted measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Water,
    Sleep,
    Exercise,
    Calories,
    Meditation,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::Water,
        Metric::Sleep,
        Metric::Exercise,
        Metric::Calories,
        Metric::Meditation,
    ];

    /// Column label, matching the stored header.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Water => "Water (L)",
            Metric::Sleep => "Sleep (Hrs)",
            Metric::Exercise => "Exercise (Mins)",
            Metric::Calories => "Calories (kcal)",
            Metric::Meditation => "Meditation (Mins)",
        }
    }

    pub fn value(&self, entry: &LogEntry) -> f64 {
        match self {
            Metric::Water => entry.water_l,
            Metric::Sleep => entry.sleep_hrs,
            Metric::Exercise => f64::from(entry.exercise_mins),
            Metric::Calories => f64::from(entry.calories_kcal),
            Metric::Meditation => f64::from(entry.meditation_mins),
        }
    }
}

/// One point of a metric series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub date: NaiveDate,
    pub value: f64,
}

/// `(date, value)` points for one metric, oldest first.
pub fn series(entries: &[LogEntry], metric: Metric) -> Vec<Point> {
    sorted_by_date(entries)
        .iter()
        .map(|entry| Point {
            date: entry.date,
            value: metric.value(entry),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSummary {
    pub latest: f64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl MetricSummary {
    /// `None` for an empty series.
    pub fn of(points: &[Point]) -> Option<Self> {
        let latest = points.last()?.value;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for point in points {
            min = min.min(point.value);
            max = max.max(point.value);
            sum += point.value;
        }
        Some(Self {
            latest,
            min,
            max,
            mean: sum / points.len() as f64,
        })
    }
}

/// How one metric compares with its goal over the progress window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progress {
    pub metric: Metric,
    /// Daily average, or the window total for weekly exercise
    pub actual: f64,
    pub target: f64,
    pub met: bool,
}

/// Weekly progress against the current goals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub days_logged: usize,
    pub metrics: Vec<Progress>,
}

impl GoalProgress {
    /// Compare the window of [`PROGRESS_WINDOW_DAYS`] ending at `today`
    /// (inclusive) with `goals`.
    ///
    /// Daily metrics are averaged over logged days; exercise is totalled
    /// against the weekly goal. Calories count as met when the average
    /// stays at or under the target, every other metric when it reaches it.
    pub fn compute(entries: &[LogEntry], goals: &GoalSet, today: NaiveDate) -> Self {
        let from = today - Duration::days(PROGRESS_WINDOW_DAYS - 1);
        let window: Vec<&LogEntry> = entries
            .iter()
            .filter(|entry| entry.date >= from && entry.date <= today)
            .collect();
        let days_logged = window.len();

        // `sum` of an empty f64 iterator is -0.0.
        let total = |metric: Metric| {
            window
                .iter()
                .fold(0.0_f64, |acc, entry| acc + metric.value(entry))
        };
        let average = |metric: Metric| {
            if days_logged == 0 {
                0.0
            } else {
                total(metric) / days_logged as f64
            }
        };

        let reaches = |metric: Metric, actual: f64, target: f64| Progress {
            metric,
            actual,
            target,
            met: days_logged > 0 && actual >= target,
        };

        let calories = average(Metric::Calories);
        let calories_target = f64::from(goals.daily_calories_kcal);

        Self {
            from,
            to: today,
            days_logged,
            metrics: vec![
                reaches(Metric::Water, average(Metric::Water), goals.daily_water_l),
                reaches(Metric::Sleep, average(Metric::Sleep), goals.daily_sleep_hrs),
                reaches(
                    Metric::Exercise,
                    total(Metric::Exercise),
                    f64::from(goals.weekly_exercise_mins),
                ),
                Progress {
                    metric: Metric::Calories,
                    actual: calories,
                    target: calories_target,
                    met: days_logged > 0 && calories <= calories_target,
                },
                reaches(
                    Metric::Meditation,
                    average(Metric::Meditation),
                    f64::from(goals.daily_meditation_mins),
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, d).unwrap()
    }

    fn entry(d: u32, water: f64, exercise: u32) -> LogEntry {
        LogEntry {
            water_l: water,
            exercise_mins: exercise,
            ..LogEntry::new(day(d))
        }
    }

    #[test]
    fn test_recent_history_is_newest_first_and_limited() {
        let entries: Vec<LogEntry> = [3, 1, 12, 7, 5].iter().map(|d| entry(*d, 1.0, 0)).collect();
        let history = recent_history(&entries, 3);
        let dates: Vec<NaiveDate> = history.iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![day(12), day(7), day(5)]);
    }

    #[test]
    fn test_default_history_limit_is_ten() {
        let entries: Vec<LogEntry> = (1..=15).map(|d| entry(d, 1.0, 0)).collect();
        assert_eq!(recent_history(&entries, DEFAULT_HISTORY_LIMIT).len(), 10);
    }

    #[test]
    fn test_series_sorted_and_summarized() {
        let entries = vec![entry(2, 3.0, 0), entry(1, 1.0, 0), entry(3, 2.0, 0)];
        let points = series(&entries, Metric::Water);
        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![1.0, 3.0, 2.0]);

        let summary = MetricSummary::of(&points).unwrap();
        assert_eq!(summary.latest, 2.0);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 3.0);
        assert_eq!(summary.mean, 2.0);
        assert!(MetricSummary::of(&[]).is_none());
    }

    #[test]
    fn test_goal_progress_window_and_totals() {
        // day(1) falls outside the 7-day window ending at day(10).
        let entries = vec![
            entry(1, 9.0, 300),
            entry(4, 3.0, 60),
            entry(8, 4.0, 60),
            entry(10, 2.0, 40),
        ];
        let progress = GoalProgress::compute(&entries, &GoalSet::default(), day(10));

        assert_eq!(progress.from, day(4));
        assert_eq!(progress.days_logged, 3);

        let water = progress.metrics[0];
        assert_eq!(water.metric, Metric::Water);
        assert_eq!(water.actual, 3.0);
        assert!(water.met);

        let exercise = progress.metrics[2];
        assert_eq!(exercise.actual, 160.0);
        assert_eq!(exercise.target, 150.0);
        assert!(exercise.met);

        let calories = progress.metrics[3];
        assert_eq!(calories.actual, 2000.0);
        assert!(calories.met);
    }

    #[test]
    fn test_goal_progress_empty_window_meets_nothing() {
        let progress = GoalProgress::compute(&[], &GoalSet::default(), day(10));
        assert_eq!(progress.days_logged, 0);
        assert!(progress.metrics.iter().all(|p| !p.met && p.actual == 0.0));
    }

    #[test]
    fn test_goal_progress_empty_window_totals_are_positive_zero() {
        // Only day(1) is logged, outside the window ending at day(10).
        let progress = GoalProgress::compute(&[entry(1, 2.0, 45)], &GoalSet::default(), day(10));
        for p in &progress.metrics {
            assert!(p.actual.is_sign_positive(), "{:?} actual is {}", p.metric, p.actual);
        }
        let json = serde_json::to_value(&progress).unwrap();
        assert_eq!(json["metrics"][2]["actual"].to_string(), "0.0");
    }
}
