//! JSON output formatting.

use serde::Serialize;

use habits_core::report::{Metric, MetricSummary, Point};

/// Print any serializable value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One metric's series and summary, as emitted by `trends --json`.
#[derive(Serialize)]
pub struct TrendJson<'a> {
    pub metric: Metric,
    pub label: &'static str,
    pub points: &'a [Point],
    pub summary: Option<MetricSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_trend_json_shape() {
        let points = vec![Point {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            value: 2.5,
        }];
        let trend = TrendJson {
            metric: Metric::Water,
            label: Metric::Water.label(),
            summary: MetricSummary::of(&points),
            points: &points,
        };
        let value = serde_json::to_value(&trend).unwrap();
        assert_eq!(value["metric"], "water");
        assert_eq!(value["label"], "Water (L)");
        assert_eq!(value["points"][0]["date"], "2024-01-01");
        assert_eq!(value["summary"]["max"], 2.5);
    }
}
