//! Tabular layout of the daily log and migration of legacy rows.
//!
//! The canonical column set is defined once in [`COLUMNS`]. Files written
//! before the calories and meditation columns existed are detected from
//! their header row and migrated row by row onto a fully typed
//! [`LogEntry`]; the file itself is never rewritten by a load.

use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};

use crate::error::{Result, TrackerError};
use crate::types::{LogEntry, Mood, BACKFILL_CALORIES_KCAL, BACKFILL_MEDITATION_MINS};

pub const DATE: &str = "Date";
pub const WATER: &str = "Water (L)";
pub const SLEEP: &str = "Sleep (Hrs)";
pub const EXERCISE: &str = "Exercise (Mins)";
pub const MOOD: &str = "Mood";
pub const NOTES: &str = "Notes";
pub const CALORIES: &str = "Calories (kcal)";
pub const MEDITATION: &str = "Meditation (Mins)";

/// Column order of every file this crate writes.
pub const COLUMNS: [&str; 8] = [
    DATE, WATER, SLEEP, EXERCISE, MOOD, NOTES, CALORIES, MEDITATION,
];

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Layout generation of a stored log, detected from its header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVersion {
    /// Initial release: no calories or meditation columns (either may be
    /// missing).
    V1,
    /// Current layout with all eight columns.
    V2,
}

/// Header name -> field position for one file.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    date: usize,
    water: usize,
    sleep: usize,
    exercise: usize,
    mood: usize,
    notes: usize,
    calories: Option<usize>,
    meditation: Option<usize>,
}

impl ColumnMap {
    /// Locate every known column by name. Unknown extra columns are ignored.
    pub fn resolve(headers: &StringRecord) -> std::result::Result<Self, String> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &str| find(name).ok_or_else(|| format!("missing column \"{}\"", name));

        Ok(Self {
            date: require(DATE)?,
            water: require(WATER)?,
            sleep: require(SLEEP)?,
            exercise: require(EXERCISE)?,
            mood: require(MOOD)?,
            notes: require(NOTES)?,
            calories: find(CALORIES),
            meditation: find(MEDITATION),
        })
    }

    pub fn version(&self) -> SchemaVersion {
        if self.calories.is_some() && self.meditation.is_some() {
            SchemaVersion::V2
        } else {
            SchemaVersion::V1
        }
    }

    fn read(&self, record: &StringRecord) -> StoredRow {
        let field = |idx: usize| record.get(idx).unwrap_or("").to_string();
        // An empty cell in an added-later column counts as absent.
        let optional = |idx: Option<usize>| {
            idx.and_then(|i| record.get(i))
                .filter(|value| !value.trim().is_empty())
                .map(str::to_string)
        };

        StoredRow {
            date: field(self.date),
            water: field(self.water),
            sleep: field(self.sleep),
            exercise: field(self.exercise),
            mood: field(self.mood),
            notes: field(self.notes),
            calories: optional(self.calories),
            meditation: optional(self.meditation),
        }
    }
}

/// Raw row text, before parsing into domain types.
#[derive(Debug)]
pub struct StoredRow {
    pub date: String,
    pub water: String,
    pub sleep: String,
    pub exercise: String,
    pub mood: String,
    pub notes: String,
    pub calories: Option<String>,
    pub meditation: Option<String>,
}

impl StoredRow {
    /// Map a row of any schema version onto the current typed entry,
    /// back-filling columns that did not exist when it was written.
    pub fn migrate(self) -> std::result::Result<LogEntry, String> {
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .map_err(|e| format!("invalid date \"{}\": {}", self.date, e))?;
        let mood: Mood = self
            .mood
            .parse()
            .map_err(|_| format!("invalid mood \"{}\"", self.mood))?;

        Ok(LogEntry {
            date,
            water_l: parse_decimal(WATER, &self.water)?,
            sleep_hrs: parse_decimal(SLEEP, &self.sleep)?,
            exercise_mins: parse_count(EXERCISE, &self.exercise)?,
            mood,
            notes: self.notes,
            calories_kcal: match self.calories {
                Some(value) => parse_count(CALORIES, &value)?,
                None => BACKFILL_CALORIES_KCAL,
            },
            meditation_mins: match self.meditation {
                Some(value) => parse_count(MEDITATION, &value)?,
                None => BACKFILL_MEDITATION_MINS,
            },
        })
    }
}

fn parse_decimal(column: &str, value: &str) -> std::result::Result<f64, String> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("invalid number \"{}\" in {}", value, column))?;
    if !parsed.is_finite() || parsed < 0.0 {
        return Err(format!("{} must be a non-negative number, got {}", column, value));
    }
    Ok(parsed)
}

/// Whole counts. Integral decimal text such as `30.0` is accepted.
fn parse_count(column: &str, value: &str) -> std::result::Result<u32, String> {
    let trimmed = value.trim();
    if let Ok(parsed) = trimmed.parse::<u32>() {
        return Ok(parsed);
    }
    let parsed = parse_decimal(column, trimmed)?;
    if parsed.fract() != 0.0 || parsed > f64::from(u32::MAX) {
        return Err(format!("{} must be a whole number, got {}", column, value));
    }
    Ok(parsed as u32)
}

/// Decimal text with at least one fractional digit, e.g. `2.0`, `7.5`.
pub fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Parse a whole log file. `source` is only used in error messages.
pub fn decode(source: &Path, bytes: &[u8]) -> Result<(SchemaVersion, Vec<LogEntry>)> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| TrackerError::corrupt(source, format!("unreadable header: {}", e)))?
        .clone();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(TrackerError::corrupt(source, "missing header row"));
    }
    let columns = ColumnMap::resolve(&headers).map_err(|reason| TrackerError::corrupt(source, reason))?;

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| TrackerError::corrupt(source, e.to_string()))?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let entry = columns
            .read(&record)
            .migrate()
            .map_err(|reason| TrackerError::corrupt(source, format!("line {}: {}", line, reason)))?;
        entries.push(entry);
    }

    Ok((columns.version(), entries))
}

/// Serialize entries in the current layout, header first.
pub fn encode(entries: &[LogEntry]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    let csv_error = |e: csv::Error| TrackerError::Storage(format!("CSV error: {}", e));

    writer.write_record(COLUMNS).map_err(csv_error)?;
    for entry in entries {
        writer
            .write_record([
                entry.date.format(DATE_FORMAT).to_string(),
                format_decimal(entry.water_l),
                format_decimal(entry.sleep_hrs),
                entry.exercise_mins.to_string(),
                entry.mood.to_string(),
                entry.notes.clone(),
                entry.calories_kcal.to_string(),
                entry.meditation_mins.to_string(),
            ])
            .map_err(csv_error)?;
    }

    writer
        .into_inner()
        .map_err(|e| TrackerError::Storage(format!("CSV flush failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> &'static Path {
        Path::new("data.csv")
    }

    #[test]
    fn test_format_decimal_keeps_fraction_digit() {
        assert_eq!(format_decimal(2.0), "2.0");
        assert_eq!(format_decimal(7.5), "7.5");
        assert_eq!(format_decimal(0.0), "0.0");
        assert_eq!(format_decimal(2.3), "2.3");
    }

    #[test]
    fn test_decode_current_layout() {
        let text = "Date,Water (L),Sleep (Hrs),Exercise (Mins),Mood,Notes,Calories (kcal),Meditation (Mins)\n\
                    2024-01-02,2.5,6.5,45,Tired,\"late night, gym\",2300,0\n";
        let (version, entries) = decode(source(), text.as_bytes()).unwrap();
        assert_eq!(version, SchemaVersion::V2);
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(entry.water_l, 2.5);
        assert_eq!(entry.mood, Mood::Tired);
        assert_eq!(entry.notes, "late night, gym");
        assert_eq!(entry.calories_kcal, 2300);
        assert_eq!(entry.meditation_mins, 0);
    }

    #[test]
    fn test_decode_legacy_layout_backfills() {
        let text = "Date,Water (L),Sleep (Hrs),Exercise (Mins),Mood,Notes\n\
                    2023-06-01,3.0,8.0,60,Happy,\n\
                    2023-06-02,1.5,5.0,0,Stressed,deadline\n";
        let (version, entries) = decode(source(), text.as_bytes()).unwrap();
        assert_eq!(version, SchemaVersion::V1);
        assert_eq!(entries.len(), 2);
        for entry in &entries {
            assert_eq!(entry.calories_kcal, 2000);
            assert_eq!(entry.meditation_mins, 10);
        }
    }

    #[test]
    fn test_decode_partial_legacy_keeps_present_column() {
        let text = "Date,Water (L),Sleep (Hrs),Exercise (Mins),Mood,Notes,Calories (kcal)\n\
                    2023-07-01,2.0,7.0,30,Neutral,,1800\n";
        let (version, entries) = decode(source(), text.as_bytes()).unwrap();
        assert_eq!(version, SchemaVersion::V1);
        assert_eq!(entries[0].calories_kcal, 1800);
        assert_eq!(entries[0].meditation_mins, 10);
    }

    #[test]
    fn test_decode_accepts_float_counts_and_reordered_columns() {
        let text = "Mood,Date,Notes,Water (L),Sleep (Hrs),Exercise (Mins),Meditation (Mins),Calories (kcal)\n\
                    Energetic,2023-08-01,,2,7.5,30.0,15.0,2100.0\n";
        let (_, entries) = decode(source(), text.as_bytes()).unwrap();
        let entry = &entries[0];
        assert_eq!(entry.mood, Mood::Energetic);
        assert_eq!(entry.water_l, 2.0);
        assert_eq!(entry.exercise_mins, 30);
        assert_eq!(entry.meditation_mins, 15);
        assert_eq!(entry.calories_kcal, 2100);
    }

    #[test]
    fn test_decode_rejects_unequal_row_length() {
        let text = "Date,Water (L),Sleep (Hrs),Exercise (Mins),Mood,Notes\n\
                    2023-06-01,3.0,8.0\n";
        let err = decode(source(), text.as_bytes()).unwrap_err();
        assert!(err.is_corrupt_data());
    }

    #[test]
    fn test_decode_rejects_bad_values_with_line() {
        let text = "Date,Water (L),Sleep (Hrs),Exercise (Mins),Mood,Notes\n\
                    2023-06-01,3.0,8.0,60,Happy,\n\
                    06/02/2023,3.0,8.0,60,Happy,\n";
        let err = decode(source(), text.as_bytes()).unwrap_err();
        let message = err.to_string();
        assert!(err.is_corrupt_data());
        assert!(message.contains("line 3"), "message: {}", message);
        assert!(message.contains("invalid date"));
    }

    #[test]
    fn test_decode_rejects_missing_required_column() {
        let text = "Date,Water (L),Mood\n2023-06-01,3.0,Happy\n";
        let err = decode(source(), text.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("missing column \"Sleep (Hrs)\""));
    }

    #[test]
    fn test_decode_rejects_empty_file() {
        let err = decode(source(), b"").unwrap_err();
        assert!(err.is_corrupt_data());
    }

    #[test]
    fn test_decode_rejects_negative_and_fractional_counts() {
        let header = "Date,Water (L),Sleep (Hrs),Exercise (Mins),Mood,Notes\n";
        let negative = format!("{}2023-06-01,-1.0,8.0,60,Happy,\n", header);
        assert!(decode(source(), negative.as_bytes()).is_err());
        let fractional = format!("{}2023-06-01,1.0,8.0,12.5,Happy,\n", header);
        assert!(decode(source(), fractional.as_bytes()).is_err());
    }

    #[test]
    fn test_encode_writes_header_and_quotes_notes() {
        let mut entry = LogEntry::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        entry.notes = "ran 5k, felt \"great\"".to_string();
        let bytes = encode(&[entry]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            "Date,Water (L),Sleep (Hrs),Exercise (Mins),Mood,Notes,Calories (kcal),Meditation (Mins)\n\
             2024-01-01,2.0,7.0,30,Happy,\"ran 5k, felt \"\"great\"\"\",2000,10\n"
        );
    }

    #[test]
    fn test_encode_empty_is_header_only() {
        let text = String::from_utf8(encode(&[]).unwrap()).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("Date,"));
    }
}
