//! Goal Store: the user's numeric targets, kept as a small JSON record.
//!
//! Loading never fails: a record that is absent or cannot be parsed yields
//! the defaults, and each stored field is merged over the defaults on its own.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::StoreConfig;
use crate::error::Result;
use crate::fs::write_replace;

pub const KEY_WATER: &str = "daily_water_l";
pub const KEY_SLEEP: &str = "daily_sleep_hrs";
pub const KEY_EXERCISE: &str = "weekly_exercise_mins";
pub const KEY_CALORIES: &str = "daily_calories_kcal";
pub const KEY_MEDITATION: &str = "daily_meditation_mins";

/// Targets for each tracked metric. Every field always has a value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalSet {
    pub daily_water_l: f64,
    pub daily_sleep_hrs: f64,
    pub weekly_exercise_mins: u32,
    pub daily_calories_kcal: u32,
    pub daily_meditation_mins: u32,
}

impl Default for GoalSet {
    fn default() -> Self {
        Self {
            daily_water_l: 3.0,
            daily_sleep_hrs: 8.0,
            weekly_exercise_mins: 150,
            daily_calories_kcal: 2000,
            daily_meditation_mins: 10,
        }
    }
}

impl GoalSet {
    /// Parse a stored record and merge it over the defaults.
    ///
    /// Returns `None` when the text is not a JSON object. Keys that are
    /// missing or hold the wrong type keep their default; unknown keys are
    /// ignored.
    pub fn try_parse(text: &str) -> Option<GoalSet> {
        let value: Value = serde_json::from_str(text).ok()?;
        let object = value.as_object()?;
        Some(Self::default().overlay(object))
    }

    fn overlay(mut self, object: &Map<String, Value>) -> Self {
        if let Some(v) = decimal_field(object, KEY_WATER) {
            self.daily_water_l = v;
        }
        if let Some(v) = decimal_field(object, KEY_SLEEP) {
            self.daily_sleep_hrs = v;
        }
        if let Some(v) = count_field(object, KEY_EXERCISE) {
            self.weekly_exercise_mins = v;
        }
        if let Some(v) = count_field(object, KEY_CALORIES) {
            self.daily_calories_kcal = v;
        }
        if let Some(v) = count_field(object, KEY_MEDITATION) {
            self.daily_meditation_mins = v;
        }
        self
    }
}

fn decimal_field(object: &Map<String, Value>, key: &str) -> Option<f64> {
    let value = object.get(key)?;
    match value.as_f64() {
        Some(v) if v.is_finite() && v >= 0.0 => Some(v),
        _ => {
            tracing::warn!(key, %value, "ignoring goal value; using default");
            None
        }
    }
}

fn count_field(object: &Map<String, Value>, key: &str) -> Option<u32> {
    let value = object.get(key)?;
    let parsed = value
        .as_u64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|v| v.is_finite() && *v >= 0.0 && v.fract() == 0.0)
                .map(|v| v as u64)
        })
        .and_then(|v| u32::try_from(v).ok());
    if parsed.is_none() {
        tracing::warn!(key, %value, "ignoring goal value; using default");
    }
    parsed
}

/// File-backed [`GoalSet`].
#[derive(Debug, Clone)]
pub struct GoalStore {
    path: PathBuf,
}

impl GoalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.goals_path.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the goals, falling back to defaults on any problem.
    ///
    /// Never fails. Fallbacks are reported through `tracing` only.
    pub fn load(&self) -> GoalSet {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no goals saved yet; using defaults");
                return GoalSet::default();
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "goals unreadable; using defaults");
                return GoalSet::default();
            }
        };

        match GoalSet::try_parse(&text) {
            Some(goals) => goals,
            None => {
                tracing::warn!(path = %self.path.display(), "goals file is malformed; using defaults");
                GoalSet::default()
            }
        }
    }

    /// Overwrite the stored record with all five fields.
    pub fn save(&self, goals: &GoalSet) -> Result<()> {
        let mut text = serde_json::to_string_pretty(goals)?;
        text.push('\n');
        write_replace(&self.path, text.as_bytes())?;
        tracing::debug!(path = %self.path.display(), "saved goals");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let goals = GoalSet::default();
        assert_eq!(goals.daily_water_l, 3.0);
        assert_eq!(goals.daily_sleep_hrs, 8.0);
        assert_eq!(goals.weekly_exercise_mins, 150);
        assert_eq!(goals.daily_calories_kcal, 2000);
        assert_eq!(goals.daily_meditation_mins, 10);
    }

    #[test]
    fn test_try_parse_merges_present_fields() {
        let goals = GoalSet::try_parse(r#"{"daily_water_l": 4.0, "daily_meditation_mins": 20}"#)
            .unwrap();
        assert_eq!(
            goals,
            GoalSet {
                daily_water_l: 4.0,
                daily_meditation_mins: 20,
                ..GoalSet::default()
            }
        );
    }

    #[test]
    fn test_try_parse_rejects_non_objects() {
        assert!(GoalSet::try_parse("not json").is_none());
        assert!(GoalSet::try_parse("[1, 2]").is_none());
        assert!(GoalSet::try_parse("").is_none());
    }

    #[test]
    fn test_try_parse_wrong_types_keep_defaults() {
        let goals = GoalSet::try_parse(
            r#"{"daily_water_l": "lots", "weekly_exercise_mins": -5, "daily_calories_kcal": 1800.0, "extra": true}"#,
        )
        .unwrap();
        assert_eq!(goals.daily_water_l, 3.0);
        assert_eq!(goals.weekly_exercise_mins, 150);
        assert_eq!(goals.daily_calories_kcal, 1800);
    }

    #[test]
    fn test_integer_accepted_for_decimal_goal() {
        let goals = GoalSet::try_parse(r#"{"daily_sleep_hrs": 7}"#).unwrap();
        assert_eq!(goals.daily_sleep_hrs, 7.0);
    }

    #[test]
    fn test_save_writes_all_keys() {
        let dir = tempdir().unwrap();
        let store = GoalStore::new(dir.path().join("goals.json"));
        store.save(&GoalSet::default()).unwrap();

        let text = fs::read_to_string(store.path()).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        let object = value.as_object().unwrap();
        for key in [KEY_WATER, KEY_SLEEP, KEY_EXERCISE, KEY_CALORIES, KEY_MEDITATION] {
            assert!(object.contains_key(key), "missing {}", key);
        }
        assert_eq!(object.len(), 5);
    }

    #[test]
    fn test_load_unreadable_path_falls_back() {
        let dir = tempdir().unwrap();
        // A directory where the file should be cannot be read as text.
        let store = GoalStore::new(dir.path());
        assert_eq!(store.load(), GoalSet::default());
    }
}
