//! Core data types for the daily log.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

/// Calories assumed for rows written before the calories column existed.
pub const BACKFILL_CALORIES_KCAL: u32 = 2000;

/// Meditation minutes assumed for rows written before the meditation column existed.
pub const BACKFILL_MEDITATION_MINS: u32 = 10;

/// How the user felt that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Neutral,
    Stressed,
    Tired,
    Energetic,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Neutral,
        Mood::Stressed,
        Mood::Tired,
        Mood::Energetic,
    ];

    /// Stored tag, e.g. "Happy".
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Neutral => "Neutral",
            Mood::Stressed => "Stressed",
            Mood::Tired => "Tired",
            Mood::Energetic => "Energetic",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = TrackerError;

    fn from_str(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                TrackerError::InvalidInput(format!(
                    "Unknown mood \"{}\" (expected one of: {})",
                    value,
                    Mood::ALL.map(|m| m.as_str()).join(", ")
                ))
            })
    }
}

/// One day's recorded wellness metrics.
///
/// `date` is the key: the Entry Store holds at most one entry per date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: NaiveDate,
    pub water_l: f64,
    pub sleep_hrs: f64,
    pub exercise_mins: u32,
    pub mood: Mood,
    pub notes: String,
    pub calories_kcal: u32,
    pub meditation_mins: u32,
}

impl LogEntry {
    /// Entry for `date` prefilled with the log form's starting values.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            water_l: 2.0,
            sleep_hrs: 7.0,
            exercise_mins: 30,
            mood: Mood::Happy,
            notes: String::new(),
            calories_kcal: BACKFILL_CALORIES_KCAL,
            meditation_mins: BACKFILL_MEDITATION_MINS,
        }
    }
}
