use std::fs;

use chrono::NaiveDate;
use tempfile::{tempdir, TempDir};

use habits_core::{EntryStore, LogEntry, Mood, StoreConfig};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn store_in(dir: &TempDir) -> EntryStore {
    EntryStore::from_config(&StoreConfig::in_dir(dir.path()))
}

fn first_day_entry(water_l: f64) -> LogEntry {
    LogEntry {
        date: date(2024, 1, 1),
        water_l,
        sleep_hrs: 7.0,
        exercise_mins: 30,
        mood: Mood::Happy,
        notes: String::new(),
        calories_kcal: 2000,
        meditation_mins: 10,
    }
}

#[test]
fn test_end_to_end_upsert_keeps_one_row_per_date() {
    let dir = tempdir().expect("tempdir");
    let store = store_in(&dir);
    assert!(store.load().expect("load empty").is_empty());

    let first = first_day_entry(2.0);
    store.upsert(first.clone()).expect("first upsert");
    assert_eq!(store.load().expect("load"), vec![first]);

    store.upsert(first_day_entry(3.0)).expect("second upsert");
    let entries = store.load().expect("load");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].water_l, 3.0);
}

#[test]
fn test_upsert_same_entry_twice_is_idempotent() {
    let dir = tempdir().expect("tempdir");
    let store = store_in(&dir);
    let entry = LogEntry {
        notes: "same".to_string(),
        ..first_day_entry(2.5)
    };

    store.upsert(entry.clone()).expect("upsert");
    let after_one = fs::read(store.path()).expect("read");
    store.upsert(entry.clone()).expect("upsert again");
    let after_two = fs::read(store.path()).expect("read");

    assert_eq!(after_one, after_two);
    assert_eq!(store.load().expect("load"), vec![entry]);
}

#[test]
fn test_legacy_file_is_backfilled_but_not_rewritten() {
    let dir = tempdir().expect("tempdir");
    let store = store_in(&dir);
    let legacy = "Date,Water (L),Sleep (Hrs),Exercise (Mins),Mood,Notes\n\
                  2023-05-01,2.0,7.0,30,Happy,\n\
                  2023-05-02,2.5,6.0,0,Tired,short night\n\
                  2023-05-03,3.1,8.5,45,Energetic,\n";
    fs::write(store.path(), legacy).expect("write legacy");

    let entries = store.load().expect("load legacy");
    assert_eq!(entries.len(), 3);
    for entry in &entries {
        assert_eq!(entry.calories_kcal, 2000);
        assert_eq!(entry.meditation_mins, 10);
    }
    assert_eq!(entries[1].notes, "short night");
    assert_eq!(fs::read_to_string(store.path()).expect("read"), legacy);
}

#[test]
fn test_upsert_into_legacy_file_migrates_layout() {
    let dir = tempdir().expect("tempdir");
    let store = store_in(&dir);
    fs::write(
        store.path(),
        "Date,Water (L),Sleep (Hrs),Exercise (Mins),Mood,Notes\n2023-05-01,2.0,7.0,30,Happy,\n",
    )
    .expect("write legacy");

    store.upsert(first_day_entry(2.0)).expect("upsert");

    let text = fs::read_to_string(store.path()).expect("read");
    assert!(text.starts_with(
        "Date,Water (L),Sleep (Hrs),Exercise (Mins),Mood,Notes,Calories (kcal),Meditation (Mins)\n"
    ));
    assert!(text.contains("2023-05-01,2.0,7.0,30,Happy,,2000,10\n"));
}

#[test]
fn test_persist_load_is_a_fixed_point() {
    let dir = tempdir().expect("tempdir");
    let store = store_in(&dir);
    // Hand-written file in a looser format than the one we emit.
    fs::write(
        store.path(),
        "Date,Water (L),Sleep (Hrs),Exercise (Mins),Mood,Notes,Calories (kcal),Meditation (Mins)\n\
         2024-01-02,2,7.5,30.0,neutral,\"commas, and \"\"quotes\"\"\",1900,5\n\
         2024-01-01,0.30000000000000004,8,0,Stressed,,2000.0,10\n",
    )
    .expect("write");

    store.persist(&store.load().expect("load")).expect("persist 1");
    let first = fs::read(store.path()).expect("read 1");
    store.persist(&store.load().expect("load")).expect("persist 2");
    let second = fs::read(store.path()).expect("read 2");

    assert_eq!(first, second);
    let entries = store.load().expect("load");
    assert_eq!(entries[0].mood, Mood::Neutral);
    assert_eq!(entries[0].notes, "commas, and \"quotes\"");
    assert_eq!(entries[1].water_l, 0.30000000000000004);
}

#[test]
fn test_corrupt_file_reports_corrupt_data() {
    let dir = tempdir().expect("tempdir");
    let store = store_in(&dir);
    fs::write(
        store.path(),
        "Date,Water (L),Sleep (Hrs),Exercise (Mins),Mood,Notes\n2023-05-01,2.0,7.0,30,Happy\n",
    )
    .expect("write");

    let err = store.load().expect_err("load should fail");
    assert!(err.is_corrupt_data());
    assert!(err.to_string().contains("data.csv"));
}

#[test]
fn test_unknown_mood_is_corrupt() {
    let dir = tempdir().expect("tempdir");
    let store = store_in(&dir);
    fs::write(
        store.path(),
        "Date,Water (L),Sleep (Hrs),Exercise (Mins),Mood,Notes\n2023-05-01,2.0,7.0,30,Grumpy,\n",
    )
    .expect("write");

    let err = store.load().expect_err("load should fail");
    assert!(err.is_corrupt_data());
    assert!(err.to_string().contains("Grumpy"));
}

#[test]
fn test_header_only_file_is_empty_log() {
    let dir = tempdir().expect("tempdir");
    let store = store_in(&dir);
    store.persist(&[]).expect("persist empty");

    assert!(store.path().exists());
    assert!(store.load().expect("load").is_empty());
}
