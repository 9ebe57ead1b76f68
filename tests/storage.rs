mod common;

use common::day;
use habit_tracker::{HabitStore, StorageError};
use std::fs;

#[test]
fn missing_file_loads_as_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("habits.json");

    assert!(HabitStore::load(&path).is_empty());
    assert!(HabitStore::try_load(&path).unwrap().is_empty());
}

#[test]
fn corrupt_json_falls_back_to_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("habits.json");
    fs::write(&path, "{\"run\": [\"2024-01-01\"").unwrap();

    assert!(HabitStore::load(&path).is_empty());
    assert!(matches!(
        HabitStore::try_load(&path),
        Err(StorageError::Parse { .. })
    ));
}

#[test]
fn malformed_dates_and_non_list_values_count_as_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("habits.json");

    fs::write(&path, r#"{"run": ["2024-13-45"]}"#).unwrap();
    assert!(HabitStore::load(&path).is_empty());

    fs::write(&path, r#"{"run": 3}"#).unwrap();
    assert!(HabitStore::load(&path).is_empty());

    fs::write(&path, r#"["run"]"#).unwrap();
    assert!(HabitStore::load(&path).is_empty());
}

#[test]
fn save_then_load_reproduces_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("habits.json");

    let mut store = HabitStore::new();
    store.add_habit("Meditate");
    store.add_habit("read");
    store.add_habit("stretch");
    store.mark_done("meditate", day(2024, 1, 2));
    store.mark_done("meditate", day(2024, 1, 1));
    store.mark_done("read", day(2024, 1, 2));
    store.save(&path).unwrap();

    let loaded = HabitStore::load(&path);
    assert_eq!(loaded, store);
    let names: Vec<&str> = loaded.names().collect();
    assert_eq!(names, ["meditate", "read", "stretch"]);
}

#[test]
fn saved_file_is_readable_json_object_of_date_strings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("habits.json");

    let mut store = HabitStore::new();
    store.add_habit("run");
    store.mark_done("run", day(2024, 1, 3));
    store.save(&path).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value, serde_json::json!({ "run": ["2024-01-03"] }));
}

#[test]
fn save_into_missing_directory_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("habits.json");

    let err = HabitStore::new().save(&path).unwrap_err();
    assert!(matches!(err, StorageError::Io { .. }));
    assert!(err.to_string().contains("no-such-dir"));
}

#[test]
fn hand_written_file_keeps_key_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("habits.json");
    fs::write(&path, r#"{"walk": [], "code": ["2024-01-01"], "abc": []}"#).unwrap();

    let store = HabitStore::load(&path);
    let names: Vec<&str> = store.names().collect();
    assert_eq!(names, ["walk", "code", "abc"]);
    assert_eq!(store.get("code").unwrap().log(), vec![day(2024, 1, 1)]);
}
