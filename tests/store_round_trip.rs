//! Integration tests for the task store's persistence behavior:
//! load/save round trips, the copy-on-save backup, and the first-run and
//! corrupt-file paths, all through the public API.

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use tick::store::{StoreError, TaskStore, file_io};

fn data_path(tmp: &TempDir) -> std::path::PathBuf {
    tmp.path().join("tasks.json")
}

#[test]
fn first_run_has_no_file_and_no_error() {
    let tmp = TempDir::new().unwrap();
    let store = TaskStore::open(data_path(&tmp)).unwrap();
    assert!(store.is_empty());
    assert!(!data_path(&tmp).exists());
}

#[test]
fn first_save_creates_the_file_fresh() {
    let tmp = TempDir::new().unwrap();
    let mut store = TaskStore::open(data_path(&tmp)).unwrap();
    store.add("first ever task").unwrap();
    store.save().unwrap();

    assert!(data_path(&tmp).exists());
    // No backup on the first save: there was nothing to back up
    assert!(!file_io::backup_path(&data_path(&tmp)).exists());
}

#[test]
fn save_load_round_trip_preserves_everything() {
    let tmp = TempDir::new().unwrap();
    let path = data_path(&tmp);

    let mut store = TaskStore::open(&path).unwrap();
    store.add("Buy milk").unwrap();
    store.add("Walk dog").unwrap();
    store.add("Water plants").unwrap();
    let dog_id = store
        .tasks()
        .iter()
        .find(|t| t.title == "Walk dog")
        .unwrap()
        .id
        .clone();
    store.toggle(&dog_id).unwrap();
    store.save().unwrap();

    let reloaded = TaskStore::open(&path).unwrap();
    assert_eq!(reloaded.tasks(), store.tasks());

    // Order is most-recently-added first
    let titles: Vec<_> = reloaded.tasks().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Water plants", "Walk dog", "Buy milk"]);
}

#[test]
fn save_backs_up_the_previous_file_bytes() {
    let tmp = TempDir::new().unwrap();
    let path = data_path(&tmp);

    let mut store = TaskStore::open(&path).unwrap();
    store.add("version one").unwrap();
    store.save().unwrap();
    let before = fs::read(&path).unwrap();

    store.add("version two").unwrap();
    store.save().unwrap();

    // Backup byte-equals the pre-save content; data file has the new state
    assert_eq!(fs::read(file_io::backup_path(&path)).unwrap(), before);
    let reloaded = TaskStore::open(&path).unwrap();
    assert_eq!(reloaded.len(), 2);
}

#[test]
fn corrupt_file_is_reported_and_preserved() {
    let tmp = TempDir::new().unwrap();
    let path = data_path(&tmp);
    fs::write(&path, "{ this is not a task list }").unwrap();

    let err = TaskStore::open(&path).unwrap_err();
    assert!(matches!(err, StoreError::Corrupt { .. }));
    // The message names the file so the dialog is actionable
    assert!(err.to_string().contains("tasks.json"));

    // Nothing touched the file
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "{ this is not a task list }"
    );

    // The session continues on an empty store; its first save preserves the
    // corrupt bytes in the backup before replacing the file
    let mut store = TaskStore::empty(&path);
    store.add("recovered").unwrap();
    store.save().unwrap();
    assert_eq!(
        fs::read_to_string(file_io::backup_path(&path)).unwrap(),
        "{ this is not a task list }"
    );
    assert_eq!(TaskStore::open(&path).unwrap().len(), 1);
}

#[test]
fn persisted_format_is_a_json_array_with_string_timestamps() {
    let tmp = TempDir::new().unwrap();
    let path = data_path(&tmp);

    let mut store = TaskStore::open(&path).unwrap();
    store.add("shape check").unwrap();
    store.save().unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 1);
    let obj = &array[0];
    assert!(obj["id"].is_string());
    assert_eq!(obj["title"], "shape check");
    assert_eq!(obj["completed"], false);
    assert!(obj["created_at"].as_str().unwrap().contains('T'));
}

#[test]
fn save_into_missing_directory_creates_it() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("not").join("yet").join("tasks.json");

    let mut store = TaskStore::open(&path).unwrap();
    store.add("deep").unwrap();
    store.save().unwrap();
    assert_eq!(TaskStore::open(&path).unwrap().len(), 1);
}

#[test]
fn repeated_saves_keep_only_the_latest_backup() {
    let tmp = TempDir::new().unwrap();
    let path = data_path(&tmp);

    let mut store = TaskStore::open(&path).unwrap();
    store.add("a").unwrap();
    store.save().unwrap();
    store.add("b").unwrap();
    store.save().unwrap();
    let second = fs::read(&path).unwrap();
    store.add("c").unwrap();
    store.save().unwrap();

    assert_eq!(fs::read(file_io::backup_path(&path)).unwrap(), second);
}
