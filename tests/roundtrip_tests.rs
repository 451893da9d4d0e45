use predicates::str::contains;
use std::env;
use std::fs;
use std::path::PathBuf;

mod common;
use common::{fp, init_db, setup_test_db, submit_entry};

#[test]
fn test_entries_survive_reload_in_order() {
    let db_path = setup_test_db("roundtrip_order");
    init_db(&db_path);

    submit_entry(&db_path, "Area one", "https://maps.example/@35.1,139.1,15z");
    submit_entry(&db_path, "Area two", "https://maps.example/@35.2,139.2,15z");
    submit_entry(&db_path, "Area three", "");

    // Each invocation is a fresh process: list twice and expect identical
    // reconstructions.
    let first = fp().args(["--db", &db_path, "list"]).assert().success();
    let second = fp().args(["--db", &db_path, "list"]).assert().success();
    assert_eq!(
        String::from_utf8_lossy(&first.get_output().stdout),
        String::from_utf8_lossy(&second.get_output().stdout)
    );

    let out = String::from_utf8_lossy(&first.get_output().stdout).to_string();
    let pos_one = out.find("Area one").expect("first entry present");
    let pos_two = out.find("Area two").expect("second entry present");
    let pos_three = out.find("Area three").expect("third entry present");
    assert!(pos_one < pos_two && pos_two < pos_three);

    assert!(out.contains("35.1, 139.1"));
    assert!(out.contains("35.2, 139.2"));
    assert!(out.contains("unknown"));
}

#[test]
fn test_delete_removes_exactly_one_row() {
    let db_path = setup_test_db("roundtrip_delete_one");
    init_db(&db_path);

    submit_entry(&db_path, "Keep A", "");
    submit_entry(&db_path, "Drop me", "");
    submit_entry(&db_path, "Keep B", "");

    fp().args(["--db", &db_path, "del", "2", "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    let assert = fp().args(["--db", &db_path, "list"]).assert().success();
    let out = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(out.contains("Keep A"));
    assert!(out.contains("Keep B"));
    assert!(!out.contains("Drop me"));
    assert!(out.contains("2 entries."));

    let pos_a = out.find("Keep A").unwrap();
    let pos_b = out.find("Keep B").unwrap();
    assert!(pos_a < pos_b);
}

#[test]
fn test_delete_only_entry_then_reload_is_empty() {
    let db_path = setup_test_db("roundtrip_delete_only");
    init_db(&db_path);

    submit_entry(&db_path, "Single", "");

    fp().args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .success();

    fp().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No entries."));
}

#[test]
fn test_delete_declined_leaves_table_unchanged() {
    let db_path = setup_test_db("roundtrip_delete_declined");
    init_db(&db_path);

    submit_entry(&db_path, "Still here", "");

    fp().args(["--db", &db_path, "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    fp().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Still here"));
}

#[test]
fn test_delete_invalid_index_fails() {
    let db_path = setup_test_db("roundtrip_delete_invalid");
    init_db(&db_path);

    submit_entry(&db_path, "Only", "");

    fp().args(["--db", &db_path, "del", "5", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No entry with index 5"));
}

#[test]
fn test_photo_reference_degrades_after_file_disappears() {
    let db_path = setup_test_db("roundtrip_photo_degrade");
    init_db(&db_path);

    let mut photo: PathBuf = env::temp_dir();
    photo.push("roundtrip_photo_degrade.jpg");
    fs::write(&photo, b"jpeg bytes").expect("write photo");
    let photo_path = photo.to_string_lossy().to_string();

    common::fill_minimal_draft(&db_path);
    fp().args(["--db", &db_path, "submit", "--photo", &photo_path])
        .assert()
        .success();

    // While the file exists the locator is shown
    fp().args(["--db", &db_path, "show", "1"])
        .assert()
        .success()
        .stdout(contains("roundtrip_photo_degrade.jpg"));

    // Simulate the next session: the blob is gone
    fs::remove_file(&photo).expect("remove photo");

    let assert = fp().args(["--db", &db_path, "show", "1"]).assert().success();
    let out = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(!out.contains("roundtrip_photo_degrade.jpg"));
    assert!(out.contains("none"));

    // Every other field is still intact
    fp().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("North ward"));
}

#[test]
fn test_corrupt_entries_value_degrades_to_empty_table() {
    use fieldpost::storage::sqlite::SqliteStore;
    use fieldpost::storage::{ENTRIES_KEY, Storage};

    let db_path = setup_test_db("roundtrip_corrupt_entries");
    init_db(&db_path);

    submit_entry(&db_path, "Will vanish", "");

    let mut store = SqliteStore::open(&db_path).expect("open store");
    store.set(ENTRIES_KEY, "[{broken").expect("set garbage");
    drop(store);

    fp().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No entries."));
}
