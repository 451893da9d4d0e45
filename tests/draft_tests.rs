use predicates::str::contains;

mod common;
use common::{fp, init_db, setup_test_db};

use fieldpost::storage::sqlite::SqliteStore;
use fieldpost::storage::{DRAFT_KEY, Storage};

#[test]
fn test_draft_set_and_print() {
    let db_path = setup_test_db("draft_set_print");
    init_db(&db_path);

    fp().args([
        "--db",
        &db_path,
        "draft",
        "--kana",
        "スズキ ハナコ",
        "--org",
        "Red Cross",
        "--area",
        "East district",
    ])
    .assert()
    .success()
    .stdout(contains("Draft saved."));

    fp().args(["--db", &db_path, "draft", "--print"])
        .assert()
        .success()
        .stdout(contains("スズキ ハナコ"))
        .stdout(contains("Red Cross"))
        .stdout(contains("East district"))
        .stdout(contains("incident type is required"));
}

#[test]
fn test_draft_save_is_idempotent() {
    let db_path = setup_test_db("draft_idempotent");
    init_db(&db_path);

    for _ in 0..2 {
        fp().args(["--db", &db_path, "draft", "--memo", "water rising"])
            .assert()
            .success();
    }

    fp().args(["--db", &db_path, "draft", "--print"])
        .assert()
        .success()
        .stdout(contains("water rising"));
}

#[test]
fn test_draft_clear_after_edits_loads_empty() {
    let db_path = setup_test_db("draft_clear");
    init_db(&db_path);

    // Three separate "keystrokes"
    fp().args(["--db", &db_path, "draft", "--kana", "ヤ"])
        .assert()
        .success();
    fp().args(["--db", &db_path, "draft", "--kana", "ヤマ"])
        .assert()
        .success();
    fp().args(["--db", &db_path, "draft", "--kana", "ヤマダ"])
        .assert()
        .success();

    fp().args(["--db", &db_path, "draft", "--clear", "--yes"])
        .assert()
        .success()
        .stdout(contains("Draft cleared."));

    fp().args(["--db", &db_path, "draft", "--print"])
        .assert()
        .success()
        .stdout(contains("kana:           \n"))
        .stdout(contains("reporter name (kana) is required"));
}

#[test]
fn test_draft_clear_declined_leaves_state_unchanged() {
    let db_path = setup_test_db("draft_clear_declined");
    init_db(&db_path);

    fp().args(["--db", &db_path, "draft", "--area", "Harbor"])
        .assert()
        .success();

    fp().args(["--db", &db_path, "draft", "--clear"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    fp().args(["--db", &db_path, "draft", "--print"])
        .assert()
        .success()
        .stdout(contains("Harbor"));
}

#[test]
fn test_corrupt_draft_degrades_to_empty() {
    let db_path = setup_test_db("draft_corrupt");
    init_db(&db_path);

    // Sabotage the stored draft with invalid JSON
    let mut store = SqliteStore::open(&db_path).expect("open store");
    store.set(DRAFT_KEY, "{not json at all").expect("set garbage");

    fp().args(["--db", &db_path, "draft", "--print"])
        .assert()
        .success()
        .stdout(contains("reporter name (kana) is required"))
        .stdout(contains("area is required"));
}

#[test]
fn test_invalid_incident_type_is_rejected() {
    let db_path = setup_test_db("draft_bad_type");
    init_db(&db_path);

    fp().args(["--db", &db_path, "draft", "--incident-type", "meteor"])
        .assert()
        .failure()
        .stderr(contains("Invalid incident type"));
}

#[test]
fn test_people_count_clears_unknown_flag_and_back() {
    let db_path = setup_test_db("draft_people_pair");
    init_db(&db_path);

    fp().args(["--db", &db_path, "draft", "--unknown-people"])
        .assert()
        .success();
    fp().args(["--db", &db_path, "draft", "--people", "4"])
        .assert()
        .success();

    fp().args(["--db", &db_path, "draft", "--print"])
        .assert()
        .success()
        .stdout(contains("people count:   4"))
        .stdout(contains("unknown people: false"));

    fp().args(["--db", &db_path, "draft", "--unknown-people"])
        .assert()
        .success();

    fp().args(["--db", &db_path, "draft", "--print"])
        .assert()
        .success()
        .stdout(contains("people count:   \n"))
        .stdout(contains("unknown people: true"));
}

#[test]
fn test_invalid_people_count_is_rejected() {
    let db_path = setup_test_db("draft_bad_people");
    init_db(&db_path);

    fp().args(["--db", &db_path, "draft", "--people", "several"])
        .assert()
        .failure()
        .stderr(contains("Invalid people count"));
}
