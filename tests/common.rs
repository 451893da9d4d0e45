#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::path::PathBuf;

pub fn fp() -> Command {
    cargo_bin_cmd!("fieldpost")
}

/// Create a unique test storage path inside the system temp dir and remove
/// any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fieldpost.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    std::fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize storage (creates the kv schema)
pub fn init_db(db_path: &str) {
    fp().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Fill the draft with the minimal set of fields that makes it submittable
pub fn fill_minimal_draft(db_path: &str) {
    fp().args([
        "--db",
        db_path,
        "draft",
        "--kana",
        "ヤマダ タロウ",
        "--incident-type",
        "fire",
        "--area",
        "North ward",
    ])
    .assert()
    .success();
}

/// Submit one entry with the given area and map link
pub fn submit_entry(db_path: &str, area: &str, map_link: &str) {
    fp().args([
        "--db",
        db_path,
        "draft",
        "--kana",
        "ヤマダ タロウ",
        "--incident-type",
        "fire",
        "--area",
        area,
        "--map-link",
        map_link,
    ])
    .assert()
    .success();

    fp().args(["--db", db_path, "submit"]).assert().success();
}
