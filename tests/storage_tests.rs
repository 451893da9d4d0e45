use predicates::str::contains;
use std::env;
use std::fs;
use std::path::PathBuf;

mod common;
use common::{fp, init_db, setup_test_db, submit_entry};

fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

#[test]
fn test_db_check_reports_ok() {
    let db_path = setup_test_db("db_check");
    init_db(&db_path);

    fp().args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Storage integrity: ok"));
}

#[test]
fn test_db_info_counts_keys() {
    let db_path = setup_test_db("db_info");
    init_db(&db_path);

    fp().args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Keys:           0"))
        .stdout(contains("Draft:          absent"));

    submit_entry(&db_path, "Somewhere", "");

    fp().args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Keys:           1"));
}

#[test]
fn test_backup_copies_storage_file() {
    let db_path = setup_test_db("backup_plain");
    init_db(&db_path);
    submit_entry(&db_path, "Backed up", "");

    let out = temp_out("backup_plain", "sqlite");
    fp().args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup written"));

    // The copy is a working store with the same entries
    fp().args(["--db", &out, "list"])
        .assert()
        .success()
        .stdout(contains("Backed up"));
}

#[test]
fn test_backup_compressed_writes_gzip() {
    let db_path = setup_test_db("backup_gz");
    init_db(&db_path);

    let out = temp_out("backup_gz", "sqlite.gz");
    fp().args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read backup");
    assert_eq!(&bytes[..2], &[0x1f, 0x8b]); // gzip magic
}

#[test]
fn test_backup_declined_overwrite_keeps_existing_file() {
    let db_path = setup_test_db("backup_decline");
    init_db(&db_path);

    let out = temp_out("backup_decline", "sqlite");
    fs::write(&out, b"precious").expect("write existing");

    fp().args(["--db", &db_path, "backup", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    assert_eq!(fs::read(&out).expect("read"), b"precious");
}
