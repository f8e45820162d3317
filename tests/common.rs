#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rwt() -> Command {
    cargo_bin_cmd!("rworktime")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworktime.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh, initialized database for one test.
pub fn init_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    rwt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    db_path
}

/// Run one tracking command at a fixed instant and expect success.
pub fn track_at(db_path: &str, at: &str, args: &[&str]) {
    rwt()
        .args(["--db", db_path, "--at", at])
        .args(args)
        .assert()
        .success();
}

/// A full 2025-07-01 day: 08:00 start, 12:00-12:30 break, 17:00 stop.
pub fn init_db_with_day(name: &str) -> String {
    let db_path = init_db(name);
    track_at(&db_path, "2025-07-01 08:00", &["start", "--loc", "R", "--project", "payroll"]);
    track_at(&db_path, "2025-07-01 12:00", &["pause"]);
    track_at(&db_path, "2025-07-01 12:30", &["resume"]);
    track_at(&db_path, "2025-07-01 17:00", &["stop"]);
    db_path
}
