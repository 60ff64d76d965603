#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn vlg() -> Command {
    cargo_bin_cmd!("volog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_volog.sqlite", name));
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

/// Initialize the DB and create a logged-in profile useful for many tests
pub fn init_and_signup(db_path: &str, name: &str, age: &str, email: &str) {
    vlg()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    vlg()
        .args([
            "--db", db_path, "signup", "--name", name, "--age", age, "--email", email,
        ])
        .assert()
        .success();
}

/// Add a couple of sessions via CLI for list/export tests
pub fn add_sample_sessions(db_path: &str) {
    vlg()
        .args([
            "--db",
            db_path,
            "add",
            "2025-09-01",
            "--start",
            "09:00",
            "--end",
            "12:30",
        ])
        .assert()
        .success();

    vlg()
        .args([
            "--db",
            db_path,
            "add",
            "2025-09-15",
            "--hours",
            "2.25",
            "--desc",
            "Food bank shift",
        ])
        .assert()
        .success();
}
