use predicates::str::contains;
use std::fs;

mod common;
use common::{add_sample_sessions, init_and_signup, setup_test_db, temp_out, vlg};

#[test]
fn test_export_csv() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");

    init_and_signup(&db_path, "Sam Ortiz", "34", "sam@example.org");
    add_sample_sessions(&db_path);

    vlg()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("id,date,start_time,end_time,duration_hours,description,source"));
    assert!(content.contains("2025-09-01"));
    assert!(content.contains("Food bank shift"));
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");

    init_and_signup(&db_path, "Sam Ortiz", "34", "sam@example.org");
    add_sample_sessions(&db_path);

    vlg()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"duration_hours\""));
    assert!(content.contains("2025-09-15"));
}

#[test]
fn test_export_range_filter() {
    let db_path = setup_test_db("export_range");
    let out = temp_out("export_range", "csv");

    init_and_signup(&db_path, "Sam Ortiz", "34", "sam@example.org");
    add_sample_sessions(&db_path);

    vlg()
        .args(["--db", &db_path, "add", "2024-03-10", "--hours", "4"])
        .assert()
        .success();

    vlg()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range", "2025",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("2025-09-01"));
    assert!(!content.contains("2024-03-10"));
}

#[test]
fn test_export_nothing_to_export() {
    let db_path = setup_test_db("export_empty");
    let out = temp_out("export_empty", "csv");

    init_and_signup(&db_path, "Sam Ortiz", "34", "sam@example.org");

    vlg()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("Nothing to export"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_rejects_relative_path() {
    let db_path = setup_test_db("export_relative");

    init_and_signup(&db_path, "Sam Ortiz", "34", "sam@example.org");
    add_sample_sessions(&db_path);

    vlg()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "csv",
            "--file",
            "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_force_overwrites() {
    let db_path = setup_test_db("export_force");
    let out = temp_out("export_force", "csv");

    init_and_signup(&db_path, "Sam Ortiz", "34", "sam@example.org");
    add_sample_sessions(&db_path);

    fs::write(&out, "stale").expect("seed existing file");

    vlg()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(!content.contains("stale"));
    assert!(content.contains("id,date"));
}

#[test]
fn test_backup_plain() {
    let db_path = setup_test_db("backup_plain");
    let out = temp_out("backup_plain", "sqlite");

    init_and_signup(&db_path, "Sam Ortiz", "34", "sam@example.org");

    vlg()
        .args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(std::path::Path::new(&out).exists());
}

#[test]
fn test_backup_compressed() {
    let db_path = setup_test_db("backup_zip");
    let out = temp_out("backup_zip", "sqlite");

    init_and_signup(&db_path, "Sam Ortiz", "34", "sam@example.org");

    vlg()
        .args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    let zip_path = std::path::Path::new(&out).with_extension("zip");
    assert!(zip_path.exists());
    // The uncompressed copy is removed after zipping
    assert!(!std::path::Path::new(&out).exists());
}
