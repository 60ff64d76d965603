use predicates::str::contains;

mod common;
use common::{init_and_signup, setup_test_db, vlg};

#[test]
fn test_clock_in_and_out_records_a_session() {
    let db_path = setup_test_db("clock_roundtrip");

    init_and_signup(&db_path, "Sam Ortiz", "34", "sam@example.org");

    vlg()
        .args(["--db", &db_path, "clock", "--in"])
        .assert()
        .success()
        .stdout(contains("Clocked in"));

    vlg()
        .args(["--db", &db_path, "clock", "--out", "--desc", "Park cleanup"])
        .assert()
        .success()
        .stdout(contains("Volunteer session recorded"));

    // The elapsed time between the two invocations rounds to 0.00 hours,
    // but the entry itself must exist.
    vlg()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Park cleanup"))
        .stdout(contains("0.00"));
}

#[test]
fn test_clock_in_twice_fails() {
    let db_path = setup_test_db("clock_twice");

    init_and_signup(&db_path, "Sam Ortiz", "34", "sam@example.org");

    vlg()
        .args(["--db", &db_path, "clock", "--in"])
        .assert()
        .success();

    vlg()
        .args(["--db", &db_path, "clock", "--in"])
        .assert()
        .failure()
        .stderr(contains("Already clocked in"));
}

#[test]
fn test_clock_out_without_in_fails() {
    let db_path = setup_test_db("clock_out_only");

    init_and_signup(&db_path, "Sam Ortiz", "34", "sam@example.org");

    vlg()
        .args(["--db", &db_path, "clock", "--out"])
        .assert()
        .failure()
        .stderr(contains("Not clocked in"));
}

#[test]
fn test_clock_requires_exactly_one_flag() {
    let db_path = setup_test_db("clock_no_flag");

    init_and_signup(&db_path, "Sam Ortiz", "34", "sam@example.org");

    vlg()
        .args(["--db", &db_path, "clock"])
        .assert()
        .failure()
        .stderr(contains("exactly one"));

    vlg()
        .args(["--db", &db_path, "clock", "--in", "--out"])
        .assert()
        .failure()
        .stderr(contains("exactly one"));
}

#[test]
fn test_clock_state_is_per_user() {
    let db_path = setup_test_db("clock_per_user");

    init_and_signup(&db_path, "Sam Ortiz", "34", "sam@example.org");

    vlg()
        .args(["--db", &db_path, "clock", "--in"])
        .assert()
        .success();

    // A different profile has no open clock entry
    vlg()
        .args([
            "--db",
            &db_path,
            "signup",
            "--name",
            "Noa Levi",
            "--age",
            "12",
            "--email",
            "noa@example.org",
        ])
        .assert()
        .success();

    vlg()
        .args(["--db", &db_path, "clock", "--out"])
        .assert()
        .failure()
        .stderr(contains("Not clocked in"));
}
