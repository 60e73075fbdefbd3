//! End-to-end tests for the checkmygrade binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn checkmygrade(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("checkmygrade").unwrap();
    cmd.arg("--data-dir").arg(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn demo_prints_reports() {
    let dir = TempDir::new().unwrap();

    checkmygrade(&dir)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Courses ==="))
        .stdout(predicate::str::contains("DATA200: Data Science (3 cr)"))
        .stdout(predicate::str::contains("Kapil Dev [Professor] -> CS101"))
        .stdout(predicate::str::contains(
            "Smriti Mandhana <smriti.mandhana@mycsu.edu> | DATA200 | A (95)",
        ))
        .stdout(predicate::str::contains("Found 2 DATA200 students in"))
        .stdout(predicate::str::contains("DATA200 stats -> average: 96, median: 96"))
        .stdout(predicate::str::contains("Professor: Kapil Dev | Course: Intro CS"))
        .stdout(predicate::str::contains("  - Harmanpreet Kaur: B+ (88)"));

    for file in ["students.csv", "courses.csv", "professors.csv", "login.csv"] {
        assert!(dir.path().join(file).exists(), "{} missing", file);
    }

    let logins = std::fs::read_to_string(dir.path().join("login.csv")).unwrap();
    assert!(logins.starts_with("user_id,password,role"));
    assert!(!logins.contains("Welcome12#_"));
}

#[test]
fn no_command_runs_demo() {
    let dir = TempDir::new().unwrap();

    checkmygrade(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Report: Students taught by Kapil Dev (CS101) ==="));
}

#[test]
fn student_lifecycle() {
    let dir = TempDir::new().unwrap();

    checkmygrade(&dir)
        .args(["student", "add", "sam@mycsu.edu", "Sam", "Carpenter"])
        .args(["--course", "DATA200", "--grade", "A", "--marks", "96"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added student: Sam Carpenter <sam@mycsu.edu>"));

    checkmygrade(&dir)
        .args(["student", "add", "sam@mycsu.edu", "Sam", "Again", "--course", "CS101"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    checkmygrade(&dir)
        .args(["student", "update", "sam@mycsu.edu", "--set", "marks=97"])
        .assert()
        .success();

    checkmygrade(&dir)
        .args(["report", "student", "sam@mycsu.edu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marks:  97"));

    checkmygrade(&dir)
        .args(["student", "delete", "sam@mycsu.edu"])
        .assert()
        .success();

    checkmygrade(&dir)
        .args(["student", "show", "sam@mycsu.edu"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Student not found: sam@mycsu.edu"));
}

#[test]
fn user_login_and_password_change() {
    let dir = TempDir::new().unwrap();

    checkmygrade(&dir)
        .args(["user", "register", "michael@mycsu.edu", "Welcome12#_", "--role", "professor"])
        .assert()
        .success();

    checkmygrade(&dir)
        .args(["user", "login", "michael@mycsu.edu", "Welcome12#_"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Login successful"));

    checkmygrade(&dir)
        .args(["user", "login", "michael@mycsu.edu", "wrong"])
        .assert()
        .failure();

    checkmygrade(&dir)
        .args(["user", "passwd", "michael@mycsu.edu", "NewP@ss1"])
        .assert()
        .success();

    checkmygrade(&dir)
        .args(["user", "login", "michael@mycsu.edu", "NewP@ss1"])
        .assert()
        .success();
}

#[test]
fn stats_and_sort_after_seed() {
    let dir = TempDir::new().unwrap();

    checkmygrade(&dir).args(["seed"]).assert().success();

    checkmygrade(&dir)
        .args(["stats", "CS101", "NOPE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CS101 stats -> average: 86, median: 86"))
        .stdout(predicate::str::contains("NOPE stats -> average: 0, median: 0"));

    checkmygrade(&dir)
        .args(["student", "sort", "marks", "--reverse"])
        .assert()
        .success();

    let students = std::fs::read_to_string(dir.path().join("students.csv")).unwrap();
    let second_line = students.lines().nth(1).unwrap();
    assert!(second_line.starts_with("virat.kohli@mycsu.edu"));
}

#[test]
fn audit_records_mutations() {
    let dir = TempDir::new().unwrap();

    checkmygrade(&dir)
        .args(["course", "add", "CS101", "Intro CS", "--credits", "4"])
        .assert()
        .success();

    checkmygrade(&dir)
        .args(["audit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Course CS101"));
}

#[test]
fn selftest_passes() {
    let dir = TempDir::new().unwrap();

    checkmygrade(&dir)
        .arg("selftest")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 failed"));
}

#[test]
fn module_tests_selector_runs_selftest() {
    let dir = TempDir::new().unwrap();

    checkmygrade(&dir)
        .args(["-m", "tests"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ok      cipher round trip"))
        .stdout(predicate::str::contains("0 failed"));

    checkmygrade(&dir)
        .args(["-m", "reports"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown module"));
}

#[test]
fn student_update_renames_email() {
    let dir = TempDir::new().unwrap();

    checkmygrade(&dir).arg("seed").assert().success();

    checkmygrade(&dir)
        .args(["student", "update", "rohit.sharma@mycsu.edu"])
        .args(["--set", "email_address=hitman@mycsu.edu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rohit Sharma <hitman@mycsu.edu>"));

    checkmygrade(&dir)
        .args(["student", "update", "hitman@mycsu.edu"])
        .args(["--set", "email_address=virat.kohli@mycsu.edu"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
