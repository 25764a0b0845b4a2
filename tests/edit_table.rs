//! E2E tests for the commands that change or build employee tables

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn tipc(args: &[&str]) -> Output {
    Command::new("cargo")
        .args(["run", "--"])
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp path is utf-8")
}

/// Add, set and remove build up a table on disk
#[test]
fn add_set_remove_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("staff.csv");
    let file = path_str(&file);

    let output = tipc(&["add", "-e", file, "--name", "Alice"]);
    assert!(output.status.success(), "Command failed: {:?}", output);
    let output = tipc(&["add", "-e", file, "--name", "Bob"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let table = fs::read_to_string(file).unwrap();
    assert!(table.contains(
        "Alice,0h 00m,0h 00m,0h 00m,0h 00m,0h 00m,0h 00m,0h 00m,0h 00m,0h 00m,0h 00m,0h 00m,0h 00m,£0.00"
    ));

    let output = tipc(&["set", "-e", file, "--name", "Bob", "--month", "mar", "--duration", "7h 45m"]);
    assert!(output.status.success(), "Command failed: {:?}", output);
    let table = fs::read_to_string(file).unwrap();
    assert!(table.contains("Bob,0h 00m,0h 00m,7h 45m,0h 00m"));

    let output = tipc(&["remove", "-e", file, "--name", "Alice"]);
    assert!(output.status.success(), "Command failed: {:?}", output);
    let table = fs::read_to_string(file).unwrap();
    assert!(!table.contains("Alice"));
    assert!(table.contains("Bob"));
}

/// Names are matched after trimming, the same way they are stored
#[test]
fn padded_names_are_trimmed() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("staff.csv");
    let file = path_str(&file);

    let output = tipc(&["add", "-e", file, "--name", " Bob "]);
    assert!(output.status.success(), "Command failed: {:?}", output);
    let output = tipc(&["set", "-e", file, "--name", " Bob ", "--month", "4", "--duration", "2h 00m"]);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(fs::read_to_string(file).unwrap().contains("\nBob,0h 00m,0h 00m,0h 00m,2h 00m"));

    let output = tipc(&["remove", "-e", file, "--name", " Bob "]);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(!fs::read_to_string(file).unwrap().contains("Bob"));
}

/// A malformed duration is rejected and the file is left as it was
#[test]
fn set_rejects_malformed_duration() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("staff.csv");
    fs::copy("tests/data/staff.csv", &file).unwrap();
    let before = fs::read_to_string(&file).unwrap();

    let output = tipc(&[
        "set", "-e", path_str(&file), "--name", "Carol", "--month", "March", "--duration",
        "3 hours",
    ]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid duration '3 hours'"));
    assert_eq!(fs::read_to_string(&file).unwrap(), before);
}

#[test]
fn set_unknown_employee_fails() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("staff.csv");
    fs::copy("tests/data/staff.csv", &file).unwrap();

    let output = tipc(&[
        "set", "-e", path_str(&file), "--name", "Zoe", "--month", "1", "--duration", "1h 00m",
    ]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no employee named 'Zoe'"));
}

/// Merging appends the second table after the first, shares passed through
#[test]
fn merge_appends_tables() {
    let output = tipc(&["merge", "tests/data/staff.csv", "tests/data/idle.csv"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let names: Vec<&str> = stdout
        .lines()
        .skip(1)
        .map(|l| l.split(',').next().unwrap())
        .collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol", "Fay", "Gus"]);
    assert!(stdout.contains("Bob,30h 00m,,,,,,,,,,,,£12.00"));
    assert!(stdout.contains("Fay,,,,,,,,,,,,,£5.00"));
}

/// Merging a single table reproduces it unchanged
#[test]
fn merge_single_table_is_unchanged() {
    let output = tipc(&["merge", "tests/data/messy.csv"]);

    assert!(output.status.success(), "Command failed: {:?}", output);
    let original = fs::read_to_string("tests/data/messy.csv").unwrap();
    assert_eq!(String::from_utf8_lossy(&output.stdout), original);
}

/// Seeded sample data is repeatable and passes validation
#[test]
fn seed_is_repeatable() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("sample.csv");
    let file = path_str(&file);

    let first = tipc(&["seed", "--count", "4", "--seed", "42"]);
    let second = tipc(&["seed", "--count", "4", "--seed", "42", "-o", file]);
    assert!(first.status.success(), "Command failed: {:?}", first);
    assert!(second.status.success(), "Command failed: {:?}", second);
    assert_eq!(
        String::from_utf8_lossy(&first.stdout),
        fs::read_to_string(file).unwrap()
    );
    assert!(String::from_utf8_lossy(&first.stdout).contains("Test 4,"));

    let output = tipc(&["validate", "-e", file]);
    assert!(output.status.success(), "Command failed: {:?}", output);
}
