use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_binary_renders_report_from_argument() {
    let mut cmd = cargo_bin_cmd!("movierank");
    cmd.arg("tests/resources/movies.csv")
        .assert()
        .success()
        .stdout(fs::read_to_string("tests/resources/expected_report.txt").unwrap())
        .stderr(predicate::str::contains(
            "Invalid row at line 7: Incorrect number of fields.",
        ));
}

#[test]
fn test_binary_defaults_to_movies_csv() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("movies.csv"),
        "Title,Year,Genre,Rating1,Rating2,Rating3\nInception,2010,Sci-Fi,90,95,100\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("movierank");
    cmd.current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Inception | 2010 | Sci-Fi     |       95.0"));
}

#[test]
fn test_binary_empty_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    fs::write(&path, "").unwrap();

    let mut cmd = cargo_bin_cmd!("movierank");
    cmd.arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("CSV file is empty."));
}

#[test]
fn test_binary_invalid_header() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("movies.csv");
    fs::write(&path, "Name,Year,Genre,Rating1,Rating2,Rating3\n").unwrap();

    let mut cmd = cargo_bin_cmd!("movierank");
    cmd.arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("CSV header is invalid."));
}

#[test]
fn test_binary_missing_file() {
    let dir = tempdir().unwrap();

    let mut cmd = cargo_bin_cmd!("movierank");
    cmd.arg(dir.path().join("nope.csv"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error reading the file: "));
}
