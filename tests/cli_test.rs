/// Tests for the binary's command-line surface
use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn bigomap() -> Command {
    Command::cargo_bin("bigomap").unwrap()
}

#[test]
fn missing_argument_prints_usage_and_fails() {
    bigomap()
        .assert()
        .failure()
        .stderr(predicates::str::contains("Usage"));
}

#[test]
fn successful_run_prints_the_estimate_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested.py");
    fs::write(
        &path,
        "for i in range(n):\n    for j in range(n):\n        pass\n",
    )
    .unwrap();

    bigomap().arg(&path).assert().success().stdout(format!(
        "Estimated time complexity of {}: O(n^2)\n",
        path.display()
    ));
}

#[test]
fn unreadable_file_fails_with_the_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.py");

    bigomap()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicates::str::contains("failed to read"));
}

#[test]
fn parse_failure_surfaces_the_syntax_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.py");
    fs::write(&path, "while True\n    pass\n").unwrap();

    bigomap()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicates::str::contains("syntax error"));
}
