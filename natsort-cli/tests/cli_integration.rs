//! Integration tests for the natsort CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const ENTRIES: [&str; 7] = [
    "tmp/a57/path2",
    "tmp/a23/path1",
    "tmp/a1/path1",
    "tmp/a1 (1)/path1",
    "tmp/a130/path1",
    "tmp/a64/path1",
    "tmp/a64/path2",
];

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn natsort() -> Command {
    Command::cargo_bin("natsort").unwrap()
}

fn lines(out: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(out)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_default_sort() {
    let output = natsort().args(ENTRIES).output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        lines(&output.stdout),
        [
            "tmp/a1 (1)/path1",
            "tmp/a1/path1",
            "tmp/a23/path1",
            "tmp/a57/path2",
            "tmp/a64/path1",
            "tmp/a64/path2",
            "tmp/a130/path1",
        ]
    );
}

#[test]
fn test_path_sort_reversed() {
    let output = natsort()
        .arg("--paths")
        .arg("--reverse")
        .args(ENTRIES)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        lines(&output.stdout),
        [
            "tmp/a130/path1",
            "tmp/a64/path2",
            "tmp/a64/path1",
            "tmp/a57/path2",
            "tmp/a23/path1",
            "tmp/a1 (1)/path1",
            "tmp/a1/path1",
        ]
    );
}

#[test]
fn test_filter() {
    let output = natsort()
        .args(["--filter", "20", "100"])
        .args(ENTRIES)
        .output()
        .unwrap();
    assert_eq!(
        lines(&output.stdout),
        [
            "tmp/a23/path1",
            "tmp/a57/path2",
            "tmp/a64/path1",
            "tmp/a64/path2",
        ]
    );
}

#[test]
fn test_reverse_filter_and_exclude() {
    let output = natsort()
        .args(["-p", "-F", "20", "100"])
        .args(ENTRIES)
        .output()
        .unwrap();
    assert_eq!(
        lines(&output.stdout),
        ["tmp/a1/path1", "tmp/a1 (1)/path1", "tmp/a130/path1"]
    );

    let output = natsort()
        .args(["-p", "-e", "23", "-e", "130"])
        .args(ENTRIES)
        .output()
        .unwrap();
    assert_eq!(
        lines(&output.stdout),
        [
            "tmp/a1/path1",
            "tmp/a1 (1)/path1",
            "tmp/a57/path2",
            "tmp/a64/path1",
            "tmp/a64/path2",
        ]
    );
}

#[test]
fn test_invalid_filter_fails_fast() {
    natsort()
        .args(["--filter", "7", "2", "a1"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error in --filter: low >= high"));

    natsort()
        .args(["--reverse-filter", "3", "3", "a1"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with(
            "Error in --reverse-filter: low >= high",
        ));
}

#[test]
fn test_nan_exclude_value_fails_fast() {
    natsort()
        .args(["-e", "nan", "a0", "a5", "b10"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with(
            "Error in --exclude: exclude values must be finite",
        ));
}

#[test]
fn test_no_matches_is_success() {
    natsort()
        .args(["--filter", "1000", "2000", "a1", "b2"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_signed_real_numbers() {
    let output = natsort()
        .args(["-t", "real", "num-2", "num-6", "num-1"])
        .output()
        .unwrap();
    assert_eq!(lines(&output.stdout), ["num-6", "num-2", "num-1"]);

    let output = natsort()
        .args(["num-2", "num-6", "num-1"])
        .output()
        .unwrap();
    assert_eq!(lines(&output.stdout), ["num-1", "num-2", "num-6"]);
}

#[test]
fn test_stdin_input() {
    natsort()
        .write_stdin("a10\na2\n\na1\n")
        .assert()
        .success()
        .stdout("a1\na2\na10\n");
}

#[test]
fn test_file_input() {
    let output = natsort()
        .args(["-p", "-i", &fixture_path("paths.txt")])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(lines(&output.stdout)[..2], ["tmp/a1/path1", "tmp/a1 (1)/path1"]);
    assert_eq!(lines(&output.stdout).len(), 7);
}

#[test]
fn test_glob_pattern() {
    let output = natsort()
        .args(["-c", "-i", &fixture_path("*.txt")])
        .output()
        .unwrap();
    assert!(output.status.success());
    let out = lines(&output.stdout);
    assert_eq!(out.len(), 10);
    assert_eq!(out[..3], ["Chapter 1", "chapter 2", "chapter 10"]);
}

#[test]
fn test_missing_input_file() {
    natsort()
        .args(["-i", "nonexistent.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("File not found: nonexistent.txt"));
}

#[test]
fn test_json_output() {
    natsort()
        .args(["--format", "json", "b10", "b9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"text\": \"b9\""))
        .stdout(predicate::str::contains("\"index\": 1"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("sorted.txt");

    natsort()
        .arg("-o")
        .arg(&output_file)
        .args(["x10", "x9", "x100"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&output_file).unwrap();
    assert_eq!(content, "x9\nx10\nx100\n");
}

#[test]
fn test_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("natsort.toml");
    fs::write(
        &config,
        r#"
[sorting]
paths = true

[filter]
exclude_values = [23.0, 130.0]

[output]
default_format = "text"
"#,
    )
    .unwrap();

    let output = natsort()
        .arg("--config")
        .arg(&config)
        .args(ENTRIES)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        lines(&output.stdout),
        [
            "tmp/a1/path1",
            "tmp/a1 (1)/path1",
            "tmp/a57/path2",
            "tmp/a64/path1",
            "tmp/a64/path2",
        ]
    );
}

#[test]
fn test_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("bad.toml");
    fs::write(&config, "[sorting]\ncase = \"sideways\"\n").unwrap();

    natsort()
        .arg("--config")
        .arg(&config)
        .arg("a1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown case policy"));
}

#[test]
fn test_locale_name() {
    natsort()
        .args(["--locale-name", "en_US", "n1,234", "n999", "n12"])
        .assert()
        .success()
        .stdout("n12\nn999\nn1,234\n");

    natsort()
        .args(["--locale-name", "xx_YY", "a1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown locale: xx_YY"));
}

#[test]
fn test_list_locales() {
    natsort()
        .arg("--list-locales")
        .assert()
        .success()
        .stdout(predicate::str::contains("en_US"))
        .stdout(predicate::str::contains("de_DE"));
}

#[test]
fn test_help_command() {
    natsort()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--reverse-filter"))
        .stdout(predicate::str::contains("--number-type"));
}
