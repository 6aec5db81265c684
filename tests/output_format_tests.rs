//! Integration tests for --pretty and compact output formats

use assert_cmd::Command;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

fn run_with_flags(extra: &[&str]) -> Vec<u8> {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("matrix.json");
    fs::write(
        &input,
        serde_json::to_string(&json!({
            "linux": {"include": [
                {"duckdb_arch": "amd64", "container": "ubuntu:18.04"},
                {"duckdb_arch": "arm64"}
            ]},
            "osx": {"include": [{"duckdb_arch": "universal"}]}
        }))
        .unwrap(),
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("matrix-prune").unwrap();
    cmd.arg("--input").arg(&input).arg("--exclude").arg("arm64");
    for flag in extra {
        cmd.arg(flag);
    }
    cmd.assert().success().get_output().stdout.clone()
}

#[test]
fn test_compact_output_has_no_added_whitespace() {
    let stdout = run_with_flags(&[]);
    let text = String::from_utf8(stdout).unwrap();
    assert!(!text.contains('\n'));
    assert!(!text.contains(": "));
}

#[test]
fn test_pretty_output_uses_two_space_indent() {
    let stdout = run_with_flags(&["--pretty"]);
    let text = String::from_utf8(stdout).unwrap();
    assert!(text.contains('\n'));
    assert!(text.contains("\n  \"linux\""));
    assert!(text.contains("\n    \"include\""));
}

#[test]
fn test_pretty_and_compact_parse_deep_equal() {
    let pretty: Value = serde_json::from_slice(&run_with_flags(&["--pretty"])).unwrap();
    let compact: Value = serde_json::from_slice(&run_with_flags(&[])).unwrap();
    assert_eq!(pretty, compact);
}

#[test]
fn test_os_key_order_preserved() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("matrix.json");
    // deliberately not alphabetical
    fs::write(&input, r#"{"windows": {}, "linux": {}, "amazonlinux": {}}"#).unwrap();

    let mut cmd = Command::cargo_bin("matrix-prune").unwrap();
    let stdout = cmd
        .arg("--input")
        .arg(&input)
        .arg("--exclude")
        .arg("arm64")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(
        String::from_utf8(stdout).unwrap(),
        r#"{"windows":{},"linux":{},"amazonlinux":{}}"#
    );
}

#[test]
fn test_file_output_matches_stdout_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("matrix.json");
    fs::write(
        &input,
        r#"{"linux": {"include": [{"duckdb_arch": "amd64"}]}}"#,
    )
    .unwrap();
    let out_path = dir.path().join("out.json");

    let mut file_cmd = Command::cargo_bin("matrix-prune").unwrap();
    file_cmd
        .arg("--input")
        .arg(&input)
        .arg("--exclude")
        .arg("arm64")
        .arg("--pretty")
        .arg("--output")
        .arg(&out_path)
        .assert()
        .success();

    let mut stdout_cmd = Command::cargo_bin("matrix-prune").unwrap();
    let stdout = stdout_cmd
        .arg("--input")
        .arg(&input)
        .arg("--exclude")
        .arg("arm64")
        .arg("--pretty")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(fs::read_to_string(&out_path).unwrap().into_bytes(), stdout);
}
