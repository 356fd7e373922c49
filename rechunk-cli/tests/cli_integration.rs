//! Integration tests for the rechunk CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn rechunk() -> Command {
    Command::cargo_bin("rechunk").unwrap()
}

#[test]
fn test_chunk_english_text() {
    let mut cmd = rechunk();
    cmd.arg("chunk")
        .arg("-i")
        .arg(fixture_path("english-sample.txt"))
        .args(["--chunk-size", "120", "--chunk-overlap", "20"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("chunk 0 ---"))
        .stdout(predicate::str::contains("chunk 2 ---"))
        .stdout(predicate::str::contains("chunk 3 ---").not())
        .stdout(predicate::str::contains(
            "ed by a short index.\n\nThe arithmetic logic unit",
        ));
}

#[test]
fn test_small_file_is_one_chunk_by_default() {
    let mut cmd = rechunk();
    cmd.arg("chunk")
        .arg("-i")
        .arg(fixture_path("english-sample.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("chunk 0 ---"))
        .stdout(predicate::str::contains("chunk 1 ---").not());
}

#[test]
fn test_json_output() {
    let output = rechunk()
        .arg("chunk")
        .arg("-i")
        .arg(fixture_path("unicode-sample.txt"))
        .args(["--chunk-size", "30", "--chunk-overlap", "5", "-f", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let chunks = value.as_array().unwrap();

    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0]["overlap"], 0);
    assert_eq!(chunks[1]["overlap"], 5);
    assert_eq!(chunks[1]["text"], "確認しています。\n\nGrüße aus Köln 👋 und");
    assert!(chunks[0]["source"]
        .as_str()
        .unwrap()
        .ends_with("unicode-sample.txt"));
}

#[test]
fn test_markdown_output() {
    let mut cmd = rechunk();
    cmd.arg("chunk")
        .arg("-i")
        .arg(fixture_path("english-sample.txt"))
        .args(["--chunk-size", "120", "--chunk-overlap", "20"])
        .args(["-f", "markdown"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("## Chunk 1"))
        .stdout(predicate::str::contains("---"))
        .stdout(predicate::str::contains("*Total chunks: 3*"));
}

#[test]
fn test_stdin_with_character_separator() {
    let mut cmd = rechunk();
    cmd.args(["chunk", "--stdin", "--chunk-size", "4", "--chunk-overlap", "1"])
        .args(["--separator", ""])
        .write_stdin("abcdefg");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--- <stdin> chunk 0 ---\nabcd\n"))
        .stdout(predicate::str::contains("--- <stdin> chunk 1 ---\ndefg\n"));
}

#[test]
fn test_escaped_separator() {
    let mut cmd = rechunk();
    cmd.args(["chunk", "--stdin", "--chunk-size", "7", "--chunk-overlap", "0"])
        .args(["-s", "\\n"])
        .write_stdin("abc\ndef\nghi");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("chunk 0 ---\nabc\ndef\n"))
        .stdout(predicate::str::contains("chunk 1 ---\n\nghi\n"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output.txt");

    let mut cmd = rechunk();
    cmd.arg("chunk")
        .arg("-i")
        .arg(fixture_path("english-sample.txt"))
        .arg("-o")
        .arg(&output_file);

    cmd.assert().success();

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("The register file holds a small set"));
}

#[test]
fn test_glob_pattern() {
    let mut cmd = rechunk();
    cmd.args(["chunk", "-q", "-i"]).arg(fixture_path("*.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("english-sample.txt chunk 0"))
        .stdout(predicate::str::contains("unicode-sample.txt chunk 0"));
}

#[test]
fn test_invalid_file() {
    let mut cmd = rechunk();
    cmd.arg("chunk").arg("-i").arg("nonexistent.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_overlap_not_below_size_rejected() {
    let mut cmd = rechunk();
    cmd.arg("chunk")
        .arg("-i")
        .arg(fixture_path("english-sample.txt"))
        .args(["--chunk-size", "50", "--chunk-overlap", "50"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_config_file_is_applied() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("rechunk.toml");
    fs::write(
        &config,
        "[chunking]\nchunk_size = 120\nchunk_overlap = 20\n\n[output]\ndefault_format = \"markdown\"\n",
    )
    .unwrap();

    let mut cmd = rechunk();
    cmd.arg("chunk")
        .arg("-i")
        .arg(fixture_path("english-sample.txt"))
        .arg("-c")
        .arg(&config);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("*Total chunks: 3*"));
}

#[test]
fn test_generate_then_validate_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("rechunk.toml");

    rechunk()
        .arg("generate-config")
        .arg("-o")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Configuration template generated successfully",
        ));

    rechunk()
        .arg("validate")
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Chunk size:    1000"));
}

#[test]
fn test_validate_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("bad.toml");
    fs::write(&config, "[chunking]\nchunk_size = 10\nchunk_overlap = 20\n").unwrap();

    rechunk()
        .arg("validate")
        .arg("-c")
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"));
}

#[test]
fn test_list_separators() {
    rechunk()
        .args(["list", "separators"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. \"\\n\\n\""))
        .stdout(predicate::str::contains("4. \"\" (characters)"));
}

#[test]
fn test_missing_input_is_usage_error() {
    rechunk().arg("chunk").assert().failure();
}
