//! End-to-end tests for the `word_stats` binary

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_input(dir: &TempDir, contents: &[u8]) -> PathBuf {
    let path = dir.path().join("input.txt");
    fs::write(&path, contents).unwrap();
    path
}

fn word_stats() -> Command {
    Command::new(env!("CARGO_BIN_EXE_word_stats"))
}

#[test]
fn shows_help() {
    word_stats()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("word_stats"));
}

#[test]
fn prints_counts_and_ranking_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, b"Word word WORD\r\ncat dog bird\n\n  \nbird");

    word_stats()
        .arg("-i")
        .arg(&input)
        .assert()
        .success()
        .stdout("characters: 36\nwords: 5\nlines: 3\n<word>: 3\n<bird>: 2\n");
}

#[test]
fn writes_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, b"hello world\nhello there\n");
    let output = dir.path().join("result.txt");

    word_stats()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout("");

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "characters: 24\nwords: 4\nlines: 2\n<hello>: 2\n<there>: 1\n<world>: 1\n"
    );
}

#[test]
fn phrase_mode_and_top_limit() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, b"great scott great scott great\nwell known\nfact");

    word_stats()
        .args(["-m", "2", "-n", "2", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "<great scott>: 2\n<scott great>: 2\n",
        ))
        .stdout(predicate::str::contains("well known").not());
}

#[test]
fn json_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, b"alpha beta gamma alpha\n");

    let assert = word_stats()
        .args(["--format", "json", "-i"])
        .arg(&input)
        .assert()
        .success();
    let json: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert_eq!(json["words"], 4);
    assert_eq!(json["lines"], 1);
    assert_eq!(json["characters"], 23);
    assert_eq!(json["entries"][0]["token"], "alpha");
    assert_eq!(json["entries"][0]["count"], 2);
    assert_eq!(json["entries"].as_array().unwrap().len(), 3);
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();

    word_stats()
        .arg("-i")
        .arg(dir.path().join("absent.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn zero_phrase_length_is_rejected_before_io() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, b"some words here");
    let output = dir.path().join("result.txt");

    word_stats()
        .args(["-m", "0", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("value must be at least 1"));

    assert!(!output.exists());
}

#[test]
fn empty_input_reports_zeroes() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, b"");

    word_stats()
        .arg("-i")
        .arg(&input)
        .assert()
        .success()
        .stdout("characters: 0\nwords: 0\nlines: 0\n");
}
