/// Integration tests for the anagram finder
///
/// These tests verify that the main functionality of the anagram finder works
/// correctly, from reading input files to exporting results.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anagram_finder::config::{default_config, Config};
use anagram_finder::utils::output_formatter;
use anagram_finder::{find_anagrams_in_files, AnagramFinder, InputOptions};

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

fn set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_find_anagrams_in_files() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let keys = write_file(temp_dir.path(), "keys.txt", "abc\ndef\n");
    let input = write_file(temp_dir.path(), "input.txt", "foo\nacb\nfed\n");

    let results = find_anagrams_in_files(&keys, &input).expect("Failed to find anagrams");

    assert_eq!(results.len(), 2);
    assert_eq!(results["abc"], set(&["acb"]));
    assert_eq!(results["def"], set(&["fed"]));
}

#[test]
fn test_lines_are_trimmed_and_case_folded() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let keys = write_file(temp_dir.path(), "keys.txt", "  Listen \r\nLISTEN\n");
    let input = write_file(temp_dir.path(), "input.txt", "Silent\n enlist\ntinsel\nlistens\n");

    let results = find_anagrams_in_files(&keys, &input).expect("Failed to find anagrams");

    assert_eq!(results.len(), 1);
    assert_eq!(results["listen"], set(&["enlist", "silent", "tinsel"]));
}

#[test]
fn test_empty_files() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let empty = write_file(temp_dir.path(), "empty.txt", "");
    let keys = write_file(temp_dir.path(), "keys.txt", "abc\n");
    let input = write_file(temp_dir.path(), "input.txt", "abc\ndef\n");

    let results = find_anagrams_in_files(&empty, &input).expect("Failed to find anagrams");
    assert!(results.is_empty());

    let results = find_anagrams_in_files(&keys, &empty).expect("Failed to find anagrams");
    assert_eq!(results.len(), 1);
    assert!(results["abc"].is_empty());
}

#[test]
fn test_blank_lines() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let keys = write_file(temp_dir.path(), "keys.txt", "abc\n\n");
    let input = write_file(temp_dir.path(), "input.txt", "\nbca\n");

    // Blank lines are empty strings, and the empty string is its own anagram
    let results = find_anagrams_in_files(&keys, &input).expect("Failed to find anagrams");
    assert_eq!(results[""], set(&[""]));
    assert_eq!(results["abc"], set(&["bca"]));

    let config = Config {
        input: InputOptions {
            skip_blank_lines: true,
            ..InputOptions::default()
        },
        ..default_config()
    };
    let report = AnagramFinder::new(config)
        .find_in_files(&keys, &input)
        .expect("Failed to find anagrams");
    assert!(!report.results.contains_key(""));
    assert_eq!(report.keys_read, 1);
}

#[test]
fn test_missing_file_is_an_error() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let keys = write_file(temp_dir.path(), "keys.txt", "abc\n");
    let missing = temp_dir.path().join("missing.txt");

    let err = find_anagrams_in_files(&keys, &missing).unwrap_err();
    assert!(err.to_string().contains("not found"));
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn test_exports() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let finder = AnagramFinder::new(default_config());
    let report = finder.find(&["abc", "def"], &["bac", "cab", "zzz"]);

    let json_path = temp_dir.path().join("out.json");
    output_formatter::export_results_json(&report.results, &json_path).expect("Failed to export JSON");
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).expect("Invalid JSON");
    assert_eq!(json, serde_json::json!({ "abc": ["bac", "cab"], "def": [] }));

    let csv_path = temp_dir.path().join("out.csv");
    output_formatter::create_csv_report(&report.results, &csv_path).expect("Failed to export CSV");
    let csv = fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv, "Key,Anagram\nabc,bac\nabc,cab\ndef,\n");

    let html_path = temp_dir.path().join("out.html");
    output_formatter::create_html_report(&report, &html_path).expect("Failed to export HTML");
    let html = fs::read_to_string(&html_path).unwrap();
    assert!(html.contains("<strong>abc</strong>"));
    assert!(html.contains("<strong>def</strong>"));
}

#[test]
fn test_cli_prints_anagrams() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let keys = write_file(temp_dir.path(), "keys.txt", "abc\n");
    let input = write_file(temp_dir.path(), "input.txt", "foo\nbac\nbar\n");
    let json_path = temp_dir.path().join("exports").join("out.json");

    let output = Command::new(env!("CARGO_BIN_EXE_anagram_finder"))
        .arg("--keys")
        .arg(&keys)
        .arg("--input")
        .arg(&input)
        .arg("--json")
        .arg(&json_path)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run anagram_finder");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("abc: bac"), "unexpected output: {}", stdout);
    assert!(json_path.exists());
}

#[test]
fn test_cli_missing_file_fails() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let keys = write_file(temp_dir.path(), "keys.txt", "abc\n");

    let output = Command::new(env!("CARGO_BIN_EXE_anagram_finder"))
        .arg("--keys")
        .arg(&keys)
        .arg("--input")
        .arg(temp_dir.path().join("nope.txt"))
        .output()
        .expect("Failed to run anagram_finder");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nope.txt"), "unexpected stderr: {}", stderr);
}
