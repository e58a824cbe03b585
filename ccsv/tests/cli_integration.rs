//! Integration tests for the ccsv CLI

use std::fs;
use std::process::Command;

use tempfile::tempdir;

fn run_ccsv(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_ccsv"))
        .args(args)
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_ccsv(&["--help"]);

    assert!(success);
    assert!(stdout.contains("ccsv"));
    assert!(stdout.contains("--output"));
    assert!(stdout.contains("--log-level"));
    assert!(stdout.contains("kinds"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_ccsv(&["--version"]);

    assert!(success);
    assert!(stdout.contains("ccsv"));
}

#[test]
fn test_two_inline_columns() {
    let (stdout, stderr, success) =
        run_ccsv(&["int:1,2,3,4,5", "double:6.24,7.44,8.92,9.19,10.45"]);

    assert!(success, "stderr: {stderr}");
    assert_eq!(
        stdout,
        "1, 6.240000\n2, 7.440000\n3, 8.920000\n4, 9.190000\n5, 10.450000\n"
    );
}

#[test]
fn test_single_column() {
    let (stdout, _, success) = run_ccsv(&["ulong:9,8,7"]);

    assert!(success);
    assert_eq!(stdout, "9\n8\n7\n");
}

#[test]
fn test_no_columns_prints_nothing() {
    let (stdout, stderr, success) = run_ccsv(&[]);

    assert!(success);
    assert!(stdout.is_empty());
    assert!(stderr.is_empty());
}

#[test]
fn test_length_mismatch() {
    let (stdout, stderr, success) = run_ccsv(&["int:1,2,3,4,5", "double:1,2,3,4"]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("column 1 has 4 rows, expected 5"));
}

#[test]
fn test_unknown_kind() {
    let (stdout, stderr, success) = run_ccsv(&["int:1", "quad:1"]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("unknown column type: quad"));
}

#[test]
fn test_invalid_value() {
    let (stdout, stderr, success) = run_ccsv(&["uint:1,-2"]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("invalid uint value '-2'"));
}

#[test]
fn test_columns_from_files() {
    let dir = tempdir().unwrap();
    let ids = dir.path().join("ids.txt");
    let scores = dir.path().join("scores.txt");
    fs::write(&ids, "10\n20\n30\n").unwrap();
    fs::write(&scores, "0.5 0.25\n0.125\n").unwrap();

    let ids_arg = format!("longlong:@{}", ids.display());
    let scores_arg = format!("float:@{}", scores.display());
    let (stdout, stderr, success) = run_ccsv(&[&ids_arg, &scores_arg]);

    assert!(success, "stderr: {stderr}");
    assert_eq!(stdout, "10, 0.500000\n20, 0.250000\n30, 0.125000\n");
}

#[test]
fn test_output_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out.csv");
    let out_arg = out.to_string_lossy().to_string();

    let (stdout, _, success) = run_ccsv(&["-o", &out_arg, "uint:1,2", "longdouble:3,4"]);

    assert!(success);
    assert!(stdout.is_empty());
    assert_eq!(fs::read_to_string(&out).unwrap(), "1, 3.000000\n2, 4.000000\n");
}

#[test]
fn test_output_file_not_created_on_mismatch() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out.csv");
    let out_arg = out.to_string_lossy().to_string();

    let (_, _, success) = run_ccsv(&["-o", &out_arg, "int:1,2", "int:1"]);

    assert!(!success);
    assert!(!out.exists());
}

#[test]
fn test_swapped_columns() {
    let (forward, _, _) = run_ccsv(&["int:1,2", "float:0.5,1.5"]);
    let (reverse, _, _) = run_ccsv(&["float:0.5,1.5", "int:1,2"]);

    assert_eq!(forward, "1, 0.500000\n2, 1.500000\n");
    assert_eq!(reverse, "0.500000, 1\n1.500000, 2\n");
}

#[test]
fn test_kinds_text() {
    let (stdout, _, success) = run_ccsv(&["kinds"]);

    assert!(success);
    assert!(stdout.starts_with("int\t0\n"));
    assert!(stdout.contains("ulonglong\t5\n"));
    assert_eq!(stdout.lines().count(), 9);
}

#[test]
fn test_kinds_json() {
    let (stdout, _, success) = run_ccsv(&["kinds", "--json"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    let kinds = parsed.as_array().unwrap();
    assert_eq!(kinds.len(), 9);
    assert_eq!(kinds[8]["name"], "longdouble");
    assert_eq!(kinds[8]["float"], true);
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    let (stdout, stderr, success) = run_ccsv(&["--log-level", "debug", "int:1,2"]);

    assert!(success);
    assert_eq!(stdout, "1\n2\n");
    assert!(stderr.contains("parsed column"));
}
