//! Integration tests for the gvrm-export binary
//!
//! Runs the built executable and checks exit status and output directory.

mod generate_test_archives;

use generate_test_archives::*;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

// Helper to run gvrm-export <input> -o <output>
fn gvrm_export(input: &Path, output: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gvrm-export"))
        .arg(input)
        .arg("-o")
        .arg(output)
        .output()
        .expect("Failed to run gvrm-export")
}

#[test]
fn test_cli_success() {
    let dir = tempdir().unwrap();
    let input = write_gvrm(dir.path(), "author.gvrm", REFERENCE_DATA_JSON);
    let output = dir.path().join("output");

    let result = gvrm_export(&input, &output);
    assert!(
        result.status.success(),
        "gvrm-export failed: {}",
        String::from_utf8_lossy(&result.stderr)
    );
    assert_eq!(result.status.code(), Some(0));
    assert_eq!(output_listing(&output).len(), 5);
}

#[test]
fn test_cli_long_output_flag() {
    let dir = tempdir().unwrap();
    let input = write_gvrm(dir.path(), "many.gvrm", &generated_data_json(12, 4));
    let output = dir.path().join("nested").join("output");

    let status = Command::new(env!("CARGO_BIN_EXE_gvrm-export"))
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--verbose")
        .status()
        .expect("Failed to run gvrm-export");
    assert!(status.success());
    let csv = std::fs::read_to_string(output.join("splat_binding.csv")).unwrap();
    assert_eq!(csv.lines().count(), 13);
}

#[test]
fn test_cli_missing_input_exits_1() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("output");

    let result = gvrm_export(&dir.path().join("missing.gvrm"), &output);
    assert_eq!(result.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("GVRM file not found"), "stderr: {stderr}");
    assert!(!output.exists());
}

#[test]
fn test_cli_malformed_archive_exits_1() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("nodata.gvrm");
    write_archive(&input, &[("model.vrm", VRM_BYTES)]);
    let output = dir.path().join("output");

    let result = gvrm_export(&input, &output);
    assert_eq!(result.status.code(), Some(1));

    // Full cause chain is reported
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Caused by"), "stderr: {stderr}");
    assert!(stderr.contains("missing required entry 'data.json'"), "stderr: {stderr}");
}

#[test]
fn test_cli_requires_output() {
    let dir = tempdir().unwrap();
    let input = write_gvrm(dir.path(), "author.gvrm", REFERENCE_DATA_JSON);

    let status = Command::new(env!("CARGO_BIN_EXE_gvrm-export"))
        .arg(&input)
        .status()
        .expect("Failed to run gvrm-export");
    assert!(!status.success());
}

#[test]
fn test_cli_io_failure_exits_1() {
    let dir = tempdir().unwrap();
    let input = write_gvrm(dir.path(), "author.gvrm", REFERENCE_DATA_JSON);
    let output = dir.path().join("output");
    std::fs::write(&output, b"regular file").unwrap();

    let result = gvrm_export(&input, &output);
    assert_eq!(result.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(
        stderr.contains("Failed to create output directory"),
        "stderr: {stderr}"
    );
    assert!(stderr.contains("Caused by"), "stderr: {stderr}");
}
