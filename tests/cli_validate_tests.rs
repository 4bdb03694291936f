//! End-to-end tests for `betaboard validate` command.

use std::process::Command;

mod fixtures;
use fixtures::*;

/// Path to the betaboard binary
fn betaboard_bin() -> &'static str {
    env!("CARGO_BIN_EXE_betaboard")
}

#[test]
fn test_validate_standard_archive() {
    let (archive, _temp_dir) = standard_archive();

    let output = Command::new(betaboard_bin())
        .args(["validate", "--archive", archive.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Valid archive should exit with code 0. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓") || stdout.contains("valid"));
    assert!(stdout.contains("4 routes"));
}

#[test]
fn test_validate_standard_archive_json() {
    let (archive, _temp_dir) = standard_archive();

    let output = Command::new(betaboard_bin())
        .args(["validate", "--archive", archive.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout))
            .expect("Should parse JSON output");

    assert_eq!(result["valid"], true);
    assert!(result["errors"].is_array());
    assert!(result["checks"].is_object());
    assert_eq!(result["checks"]["archive"], "passed");
    assert_eq!(result["checks"]["routes"], "passed");
    // The standard fixture ships known imperfections: an unknown role,
    // a route without holds, and a layout without geometry
    assert_eq!(result["checks"]["holds"], "warning");
    assert_eq!(result["checks"]["geometry"], "warning");
}

#[test]
fn test_validate_reports_warnings() {
    let (archive, _temp_dir) = standard_archive();

    let output = Command::new(betaboard_bin())
        .args(["validate", "--archive", archive.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");

    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();

    let warnings: Vec<&str> = result["errors"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|m| m["severity"] == "warning")
        .map(|m| m["message"].as_str().unwrap())
        .collect();

    assert!(warnings.iter().any(|m| m.contains("unknown roles")));
    assert!(warnings.iter().any(|m| m.contains("no hold list")));
    assert!(warnings
        .iter()
        .any(|m| m.contains("layout without board geometry")));
}

#[test]
fn test_validate_strict_fails_on_warnings() {
    let (archive, _temp_dir) = standard_archive();

    let normal = Command::new(betaboard_bin())
        .args(["validate", "--archive", archive.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");
    let strict = Command::new(betaboard_bin())
        .args([
            "validate",
            "--archive",
            archive.to_str().unwrap(),
            "--strict",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(normal.status.code(), Some(0));
    assert_eq!(
        strict.status.code(),
        Some(1),
        "Warnings should fail in strict mode"
    );
}

#[test]
fn test_validate_missing_member_fails() {
    let (archive, _temp_dir) = archive_missing_member("holds.json");

    let output = Command::new(betaboard_bin())
        .args(["validate", "--archive", archive.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(1),
        "Broken archive should exit with code 1"
    );

    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(result["valid"], false);
    assert_eq!(result["checks"]["archive"], "failed");

    let errors = result["errors"].as_array().unwrap();
    assert!(errors
        .iter()
        .any(|m| m["severity"] == "error" && m["message"].as_str().unwrap().contains("holds.json")));
}

#[test]
fn test_validate_manifest_count_mismatch_warns() {
    let manifest = serde_json::json!({
        "version": 1,
        "exported_at": "2026-05-01T12:00:00Z",
        "route_count": 99
    });
    let (archive, _temp_dir) = write_archive_members(&[
        ("routes.json", routes_json().to_string()),
        ("holds.json", holds_json().to_string()),
        ("board_geometry.json", boards_json().to_string()),
        ("manifest.json", manifest.to_string()),
    ]);

    let output = Command::new(betaboard_bin())
        .args(["validate", "--archive", archive.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0), "Mismatch is a warning, not fatal");

    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(result["valid"], true);
    assert_eq!(result["checks"]["routes"], "warning");
}

#[test]
fn test_validate_nonexistent_path_is_io_error() {
    let output = Command::new(betaboard_bin())
        .args(["validate", "--archive", "/nonexistent/routes.zip"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}
