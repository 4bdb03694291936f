//! End-to-end tests for `betaboard inspect` command.

use std::process::Command;

mod fixtures;
use fixtures::*;

/// Path to the betaboard binary
fn betaboard_bin() -> &'static str {
    env!("CARGO_BIN_EXE_betaboard")
}

#[test]
fn test_inspect_route_json() {
    let (archive, _temp_dir) = standard_archive();

    let output = Command::new(betaboard_bin())
        .args([
            "inspect",
            "--archive",
            archive.to_str().unwrap(),
            "--route",
            "a",
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout))
            .expect("Should parse JSON output");

    assert_eq!(result["id"], "a");
    assert_eq!(result["name"], "Red Wall");
    assert_eq!(result["grade_label"], "V2");
    assert_eq!(result["ascents"], 10);
    assert_eq!(result["setter"], "alex");
    assert_eq!(result["layout_id"], 1);
    assert_eq!(result["board_points"], 6);

    // One hold per role, in legend order
    let roles = result["roles"].as_array().expect("Should have roles");
    let names: Vec<&str> = roles.iter().map(|g| g["role"].as_str().unwrap()).collect();
    assert_eq!(names, ["start", "hand", "finish", "foot"]);
    for group in roles {
        assert_eq!(group["holds"].as_array().unwrap().len(), 1);
    }
}

#[test]
fn test_inspect_route_plain() {
    let (archive, _temp_dir) = standard_archive();

    let output = Command::new(betaboard_bin())
        .args([
            "inspect",
            "--archive",
            archive.to_str().unwrap(),
            "--route",
            "c",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Name:"));
    assert!(stdout.contains("Raven's Nest"));
    assert!(stdout.contains("Grade:"));
    assert!(stdout.contains("V5"));
    assert!(stdout.contains("Holds:"));
    // Layout 2 has no geometry
    assert!(stdout.contains("no geometry available"));
}

#[test]
fn test_inspect_unknown_role_is_excluded() {
    let (archive, _temp_dir) = standard_archive();

    let output = Command::new(betaboard_bin())
        .args([
            "inspect",
            "--archive",
            archive.to_str().unwrap(),
            "--route",
            "c",
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();

    // Route "c" has 4 holds but one is tagged "matching": only 3 render
    let total: usize = result["roles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["holds"].as_array().unwrap().len())
        .sum();
    assert_eq!(total, 3);
}

#[test]
fn test_inspect_route_without_holds_succeeds() {
    let (archive, _temp_dir) = standard_archive();

    let output = Command::new(betaboard_bin())
        .args([
            "inspect",
            "--archive",
            archive.to_str().unwrap(),
            "--route",
            "b",
        ])
        .output()
        .expect("Failed to execute command");

    // Missing holds render as summary + background, never an error
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Blue Slab"));
    assert!(stdout.contains("none recorded"));
    assert!(stdout.contains("6 reference points"));
}

#[test]
fn test_inspect_unknown_route_fails() {
    let (archive, _temp_dir) = standard_archive();

    let output = Command::new(betaboard_bin())
        .args([
            "inspect",
            "--archive",
            archive.to_str().unwrap(),
            "--route",
            "does-not-exist",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(1),
        "Unknown route id should exit with code 1"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does-not-exist"));
}
