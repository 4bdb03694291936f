//! Shared test fixtures for archive and E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use serde_json::{json, Value};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// The standard route table: four routes with distinct grades, ascent
/// counts, and names, covering the filter edge cases.
pub fn routes_json() -> Value {
    json!([
        {
            "id": "a",
            "name": "Red Wall",
            "grade": 2.0,
            "quality": 2.4,
            "ascents": 10,
            "setter": "alex",
            "emb_x": -1.5,
            "emb_y": 0.25,
            "layout_id": 1
        },
        {
            "id": "b",
            "name": "Blue Slab",
            "grade": 5.0,
            "quality": 1.9,
            "ascents": 0,
            "setter": "sam",
            "emb_x": 0.75,
            "emb_y": -2.0,
            "layout_id": 1
        },
        {
            "id": "c",
            "name": "Raven's Nest",
            "grade": 5.0,
            "quality": 2.9,
            "ascents": 120,
            "setter": "alex",
            "emb_x": 2.0,
            "emb_y": 1.0,
            "layout_id": 2
        },
        {
            "id": "d",
            "name": "Moon Traverse",
            "grade": 7.0,
            "quality": 2.6,
            "ascents": 33,
            "setter": "kim",
            "emb_x": -0.5,
            "emb_y": 3.0
        }
    ])
}

/// Hold lists for the standard table. Route "b" has no entry; route "c"
/// carries one hold with an unknown role.
pub fn holds_json() -> Value {
    json!({
        "a": [
            {"x": 4.0, "y": 2.0, "role": "start"},
            {"x": 5.0, "y": 8.0, "role": "hand"},
            {"x": 6.0, "y": 14.0, "role": "finish"},
            {"x": 3.0, "y": 1.0, "role": "foot"}
        ],
        "c": [
            {"x": 1.0, "y": 2.0, "role": "start"},
            {"x": 2.0, "y": 9.0, "role": "hand"},
            {"x": 2.5, "y": 15.0, "role": "finish"},
            {"x": 2.2, "y": 7.0, "role": "matching"}
        ],
        "d": [
            {"x": 7.0, "y": 3.0, "role": "start"},
            {"x": 8.0, "y": 12.0, "role": "finish"}
        ]
    })
}

/// Board geometry for layout 1 only; layout 2 (route "c") has none.
pub fn boards_json() -> Value {
    json!({
        "1": [
            {"x": 0.0, "y": 0.0},
            {"x": 4.0, "y": 2.0},
            {"x": 5.0, "y": 8.0},
            {"x": 6.0, "y": 14.0},
            {"x": 3.0, "y": 1.0},
            {"x": 9.0, "y": 9.0}
        ]
    })
}

/// Manifest matching the standard route table.
pub fn manifest_json() -> Value {
    json!({
        "version": 1,
        "exported_at": "2026-05-01T12:00:00Z",
        "route_count": 4
    })
}

/// Writes a zip archive with the given members into a fresh temp dir.
///
/// Returns the archive path and the guard keeping the directory alive.
pub fn write_archive_members(members: &[(&str, String)]) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("routes.zip");

    let file = File::create(&path).expect("Failed to create archive file");
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    for (name, content) in members {
        zip.start_file(*name, options).expect("Failed to start member");
        zip.write_all(content.as_bytes())
            .expect("Failed to write member");
    }
    zip.finish().expect("Failed to finish archive");

    (path, temp_dir)
}

/// The standard valid archive: four routes, holds, geometry, manifest.
pub fn standard_archive() -> (PathBuf, TempDir) {
    write_archive_members(&[
        ("routes.json", routes_json().to_string()),
        ("holds.json", holds_json().to_string()),
        ("board_geometry.json", boards_json().to_string()),
        ("manifest.json", manifest_json().to_string()),
    ])
}

/// A valid archive without the optional manifest member.
pub fn archive_without_manifest() -> (PathBuf, TempDir) {
    write_archive_members(&[
        ("routes.json", routes_json().to_string()),
        ("holds.json", holds_json().to_string()),
        ("board_geometry.json", boards_json().to_string()),
    ])
}

/// An archive missing one required member.
pub fn archive_missing_member(missing: &str) -> (PathBuf, TempDir) {
    let members: Vec<(&str, String)> = [
        ("routes.json", routes_json().to_string()),
        ("holds.json", holds_json().to_string()),
        ("board_geometry.json", boards_json().to_string()),
    ]
    .into_iter()
    .filter(|(name, _)| *name != missing)
    .collect();

    write_archive_members(&members)
}
