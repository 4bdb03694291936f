//! Integration tests for the archive loader.

use betaboard::data::load_archive;
use betaboard::models::{HoldRole, RouteId};

mod fixtures;
use fixtures::*;

#[test]
fn test_standard_archive_loads() {
    let (path, _temp_dir) = standard_archive();
    let catalog = load_archive(&path).expect("Standard archive should load");

    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.get(&RouteId::from("a")).unwrap().name, "Red Wall");
    assert_eq!(catalog.layout_ids(), [1]);

    let manifest = catalog.manifest().expect("Manifest should be present");
    assert_eq!(manifest.version, 1);
    assert_eq!(manifest.route_count, 4);
}

#[test]
fn test_bounds_seeded_from_table() {
    let (path, _temp_dir) = standard_archive();
    let catalog = load_archive(&path).unwrap();

    let bounds = catalog.bounds();
    assert_eq!(bounds.grade_min, 2.0);
    assert_eq!(bounds.grade_max, 7.0);
    assert_eq!(bounds.ascents_min, 0);
    assert_eq!(bounds.ascents_max, 120);
}

#[test]
fn test_missing_archive_file_fails() {
    let result = load_archive(std::path::Path::new("/nonexistent/routes.zip"));
    assert!(result.is_err());
}

#[test]
fn test_missing_required_members_fail() {
    for member in ["routes.json", "holds.json", "board_geometry.json"] {
        let (path, _temp_dir) = archive_missing_member(member);
        let error = load_archive(&path).unwrap_err();
        assert!(
            format!("{error:#}").contains(member),
            "Error should name the missing member '{member}'"
        );
    }
}

#[test]
fn test_malformed_member_fails() {
    let (path, _temp_dir) = write_archive_members(&[
        ("routes.json", "not json at all".to_string()),
        ("holds.json", holds_json().to_string()),
        ("board_geometry.json", boards_json().to_string()),
    ]);
    let error = load_archive(&path).unwrap_err();
    assert!(format!("{error:#}").contains("routes.json"));
}

#[test]
fn test_manifest_is_optional() {
    let (path, _temp_dir) = archive_without_manifest();
    let catalog = load_archive(&path).expect("Archive without manifest should load");
    assert!(catalog.manifest().is_none());
}

#[test]
fn test_newer_manifest_version_rejected() {
    let manifest = serde_json::json!({
        "version": 99,
        "exported_at": "2026-05-01T12:00:00Z",
        "route_count": 4
    });
    let (path, _temp_dir) = write_archive_members(&[
        ("routes.json", routes_json().to_string()),
        ("holds.json", holds_json().to_string()),
        ("board_geometry.json", boards_json().to_string()),
        ("manifest.json", manifest.to_string()),
    ]);
    let error = load_archive(&path).unwrap_err();
    assert!(format!("{error:#}").contains("version"));
}

#[test]
fn test_duplicate_route_ids_rejected() {
    let routes = serde_json::json!([
        {"id": "a", "name": "One", "grade": 2.0, "quality": 2.0, "ascents": 1,
         "setter": "s", "emb_x": 0.0, "emb_y": 0.0},
        {"id": "a", "name": "Two", "grade": 3.0, "quality": 2.0, "ascents": 2,
         "setter": "s", "emb_x": 1.0, "emb_y": 1.0}
    ]);
    let (path, _temp_dir) = write_archive_members(&[
        ("routes.json", routes.to_string()),
        ("holds.json", "{}".to_string()),
        ("board_geometry.json", "{}".to_string()),
    ]);
    let error = load_archive(&path).unwrap_err();
    assert!(format!("{error:#}").contains("Duplicate"));
}

#[test]
fn test_unknown_hold_role_is_tolerated() {
    let (path, _temp_dir) = standard_archive();
    let catalog = load_archive(&path).unwrap();

    // Route "c" carries one hold tagged "matching"
    let holds = catalog.holds_for(&RouteId::from("c")).unwrap();
    assert_eq!(holds.len(), 4);
    assert_eq!(
        holds.iter().filter(|h| h.role == HoldRole::Unknown).count(),
        1
    );
}

#[test]
fn test_invalid_layout_key_rejected() {
    let boards = serde_json::json!({"not-a-number": [{"x": 0.0, "y": 0.0}]});
    let (path, _temp_dir) = write_archive_members(&[
        ("routes.json", routes_json().to_string()),
        ("holds.json", holds_json().to_string()),
        ("board_geometry.json", boards.to_string()),
    ]);
    let error = load_archive(&path).unwrap_err();
    assert!(format!("{error:#}").contains("layout id"));
}

#[test]
fn test_missing_layers_resolve_to_none() {
    let (path, _temp_dir) = standard_archive();
    let catalog = load_archive(&path).unwrap();

    // "b" has no hold list; "c" sits on layout 2 which has no geometry
    assert!(catalog.holds_for(&RouteId::from("b")).is_none());
    let c = catalog.get(&RouteId::from("c")).unwrap();
    assert!(catalog.board_for_route(c).is_none());
}
