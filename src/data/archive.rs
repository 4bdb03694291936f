//! Zip archive reader for the route data package.
//!
//! The archive must contain `routes.json`, `holds.json`, and
//! `board_geometry.json`; `manifest.json` is optional provenance. A missing
//! archive or required member aborts the load with a user-visible error
//! rather than rendering with partial data.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};
use zip::ZipArchive;

use crate::constants::{MEMBER_BOARD_GEOMETRY, MEMBER_HOLDS, MEMBER_MANIFEST, MEMBER_ROUTES};
use crate::models::{BoardPoint, Hold, LayoutId, Route, RouteId};

use super::catalog::RouteCatalog;

/// Export provenance stamped by the offline pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Archive format version
    pub version: u32,
    /// When the export was produced
    pub exported_at: DateTime<Utc>,
    /// Number of routes in the export
    pub route_count: usize,
}

/// Archive format version this build understands.
pub const SUPPORTED_ARCHIVE_VERSION: u32 = 1;

/// Loads the route archive into an immutable catalog.
///
/// Fails fast with a contextual error chain when the archive or any of the
/// three required members is missing or malformed. A manifest with an
/// unsupported version is rejected; an absent manifest is tolerated.
pub fn load_archive(path: &Path) -> Result<RouteCatalog> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open data archive: {}", path.display()))?;
    let mut zip = ZipArchive::new(file)
        .with_context(|| format!("Not a readable zip archive: {}", path.display()))?;

    let routes: Vec<Route> = read_member(&mut zip, MEMBER_ROUTES)?;
    let holds: HashMap<RouteId, Vec<Hold>> = read_member(&mut zip, MEMBER_HOLDS)?;
    let boards: HashMap<LayoutId, Vec<BoardPoint>> = read_board_geometry(&mut zip)?;
    let manifest = read_manifest(&mut zip)?;

    debug!(
        routes = routes.len(),
        hold_lists = holds.len(),
        layouts = boards.len(),
        "loaded archive members"
    );

    if let Some(manifest) = &manifest {
        if manifest.route_count != routes.len() {
            warn!(
                manifest = manifest.route_count,
                actual = routes.len(),
                "manifest route count disagrees with route table"
            );
        }
    }

    RouteCatalog::from_parts(routes, holds, boards, manifest)
}

/// Reads and deserializes a required JSON member.
fn read_member<T: DeserializeOwned>(zip: &mut ZipArchive<File>, name: &str) -> Result<T> {
    let mut member = zip
        .by_name(name)
        .with_context(|| format!("Archive is missing required member '{name}'"))?;

    let mut content = String::with_capacity(member.size() as usize);
    member
        .read_to_string(&mut content)
        .with_context(|| format!("Failed to read archive member '{name}'"))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse archive member '{name}'"))
}

/// Reads board geometry, whose layout-id keys arrive as JSON strings.
fn read_board_geometry(zip: &mut ZipArchive<File>) -> Result<HashMap<LayoutId, Vec<BoardPoint>>> {
    let raw: HashMap<String, Vec<BoardPoint>> = read_member(zip, MEMBER_BOARD_GEOMETRY)?;

    let mut boards = HashMap::with_capacity(raw.len());
    for (key, points) in raw {
        let layout_id: LayoutId = key.parse().with_context(|| {
            format!("Invalid layout id '{key}' in '{MEMBER_BOARD_GEOMETRY}'")
        })?;
        boards.insert(layout_id, points);
    }

    Ok(boards)
}

/// Reads the optional manifest member, validating its version when present.
fn read_manifest(zip: &mut ZipArchive<File>) -> Result<Option<Manifest>> {
    if zip.by_name(MEMBER_MANIFEST).is_err() {
        debug!("archive carries no manifest");
        return Ok(None);
    }

    let manifest: Manifest = read_member(zip, MEMBER_MANIFEST)?;
    if manifest.version > SUPPORTED_ARCHIVE_VERSION {
        anyhow::bail!(
            "Archive format version {} is newer than supported version {}",
            manifest.version,
            SUPPORTED_ARCHIVE_VERSION
        );
    }

    Ok(Some(manifest))
}
