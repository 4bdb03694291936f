//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the archive member layout.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Betaboard";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "betaboard";

/// Default file name of the route data archive.
pub const DEFAULT_ARCHIVE_NAME: &str = "routes.zip";

/// Archive member holding the route table.
pub const MEMBER_ROUTES: &str = "routes.json";

/// Archive member holding the per-route hold lists.
pub const MEMBER_HOLDS: &str = "holds.json";

/// Archive member holding the per-layout board geometry.
pub const MEMBER_BOARD_GEOMETRY: &str = "board_geometry.json";

/// Optional archive member holding export provenance.
pub const MEMBER_MANIFEST: &str = "manifest.json";
