//! Route records from the offline export.

use serde::{Deserialize, Serialize};

use super::board::LayoutId;

/// Opaque route identifier minted by the export pipeline.
///
/// Ids are unique across the route table. They are treated as plain strings;
/// nothing in this program generates or interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(String);

impl RouteId {
    /// Creates a route id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RouteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RouteId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A single climbing route with its precomputed embedding position.
///
/// # Invariants
///
/// - `id` is unique across the route table (enforced by the loader)
/// - `embedding_x`/`embedding_y` are finite for every loaded route; rows
///   without coordinates are excluded by the export pipeline upstream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Unique route identifier
    pub id: RouteId,
    /// Display name
    pub name: String,
    /// Numeric difficulty grade (V-scale)
    pub grade: f64,
    /// Community quality score
    pub quality: f64,
    /// Recorded ascent count
    pub ascents: u32,
    /// Name of the setter
    pub setter: String,
    /// Embedding X coordinate (2-D projection of the route representation)
    #[serde(rename = "emb_x")]
    pub embedding_x: f64,
    /// Embedding Y coordinate
    #[serde(rename = "emb_y")]
    pub embedding_y: f64,
    /// Board layout this route was set on, when known
    #[serde(default)]
    pub layout_id: Option<LayoutId>,
}

impl Route {
    /// Formats the grade for display, e.g. `V5` or `V5.5`.
    #[must_use]
    pub fn grade_label(&self) -> String {
        if (self.grade - self.grade.round()).abs() < f64::EPSILON {
            format!("V{}", self.grade.round() as i64)
        } else {
            format!("V{:.1}", self.grade)
        }
    }

    /// Returns the embedding position as an (x, y) pair.
    #[must_use]
    pub const fn embedding(&self) -> (f64, f64) {
        (self.embedding_x, self.embedding_y)
    }

    /// Checks that both embedding coordinates are finite numbers.
    #[must_use]
    pub fn has_finite_embedding(&self) -> bool {
        self.embedding_x.is_finite() && self.embedding_y.is_finite()
    }
}
