//! Physical board geometry shared by many routes.

use serde::{Deserialize, Serialize};

/// Identifier of a physical board layout.
pub type LayoutId = u32;

/// One physical hold position on a board layout.
///
/// Board geometry is an unordered point cloud used as a faint background
/// reference behind a route's holds; it is independent of any specific route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardPoint {
    /// X position on the board
    pub x: f64,
    /// Y position on the board
    pub y: f64,
}
