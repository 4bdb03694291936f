//! Immutable in-memory catalog of routes, holds, and board geometry.

use anyhow::Result;
use std::collections::HashMap;
use tracing::warn;

use crate::models::{BoardPoint, DataBounds, Hold, LayoutId, Route, RouteId};

use super::archive::Manifest;

/// The loaded data package: route table, hold lists, board geometry.
///
/// Built once at startup and treated as read-only for the lifetime of the
/// process. All lookups go through the id index; iteration order over
/// `routes()` is the original table order, which filtered snapshots preserve.
#[derive(Debug, Clone)]
pub struct RouteCatalog {
    routes: Vec<Route>,
    by_id: HashMap<RouteId, usize>,
    holds: HashMap<RouteId, Vec<Hold>>,
    boards: HashMap<LayoutId, Vec<BoardPoint>>,
    bounds: DataBounds,
    manifest: Option<Manifest>,
}

impl RouteCatalog {
    /// Assembles a catalog from already-parsed members.
    ///
    /// # Errors
    ///
    /// Rejects duplicate route ids and non-finite embedding coordinates;
    /// both indicate a broken export and rendering must not proceed.
    pub fn from_parts(
        routes: Vec<Route>,
        holds: HashMap<RouteId, Vec<Hold>>,
        boards: HashMap<LayoutId, Vec<BoardPoint>>,
        manifest: Option<Manifest>,
    ) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(routes.len());
        for (index, route) in routes.iter().enumerate() {
            if !route.has_finite_embedding() {
                anyhow::bail!(
                    "Route '{}' has non-finite embedding coordinates",
                    route.id
                );
            }
            if by_id.insert(route.id.clone(), index).is_some() {
                anyhow::bail!("Duplicate route id in route table: '{}'", route.id);
            }
        }

        let orphaned = holds.keys().filter(|id| !by_id.contains_key(*id)).count();
        if orphaned > 0 {
            warn!(orphaned, "hold lists reference routes not in the table");
        }

        let bounds = DataBounds::from_routes(&routes);

        Ok(Self {
            routes,
            by_id,
            holds,
            boards,
            bounds,
            manifest,
        })
    }

    /// The full route table in original order.
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of routes in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Looks up a route by id in the full (unfiltered) table.
    #[must_use]
    pub fn get(&self, id: &RouteId) -> Option<&Route> {
        self.by_id.get(id).map(|&index| &self.routes[index])
    }

    /// The hold list for a route, when the export carries one.
    #[must_use]
    pub fn holds_for(&self, id: &RouteId) -> Option<&[Hold]> {
        self.holds.get(id).map(Vec::as_slice)
    }

    /// Background geometry for a board layout, when available.
    #[must_use]
    pub fn board_for(&self, layout_id: LayoutId) -> Option<&[BoardPoint]> {
        self.boards.get(&layout_id).map(Vec::as_slice)
    }

    /// Background geometry for the layout a route was set on.
    #[must_use]
    pub fn board_for_route(&self, route: &Route) -> Option<&[BoardPoint]> {
        route.layout_id.and_then(|id| self.board_for(id))
    }

    /// Observed min/max grade and ascent count across the table.
    #[must_use]
    pub const fn bounds(&self) -> DataBounds {
        self.bounds
    }

    /// Export provenance, when the archive carried a manifest.
    #[must_use]
    pub const fn manifest(&self) -> Option<&Manifest> {
        self.manifest.as_ref()
    }

    /// All layout ids with geometry, sorted.
    #[must_use]
    pub fn layout_ids(&self) -> Vec<LayoutId> {
        let mut ids: Vec<LayoutId> = self.boards.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Ids of hold lists that do not match any route in the table.
    #[must_use]
    pub fn orphaned_hold_ids(&self) -> Vec<&RouteId> {
        self.holds
            .keys()
            .filter(|id| !self.by_id.contains_key(*id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HoldRole;

    fn route(id: &str, name: &str, grade: f64, ascents: u32, layout_id: Option<u32>) -> Route {
        Route {
            id: RouteId::from(id),
            name: name.to_string(),
            grade,
            quality: 2.5,
            ascents,
            setter: "tester".to_string(),
            embedding_x: grade,
            embedding_y: ascents as f64,
            layout_id,
        }
    }

    fn sample_catalog() -> RouteCatalog {
        let routes = vec![
            route("a", "Red Wall", 2.0, 10, Some(1)),
            route("b", "Blue Slab", 5.0, 0, Some(2)),
        ];
        let mut holds = HashMap::new();
        holds.insert(
            RouteId::from("a"),
            vec![Hold {
                x: 1.0,
                y: 2.0,
                role: HoldRole::Start,
            }],
        );
        let mut boards = HashMap::new();
        boards.insert(1, vec![BoardPoint { x: 0.0, y: 0.0 }]);

        RouteCatalog::from_parts(routes, holds, boards, None).unwrap()
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = sample_catalog();
        assert_eq!(catalog.get(&RouteId::from("a")).unwrap().name, "Red Wall");
        assert!(catalog.get(&RouteId::from("zzz")).is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let routes = vec![
            route("a", "Red Wall", 2.0, 10, None),
            route("a", "Red Wall Again", 3.0, 4, None),
        ];
        let result = RouteCatalog::from_parts(routes, HashMap::new(), HashMap::new(), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_finite_embedding_rejected() {
        let mut bad = route("a", "Red Wall", 2.0, 10, None);
        bad.embedding_x = f64::INFINITY;
        let result = RouteCatalog::from_parts(vec![bad], HashMap::new(), HashMap::new(), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_holds_and_board_are_none() {
        let catalog = sample_catalog();
        // "b" has no holds entry and its layout (2) has no geometry
        let b = RouteId::from("b");
        assert!(catalog.holds_for(&b).is_none());
        let route_b = catalog.get(&b).unwrap();
        assert!(catalog.board_for_route(route_b).is_none());
    }

    #[test]
    fn test_orphaned_hold_lists_detected() {
        let routes = vec![route("a", "Red Wall", 2.0, 10, None)];
        let mut holds = HashMap::new();
        holds.insert(RouteId::from("gone"), vec![]);
        let catalog = RouteCatalog::from_parts(routes, holds, HashMap::new(), None).unwrap();
        assert_eq!(catalog.orphaned_hold_ids(), [&RouteId::from("gone")]);
    }

    #[test]
    fn test_bounds_computed_over_table() {
        let catalog = sample_catalog();
        let bounds = catalog.bounds();
        assert_eq!(bounds.grade_min, 2.0);
        assert_eq!(bounds.grade_max, 5.0);
        assert_eq!(bounds.ascents_max, 10);
    }
}
