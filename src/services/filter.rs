//! Pure filter engine over the route table.
//!
//! Filtering produces a [`FilteredRoutes`] snapshot: the ordered positions of
//! matching routes within the full table. Point picks resolve a positional
//! index into a route id against the snapshot that was current at the moment
//! of the interaction; snapshots are rebuilt from scratch whenever the filter
//! parameters change, so indices never outlive the parameters they came from.

use crate::models::{FilterParams, Route, RouteId};

/// Ordered snapshot of the routes passing the current filter.
///
/// Holds indices into the full table, preserving original relative order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilteredRoutes {
    indices: Vec<usize>,
}

impl FilteredRoutes {
    /// Number of routes in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the snapshot is empty (a valid zero-count state, not an error).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The route at snapshot position `position`, resolved against the table
    /// the snapshot was built from.
    #[must_use]
    pub fn route_at<'a>(&self, routes: &'a [Route], position: usize) -> Option<&'a Route> {
        self.indices.get(position).map(|&index| &routes[index])
    }

    /// The id at snapshot position `position`.
    #[must_use]
    pub fn id_at(&self, routes: &[Route], position: usize) -> Option<RouteId> {
        self.route_at(routes, position).map(|r| r.id.clone())
    }

    /// The snapshot position of the given route id, if it passed the filter.
    #[must_use]
    pub fn position_of(&self, routes: &[Route], id: &RouteId) -> Option<usize> {
        self.indices
            .iter()
            .position(|&index| routes[index].id == *id)
    }

    /// Whether the given route id passed the filter.
    #[must_use]
    pub fn contains(&self, routes: &[Route], id: &RouteId) -> bool {
        self.position_of(routes, id).is_some()
    }

    /// Iterates the matching routes in table order.
    pub fn iter<'a>(&'a self, routes: &'a [Route]) -> impl Iterator<Item = &'a Route> + 'a {
        self.indices.iter().map(move |&index| &routes[index])
    }

    /// The underlying table indices, in snapshot order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}

/// Applies the filter predicate to the full route table.
///
/// A route passes when its grade and ascent count fall inside the inclusive
/// ranges and, if a name query is set, its name contains the query
/// case-insensitively. Original relative order is preserved. Pure: no side
/// effects, same inputs always yield the same snapshot.
#[must_use]
pub fn filter_routes(routes: &[Route], params: &FilterParams) -> FilteredRoutes {
    let query = params.name_query().map(str::to_lowercase);

    let indices = routes
        .iter()
        .enumerate()
        .filter(|(_, route)| {
            params.range_matches(route)
                && query
                    .as_deref()
                    .map_or(true, |q| route.name.to_lowercase().contains(q))
        })
        .map(|(index, _)| index)
        .collect();

    FilteredRoutes { indices }
}
