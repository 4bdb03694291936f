//! Filter parameters and observed data bounds.

use serde::{Deserialize, Serialize};

use super::route::Route;

/// Inclusive grade range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeRange {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
}

impl GradeRange {
    /// Whether `grade` falls inside the range.
    #[must_use]
    pub fn contains(&self, grade: f64) -> bool {
        grade >= self.min && grade <= self.max
    }
}

/// Inclusive ascent-count range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AscentRange {
    /// Lower bound (inclusive)
    pub min: u32,
    /// Upper bound (inclusive)
    pub max: u32,
}

impl AscentRange {
    /// Whether `ascents` falls inside the range.
    #[must_use]
    pub const fn contains(&self, ascents: u32) -> bool {
        ascents >= self.min && ascents <= self.max
    }
}

/// Observed minimum/maximum values across the full route table.
///
/// Range controls are seeded from these bounds so the initial filter passes
/// every route, and adjustments are clamped back into them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataBounds {
    /// Lowest grade in the table
    pub grade_min: f64,
    /// Highest grade in the table
    pub grade_max: f64,
    /// Lowest ascent count in the table
    pub ascents_min: u32,
    /// Highest ascent count in the table
    pub ascents_max: u32,
}

impl DataBounds {
    /// Computes bounds over a route table.
    ///
    /// An empty table yields a degenerate zero range, which still produces a
    /// valid (everything-passes) filter.
    #[must_use]
    pub fn from_routes(routes: &[Route]) -> Self {
        let mut bounds = Self {
            grade_min: f64::INFINITY,
            grade_max: f64::NEG_INFINITY,
            ascents_min: u32::MAX,
            ascents_max: 0,
        };

        for route in routes {
            bounds.grade_min = bounds.grade_min.min(route.grade);
            bounds.grade_max = bounds.grade_max.max(route.grade);
            bounds.ascents_min = bounds.ascents_min.min(route.ascents);
            bounds.ascents_max = bounds.ascents_max.max(route.ascents);
        }

        if routes.is_empty() {
            bounds.grade_min = 0.0;
            bounds.grade_max = 0.0;
            bounds.ascents_min = 0;
        }

        bounds
    }
}

/// Current filter parameters for the route table.
///
/// Recomputed from UI state on every interaction; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterParams {
    /// Grade range, inclusive on both ends
    pub grade: GradeRange,
    /// Ascent-count range, inclusive on both ends
    pub ascents: AscentRange,
    /// Case-insensitive name substring; empty means no name filtering
    pub query: String,
}

impl FilterParams {
    /// Builds the widest filter for the given bounds (passes every route).
    #[must_use]
    pub fn from_bounds(bounds: &DataBounds) -> Self {
        Self {
            grade: GradeRange {
                min: bounds.grade_min,
                max: bounds.grade_max,
            },
            ascents: AscentRange {
                min: bounds.ascents_min,
                max: bounds.ascents_max,
            },
            query: String::new(),
        }
    }

    /// Clamps both ranges back into the observed data bounds and repairs
    /// inverted ranges by collapsing them onto the moved endpoint.
    pub fn clamp_to(&mut self, bounds: &DataBounds) {
        self.grade.min = self.grade.min.clamp(bounds.grade_min, bounds.grade_max);
        self.grade.max = self.grade.max.clamp(bounds.grade_min, bounds.grade_max);
        if self.grade.min > self.grade.max {
            self.grade.max = self.grade.min;
        }

        self.ascents.min = self
            .ascents
            .min
            .clamp(bounds.ascents_min, bounds.ascents_max);
        self.ascents.max = self
            .ascents
            .max
            .clamp(bounds.ascents_min, bounds.ascents_max);
        if self.ascents.min > self.ascents.max {
            self.ascents.max = self.ascents.min;
        }
    }

    /// The active name query, or `None` when no name filtering applies.
    #[must_use]
    pub fn name_query(&self) -> Option<&str> {
        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }

    /// Whether a route passes the numeric range predicates.
    #[must_use]
    pub fn range_matches(&self, route: &Route) -> bool {
        self.grade.contains(route.grade) && self.ascents.contains(route.ascents)
    }

    /// Whether a route passes the full predicate (ranges + name query).
    #[must_use]
    pub fn matches(&self, route: &Route) -> bool {
        if !self.range_matches(route) {
            return false;
        }
        match self.name_query() {
            None => true,
            Some(query) => route.name.to_lowercase().contains(&query.to_lowercase()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RouteId;

    fn route(id: &str, name: &str, grade: f64, ascents: u32) -> Route {
        Route {
            id: RouteId::from(id),
            name: name.to_string(),
            grade,
            quality: 2.0,
            ascents,
            setter: "tester".to_string(),
            embedding_x: 0.0,
            embedding_y: 0.0,
            layout_id: None,
        }
    }

    #[test]
    fn test_bounds_from_routes() {
        let routes = vec![
            route("a", "Red Wall", 2.0, 10),
            route("b", "Blue Slab", 5.0, 0),
        ];
        let bounds = DataBounds::from_routes(&routes);
        assert_eq!(bounds.grade_min, 2.0);
        assert_eq!(bounds.grade_max, 5.0);
        assert_eq!(bounds.ascents_min, 0);
        assert_eq!(bounds.ascents_max, 10);
    }

    #[test]
    fn test_bounds_from_empty_table() {
        let bounds = DataBounds::from_routes(&[]);
        assert_eq!(bounds.grade_min, 0.0);
        assert_eq!(bounds.grade_max, 0.0);
        assert_eq!(bounds.ascents_min, 0);
        assert_eq!(bounds.ascents_max, 0);
    }

    #[test]
    fn test_from_bounds_passes_everything() {
        let routes = vec![
            route("a", "Red Wall", 2.0, 10),
            route("b", "Blue Slab", 5.0, 0),
        ];
        let params = FilterParams::from_bounds(&DataBounds::from_routes(&routes));
        assert!(routes.iter().all(|r| params.matches(r)));
    }

    #[test]
    fn test_ranges_are_inclusive() {
        let routes = vec![route("a", "Edge", 4.0, 7)];
        let mut params = FilterParams::from_bounds(&DataBounds::from_routes(&routes));
        params.grade = GradeRange { min: 4.0, max: 4.0 };
        params.ascents = AscentRange { min: 7, max: 7 };
        assert!(params.matches(&routes[0]));
    }

    #[test]
    fn test_name_query_case_insensitive() {
        let r = route("a", "Raven's Nest", 3.0, 5);
        let mut params = FilterParams::from_bounds(&DataBounds::from_routes(std::slice::from_ref(&r)));
        params.query = "RAVEN".to_string();
        assert!(params.matches(&r));

        params.query = "sparrow".to_string();
        assert!(!params.matches(&r));
    }

    #[test]
    fn test_empty_query_applies_no_name_filter() {
        let r = route("a", "Anything", 3.0, 5);
        let mut params = FilterParams::from_bounds(&DataBounds::from_routes(std::slice::from_ref(&r)));
        params.query = "   ".to_string();
        assert_eq!(params.name_query(), None);
        assert!(params.matches(&r));
    }

    #[test]
    fn test_clamp_repairs_out_of_bounds_ranges() {
        let routes = vec![
            route("a", "Red Wall", 2.0, 10),
            route("b", "Blue Slab", 5.0, 40),
        ];
        let bounds = DataBounds::from_routes(&routes);
        let mut params = FilterParams::from_bounds(&bounds);
        params.grade = GradeRange {
            min: -10.0,
            max: 99.0,
        };
        params.ascents = AscentRange { min: 90, max: 5 };
        params.clamp_to(&bounds);

        assert_eq!(params.grade, GradeRange { min: 2.0, max: 5.0 });
        // Inverted range collapses onto the moved endpoint
        assert_eq!(params.ascents, AscentRange { min: 40, max: 40 });
    }
}
