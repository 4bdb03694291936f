//! Route listing command.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{load_catalog, CliError, CliResult};
use crate::models::{AscentRange, DataBounds, FilterParams, GradeRange, Route};
use crate::services::filter_routes;

/// List routes passing a grade/ascent/name filter
#[derive(Debug, Clone, Args)]
pub struct RoutesArgs {
    /// Path to the route data archive (defaults to the configured one)
    #[arg(short, long, value_name = "FILE")]
    pub archive: Option<PathBuf>,

    /// Minimum grade (inclusive)
    #[arg(long, value_name = "GRADE")]
    pub grade_min: Option<f64>,

    /// Maximum grade (inclusive)
    #[arg(long, value_name = "GRADE")]
    pub grade_max: Option<f64>,

    /// Minimum ascent count (inclusive)
    #[arg(long, value_name = "N")]
    pub ascents_min: Option<u32>,

    /// Maximum ascent count (inclusive)
    #[arg(long, value_name = "N")]
    pub ascents_max: Option<u32>,

    /// Case-insensitive name substring
    #[arg(short, long, value_name = "TEXT")]
    pub query: Option<String>,

    /// Print at most this many routes
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct RouteRow<'a> {
    id: &'a str,
    name: &'a str,
    grade: f64,
    quality: f64,
    ascents: u32,
    setter: &'a str,
}

#[derive(Debug, Serialize)]
struct RoutesResponse<'a> {
    total: usize,
    matched: usize,
    routes: Vec<RouteRow<'a>>,
}

impl RoutesArgs {
    /// Builds filter parameters from the data bounds and the given flags.
    fn params(&self, routes: &[Route]) -> FilterParams {
        let bounds = DataBounds::from_routes(routes);
        let mut params = FilterParams::from_bounds(&bounds);

        params.grade = GradeRange {
            min: self.grade_min.unwrap_or(params.grade.min),
            max: self.grade_max.unwrap_or(params.grade.max),
        };
        params.ascents = AscentRange {
            min: self.ascents_min.unwrap_or(params.ascents.min),
            max: self.ascents_max.unwrap_or(params.ascents.max),
        };
        if let Some(query) = &self.query {
            params.query = query.clone();
        }

        params
    }

    /// Execute the routes command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = load_catalog(self.archive.clone())?;
        let params = self.params(catalog.routes());
        let filtered = filter_routes(catalog.routes(), &params);

        let matched = filtered.len();
        let shown = self.limit.unwrap_or(matched).min(matched);

        let rows: Vec<RouteRow<'_>> = filtered
            .iter(catalog.routes())
            .take(shown)
            .map(|route| RouteRow {
                id: route.id.as_str(),
                name: &route.name,
                grade: route.grade,
                quality: route.quality,
                ascents: route.ascents,
                setter: &route.setter,
            })
            .collect();

        if self.json {
            let response = RoutesResponse {
                total: catalog.len(),
                matched,
                routes: rows,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Showing {} of {} routes", matched, catalog.len());
            if shown < matched {
                println!("(listing first {shown})");
            }
            for route in filtered.iter(catalog.routes()).take(shown) {
                println!(
                    "  {:<12} {:>5}  q {:.1}  {:>5} asc  {} ({})",
                    route.id,
                    route.grade_label(),
                    route.quality,
                    route.ascents,
                    route.name,
                    route.setter
                );
            }
        }

        Ok(())
    }
}
