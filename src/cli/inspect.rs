//! Single-route inspection command.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{load_catalog, CliError, CliResult};
use crate::models::{HoldRole, RouteId};

/// Show one route's summary and its holds grouped by role
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Path to the route data archive (defaults to the configured one)
    #[arg(short, long, value_name = "FILE")]
    pub archive: Option<PathBuf>,

    /// Id of the route to inspect
    #[arg(short, long, value_name = "ID")]
    pub route: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct Point {
    x: f64,
    y: f64,
}

#[derive(Debug, Serialize)]
struct RoleGroup {
    role: String,
    holds: Vec<Point>,
}

#[derive(Debug, Serialize)]
struct InspectResponse {
    id: String,
    name: String,
    grade: f64,
    grade_label: String,
    quality: f64,
    ascents: u32,
    setter: String,
    embedding: Point,
    #[serde(skip_serializing_if = "Option::is_none")]
    layout_id: Option<u32>,
    /// Known-role groups in legend order; unknown roles are excluded
    roles: Vec<RoleGroup>,
    /// Number of background points for the route's layout, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    board_points: Option<usize>,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = load_catalog(self.archive.clone())?;

        let id = RouteId::new(self.route.clone());
        let route = catalog
            .get(&id)
            .ok_or_else(|| CliError::validation(format!("No route with id '{id}'")))?;

        let holds = catalog.holds_for(&id).unwrap_or(&[]);
        let roles: Vec<RoleGroup> = HoldRole::KNOWN
            .iter()
            .map(|&role| RoleGroup {
                role: role.label().to_lowercase(),
                holds: holds
                    .iter()
                    .filter(|h| h.role == role)
                    .map(|h| Point { x: h.x, y: h.y })
                    .collect(),
            })
            .collect();

        let board_points = catalog.board_for_route(route).map(<[_]>::len);

        let response = InspectResponse {
            id: route.id.to_string(),
            name: route.name.clone(),
            grade: route.grade,
            grade_label: route.grade_label(),
            quality: route.quality,
            ascents: route.ascents,
            setter: route.setter.clone(),
            embedding: Point {
                x: route.embedding_x,
                y: route.embedding_y,
            },
            layout_id: route.layout_id,
            roles,
            board_points,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Route:");
            println!("  Id:      {}", response.id);
            println!("  Name:    {}", response.name);
            println!("  Grade:   {}", response.grade_label);
            println!("  Quality: {:.1}", response.quality);
            println!("  Ascents: {}", response.ascents);
            println!("  Setter:  {}", response.setter);

            let total: usize = response.roles.iter().map(|g| g.holds.len()).sum();
            if total == 0 {
                println!("\nHolds: none recorded");
            } else {
                println!("\nHolds:");
                for group in &response.roles {
                    println!("  {:<7} {}", format!("{}:", group.role), group.holds.len());
                }
            }

            match (response.board_points, response.layout_id) {
                (Some(points), Some(layout)) => {
                    println!("\nBoard: {points} reference points (layout {layout})");
                }
                _ => println!("\nBoard: no geometry available"),
            }
        }

        Ok(())
    }
}
