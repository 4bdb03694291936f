//! Archive integrity validation command.

use clap::Args;
use std::path::PathBuf;

use crate::cli::common::{
    resolve_archive_path, CliError, CliResult, ValidationChecks, ValidationMessage,
    ValidationResponse,
};
use crate::data::{load_archive, RouteCatalog};

/// Check a route data archive for integrity issues
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to the route data archive (defaults to the configured one)
    #[arg(short, long, value_name = "FILE")]
    pub archive: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let path = resolve_archive_path(self.archive.clone())?;

        let mut checks = ValidationChecks::all_passed();
        let mut messages = Vec::new();

        // Load failures are what this command exists to report, so they
        // become part of the response rather than a bare I/O error.
        let catalog = match load_archive(&path) {
            Ok(catalog) => Some(catalog),
            Err(e) => {
                checks.archive = "failed".to_string();
                checks.routes = "failed".to_string();
                checks.holds = "failed".to_string();
                checks.geometry = "failed".to_string();
                messages.push(ValidationMessage {
                    severity: "error".to_string(),
                    message: format!("{e:#}"),
                });
                None
            }
        };

        if let Some(catalog) = &catalog {
            collect_warnings(catalog, &mut checks, &mut messages);
        }

        let valid = catalog.is_some();
        let response = ValidationResponse {
            valid,
            errors: messages,
            checks,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            if response.valid {
                println!("✓ Archive is valid");
            } else {
                println!("✗ Archive failed validation");
            }
            if let Some(catalog) = &catalog {
                println!(
                    "  {} routes, {} layouts with geometry",
                    catalog.len(),
                    catalog.layout_ids().len()
                );
                if let Some(manifest) = catalog.manifest() {
                    println!(
                        "  export v{} from {}",
                        manifest.version,
                        manifest.exported_at.format("%Y-%m-%d")
                    );
                }
            }

            println!("\nChecks:");
            println!("  Archive:  {}", response.checks.archive);
            println!("  Routes:   {}", response.checks.routes);
            println!("  Holds:    {}", response.checks.holds);
            println!("  Geometry: {}", response.checks.geometry);

            if !response.errors.is_empty() {
                println!("\nIssues:");
                for msg in &response.errors {
                    let prefix = if msg.severity == "error" {
                        "  ✗"
                    } else {
                        "  ⚠"
                    };
                    println!("{} {}", prefix, msg.message);
                }
            }
        }

        if !response.valid {
            return Err(CliError::validation("Archive failed validation"));
        }

        if self.strict && !response.errors.is_empty() {
            return Err(CliError::validation("Warnings found in strict mode"));
        }

        Ok(())
    }
}

/// Runs the non-fatal checks the loader tolerates: unknown hold roles,
/// orphaned hold lists, layouts referenced without geometry, and a manifest
/// count that disagrees with the table.
fn collect_warnings(
    catalog: &RouteCatalog,
    checks: &mut ValidationChecks,
    messages: &mut Vec<ValidationMessage>,
) {
    let mut warn = |check: &mut String, message: String| {
        *check = "warning".to_string();
        messages.push(ValidationMessage {
            severity: "warning".to_string(),
            message,
        });
    };

    let unknown_roles: usize = catalog
        .routes()
        .iter()
        .filter_map(|route| catalog.holds_for(&route.id))
        .flatten()
        .filter(|hold| !hold.role.is_known())
        .count();
    if unknown_roles > 0 {
        warn(
            &mut checks.holds,
            format!("{unknown_roles} hold(s) have unknown roles and will not be rendered"),
        );
    }

    let orphaned = catalog.orphaned_hold_ids();
    if !orphaned.is_empty() {
        warn(
            &mut checks.holds,
            format!(
                "{} hold list(s) reference routes not in the table",
                orphaned.len()
            ),
        );
    }

    let missing_geometry: usize = catalog
        .routes()
        .iter()
        .filter(|route| route.layout_id.is_some() && catalog.board_for_route(route).is_none())
        .count();
    if missing_geometry > 0 {
        warn(
            &mut checks.geometry,
            format!(
                "{missing_geometry} route(s) reference a layout without board geometry"
            ),
        );
    }

    let without_holds: usize = catalog
        .routes()
        .iter()
        .filter(|route| catalog.holds_for(&route.id).is_none())
        .count();
    if without_holds > 0 {
        warn(
            &mut checks.holds,
            format!("{without_holds} route(s) have no hold list"),
        );
    }

    if let Some(manifest) = catalog.manifest() {
        if manifest.route_count != catalog.len() {
            warn(
                &mut checks.routes,
                format!(
                    "Manifest declares {} routes but the table has {}",
                    manifest.route_count,
                    catalog.len()
                ),
            );
        }
    }
}
