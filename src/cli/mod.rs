//! CLI command handlers for Betaboard.
//!
//! This module provides headless, scriptable access to the route catalog
//! for automation, testing, and CI integration. Every command reads the
//! same archive the explorer TUI uses and supports `--json` output.

pub mod common;
pub mod inspect;
pub mod routes;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult};
pub use inspect::InspectArgs;
pub use routes::RoutesArgs;
pub use validate::ValidateArgs;
