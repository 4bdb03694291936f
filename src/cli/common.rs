//! Shared types for CLI command handlers.
//!
//! Every headless command returns a [`CliResult`]; errors carry a kind that
//! maps to a stable process exit code so scripts can distinguish data
//! problems from I/O problems.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::config::Config;
use crate::constants::APP_BINARY_NAME;
use crate::data::{load_archive, RouteCatalog};

/// Result type for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// What went wrong, mapped to an exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// Data failed a check (exit code 1)
    Validation,
    /// Reading or parsing input failed (exit code 2)
    Io,
    /// The command was invoked without required inputs (exit code 2)
    Usage,
}

/// Error returned by CLI command handlers.
#[derive(Debug, Clone)]
pub struct CliError {
    kind: CliErrorKind,
    message: String,
}

impl CliError {
    /// A validation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// An I/O or parse failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// A usage error (exit code 2).
    pub fn usage(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Usage,
            message: message.into(),
        }
    }

    /// The error kind.
    #[must_use]
    pub const fn kind(&self) -> CliErrorKind {
        self.kind
    }

    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self.kind {
            CliErrorKind::Validation => 1,
            CliErrorKind::Io | CliErrorKind::Usage => 2,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Per-area status of a validation run: `passed`, `warning`, or `failed`.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationChecks {
    /// Archive opened and all required members parsed
    pub archive: String,
    /// Route table invariants (unique ids, finite embeddings)
    pub routes: String,
    /// Hold lists (known roles, no orphaned lists)
    pub holds: String,
    /// Board geometry coverage for referenced layouts
    pub geometry: String,
}

impl ValidationChecks {
    /// All checks in the `passed` state.
    #[must_use]
    pub fn all_passed() -> Self {
        Self {
            archive: "passed".to_string(),
            routes: "passed".to_string(),
            holds: "passed".to_string(),
            geometry: "passed".to_string(),
        }
    }
}

/// One finding from a validation run.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationMessage {
    /// `error` or `warning`
    pub severity: String,
    /// Human-readable description
    pub message: String,
}

/// JSON response shape of the `validate` command.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResponse {
    /// Whether the archive is usable
    pub valid: bool,
    /// Errors and warnings found
    pub errors: Vec<ValidationMessage>,
    /// Per-area status summary
    pub checks: ValidationChecks,
}

/// Resolves the archive path from the `--archive` flag or the config file.
pub fn resolve_archive_path(archive: Option<PathBuf>) -> CliResult<PathBuf> {
    if let Some(path) = archive {
        if !path.exists() {
            return Err(CliError::io(format!(
                "Data archive not found: {}",
                path.display()
            )));
        }
        return Ok(path);
    }

    let config = Config::load().unwrap_or_default();
    config.paths.data_archive.ok_or_else(|| {
        CliError::usage(format!(
            "No data archive given. Pass --archive <FILE> or set paths.data_archive \
             in the {APP_BINARY_NAME} config file"
        ))
    })
}

/// Loads a catalog for a CLI command, mapping failures to a CLI error.
pub fn load_catalog(archive: Option<PathBuf>) -> CliResult<RouteCatalog> {
    let path = resolve_archive_path(archive)?;
    load_archive(&path).map_err(|e| CliError::io(format!("Failed to load data archive: {e:#}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::validation("bad data").exit_code(), 1);
        assert_eq!(CliError::io("no file").exit_code(), 2);
        assert_eq!(CliError::usage("no archive").exit_code(), 2);
    }

    #[test]
    fn test_missing_archive_path_is_io_error() {
        let result = resolve_archive_path(Some(PathBuf::from("/nonexistent/routes.zip")));
        assert_eq!(result.unwrap_err().kind(), CliErrorKind::Io);
    }
}
