//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Route data archive produced by the offline export pipeline
    pub data_archive: Option<PathBuf>,
}

/// Interactive UI preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Minimum query length before live search starts filtering by name
    #[serde(default = "default_search_min_chars")]
    pub search_min_chars: usize,
    /// Whether editing the search query drops the current selection.
    /// Off by default: a selection survives until a new pick or an explicit clear.
    #[serde(default)]
    pub clear_selection_on_search: bool,
}

fn default_search_min_chars() -> usize {
    2
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::Auto,
            search_min_chars: default_search_min_chars(),
            clear_selection_on_search: false,
        }
    }
}

/// Application configuration.
///
/// Stored as TOML in the platform config directory:
/// - Linux: `~/.config/betaboard/config.toml`
/// - macOS: `~/Library/Application Support/betaboard/config.toml`
/// - Windows: `%APPDATA%\betaboard\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system locations
    #[serde(default)]
    pub paths: PathConfig,
    /// Interactive UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether a config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|p| p.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific configuration directory.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("betaboard");

        Ok(config_dir)
    }

    /// Gets the full path of the configuration file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from disk, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;

        Ok(config)
    }

    /// Saves configuration to disk atomically (write temp file, rename).
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// A configured archive path must point at an existing file; a zero
    /// search threshold would filter on every keystroke including the empty
    /// query, so the minimum is 1.
    pub fn validate(&self) -> Result<()> {
        if let Some(archive) = &self.paths.data_archive {
            if !archive.exists() {
                anyhow::bail!(
                    "Configured data archive does not exist: {}",
                    archive.display()
                );
            }
        }

        if self.ui.search_min_chars == 0 {
            anyhow::bail!("ui.search_min_chars must be at least 1");
        }

        Ok(())
    }
}
