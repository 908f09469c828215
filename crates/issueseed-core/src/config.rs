// SPDX-License-Identifier: Apache-2.0

//! Configuration management for issueseed.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `ISSUESEED_`)
//! 2. Config file: `~/.config/issueseed/config.toml`
//! 3. Built-in defaults
//!
//! Command-line flags override all three.
//!
//! # Examples
//!
//! ```bash
//! # Create labels in a different color
//! ISSUESEED_LABELS__COLOR=0E8A16 issueseed --repo org/turma ...
//! ```

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::Result;
use crate::error::SeederError;
use crate::task::TaskType;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Label settings.
    pub labels: LabelConfig,
    /// Row defaults.
    pub defaults: DefaultsConfig,
}

/// Label settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Hex color (without `#`) for labels created by the run.
    pub color: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            color: "6E5494".to_string(),
        }
    }
}

/// Defaults applied to rows.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Task type used when `--ia-default` is not given.
    pub task_type: TaskType,
}

impl AppConfig {
    fn validate(self) -> Result<Self> {
        let color = &self.labels.color;
        if color.len() != 6 || !color.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(SeederError::Config {
                message: format!("labels.color must be six hex digits, got '{color}'"),
            });
        }
        Ok(self)
    }
}

/// Returns the issueseed configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/issueseed`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join("issueseed");
    }
    dirs::home_dir()
        .unwrap_or_default()
        .join(".config")
        .join("issueseed")
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load application configuration from the default location.
///
/// # Errors
///
/// Returns `SeederError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_file_path())
}

/// Load application configuration from a specific file.
///
/// The file is optional. Environment variables use the prefix `ISSUESEED_`
/// and double underscore for nested keys (e.g., `ISSUESEED_LABELS__COLOR`).
///
/// # Errors
///
/// Returns `SeederError::Config` if the file is invalid or a value is rejected.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        // No try_parsing: colors such as 6E5494 would parse as floats.
        .add_source(
            Environment::with_prefix("ISSUESEED")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    app_config.validate()
}
