//! Configuration management for datekit
//!
//! This module handles loading, parsing, and validation of configuration
//! files carrying the default format patterns.

use crate::constants::{DEFAULT_DATETIME_FORMAT, DEFAULT_DATE_FORMAT};
use crate::error::DateError;
use crate::utils::datetime::FormatSpec;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub formats: FormatsConfig,
}

/// Format pattern configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatsConfig {
    /// Pattern for calendar dates
    pub date_format: String,
    /// Pattern for date-time values
    pub datetime_format: String,
}

impl Default for FormatsConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file();

        if let Some(path) = config_path {
            log::debug!("Loading config from {}", path.display());
            Self::load_from_file(&path)
        } else {
            log::debug!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("datekit.toml");
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("datekit").join("config.toml");
            if xdg_config.exists() {
                return Some(xdg_config);
            }
        }

        None
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Both patterns must be accepted by the formatter
        if let Err(e) = FormatSpec::new(&self.formats.date_format) {
            anyhow::bail!("Invalid date_format '{}': {}", self.formats.date_format, e);
        }

        if let Err(e) = FormatSpec::new(&self.formats.datetime_format) {
            anyhow::bail!("Invalid datetime_format '{}': {}", self.formats.datetime_format, e);
        }

        Ok(())
    }

    /// Build a `FormatSpec` from the configured date pattern
    pub fn date_spec(&self) -> std::result::Result<FormatSpec, DateError> {
        FormatSpec::new(&self.formats.date_format)
    }

    /// Build a `FormatSpec` from the configured date-time pattern
    pub fn datetime_spec(&self) -> std::result::Result<FormatSpec, DateError> {
        FormatSpec::new(&self.formats.datetime_format)
    }
}
