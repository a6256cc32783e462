//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application
//! configuration in TOML format with platform-specific directory
//! resolution. Every command accepts an explicit config path so scripts
//! and tests never touch the user's real configuration.

use crate::engine::{Distribution, Scheme, Shading};
use crate::models::ColorRule;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default color scheme settings applied when the CLI passes no overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemeConfig {
    /// Wheel distribution policy.
    pub distribution: Distribution,
    /// Member darkening policy.
    pub shading: Shading,
    /// Brightness lost per darkening step, in [0, 1].
    pub darken_per_step: f64,
    /// Brightness floor, in [0, 1].
    pub min_value: f64,
    /// Wheel saturation (pastel control), in [0, 1].
    pub saturation: f64,
    /// Whether stereo L/R siblings share one brightness.
    pub stereo_pairs: bool,
}

impl Default for SchemeConfig {
    fn default() -> Self {
        let scheme = Scheme::default();
        Self {
            distribution: scheme.distribution,
            shading: scheme.shading,
            darken_per_step: scheme.darken_per_step,
            min_value: scheme.min_value,
            saturation: 0.8,
            stereo_pairs: true,
        }
    }
}

impl SchemeConfig {
    /// Converts the configured defaults into an engine scheme.
    #[must_use]
    pub const fn to_scheme(&self) -> Scheme {
        Scheme {
            distribution: self.distribution,
            shading: self.shading,
            darken_per_step: self.darken_per_step,
            min_value: self.min_value,
        }
    }
}

/// Optional gradient color source, as hex stops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GradientConfig {
    /// Ordered hex color stops (e.g., `["#FF0000", "#0000FF"]`).
    pub stops: Vec<String>,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Color scheme defaults.
    pub scheme: SchemeConfig,
    /// Keyword rules in priority order.
    pub rules: Vec<ColorRule>,
    /// Optional gradient source; when present and loadable it replaces the
    /// HSV wheel.
    pub gradient: Option<GradientConfig>,
}

impl Config {
    /// Gets the platform-specific configuration directory.
    ///
    /// - Linux: `~/.config/trackbow/`
    /// - macOS: `~/Library/Application Support/trackbow/`
    /// - Windows: `%APPDATA%\trackbow\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("trackbow");

        Ok(config_dir)
    }

    /// Gets the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the given path, or the default location.
    ///
    /// A missing file is not an error: defaults are returned, matching the
    /// first-run experience.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed, or
    /// validated.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if !config_path.exists() {
            return Ok(Self::default());
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

    /// Saves configuration to the given path, or the default location.
    ///
    /// Writes to a temp file and renames it into place so the config is
    /// never left half-written.
    ///
    /// # Errors
    ///
    /// Returns an error if validation or any file operation fails.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        self.validate()?;

        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context(format!(
                "Failed to create config directory: {}",
                parent.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

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
    /// # Errors
    ///
    /// Returns an error if any scheme knob is outside [0, 1] or a
    /// configured gradient has fewer than two stops.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("darken_per_step", self.scheme.darken_per_step),
            ("min_value", self.scheme.min_value),
            ("saturation", self.scheme.saturation),
        ] {
            if !(0.0..=1.0).contains(&value) {
                anyhow::bail!("Config value {name} must be in [0, 1] (got {value})");
            }
        }

        if let Some(gradient) = &self.gradient {
            if gradient.stops.len() < 2 {
                anyhow::bail!(
                    "Config gradient needs at least 2 stops (got {})",
                    gradient.stops.len()
                );
            }
        }

        Ok(())
    }
}
