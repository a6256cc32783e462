//! Colorize orchestration: from config and tracks to a finished report.

use crate::config::Config;
use crate::engine::{
    assign_colors, ColorOrigin, ColorSource, Distribution, Gradient, HsvWheel, PairRule, Scheme,
    Shading, StereoPair,
};
use crate::models::{RuleSet, TrackList};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Resolved options for one colorize run: config defaults with CLI
/// overrides already applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorizeOptions {
    /// Engine scheme knobs.
    pub scheme: Scheme,
    /// Wheel saturation, used when no gradient is configured.
    pub saturation: f64,
    /// Whether stereo L/R siblings share one brightness.
    pub stereo_pairs: bool,
}

impl ColorizeOptions {
    /// Builds options straight from configuration, with no overrides.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            scheme: config.scheme.to_scheme(),
            saturation: config.scheme.saturation,
            stereo_pairs: config.scheme.stereo_pairs,
        }
    }
}

/// One track's line in a color report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Track display name.
    pub name: String,
    /// Folder nesting depth.
    pub depth: usize,
    /// Assigned color as an uppercase hex string.
    pub color: String,
    /// Where the color came from.
    pub origin: ColorOrigin,
}

/// A finished color assignment for a whole track list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorReport {
    /// When the report was generated.
    pub generated: DateTime<Utc>,
    /// Wheel distribution policy used.
    pub distribution: Distribution,
    /// Darkening policy used.
    pub shading: Shading,
    /// Per-track assignments, in sequence order.
    pub entries: Vec<ReportEntry>,
}

/// Service producing and persisting color reports.
pub struct ColorizeService;

impl ColorizeService {
    /// Runs the engine over a track list and assembles a report.
    ///
    /// The color source comes from configuration: a configured gradient
    /// when its stops load cleanly, the HSV wheel otherwise. A broken
    /// gradient degrades silently — a cosmetic extra must never block the
    /// coloring run.
    #[must_use]
    pub fn run(tracks: &TrackList, config: &Config, options: &ColorizeOptions) -> ColorReport {
        let source = Self::pick_source(config, options.saturation);
        let rules = RuleSet::new(config.rules.clone());

        let stereo = StereoPair;
        let pairing: Option<&dyn PairRule> = if options.stereo_pairs {
            Some(&stereo)
        } else {
            None
        };

        let assigned = assign_colors(tracks, &rules, &options.scheme, source.as_ref(), pairing);

        let entries = tracks
            .tracks
            .iter()
            .zip(assigned)
            .map(|(track, assigned)| ReportEntry {
                name: track.name.clone(),
                depth: track.depth,
                color: assigned.color.to_hex(),
                origin: assigned.origin,
            })
            .collect();

        ColorReport {
            generated: Utc::now(),
            distribution: options.scheme.distribution,
            shading: options.scheme.shading,
            entries,
        }
    }

    /// Picks the color source for a run.
    ///
    /// Falls back to the HSV wheel whenever the configured gradient cannot
    /// be built, without surfacing an error.
    #[must_use]
    pub fn pick_source(config: &Config, saturation: f64) -> Box<dyn ColorSource> {
        if let Some(gradient) = &config.gradient {
            if let Ok(source) = Gradient::from_hex_stops(&gradient.stops) {
                return Box::new(source);
            }
        }

        Box::new(HsvWheel::new(saturation))
    }

    /// Saves a report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any file operation fails.
    pub fn save_report(report: &ColorReport, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(report).context("Failed to serialize color report")?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).context(format!(
                    "Failed to create report directory: {}",
                    parent.display()
                ))?;
            }
        }

        fs::write(path, content)
            .context(format!("Failed to write report to {}", path.display()))?;

        Ok(())
    }
}
