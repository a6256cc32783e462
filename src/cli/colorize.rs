//! The colorize command: assign colors to a track list.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::engine::{ColorOrigin, Distribution, Shading};
use crate::export::generate_color_legend;
use crate::parser;
use crate::services::{ColorReport, ColorizeOptions, ColorizeService};
use clap::Args;
use std::path::PathBuf;

/// Assign colors to every track in a track list
#[derive(Debug, Clone, Args)]
pub struct ColorizeArgs {
    /// Path to a track list file (.txt indented, or .json)
    #[arg(short, long, value_name = "FILE")]
    pub tracks: PathBuf,

    /// Path to a config file (defaults to the user config)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Wheel distribution policy (overrides config)
    #[arg(long, value_enum, value_name = "POLICY")]
    pub distribution: Option<Distribution>,

    /// Member darkening policy (overrides config)
    #[arg(long, value_enum, value_name = "POLICY")]
    pub shading: Option<Shading>,

    /// Brightness lost per darkening step, 0.0-1.0 (overrides config)
    #[arg(long, value_name = "VALUE")]
    pub darken_step: Option<f64>,

    /// Brightness floor, 0.0-1.0 (overrides config)
    #[arg(long, value_name = "VALUE")]
    pub min_value: Option<f64>,

    /// Wheel saturation, 0.0-1.0 (overrides config)
    #[arg(long, value_name = "VALUE")]
    pub saturation: Option<f64>,

    /// Disable equal brightness for stereo L/R siblings
    #[arg(long)]
    pub no_pairs: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Print a markdown color legend instead of the table
    #[arg(long)]
    pub legend: bool,

    /// Write the full report as JSON to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ColorizeArgs {
    /// Execute the colorize command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load(self.config.as_deref())
            .map_err(|e| CliError::io(format!("Failed to load config: {e}")))?;

        let tracks = parser::parse_tracklist(&self.tracks)
            .map_err(|e| CliError::io(format!("Failed to load track list: {e:#}")))?;

        let options = self.resolve_options(&config)?;
        let report = ColorizeService::run(&tracks, &config, &options);

        if let Some(output) = &self.output {
            ColorizeService::save_report(&report, output)
                .map_err(|e| CliError::io(format!("Failed to write report: {e}")))?;
        }

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&report)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if self.legend {
            print!("{}", generate_color_legend(&report));
        } else {
            print_table(&report);
            if let Some(output) = &self.output {
                println!();
                println!("Report written to {}", output.display());
            }
        }

        Ok(())
    }

    /// Applies CLI overrides on top of the configured defaults.
    fn resolve_options(&self, config: &Config) -> CliResult<ColorizeOptions> {
        let mut options = ColorizeOptions::from_config(config);

        if let Some(distribution) = self.distribution {
            options.scheme.distribution = distribution;
        }
        if let Some(shading) = self.shading {
            options.scheme.shading = shading;
        }
        if let Some(darken_step) = self.darken_step {
            validate_unit_range("--darken-step", darken_step)?;
            options.scheme.darken_per_step = darken_step;
        }
        if let Some(min_value) = self.min_value {
            validate_unit_range("--min-value", min_value)?;
            options.scheme.min_value = min_value;
        }
        if let Some(saturation) = self.saturation {
            validate_unit_range("--saturation", saturation)?;
            options.saturation = saturation;
        }
        if self.no_pairs {
            options.stereo_pairs = false;
        }

        Ok(options)
    }
}

/// Validates that a CLI knob is in [0, 1].
fn validate_unit_range(flag: &str, value: f64) -> CliResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(CliError::validation(format!(
            "{flag} must be between 0.0 and 1.0 (got {value})"
        )))
    }
}

/// Prints the report as an indented table.
fn print_table(report: &ColorReport) {
    if report.entries.is_empty() {
        println!("No tracks to color.");
        return;
    }

    println!("Tracks ({}):", report.entries.len());
    println!();
    for entry in &report.entries {
        let indent = "  ".repeat(entry.depth);
        let origin = match &entry.origin {
            ColorOrigin::Wheel { .. } => String::new(),
            ColorOrigin::Rule { keyword } => format!("  [rule: {keyword}]"),
        };
        let name = format!("{indent}{}", entry.name);
        println!("  {:<36} {}{}", name, entry.color, origin);
    }
}
