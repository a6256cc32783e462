//! Keyword rule management commands.
//!
//! Provides commands to list, add, and delete keyword color rules in the
//! configuration file.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::models::{ColorRule, RgbColor};
use clap::{Args, Subcommand};
use regex::Regex;
use serde::Serialize;
use std::path::PathBuf;

/// Manage keyword color rules
#[derive(Debug, Clone, Args)]
pub struct RulesArgs {
    /// Rules subcommand
    #[command(subcommand)]
    pub command: RulesCommand,
}

/// Rule management subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum RulesCommand {
    /// List all keyword rules
    List(ListRulesArgs),
    /// Add a new keyword rule
    Add(AddRuleArgs),
    /// Remove a keyword rule
    Delete(DeleteRuleArgs),
}

/// List all keyword rules
#[derive(Debug, Clone, Args)]
pub struct ListRulesArgs {
    /// Path to a config file (defaults to the user config)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Add a new keyword rule
#[derive(Debug, Clone, Args)]
pub struct AddRuleArgs {
    /// Path to a config file (defaults to the user config)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Keyword to match (case-insensitive substring)
    #[arg(long, value_name = "KEYWORD")]
    pub keyword: String,

    /// Color in hex format (#RRGGBB or #RGB)
    #[arg(long, value_name = "HEX")]
    pub color: String,
}

/// Remove a keyword rule
#[derive(Debug, Clone, Args)]
pub struct DeleteRuleArgs {
    /// Path to a config file (defaults to the user config)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Keyword of the rule to delete
    #[arg(long, value_name = "KEYWORD")]
    pub keyword: String,
}

// JSON response types
#[derive(Debug, Serialize)]
struct RuleItem {
    keyword: String,
    color: String,
}

#[derive(Debug, Serialize)]
struct ListRulesResponse {
    rules: Vec<RuleItem>,
    count: usize,
}

impl RulesArgs {
    /// Execute the rules command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            RulesCommand::List(args) => args.execute(),
            RulesCommand::Add(args) => args.execute(),
            RulesCommand::Delete(args) => args.execute(),
        }
    }
}

impl ListRulesArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load(self.config.as_deref())
            .map_err(|e| CliError::io(format!("Failed to load config: {e}")))?;

        let rules: Vec<RuleItem> = config
            .rules
            .iter()
            .map(|rule| RuleItem {
                keyword: rule.keyword.clone(),
                color: rule.color.to_hex(),
            })
            .collect();

        let response = ListRulesResponse {
            count: rules.len(),
            rules,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if response.count == 0 {
            println!("No rules defined.");
        } else {
            println!("Rules ({}):", response.count);
            println!();
            for rule in response.rules {
                println!("  {:<30} {}", rule.keyword, rule.color);
            }
        }

        Ok(())
    }
}

impl AddRuleArgs {
    /// Execute the add command
    pub fn execute(&self) -> CliResult<()> {
        let mut config = Config::load(self.config.as_deref())
            .map_err(|e| CliError::io(format!("Failed to load config: {e}")))?;

        let color = validate_and_parse_hex(&self.color).map_err(CliError::validation)?;

        let rule = ColorRule::new(&self.keyword, color)
            .map_err(|e| CliError::validation(format!("Invalid rule: {e}")))?;

        if config
            .rules
            .iter()
            .any(|r| r.keyword.eq_ignore_ascii_case(&self.keyword))
        {
            return Err(CliError::validation(format!(
                "Rule with keyword '{}' already exists",
                self.keyword
            )));
        }

        config.rules.push(rule);

        config
            .save(self.config.as_deref())
            .map_err(|e| CliError::io(format!("Failed to save config: {e}")))?;

        println!("Rule '{}' added successfully.", self.keyword);
        Ok(())
    }
}

impl DeleteRuleArgs {
    /// Execute the delete command
    pub fn execute(&self) -> CliResult<()> {
        let mut config = Config::load(self.config.as_deref())
            .map_err(|e| CliError::io(format!("Failed to load config: {e}")))?;

        let before = config.rules.len();
        config
            .rules
            .retain(|r| !r.keyword.eq_ignore_ascii_case(&self.keyword));

        if config.rules.len() == before {
            return Err(CliError::validation(format!(
                "Rule '{}' not found",
                self.keyword
            )));
        }

        config
            .save(self.config.as_deref())
            .map_err(|e| CliError::io(format!("Failed to save config: {e}")))?;

        println!("Rule '{}' deleted successfully.", self.keyword);
        Ok(())
    }
}

/// Validates hex color format (#RRGGBB or #RGB) and returns the color.
fn validate_and_parse_hex(color: &str) -> Result<RgbColor, String> {
    // Match #RRGGBB or #RGB format
    let hex_regex = Regex::new(r"^#([0-9A-Fa-f]{6}|[0-9A-Fa-f]{3})$")
        .map_err(|_| "Failed to create hex regex".to_string())?;

    if !hex_regex.is_match(color) {
        return Err(format!(
            "Invalid hex color format: '{}'. Expected #RRGGBB or #RGB",
            color
        ));
    }

    // Expand short hex format (#RGB -> #RRGGBB)
    let expanded_color = if color.len() == 4 {
        let hex = &color[1..];
        format!(
            "#{}{}{}{}{}{}",
            &hex[0..1],
            &hex[0..1],
            &hex[1..2],
            &hex[1..2],
            &hex[2..3],
            &hex[2..3]
        )
    } else {
        color.to_string()
    };

    RgbColor::from_hex(&expanded_color).map_err(|e| format!("Failed to parse color: {e}"))
}
