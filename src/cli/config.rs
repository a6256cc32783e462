//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Configuration management commands
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Configuration subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigCommand {
    /// Display the current configuration
    Show(ConfigShowArgs),
    /// Print the config file path
    Path(ConfigPathArgs),
    /// Reset the configuration to defaults
    Reset(ConfigResetArgs),
}

/// Display the current configuration
#[derive(Debug, Clone, Args)]
pub struct ConfigShowArgs {
    /// Path to a config file (defaults to the user config)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Print the config file path
#[derive(Debug, Clone, Args)]
pub struct ConfigPathArgs {}

/// Reset the configuration to defaults
#[derive(Debug, Clone, Args)]
pub struct ConfigResetArgs {
    /// Path to a config file (defaults to the user config)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ConfigArgs {
    /// Execute the config command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Path(args) => args.execute(),
            ConfigCommand::Reset(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load(self.config.as_deref())
            .map_err(|e| CliError::io(format!("Failed to load config: {e}")))?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&config)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            let toml = toml::to_string_pretty(&config)
                .map_err(|e| CliError::io(format!("Failed to serialize config: {e}")))?;
            print!("{toml}");
        }

        Ok(())
    }
}

impl ConfigPathArgs {
    /// Execute the path command
    pub fn execute(&self) -> CliResult<()> {
        let path = Config::default_path()
            .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;
        println!("{}", path.display());
        Ok(())
    }
}

impl ConfigResetArgs {
    /// Execute the reset command
    pub fn execute(&self) -> CliResult<()> {
        Config::default()
            .save(self.config.as_deref())
            .map_err(|e| CliError::io(format!("Failed to save config: {e}")))?;

        println!("Configuration reset to defaults.");
        Ok(())
    }
}
