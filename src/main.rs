//! Trackbow - rainbow, gradient, and keyword colorizer for DAW track lists
//!
//! This binary provides the command-line interface: colorize a track list,
//! manage keyword rules, preview the hue wheel, and inspect configuration.

use clap::{Parser, Subcommand};
use trackbow::cli::{ColorizeArgs, ConfigArgs, RulesArgs, WheelArgs};
use trackbow::constants::APP_BINARY_NAME;

/// Trackbow - colorize DAW track lists
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Assign colors to every track in a track list
    Colorize(ColorizeArgs),
    /// Manage keyword color rules
    Rules(RulesArgs),
    /// Preview the hue wheel for a given number of groups
    Wheel(WheelArgs),
    /// Inspect or reset configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Command::Colorize(args) => args.execute(),
        Command::Rules(args) => args.execute(),
        Command::Wheel(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    if let Err(error) = result {
        eprintln!("Error: {error}");
        std::process::exit(error.exit_code());
    }
}
