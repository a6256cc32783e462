//! CLI command handlers for trackbow.
//!
//! This module provides headless, scriptable access to trackbow's core
//! functionality for automation, testing, and pipeline integration.

pub mod colorize;
pub mod common;
pub mod config;
pub mod rules;
pub mod wheel;

// Re-export types used by main.rs and tests
pub use colorize::ColorizeArgs;
pub use common::{CliError, CliResult};
pub use config::ConfigArgs;
pub use rules::RulesArgs;
pub use wheel::WheelArgs;
