//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A small session: two folder groups plus a flat one.
pub const BASIC_SESSION: &str = "\
Drums
\tKick
\tSnare
Bass
Keys
\tRhodes
";

/// A session with a stereo L/R pair under one group head.
pub const STEREO_SESSION: &str = "\
Guitars
\tAmp L
\tAmp R
";

/// Writes a track-list file into a fresh temp directory.
///
/// Returns the file path and the temp dir guard (keep it alive for the
/// duration of the test).
pub fn create_temp_tracklist(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("tracks.txt");
    fs::write(&path, content).expect("Failed to write track list");
    (path, temp_dir)
}

/// Writes a config file into a fresh temp directory.
pub fn create_temp_config(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (path, temp_dir)
}

/// Returns a path to a config file that does not exist yet, so commands
/// start from defaults without touching the user's real config.
pub fn empty_config_path() -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    (path, temp_dir)
}

/// Config with one keyword rule pinning "click" tracks to gray.
pub const CLICK_RULE_CONFIG: &str = r#"
[scheme]
saturation = 1.0

[[rules]]
keyword = "click"

[rules.color]
r = 90
g = 90
b = 90
"#;

/// Config with a two-stop black-to-white gradient source.
pub const GRADIENT_CONFIG: &str = r##"
[gradient]
stops = ["#000000", "#FFFFFF"]
"##;

/// Config whose gradient stops are unparseable; runs must silently fall
/// back to the HSV wheel.
pub const BROKEN_GRADIENT_CONFIG: &str = r##"
[scheme]
saturation = 1.0

[gradient]
stops = ["#NOTHEX", "#FFFFFF"]
"##;
