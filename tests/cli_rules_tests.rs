//! End-to-end tests for `trackbow rules` commands.

use serde::Deserialize;
use std::process::Command;

mod fixtures;
use fixtures::*;

#[derive(Debug, Deserialize)]
struct RuleItem {
    keyword: String,
    color: String,
}

#[derive(Debug, Deserialize)]
struct ListRulesResponse {
    rules: Vec<RuleItem>,
    count: usize,
}

/// Path to the trackbow binary (set by cargo at compile time)
fn trackbow_bin() -> &'static str {
    env!("CARGO_BIN_EXE_trackbow")
}

// ============================================================================
// List Command Tests
// ============================================================================

#[test]
fn test_rules_list_empty_config() {
    let (config_path, _temp_dir) = empty_config_path();

    let output = Command::new(trackbow_bin())
        .args(["rules", "list", "--config", config_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Empty config should list successfully. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No rules defined."));
}

#[test]
fn test_rules_list_with_rules() {
    let (config_path, _temp_dir) = create_temp_config(CLICK_RULE_CONFIG);

    let output = Command::new(trackbow_bin())
        .args(["rules", "list", "--config", config_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("click"));
    assert!(stdout.contains("#5A5A5A"));
}

#[test]
fn test_rules_list_json_format() {
    let (config_path, _temp_dir) = create_temp_config(CLICK_RULE_CONFIG);

    let output = Command::new(trackbow_bin())
        .args([
            "rules",
            "list",
            "--config",
            config_path.to_str().unwrap(),
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let response: ListRulesResponse =
        serde_json::from_slice(&output.stdout).expect("Invalid JSON output");
    assert_eq!(response.count, 1);
    assert_eq!(response.rules[0].keyword, "click");
    assert_eq!(response.rules[0].color, "#5A5A5A");
}

// ============================================================================
// Add Command Tests
// ============================================================================

#[test]
fn test_rules_add_creates_config() {
    let (config_path, _temp_dir) = empty_config_path();

    let output = Command::new(trackbow_bin())
        .args([
            "rules",
            "add",
            "--config",
            config_path.to_str().unwrap(),
            "--keyword",
            "vox",
            "--color",
            "#FFC800",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Add should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(config_path.exists(), "Config file should be created");

    // The new rule shows up in list output
    let output = Command::new(trackbow_bin())
        .args([
            "rules",
            "list",
            "--config",
            config_path.to_str().unwrap(),
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    let response: ListRulesResponse =
        serde_json::from_slice(&output.stdout).expect("Invalid JSON output");
    assert_eq!(response.count, 1);
    assert_eq!(response.rules[0].keyword, "vox");
    assert_eq!(response.rules[0].color, "#FFC800");
}

#[test]
fn test_rules_add_short_hex() {
    let (config_path, _temp_dir) = empty_config_path();

    let output = Command::new(trackbow_bin())
        .args([
            "rules",
            "add",
            "--config",
            config_path.to_str().unwrap(),
            "--keyword",
            "bass",
            "--color",
            "#F0F",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Short hex format should work. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_rules_add_duplicate_keyword() {
    let (config_path, _temp_dir) = create_temp_config(CLICK_RULE_CONFIG);

    let output = Command::new(trackbow_bin())
        .args([
            "rules",
            "add",
            "--config",
            config_path.to_str().unwrap(),
            "--keyword",
            "Click",
            "--color",
            "#000000",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(1),
        "Duplicate keyword should be rejected"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already exists"));
}

#[test]
fn test_rules_add_invalid_hex() {
    let (config_path, _temp_dir) = empty_config_path();

    let output = Command::new(trackbow_bin())
        .args([
            "rules",
            "add",
            "--config",
            config_path.to_str().unwrap(),
            "--keyword",
            "vox",
            "--color",
            "#GG0000",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid hex color format"));
}

// ============================================================================
// Delete Command Tests
// ============================================================================

#[test]
fn test_rules_delete_existing() {
    let (config_path, _temp_dir) = create_temp_config(CLICK_RULE_CONFIG);

    let output = Command::new(trackbow_bin())
        .args([
            "rules",
            "delete",
            "--config",
            config_path.to_str().unwrap(),
            "--keyword",
            "click",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let output = Command::new(trackbow_bin())
        .args([
            "rules",
            "list",
            "--config",
            config_path.to_str().unwrap(),
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    let response: ListRulesResponse =
        serde_json::from_slice(&output.stdout).expect("Invalid JSON output");
    assert_eq!(response.count, 0);
}

#[test]
fn test_rules_delete_missing() {
    let (config_path, _temp_dir) = empty_config_path();

    let output = Command::new(trackbow_bin())
        .args([
            "rules",
            "delete",
            "--config",
            config_path.to_str().unwrap(),
            "--keyword",
            "nope",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"));
}
