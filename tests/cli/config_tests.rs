//! Tests for the `config` command

use crate::common::{assert_contains, TestHome};

#[test]
fn test_config_show_defaults() {
    let home = TestHome::new();
    let output = home.run_cli_code(&["config", "show"], 0);
    assert_contains(&output, "[display]");
    assert_contains(&output, "min_prefix_len = 3");
    assert_contains(&output, "level = \"warn\"");
}

#[test]
fn test_config_set_get_reset() {
    let home = TestHome::new();
    home.run_cli_code(&["config", "set", "display.min_prefix_len", "7"], 0);
    assert_eq!(home.run_cli_code(&["config", "get", "display.min_prefix_len"], 0), "7\n");
    assert!(home.config_path().exists());

    home.run_cli_code(&["config", "reset"], 0);
    assert_eq!(home.run_cli_code(&["config", "get", "display.min_prefix_len"], 0), "3\n");
}

#[test]
fn test_config_set_invalid_value() {
    let home = TestHome::new();
    let stderr = home.run_cli_failure(&["config", "set", "logging.level", "loud"], 4);
    assert_contains(&stderr, "Invalid log level");
}

#[test]
fn test_config_path() {
    let home = TestHome::new();
    let output = home.run_cli_code(&["config", "path"], 0);
    assert_eq!(output.trim_end(), home.config_path().to_string_lossy());
}

#[test]
fn test_config_registry_location() {
    let home = TestHome::new();
    let custom = home.home().join("custom.json");
    home.write_config(&format!("[storage]\nregistry = \"{}\"\n", custom.display()));

    // WAYMARK_REGISTRY wins over the config file
    home.run_cli_code(&["add", "x", "/p"], 2);
    assert!(home.registry_path().exists());
    assert!(!custom.exists());
}

#[test]
fn test_broken_config_is_fatal() {
    let home = TestHome::new();
    home.write_config("[display\n");
    let stderr = home.run_cli_failure(&["list"], 4);
    assert_contains(&stderr, "Configuration error");
}

#[test]
fn test_verbose_logs_config_location() {
    let home = TestHome::new();
    let output = home.run_cli(&["list", "--verbose"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_contains(&stderr, "Using config");
    assert_contains(&stderr, &home.config_path().to_string_lossy());
}
