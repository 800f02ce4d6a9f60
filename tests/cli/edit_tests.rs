//! Tests for the flat registry mutations
//!
//! - `add NAME [PATH]` (aliases: new, a)
//! - `remove NAME [PATH]` (aliases: delete, x)
//! - `rename OLD NEW`
//! - `copy OLD NEW` (aliases: duplicate, cp)

use crate::common::{assert_contains, assert_json_status, assert_valid_json, TestHome};

// ============================================================================
// ADD TESTS
// ============================================================================

#[test]
fn test_add_defaults_to_cwd_with_home_marker() {
    let home = TestHome::new();
    let output = home.run_cli_code(&["add", "work"], 2);
    assert_eq!(output, "Added work (~/work)\n");
    assert_eq!(home.shortcuts()["work"], "~/work");

    // And it resolves back to the expanded directory
    let resolved = home.run_cli_code(&["work"], 0);
    assert_eq!(resolved.trim_end(), home.work().to_string_lossy());
}

#[test]
fn test_add_relative_path() {
    let home = TestHome::new();
    home.run_cli_code(&["new", "src", "src/../src/bin"], 2);
    assert_eq!(home.shortcuts()["src"], "~/work/src/bin");
}

#[test]
fn test_add_overwrites_existing() {
    let home = TestHome::with_shortcuts(&[("x", "/old")]);
    home.run_cli_code(&["add", "x", "/new"], 2);
    assert_eq!(home.shortcuts()["x"], "/new");
    assert_eq!(home.shortcuts().len(), 1);
}

#[test]
fn test_add_then_resolve_round_trip() {
    let home = TestHome::new();
    home.run_cli_code(&["a", "proj", "/a/b"], 2);
    assert_eq!(home.run_cli_code(&["proj"], 0), "/a/b\n");
}

#[test]
fn test_add_refuses_registry_with_colliding_names() {
    let home = TestHome::new();
    let original = r#"{"": "/z", "a": "/y", "a/": "/x", "/b": "/w"}"#;
    std::fs::write(home.registry_path(), original).unwrap();

    let stderr = home.run_cli_failure(&["add", "c", "/c"], 4);
    assert_contains(&stderr, "Registry unavailable");
    assert_eq!(std::fs::read_to_string(home.registry_path()).unwrap(), original);
}

#[test]
fn test_add_empty_name_fails() {
    let home = TestHome::new();
    let stderr = home.run_cli_failure(&["add", "/", "/srv"], 3);
    assert_contains(&stderr, "Empty key");
    assert!(!home.registry_path().exists());
}

// ============================================================================
// REMOVE TESTS
// ============================================================================

#[test]
fn test_remove() {
    let home = TestHome::with_shortcuts(&[("x", "/p"), ("y", "/q")]);
    assert_eq!(home.run_cli_code(&["remove", "x"], 2), "Removed x\n");
    assert!(!home.shortcuts().contains_key("x"));
    assert!(home.shortcuts().contains_key("y"));
}

#[test]
fn test_remove_with_mismatched_path_keeps_entry() {
    let home = TestHome::with_shortcuts(&[("x", "/p")]);
    let output = home.run_cli_code(&["delete", "x", "/q"], 2);
    assert_contains(&output, "Kept x");
    assert_eq!(home.shortcuts()["x"], "/p");

    home.run_cli_code(&["x", "x", "/p"], 2);
    assert!(home.shortcuts().is_empty());
}

#[test]
fn test_remove_keeps_nested_shortcuts() {
    let home = TestHome::with_shortcuts(&[("labs", "/srv/labs"), ("labs/ai", "/srv/labs/ai")]);
    home.run_cli_code(&["remove", "labs"], 2);
    let shortcuts = home.shortcuts();
    assert!(!shortcuts.contains_key("labs"));
    assert_eq!(shortcuts["labs/ai"], "/srv/labs/ai");
}

// ============================================================================
// RENAME / COPY TESTS
// ============================================================================

#[test]
fn test_rename() {
    let home = TestHome::with_shortcuts(&[("x", "/p")]);
    assert_eq!(home.run_cli_code(&["rename", "x", "y"], 2), "Renamed x to y\n");
    let shortcuts = home.shortcuts();
    assert!(!shortcuts.contains_key("x"));
    assert_eq!(shortcuts["y"], "/p");
}

#[test]
fn test_rename_missing_is_noop() {
    let home = TestHome::with_shortcuts(&[("x", "/p")]);
    let before = std::fs::read_to_string(home.registry_path()).unwrap();
    assert_eq!(home.run_cli_code(&["rename", "nope", "y"], 2), "No shortcut named nope\n");
    assert_eq!(std::fs::read_to_string(home.registry_path()).unwrap(), before);
}

#[test]
fn test_copy_keeps_original() {
    let home = TestHome::with_shortcuts(&[("x", "/p")]);
    let json = assert_valid_json(&home.run_cli_code(&["duplicate", "x", "z", "-f", "json"], 2), "copy");
    assert_json_status(&json, "copied");
    let shortcuts = home.shortcuts();
    assert_eq!(shortcuts["x"], "/p");
    assert_eq!(shortcuts["z"], "/p");
}
