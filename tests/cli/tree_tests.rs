//! Tests for the `tree` command: exact operations on nested keys

use crate::common::{assert_contains, assert_valid_json, TestHome};

#[test]
fn test_insert_and_lookup() {
    let home = TestHome::new();
    home.run_cli_code(&["tree", "insert", "labs/ai", "/srv/labs/ai"], 2);
    home.run_cli_code(&["tree", "insert", "labs", "/srv/labs"], 2);

    assert_eq!(home.run_cli_code(&["tree", "lookup", "labs/ai"], 0), "/srv/labs/ai\n");
    assert_eq!(home.run_cli_code(&["tree", "lookup", "labs"], 0), "/srv/labs\n");
    assert_eq!(home.shortcuts().len(), 2);
}

#[test]
fn test_insert_existing_key_fails() {
    let home = TestHome::with_shortcuts(&[("labs/ai", "/srv/labs/ai")]);
    let stderr = home.run_cli_failure(&["tree", "insert", "labs/ai", "/elsewhere"], 3);
    assert_contains(&stderr, "Key already exists: labs/ai");
    assert_eq!(home.shortcuts()["labs/ai"], "/srv/labs/ai");
}

#[test]
fn test_lookup_branch_without_path_fails() {
    let home = TestHome::with_shortcuts(&[("labs/ai", "/srv/labs/ai")]);
    let stderr = home.run_cli_failure(&["tree", "lookup", "labs"], 3);
    assert_contains(&stderr, "Key not found: labs");
}

#[test]
fn test_remove_parent_keeps_child() {
    let home = TestHome::with_shortcuts(&[("a", "/p"), ("a/b", "/q")]);
    home.run_cli_code(&["tree", "remove", "a"], 2);
    assert_eq!(home.run_cli_code(&["tree", "lookup", "a/b"], 0), "/q\n");
    home.run_cli_failure(&["tree", "lookup", "a"], 3);
}

#[test]
fn test_remove_missing_key_fails() {
    let home = TestHome::with_shortcuts(&[("a", "/p")]);
    home.run_cli_failure(&["tree", "remove", "a/b"], 3);
    home.run_cli_failure(&["tree", "remove", "/"], 3);
}

#[test]
fn test_show() {
    let home = TestHome::with_shortcuts(&[
        ("docs", "/srv/docs"),
        ("labs/ai", "/srv/labs/ai"),
        ("labs/compiler", "/srv/labs/compiler"),
    ]);
    let output = home.run_cli_code(&["tree", "show"], 1);
    assert_eq!(
        output,
        "docs (/srv/docs)\nlabs/\n  ai (/srv/labs/ai)\n  compiler (/srv/labs/compiler)\n"
    );

    let json = assert_valid_json(&home.run_cli_code(&["tree", "show", "labs", "-f", "json"], 1), "tree");
    assert_eq!(json["entries"].as_array().unwrap().len(), 2);
}

#[test]
fn test_tree_and_flat_views_agree() {
    let home = TestHome::new();
    home.run_cli_code(&["tree", "insert", "lectures/ai", "/srv/lectures/ai"], 2);
    // The flat resolver sees nested keys by their joined name
    assert_eq!(home.run_cli_code(&["lectures"], 0), "/srv/lectures/ai\n");
}
