//! Custom assertions for integration tests

use serde_json::Value;

/// Assert that output is valid JSON and return parsed value
pub fn assert_valid_json(output: &str, context: &str) -> Value {
    serde_json::from_str(output).unwrap_or_else(|e| {
        panic!(
            "Expected valid JSON ({}): {}\nOutput:\n{}",
            context, e, output
        )
    })
}

/// Assert that JSON output carries the expected status
pub fn assert_json_status(json: &Value, expected: &str) {
    let actual = json["status"]
        .as_str()
        .unwrap_or_else(|| panic!("JSON missing 'status' field: {}", json));
    assert_eq!(
        actual, expected,
        "Expected status '{}' but got '{}'",
        expected, actual
    );
}

/// Assert that output contains a substring
pub fn assert_contains(output: &str, needle: &str) {
    assert!(
        output.contains(needle),
        "Expected output to contain '{}'\nOutput:\n{}",
        needle,
        output
    );
}
