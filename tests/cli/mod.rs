//! CLI command integration tests

pub mod config_tests;
pub mod edit_tests;
pub mod tree_tests;
