//! Common test utilities and fixtures for waymark integration tests
//!
//! This module provides:
//! - `TestHome` builder: an isolated home directory, registry and config
//! - Custom assertions for validating CLI output

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod assertions;
pub mod test_home;

pub use assertions::*;
pub use test_home::TestHome;
