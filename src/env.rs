//! Environment queries: home directory and current working directory.
//!
//! Registry paths are stored with the home directory contracted to `~`
//! and expanded again only when a resolved path is printed.

use crate::error::{Result, WaymarkError};

/// Marker substituted for the home directory in stored paths
pub const HOME_MARKER: &str = "~";

/// Read-only view of the caller's environment
pub trait Environment {
    /// Home directory, if one is known
    fn home_dir(&self) -> Option<String>;

    /// Current working directory
    fn current_dir(&self) -> Result<String>;
}

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn home_dir(&self) -> Option<String> {
        dirs::home_dir().map(|h| h.to_string_lossy().to_string())
    }

    fn current_dir(&self) -> Result<String> {
        std::env::current_dir()
            .map(|p| p.to_string_lossy().to_string())
            .map_err(|e| WaymarkError::Environment {
                message: format!("current directory: {}", e),
            })
    }
}

/// Fixed environment values, for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct FixedEnvironment {
    pub home: Option<String>,
    pub cwd: String,
}

impl FixedEnvironment {
    pub fn new(home: impl Into<String>, cwd: impl Into<String>) -> Self {
        Self {
            home: Some(home.into()),
            cwd: cwd.into(),
        }
    }
}

impl Environment for FixedEnvironment {
    fn home_dir(&self) -> Option<String> {
        self.home.clone()
    }

    fn current_dir(&self) -> Result<String> {
        Ok(self.cwd.clone())
    }
}

/// Replace a leading `home` with `~`.
///
/// Only whole path components match: with home `/home/u`, `/home/u/src`
/// becomes `~/src` but `/home/user` is left alone.
pub fn contract_home(path: &str, home: Option<&str>) -> String {
    let home = match home.map(|h| h.trim_end_matches('/')) {
        Some(h) if !h.is_empty() => h,
        _ => return path.to_string(),
    };
    match path.strip_prefix(home) {
        Some("") => HOME_MARKER.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{}{}", HOME_MARKER, rest),
        _ => path.to_string(),
    }
}

/// Replace a leading `~` with `home`. Paths without the marker, or with no
/// known home, pass through unchanged.
pub fn expand_home(path: &str, home: Option<&str>) -> String {
    let home = match home {
        Some(h) => h.trim_end_matches('/'),
        None => return path.to_string(),
    };
    match path.strip_prefix(HOME_MARKER) {
        Some("") => home.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{}{}", home, rest),
        _ => path.to_string(),
    }
}
