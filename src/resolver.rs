//! Prefix resolution and flat registry mutations.
//!
//! A query resolves against every registered name by plain string prefix
//! (`la` matches `labs` and `labs/ai` alike). The outcome is classified as
//! resolved, no match, or ambiguous; the latter two carry the candidate
//! shortcuts so the caller can show them.
//!
//! Mutations take a registry by reference and return the updated value.
//! Nothing is persisted here.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::env::Environment;
use crate::error::Result;
use crate::paths::{resolve_for_storage, PathSpec};
use crate::registry::Registry;

/// Outcome of a prefix query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchResult {
    /// Exactly one name matched
    Resolved { name: String, path: String },
    /// Nothing matched; carries the whole registry
    NoMatch { candidates: BTreeMap<String, String> },
    /// Several names matched; carries just those
    Ambiguous { candidates: BTreeMap<String, String> },
}

impl MatchResult {
    /// Collapse an ambiguous result to the candidate whose name equals
    /// `query` exactly, if there is one.
    pub fn prefer_exact(self, query: &str) -> MatchResult {
        match self {
            MatchResult::Ambiguous { candidates } => match candidates.get(query) {
                Some(path) => MatchResult::Resolved {
                    name: query.to_string(),
                    path: path.clone(),
                },
                None => MatchResult::Ambiguous { candidates },
            },
            other => other,
        }
    }

    /// The resolved path, if any
    pub fn path(&self) -> Option<&str> {
        match self {
            MatchResult::Resolved { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// A shortcut to create: the name and where it should point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameAndPath {
    pub name: String,
    pub path: PathSpec,
}

impl NameAndPath {
    pub fn new(name: impl Into<String>, path: PathSpec) -> Self {
        Self {
            name: name.into(),
            path,
        }
    }
}

/// Source and target names for rename and duplicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePair {
    pub old_name: String,
    pub new_name: String,
}

impl RenamePair {
    pub fn new(old_name: impl Into<String>, new_name: impl Into<String>) -> Self {
        Self {
            old_name: old_name.into(),
            new_name: new_name.into(),
        }
    }
}

/// Classify `query` against every name in the registry by string prefix.
pub fn resolve(registry: &Registry, query: &str) -> MatchResult {
    let all = registry.entries();
    let matches: BTreeMap<String, String> = all
        .iter()
        .filter(|(name, _)| name.starts_with(query))
        .map(|(name, path)| (name.clone(), path.clone()))
        .collect();

    match matches.len() {
        0 => MatchResult::NoMatch { candidates: all },
        1 => {
            let (name, path) = matches.into_iter().next().unwrap_or_default();
            MatchResult::Resolved { name, path }
        }
        _ => MatchResult::Ambiguous { candidates: matches },
    }
}

/// Resolve for navigation: prefix matching where an exact name wins over
/// longer names sharing it as a prefix.
pub fn navigate(registry: &Registry, query: &str) -> MatchResult {
    resolve(registry, query).prefer_exact(query)
}

/// Point `shortcut.name` at its path, overwriting any existing entry.
///
/// A default path becomes the working directory; the home directory is
/// stored as `~`.
pub fn add(registry: &Registry, shortcut: &NameAndPath, env: &dyn Environment) -> Result<Registry> {
    let path = resolve_for_storage(&shortcut.path, env)?;
    if let Some(previous) = registry.get(&shortcut.name) {
        tracing::info!("Overwriting {} (was {})", shortcut.name, previous);
    }
    tracing::debug!("Adding {} -> {}", shortcut.name, path);
    registry.set(&shortcut.name, &path)
}

/// Delete `name`. With `expected_path` set, the entry is only removed when
/// its stored path equals it exactly; otherwise nothing changes.
pub fn remove(registry: &Registry, name: &str, expected_path: Option<&str>) -> Result<Registry> {
    let stored = match registry.get(name) {
        Some(path) => path,
        None => {
            tracing::debug!("Nothing to remove for {}", name);
            return Ok(registry.clone());
        }
    };
    if let Some(expected) = expected_path {
        if stored != expected {
            tracing::warn!(
                "Not removing {}: it points at {}, not {}",
                name,
                stored,
                expected
            );
            return Ok(registry.clone());
        }
    }
    tracing::debug!("Removing {} -> {}", name, stored);
    registry.delete(name)
}

/// Move the path from `old_name` to `new_name`, overwriting `new_name` if
/// it exists. A missing `old_name` leaves the registry unchanged.
pub fn rename(registry: &Registry, pair: &RenamePair) -> Result<Registry> {
    let path = match registry.get(&pair.old_name) {
        Some(path) => path.to_string(),
        None => return Ok(registry.clone()),
    };
    tracing::debug!("Renaming {} -> {}", pair.old_name, pair.new_name);
    registry
        .delete(&pair.old_name)?
        .set(&pair.new_name, &path)
}

/// Copy the path of `old_name` to `new_name`, keeping the original.
/// A missing `old_name` leaves the registry unchanged.
pub fn duplicate(registry: &Registry, pair: &RenamePair) -> Result<Registry> {
    let path = match registry.get(&pair.old_name) {
        Some(path) => path.to_string(),
        None => return Ok(registry.clone()),
    };
    tracing::debug!("Copying {} -> {}", pair.old_name, pair.new_name);
    registry.set(&pair.new_name, &path)
}
