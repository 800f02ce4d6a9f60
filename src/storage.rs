//! Registry persistence.
//!
//! The registry is loaded whole at the start of a command and saved whole
//! at the end. On disk it is a JSON object mapping names to paths:
//!
//! ```json
//! {
//!   "docs": "~/docs",
//!   "labs/ai": "~/labs/ai"
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, WaymarkError};
use crate::fs_utils;
use crate::key::Key;
use crate::registry::Registry;

/// Durable home of the registry
pub trait RegistryStore {
    /// Read the complete registry
    fn load(&self) -> Result<Registry>;

    /// Replace the complete registry
    fn save(&self, registry: &Registry) -> Result<()>;
}

/// Registry stored as a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every stored name must have at least one segment, and no two names
    /// may address the same key (`a` and `a/`). Loading either would drop
    /// an entry on the next save.
    fn check_names(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let mut seen: BTreeMap<String, &str> = BTreeMap::new();
        for name in entries.keys() {
            let key = Key::parse(name);
            if key.is_empty() {
                return Err(self.unavailable(format!("shortcut name {:?} has no segments", name)));
            }
            if let Some(other) = seen.insert(key.to_string(), name) {
                return Err(self.unavailable(format!(
                    "shortcut names {:?} and {:?} both address {}",
                    other, name, key
                )));
            }
        }
        Ok(())
    }

    fn unavailable(&self, message: impl std::fmt::Display) -> WaymarkError {
        WaymarkError::StorageUnavailable {
            path: self.path.clone(),
            message: message.to_string(),
        }
    }
}

impl RegistryStore for JsonFileStore {
    /// A missing file is an empty registry (first run). Anything unreadable
    /// or malformed is an error, and so is a set of names that would not
    /// survive the next save unchanged.
    fn load(&self) -> Result<Registry> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No registry at {}, starting empty", self.path.display());
                return Ok(Registry::new());
            }
            Err(e) => return Err(self.unavailable(e)),
        };
        let entries: BTreeMap<String, String> =
            serde_json::from_str(&content).map_err(|e| self.unavailable(format!("invalid registry: {}", e)))?;
        self.check_names(&entries)?;

        tracing::debug!(
            "Loaded {} shortcuts from {}",
            entries.len(),
            self.path.display()
        );
        Ok(Registry::from_entries(entries))
    }

    fn save(&self, registry: &Registry) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.unavailable(e))?;
        }

        let entries = registry.entries();
        let content = serde_json::to_string_pretty(&entries).map_err(|e| self.unavailable(e))?;

        // Atomic write
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, content + "\n").map_err(|e| self.unavailable(e))?;
        fs_utils::atomic_rename(&temp_path, &self.path).map_err(|e| self.unavailable(e))?;

        tracing::debug!(
            "Saved {} shortcuts to {}",
            entries.len(),
            self.path.display()
        );
        Ok(())
    }
}
