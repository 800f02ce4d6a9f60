//! Flat shortcut registry.
//!
//! The registry is a name -> path mapping backed by the hierarchical
//! [`Store`]. A plain name is a single-segment key; a name containing `/`
//! addresses a nested node, so `labs/ai` listed in the registry is the same
//! entry `tree lookup labs/ai` finds.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::key::Key;
use crate::store::Store;

/// Name -> path mapping over a shortcut tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    root: Store,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_store(root: Store) -> Self {
        Self { root }
    }

    /// Build a registry from `(name, path)` pairs. Later pairs overwrite
    /// earlier ones; names with no segments are skipped.
    pub fn from_entries<I, N, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, P)>,
        N: AsRef<str>,
        P: AsRef<str>,
    {
        let root = entries
            .into_iter()
            .fold(Store::new(), |root, (name, path)| {
                let key = Key::parse(name.as_ref());
                if key.is_empty() {
                    tracing::warn!("Skipping shortcut with empty name -> {}", path.as_ref());
                    return root;
                }
                root.set(key.segments(), path.as_ref())
            });
        Self { root }
    }

    /// The underlying tree
    pub fn store(&self) -> &Store {
        &self.root
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        let key = Key::parse(name);
        if key.is_empty() {
            return None;
        }
        self.root.lookup(key.segments()).ok()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// All shortcuts as `name -> path`, sorted by name
    pub fn entries(&self) -> BTreeMap<String, String> {
        self.root
            .entries()
            .into_iter()
            .filter(|(key, _)| !key.is_empty())
            .map(|(key, path)| (key.to_string(), path.to_string()))
            .collect()
    }

    /// Overwriting store at `name`
    pub(crate) fn set(&self, name: &str, path: &str) -> Result<Self> {
        let key: Key = name.parse()?;
        Ok(Self::from_store(self.root.set(key.segments(), path)))
    }

    /// Delete the path at `name`, keeping nested shortcuts
    pub(crate) fn delete(&self, name: &str) -> Result<Self> {
        let key: Key = name.parse()?;
        Ok(Self::from_store(self.root.remove(key.segments())?))
    }
}
