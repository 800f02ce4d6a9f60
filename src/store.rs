//! Hierarchical shortcut store.
//!
//! A persistent tree: every node may carry a path (making it an addressable
//! endpoint) and any number of named children. Updates never touch the
//! receiver; they return a new tree that shares every untouched subtree with
//! the old one through `Arc`, so a snapshot held elsewhere stays valid.
//!
//! Node states:
//! - `Empty`  - no path, no children
//! - `Leaf`   - path set, no children
//! - `Branch` - one or more children, path optional (`labs` navigable while
//!   `labs/ai` exists)

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{Result, WaymarkError};
use crate::key::{join_segments, Key};

/// Shape of a single node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    Empty,
    Leaf,
    Branch,
}

/// One node of the shortcut tree (the root is a node too)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    path: Option<String>,
    children: BTreeMap<String, Arc<Store>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// A node holding only a path
    pub fn leaf(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            children: BTreeMap::new(),
        }
    }

    /// The path stored at this node, if it is addressable
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn child(&self, segment: &str) -> Option<&Store> {
        self.children.get(segment).map(Arc::as_ref)
    }

    /// Children in segment order
    pub fn children(&self) -> impl Iterator<Item = (&str, &Store)> {
        self.children
            .iter()
            .map(|(segment, child)| (segment.as_str(), child.as_ref()))
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// True when the node has neither a path nor children
    pub fn is_empty(&self) -> bool {
        self.path.is_none() && self.children.is_empty()
    }

    pub fn state(&self) -> NodeState {
        match (self.path.is_some(), self.has_children()) {
            (_, true) => NodeState::Branch,
            (true, false) => NodeState::Leaf,
            (false, false) => NodeState::Empty,
        }
    }

    /// Number of addressable nodes in this subtree, this node included
    pub fn len(&self) -> usize {
        usize::from(self.path.is_some()) + self.children.values().map(|c| c.len()).sum::<usize>()
    }

    /// Walk to the node addressed by `key` without requiring it to have a path
    pub fn node<S: AsRef<str>>(&self, key: &[S]) -> Option<&Store> {
        key.iter()
            .try_fold(self, |node, segment| node.child(segment.as_ref()))
    }

    /// Resolve `key` to its path.
    ///
    /// Fails with `KeyNotFound` when a segment has no child, or when the
    /// addressed node exists but has no path of its own.
    pub fn lookup<S: AsRef<str>>(&self, key: &[S]) -> Result<&str> {
        self.node(key)
            .and_then(Store::path)
            .ok_or_else(|| not_found(key))
    }

    /// Insert `value` at `key`, creating intermediate nodes as needed.
    ///
    /// Never overwrites: a key whose node already has a path fails with
    /// `KeyAlreadyExists`. An empty key targets this node itself.
    pub fn insert<S: AsRef<str>>(&self, key: &[S], value: &str) -> Result<Store> {
        self.insert_at(key, value, key)
    }

    fn insert_at<S: AsRef<str>>(&self, rest: &[S], value: &str, full: &[S]) -> Result<Store> {
        match rest.split_first() {
            None => {
                if self.path.is_some() {
                    return Err(WaymarkError::KeyAlreadyExists {
                        key: join_segments(full),
                    });
                }
                Ok(self.with_path(Some(value.to_string())))
            }
            Some((segment, tail)) => {
                let segment = segment.as_ref();
                let updated = match self.children.get(segment) {
                    Some(existing) => existing.insert_at(tail, value, full)?,
                    None => Store::new().insert_at(tail, value, full)?,
                };
                Ok(self.with_child(segment, updated))
            }
        }
    }

    /// Store `value` at `key`, replacing any existing path (last write wins)
    pub fn set<S: AsRef<str>>(&self, key: &[S], value: &str) -> Store {
        match key.split_first() {
            None => self.with_path(Some(value.to_string())),
            Some((segment, tail)) => {
                let segment = segment.as_ref();
                let updated = match self.children.get(segment) {
                    Some(existing) => existing.set(tail, value),
                    None => Store::new().set(tail, value),
                };
                self.with_child(segment, updated)
            }
        }
    }

    /// Remove the path at `key`.
    ///
    /// A node without children is deleted outright; a node with children
    /// only loses its own path so the subtree stays reachable. Ancestors
    /// left with neither a path nor children are pruned.
    pub fn remove<S: AsRef<str>>(&self, key: &[S]) -> Result<Store> {
        if key.is_empty() {
            return Err(WaymarkError::EmptyKey);
        }
        self.remove_at(key, key)
    }

    fn remove_at<S: AsRef<str>>(&self, rest: &[S], full: &[S]) -> Result<Store> {
        let (segment, tail) = match rest.split_first() {
            Some(split) => split,
            None => return Err(WaymarkError::EmptyKey),
        };
        let segment = segment.as_ref();
        let child = self.children.get(segment).ok_or_else(|| not_found(full))?;

        if tail.is_empty() {
            if child.path.is_none() {
                return Err(not_found(full));
            }
            return Ok(if child.has_children() {
                self.with_child(segment, child.with_path(None))
            } else {
                self.without_child(segment)
            });
        }

        let updated = child.remove_at(tail, full)?;
        Ok(if updated.is_empty() {
            self.without_child(segment)
        } else {
            self.with_child(segment, updated)
        })
    }

    /// Every addressable node as `(key, path)`, depth first in segment order
    pub fn entries(&self) -> Vec<(Key, &str)> {
        let mut out = Vec::new();
        self.collect_entries(&Key::default(), &mut out);
        out
    }

    fn collect_entries<'a>(&'a self, prefix: &Key, out: &mut Vec<(Key, &'a str)>) {
        if let Some(path) = &self.path {
            out.push((prefix.clone(), path.as_str()));
        }
        for (segment, child) in &self.children {
            child.collect_entries(&prefix.child(segment), out);
        }
    }

    fn with_path(&self, path: Option<String>) -> Store {
        Store {
            path,
            children: self.children.clone(),
        }
    }

    fn with_child(&self, segment: &str, child: Store) -> Store {
        let mut children = self.children.clone();
        children.insert(segment.to_string(), Arc::new(child));
        Store {
            path: self.path.clone(),
            children,
        }
    }

    fn without_child(&self, segment: &str) -> Store {
        let mut children = self.children.clone();
        children.remove(segment);
        Store {
            path: self.path.clone(),
            children,
        }
    }
}

fn not_found<S: AsRef<str>>(key: &[S]) -> WaymarkError {
    WaymarkError::KeyNotFound {
        key: join_segments(key),
    }
}
