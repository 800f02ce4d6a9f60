//! Rendering of shortcut listings.
//!
//! Long listings of nested paths are hard to scan, so a path lying under
//! another registered path is shown relative to that shortcut instead:
//! with `labs -> /home/u/labs` registered, `/home/u/labs/ai` is shown as
//! `labs -> ai`. This is a view of the registry only; stored paths never
//! change.

use std::collections::BTreeMap;

use crate::store::Store;

/// Enclosing paths shorter than this are never used for shortening
pub const DEFAULT_MIN_PREFIX_LEN: usize = 3;

/// Display form of a single `path`, given all registered entries.
///
/// The enclosing entry is the one with the longest path that is a string
/// prefix of `path` without being equal to it; on equal lengths the first
/// name in order wins. When no enclosing entry exists, or its path is
/// shorter than `min_prefix_len`, `path` is returned unchanged.
pub fn shorten(entries: &BTreeMap<String, String>, path: &str, min_prefix_len: usize) -> String {
    let enclosing = entries
        .iter()
        .filter(|(_, other)| other.as_str() != path && path.starts_with(other.as_str()))
        .fold(None::<(&String, &String)>, |best, candidate| match best {
            Some(current) if current.1.len() >= candidate.1.len() => Some(current),
            _ => Some(candidate),
        });

    match enclosing {
        Some((name, prefix)) if prefix.len() >= min_prefix_len => {
            path.replace(&format!("{}/", prefix), &format!("{} -> ", name))
        }
        _ => path.to_string(),
    }
}

/// Apply [`shorten`] to every entry, always against the unmodified input
pub fn compress(entries: &BTreeMap<String, String>, min_prefix_len: usize) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(name, path)| (name.clone(), shorten(entries, path, min_prefix_len)))
        .collect()
}

/// Ordered `(name, display path)` pairs for a listing
pub fn listing(entries: &BTreeMap<String, String>, min_prefix_len: Option<usize>) -> Vec<(String, String)> {
    let shown = match min_prefix_len {
        Some(min) => compress(entries, min),
        None => entries.clone(),
    };
    shown.into_iter().collect()
}

/// `name (path)` lines sorted by name, names padded to a common width
pub fn format_options(entries: &[(String, String)]) -> Vec<String> {
    let width = entries
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0);
    let mut sorted: Vec<&(String, String)> = entries.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));
    sorted
        .into_iter()
        .map(|(name, path)| format!("{:<width$} ({})", name, path, width = width))
        .collect()
}

/// Prefix each line with `- ` and join
pub fn bullet(lines: &[String]) -> String {
    lines
        .iter()
        .map(|l| format!("- {}", l))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Indented outline of a shortcut tree, one node per line
pub fn render_tree(store: &Store) -> String {
    let mut lines = Vec::new();
    render_children(store, 0, &mut lines);
    lines.join("\n")
}

fn render_children(store: &Store, depth: usize, lines: &mut Vec<String>) {
    for (segment, child) in store.children() {
        let indent = "  ".repeat(depth);
        match child.path() {
            Some(path) => lines.push(format!("{}{} ({})", indent, segment, path)),
            None => lines.push(format!("{}{}/", indent, segment)),
        }
        render_children(child, depth + 1, lines);
    }
}
