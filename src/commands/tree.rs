//! Tree command handler - exact operations on nested keys
//!
//! Unlike `add`, `tree insert` refuses to overwrite a key that already has
//! a path, and `tree lookup` matches the whole key rather than a prefix.

use crate::cli::{TreeArgs, TreeOperation};
use crate::commands::{CommandContext, Report, Status};
use crate::display::render_tree;
use crate::error::{Result, WaymarkError};
use crate::key::Key;
use crate::paths::{resolve_for_storage, PathSpec};
use crate::registry::Registry;

/// Run the tree command
pub fn run_tree(args: &TreeArgs, ctx: &CommandContext) -> Result<Report> {
    match &args.operation {
        TreeOperation::Insert { key, path } => run_insert(key, path.as_deref(), ctx),
        TreeOperation::Lookup { key } => run_lookup(key, ctx),
        TreeOperation::Remove { key } => run_remove(key, ctx),
        TreeOperation::Show { key } => run_show(key.as_deref(), ctx),
    }
}

fn run_insert(key: &str, path: Option<&str>, ctx: &CommandContext) -> Result<Report> {
    let key: Key = key.parse()?;
    let path = resolve_for_storage(&PathSpec::from_arg(path), ctx.env.as_ref())?;

    let registry = ctx.store.load()?;
    let root = registry.store().insert(key.segments(), &path)?;
    ctx.store.save(&Registry::from_store(root))?;
    tracing::debug!("Inserted {} -> {}", key, path);

    let json_value = serde_json::json!({
        "status": "inserted",
        "key": key.to_string(),
        "path": path,
    });
    Ok(Report::new(
        ctx.render(json_value, format!("Inserted {} ({})\n", key, path)),
        Status::Updated,
    ))
}

fn run_lookup(key: &str, ctx: &CommandContext) -> Result<Report> {
    let key: Key = key.parse()?;
    let registry = ctx.store.load()?;
    let path = ctx.expand(registry.store().lookup(key.segments())?);

    let json_value = serde_json::json!({
        "status": "resolved",
        "key": key.to_string(),
        "path": path,
    });
    Ok(Report::new(
        ctx.render(json_value, format!("{}\n", path)),
        Status::Resolved,
    ))
}

fn run_remove(key: &str, ctx: &CommandContext) -> Result<Report> {
    let key: Key = key.parse()?;
    let registry = ctx.store.load()?;
    let root = registry.store().remove(key.segments())?;
    let kept = root.node(key.segments()).map(|n| n.len()).unwrap_or(0);
    ctx.store.save(&Registry::from_store(root))?;
    tracing::debug!("Removed {} ({} nested shortcuts kept)", key, kept);

    let text = if kept > 0 {
        format!("Removed {} ({} nested shortcuts kept)\n", key, kept)
    } else {
        format!("Removed {}\n", key)
    };
    let json_value = serde_json::json!({
        "status": "removed",
        "key": key.to_string(),
        "nested_kept": kept,
    });
    Ok(Report::new(ctx.render(json_value, text), Status::Updated))
}

fn run_show(key: Option<&str>, ctx: &CommandContext) -> Result<Report> {
    let registry = ctx.store.load()?;
    let key = key.map(Key::parse).unwrap_or_default();
    let node = registry
        .store()
        .node(key.segments())
        .ok_or_else(|| WaymarkError::KeyNotFound {
            key: key.to_string(),
        })?;

    let entries: Vec<serde_json::Value> = node
        .entries()
        .into_iter()
        .map(|(sub, path)| {
            let full = key.segments().iter().chain(sub.segments()).cloned();
            serde_json::json!({
                "key": Key::from_segments(full).to_string(),
                "path": path,
            })
        })
        .collect();
    let json_value = serde_json::json!({
        "status": "tree",
        "root": key.to_string(),
        "entries": entries,
    });

    let mut text = String::new();
    if let Some(path) = node.path().filter(|_| !key.is_empty()) {
        text.push_str(&format!("{} ({})\n", key, path));
    }
    let outline = render_tree(node);
    if !outline.is_empty() {
        text.push_str(&outline);
        text.push('\n');
    }
    if text.is_empty() {
        text.push_str("No shortcuts registered.\n");
    }

    Ok(Report::new(ctx.render(json_value, text), Status::Listing))
}
