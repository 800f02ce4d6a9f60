//! Edit command handlers - add, remove, rename and copy flat shortcuts
//!
//! Each handler loads the registry, applies one mutation and saves the
//! result. Registries that come back unchanged are not written.

use crate::cli::{AddArgs, PairArgs, RemoveArgs};
use crate::commands::{CommandContext, Report, Status};
use crate::error::Result;
use crate::paths::{resolve_for_storage, PathSpec};
use crate::registry::Registry;
use crate::resolver::{self, NameAndPath, RenamePair};

/// Add (or overwrite) a shortcut
pub fn run_add(args: &AddArgs, ctx: &CommandContext) -> Result<Report> {
    let registry = ctx.store.load()?;
    let shortcut = NameAndPath::new(&args.name, PathSpec::from_arg(args.path.as_deref()));
    let updated = resolver::add(&registry, &shortcut, ctx.env.as_ref())?;
    persist(ctx, &registry, &updated)?;

    let path = updated.get(&shortcut.name).unwrap_or_default();
    let json_value = serde_json::json!({
        "status": "added",
        "name": shortcut.name,
        "path": path,
    });
    Ok(Report::new(
        ctx.render(json_value, format!("Added {} ({})\n", shortcut.name, path)),
        Status::Updated,
    ))
}

/// Remove a shortcut, optionally only if it points at the given path
pub fn run_remove(args: &RemoveArgs, ctx: &CommandContext) -> Result<Report> {
    let registry = ctx.store.load()?;
    let expected = match &args.path {
        Some(p) => Some(resolve_for_storage(&PathSpec::Given(p.clone()), ctx.env.as_ref())?),
        None => None,
    };
    let updated = resolver::remove(&registry, &args.name, expected.as_deref())?;
    let removed = persist(ctx, &registry, &updated)?;

    let text = if removed {
        format!("Removed {}\n", args.name)
    } else if registry.contains(&args.name) {
        format!(
            "Kept {}: it points at {}, not {}\n",
            args.name,
            registry.get(&args.name).unwrap_or_default(),
            expected.as_deref().unwrap_or_default()
        )
    } else {
        format!("No shortcut named {}\n", args.name)
    };
    let status = if removed { "removed" } else { "unchanged" };
    let json_value = serde_json::json!({
        "status": status,
        "name": args.name,
    });
    Ok(Report::new(ctx.render(json_value, text), Status::Updated))
}

/// Rename a shortcut
pub fn run_rename(args: &PairArgs, ctx: &CommandContext) -> Result<Report> {
    let registry = ctx.store.load()?;
    let pair = RenamePair::new(&args.old_name, &args.new_name);
    let updated = resolver::rename(&registry, &pair)?;
    let changed = persist(ctx, &registry, &updated)?;
    let known = registry.contains(&pair.old_name);
    Ok(pair_report(ctx, "renamed", "Renamed", &pair, changed, known))
}

/// Copy a shortcut under a new name
pub fn run_copy(args: &PairArgs, ctx: &CommandContext) -> Result<Report> {
    let registry = ctx.store.load()?;
    let pair = RenamePair::new(&args.old_name, &args.new_name);
    let updated = resolver::duplicate(&registry, &pair)?;
    let changed = persist(ctx, &registry, &updated)?;
    let known = registry.contains(&pair.old_name);
    Ok(pair_report(ctx, "copied", "Copied", &pair, changed, known))
}

/// Save `updated` if it differs from `original`; returns whether it did
fn persist(ctx: &CommandContext, original: &Registry, updated: &Registry) -> Result<bool> {
    if original == updated {
        tracing::debug!("Registry unchanged, not saving");
        return Ok(false);
    }
    ctx.store.save(updated)?;
    Ok(true)
}

fn pair_report(
    ctx: &CommandContext,
    status: &str,
    verb: &str,
    pair: &RenamePair,
    changed: bool,
    known: bool,
) -> Report {
    let text = if changed {
        format!("{} {} to {}\n", verb, pair.old_name, pair.new_name)
    } else if known {
        format!("{} already points where {} does\n", pair.new_name, pair.old_name)
    } else {
        format!("No shortcut named {}\n", pair.old_name)
    };
    let status = if changed { status } else { "unchanged" };
    let json_value = serde_json::json!({
        "status": status,
        "old_name": pair.old_name,
        "new_name": pair.new_name,
    });
    Report::new(ctx.render(json_value, text), Status::Updated)
}
