//! List command handler - show every shortcut

use crate::commands::{CommandContext, Report, Status};
use crate::display::{bullet, format_options, listing};
use crate::error::Result;

/// List all shortcuts sorted by name, nested paths shortened
pub fn run_list(ctx: &CommandContext) -> Result<Report> {
    let registry = ctx.store.load()?;
    let entries = registry.entries();
    let rows = listing(&entries, ctx.config.display.threshold());

    let text = if rows.is_empty() {
        "No shortcuts registered. Add one with `waymark add NAME [PATH]`.\n".to_string()
    } else {
        format!("Available locations:\n{}\n", bullet(&format_options(&rows)))
    };

    let json_value = serde_json::json!({
        "status": "listing",
        "count": rows.len(),
        "shortcuts": rows
            .iter()
            .map(|(name, display)| {
                serde_json::json!({
                    "name": name,
                    "path": entries.get(name),
                    "display": display,
                })
            })
            .collect::<Vec<_>>(),
    });

    Ok(Report::new(ctx.render(json_value, text), Status::Listing))
}
