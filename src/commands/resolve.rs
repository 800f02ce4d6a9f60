//! Resolve command handler - turn a query into a path to navigate to

use std::collections::BTreeMap;

use crate::commands::{CommandContext, Report, Status};
use crate::display::{bullet, format_options, listing};
use crate::error::Result;
use crate::resolver::{navigate, MatchResult};

/// Resolve `query` against the registry.
///
/// A unique match (or an exact name among several matches) prints the
/// expanded path. Otherwise the candidates are listed: every shortcut for
/// no match, just the matching ones (shortened) when ambiguous.
pub fn run_resolve(query: &str, ctx: &CommandContext) -> Result<Report> {
    let registry = ctx.store.load()?;

    match navigate(&registry, query) {
        MatchResult::Resolved { name, path } => {
            let expanded = ctx.expand(&path);
            tracing::debug!("Resolved {} to {} ({})", query, name, expanded);
            let json_value = serde_json::json!({
                "status": "resolved",
                "query": query,
                "name": name,
                "path": expanded,
            });
            Ok(Report::new(
                ctx.render(json_value, format!("{}\n", expanded)),
                Status::Resolved,
            ))
        }
        MatchResult::NoMatch { candidates } => {
            let text = if candidates.is_empty() {
                format!("Couldn't find {} - no shortcuts registered yet.\n", query)
            } else {
                format!(
                    "Couldn't find {} - available locations are:\n{}\n",
                    query,
                    bullet(&format_options(&listing(&candidates, None)))
                )
            };
            let json_value = candidates_json("no_match", query, &candidates);
            Ok(Report::new(ctx.render(json_value, text), Status::Listing))
        }
        MatchResult::Ambiguous { candidates } => {
            let shown = listing(&candidates, ctx.config.display.threshold());
            let text = format!(
                "Got more than one match for {}:\n{}\n",
                query,
                bullet(&format_options(&shown))
            );
            let json_value = candidates_json("ambiguous", query, &candidates);
            Ok(Report::new(ctx.render(json_value, text), Status::Listing))
        }
    }
}

fn candidates_json(status: &str, query: &str, candidates: &BTreeMap<String, String>) -> serde_json::Value {
    serde_json::json!({
        "status": status,
        "query": query,
        "candidates": candidates,
    })
}
