//! `wsswitch delete` — remove a saved workspace file.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use wsswitch_core::observability;

use crate::context::AppContext;
use crate::picker;
use crate::prompt::{confirm, Prompt};

/// `wsswitch delete [QUERY] [--force]`. Returns the removed path.
pub fn cmd_delete(
    ctx: &mut AppContext,
    query: Option<&str>,
    force: bool,
    prompt: &mut dyn Prompt,
) -> Result<Option<PathBuf>> {
    let entries = ctx.entries();
    if entries.is_empty() {
        prompt.say("No workspaces found");
        return Ok(None);
    }

    let Some(entry) = picker::pick(&entries, query, "Choose a workspace to delete...", prompt)?
    else {
        return Ok(None);
    };

    if !force
        && !confirm(
            prompt,
            &format!(
                "Delete workspace '{}' ({})?",
                entry.name,
                entry.path.display()
            ),
        )?
    {
        prompt.say("Cancelled.");
        return Ok(None);
    }

    fs::remove_file(&entry.path)
        .with_context(|| format!("Failed to delete workspace: {}", entry.path.display()))?;
    observability::audit_workspace_deleted(&entry.path);
    tracing::info!(workspace = %entry.name, path = %entry.path.display(), "Deleted workspace");
    prompt.say(&format!("✓ Deleted workspace '{}'", entry.name));

    let removed = entry.path.clone();
    ctx.notify_changed();
    Ok(Some(removed))
}
