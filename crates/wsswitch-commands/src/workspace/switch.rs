//! `wsswitch switch` — open a saved workspace in the editor.

use anyhow::{Context, Result};

use wsswitch_core::observability;
use wsswitch_core::WorkspaceEntry;

use crate::context::AppContext;
use crate::picker;
use crate::prompt::Prompt;

/// `wsswitch switch [QUERY] [--new-window]`
pub fn cmd_switch(
    ctx: &AppContext,
    query: Option<&str>,
    new_window: bool,
    prompt: &mut dyn Prompt,
) -> Result<()> {
    let entries = ctx.entries();
    if entries.is_empty() {
        prompt.say("No workspaces found");
        return Ok(());
    }

    let placeholder = format!(
        "Choose a workspace to switch to{}...",
        if new_window { " in a new window" } else { "" }
    );
    let Some(entry) = picker::pick(&entries, query, &placeholder, prompt)? else {
        return Ok(());
    };
    switch_to(ctx, entry, new_window)
}

/// Launch the editor on `entry`.
pub fn switch_to(ctx: &AppContext, entry: &WorkspaceEntry, new_window: bool) -> Result<()> {
    ctx.launcher
        .open(&entry.path, new_window)
        .with_context(|| format!("Failed to open workspace '{}'", entry.name))?;
    observability::audit_workspace_opened(&entry.path, &ctx.launcher.describe(), new_window);
    tracing::info!(
        workspace = %entry.name,
        path = %entry.path.display(),
        new_window,
        "Opened workspace"
    );
    Ok(())
}
