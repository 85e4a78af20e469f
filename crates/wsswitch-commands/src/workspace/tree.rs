//! `wsswitch tree` — the workspace sidebar view, rendered to the terminal.
//!
//! Folders are expanded by calling `get_children` again for each folder node, the
//! same way an editor's tree view asks for one level at a time.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

use wsswitch_core::discovery::{DirListing, Discover};
use wsswitch_core::tree::{ListingMode, TreeDataProvider, TreeNode};

use crate::context::AppContext;

#[derive(Debug, Clone, Default)]
pub struct TreeOptions {
    /// Overrides the configured listing mode.
    pub mode: Option<ListingMode>,
    pub json: bool,
    /// Number of levels to show; unlimited when `None`.
    pub depth: Option<usize>,
}

/// Fully expanded node, ready to print or serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeView {
    pub name: String,
    pub path: PathBuf,
    pub leaf: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeView>,
}

/// Expand `node` (the top level when `None`) down to `max_depth` levels.
pub fn expand<D, L>(
    provider: &TreeDataProvider<'_, D, L>,
    node: Option<&TreeNode>,
    max_depth: Option<usize>,
) -> Vec<TreeView>
where
    D: Discover + ?Sized,
    L: DirListing + ?Sized,
{
    expand_level(provider, node, 0, max_depth)
}

fn expand_level<D, L>(
    provider: &TreeDataProvider<'_, D, L>,
    node: Option<&TreeNode>,
    depth: usize,
    max_depth: Option<usize>,
) -> Vec<TreeView>
where
    D: Discover + ?Sized,
    L: DirListing + ?Sized,
{
    if max_depth.is_some_and(|m| depth >= m) {
        return Vec::new();
    }
    provider
        .get_children(node)
        .into_iter()
        .map(|child| {
            let children = if child.is_leaf() {
                Vec::new()
            } else {
                expand_level(provider, Some(&child), depth + 1, max_depth)
            };
            TreeView {
                name: child.display_name().to_string(),
                path: child.path().to_path_buf(),
                leaf: child.is_leaf(),
                children,
            }
        })
        .collect()
}

/// Indented text: folders end with the path separator, leaves are bare names.
pub fn render_text(views: &[TreeView], out: &mut dyn Write) -> std::io::Result<()> {
    render_level(views, 0, out)
}

fn render_level(views: &[TreeView], indent: usize, out: &mut dyn Write) -> std::io::Result<()> {
    for view in views {
        let suffix = if view.leaf { "" } else { std::path::MAIN_SEPARATOR_STR };
        writeln!(out, "{}{}{}", "  ".repeat(indent), view.name, suffix)?;
        render_level(&view.children, indent + 1, out)?;
    }
    Ok(())
}

/// `wsswitch tree [--flat] [--json] [--depth N]`. Returns the number of top-level nodes.
pub fn cmd_tree(ctx: &AppContext, opts: &TreeOptions, out: &mut dyn Write) -> Result<usize> {
    let mode = opts.mode.unwrap_or(ctx.mode);
    let provider = ctx.provider(mode);
    let views = expand(&provider, None, opts.depth);

    if opts.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&views)?)?;
    } else if views.is_empty() {
        if let Some(notice) = empty_notice(ctx) {
            eprintln!("{}", notice);
        }
    } else {
        render_text(&views, out)?;
    }
    Ok(views.len())
}

/// Why an empty view is empty; `None` when workspaces exist but were cut by `--depth`.
fn empty_notice(ctx: &AppContext) -> Option<&'static str> {
    if ctx.roots.is_empty() {
        Some("No workspace directories have been configured")
    } else if ctx.entries().is_empty() {
        Some("No workspaces found")
    } else {
        None
    }
}
