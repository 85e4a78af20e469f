//! `wsswitch save` — write the current folders to a named workspace file.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use wsswitch_core::descriptor::Descriptor;
use wsswitch_core::observability;
use wsswitch_core::path_validation::workspace_file_under_root;
use wsswitch_core::WorkspaceEntry;

use super::switch::switch_to;
use crate::context::AppContext;
use crate::prompt::{confirm, Prompt};

#[derive(Debug, Clone, Default)]
pub struct SaveOptions {
    /// Name, optionally with sub-directories (`team/api`). Prompted when absent.
    pub name: Option<String>,
    /// Root to save under: a configured root's path or directory name.
    pub root: Option<String>,
    /// Folders recorded in the workspace. Empty means the current directory.
    pub folders: Vec<PathBuf>,
    /// Overwrite an existing file without asking.
    pub force: bool,
    /// Open the saved workspace afterwards.
    pub open: bool,
}

/// `wsswitch save`. Returns the written path, or `None` when nothing was saved.
pub fn cmd_save(
    ctx: &mut AppContext,
    opts: SaveOptions,
    prompt: &mut dyn Prompt,
) -> Result<Option<PathBuf>> {
    if ctx.roots.is_empty() {
        prompt.say("No workspace directories have been configured");
        return Ok(None);
    }

    let Some(root) = choose_root(&ctx.roots, opts.root.as_deref(), prompt)? else {
        return Ok(None);
    };

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let folders = absolute_folders(&opts.folders, &cwd);
    let default_name = folders
        .first()
        .and_then(|f| f.file_name())
        .map(|n| n.to_string_lossy().to_string());

    let name = match opts.name {
        Some(n) => n,
        None => {
            let question = match &default_name {
                Some(d) => format!("Enter a path for the workspace file [{}]:", d),
                None => "Enter a path for the workspace file:".to_string(),
            };
            let Some(answer) = prompt.ask(&question)? else {
                return Ok(None);
            };
            if answer.trim().is_empty() {
                match default_name {
                    Some(d) => d,
                    None => return Ok(None),
                }
            } else {
                answer
            }
        }
    };

    let path = workspace_file_under_root(&root, &name)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let overwritten = path.exists();
    if overwritten
        && !opts.force
        && !confirm(
            prompt,
            &format!("File {} already exists. Do you want to override it?", path.display()),
        )?
    {
        prompt.say("Cancelled.");
        return Ok(None);
    }

    Descriptor::new(folders.iter().cloned())
        .write_to(&path)
        .with_context(|| format!("Error while trying to save workspace {} to {}", name, path.display()))?;
    observability::audit_workspace_saved(&path, folders.len(), overwritten);
    tracing::info!(path = %path.display(), folders = folders.len(), "Saved workspace");
    prompt.say(&format!("✓ Saved workspace to {}", path.display()));
    ctx.notify_changed();

    if opts.open {
        let entry = WorkspaceEntry::new(&path)?;
        switch_to(ctx, &entry, false)?;
    }
    Ok(Some(path))
}

/// Resolve `--root` against the configured roots, or ask when there is more than one.
fn choose_root(
    roots: &[PathBuf],
    wanted: Option<&str>,
    prompt: &mut dyn Prompt,
) -> Result<Option<PathBuf>> {
    if let Some(wanted) = wanted {
        let found = roots.iter().find(|r| {
            r.as_path() == Path::new(wanted)
                || r.file_name().map(|n| n == wanted).unwrap_or(false)
        });
        return match found {
            Some(r) => Ok(Some(r.clone())),
            None => anyhow::bail!("'{}' is not a configured workspace directory", wanted),
        };
    }

    if roots.len() == 1 {
        return Ok(Some(roots[0].clone()));
    }

    prompt.say("Choose a workspace directory to save the new workspace file...");
    for (i, root) in roots.iter().enumerate() {
        prompt.say(&format!("  {:>2}) {}", i + 1, root.display()));
    }
    let Some(answer) = prompt.ask(&format!("Number (1-{}), or empty to cancel:", roots.len()))?
    else {
        return Ok(None);
    };
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(None);
    }
    match answer.parse::<usize>() {
        Ok(n) if (1..=roots.len()).contains(&n) => Ok(Some(roots[n - 1].clone())),
        _ => anyhow::bail!("Invalid selection: {}", answer),
    }
}

fn absolute_folders(folders: &[PathBuf], cwd: &Path) -> Vec<PathBuf> {
    if folders.is_empty() {
        return vec![cwd.to_path_buf()];
    }
    folders
        .iter()
        .map(|f| if f.is_absolute() { f.clone() } else { cwd.join(f) })
        .collect()
}
