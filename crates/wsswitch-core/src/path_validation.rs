//! Workspace name validation.
//!
//! A saved name may contain sub-directories (`team/api`), but must stay inside the
//! chosen root directory.

use std::path::{Component, Path, PathBuf};

use crate::descriptor::descriptor_path;
use crate::error::{Result, SwitcherError};

/// Normalize a user-entered workspace name into a relative path.
///
/// Backslashes become `/`, repeated slashes collapse, a leading slash is dropped.
/// `.` segments are skipped; `..` segments, drive prefixes and an empty final
/// segment are rejected, so the result always joins *below* a root.
pub fn normalize_workspace_name(raw: &str) -> Result<PathBuf> {
    let invalid = |reason| SwitcherError::InvalidName {
        name: raw.to_string(),
        reason,
    };

    let unified = raw.trim().replace('\\', "/");
    let trimmed = unified.trim_start_matches('/');
    if trimmed.is_empty() {
        return Err(invalid("name is empty"));
    }
    if trimmed.ends_with('/') {
        return Err(invalid("name must not end with a separator"));
    }

    let mut rel = PathBuf::new();
    for segment in trimmed.split('/') {
        match segment {
            "" | "." => continue,
            ".." => return Err(invalid("parent directory segments are not allowed")),
            s if !matches!(Path::new(s).components().next(), Some(Component::Normal(_))) => {
                return Err(invalid("segment is not a plain directory name"))
            }
            s => rel.push(s),
        }
    }
    if rel.as_os_str().is_empty() {
        return Err(invalid("name is empty"));
    }
    Ok(rel)
}

/// Absolute descriptor path for `raw` under `root`, i.e. `<root>/<name>.code-workspace`.
pub fn workspace_file_under_root(root: &Path, raw: &str) -> Result<PathBuf> {
    let rel = normalize_workspace_name(raw)?;
    let file_name = rel
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .ok_or_else(|| SwitcherError::InvalidName {
            name: raw.to_string(),
            reason: "name is empty",
        })?;
    let dir = match rel.parent() {
        Some(p) => root.join(p),
        None => root.to_path_buf(),
    };
    Ok(descriptor_path(&dir, &file_name))
}
