//! WorkspaceEntry: one discovered descriptor file.

use crate::error::{Result, SwitcherError};
use serde::Serialize;
use std::path::{Component, Path, PathBuf};

/// Structured decomposition of a descriptor path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedPath {
    /// Filesystem root (`/` on Unix, `C:\` on Windows); empty for relative paths.
    pub root: PathBuf,
    /// Containing directory.
    pub dir: PathBuf,
    /// File name with extension.
    pub base: String,
    /// Extension including the leading dot, or empty.
    pub ext: String,
    /// File name without extension.
    pub name: String,
}

impl ParsedPath {
    pub fn parse(path: &Path) -> Self {
        let root: PathBuf = path
            .components()
            .take_while(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
            .collect();
        let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let base = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let ext = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        Self {
            root,
            dir,
            base,
            ext,
            name,
        }
    }
}

/// A descriptor file found by discovery. Immutable; rebuilt on every pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceEntry {
    pub name: String,
    pub path: PathBuf,
    #[serde(skip)]
    pub parsed_path: ParsedPath,
}

impl WorkspaceEntry {
    /// Build an entry for `path`, which must be an existing regular file.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_file() {
            return Err(SwitcherError::NotAFile(path));
        }
        Ok(Self::from_parts(path))
    }

    fn from_parts(path: PathBuf) -> Self {
        let parsed_path = ParsedPath::parse(&path);
        Self {
            name: parsed_path.name.clone(),
            path,
            parsed_path,
        }
    }

    /// Directory containing the descriptor.
    pub fn dir(&self) -> &Path {
        &self.parsed_path.dir
    }
}
