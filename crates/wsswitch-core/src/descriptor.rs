//! Descriptor file format: `{"folders":[{"path":...}],"settings":{}}`.

use crate::error::{Result, SwitcherError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension (without the dot) that identifies descriptor files.
pub const DESCRIPTOR_EXTENSION: &str = "code-workspace";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderRef {
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    pub folders: Vec<FolderRef>,
    #[serde(default)]
    pub settings: serde_json::Map<String, serde_json::Value>,
}

impl Descriptor {
    pub fn new<I, P>(folders: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            folders: folders
                .into_iter()
                .map(|p| FolderRef { path: p.into() })
                .collect(),
            settings: serde_json::Map::new(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Write the descriptor to `path` as UTF-8 JSON, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let content = self.to_json()?;
        fs::write(path, content).map_err(|e| SwitcherError::io(path, e))
    }
}

/// True when `path` carries the descriptor extension.
pub fn is_descriptor(path: &Path) -> bool {
    path.extension()
        .map(|e| e == DESCRIPTOR_EXTENSION)
        .unwrap_or(false)
}

/// `<dir>/<name>.code-workspace`
pub fn descriptor_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.{}", name, DESCRIPTOR_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_json_shape() {
        let d = Descriptor::new(["/src/api", "/src/web"]);
        let v: serde_json::Value = serde_json::from_str(&d.to_json().unwrap()).unwrap();
        assert_eq!(
            v,
            serde_json::json!({
                "folders": [{ "path": "/src/api" }, { "path": "/src/web" }],
                "settings": {}
            })
        );
    }

    #[test]
    fn test_write_to_replaces_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = descriptor_path(tmp.path(), "team");
        assert!(path.ends_with("team.code-workspace"));
        std::fs::write(&path, "stale").unwrap();
        Descriptor::new(["/a"]).write_to(&path).unwrap();
        let back: Descriptor =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back.folders, vec![FolderRef { path: "/a".into() }]);
    }

    #[test]
    fn test_is_descriptor() {
        assert!(is_descriptor(Path::new("/x/a.code-workspace")));
        assert!(!is_descriptor(Path::new("/x/a.json")));
        assert!(!is_descriptor(Path::new("/x/code-workspace")));
    }
}
