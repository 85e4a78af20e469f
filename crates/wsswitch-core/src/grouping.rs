//! Path grouping: split discovered entries into direct leaves and folder groups.
//!
//! A file nested below its root is represented by the first directory under the
//! root, extended through every directory that has exactly one child. So
//! `root/a/b/c/x.code-workspace`, where `a` only holds `b` and `b` only holds `c`,
//! groups under a single folder named `a/b/c`.
//!
//! Only child *counts* are consulted, so the result never depends on listing
//! order. A directory that cannot be listed stops folding at the current depth.

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::discovery::DirListing;
use crate::entry::WorkspaceEntry;

/// Folder node of the tree: display name relative to its root and the absolute path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderGroup {
    pub name: String,
    pub full_path: PathBuf,
}

/// Result of [`PathGrouper::group`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grouping {
    /// Entries whose directory is exactly a root, in input order.
    pub direct_entries: Vec<WorkspaceEntry>,
    /// One representative per nested entry, in input order, duplicates included.
    pub folders: Vec<FolderGroup>,
}

pub struct PathGrouper<'a, L: DirListing + ?Sized> {
    roots: &'a [PathBuf],
    listing: &'a L,
}

impl<'a, L: DirListing + ?Sized> PathGrouper<'a, L> {
    pub fn new(roots: &'a [PathBuf], listing: &'a L) -> Self {
        Self { roots, listing }
    }

    /// Most specific root that contains `dir` (component-wise prefix).
    pub fn matching_root(&self, dir: &Path) -> Option<&'a Path> {
        self.roots
            .iter()
            .filter(|r| dir.starts_with(r))
            .max_by_key(|r| r.components().count())
            .map(PathBuf::as_path)
    }

    pub fn group(&self, entries: Vec<WorkspaceEntry>) -> Grouping {
        let mut grouping = Grouping::default();
        for entry in entries {
            let Some(root) = self.matching_root(entry.dir()) else {
                tracing::warn!(path = %entry.path.display(), "Workspace file is outside every root");
                continue;
            };
            let segments = dir_segments(root, entry.dir());
            if segments.is_empty() {
                grouping.direct_entries.push(entry);
            } else {
                grouping.folders.push(self.fold(root, &segments));
            }
        }
        grouping
    }

    /// Fold `segments` (non-empty, relative to `root`) while each directory has one child.
    fn fold(&self, root: &Path, segments: &[OsString]) -> FolderGroup {
        let mut rel = PathBuf::from(&segments[0]);
        let mut remaining = &segments[1..];
        while let Some((next, rest)) = remaining.split_first() {
            let current = root.join(&rel);
            match self.listing.child_count(&current) {
                Ok(1) => {
                    rel.push(next);
                    remaining = rest;
                }
                Ok(_) => break,
                Err(e) => {
                    tracing::debug!(dir = %current.display(), error = %e, "Listing failed, folding stopped");
                    break;
                }
            }
        }
        FolderGroup {
            name: rel.to_string_lossy().to_string(),
            full_path: root.join(rel),
        }
    }
}

fn dir_segments(root: &Path, dir: &Path) -> Vec<OsString> {
    dir.strip_prefix(root)
        .map(|rel| {
            rel.components()
                .filter_map(|c| match c {
                    Component::Normal(s) => Some(s.to_os_string()),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::{gather_entries, FsDiscovery, FsListing};
    use std::collections::HashMap;
    use std::fs;
    use std::io;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "{}").unwrap();
    }

    fn group_fs(root: &Path) -> Grouping {
        let roots = vec![root.to_path_buf()];
        let entries = gather_entries(&FsDiscovery, &roots);
        PathGrouper::new(&roots, &FsListing).group(entries)
    }

    fn names(g: &Grouping) -> Vec<String> {
        g.folders.iter().map(|f| f.name.clone()).collect()
    }

    fn joined(parts: &[&str]) -> String {
        parts.iter().collect::<PathBuf>().to_string_lossy().to_string()
    }

    #[test]
    fn test_direct_file_is_leaf() {
        let tmp = tempfile::tempdir().unwrap();
        touch(&tmp.path().join("file1.code-workspace"));
        let g = group_fs(tmp.path());
        assert_eq!(g.direct_entries.len(), 1);
        assert_eq!(g.direct_entries[0].name, "file1");
        assert!(g.folders.is_empty());
    }

    #[test]
    fn test_multi_child_dir_not_folded() {
        let tmp = tempfile::tempdir().unwrap();
        touch(&tmp.path().join("sub/file1.code-workspace"));
        touch(&tmp.path().join("sub/file2.code-workspace"));
        let g = group_fs(tmp.path());
        assert!(g.direct_entries.is_empty());
        assert_eq!(names(&g), vec!["sub", "sub"]);
        assert_eq!(g.folders[0].full_path, tmp.path().join("sub"));
    }

    #[test]
    fn test_single_child_chain_folds() {
        let tmp = tempfile::tempdir().unwrap();
        touch(&tmp.path().join("a/b/c/file1.code-workspace"));
        let g = group_fs(tmp.path());
        assert_eq!(names(&g), vec![joined(&["a", "b", "c"])]);
        assert_eq!(g.folders[0].full_path, tmp.path().join("a/b/c"));
    }

    #[test]
    fn test_partial_fold_then_branch() {
        let tmp = tempfile::tempdir().unwrap();
        touch(&tmp.path().join("a/b/file1.code-workspace"));
        touch(&tmp.path().join("a/x/file2.code-workspace"));
        let g = group_fs(tmp.path());
        assert_eq!(names(&g), vec!["a", "a"]);
    }

    #[test]
    fn test_fold_stops_at_file_depth() {
        let tmp = tempfile::tempdir().unwrap();
        touch(&tmp.path().join("a/b/file1.code-workspace"));
        let g = group_fs(tmp.path());
        // `b` holds only the file, but there are no directory segments left to fold.
        assert_eq!(names(&g), vec![joined(&["a", "b"])]);
    }

    /// Child counts keyed by absolute path; unknown paths fail like a permission error.
    struct FakeListing(HashMap<PathBuf, usize>);

    impl DirListing for FakeListing {
        fn child_count(&self, dir: &Path) -> io::Result<usize> {
            self.0
                .get(dir)
                .copied()
                .ok_or_else(|| io::Error::from(io::ErrorKind::PermissionDenied))
        }
    }

    #[test]
    fn test_listing_failure_stops_folding() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("a/b/c/file1.code-workspace");
        touch(&file);
        let roots = vec![tmp.path().to_path_buf()];
        let listing = FakeListing(HashMap::from([(tmp.path().join("a"), 1)]));
        let entries = vec![WorkspaceEntry::new(&file).unwrap()];
        let g = PathGrouper::new(&roots, &listing).group(entries);
        assert_eq!(names(&g), vec![joined(&["a", "b"])]);
    }

    #[test]
    fn test_most_specific_root_wins() {
        let roots = vec![PathBuf::from("/ws"), PathBuf::from("/ws/team")];
        let listing = FakeListing(HashMap::new());
        let grouper = PathGrouper::new(&roots, &listing);
        assert_eq!(
            grouper.matching_root(Path::new("/ws/team/api")),
            Some(Path::new("/ws/team"))
        );
        assert_eq!(grouper.matching_root(Path::new("/ws/other")), Some(Path::new("/ws")));
        assert_eq!(grouper.matching_root(Path::new("/wsx")), None);
    }

    #[test]
    fn test_file_outside_roots_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("elsewhere/x.code-workspace");
        touch(&file);
        let roots = vec![tmp.path().join("root")];
        let entries = vec![WorkspaceEntry::new(&file).unwrap()];
        let g = PathGrouper::new(&roots, &FsListing).group(entries);
        assert_eq!(g, Grouping::default());
    }
}
