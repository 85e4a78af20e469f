//! Discovery: find descriptor files (`*.code-workspace`) under the configured roots.
//!
//! Two seams are consumed by grouping and exposed as traits so tests can swap
//! the filesystem out:
//! - [`Discover`]: recursive search returning descriptor paths
//! - [`DirListing`]: non-recursive child count of one directory

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::descriptor::is_descriptor;
use crate::entry::WorkspaceEntry;

/// Recursive descriptor search.
pub trait Discover {
    /// Descriptor files under `roots`, in a deterministic order.
    fn discover(&self, roots: &[PathBuf]) -> Vec<PathBuf>;
}

/// Non-recursive directory listing, used only for single-child folding.
pub trait DirListing {
    fn child_count(&self, dir: &Path) -> io::Result<usize>;
}

/// Walks the real filesystem with `walkdir`.
///
/// Roots are visited in the given order, siblings by file name. A file reachable
/// from two overlapping roots is reported once, at its first occurrence.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDiscovery;

impl Discover for FsDiscovery {
    fn discover(&self, roots: &[PathBuf]) -> Vec<PathBuf> {
        let mut seen = HashSet::new();
        let mut found = Vec::new();
        for root in roots {
            if !root.is_dir() {
                tracing::debug!(root = %root.display(), "Skipping missing workspace root");
                continue;
            }
            for item in WalkDir::new(root).sort_by_file_name() {
                let entry = match item {
                    Ok(e) => e,
                    Err(e) => {
                        tracing::debug!(error = %e, "Skipping unreadable path during discovery");
                        continue;
                    }
                };
                let path = entry.path();
                if !is_descriptor(path) || !path.is_file() {
                    continue;
                }
                if seen.insert(path.to_path_buf()) {
                    found.push(path.to_path_buf());
                }
            }
        }
        tracing::debug!(roots = roots.len(), found = found.len(), "Discovery finished");
        found
    }
}

/// Counts entries with `std::fs::read_dir`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsListing;

impl DirListing for FsListing {
    fn child_count(&self, dir: &Path) -> io::Result<usize> {
        let mut n = 0;
        for entry in fs::read_dir(dir)? {
            entry?;
            n += 1;
        }
        Ok(n)
    }
}

/// Discover descriptors under `roots` and wrap them as entries.
///
/// Files that disappear between the walk and entry construction are dropped.
pub fn gather_entries<D: Discover + ?Sized>(discovery: &D, roots: &[PathBuf]) -> Vec<WorkspaceEntry> {
    discovery
        .discover(roots)
        .into_iter()
        .filter_map(|p| match WorkspaceEntry::new(&p) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!(error = %e, "Dropping vanished workspace file");
                None
            }
        })
        .collect()
}
