//! Tree view model: nodes, per-level assembly, and the lazy `get_children` provider.
//!
//! Nothing is cached between calls. Every expansion re-runs discovery scoped to
//! the expanded folder, so the view always reflects what is on disk.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::discovery::{gather_entries, DirListing, Discover};
use crate::entry::WorkspaceEntry;
use crate::grouping::{FolderGroup, Grouping, PathGrouper};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    Folder(FolderGroup),
    Leaf(WorkspaceEntry),
}

impl TreeNode {
    pub fn display_name(&self) -> &str {
        match self {
            TreeNode::Folder(f) => &f.name,
            TreeNode::Leaf(e) => &e.name,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf(_))
    }

    pub fn path(&self) -> &Path {
        match self {
            TreeNode::Folder(f) => &f.full_path,
            TreeNode::Leaf(e) => &e.path,
        }
    }
}

/// One tree level: folders deduplicated by name (first wins, insertion order),
/// then direct leaves in discovery order.
pub fn assemble(grouping: Grouping) -> Vec<TreeNode> {
    let mut seen = HashSet::new();
    let mut nodes: Vec<TreeNode> = grouping
        .folders
        .into_iter()
        .filter(|f| seen.insert(f.name.clone()))
        .map(TreeNode::Folder)
        .collect();
    nodes.extend(grouping.direct_entries.into_iter().map(TreeNode::Leaf));
    nodes
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingMode {
    /// Every descriptor is a top-level leaf.
    Flat,
    /// Folded folder hierarchy, expanded lazily.
    Tree,
}

impl ListingMode {
    pub fn from_tree_flag(tree_view: bool) -> Self {
        if tree_view {
            ListingMode::Tree
        } else {
            ListingMode::Flat
        }
    }
}

/// Answers "children of node X" for the configured roots.
pub struct TreeDataProvider<'a, D: Discover + ?Sized, L: DirListing + ?Sized> {
    roots: &'a [PathBuf],
    mode: ListingMode,
    discovery: &'a D,
    listing: &'a L,
}

impl<'a, D: Discover + ?Sized, L: DirListing + ?Sized> TreeDataProvider<'a, D, L> {
    pub fn new(roots: &'a [PathBuf], mode: ListingMode, discovery: &'a D, listing: &'a L) -> Self {
        Self {
            roots,
            mode,
            discovery,
            listing,
        }
    }

    /// Top level when `node` is `None`; a folder's scoped level otherwise; nothing for a leaf.
    pub fn get_children(&self, node: Option<&TreeNode>) -> Vec<TreeNode> {
        let scoped;
        let roots: &[PathBuf] = match node {
            None => self.roots,
            Some(TreeNode::Leaf(_)) => return Vec::new(),
            Some(TreeNode::Folder(f)) => {
                scoped = [f.full_path.clone()];
                &scoped
            }
        };

        let entries = gather_entries(self.discovery, roots);
        match self.mode {
            ListingMode::Flat => entries.into_iter().map(TreeNode::Leaf).collect(),
            ListingMode::Tree => {
                let grouping = PathGrouper::new(roots, self.listing).group(entries);
                assemble(grouping)
            }
        }
    }
}
