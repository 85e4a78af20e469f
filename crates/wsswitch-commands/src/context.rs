//! Application context shared by all commands.

use std::path::PathBuf;

use wsswitch_core::discovery::{gather_entries, FsDiscovery, FsListing};
use wsswitch_core::events::RefreshRegistry;
use wsswitch_core::tree::{ListingMode, TreeDataProvider};
use wsswitch_core::WorkspaceEntry;

use crate::launcher::EditorLauncher;

pub struct AppContext {
    pub roots: Vec<PathBuf>,
    pub mode: ListingMode,
    pub launcher: Box<dyn EditorLauncher>,
    pub refresh: RefreshRegistry,
}

impl AppContext {
    pub fn new(roots: Vec<PathBuf>, mode: ListingMode, launcher: Box<dyn EditorLauncher>) -> Self {
        Self {
            roots,
            mode,
            launcher,
            refresh: RefreshRegistry::new(),
        }
    }

    /// Every descriptor under the configured roots, flat, in discovery order.
    pub fn entries(&self) -> Vec<WorkspaceEntry> {
        gather_entries(&FsDiscovery, &self.roots)
    }

    /// Tree provider over the configured roots in `mode`.
    pub fn provider(&self, mode: ListingMode) -> TreeDataProvider<'_, FsDiscovery, FsListing> {
        TreeDataProvider::new(&self.roots, mode, &FsDiscovery, &FsListing)
    }

    /// Tell every subscribed view that the workspace set changed.
    pub fn notify_changed(&mut self) {
        self.refresh.notify();
    }

    /// Release subscribers. Called once before exit.
    pub fn shutdown(&mut self) {
        self.refresh.clear();
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("roots", &self.roots)
            .field("mode", &self.mode)
            .field("editor", &self.launcher.describe())
            .field("refresh", &self.refresh)
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::launcher::LaunchError;
    use std::path::Path;
    use std::sync::{Arc, Mutex};

    /// Records `(path, new_window)` for every open request.
    #[derive(Clone, Default)]
    pub struct RecordingLauncher(pub Arc<Mutex<Vec<(PathBuf, bool)>>>);

    impl EditorLauncher for RecordingLauncher {
        fn open(&self, workspace: &Path, new_window: bool) -> Result<(), LaunchError> {
            self.0
                .lock()
                .unwrap()
                .push((workspace.to_path_buf(), new_window));
            Ok(())
        }

        fn describe(&self) -> String {
            "recording".to_string()
        }
    }

    pub fn touch(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "{}").unwrap();
    }

    pub fn context(roots: Vec<PathBuf>) -> (AppContext, RecordingLauncher) {
        let launcher = RecordingLauncher::default();
        let ctx = AppContext::new(roots, ListingMode::Tree, Box::new(launcher.clone()));
        (ctx, launcher)
    }
}
