use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// wsswitch - save, switch between and delete named editor workspaces
#[derive(Parser, Debug)]
#[command(name = "wsswitch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Workspace directories, separated like PATH
    #[arg(long, global = true, value_name = "DIRS", env = "WSSWITCH_PATHS")]
    pub paths: Option<String>,

    /// Editor command used to open workspaces (default: `code`)
    #[arg(long, global = true, value_name = "CMD", env = "WSSWITCH_EDITOR")]
    pub editor: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save folders as a named workspace file
    Save {
        /// Workspace name, may include sub-directories (e.g. team/api)
        #[arg(value_name = "NAME")]
        name: Option<String>,

        /// Workspace directory to save into (path or directory name)
        #[arg(long, value_name = "DIR")]
        root: Option<String>,

        /// Folder to include; repeat for several (default: current directory)
        #[arg(long = "folder", short = 'f', value_name = "PATH")]
        folders: Vec<PathBuf>,

        /// Overwrite an existing workspace file without asking
        #[arg(long)]
        force: bool,

        /// Do not open the workspace after saving
        #[arg(long)]
        no_open: bool,
    },

    /// Switch to a saved workspace
    Switch {
        /// Search text matched against workspace names
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        /// Open in a new editor window
        #[arg(long, short = 'n')]
        new_window: bool,
    },

    /// Delete a saved workspace file
    Delete {
        /// Search text matched against workspace names
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },

    /// List every saved workspace
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show saved workspaces as a folded directory tree
    Tree {
        /// Flat list instead of a tree (overrides WSSWITCH_TREE_VIEW)
        #[arg(long)]
        flat: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Number of levels to expand (at least 1)
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
        depth: Option<u32>,
    },

    /// Re-read workspace directories and re-render the tree
    Reload,
}
