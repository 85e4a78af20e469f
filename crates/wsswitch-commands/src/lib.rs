//! wsswitch commands: save, switch, delete, list, tree, reload.
//!
//! Commands work against an [`AppContext`] (roots, listing mode, editor launcher,
//! refresh registry) and talk to the user through a [`Prompt`], so every command
//! runs the same from the terminal and from tests.

pub mod context;
pub mod launcher;
pub mod picker;
pub mod prompt;
pub mod workspace;

pub use context::AppContext;
pub use launcher::{EditorLauncher, ProcessLauncher};
pub use prompt::{Prompt, StdioPrompt};
