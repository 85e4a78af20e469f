pub mod config;
pub mod descriptor;
pub mod discovery;
pub mod entry;
pub mod error;
pub mod events;
pub mod grouping;
pub mod observability;
pub mod path_validation;
pub mod tree;

pub use entry::{ParsedPath, WorkspaceEntry};
pub use error::{Result, SwitcherError};
