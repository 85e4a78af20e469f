//! Workspace commands: save, switch, delete, list, tree, reload.

mod delete;
mod list;
mod reload;
mod save;
mod switch;
mod tree;

pub use delete::cmd_delete;
pub use list::cmd_list;
pub use reload::cmd_reload;
pub use save::{cmd_save, SaveOptions};
pub use switch::{cmd_switch, switch_to};
pub use tree::{cmd_tree, expand, render_text, TreeOptions, TreeView};
