//! Environment variable key constants and aliases.
//!
//! Primary keys use the `WSSWITCH_*` prefix; the long `WORKSPACE_SWITCHER_*`
//! spelling is still honored.

/// Workspace roots
pub mod paths {
    /// Root directories, separated by the platform path-list separator.
    pub const WSSWITCH_PATHS: &str = "WSSWITCH_PATHS";
    pub const PATHS_ALIASES: &[&str] = &["WORKSPACE_SWITCHER_PATHS"];
}

/// Listing / tree view
pub mod view {
    /// `1` renders the folded tree, `0` a flat list.
    pub const WSSWITCH_TREE_VIEW: &str = "WSSWITCH_TREE_VIEW";
    pub const TREE_VIEW_ALIASES: &[&str] = &["WORKSPACE_SWITCHER_TREE_VIEW"];
}

/// Editor launched on switch
pub mod editor {
    pub const WSSWITCH_EDITOR: &str = "WSSWITCH_EDITOR";
    pub const EDITOR_ALIASES: &[&str] = &["WORKSPACE_SWITCHER_EDITOR"];
}

/// Observability and logging
pub mod observability {
    pub const WSSWITCH_QUIET: &str = "WSSWITCH_QUIET";
    pub const QUIET_ALIASES: &[&str] = &["WORKSPACE_SWITCHER_QUIET"];

    pub const WSSWITCH_LOG_LEVEL: &str = "WSSWITCH_LOG_LEVEL";
    pub const LOG_LEVEL_ALIASES: &[&str] = &["WORKSPACE_SWITCHER_LOG_LEVEL"];

    pub const WSSWITCH_LOG_JSON: &str = "WSSWITCH_LOG_JSON";
    pub const LOG_JSON_ALIASES: &[&str] = &[];

    pub const WSSWITCH_AUDIT_LOG: &str = "WSSWITCH_AUDIT_LOG";
    pub const AUDIT_LOG_ALIASES: &[&str] = &["WORKSPACE_SWITCHER_AUDIT_LOG"];
}
