//! Config structs grouped by concern, loaded from the environment.

use super::env_keys::{editor as editor_keys, observability as obv_keys, paths as path_keys, view};
use super::loader::{env_bool, env_optional, env_or, env_paths, load_dotenv};
use std::path::PathBuf;

/// Default editor command used to open descriptor files.
pub const DEFAULT_EDITOR: &str = "code";

/// Root directories under which descriptor files are discovered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathsConfig {
    /// Absolute, de-duplicated, in configured order.
    pub roots: Vec<PathBuf>,
}

impl PathsConfig {
    pub fn from_env() -> Self {
        load_dotenv();
        Self {
            roots: env_paths(path_keys::WSSWITCH_PATHS, path_keys::PATHS_ALIASES),
        }
    }

    /// Roots given explicitly (e.g. `--paths`), resolved the same way as the env value.
    pub fn from_raw(raw: &str) -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            roots: super::loader::resolve_path_list(
                std::env::split_paths(raw),
                dirs::home_dir().as_deref(),
                &cwd,
            ),
        }
    }
}

/// How the sidebar-style listing is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    pub tree_view: bool,
}

impl ViewConfig {
    pub fn from_env() -> Self {
        load_dotenv();
        Self {
            tree_view: env_bool(view::WSSWITCH_TREE_VIEW, view::TREE_VIEW_ALIASES, true),
        }
    }
}

/// Editor command launched on switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    pub command: String,
}

impl EditorConfig {
    pub fn from_env() -> Self {
        load_dotenv();
        Self {
            command: env_or(editor_keys::WSSWITCH_EDITOR, editor_keys::EDITOR_ALIASES, || {
                DEFAULT_EDITOR.to_string()
            }),
        }
    }
}

/// Observability: quiet, log_level, log_json, audit_log
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
    pub audit_log: Option<String>,
}

impl ObservabilityConfig {
    pub fn from_env() -> &'static Self {
        use std::sync::OnceLock;
        static CACHE: OnceLock<ObservabilityConfig> = OnceLock::new();
        CACHE.get_or_init(|| {
            load_dotenv();
            Self {
                quiet: env_bool(obv_keys::WSSWITCH_QUIET, obv_keys::QUIET_ALIASES, false),
                log_level: env_or(
                    obv_keys::WSSWITCH_LOG_LEVEL,
                    obv_keys::LOG_LEVEL_ALIASES,
                    || "wsswitch=info".to_string(),
                ),
                log_json: env_bool(obv_keys::WSSWITCH_LOG_JSON, obv_keys::LOG_JSON_ALIASES, false),
                audit_log: env_optional(obv_keys::WSSWITCH_AUDIT_LOG, obv_keys::AUDIT_LOG_ALIASES),
            }
        })
    }
}
