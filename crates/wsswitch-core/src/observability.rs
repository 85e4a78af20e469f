//! Observability: tracing init and the optional JSONL audit trail.
//!
//! Uses config::ObservabilityConfig for WSSWITCH_QUIET, LOG_LEVEL, LOG_JSON, AUDIT_LOG.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::Utc;
use serde_json::json;
use tracing_subscriber::{prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

/// Initialize tracing on stderr. Call once at process startup.
/// With WSSWITCH_QUIET=1 only WARN and above are logged; RUST_LOG overrides everything.
pub fn init_tracing() {
    let cfg = ObservabilityConfig::from_env();
    let level = if cfg.quiet {
        "wsswitch=warn".to_string()
    } else {
        cfg.log_level.clone()
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    let _ = if cfg.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init()
    };
}

fn audit_path() -> Option<&'static str> {
    let path = ObservabilityConfig::from_env().audit_log.as_deref()?;
    if let Some(parent) = Path::new(path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    Some(path)
}

fn append_jsonl(path: &str, record: &serde_json::Value) {
    if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(path) {
        if let Ok(line) = serde_json::to_string(record) {
            let _ = writeln!(f, "{}", line);
        }
    }
}

fn audit(event: &str, workspace: &Path, extra: serde_json::Value) {
    let Some(path) = audit_path() else {
        return;
    };
    let mut record = json!({
        "ts": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        "event": event,
        "workspace": workspace.to_string_lossy(),
    });
    if let (Some(obj), Some(extra)) = (record.as_object_mut(), extra.as_object()) {
        obj.extend(extra.clone());
    }
    append_jsonl(path, &record);
}

/// Audit: descriptor written
pub fn audit_workspace_saved(workspace: &Path, folders: usize, overwritten: bool) {
    audit(
        "workspace_saved",
        workspace,
        json!({ "folders": folders, "overwritten": overwritten }),
    );
}

/// Audit: descriptor removed
pub fn audit_workspace_deleted(workspace: &Path) {
    audit("workspace_deleted", workspace, json!({}));
}

/// Audit: editor launched on a descriptor
pub fn audit_workspace_opened(workspace: &Path, editor: &str, new_window: bool) {
    audit(
        "workspace_opened",
        workspace,
        json!({ "editor": editor, "new_window": new_window }),
    );
}
