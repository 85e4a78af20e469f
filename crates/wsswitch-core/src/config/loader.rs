//! Environment variable loading.
//!
//! Keeps the fallback chains in one place so command code never repeats `or_else`.

use std::env;
use std::path::{Path, PathBuf};

/// Load `.env` from the current directory into the environment (existing variables win).
pub fn load_dotenv() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let path = env::current_dir()
            .map(|d| d.join(".env"))
            .unwrap_or_else(|_| PathBuf::from(".env"));
        if let Ok(content) = std::fs::read_to_string(&path) {
            for (key, value) in parse_dotenv(&content) {
                if env::var(&key).is_err() {
                    env::set_var(key, value);
                }
            }
        }
    });
}

/// Parse `KEY=value` lines. Blank lines and `#` comments are skipped, surrounding
/// quotes are stripped, and an unquoted trailing `# comment` is dropped.
fn parse_dotenv(content: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some(eq_pos) = line.find('=') else {
            continue;
        };
        let key = line[..eq_pos].trim();
        let mut value = line[eq_pos + 1..].trim();
        if let Some(hash_pos) = value.find('#') {
            let before_hash = value[..hash_pos].trim_end();
            if !before_hash.contains('"') && !before_hash.contains('\'') {
                value = before_hash;
            }
        }
        if value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')))
        {
            value = &value[1..value.len() - 1];
        }
        if !key.is_empty() {
            pairs.push((key.to_string(), value.to_string()));
        }
    }
    pairs
}

/// Read the primary variable or the first set alias, falling back to `default`.
pub fn env_or<F>(primary: &str, aliases: &[&str], default: F) -> String
where
    F: FnOnce() -> String,
{
    env::var(primary)
        .ok()
        .or_else(|| aliases.iter().find_map(|a| env::var(a).ok()))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(default)
}

/// Read the primary variable or an alias; empty values count as unset.
pub fn env_optional(primary: &str, aliases: &[&str]) -> Option<String> {
    env::var(primary)
        .ok()
        .or_else(|| aliases.iter().find_map(|a| env::var(a).ok()))
        .and_then(|s| {
            let s = s.trim().to_string();
            if s.is_empty() {
                None
            } else {
                Some(s)
            }
        })
}

/// Boolean variable: 0/false/no/off are false, anything else set is true.
pub fn env_bool(primary: &str, aliases: &[&str], default: bool) -> bool {
    let v = env::var(primary)
        .ok()
        .or_else(|| aliases.iter().find_map(|a| env::var(a).ok()));
    match v.as_deref() {
        Some(s) => !matches!(
            s.trim().to_lowercase().as_str(),
            "0" | "false" | "no" | "off"
        ),
        None => default,
    }
}

/// Path-list variable (platform separator), resolved with [`resolve_path_list`].
pub fn env_paths(primary: &str, aliases: &[&str]) -> Vec<PathBuf> {
    let Some(raw) = env_optional(primary, aliases) else {
        return Vec::new();
    };
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    resolve_path_list(
        env::split_paths(&raw),
        dirs::home_dir().as_deref(),
        &cwd,
    )
}

/// Expand `~`, make relative paths absolute against `cwd`, drop empties and duplicates.
/// Order is preserved.
pub fn resolve_path_list<I>(raw: I, home: Option<&Path>, cwd: &Path) -> Vec<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut out: Vec<PathBuf> = Vec::new();
    for p in raw {
        if p.as_os_str().is_empty() {
            continue;
        }
        let p = expand_home(&p, home);
        let p = if p.is_absolute() { p } else { cwd.join(p) };
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}

/// Replace a leading `~` component with the home directory.
pub fn expand_home(path: &Path, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return path.to_path_buf();
    };
    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}
