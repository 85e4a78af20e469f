//! `wsswitch list` — every saved workspace, flat.

use anyhow::Result;
use std::io::Write;

use crate::context::AppContext;

/// `wsswitch list [--json]`. Returns the number of workspaces listed.
pub fn cmd_list(ctx: &AppContext, json_output: bool, out: &mut dyn Write) -> Result<usize> {
    let entries = ctx.entries();

    if json_output {
        writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
        return Ok(entries.len());
    }

    if entries.is_empty() {
        eprintln!("No workspaces found");
        return Ok(0);
    }

    let width = entries.iter().map(|e| e.name.chars().count()).max().unwrap_or(0);
    for entry in &entries {
        writeln!(out, "{:<width$}  {}", entry.name, entry.path.display(), width = width)?;
    }
    Ok(entries.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::test_support::{context, touch};

    #[test]
    fn test_list_text_and_json() {
        let tmp = tempfile::tempdir().unwrap();
        touch(&tmp.path().join("deep/er/api.code-workspace"));
        touch(&tmp.path().join("web.code-workspace"));
        let (ctx, _) = context(vec![tmp.path().to_path_buf()]);

        let mut out = Vec::new();
        assert_eq!(cmd_list(&ctx, false, &mut out).unwrap(), 2);
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("api  "));
        assert!(lines[1].starts_with("web  "));

        let mut out = Vec::new();
        cmd_list(&ctx, true, &mut out).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v[0]["name"], "api");
        assert_eq!(
            v[1]["path"],
            tmp.path().join("web.code-workspace").to_string_lossy().to_string()
        );
    }

    #[test]
    fn test_list_empty_json() {
        let (ctx, _) = context(Vec::new());
        let mut out = Vec::new();
        assert_eq!(cmd_list(&ctx, true, &mut out).unwrap(), 0);
        assert_eq!(String::from_utf8(out).unwrap().trim(), "[]");
    }
}
