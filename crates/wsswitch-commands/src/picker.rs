//! Searchable workspace picker.
//!
//! Matches are case-insensitive on the workspace name. An exact name match beats
//! substring matches. The user can answer with a number to pick, with text to
//! narrow the search, or with an empty line to cancel.

use anyhow::Result;

use wsswitch_core::WorkspaceEntry;

use crate::prompt::Prompt;

/// Entries matching `query`; all entries for an empty query.
pub fn filter_entries<'a>(entries: &'a [WorkspaceEntry], query: &str) -> Vec<&'a WorkspaceEntry> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return entries.iter().collect();
    }
    let exact: Vec<&WorkspaceEntry> = entries
        .iter()
        .filter(|e| e.name.to_lowercase() == q)
        .collect();
    if !exact.is_empty() {
        return exact;
    }
    entries
        .iter()
        .filter(|e| e.name.to_lowercase().contains(&q))
        .collect()
}

/// Let the user choose one entry. `Ok(None)` when cancelled or nothing matches.
pub fn pick<'a>(
    entries: &'a [WorkspaceEntry],
    query: Option<&str>,
    placeholder: &str,
    prompt: &mut dyn Prompt,
) -> Result<Option<&'a WorkspaceEntry>> {
    let mut query = query.unwrap_or_default().to_string();
    loop {
        let candidates = filter_entries(entries, &query);
        match candidates.len() {
            0 => {
                prompt.say(&format!("No workspace matches '{}'", query.trim()));
                return Ok(None);
            }
            1 if !query.trim().is_empty() => return Ok(Some(candidates[0])),
            _ => {}
        }

        prompt.say(placeholder);
        for (i, entry) in candidates.iter().enumerate() {
            prompt.say(&format!("  {:>2}) {}  {}", i + 1, entry.name, entry.path.display()));
        }
        let Some(answer) = prompt.ask(&format!(
            "Number (1-{}), text to search, or empty to cancel:",
            candidates.len()
        ))?
        else {
            return Ok(None);
        };
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(None);
        }
        match answer.parse::<usize>() {
            Ok(n) if (1..=candidates.len()).contains(&n) => return Ok(Some(candidates[n - 1])),
            Ok(n) => prompt.say(&format!("{} is out of range", n)),
            Err(_) => query = answer.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::test_support::touch;
    use crate::prompt::ScriptedPrompt;

    fn entries(names: &[&str]) -> (tempfile::TempDir, Vec<WorkspaceEntry>) {
        let tmp = tempfile::tempdir().unwrap();
        let list = names
            .iter()
            .map(|n| {
                let p = tmp.path().join(format!("{}.code-workspace", n));
                touch(&p);
                WorkspaceEntry::new(p).unwrap()
            })
            .collect();
        (tmp, list)
    }

    fn names(found: &[&WorkspaceEntry]) -> Vec<String> {
        found.iter().map(|e| e.name.clone()).collect()
    }

    #[test]
    fn test_filter_entries() {
        let (_tmp, list) = entries(&["api", "api-gateway", "Web"]);
        assert_eq!(names(&filter_entries(&list, "")), vec!["api", "api-gateway", "Web"]);
        assert_eq!(names(&filter_entries(&list, "API")), vec!["api"]);
        assert_eq!(names(&filter_entries(&list, "gate")), vec!["api-gateway"]);
        assert_eq!(names(&filter_entries(&list, "we")), vec!["Web"]);
        assert!(filter_entries(&list, "zzz").is_empty());
    }

    #[test]
    fn test_pick_unique_query_skips_prompt() {
        let (_tmp, list) = entries(&["api", "web"]);
        let mut p = ScriptedPrompt::new(Vec::<String>::new());
        let got = pick(&list, Some("web"), "Choose", &mut p).unwrap().unwrap();
        assert_eq!(got.name, "web");
        assert!(p.transcript.is_empty());
    }

    #[test]
    fn test_pick_by_number_after_search() {
        let (_tmp, list) = entries(&["api", "api-gateway", "web"]);
        let mut p = ScriptedPrompt::new(["9", "api-", "x"]);
        // "9" is out of range, "api-" narrows to a single match.
        let got = pick(&list, None, "Choose", &mut p).unwrap().unwrap();
        assert_eq!(got.name, "api-gateway");
        assert!(p.saw("9 is out of range"));

        let mut p = ScriptedPrompt::new(["2"]);
        let got = pick(&list, Some("api"), "Choose", &mut p).unwrap();
        // Exact match on "api" wins without prompting.
        assert_eq!(got.unwrap().name, "api");

        let mut p = ScriptedPrompt::new(["3"]);
        let got = pick(&list, None, "Choose", &mut p).unwrap().unwrap();
        assert_eq!(got.name, "web");
    }

    #[test]
    fn test_pick_cancel_and_no_match() {
        let (_tmp, list) = entries(&["api", "web"]);
        let mut p = ScriptedPrompt::new([""]);
        assert!(pick(&list, None, "Choose", &mut p).unwrap().is_none());

        let mut p = ScriptedPrompt::new(Vec::<String>::new());
        assert!(pick(&list, None, "Choose", &mut p).unwrap().is_none());

        let mut p = ScriptedPrompt::new(Vec::<String>::new());
        assert!(pick(&list, Some("nope"), "Choose", &mut p).unwrap().is_none());
        assert!(p.saw("No workspace matches 'nope'"));
    }
}
