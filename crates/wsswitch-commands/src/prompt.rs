//! Interactive prompts on stderr/stdin.

use anyhow::Result;
use std::io::{self, BufRead, Write};

pub trait Prompt {
    /// Show `question` and read one line (without the newline). `None` on EOF.
    fn ask(&mut self, question: &str) -> Result<Option<String>>;

    /// Informational line for the user.
    fn say(&mut self, message: &str);
}

/// `[y/N]` question; only y/yes (any case) confirms.
pub fn confirm(prompt: &mut dyn Prompt, question: &str) -> Result<bool> {
    let answer = prompt.ask(&format!("{} [y/N]", question))?;
    Ok(matches!(
        answer.as_deref().map(|a| a.trim().to_lowercase()).as_deref(),
        Some("y") | Some("yes")
    ))
}

/// Prompt on stderr, read from stdin.
#[derive(Debug, Default)]
pub struct StdioPrompt;

impl Prompt for StdioPrompt {
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        eprint!("{} ", question);
        io::stderr().flush()?;
        let mut line = String::new();
        let n = io::stdin().lock().read_line(&mut line)?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn say(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Replays canned answers; records everything shown.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: std::collections::VecDeque<String>,
    pub transcript: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|l| l.contains(needle))
    }
}

#[cfg(test)]
impl Prompt for ScriptedPrompt {
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        self.transcript.push(question.to_string());
        Ok(self.answers.pop_front())
    }

    fn say(&mut self, message: &str) {
        self.transcript.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_accepts_only_yes() {
        let mut p = ScriptedPrompt::new(["YES", " y ", "n", ""]);
        assert!(confirm(&mut p, "Delete?").unwrap());
        assert!(confirm(&mut p, "Delete?").unwrap());
        assert!(!confirm(&mut p, "Delete?").unwrap());
        assert!(!confirm(&mut p, "Delete?").unwrap());
        // EOF
        assert!(!confirm(&mut p, "Delete?").unwrap());
        assert!(p.saw("Delete? [y/N]"));
    }
}
