//! Editor launching.
//!
//! The editor command is a program plus optional arguments (`code`, `codium`,
//! `code --profile work`). The window flag and the descriptor path are appended.

use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("No editor command configured")]
    EmptyCommand,

    #[error("Failed to launch editor '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Editor '{program}' exited with {status}")]
    Exit { program: String, status: String },
}

/// Opens a descriptor in the editor.
pub trait EditorLauncher {
    fn open(&self, workspace: &Path, new_window: bool) -> Result<(), LaunchError>;

    /// Editor command, for logs and the audit trail.
    fn describe(&self) -> String;
}

/// Runs the editor as a child process and waits for it.
#[derive(Debug, Clone)]
pub struct ProcessLauncher {
    command: String,
}

impl ProcessLauncher {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Program and arguments for opening `workspace`.
    pub fn command_line(
        &self,
        workspace: &Path,
        new_window: bool,
    ) -> Result<(String, Vec<String>), LaunchError> {
        let mut parts = self.command.split_whitespace();
        let program = parts.next().ok_or(LaunchError::EmptyCommand)?.to_string();
        let mut args: Vec<String> = parts.map(ToString::to_string).collect();
        args.push(if new_window {
            "--new-window".to_string()
        } else {
            "--reuse-window".to_string()
        });
        args.push(workspace.to_string_lossy().to_string());
        Ok((program, args))
    }
}

impl EditorLauncher for ProcessLauncher {
    fn open(&self, workspace: &Path, new_window: bool) -> Result<(), LaunchError> {
        let (program, args) = self.command_line(workspace, new_window)?;
        tracing::debug!(program = %program, args = ?args, "Launching editor");
        let status = Command::new(&program)
            .args(&args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| LaunchError::Spawn {
                program: program.clone(),
                source,
            })?;
        if !status.success() {
            return Err(LaunchError::Exit {
                program,
                status: status.to_string(),
            });
        }
        Ok(())
    }

    fn describe(&self) -> String {
        self.command.clone()
    }
}
