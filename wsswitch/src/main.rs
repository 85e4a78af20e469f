mod cli;

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};

use cli::{Cli, Commands};
use wsswitch_commands::workspace::{self, SaveOptions, TreeOptions};
use wsswitch_commands::{AppContext, ProcessLauncher, StdioPrompt};
use wsswitch_core::config::{EditorConfig, PathsConfig, ViewConfig};
use wsswitch_core::observability;
use wsswitch_core::tree::ListingMode;

fn main() -> Result<()> {
    observability::init_tracing();
    let cli = Cli::parse();

    let mut ctx = build_context(&cli);
    tracing::debug!(context = ?ctx, "Starting");
    let result = run(cli.command, &mut ctx);
    ctx.shutdown();
    result
}

fn build_context(cli: &Cli) -> AppContext {
    let paths = match cli.paths.as_deref() {
        Some(raw) => PathsConfig::from_raw(raw),
        None => PathsConfig::from_env(),
    };
    let editor = cli
        .editor
        .clone()
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| EditorConfig::from_env().command);
    let mode = ListingMode::from_tree_flag(ViewConfig::from_env().tree_view);
    AppContext::new(paths.roots, mode, Box::new(ProcessLauncher::new(editor)))
}

fn run(command: Commands, ctx: &mut AppContext) -> Result<()> {
    let mut prompt = StdioPrompt;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Save {
            name,
            root,
            folders,
            force,
            no_open,
        } => {
            let opts = SaveOptions {
                name,
                root,
                folders,
                force,
                open: !no_open,
            };
            workspace::cmd_save(ctx, opts, &mut prompt)?;
        }
        Commands::Switch { query, new_window } => {
            workspace::cmd_switch(ctx, query.as_deref(), new_window, &mut prompt)?;
        }
        Commands::Delete { query, force } => {
            workspace::cmd_delete(ctx, query.as_deref(), force, &mut prompt)?;
        }
        Commands::List { json } => {
            workspace::cmd_list(ctx, json, &mut out)?;
        }
        Commands::Tree { flat, json, depth } => {
            let opts = TreeOptions {
                mode: flat.then_some(ListingMode::Flat),
                json,
                depth: depth.map(|d| d as usize),
            };
            workspace::cmd_tree(ctx, &opts, &mut out)?;
        }
        Commands::Reload => {
            drop(out);
            workspace::cmd_reload(ctx)?;
            return Ok(());
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    #[test]
    fn save_collects_repeated_folders() {
        let cli = Cli::try_parse_from([
            "wsswitch", "save", "team/api", "-f", "/src/api", "--folder", "/src/lib", "--no-open",
        ])
        .expect("save should parse");
        match cli.command {
            Commands::Save {
                name,
                folders,
                no_open,
                force,
                ..
            } => {
                assert_eq!(name.as_deref(), Some("team/api"));
                assert_eq!(folders.len(), 2);
                assert!(no_open);
                assert!(!force);
            }
            _ => panic!("expected save command"),
        }
    }

    #[test]
    fn global_paths_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["wsswitch", "switch", "web", "-n", "--paths", "/ws"])
            .expect("switch should parse");
        assert_eq!(cli.paths.as_deref(), Some("/ws"));
        match cli.command {
            Commands::Switch { query, new_window } => {
                assert_eq!(query.as_deref(), Some("web"));
                assert!(new_window);
            }
            _ => panic!("expected switch command"),
        }
    }

    #[test]
    fn tree_depth_must_be_a_number() {
        let parsed = Cli::try_parse_from(["wsswitch", "tree", "--depth", "many"]);
        let err = parsed.err().expect("expected clap parse error");
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn tree_depth_zero_is_rejected() {
        let parsed = Cli::try_parse_from(["wsswitch", "tree", "--depth", "0"]);
        let err = parsed.err().expect("expected clap parse error");
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let cli = Cli::try_parse_from(["wsswitch", "tree", "--depth", "2"]).expect("tree should parse");
        assert!(matches!(cli.command, Commands::Tree { depth: Some(2), .. }));
    }

    #[test]
    fn global_flags_read_environment() {
        let cmd = Cli::command();
        let env_of = |id: &str| {
            cmd.get_arguments()
                .find(|a| a.get_id() == id)
                .and_then(|a| a.get_env())
                .map(|e| e.to_string_lossy().to_string())
        };
        assert_eq!(env_of("paths").as_deref(), Some("WSSWITCH_PATHS"));
        assert_eq!(env_of("editor").as_deref(), Some("WSSWITCH_EDITOR"));
    }

    #[test]
    fn missing_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["wsswitch"]).is_err());
    }

    #[test]
    fn cli_flags_override_config() {
        let cli = Cli::try_parse_from(["wsswitch", "--paths", "/ws/a", "--editor", "codium", "list"])
            .expect("list should parse");
        let ctx = build_context(&cli);
        assert_eq!(ctx.roots, vec![std::path::PathBuf::from("/ws/a")]);
        assert_eq!(ctx.launcher.describe(), "codium");
    }
}
