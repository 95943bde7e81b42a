//! # CLI Layer
//!
//! This module is **one possible host** for jotz, not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Uses `std::process::exit` (via `main.rs`)
//! - Handles argument parsing
//! - Sets up logging
//!
//! ## Structure
//!
//! - `run()`: parses arguments, sets up logging, dispatches
//! - `init_context()`: resolves the config directory and color choice
//! - `handle_*()`: per-command handlers
//!
//! The shell itself lives in [`super::shell`].

use super::render::{render_config, render_messages};
use super::setup::{Cli, Commands};
use super::shell::Shell;
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use jotz::api::{ConfigAction, JotzApi};
use jotz::config::JotzConfig;
use jotz::error::{JotzError, Result};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: JotzApi,
    config: JotzConfig,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Shell) | None => handle_shell(ctx),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(io::stderr)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => default_config_dir()?,
    };

    let config = JotzConfig::load(&config_dir)?;
    let mode = cli.color.unwrap_or(config.color);
    let use_color = mode.use_color(Term::stdout().features().colors_supported());
    tracing::debug!(config_dir = %config_dir.display(), %mode, "context ready");

    Ok(AppContext {
        api: JotzApi::new(config_dir),
        config,
        use_color,
    })
}

fn default_config_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "jotz", "jotz")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| JotzError::Config("could not determine a config directory".into()))
}

fn handle_shell(ctx: AppContext) -> Result<()> {
    let interactive = io::stdin().is_terminal();
    let mut shell = Shell::new(ctx.api, ctx.config, ctx.use_color).interactive(interactive);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    shell.run(stdin.lock(), &mut stdout.lock(), &mut stderr.lock())?;
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = action == ConfigAction::ShowAll;

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config, ctx.use_color));
        }
    }
    print!("{}", render_messages(&result.messages, ctx.use_color));
    Ok(())
}
