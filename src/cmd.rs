//! Command implementations for the CLI interface.
//!
//! Each subcommand loads the task file, does its work and reports through
//! stdout; failures are returned to `main` with context attached.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{CommandFactory, Subcommand};
use clap_complete::{generate, Shell};
use crossterm::tty::IsTty;
use tracing::info;

use crate::cli::Cli;
use crate::db::TaskStore;
use crate::due::today_utc;
use crate::fields::{ColorMode, MarkerStyle};
use crate::session::Session;
use crate::table::TableRenderer;

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive session (default).
    Run,

    /// Print the task table once and exit.
    Print,

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Resolve the marker style for the current stdout.
pub fn marker_style(mode: ColorMode) -> MarkerStyle {
    let colour = match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_tty(),
    };
    if colour {
        MarkerStyle::Color
    } else {
        MarkerStyle::Letter
    }
}

/// Run the interactive session on stdin/stdout, saving on exit.
pub fn cmd_run(file: &Path, style: MarkerStyle) -> Result<()> {
    let mut store = TaskStore::load(file).context("Failed to load task list")?;
    info!(path = %file.display(), count = store.len(), "starting session");
    let mut session = Session::new(
        &mut store,
        file,
        TableRenderer::new(style),
        io::stdin().lock(),
        io::stdout().lock(),
    );
    session.run().context("Session failed")?;
    Ok(())
}

/// Render the stored tasks once.
pub fn cmd_print(file: &Path, style: MarkerStyle) -> Result<()> {
    let store = TaskStore::load(file).context("Failed to load task list")?;
    if store.is_empty() {
        println!("No tasks have been input");
        return Ok(());
    }
    TableRenderer::new(style)
        .print_to(&mut io::stdout().lock(), store.list(), today_utc())
        .context("Failed to print task table")
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "tasklist", &mut io::stdout());
}
