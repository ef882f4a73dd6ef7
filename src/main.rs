//! # Tasklist - interactive task list CLI
//!
//! Keep a short list of tasks, each with several lines of free text, a priority
//! and a due date/time, and review them in a bordered terminal table.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start an interactive session on ./tasklist.json
//! tasklist
//!
//! # Print the table once, with letter markers instead of colours
//! tasklist print --color never
//!
//! # Use a different task file
//! tasklist --file ~/notes/tasks.json
//! ```
//!
//! ## Session Actions
//!
//! - `add` - priority (C, H, N, L), date, time, then task lines ending with a blank line
//! - `print` - show the task table
//! - `edit` - pick a task by number and replace one field
//! - `delete` - pick a task by number and remove it
//! - `end` - save and exit
//!
//! ## Table Markers
//!
//! The `P` column shows priority: critical (red), high (yellow), normal (green),
//! low (blue). The `D` column shows the due tag against today's UTC date: in time
//! (green), today (yellow), overdue (red). With `--color never` the letters
//! `C/H/N/L` and `I/T/O` are shown instead.
//!
//! Set `TASKLIST_LOG=debug` to write diagnostic logs to stderr.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod cmd;
pub mod db;
pub mod due;
pub mod error;
pub mod fields;
pub mod session;
pub mod table;
pub mod task;
pub mod wrap;

use cli::Cli;
use cmd::*;

fn main() -> Result<()> {
    if let Ok(directive) = std::env::var("TASKLIST_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(directive))
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();
    let style = marker_style(cli.color);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => cmd_run(&cli.file, style),
        Commands::Print => cmd_print(&cli.file, style),
        Commands::Completions { shell } => {
            cmd_completions(shell);
            Ok(())
        }
    }
}
