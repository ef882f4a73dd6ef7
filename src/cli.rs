use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;
use crate::fields::ColorMode;

/// Interactive, file-backed task list.
/// Storage defaults to ./tasklist.json or a path passed via --file.
#[derive(Parser)]
#[command(name = "tasklist", version, about = "Prioritised task list with due dates")]
pub struct Cli {
    /// Path to the JSON task file.
    #[arg(long, global = true, env = "TASKLIST_FILE", default_value = "tasklist.json")]
    pub file: PathBuf,

    /// Draw priority and due markers as coloured cells or as letters.
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
