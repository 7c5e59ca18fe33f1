//! # Supportbot History Command Group
//!
//! File: cli/src/commands/history/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Inspect or reset the saved session history without starting a chat.
//!
//! ```bash
//! # Print the configured history file
//! supportbot history show
//!
//! # Empty a specific history file
//! supportbot history clear --file /tmp/session.json
//! ```
//!
use crate::core::{config, error::Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod clear;
mod show;

/// Top-level arguments for the 'history' command group.
#[derive(Parser, Debug)]
pub struct HistoryArgs {
    #[command(subcommand)]
    command: HistoryCommand,
}

#[derive(Subcommand, Debug)]
enum HistoryCommand {
    /// Print the saved turns
    Show(show::ShowArgs),
    /// Replace the history file with an empty log
    Clear(clear::ClearArgs),
}

pub async fn handle_history(args: HistoryArgs) -> Result<()> {
    match args.command {
        HistoryCommand::Show(args) => show::handle_show(args).await,
        HistoryCommand::Clear(args) => clear::handle_clear(args).await,
    }
}

/// The explicit `--file`, or the configured history file.
fn resolve_history_path(file: Option<PathBuf>) -> Result<PathBuf> {
    match file {
        Some(path) => Ok(path),
        None => Ok(config::load_config()?.session.history_path()),
    }
}
