//! # History Show Handler
//!
//! File: cli/src/commands/history/show.rs
//! Author: Christi Mahu
//!
//! Prints every saved turn, numbered from 1, in the order they happened.
//!
use crate::bot::{SessionStore, Turn};
use crate::core::error::{Result, SupportError};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Print the saved chat history")]
pub struct ShowArgs {
    /// History file to read (defaults to the configured one).
    #[arg(long)]
    file: Option<PathBuf>,
}

pub async fn handle_show(args: ShowArgs) -> Result<()> {
    let path = super::resolve_history_path(args.file)?;
    info!("Showing history from {}", path.display());

    let mut store = SessionStore::new();
    match store.load(&path) {
        Ok(_) if store.is_empty() => println!("History is empty."),
        Ok(_) => print!("{}", format_turns(store.turns())),
        Err(SupportError::HistoryNotFound { .. }) => println!("No history found."),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn format_turns(turns: &[Turn]) -> String {
    turns
        .iter()
        .enumerate()
        .map(|(i, turn)| {
            format!(
                "[{}] You: {}\n    Bot: {}\n",
                i + 1,
                turn.message,
                turn.response
            )
        })
        .collect()
}
