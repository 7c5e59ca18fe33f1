//! # History Clear Handler
//!
//! File: cli/src/commands/history/clear.rs
//! Author: Christi Mahu
//!
//! Overwrites the history file with an empty JSON array. The file is created
//! if it does not exist yet.
//!
use crate::bot::SessionStore;
use crate::core::error::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Clear the saved chat history")]
pub struct ClearArgs {
    /// History file to clear (defaults to the configured one).
    #[arg(long)]
    file: Option<PathBuf>,
}

pub async fn handle_clear(args: ClearArgs) -> Result<()> {
    let path = super::resolve_history_path(args.file)?;
    info!("Clearing history at {}", path.display());
    SessionStore::new().save(&path)?;
    println!("Cleared history at {}.", path.display());
    Ok(())
}
