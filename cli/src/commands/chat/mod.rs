//! # Supportbot Chat Command
//!
//! File: cli/src/commands/chat/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `supportbot chat`, the interactive session:
//! 1. Load configuration and create the responder through `ChatbotFactory`
//! 2. Optionally reload the previous session history
//! 3. Run the `ChatLoop` against stdin/stdout
//! 4. Save the full history when the loop ends
//!
//! A bad chatbot type or a missing API key aborts before the loop starts.
//!
//! ## Examples
//!
//! ```bash
//! # Rule-based customer support bot (default)
//! supportbot chat
//!
//! # AI-backed bot, key taken from the environment
//! SUPPORTBOT_API_KEY=... supportbot chat --bot gpt4
//!
//! # Start fresh and keep history somewhere else
//! supportbot chat --no-load --history-file /tmp/session.json
//! ```
//!
use crate::bot::{ChatbotFactory, Responder, SessionStore};
use crate::common::ui;
use crate::core::{config, error::Result, error::SupportError};
use anyhow::Context;
use clap::Parser;
use std::fmt;
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};

pub mod chat_loop;

pub use chat_loop::ChatLoop;

/// # Chat Arguments (`ChatArgs`)
#[derive(Parser)]
#[command(about = "Start an interactive support chat")]
pub struct ChatArgs {
    /// Chatbot type: `customer_support` or `gpt4`.
    #[arg(long, short, default_value = "customer_support")]
    pub bot: String,

    /// API key for the `gpt4` bot.
    #[arg(long, env = "SUPPORTBOT_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// History file to load from and save to (overrides the configured one).
    #[arg(long)]
    pub history_file: Option<PathBuf>,

    /// Do not load the previous history before starting.
    #[arg(long)]
    pub no_load: bool,
}

impl fmt::Debug for ChatArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatArgs")
            .field("bot", &self.bot)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("history_file", &self.history_file)
            .field("no_load", &self.no_load)
            .finish()
    }
}

/// # Handle Chat Command (`handle_chat`)
pub async fn handle_chat(args: ChatArgs) -> Result<()> {
    info!("Handling chat command with args: {:?}", args);
    let cfg = config::load_config()?;
    let history_path = args
        .history_file
        .clone()
        .unwrap_or_else(|| cfg.session.history_path());

    let factory = ChatbotFactory::new(cfg.remote.clone());
    let responder = factory
        .create(&args.bot, args.api_key.as_deref())
        .context("Error creating chatbot")?;
    if let Responder::Remote(client) = &responder {
        info!("API URL being used: {}", client.endpoint());
    }

    let mut store = SessionStore::new();
    if cfg.session.load_on_start && !args.no_load {
        load_previous_history(&mut store, &history_path)?;
    }

    println!("{}", ui::welcome_banner(responder.kind().as_str()));

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let outcome = ChatLoop::new(responder, &mut store)
        .run(&mut input, &mut output)
        .await;

    // Turns recorded before an input failure are still written out.
    store.save(&history_path)?;
    let turns = outcome?;
    debug!(
        "Chat ended after {} new turns ({} in the log)",
        turns,
        store.len()
    );
    Ok(())
}

fn load_previous_history(store: &mut SessionStore, path: &std::path::Path) -> Result<()> {
    match store.load(path) {
        Ok(count) => {
            println!("Loaded {} previous turns from {}.", count, path.display());
            Ok(())
        }
        Err(e) if e.is_recoverable() => {
            info!("{}", e);
            println!("No history found.");
            Ok(())
        }
        Err(e @ SupportError::Serialization { .. }) => Err(anyhow::Error::new(e).context(
            format!("History file {} is not valid JSON", path.display()),
        )),
        Err(e) => Err(e.into()),
    }
}
