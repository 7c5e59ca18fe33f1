//! # Supportbot Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Entry point for the supportbot CLI, a customer-support chat front end with
//! a rule-based responder and an AI-backed one. This file:
//! - Parses command-line arguments using Clap
//! - Sets up logging based on verbosity flags
//! - Routes execution to the command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Chat with the rule-based bot
//! supportbot chat
//!
//! # Chat with the AI bot, logging at debug level
//! supportbot -vv chat --bot gpt4 --api-key "$KEY"
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod bot; // Responders, factory and session store
mod commands; // Command handlers (chat, history, config)
mod common; // Shared utilities (fs, ui)
mod core; // Core infrastructure (errors, config)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "supportbot",
    about = "Customer-support chat with keyword and AI responders",
    long_about = "Chat with a rule-based customer support bot or an AI-backed one.\n\
                  Every session is recorded to a JSON history file.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    #[command(alias = "h")]
    History(commands::history::HistoryArgs),
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Chat(args) => commands::chat::handle_chat(args).await,
        Commands::History(args) => commands::history::handle_history(args).await,
        Commands::Config(args) => commands::config::handle_config(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
