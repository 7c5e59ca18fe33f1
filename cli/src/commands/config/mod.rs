//! # Supportbot Config Command Group
//!
//! File: cli/src/commands/config/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! - `config show`: prints the effective configuration (defaults merged with
//!   the user and project files) as TOML.
//! - `config init`: writes a config file populated with the defaults, by
//!   default into the user config directory. An existing file is only
//!   replaced with `--force`.
//!
//! ```bash
//! supportbot config init
//! supportbot config init --path ./.supportbot.toml --force
//! supportbot config show
//! ```
//!
use crate::common::fs::io;
use crate::core::config::{self, Config};
use crate::core::error::Result;
use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Write a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
struct InitArgs {
    /// Where to write the file (defaults to the user config directory).
    #[arg(long)]
    path: Option<PathBuf>,

    /// Replace an existing file.
    #[arg(long)]
    force: bool,
}

pub async fn handle_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let cfg = config::load_config()?;
            print!("{}", render_config(&cfg)?);
            Ok(())
        }
        ConfigCommand::Init(init) => {
            let path = match init.path {
                Some(path) => path,
                None => match config::user_config_path() {
                    Some(path) => path,
                    None => bail!("Could not determine standard user config directory."),
                },
            };
            write_default_config(&path, init.force)?;
            println!("Wrote default configuration to {}.", path.display());
            Ok(())
        }
    }
}

fn render_config(cfg: &Config) -> Result<String> {
    toml::to_string_pretty(cfg).context("Failed to render configuration as TOML")
}

fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Configuration file {} already exists. Use --force to overwrite it.",
            path.display()
        );
    }
    let content = render_config(&Config::default())?;
    io::write_string_to_file(path, &content)?;
    info!("Wrote default configuration to {}", path.display());
    Ok(())
}
