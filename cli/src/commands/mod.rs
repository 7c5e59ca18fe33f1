//! # Supportbot Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Each top-level command group defines its own clap arguments and a
//! `handle_*` function that `main.rs` routes to.
//!
//! - `chat`: interactive support chat
//! - `history`: inspect or clear the saved session history
//! - `config`: show or initialise configuration
//!

/// Interactive chat session (`supportbot chat`).
pub mod chat;
/// Command group for configuration files. Includes `show` and `init`.
pub mod config;
/// Command group for the saved session history. Includes `show` and `clear`.
pub mod history;
