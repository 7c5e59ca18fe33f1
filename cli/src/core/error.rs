//! # Supportbot Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout supportbot. Command
//! handlers work with `anyhow::Result` for easy context; the chat components
//! use `SupportError` directly where a caller needs to tell failures apart.
//!
//! ## Architecture
//!
//! - `SupportError`: a `thiserror` enum covering every failure class
//! - `Result<T>`: a type alias for `anyhow::Result<T>`
//!
//! The failure classes and how they are treated:
//! - `Config`: bad chatbot type, missing credentials or invalid settings. Fatal
//!   to chatbot creation and surfaced to the user.
//! - `Transport`: the HTTP call to the completion endpoint failed. Recovered
//!   inside the remote client with a canned reply.
//! - `MalformedResponse`: the endpoint answered but the body lacks the expected
//!   fields. Recovered the same way as `Transport`.
//! - `HistoryNotFound`: the session history file does not exist. Recovered by
//!   leaving the in-memory log unchanged.
//!
//! ## Examples
//!
//! ```rust
//! // Surface a configuration problem
//! return Err(SupportError::Config("RapidAPI key is required for GPT4Chatbot!".into()))?;
//!
//! // Check what kind of failure came back from the transport
//! match transport.send(&request).await {
//!     Err(SupportError::Transport(msg)) => warn!("network trouble: {}", msg),
//!     Err(other) => warn!("other failure: {}", other),
//!     Ok(body) => handle(body),
//! }
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for supportbot.
#[derive(Error, Debug)]
pub enum SupportError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("History file '{}' not found.", .path.display())]
    HistoryNotFound { path: PathBuf },

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("JSON serialization failed: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl SupportError {
    /// Whether the session can carry on after this error. The remote client
    /// turns transport and malformed-response failures into a fallback reply,
    /// and the chat command treats a missing history file as an empty one.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SupportError::Transport(_)
                | SupportError::MalformedResponse(_)
                | SupportError::HistoryNotFound { .. }
        )
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
