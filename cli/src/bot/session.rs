//! # Session Store
//!
//! File: cli/src/bot/session.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `SessionStore` is the ordered log of every `(message, response)` turn in a
//! chat session. One store is created per process by the `chat` command and
//! handed to the chat loop; nothing about it is global, so tests build as
//! many independent stores as they like.
//!
//! Turns are only ever appended. There is no deduplication or compaction, so
//! the log order is the order in which turns happened.
//!
//! ## File Format
//!
//! `save` writes a pretty-printed JSON array, replacing the file:
//!
//! ```json
//! [
//!     {
//!         "message": "hello",
//!         "response": "Hello! How can I assist you with your order today?"
//!     }
//! ]
//! ```
//!
//! `load` replaces the in-memory log with the file's contents. A missing file
//! is reported as `SupportError::HistoryNotFound` and leaves the log as it was.
//!
use crate::common::fs::io;
use crate::core::error::{Result, SupportError};
use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// One user message and the reply it received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub message: String,
    pub response: String,
}

#[derive(Debug, Default, Clone)]
pub struct SessionStore {
    turns: Vec<Turn>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, message: impl Into<String>, response: impl Into<String>) {
        self.turns.push(Turn {
            message: message.into(),
            response: response.into(),
        });
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Writes the whole log to `path` as pretty-printed JSON, overwriting it.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = to_pretty_json(&self.turns)?;
        io::write_string_to_file(path, &json)
            .with_context(|| format!("Failed to save chat history to {}", path.display()))?;
        info!("Saved {} turns to {}", self.turns.len(), path.display());
        Ok(())
    }

    /// Replaces the log with the turns stored at `path` and returns how many were loaded.
    pub fn load(&mut self, path: &Path) -> std::result::Result<usize, SupportError> {
        let turns = read_turns(path)?.ok_or_else(|| SupportError::HistoryNotFound {
            path: path.to_path_buf(),
        })?;
        self.turns = turns;
        info!("Loaded {} turns from {}", self.turns.len(), path.display());
        Ok(self.turns.len())
    }
}

/// Reads a history file without touching any store. `Ok(None)` when the file is absent.
pub fn read_turns(path: &Path) -> std::result::Result<Option<Vec<Turn>>, SupportError> {
    let content = io::read_optional_to_string(path)
        .map_err(|e| SupportError::FileSystem(format!("{:#}", e)))?;
    match content {
        Some(json) => {
            let turns: Vec<Turn> = serde_json::from_str(&json)?;
            debug!("Parsed {} turns from {}", turns.len(), path.display());
            Ok(Some(turns))
        }
        None => Ok(None),
    }
}

/// JSON with four-space indentation.
pub fn to_pretty_json(turns: &[Turn]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    turns
        .serialize(&mut serializer)
        .map_err(|source| SupportError::Serialization { source })?;
    Ok(String::from_utf8(buf)?)
}
