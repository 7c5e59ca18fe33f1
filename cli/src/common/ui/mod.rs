//! # Supportbot UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Small terminal helpers for the interactive chat. They are generic over
//! `BufRead`/`Write` so the chat loop can run against stdin/stdout in
//! production and in-memory buffers in tests.
//!
//! ```rust
//! let stdin = std::io::stdin();
//! let mut input = stdin.lock();
//! let mut output = std::io::stdout();
//! if let Some(line) = ui::read_prompted_line(&mut input, &mut output, "You: ")? {
//!     println!("got {}", line);
//! }
//! ```
//!
use crate::core::error::Result;
use anyhow::Context;
use std::io::{BufRead, Write};

/// Writes `prompt`, flushes, and reads one line of input.
///
/// Returns `Ok(None)` at end of input. The trailing line ending is removed.
pub fn read_prompted_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{}", prompt).context("Failed to write prompt")?;
    output.flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    if read == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

/// Turns a snake_case tag into Title Case words: `customer_support` -> `Customer Support`.
pub fn title_case(tag: &str) -> String {
    tag.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Greeting printed once when a chat session starts.
pub fn welcome_banner(kind: &str) -> String {
    format!(
        "Welcome to the Chatbot ({})! Type 'exit' to end the chat.",
        title_case(kind)
    )
}
