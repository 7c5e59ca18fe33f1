//! # Supportbot Chat Components (`bot`)
//!
//! File: cli/src/bot/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Everything that produces or records a reply:
//!
//! - **`keyword`**: the rule-based `KeywordResponder`.
//! - **`remote`**: the AI-backed `RemoteChatClient` and its `ChatTransport` seam.
//! - **`factory`**: `ChatbotFactory`, which picks a responder from a type tag.
//! - **`session`**: `SessionStore`, the ordered log of turns and its JSON file.
//!
//! `Responder` is the capability the chat loop talks to. It is an enum over
//! the two implementations rather than a trait object, since the set is closed.
//!
use std::fmt;
use std::str::FromStr;

pub mod factory;
pub mod keyword;
pub mod remote;
pub mod session;

pub use factory::{BotKind, ChatbotFactory};
pub use keyword::KeywordResponder;
pub use remote::RemoteChatClient;
pub use session::{SessionStore, Turn};

/// Short-lived tag carried from one turn to the next to disambiguate follow-ups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    /// The previous reply offered help with a return; "yes"/"no" answer that offer.
    ReturnProcess,
}

impl Context {
    pub fn as_str(&self) -> &'static str {
        match self {
            Context::ReturnProcess => "return_process",
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Context {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "return_process" => Ok(Context::ReturnProcess),
            other => Err(format!("unknown context '{}'", other)),
        }
    }
}

/// A chat reply generator.
pub enum Responder {
    Keyword(KeywordResponder),
    Remote(RemoteChatClient),
}

impl Responder {
    pub fn kind(&self) -> BotKind {
        match self {
            Responder::Keyword(_) => BotKind::CustomerSupport,
            Responder::Remote(_) => BotKind::Gpt4,
        }
    }

    /// Produces the reply for `message`. Never fails; the remote variant
    /// degrades to a canned apology on errors.
    pub async fn respond(&mut self, message: &str, context: Option<Context>) -> String {
        match self {
            Responder::Keyword(bot) => bot.respond(message, context).to_string(),
            Responder::Remote(client) => client.respond(message, context).await,
        }
    }

    /// Context for the next turn. Only the keyword responder tracks one.
    pub fn next_context(&self, response: &str) -> Option<Context> {
        match self {
            Responder::Keyword(_) => keyword::context_after(response),
            Responder::Remote(_) => None,
        }
    }
}
