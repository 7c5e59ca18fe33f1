//! # Chatbot Factory
//!
//! File: cli/src/bot/factory.rs
//! Author: Christi Mahu
//!
//! Selects a `Responder` from a type tag:
//!
//! | tag                | responder           | needs credentials |
//! |--------------------|---------------------|-------------------|
//! | `customer_support` | `KeywordResponder`  | no                |
//! | `gpt4`             | `RemoteChatClient`  | yes               |
//!
//! Any other tag, or `gpt4` without a key, is a `SupportError::Config`.
//!
use crate::bot::remote::RemoteSettings;
use crate::bot::{KeywordResponder, RemoteChatClient, Responder};
use crate::core::config::RemoteConfig;
use crate::core::error::SupportError;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotKind {
    CustomerSupport,
    Gpt4,
}

impl BotKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BotKind::CustomerSupport => "customer_support",
            BotKind::Gpt4 => "gpt4",
        }
    }
}

impl fmt::Display for BotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BotKind {
    type Err = SupportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer_support" => Ok(BotKind::CustomerSupport),
            "gpt4" => Ok(BotKind::Gpt4),
            _ => Err(SupportError::Config("Unknown chatbot type!".to_string())),
        }
    }
}

/// Builds responders. Holds the `[remote]` settings used for `gpt4`.
#[derive(Debug, Clone, Default)]
pub struct ChatbotFactory {
    remote: RemoteConfig,
}

impl ChatbotFactory {
    pub fn new(remote: RemoteConfig) -> Self {
        Self { remote }
    }

    /// Creates the responder named by `kind`.
    pub fn create(&self, kind: &str, credentials: Option<&str>) -> Result<Responder, SupportError> {
        let kind: BotKind = kind.parse()?;
        debug!("Creating chatbot of type {}", kind);
        match kind {
            BotKind::CustomerSupport => Ok(Responder::Keyword(KeywordResponder::new())),
            BotKind::Gpt4 => {
                let key = credentials
                    .map(str::trim)
                    .filter(|key| !key.is_empty())
                    .ok_or_else(|| {
                        SupportError::Config(
                            "RapidAPI key is required for GPT4Chatbot!".to_string(),
                        )
                    })?;
                let settings = RemoteSettings::from_config(&self.remote, key)?;
                Ok(Responder::Remote(RemoteChatClient::new(settings)?))
            }
        }
    }
}
