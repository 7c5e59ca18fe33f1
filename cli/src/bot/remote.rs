//! # Remote Chat Client
//!
//! File: cli/src/bot/remote.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The AI-backed responder. Every user message is appended to the
//! conversation, the whole conversation is posted to an OpenAI-style chat
//! completions endpoint, and the assistant's reply is appended and returned.
//!
//! ## Architecture
//!
//! - `RemoteSettings`: endpoint, credentials and generation parameters, fixed
//!   and validated at construction.
//! - `ChatTransport`: the single I/O seam. `HttpTransport` is the real
//!   implementation on top of `reqwest`; tests substitute their own.
//! - `RemoteChatClient`: owns the conversation and turns every failure into a
//!   canned apology, so `respond` never returns an error.
//!
//! ## Wire Format
//!
//! Request body:
//!
//! ```json
//! {"messages": [{"role": "user", "content": "hello"}], "model": "gpt-4o", "max_tokens": 1000, "temperature": 0.7}
//! ```
//!
//! The reply is read from `choices[0].message.content`.
//!
use crate::bot::Context;
use crate::core::config::RemoteConfig;
use crate::core::error::SupportError;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Reply used when the endpoint could not be reached or answered with an HTTP error.
pub const TRANSPORT_FAILURE_RESPONSE: &str = "Sorry, there was a problem communicating with the AI.";
/// Reply used when the endpoint answered with a body we could not interpret.
pub const MALFORMED_RESPONSE_RESPONSE: &str = "Sorry, I encountered an issue with the AI.";

const RAPIDAPI_HOST_HEADER: &str = "x-rapidapi-host";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry of the conversation sent to the endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Request body for the chat completions endpoint.
#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub messages: &'a [ChatMessage],
    pub model: &'a str,
    pub max_tokens: u32,
    pub temperature: f64,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Pulls `choices[0].message.content` out of a response body.
pub fn extract_reply(body: serde_json::Value) -> Result<String, SupportError> {
    let parsed: CompletionResponse = serde_json::from_value(body)
        .map_err(|e| SupportError::MalformedResponse(format!("unexpected body shape: {}", e)))?;
    let choice = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| SupportError::MalformedResponse("response has no choices".to_string()))?;
    choice.message.content.ok_or_else(|| {
        SupportError::MalformedResponse("first choice has no message content".to_string())
    })
}

/// Everything needed to talk to the completion endpoint.
///
/// Only `from_config` builds one, so the authentication headers are always
/// valid HTTP and the generation parameters have passed `RemoteConfig::validate`.
#[derive(Clone)]
pub struct RemoteSettings {
    pub endpoint: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub timeout: Duration,
    /// 0 keeps the whole conversation.
    pub max_history_messages: usize,
    auth_headers: HeaderMap,
}

impl fmt::Debug for RemoteSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteSettings")
            .field("endpoint", &self.endpoint)
            .field("auth_headers", &self.auth_headers.keys().collect::<Vec<_>>())
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout", &self.timeout)
            .field("max_history_messages", &self.max_history_messages)
            .finish()
    }
}

impl RemoteSettings {
    /// Combines the `[remote]` config section with an API key and validates the result.
    pub fn from_config(config: &RemoteConfig, api_key: &str) -> Result<Self, SupportError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(SupportError::Config(
                "RapidAPI key is required for GPT4Chatbot!".to_string(),
            ));
        }
        config.validate()?;

        let mut key_value = HeaderValue::from_str(api_key).map_err(|_| {
            SupportError::Config(
                "API key contains characters that cannot be sent in an HTTP header.".to_string(),
            )
        })?;
        key_value.set_sensitive(true);
        let mut auth_headers = HeaderMap::new();
        auth_headers.insert(config.api_key_header_name()?, key_value);
        if let Some(host) = config.api_host_header_value()? {
            auth_headers.insert(HeaderName::from_static(RAPIDAPI_HOST_HEADER), host);
        }

        Ok(Self {
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            timeout: Duration::from_secs(config.timeout_secs),
            max_history_messages: config.max_history_messages,
            auth_headers,
        })
    }
}

/// Sends one completion request and returns the parsed JSON body.
///
/// Implementations report network and HTTP status failures as
/// `SupportError::Transport` and undecodable bodies as
/// `SupportError::MalformedResponse`.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(&self, request: &CompletionRequest<'_>)
        -> Result<serde_json::Value, SupportError>;
}

/// `ChatTransport` over HTTPS using `reqwest`.
pub struct HttpTransport {
    client: Client,
    settings: RemoteSettings,
}

impl HttpTransport {
    pub fn new(settings: RemoteSettings) -> Result<Self, SupportError> {
        let client = Client::builder()
            .default_headers(settings.auth_headers.clone())
            .timeout(settings.timeout)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| SupportError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, settings })
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn send(
        &self,
        request: &CompletionRequest<'_>,
    ) -> Result<serde_json::Value, SupportError> {
        let settings = &self.settings;
        let builder = self
            .client
            .post(&settings.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(request);

        debug!(
            "POST {} ({} messages, model {})",
            settings.endpoint,
            request.messages.len(),
            request.model
        );
        let response = builder
            .send()
            .await
            .map_err(|e| SupportError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SupportError::Transport(format!("failed to read body: {}", e)))?;
        if !status.is_success() {
            return Err(SupportError::Transport(format!(
                "endpoint returned HTTP {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }
        serde_json::from_str(&body)
            .map_err(|e| SupportError::MalformedResponse(format!("body is not JSON: {}", e)))
    }
}

/// Responder backed by the remote completion endpoint.
pub struct RemoteChatClient {
    settings: RemoteSettings,
    transport: Box<dyn ChatTransport>,
    history: Vec<ChatMessage>,
}

impl RemoteChatClient {
    /// Builds a client that talks HTTPS to `settings.endpoint`.
    pub fn new(settings: RemoteSettings) -> Result<Self, SupportError> {
        let transport = HttpTransport::new(settings.clone())?;
        info!(
            "Remote chat client ready (endpoint: {}, model: {})",
            settings.endpoint, settings.model
        );
        Ok(Self::with_transport(settings, Box::new(transport)))
    }

    pub fn with_transport(settings: RemoteSettings, transport: Box<dyn ChatTransport>) -> Self {
        Self {
            settings,
            transport,
            history: Vec::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.settings.endpoint
    }

    /// Conversation so far, oldest first.
    #[cfg(test)]
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Sends `message` with the conversation so far. Never fails: problems
    /// are logged and answered with a fixed apology. The context tag is not
    /// used by this responder.
    pub async fn respond(&mut self, message: &str, _context: Option<Context>) -> String {
        self.push(ChatMessage::user(message));

        match self.request_reply().await {
            Ok(reply) => {
                self.push(ChatMessage::assistant(reply.clone()));
                reply
            }
            Err(SupportError::MalformedResponse(detail)) => {
                warn!("Unexpected chat API response: {}", detail);
                MALFORMED_RESPONSE_RESPONSE.to_string()
            }
            Err(e) => {
                error!("Error calling chat API: {}", e);
                TRANSPORT_FAILURE_RESPONSE.to_string()
            }
        }
    }

    async fn request_reply(&self) -> Result<String, SupportError> {
        let request = CompletionRequest {
            messages: &self.history,
            model: &self.settings.model,
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };
        let body = self.transport.send(&request).await?;
        extract_reply(body)
    }

    fn push(&mut self, message: ChatMessage) {
        self.history.push(message);
        let cap = self.settings.max_history_messages;
        if cap > 0 && self.history.len() > cap {
            let excess = self.history.len() - cap;
            self.history.drain(..excess);
            debug!("Dropped {} old messages from the conversation", excess);
        }
    }
}
