//! # Supportbot Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module loads, merges and validates the supportbot configuration. Two
//! sections exist:
//! - `[remote]`: where and how the remote chat completion endpoint is called
//! - `[session]`: where the session history file lives and whether it is
//!   reloaded at startup
//!
//! Credentials are deliberately absent. The API key is supplied at startup
//! through `--api-key` or `SUPPORTBOT_API_KEY`.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.supportbot.toml` in the current directory or ancestors
//! 2. User-specific `<config dir>/supportbot/config.toml`
//! 3. Default values defined in the code
//!
//! The project search stops at the first directory containing `.git`.
//!
//! ## Examples
//!
//! ```toml
//! [remote]
//! model = "gpt-4o-mini"
//! temperature = 0.2
//! max_history_messages = 40
//!
//! [session]
//! history_file = "~/.local/share/supportbot/history.json"
//! ```
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let history_path = cfg.session.history_path();
//! ```
//!
use crate::core::error::{Result, SupportError};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use reqwest::header::{HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Settings for the remote chat completion endpoint (`--bot gpt4`).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RemoteConfig {
    /// Full URL of the chat completions endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Value for the `X-RapidAPI-Host` header. When unset it is taken from a
    /// `*.rapidapi.com` endpoint; an empty string sends no host header at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,
    /// Header carrying the API key.
    #[serde(default = "default_api_key_header")]
    pub api_key_header: String,
    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Upper bound on generated tokens per reply.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Sampling temperature, 0.0 to 2.0.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Maximum conversation messages kept for context. 0 keeps everything.
    #[serde(default)]
    pub max_history_messages: usize,
}

/// Settings for the session history log.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Path of the JSON history file (can use ~). Will be expanded.
    #[serde(default = "default_history_file")]
    pub history_file: String,
    /// Load the existing history file before the chat starts.
    #[serde(default = "default_load_on_start")]
    pub load_on_start: bool,
}

impl SessionConfig {
    pub fn history_path(&self) -> PathBuf {
        PathBuf::from(&self.history_file)
    }
}

impl RemoteConfig {
    /// Host sent as `X-RapidAPI-Host`, if any.
    pub fn effective_api_host(&self) -> Option<String> {
        match self.api_host.as_deref().map(str::trim) {
            Some("") => None,
            Some(host) => Some(host.to_string()),
            None => reqwest::Url::parse(&self.endpoint)
                .ok()
                .and_then(|url| url.host_str().map(str::to_string))
                .filter(|host| host.ends_with(RAPIDAPI_DOMAIN)),
        }
    }

    /// The configured key header as a parsed HTTP header name.
    pub fn api_key_header_name(&self) -> std::result::Result<HeaderName, SupportError> {
        HeaderName::from_bytes(self.api_key_header.trim().as_bytes()).map_err(|_| {
            SupportError::Config(format!(
                "API key header '{}' is not a valid HTTP header name.",
                self.api_key_header
            ))
        })
    }

    /// The effective host as a header value, if one is sent.
    pub fn api_host_header_value(&self) -> std::result::Result<Option<HeaderValue>, SupportError> {
        self.effective_api_host()
            .map(|host| {
                HeaderValue::from_str(&host).map_err(|_| {
                    SupportError::Config(format!(
                        "api_host '{}' is not a valid HTTP header value.",
                        host
                    ))
                })
            })
            .transpose()
    }

    /// Checks everything about the endpoint call that does not depend on the API key.
    pub fn validate(&self) -> std::result::Result<(), SupportError> {
        match reqwest::Url::parse(&self.endpoint) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => {
                return Err(SupportError::Config(format!(
                    "Endpoint '{}' must use http or https, not '{}'.",
                    self.endpoint,
                    url.scheme()
                )));
            }
            Err(e) => {
                return Err(SupportError::Config(format!(
                    "Invalid endpoint URL '{}': {}",
                    self.endpoint, e
                )));
            }
        }
        self.api_key_header_name()?;
        self.api_host_header_value()?;
        if self.model.trim().is_empty() {
            return Err(SupportError::Config("Model name cannot be empty.".to_string()));
        }
        if self.max_tokens == 0 {
            return Err(SupportError::Config(
                "max_tokens must be greater than zero.".to_string(),
            ));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(SupportError::Config(format!(
                "temperature {} is outside the range 0.0 to 2.0.",
                self.temperature
            )));
        }
        if self.timeout_secs == 0 {
            return Err(SupportError::Config(
                "timeout_secs must be greater than zero.".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_host: None,
            api_key_header: default_api_key_header(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
            max_history_messages: 0,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_file: default_history_file(),
            load_on_start: default_load_on_start(),
        }
    }
}

const RAPIDAPI_HOST: &str = "cheapest-gpt-4-turbo-gpt-4-vision-chatgpt-openai-ai-api.p.rapidapi.com";
const RAPIDAPI_DOMAIN: &str = ".rapidapi.com";

fn default_endpoint() -> String {
    format!("https://{}/v1/chat/completions", RAPIDAPI_HOST)
}
fn default_api_key_header() -> String {
    "X-RapidAPI-Key".to_string()
}
fn default_model() -> String {
    "gpt-4o".to_string()
}
fn default_max_tokens() -> u32 {
    1000
}
fn default_temperature() -> f64 {
    0.7
}
fn default_timeout_secs() -> u64 {
    60
}
fn default_history_file() -> String {
    "chat_history.json".to_string()
}
fn default_load_on_start() -> bool {
    true
}

pub const PROJECT_CONFIG_FILENAME: &str = ".supportbot.toml";
const USER_CONFIG_FILENAME: &str = "config.toml";

pub fn load_config() -> Result<Config> {
    let user_layer = load_user_layer()?;
    let project_layer = load_project_layer()?;
    let mut merged_config = merge_layers(user_layer, project_layer)?;
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

/// Location of the user-level config file, if the platform has a config directory.
pub fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "Supportbot", "supportbot")
        .map(|dirs| dirs.config_dir().join(USER_CONFIG_FILENAME))
}

fn load_user_layer() -> Result<Option<toml::Table>> {
    match user_config_path() {
        Some(config_path) if config_path.exists() => {
            info!("Loading user configuration from: {}", config_path.display());
            read_layer(&config_path).map(Some)
        }
        Some(config_path) => {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
        None => {
            warn!("Could not determine user config directory.");
            Ok(None)
        }
    }
}

fn load_project_layer() -> Result<Option<toml::Table>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        read_layer(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.supportbot.toml) found.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

#[cfg(test)]
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    table_to_config(read_layer(path)?)
}

/// Reads one config file as a raw table. Unknown keys and wrong types are
/// reported here, against the file that contains them.
fn read_layer(path: &Path) -> Result<toml::Table> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    let table: toml::Table = toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))?;
    table_to_config(table.clone())
        .with_context(|| format!("Invalid configuration in file: {}", path.display()))?;
    Ok(table)
}

/// Layers `project` over `user` key by key and fills the gaps with defaults.
///
/// Only keys written in the project file win, including ones equal to the default.
fn merge_layers(user: Option<toml::Table>, project: Option<toml::Table>) -> Result<Config> {
    let mut merged = user.unwrap_or_default();
    if let Some(project) = project {
        overlay_table(&mut merged, project);
    }
    table_to_config(merged)
}

fn overlay_table(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match value {
            toml::Value::Table(section) => match base.get_mut(&key) {
                Some(toml::Value::Table(existing)) => overlay_table(existing, section),
                _ => {
                    base.insert(key, toml::Value::Table(section));
                }
            },
            other => {
                base.insert(key, other);
            }
        }
    }
}

fn table_to_config(table: toml::Table) -> Result<Config> {
    let config = toml::Value::Table(table).try_into::<Config>()?;
    Ok(config)
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    config.session.history_file = shellexpand::tilde(&config.session.history_file).into_owned();
    debug!("Expanded history file: {}", config.session.history_file);
    Ok(())
}

pub fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    config.remote.validate()?;
    if config.session.history_file.trim().is_empty() {
        return Err(anyhow!(SupportError::Config(
            "history_file cannot be empty.".to_string()
        )));
    }
    info!("Configuration validation successful.");
    Ok(())
}
