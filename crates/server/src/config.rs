//! # Application Configuration
//!
//! This module defines the configuration structure for the `gleam-server` and
//! provides the logic for loading it from an optional `config.yml` file and
//! environment variables.

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use gleam_rss::{DEFAULT_FEED_URL, DEFAULT_NEWS_LIMIT};
use regex::Regex;
use serde::Deserialize;
use std::env;
use std::fs;
use tracing::info;

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    General(String),
    /// Indicates a required configuration file was not found.
    NotFound(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
            ConfigError::NotFound(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The root configuration structure, mapping directly to `config.yml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT` env var.
    #[serde(default = "default_port")]
    pub port: u16,
    /// The RSS feed listed by the news endpoint.
    #[serde(default = "default_news_feed_url")]
    pub news_feed_url: String,
    /// How many headlines the news endpoint returns.
    #[serde(default = "default_news_limit")]
    pub news_limit: usize,
    /// The text-generation model used by the pipeline.
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// Provides a default value for the `port` field if not set in the environment.
fn default_port() -> u16 {
    9090
}

fn default_news_feed_url() -> String {
    DEFAULT_FEED_URL.to_string()
}

fn default_news_limit() -> usize {
    DEFAULT_NEWS_LIMIT
}

/// Configuration for the generation model provider.
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// The type of provider ("gemini" or "local").
    #[serde(default = "default_provider")]
    pub provider: String,
    /// The API URL. Optional for Gemini, where it is derived from the model name.
    #[serde(default)]
    pub api_url: Option<String>,
    /// The API key. Falls back to the `AI_API_KEY` env var when unset.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model_name")]
    pub model_name: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_url: None,
            api_key: None,
            model_name: default_model_name(),
        }
    }
}

fn default_provider() -> String {
    "gemini".to_string()
}

fn default_model_name() -> String {
    "gemini-1.5-flash".to_string()
}

// Helper to read a file, substitute env vars, and return its content.
// Returns Ok(None) if the file does not exist, or an error if it fails to read.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !std::path::Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let re = Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}")
        .map_err(|e| ConfigError::General(format!("Invalid substitution pattern: {e}")))?;
    let expanded_content = re.replace_all(&content, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_default()
    });

    Ok(Some(expanded_content.to_string()))
}

/// Treats empty strings (e.g. an unset `${VAR}` substitution) as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Loads the application configuration from a file and environment variables.
///
/// - Without an override, `config.yml` next to the server manifest is used if present;
///   an explicit override path must exist.
/// - Top-level keys like `port` are overridden by `PORT`.
/// - Nested keys are overridden by `GLEAM_...` variables (e.g., `GLEAM_PROVIDER__MODEL_NAME`).
/// - If no API key was configured, `AI_API_KEY` is used.
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = ConfigBuilder::builder();

    match config_path_override {
        Some(path) => {
            let content = read_and_substitute(path)?.ok_or_else(|| {
                ConfigError::NotFound(format!("Config file not found at '{path}'."))
            })?;
            info!("Loading configuration from '{path}'.");
            builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
        }
        None => {
            let base_path = env!("CARGO_MANIFEST_DIR");
            let user_config_path = format!("{base_path}/config.yml");
            if let Some(content) = read_and_substitute(&user_config_path)? {
                info!("Loading user-defined configuration from '{user_config_path}'.");
                builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
            } else {
                info!("'{user_config_path}' not found. Using defaults and environment.");
            }
        }
    }

    let settings = builder
        // Top-level keys like PORT.
        .add_source(Environment::default())
        // Prefixed variables for deeper overrides.
        .add_source(
            Environment::with_prefix("GLEAM")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;

    config.provider.api_url = non_empty(config.provider.api_url.take());
    config.provider.api_key = non_empty(config.provider.api_key.take());
    if config.provider.api_key.is_none() {
        config.provider.api_key = non_empty(env::var("AI_API_KEY").ok());
    }

    Ok(config)
}
