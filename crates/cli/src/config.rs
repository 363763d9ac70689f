//! # Job Configuration
//!
//! This module defines the configuration structure for the `booketl` job and
//! provides the logic for loading it from a `booketl.yml` file and environment
//! variables. Every field has a default, so the job runs with no file at all.

use booketl::constants::{
    DEFAULT_DB_FILE, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_RETRIES, DEFAULT_RETRY_BACKOFF_SECS,
    DEFAULT_SCHEDULE_INTERVAL_SECS, GOOGLE_BOOKS_API_URL,
};
use booketl::{BookQuery, RetryPolicy, Schedule};
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use regex::Regex;
use serde::Deserialize;
use std::env;
use std::fs;
use std::time::Duration;
use tracing::info;

/// The config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "booketl.yml";

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    General(String),
    /// Indicates an explicitly requested configuration file was not found.
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

/// The root configuration structure, mapping directly to `booketl.yml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The path to the destination SQLite database. Loaded from `DB_URL` env var.
    #[serde(default = "default_db_url")]
    pub db_url: String,
    /// The volumes search endpoint.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// The bound on the outbound request.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub query: BookQuery,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub retry: RetryConfig,
}

fn default_db_url() -> String {
    DEFAULT_DB_FILE.to_string()
}

fn default_api_url() -> String {
    GOOGLE_BOOKS_API_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScheduleConfig {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

fn default_interval_secs() -> u64 {
    DEFAULT_SCHEDULE_INTERVAL_SECS
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RetryConfig {
    #[serde(default = "default_retries")]
    pub retries: u32,
    #[serde(default = "default_backoff_secs")]
    pub backoff_secs: u64,
}

fn default_retries() -> u32 {
    DEFAULT_RETRIES
}

fn default_backoff_secs() -> u64 {
    DEFAULT_RETRY_BACKOFF_SECS
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            retries: default_retries(),
            backoff_secs: default_backoff_secs(),
        }
    }
}

impl AppConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn schedule(&self) -> Schedule {
        Schedule {
            interval: Duration::from_secs(self.schedule.interval_secs),
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            retries: self.retry.retries,
            backoff: Duration::from_secs(self.retry.backoff_secs),
        }
    }
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

/// Loads the job configuration from a file and environment variables.
///
/// Layers, lowest precedence first:
/// - Defaults baked into `AppConfig`.
/// - The YAML file at `config_path_override`, or `booketl.yml` in the working
///   directory if it exists. An explicit path that does not exist is an error.
/// - Top-level keys from plain environment variables (e.g., `DB_URL`).
/// - Nested keys from `BOOKETL_...` variables (e.g., `BOOKETL_QUERY__AUTHOR`).
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = ConfigBuilder::builder();

    let file_content = match config_path_override {
        Some(path) => Some(read_and_substitute(path)?.ok_or_else(|| {
            ConfigError::NotFound(format!("Config file not found at '{path}'."))
        })?),
        None => read_and_substitute(DEFAULT_CONFIG_FILE)?,
    };
    if let Some(content) = file_content {
        info!(
            "Loading configuration from '{}'.",
            config_path_override.unwrap_or(DEFAULT_CONFIG_FILE)
        );
        builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
    }

    let settings = builder
        .add_source(Environment::default())
        .add_source(
            Environment::with_prefix("BOOKETL")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
