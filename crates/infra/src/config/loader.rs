//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables (a `.env` file is
//!    honored via `dotenvy`)
//! 2. If the required variables are missing, falls back to a config file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `BLOCRANK_API_URL`: Base URL of the competition backend (required)
//! - `BLOCRANK_HTTP_TIMEOUT_SECS`: Request timeout in seconds (default: 30)
//! - `BLOCRANK_SESSION_PATH`: Path of the persisted session file (default:
//!   `blocrank-session.json`)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./blocrank.json` or `./blocrank.toml`
//! 2. `./config.json` or `./config.toml`

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is missing.
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),

    /// A value could not be parsed or validated.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// No config source could be found.
    #[error("no configuration found: {0}")]
    NotFound(String),
}

/// Client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the backend API, without a trailing slash.
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Path of the persisted session file.
    #[serde(default = "default_session_path")]
    pub session_path: PathBuf,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_session_path() -> PathBuf {
    PathBuf::from("blocrank-session.json")
}

impl Config {
    /// Request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the base URL and strip any trailing slash.
    fn normalized(mut self) -> Result<Self, ConfigError> {
        let parsed = url::Url::parse(&self.base_url)
            .map_err(|e| ConfigError::Invalid(format!("base URL {:?}: {e}", self.base_url)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "base URL must be http(s), got {:?}",
                parsed.scheme()
            )));
        }
        while self.base_url.ends_with('/') {
            self.base_url.pop();
        }
        Ok(self)
    }
}

/// Load configuration with automatic fallback strategy.
///
/// First attempts to load from environment variables. If the required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns [`ConfigError`] if neither source yields a valid configuration.
pub fn load() -> Result<Config, ConfigError> {
    dotenvy::dotenv().ok();

    match load_from_env() {
        Ok(config) => {
            tracing::info!("configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "environment incomplete, trying config file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables.
///
/// # Errors
/// Returns [`ConfigError`] if `BLOCRANK_API_URL` is missing or any value is
/// invalid.
pub fn load_from_env() -> Result<Config, ConfigError> {
    let base_url =
        std::env::var("BLOCRANK_API_URL").map_err(|_| ConfigError::MissingVar("BLOCRANK_API_URL"))?;

    let timeout_secs = match std::env::var("BLOCRANK_HTTP_TIMEOUT_SECS") {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|e| ConfigError::Invalid(format!("timeout {raw:?}: {e}")))?,
        Err(_) => default_timeout_secs(),
    };

    let session_path = std::env::var("BLOCRANK_SESSION_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_session_path());

    Config { base_url, timeout_secs, session_path }.normalized()
}

/// Load configuration from a file.
///
/// If `path` is `None`, probes the standard locations. Format is detected by
/// file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns [`ConfigError`] if the file is missing, unparsable, or invalid.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config, ConfigError> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ConfigError::NotFound(format!("config file {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ConfigError::NotFound("no config file in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ConfigError::Invalid(format!("read {}: {e}", config_path.display())))?;

    parse_config(&contents, &config_path)?.normalized()
}

fn parse_config(contents: &str, path: &Path) -> Result<Config, ConfigError> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ConfigError::Invalid(format!("invalid TOML: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ConfigError::Invalid(format!("invalid JSON: {e}"))),
        other => Err(ConfigError::Invalid(format!("unsupported config format: {other}"))),
    }
}

fn probe_config_paths() -> Option<PathBuf> {
    const CANDIDATES: [&str; 4] =
        ["blocrank.json", "blocrank.toml", "config.json", "config.toml"];

    CANDIDATES.iter().map(PathBuf::from).find(|p| p.exists())
}
