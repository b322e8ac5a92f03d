//! Client configuration loaded from environment variables.
//!
//! The only required surface is the API base URL, which distinguishes the
//! development target from production. The storage directory is optional;
//! without it the key-value store runs purely in memory.

use std::env;
use std::path::PathBuf;

/// Base URL used when `SAFEROUTES_API_URL` is not set (local development).
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Safe Routes API (no trailing slash required).
    pub base_url: String,
    /// Directory for persisted session and cache data. `None` keeps
    /// everything in memory.
    pub storage_dir: Option<PathBuf>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            storage_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `SAFEROUTES_API_URL` selects the backend (defaults to the local
    /// development server); `SAFEROUTES_DATA_DIR` enables file-backed storage.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let base_url = env::var("SAFEROUTES_API_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }

        Ok(Self {
            base_url,
            storage_dir: env::var("SAFEROUTES_DATA_DIR").ok().map(PathBuf::from),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid base URL (expected http:// or https://): {0}")]
    InvalidBaseUrl(String),
}
