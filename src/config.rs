//! Runtime configuration
//!
//! Native builds read the environment (after loading `.env`); the web build
//! talks to the origin that served the page.

use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("API_TIMEOUT_SECS must be a positive number of seconds, got {0:?}")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_url: String,
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Builds a config from raw values, applying defaults for anything unset.
    pub fn from_values(api_url: Option<String>, timeout_secs: Option<String>) -> Result<Self, ConfigError> {
        let api_url = api_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let request_timeout = match timeout_secs {
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
        };

        Ok(AppConfig { api_url, request_timeout })
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_values(
            std::env::var("API_URL").ok(),
            std::env::var("API_TIMEOUT_SECS").ok(),
        )
    }

    /// On web, use the same origin as the page (for same-origin API requests)
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Result<Self, ConfigError> {
        let origin = web_sys::window().and_then(|w| w.location().origin().ok());
        Self::from_values(origin, None)
    }
}
