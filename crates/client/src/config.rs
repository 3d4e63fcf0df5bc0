//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ROBOTECH_API_BASE_URL` - Base URL of the REST backend
//!   (default: `http://localhost:5000/api`)
//! - `ROBOTECH_DATA_DIR` - Directory for durable client state
//!   (default: `.robotech` in the working directory)
//! - `ROBOTECH_PAGE_SIZE` - Products per listing page (default: 12)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Default backend base URL for local development.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Default number of products per listing page.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Default directory for durable client state.
const DEFAULT_DATA_DIR: &str = ".robotech";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the REST backend (including the `/api` prefix).
    pub api_base_url: Url,
    /// Directory where cart, session, and theme state are persisted.
    pub data_dir: PathBuf,
    /// Products requested per listing page.
    pub page_size: u32,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_base_url = get_env_or_default("ROBOTECH_API_BASE_URL", DEFAULT_API_BASE_URL)
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("ROBOTECH_API_BASE_URL".to_string(), e.to_string())
            })?;

        let data_dir = PathBuf::from(get_env_or_default("ROBOTECH_DATA_DIR", DEFAULT_DATA_DIR));

        let page_size = get_env_or_default("ROBOTECH_PAGE_SIZE", &DEFAULT_PAGE_SIZE.to_string())
            .parse::<u32>()
            .ok()
            .filter(|&n| n >= 1)
            .ok_or_else(|| {
                ConfigError::InvalidEnvVar(
                    "ROBOTECH_PAGE_SIZE".to_string(),
                    "must be a positive integer".to_string(),
                )
            })?;

        Ok(Self {
            api_base_url,
            data_dir,
            page_size,
        })
    }

    /// Create a configuration with explicit values (used by tests and
    /// embedders that do not read the environment).
    #[must_use]
    pub const fn new(api_base_url: Url, data_dir: PathBuf, page_size: u32) -> Self {
        Self {
            api_base_url,
            data_dir,
            page_size,
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url_parses() {
        let url = DEFAULT_API_BASE_URL.parse::<Url>().unwrap();
        assert_eq!(url.path(), "/api");
    }

    #[test]
    fn test_new() {
        let config = ClientConfig::new(
            "http://localhost:5000/api".parse().unwrap(),
            PathBuf::from("/tmp/robotech"),
            24,
        );
        assert_eq!(config.page_size, 24);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/robotech"));
    }
}
