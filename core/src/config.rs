//! Client configuration.
//!
//! A `Config` is fixed once a client is built; every request reads the same
//! base URL and token.

use std::fmt;

use crate::error::{ApiError, Result};

/// Base URL of the Todoist REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.todoist.com/rest/v2";

/// Environment variable holding the API token.
pub const TOKEN_ENV: &str = "TODOIST_API_TOKEN";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "TODOIST_BASE_URL";

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    base_url: String,
    token: String,
}

impl Config {
    /// Configuration for the public API with the given bearer token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: token.into(),
        }
    }

    /// Point the client at another server, e.g. a local mock.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Read the token (required) and base URL (optional) from the environment.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_ENV)
            .map_err(|_| ApiError::Config(format!("{TOKEN_ENV} is not set")))?;
        let config = match std::env::var(BASE_URL_ENV) {
            Ok(url) => Config::new(token).with_base_url(&url),
            Err(_) => Config::new(token),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.token.trim().is_empty() {
            return Err(ApiError::Config("token must not be empty".to_string()));
        }
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(ApiError::Config(format!(
                "base URL must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }
        Ok(())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Value of the `Authorization` header sent with every request.
    pub(crate) fn authorization(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}
