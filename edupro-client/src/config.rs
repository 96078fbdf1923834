//! Client configuration
//!
//! # Environment variables
//!
//! | variable                  | default  | description                          |
//! |---------------------------|----------|--------------------------------------|
//! | EDUPRO_API_URL            | required | backend base URL                     |
//! | EDUPRO_API_TIMEOUT_SECS   | none     | request timeout, platform default    |
//! | EDUPRO_SESSION_FILE       | none     | cookie file for persisted sessions   |

use std::path::PathBuf;

use crate::{ApiClient, ClientError, ClientResult};

/// Required base URL of the backend
pub const API_URL_ENV: &str = "EDUPRO_API_URL";
/// Optional request timeout in seconds
pub const TIMEOUT_ENV: &str = "EDUPRO_API_TIMEOUT_SECS";
/// Optional path of the session cookie file
pub const SESSION_FILE_ENV: &str = "EDUPRO_SESSION_FILE";

/// Client configuration for connecting to the EduPro backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "https://api.edupro.example/api")
    pub base_url: String,

    /// Request timeout in seconds; `None` leaves the platform default
    pub timeout: Option<u64>,

    /// Where session cookies are persisted; `None` keeps them in memory
    pub session_file: Option<PathBuf>,
}

impl ClientConfig {
    /// Create a new configuration for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: None,
            session_file: None,
        }
    }

    /// Load configuration from the process environment
    ///
    /// A missing `EDUPRO_API_URL` is fatal.
    pub fn from_env() -> ClientResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> ClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(API_URL_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ClientError::Config(format!("{API_URL_ENV} must be set")))?;

        let timeout = match lookup(TIMEOUT_ENV).filter(|v| !v.trim().is_empty()) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| {
                ClientError::Config(format!("{TIMEOUT_ENV} must be a number of seconds, got {raw:?}"))
            })?),
            None => None,
        };

        let mut config = Self::new(base_url);
        config.timeout = timeout;
        config.session_file = lookup(SESSION_FILE_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        config.validate()?;
        Ok(config)
    }

    /// Check that the base URL is an absolute http(s) URL
    pub fn validate(&self) -> ClientResult<()> {
        let url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| ClientError::Config(format!("invalid base URL {:?}: {e}", self.base_url)))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ClientError::Config(format!(
                "unsupported URL scheme {other:?} in {:?}",
                self.base_url
            ))),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Persist session cookies in the given file
    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = Some(path.into());
        self
    }

    /// Create an API client from this configuration
    pub fn build_client(&self) -> ClientResult<ApiClient> {
        ApiClient::new(self)
    }
}
