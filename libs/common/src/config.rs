//! Configuration module for the Stash HereSphere bridge
//!
//! This module reads the process environment once at startup and hands out
//! plain configuration values. Nothing in here is global: callers pass the
//! resulting structs to whatever needs them.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::SocketAddr;

const ENV_STASH_GRAPHQL_URL: &str = "STASH_GRAPHQL_URL";
const ENV_STASH_API_KEY: &str = "STASH_API_KEY";
const ENV_STASH_TIMEOUT_SECONDS: &str = "STASH_TIMEOUT_SECONDS";
const ENV_LISTEN_ADDRESS: &str = "LISTEN_ADDRESS";
const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
const ENV_DISABLE_REDACT: &str = "DISABLE_REDACT";

const DEFAULT_STASH_GRAPHQL_URL: &str = "http://localhost:9999/graphql";
const DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0:9666";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

const REDACTED: &str = "REDACTED";

/// Connection settings for the Stash GraphQL backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StashConfig {
    /// GraphQL endpoint (e.g., "http://localhost:9999/graphql")
    pub graphql_url: String,
    /// API key, `None` when not configured
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for StashConfig {
    fn default() -> Self {
        Self {
            graphql_url: DEFAULT_STASH_GRAPHQL_URL.to_string(),
            api_key: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl StashConfig {
    /// Create a new StashConfig from environment variables
    ///
    /// # Environment Variables
    /// - `STASH_GRAPHQL_URL`: GraphQL endpoint (default: "http://localhost:9999/graphql")
    /// - `STASH_API_KEY`: API key (default: none)
    /// - `STASH_TIMEOUT_SECONDS`: Request timeout (default: 30)
    pub fn from_env() -> ConfigResult<Self> {
        let graphql_url = env::var(ENV_STASH_GRAPHQL_URL)
            .unwrap_or_else(|_| DEFAULT_STASH_GRAPHQL_URL.to_string());
        if graphql_url.trim().is_empty() {
            return Err(ConfigError::Empty(ENV_STASH_GRAPHQL_URL));
        }

        let api_key = env::var(ENV_STASH_API_KEY)
            .ok()
            .filter(|key| !key.is_empty());

        let timeout_seconds = env::var(ENV_STASH_TIMEOUT_SECONDS)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        Ok(Self {
            graphql_url,
            api_key,
            timeout_seconds,
        })
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub stash: StashConfig,
    /// Address the HTTP service binds to
    pub listen_address: SocketAddr,
    /// Tracing filter directive, lower-cased
    pub log_level: String,
    /// Show secrets in the startup log
    pub redact_disabled: bool,
}

impl AppConfig {
    /// Create a new AppConfig from environment variables
    ///
    /// # Environment Variables
    /// - `LISTEN_ADDRESS`: Bind address (default: "0.0.0.0:9666")
    /// - `LOG_LEVEL`: Tracing filter (default: "info")
    /// - `DISABLE_REDACT`: "true" to log secrets unredacted (default: "false")
    /// - plus everything read by [`StashConfig::from_env`]
    pub fn from_env() -> ConfigResult<Self> {
        let stash = StashConfig::from_env()?;

        let raw_address =
            env::var(ENV_LISTEN_ADDRESS).unwrap_or_else(|_| DEFAULT_LISTEN_ADDRESS.to_string());
        let listen_address = raw_address
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                key: ENV_LISTEN_ADDRESS,
                value: raw_address.clone(),
            })?;

        let log_level = env::var(ENV_LOG_LEVEL)
            .unwrap_or_else(|_| "info".to_string())
            .to_lowercase();

        Ok(Self {
            stash,
            listen_address,
            log_level,
            redact_disabled: env_flag(ENV_DISABLE_REDACT),
        })
    }

    /// Copy of the configuration that is safe to log
    pub fn redacted(&self) -> Self {
        let mut redacted = self.clone();
        redacted.stash.graphql_url = redact(&self.stash.graphql_url);
        redacted.stash.api_key = self.stash.api_key.as_deref().map(redact);
        redacted
    }
}

/// Replace a non-empty value with a fixed marker
pub fn redact(value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        REDACTED.to_string()
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|v| v == "true").unwrap_or(false)
}
