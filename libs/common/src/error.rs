//! Custom error types for the common library
//!
//! This module defines the errors raised while loading the application
//! configuration from the environment.

use thiserror::Error;

/// Custom error type for configuration loading
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable was present but empty
    #[error("Configuration value {0} must not be empty")]
    Empty(&'static str),

    /// A variable could not be interpreted
    #[error("Invalid value for {key}: {value}")]
    InvalidValue {
        key: &'static str,
        value: String,
    },
}

/// Type alias for Result with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
