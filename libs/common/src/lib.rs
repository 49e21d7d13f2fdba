//! Common library for the Stash HereSphere bridge
//!
//! This crate provides the configuration shared by the Stash client and the
//! HereSphere service, together with its error types.

pub mod config;
pub mod error;

pub use config::{AppConfig, StashConfig};
pub use error::{ConfigError, ConfigResult};
