//! Custom error types for the Stash library

use std::num::ParseIntError;
use thiserror::Error;

/// Error raised while reading a resolution out of a stream label
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolutionError {
    /// The label carries no "(<height>p)" marker
    #[error("No resolution height found in label")]
    NotFound,

    /// The captured digits do not fit an integer
    #[error("Invalid resolution height: {0}")]
    Parse(#[from] ParseIntError),
}

/// Custom error type for fetching data from Stash
#[derive(Error, Debug)]
pub enum StashError {
    /// Transport or decoding failure
    #[error("Stash request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Stash answered with a non-success HTTP status
    #[error("Stash responded with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The GraphQL response carried errors
    #[error("Stash GraphQL error: {0}")]
    GraphQl(String),

    /// No scene exists for the requested id
    #[error("Scene not found: {0}")]
    SceneNotFound(String),
}

/// Type alias for Result with StashError
pub type StashResult<T> = Result<T, StashError>;
