//! Error types for the AOC HTTP client

use thiserror::Error;

/// Errors that can occur when using the AOC HTTP client
#[derive(Error, Debug)]
pub enum AocError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Invalid HTTP status code received
    #[error("Invalid HTTP status: {status}")]
    InvalidStatus {
        /// The status code that was received
        status: reqwest::StatusCode,
    },

    /// The endpoint URL cannot carry path segments (e.g. `data:` URLs)
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    /// Session value cannot be placed in a cookie header
    #[error("Invalid session cookie format")]
    InvalidSession,

    /// Client initialization failed
    #[error("Client initialization failed: {0}")]
    ClientInit(String),
}
