//! Error types for stats collection and card rendering

use thiserror::Error;

/// Result type alias for ghstats operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a stats card
#[derive(Error, Debug)]
pub enum Error {
    /// The username was empty after trimming
    #[error("Please enter a username")]
    InvalidUsername,

    /// The API answered 404 for the user profile
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// The API answered 403 (anonymous rate limit exhausted)
    #[error("API rate limit reached, wait a while and try again")]
    RateLimited,

    /// Any other non-success status for the user profile
    #[error("Failed to fetch user profile (HTTP {status})")]
    UserFetch { status: u16 },

    /// Failed to build the HTTP client
    #[error("Client initialization failed: {0}")]
    InitializationError(String),

    /// Invalid configuration (bad API base URL, ...)
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Transport-level failure
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Response body did not match the expected payload
    #[error("Unexpected response payload: {0}")]
    DecodeError(String),

    /// Writing the card failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::NetworkError(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::DecodeError(err.to_string())
    }
}
