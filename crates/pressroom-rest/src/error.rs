//! Error types for pressroom-rest

use pressroom_core::SourceError;
use thiserror::Error;

/// Errors that can occur in the REST content source
#[derive(Error, Debug)]
pub enum RestError {
    /// HTTP request failed (connect, timeout, TLS)
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The backend answered with a non-success status
    #[error("Unexpected response status: {0}")]
    Status(u16),

    /// The response body could not be decoded
    #[error("Malformed response body: {0}")]
    Decode(String),

    /// A record carried neither slug nor id
    #[error("Record carries neither slug nor id")]
    MissingIdentity,
}

impl From<reqwest::Error> for RestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RestError::Decode(err.to_string())
        } else {
            RestError::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for RestError {
    fn from(err: serde_json::Error) -> Self {
        RestError::Decode(err.to_string())
    }
}

impl From<RestError> for SourceError {
    fn from(err: RestError) -> Self {
        match err {
            RestError::Http(message) => SourceError::Transport(message),
            RestError::Status(code) => SourceError::Status(code),
            RestError::Decode(message) => SourceError::Decode(message),
            RestError::MissingIdentity => SourceError::Unaddressable,
        }
    }
}

/// Result type for REST source operations
pub type RestResult<T> = std::result::Result<T, RestError>;
