//! Error types for pressroom-core.

use thiserror::Error;

/// Errors a content source can report to the pipeline.
///
/// Every variant is recoverable from the pipeline's point of view: a
/// failed strategy falls through to the next one, and a failed page walk
/// returns what it already accumulated. Callers of `resolve` never see
/// these errors directly.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Network-level failure (connect, timeout, TLS).
    #[error("Transport failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("Unexpected response status: {0}")]
    Status(u16),

    /// The response body could not be decoded into the expected shape.
    #[error("Malformed response: {0}")]
    Decode(String),

    /// A record carried neither a slug nor an id.
    #[error("Record is unaddressable: neither slug nor id present")]
    Unaddressable,
}

/// Result type for source operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;
