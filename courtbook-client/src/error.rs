//! Error types for booking operations.

use thiserror::Error;

/// Errors surfaced by the booking client.
///
/// Server-side rejections are passed through verbatim; the client never
/// re-derives the reason. Nothing is retried at this layer.
#[derive(Error, Debug)]
pub enum ClientError {
    /// A precondition was violated before any request was issued. This
    /// is a caller bug, not a user-facing failure.
    #[error("Invalid booking input: {0}")]
    LocalValidation(String),

    /// The server rejected the operation on a business rule (overlap,
    /// opening hours, length or advance limits). Message verbatim.
    #[error("{0}")]
    Rejected(String),

    /// The server reports the target does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The request was refused for lack of a valid token. The caller
    /// must re-authenticate; the client does not refresh or retry.
    #[error("Not authorized: log in and try again")]
    Unauthorized,

    /// Network-level failure.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not have the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// Session/config file I/O.
    #[error("Session storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for booking operations.
pub type ClientResult<T> = Result<T, ClientError>;
