use thiserror::Error;
use tradeguard_core::ValidationError;

/// Client error types.
///
/// Failures are flat: a request either succeeds or surfaces here with the
/// server-supplied message when one exists. There is no retry, backoff, or
/// transient/permanent distinction.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API error response
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Server-supplied message, when present
        message: String,
    },

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rejected before dispatch; no request was made
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
