//! API error types

use thiserror::Error;

/// Errors returned by the food backend client
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport or decoding failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-success status
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
