//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server unreachable or the request timed out
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Invalid response format or a listing that violates its invariants
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request rejected by server-side validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other non-success status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether the failure happened before a response was received
    pub fn is_network(&self) -> bool {
        match self {
            ClientError::Connection(_) => true,
            ClientError::Http(e) => !e.is_decode() && !e.is_builder(),
            _ => false,
        }
    }

    /// Classify a send failure, separating reachability from other errors
    pub(crate) fn from_send(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            ClientError::Connection(e.to_string())
        } else {
            ClientError::Http(e)
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
