//! Controller error types

use catalog_client::ClientError;
use thiserror::Error;

use super::state::MutationKind;

/// Listing controller error
///
/// Server-side validation and not-found failures are not distinguished
/// from other unexpected failures; the view only ever carries one message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    /// Another mutation is in flight; nothing was sent
    #[error("A {0} is already in progress")]
    Busy(MutationKind),

    #[error("Network failure: {0}")]
    Network(String),

    #[error("Server rejected the request: {0}")]
    ServerRejection(String),

    #[error("Unexpected failure: {0}")]
    Unexpected(String),
}

impl ListingError {
    pub fn is_busy(&self) -> bool {
        matches!(self, ListingError::Busy(_))
    }
}

impl From<ClientError> for ListingError {
    fn from(err: ClientError) -> Self {
        if err.is_network() {
            return ListingError::Network(err.to_string());
        }
        match err {
            ClientError::Server { .. } | ClientError::Unauthorized => {
                ListingError::ServerRejection(err.to_string())
            }
            other => ListingError::Unexpected(other.to_string()),
        }
    }
}

/// Result type for controller operations
pub type ListingResult<T> = Result<T, ListingError>;
