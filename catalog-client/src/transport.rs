//! Catalog transport seam

use async_trait::async_trait;
use shared::{Listing, MutationRequest};

use crate::ClientResult;

/// Network calls for listing list/create/update/delete
///
/// Implementations must be safe to call concurrently; the controller may
/// have a refresh in flight while a mutation is issued.
#[async_trait]
pub trait CatalogTransport: Send + Sync {
    /// Full listing collection, in server order
    async fn list(&self) -> ClientResult<Vec<Listing>>;

    /// Create a listing from metadata plus attachments
    async fn create(&self, request: &MutationRequest) -> ClientResult<Listing>;

    /// Replace an existing listing's mutable fields
    async fn update(&self, id: &str, request: &MutationRequest) -> ClientResult<Listing>;

    async fn delete(&self, id: &str) -> ClientResult<()>;
}
