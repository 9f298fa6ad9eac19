//! Catalog Client - transport for the marketplace catalog service
//!
//! Provides the `CatalogTransport` seam consumed by the listing controller
//! and a network implementation over HTTP.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod http;
pub mod transport;

pub use config::ClientConfig;
pub use diagnostics::DiagnosticEntry;
pub use error::{ClientError, ClientResult};
pub use http::NetworkCatalogClient;
pub use transport::CatalogTransport;

// Re-export shared types for convenience
pub use shared::{ApiResponse, ImageAttachment, Listing, ListingDraft, MutationRequest};
