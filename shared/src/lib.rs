//! Shared types for the marketplace catalog
//!
//! Listing entities, editable drafts, mutation payloads, the API response
//! envelope and presentation intents. Used by both the transport and the
//! controller crates.

pub mod intent;
pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use intent::ListingIntent;
pub use models::{
    Availability, ImageAttachment, Inventory, InvariantViolation, Listing, ListingDraft,
    ListingPayload, MutationRequest, Pricing, ProductInfo, Sustainability,
};
pub use response::ApiResponse;
