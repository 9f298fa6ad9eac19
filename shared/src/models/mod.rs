//! Data models
//!
//! Shared between the catalog transport and the listing controller.
//! Listing IDs are server-assigned strings.

pub mod draft;
pub mod listing;
pub mod mutation;

// Re-exports
pub use draft::*;
pub use listing::*;
pub use mutation::*;
