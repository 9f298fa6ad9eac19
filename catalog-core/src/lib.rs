//! Catalog Core - listing lifecycle and synchronization
//!
//! Owns the local listing collection, sequences create/update/delete
//! against a `CatalogTransport`, and resynchronizes the collection with a
//! full fetch after every successful mutation.

pub mod controller;
pub mod draft;

pub use controller::{
    CatalogView, ListingController, ListingError, ListingResult, LoadOutcome, MutationKind, Phase,
};
pub use draft::to_draft;
