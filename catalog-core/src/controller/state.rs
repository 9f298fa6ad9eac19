//! Observable controller state

use std::sync::Arc;

use shared::{Listing, ListingDraft};

/// Kind of mutation occupying the controller's mutation slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

impl MutationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationKind::Create => "create",
            MutationKind::Update => "update",
            MutationKind::Delete => "delete",
        }
    }
}

impl std::fmt::Display for MutationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle phase, derived from the view
///
/// Loading → Ready → Mutating → Ready. A failed operation lands in Ready
/// with `CatalogView::error` set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
    Mutating(MutationKind),
}

/// Read-only snapshot handed to the presentation layer
///
/// `listings` is shared, immutable storage; it is replaced wholesale on
/// every applied refresh and never patched in place.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    pub listings: Arc<[Listing]>,
    /// Open edit-form contents
    pub draft: Option<ListingDraft>,
    /// Identifier of the listing being edited
    pub editing: Option<String>,
    pub loading: bool,
    pub pending: Option<MutationKind>,
    /// Latest failure message; there is no error queue
    pub error: Option<String>,
}

impl CatalogView {
    pub(crate) fn initial() -> Self {
        Self {
            listings: Arc::from(Vec::new()),
            draft: None,
            editing: None,
            loading: true,
            pending: None,
            error: None,
        }
    }

    pub fn phase(&self) -> Phase {
        match (self.pending, self.loading) {
            (Some(kind), _) => Phase::Mutating(kind),
            (None, true) => Phase::Loading,
            (None, false) => Phase::Ready,
        }
    }

    pub fn is_mutating(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the edit form should be shown
    pub fn is_form_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn find(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    /// Listing the edit pointer refers to, if it is still in the collection
    pub fn editing_listing(&self) -> Option<&Listing> {
        self.editing.as_deref().and_then(|id| self.find(id))
    }
}
