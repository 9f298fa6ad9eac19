//! Draft normalizer
//!
//! Persisted listing → editable draft. Pure projection; no validation.

use shared::{Listing, ListingDraft};

/// Project a listing into the edit-form draft.
///
/// `None` means a new listing: the form starts blank and no draft is
/// derived. The returned draft owns copies of every field, including the
/// image sequence, so editing it never reaches back into the collection.
pub fn to_draft(listing: Option<&Listing>) -> Option<ListingDraft> {
    let listing = listing?;
    Some(ListingDraft {
        name: listing.product_info.name.clone(),
        description: listing.product_info.description.clone(),
        category: listing.product_info.category.clone(),
        images: listing.product_info.images.clone(),
        cost_price: listing.pricing.cost_price,
        selling_price: listing.pricing.selling_price,
        current_stock: listing.inventory.current_stock,
        recycled_material_percentage: listing.sustainability.recycled_material_percentage,
        is_active: listing.availability.is_active,
    })
}
