//! Listing Draft Model

use serde::{Deserialize, Serialize};

/// Editable, non-persisted projection of a listing's mutable fields
///
/// Carries no identifier and no server-managed metadata. No validation is
/// applied here; that belongs to the form layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub cost_price: f64,
    pub selling_price: f64,
    pub current_stock: u32,
    #[serde(default)]
    pub recycled_material_percentage: f64,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl ListingDraft {
    /// Blank draft for the new-listing form
    pub fn blank() -> Self {
        Self {
            is_active: true,
            ..Default::default()
        }
    }
}
