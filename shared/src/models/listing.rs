//! Listing Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound of `Sustainability::recycled_material_percentage`
pub const MAX_RECYCLED_PERCENTAGE: f64 = 100.0;

/// Listing entity (persisted product entry in the catalog)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(alias = "_id")]
    pub id: String,
    pub product_info: ProductInfo,
    pub pricing: Pricing,
    pub inventory: Inventory,
    #[serde(default)]
    pub sustainability: Sustainability,
    #[serde(default)]
    pub availability: Availability,
    /// Server-managed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Server-managed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInfo {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    /// Image URLs in display order. May be empty; the fallback image is a
    /// render-time concern and is never stored here.
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    pub cost_price: f64,
    pub selling_price: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    pub current_stock: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sustainability {
    /// Percentage in [0, 100]
    pub recycled_material_percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub is_active: bool,
}

impl Default for Availability {
    fn default() -> Self {
        Self { is_active: true }
    }
}

/// Listing invariant violation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("listing {id}: {field} must be a non-negative number, got {value}")]
    NegativePrice {
        id: String,
        field: &'static str,
        value: f64,
    },

    #[error("listing {id}: recycled material percentage {value} is outside [0, 100]")]
    RecycledPercentageOutOfRange { id: String, value: f64 },
}

impl Listing {
    /// Check the entity invariants that the wire format cannot express.
    ///
    /// `current_stock >= 0` is carried by the type.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        for (field, value) in [
            ("costPrice", self.pricing.cost_price),
            ("sellingPrice", self.pricing.selling_price),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(InvariantViolation::NegativePrice {
                    id: self.id.clone(),
                    field,
                    value,
                });
            }
        }

        let pct = self.sustainability.recycled_material_percentage;
        if !(0.0..=MAX_RECYCLED_PERCENTAGE).contains(&pct) {
            return Err(InvariantViolation::RecycledPercentageOutOfRange {
                id: self.id.clone(),
                value: pct,
            });
        }

        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.product_info.name
    }

    pub fn is_active(&self) -> bool {
        self.availability.is_active
    }
}
