//! Mutation request payloads
//!
//! A `MutationRequest` couples draft metadata with newly attached images
//! that have not been persisted yet. It never carries a listing identifier;
//! update targets are passed separately.

use serde::{Deserialize, Serialize};

use super::draft::ListingDraft;
use super::listing::{Availability, Inventory, Pricing, ProductInfo, Sustainability};

/// Create/update listing request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationRequest {
    pub draft: ListingDraft,
    /// Attachments in upload order
    #[serde(default)]
    pub images: Vec<ImageAttachment>,
}

impl MutationRequest {
    pub fn new(draft: ListingDraft) -> Self {
        Self {
            draft,
            images: Vec::new(),
        }
    }

    pub fn with_image(mut self, image: ImageAttachment) -> Self {
        self.images.push(image);
        self
    }

    /// Metadata part sent alongside the attachments
    pub fn payload(&self) -> ListingPayload {
        ListingPayload::from(&self.draft)
    }
}

/// Binary image attachment uploaded with a mutation
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAttachment {
    pub file_name: String,
    pub content_type: String,
    #[serde(with = "base64_bytes")]
    pub bytes: Vec<u8>,
}

impl ImageAttachment {
    /// Build an attachment, guessing the content type from the file name
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self {
            file_name,
            content_type,
            bytes,
        }
    }
}

impl std::fmt::Debug for ImageAttachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageAttachment")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Nested listing body as the catalog service expects it (no id, no
/// server-managed metadata)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPayload {
    pub product_info: ProductInfo,
    pub pricing: Pricing,
    pub inventory: Inventory,
    pub sustainability: Sustainability,
    pub availability: Availability,
}

impl From<&ListingDraft> for ListingPayload {
    fn from(draft: &ListingDraft) -> Self {
        Self {
            product_info: ProductInfo {
                name: draft.name.clone(),
                description: draft.description.clone(),
                category: draft.category.clone(),
                images: draft.images.clone(),
            },
            pricing: Pricing {
                cost_price: draft.cost_price,
                selling_price: draft.selling_price,
            },
            inventory: Inventory {
                current_stock: draft.current_stock,
            },
            sustainability: Sustainability {
                recycled_material_percentage: draft.recycled_material_percentage,
            },
            availability: Availability {
                is_active: draft.is_active,
            },
        }
    }
}

mod base64_bytes {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}
