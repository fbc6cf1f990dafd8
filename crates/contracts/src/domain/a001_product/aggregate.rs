use anyhow::Context;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

// ============================================================================
// Aggregate
// ============================================================================

/// Catalog entry as published in `products.json`.
///
/// Field names follow the JSON file; a renamed field in the file silently
/// falls back to the default here, so the optional ones stay `Option`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Opaque lookup key, not necessarily numeric
    pub id: String,

    pub name: String,

    /// Pre-formatted for display, never parsed
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: String,

    /// Primary image path
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,

    /// Gallery images in display order
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,

    /// "men", "women", ... (open set)
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,

    #[serde(rename = "new", default, deserialize_with = "null_as_default")]
    pub is_new: bool,

    #[serde(rename = "bestSeller", default, deserialize_with = "null_as_default")]
    pub best_seller: bool,

    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub materials: Option<String>,
    #[serde(default)]
    pub sizes: Option<String>,
    #[serde(default)]
    pub colorways: Option<String>,
    #[serde(default)]
    pub care: Option<String>,
    #[serde(default)]
    pub lead_time: Option<String>,
    #[serde(default)]
    pub moq: Option<String>,
}

impl Product {
    /// Minimal product, used by fixtures and as a builder base.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: String::new(),
            image: String::new(),
            images: Vec::new(),
            category: String::new(),
            is_new: false,
            best_seller: false,
            description: None,
            materials: None,
            sizes: None,
            colorways: None,
            care: None,
            lead_time: None,
            moq: None,
        }
    }

    /// Image shown first on the detail page: `image`, else the first gallery entry.
    pub fn main_image(&self) -> &str {
        if !self.image.trim().is_empty() {
            return &self.image;
        }
        self.images.first().map(String::as_str).unwrap_or("")
    }
}

/// `null` in the payload decodes like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Collection helpers
// ============================================================================

/// Parse the catalog payload (a JSON array of products).
pub fn parse_catalog(payload: &str) -> anyhow::Result<Vec<Product>> {
    serde_json::from_str::<Vec<Product>>(payload).context("products.json is not a product array")
}

/// First product with the given id, in source order.
pub fn find_by_id<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.id == id)
}

/// Ids that occur more than once, each reported once in order of first repeat.
pub fn duplicate_ids(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for product in products {
        if !seen.insert(product.id.as_str()) && reported.insert(product.id.as_str()) {
            duplicates.push(product.id.clone());
        }
    }

    duplicates
}
