//! Catalog data shapes.
//!
//! `AdminProduct` and `ProductVariant` describe the perfume catalog as it is
//! presented to clients and in the admin views. These are data shapes only:
//! the catalog is bundled content served read-only, never persisted or
//! mutated through the hosted provider.

use serde::{Deserialize, Serialize};

use crate::types::id::{ProductId, VariantId};
use crate::types::price::Price;

/// A perfume in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminProduct {
    /// Catalog identifier (URL slug).
    pub id: ProductId,
    /// Display name, e.g. "Boussole Ambrée".
    pub name: String,
    /// Short marketing description.
    pub description: String,
    /// Olfactory pyramid: top notes.
    #[serde(default)]
    pub top_notes: Vec<String>,
    /// Olfactory pyramid: heart notes.
    #[serde(default)]
    pub heart_notes: Vec<String>,
    /// Olfactory pyramid: base notes.
    #[serde(default)]
    pub base_notes: Vec<String>,
    /// Product image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Purchasable variants (bottle sizes).
    pub variants: Vec<ProductVariant>,
}

impl AdminProduct {
    /// Look up a variant by its ID.
    #[must_use]
    pub fn variant(&self, id: &VariantId) -> Option<&ProductVariant> {
        self.variants.iter().find(|v| &v.id == id)
    }
}

/// A purchasable variant of a perfume (a bottle size).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductVariant {
    /// Variant identifier within the catalog.
    pub id: VariantId,
    /// Display label, e.g. "Eau de Parfum 50 ml".
    pub label: String,
    /// Bottle volume in millilitres.
    pub volume_ml: u32,
    /// Unit price.
    pub price: Price,
    /// Whether the variant is currently orderable.
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

const fn default_in_stock() -> bool {
    true
}
