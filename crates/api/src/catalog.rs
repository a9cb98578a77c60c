//! Bundled perfume catalog.
//!
//! The catalog is structured content, not provider data: a JSON file loaded
//! once at startup and held in memory, served read-only by the catalog
//! routes. Nothing here talks to the hosted provider.

use std::path::Path;
use std::sync::Arc;

use compas_olfactif_core::AdminProduct;

/// Errors that can occur while loading the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate product id in catalog: {0}")]
    DuplicateProduct(String),
}

/// Catalog store that holds all products in memory.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Arc<Vec<AdminProduct>>,
}

impl CatalogStore {
    /// Load the catalog from a JSON content file.
    ///
    /// A missing file is tolerated: the service starts with an empty
    /// catalog and logs a warning, so the admin API stays available when
    /// no catalog content is deployed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed,
    /// or if two products share an id.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "catalog file not found, serving empty catalog");
            return Ok(Self {
                products: Arc::new(Vec::new()),
            });
        }

        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parse a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed JSON or duplicate product ids.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let products: Vec<AdminProduct> = serde_json::from_str(raw)?;

        let mut seen = std::collections::HashSet::new();
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateProduct(product.id.to_string()));
            }
        }

        Ok(Self {
            products: Arc::new(products),
        })
    }

    /// All products, in content-file order.
    #[must_use]
    pub fn all(&self) -> &[AdminProduct] {
        &self.products
    }

    /// Look up a product by its slug.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&AdminProduct> {
        self.products.iter().find(|p| p.id.as_str() == slug)
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "id": "boussole-ambree",
            "name": "Boussole Ambrée",
            "description": "Ambre chaud et bois de santal.",
            "top_notes": ["bergamote"],
            "heart_notes": ["ambre"],
            "base_notes": ["santal"],
            "variants": [
                {
                    "id": "boussole-ambree-50",
                    "label": "Eau de Parfum 50 ml",
                    "volume_ml": 50,
                    "price": {"amount": "85.00", "currency_code": "EUR"}
                }
            ]
        },
        {
            "id": "sillage-marin",
            "name": "Sillage Marin",
            "description": "Embruns et cèdre.",
            "variants": [
                {
                    "id": "sillage-marin-100",
                    "label": "Eau de Parfum 100 ml",
                    "volume_ml": 100,
                    "price": {"amount": "120.00", "currency_code": "EUR"},
                    "in_stock": false
                }
            ]
        }
    ]"#;

    #[test]
    fn test_from_json() {
        let store = CatalogStore::from_json(SAMPLE).unwrap();
        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_get_by_slug() {
        let store = CatalogStore::from_json(SAMPLE).unwrap();
        let product = store.get("sillage-marin").unwrap();
        assert_eq!(product.name, "Sillage Marin");
        assert!(!product.variants.first().unwrap().in_stock);

        assert!(store.get("inconnu").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let raw = r#"[
            {"id": "x", "name": "X", "description": "", "variants": []},
            {"id": "x", "name": "X encore", "description": "", "variants": []}
        ]"#;
        assert!(matches!(
            CatalogStore::from_json(raw),
            Err(CatalogError::DuplicateProduct(_))
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            CatalogStore::from_json("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_gives_empty_catalog() {
        let store = CatalogStore::load(Path::new("/nonexistent/catalog.json")).unwrap();
        assert!(store.is_empty());
    }
}
