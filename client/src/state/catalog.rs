//! Static product declaration: name, brand, details, and purchasable variants.
//!
//! DESIGN
//! ======
//! The catalog ships as JSON embedded in the crate so product copy can change
//! without touching component code. It is validated once at load time; the
//! rest of the UI relies on there being at least one variant.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

const EMBEDDED_CATALOG: &str = include_str!("../../data/product.json");

/// Error returned when a catalog document cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The document is not valid catalog JSON.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    /// The catalog declares no variants, so nothing could ever be selected.
    #[error("catalog has no variants")]
    NoVariants,
    /// Two variants share an id, which would make cart entries ambiguous.
    #[error("duplicate variant id: {0}")]
    DuplicateVariant(u32),
}

/// A purchasable configuration of the product.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub id: u32,
    pub color: String,
    /// Image path shown while this variant is selected.
    pub image: String,
    /// Units in stock; zero disables add-to-cart.
    pub quantity: u32,
}

/// The full product declaration rendered by the display and tab panels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub product: String,
    pub brand: String,
    pub alt_text: String,
    #[serde(default)]
    pub details: Vec<String>,
    pub variants: Vec<Variant>,
}

impl Catalog {
    /// Parse and validate a catalog document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the JSON is malformed, the variant list is
    /// empty, or two variants share an id.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load the catalog bundled with the crate.
    ///
    /// # Errors
    ///
    /// See [`Catalog::from_json`].
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.variants.is_empty() {
            return Err(CatalogError::NoVariants);
        }
        let mut seen = HashSet::with_capacity(self.variants.len());
        for variant in &self.variants {
            if !seen.insert(variant.id) {
                return Err(CatalogError::DuplicateVariant(variant.id));
            }
        }
        Ok(())
    }
}
