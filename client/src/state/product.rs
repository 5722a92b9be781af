//! Product card state: the catalog, the selected variant, and posted reviews.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use crate::state::catalog::{Catalog, Variant};
use crate::state::review::Review;

/// State owned by the product display.
///
/// `selected` always indexes into `catalog.variants`; the catalog guarantees
/// at least one variant.
#[derive(Clone, Debug)]
pub struct ProductState {
    catalog: Catalog,
    selected: usize,
    reviews: Vec<Review>,
}

impl ProductState {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog, selected: 0, reviews: Vec::new() }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Brand and product name, e.g. "Vue Mastery Socks".
    pub fn title(&self) -> String {
        format!("{} {}", self.catalog.brand, self.catalog.product)
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn current_variant(&self) -> &Variant {
        &self.catalog.variants[self.selected]
    }

    pub fn current_image(&self) -> &str {
        &self.current_variant().image
    }

    pub fn in_stock(&self) -> bool {
        self.current_variant().quantity > 0
    }

    /// Select the variant at `index`.
    ///
    /// Callers derive indices from the variant list itself; an out-of-range
    /// index is a bug.
    pub fn select_variant(&mut self, index: usize) {
        debug_assert!(
            index < self.catalog.variants.len(),
            "variant index {index} out of range"
        );
        log::debug!("variant selected: {index}");
        self.selected = index;
    }

    /// Variant id to send to the cart, or `None` while out of stock.
    pub fn add_to_cart(&self) -> Option<u32> {
        self.in_stock().then(|| self.current_variant().id)
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Append a review delivered through the relay.
    pub fn on_review_submitted(&mut self, review: Review) {
        self.reviews.push(review);
    }
}
