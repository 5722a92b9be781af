//! Root-level shopper state: membership tier and cart contents.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

/// Membership tier used when the storefront boots.
pub const DEFAULT_PREMIUM: bool = true;

/// Top-level state held by the storefront root.
///
/// `premium` is fixed at construction. The cart is an ordered list of variant
/// ids; quantity is represented by repetition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartState {
    premium: bool,
    items: Vec<u32>,
}

impl CartState {
    pub fn new(premium: bool) -> Self {
        Self { premium, items: Vec::new() }
    }

    pub fn premium(&self) -> bool {
        self.premium
    }

    pub fn items(&self) -> &[u32] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a variant id. Duplicates are kept.
    pub fn on_add_to_cart(&mut self, variant_id: u32) {
        self.items.push(variant_id);
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new(DEFAULT_PREMIUM)
    }
}
