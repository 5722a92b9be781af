//! Shipping price table shared by the product card and the shipping tab.
//!
//! Prices are display strings, keyed by membership and delivery tier. The
//! product card's headline shipping line is the standard tier.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

/// Delivery speeds offered in the shipping panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShippingTier {
    Standard,
    Express,
    NextDay,
}

impl ShippingTier {
    /// Tiers in the order they are listed to the shopper.
    pub const ALL: [Self; 3] = [Self::Standard, Self::Express, Self::NextDay];

    /// Human-readable tier description.
    pub fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard Shipping (3-5 business days)",
            Self::Express => "Express Shipping (1-2 business days)",
            Self::NextDay => "Next Day Delivery",
        }
    }
}

/// Price shown for `tier`, depending on premium membership.
pub fn shipping_price(premium: bool, tier: ShippingTier) -> &'static str {
    match (premium, tier) {
        (true, ShippingTier::Standard) => "Free",
        (false, ShippingTier::Standard) => "2.99",
        (true, ShippingTier::Express) => "$4.99",
        (false, ShippingTier::Express) => "$7.99",
        (true, ShippingTier::NextDay) => "$9.99",
        (false, ShippingTier::NextDay) => "$14.99",
    }
}

/// Headline shipping label on the product card.
pub fn shipping_label(premium: bool) -> &'static str {
    shipping_price(premium, ShippingTier::Standard)
}
