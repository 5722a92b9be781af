use super::*;

#[test]
fn shipping_label_is_free_for_premium() {
    assert_eq!(shipping_label(true), "Free");
}

#[test]
fn shipping_label_is_flat_rate_for_standard_members() {
    assert_eq!(shipping_label(false), "2.99");
}

#[test]
fn shipping_label_matches_standard_tier() {
    for premium in [true, false] {
        assert_eq!(shipping_label(premium), shipping_price(premium, ShippingTier::Standard));
    }
}

#[test]
fn premium_prices_by_tier() {
    assert_eq!(shipping_price(true, ShippingTier::Express), "$4.99");
    assert_eq!(shipping_price(true, ShippingTier::NextDay), "$9.99");
}

#[test]
fn standard_member_prices_by_tier() {
    assert_eq!(shipping_price(false, ShippingTier::Express), "$7.99");
    assert_eq!(shipping_price(false, ShippingTier::NextDay), "$14.99");
}

#[test]
fn tiers_listed_fastest_last() {
    assert_eq!(
        ShippingTier::ALL,
        [ShippingTier::Standard, ShippingTier::Express, ShippingTier::NextDay]
    );
}

#[test]
fn tier_labels_describe_delivery_window() {
    assert_eq!(ShippingTier::Standard.label(), "Standard Shipping (3-5 business days)");
    assert_eq!(ShippingTier::Express.label(), "Express Shipping (1-2 business days)");
    assert_eq!(ShippingTier::NextDay.label(), "Next Day Delivery");
}
