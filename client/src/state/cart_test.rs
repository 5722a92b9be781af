use super::*;

#[test]
fn default_cart_is_empty_premium() {
    let cart = CartState::default();
    assert!(cart.premium());
    assert!(cart.is_empty());
    assert_eq!(cart.len(), 0);
}

#[test]
fn new_keeps_premium_flag() {
    assert!(!CartState::new(false).premium());
    assert!(CartState::new(true).premium());
}

#[test]
fn repeated_adds_keep_duplicates() {
    let mut cart = CartState::new(false);
    cart.on_add_to_cart(2234);
    cart.on_add_to_cart(2234);
    assert_eq!(cart.items(), &[2234, 2234]);
    assert_eq!(cart.len(), 2);
}

#[test]
fn adds_preserve_order() {
    let mut cart = CartState::default();
    cart.on_add_to_cart(2235);
    cart.on_add_to_cart(2234);
    cart.on_add_to_cart(2235);
    assert_eq!(cart.items(), &[2235, 2234, 2235]);
}

#[test]
fn adding_does_not_change_premium() {
    let mut cart = CartState::new(false);
    cart.on_add_to_cart(1);
    assert!(!cart.premium());
}
