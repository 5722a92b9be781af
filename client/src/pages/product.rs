//! Storefront page: cart summary plus the product card.
//!
//! The page is the root of the component tree. It holds the cart and the
//! premium flag (via context) and receives add-to-cart notifications from
//! the product display.

use leptos::prelude::*;

use crate::components::product_display::ProductDisplay;
use crate::state::cart::CartState;
use crate::state::catalog::Catalog;

#[component]
pub fn ProductPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let catalog = expect_context::<Catalog>();

    let premium = cart.with_untracked(CartState::premium);
    let on_add_to_cart = Callback::new(move |variant_id: u32| {
        cart.update(|c| c.on_add_to_cart(variant_id));
    });
    let cart_label = move || format!("Cart({})", cart.with(CartState::len));

    view! {
        <div class="nav-bar"></div>
        <div class="cart">
            <p>{cart_label}</p>
        </div>
        <ProductDisplay catalog=catalog premium=premium on_add_to_cart=on_add_to_cart/>
    }
    .into_any()
}
