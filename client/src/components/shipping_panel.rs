//! Delivery options and prices for the shopper's membership tier.

use leptos::prelude::*;

use crate::util::pricing::{ShippingTier, shipping_price};

#[component]
pub fn ShippingPanel(premium: bool) -> impl IntoView {
    let options = ShippingTier::ALL
        .into_iter()
        .map(|tier| view! { <li>{format!("{} - {}", tier.label(), shipping_price(premium, tier))}</li> })
        .collect::<Vec<_>>();

    view! {
        <h3>"Shipping Information"</h3>
        <div class="shipping-info">
            <p><strong>"Delivery Options:"</strong></p>
            <ul>{options}</ul>
        </div>
    }
    .into_any()
}
