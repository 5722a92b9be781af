//! Product card: image, title, stock, variant swatches, and add-to-cart.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the selected variant and the posted reviews. Reviews arrive from the
//! review form through the shared `EventRelay`; cart additions go up to the
//! storefront root through the `on_add_to_cart` callback.

use leptos::prelude::*;

use crate::components::product_tabs::ProductTabs;
use crate::state::catalog::Catalog;
use crate::state::product::ProductState;
use crate::util::pricing::shipping_label;
use crate::util::relay::EventRelay;

/// Product card with the tab panel underneath.
#[component]
pub fn ProductDisplay(catalog: Catalog, premium: bool, on_add_to_cart: Callback<u32>) -> impl IntoView {
    let relay = expect_context::<EventRelay>();
    let product = RwSignal::new(ProductState::new(catalog.clone()));

    let subscription = relay.on_review_submitted(move |review| {
        if product.try_update(|p| p.on_review_submitted(review.clone())).is_none() {
            log::warn!("review dropped: product display already disposed");
        }
    });
    on_cleanup(move || {
        relay.unsubscribe(subscription);
    });

    let title = move || product.with(ProductState::title);
    let image = move || product.with(|p| p.current_image().to_owned());
    let in_stock = move || product.with(ProductState::in_stock);
    let reviews = Signal::derive(move || product.with(|p| p.reviews().to_vec()));
    let shipping = shipping_label(premium);

    let add_to_cart = move |_| {
        let Some(variant_id) = product.with_untracked(ProductState::add_to_cart) else {
            return;
        };
        log::info!("add to cart: variant {variant_id}");
        on_add_to_cart.run(variant_id);
    };

    let details = catalog
        .details
        .iter()
        .map(|detail| view! { <li>{detail.clone()}</li> })
        .collect::<Vec<_>>();

    let swatches = catalog
        .variants
        .iter()
        .enumerate()
        .map(|(index, variant)| {
            let color = variant.color.clone();
            view! {
                <div
                    class="color-box"
                    style:background-color=color
                    on:mouseover=move |_| product.update(|p| p.select_variant(index))
                ></div>
            }
        })
        .collect::<Vec<_>>();

    let Catalog { product: product_name, brand, alt_text, details: detail_list, variants } = catalog;

    view! {
        <div class="product">
            <div class="product-image">
                <img src=image alt=alt_text/>
            </div>

            <div class="product-info">
                <h1>{title}</h1>
                <Show when=in_stock fallback=|| view! { <p>"Out of Stock"</p> }>
                    <p>"In stock"</p>
                </Show>
                <ul>{details}</ul>
                <p>"Shipping: " {shipping}</p>
                {swatches}
                <button
                    on:click=add_to_cart
                    disabled=move || !in_stock()
                    class:disabledButton=move || !in_stock()
                >
                    "Add to cart"
                </button>
            </div>

            <ProductTabs
                reviews=reviews
                premium=premium
                details=detail_list
                product=product_name
                brand=brand
                variants=variants
            />
        </div>
    }
    .into_any()
}
