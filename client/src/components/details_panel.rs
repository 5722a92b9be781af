//! Product facts: name, brand, available colors, and materials.

use leptos::prelude::*;

use crate::state::catalog::Variant;

#[component]
pub fn DetailsPanel(product: String, brand: String, details: Vec<String>, variants: Vec<Variant>) -> impl IntoView {
    let swatches = variants
        .into_iter()
        .map(|variant| {
            let title = variant.color.clone();
            view! { <div class="color-swatch" style:background-color=variant.color title=title></div> }
        })
        .collect::<Vec<_>>();

    let materials = details
        .into_iter()
        .map(|detail| view! { <li>{detail}</li> })
        .collect::<Vec<_>>();

    view! {
        <h3>"Product Details"</h3>
        <div class="product-details">
            <p><strong>"Product:"</strong> " " {product}</p>
            <p><strong>"Brand:"</strong> " " {brand}</p>
            <p><strong>"Available Colors:"</strong></p>
            <div class="color-swatches">{swatches}</div>
            <p><strong>"Materials:"</strong></p>
            <ul>{materials}</ul>
        </div>
    }
    .into_any()
}
