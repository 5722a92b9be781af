//! Tab strip with the reviews, review form, shipping, and details panels.
//!
//! ARCHITECTURE
//! ============
//! All four panels stay mounted and only the active one is shown, so a
//! half-written review survives a detour to the shipping tab. Panel content
//! is derived from props; the only local state is the active tab.

#[cfg(test)]
#[path = "product_tabs_test.rs"]
mod product_tabs_test;

use leptos::prelude::*;

use crate::components::details_panel::DetailsPanel;
use crate::components::review_form::ReviewForm;
use crate::components::review_list::ReviewList;
use crate::components::shipping_panel::ShippingPanel;
use crate::state::catalog::Variant;
use crate::state::review::Review;
use crate::state::ui::{ProductTab, TabsState};

/// Whether the panel for `tab` carries the `hidden` attribute.
pub fn panel_hidden(state: &TabsState, tab: ProductTab) -> bool {
    !state.is_visible(tab)
}

/// Tabbed panel rendered under the product card.
#[component]
pub fn ProductTabs(
    #[prop(optional, into)] reviews: Option<Signal<Vec<Review>>>,
    premium: bool,
    details: Vec<String>,
    product: String,
    brand: String,
    variants: Vec<Variant>,
) -> impl IntoView {
    let tabs = RwSignal::new(TabsState::default());
    let reviews = Signal::derive(move || reviews.map(|r| r.get()).unwrap_or_default());
    let hidden = move |tab: ProductTab| move || tabs.with(|t| panel_hidden(t, tab));

    let strip = ProductTab::ALL
        .into_iter()
        .map(|tab| {
            view! {
                <span
                    class="tab"
                    class:activeTab=move || tabs.with(|t| t.is_visible(tab))
                    on:click=move |_| tabs.update(|t| t.select_tab(tab))
                >
                    {tab.label()}
                </span>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="product-tabs">
            <div class="product-tabs__strip">{strip}</div>

            <div class="tab-content" hidden=hidden(ProductTab::Reviews)>
                <ReviewList reviews=reviews/>
            </div>

            <div class="tab-content" hidden=hidden(ProductTab::MakeReview)>
                <ReviewForm/>
            </div>

            <div class="tab-content" hidden=hidden(ProductTab::Shipping)>
                <ShippingPanel premium=premium/>
            </div>

            <div class="tab-content" hidden=hidden(ProductTab::Details)>
                <DetailsPanel product=product brand=brand details=details variants=variants/>
            </div>
        </div>
    }
    .into_any()
}
