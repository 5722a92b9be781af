//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::product::ProductPage;
use crate::state::cart::{CartState, DEFAULT_PREMIUM};
use crate::state::catalog::Catalog;
use crate::util::relay::EventRelay;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Loads the product catalog, provides the shared cart and event relay, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let catalog = match Catalog::embedded() {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("product catalog failed to load: {e}");
            return view! { <p class="catalog-error">"Product information is unavailable."</p> }.into_any();
        }
    };

    // One relay and one cart for the whole page.
    provide_context(catalog);
    provide_context(RwSignal::new(CartState::new(DEFAULT_PREMIUM)));
    provide_context(EventRelay::new());

    view! {
        <Title text="Product App"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ProductPage/>
            </Routes>
        </Router>
    }
    .into_any()
}
