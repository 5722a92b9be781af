//! # client
//!
//! Leptos + WASM product display widget: a product card with variant
//! swatches, a tabbed panel (reviews, review form, shipping, details), and a
//! cart counter.
//!
//! This crate contains pages, components, plain state models, and the
//! in-process event relay that carries submitted reviews from the form to
//! the product card.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: wire up logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::console_warn(&format!("console logger unavailable: {e}"));
    }
    leptos::mount::hydrate_body(app::App);
}
