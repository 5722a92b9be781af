//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `product_display` owns the product card and hosts `product_tabs`, which in
//! turn mounts the four panels. Components read shared objects (the event
//! relay, the cart) from Leptos context.

pub mod details_panel;
pub mod product_display;
pub mod product_tabs;
pub mod review_form;
pub mod review_list;
pub mod shipping_panel;
