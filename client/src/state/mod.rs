//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`catalog`, `product`, `review`, `cart`, `ui`)
//! and kept free of reactive types, so components wrap these models in
//! signals and tests exercise them directly.

pub mod cart;
pub mod catalog;
pub mod product;
pub mod review;
pub mod ui;
