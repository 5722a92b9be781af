//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `pricing` holds the one shipping table both product views read, and
//! `relay` carries events between components that do not own each other.

pub mod pricing;
pub mod relay;
