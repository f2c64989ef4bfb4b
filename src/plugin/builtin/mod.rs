//! Built-in Plugin Implementations
//!
//! Plugins compiled into the crate and registered in every fresh store.

pub mod api;
pub mod json;
