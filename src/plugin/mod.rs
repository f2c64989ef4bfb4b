//! Plugin System Module
//!
//! Named plugins provide image capabilities (read, save, show, app_show).
//! The store maps names to capability bundles and picks the plugin that
//! serves each façade call.

// Internal modules - all access should go through api module
pub(crate) mod builtin;
pub(crate) mod capabilities;
pub(crate) mod error;
pub(crate) mod registry;
pub(crate) mod store;
pub(crate) mod types;

// Public API module - the only public interface for the plugin system
pub mod api;

#[cfg(test)]
pub(crate) mod tests;
