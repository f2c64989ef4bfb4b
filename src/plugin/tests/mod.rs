//! Test modules for the plugin system
//!
//! Error formatting, the process-wide store, and shared mock plugins.

pub(crate) mod utils;
