//! Image I/O plugin registry
//!
//! Named plugins register read/save/show implementations; the façade
//! functions in [`io`] resolve a plugin and forward each call to it.

pub mod app;
pub mod core;
pub mod io;
pub mod plugin;
