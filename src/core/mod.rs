//! Core services shared by the library and the CLI

pub mod error_handling;
pub mod logging;
