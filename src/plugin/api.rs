//! Public API for the plugin system
//!
//! External modules should import from here rather than directly from the
//! internal modules.

// Registry and the process-wide store
pub use crate::plugin::registry::PluginStore;
pub use crate::plugin::store::{
    available, init, isolate, plugin_info, register, restore, snapshot, unregister, update_store,
    use_plugin, with_store, IsolationGuard, StoreSnapshot,
};

// Plugin definition
pub use crate::plugin::capabilities::{AppShowFn, Capabilities, ReadFn, SaveFn, ShowFn};
pub use crate::plugin::types::{Capability, Kwargs, PluginInfo};

// Error handling
pub use crate::plugin::error::{PluginError, PluginResult};

// Payload type carried through every capability
pub use serde_json::Value;

// Builtin plugins
pub use crate::plugin::builtin::json::PLUGIN_NAME as JSON_PLUGIN;
