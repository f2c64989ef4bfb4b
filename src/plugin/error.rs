//! Plugin Error Handling
//!
//! Lookup failures raised while resolving a plugin, plus the error kinds
//! plugin implementations use to report their own failures.

use crate::core::error_handling::ContextualError;
use crate::plugin::types::Capability;

/// Result type alias for plugin operations
pub type PluginResult<T> = std::result::Result<T, PluginError>;

#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    /// Named plugin absent from the store
    #[error("Plugin not found: {plugin_name}")]
    PluginNotFound { plugin_name: String },

    /// Plugin exists but lacks the requested capability
    #[error("Plugin '{plugin_name}' does not support '{capability}'")]
    CapabilityNotSupported {
        plugin_name: String,
        capability: Capability,
    },

    /// No plugin was named and none provides the capability
    #[error("No plugin available for '{capability}'")]
    NoPluginAvailable { capability: Capability },

    /// Raised by a plugin implementation
    #[error("Plugin '{plugin_name}' failed during '{operation}': {cause}")]
    Execution {
        plugin_name: String,
        operation: String,
        cause: String,
    },

    #[error("I/O error during '{operation}' on '{path}': {source}")]
    Io {
        operation: String,
        path: String,
        source: std::io::Error,
    },

    #[error("{message}")]
    Generic { message: String },
}

impl PluginError {
    pub fn io(operation: &str, path: &str, source: std::io::Error) -> Self {
        PluginError::Io {
            operation: operation.to_string(),
            path: path.to_string(),
            source,
        }
    }
}

impl ContextualError for PluginError {
    fn is_user_actionable(&self) -> bool {
        matches!(
            self,
            PluginError::PluginNotFound { .. }
                | PluginError::CapabilityNotSupported { .. }
                | PluginError::NoPluginAvailable { .. }
                | PluginError::Execution { .. }
                | PluginError::Io { .. }
        )
    }

    fn user_message(&self) -> Option<String> {
        self.is_user_actionable().then(|| self.to_string())
    }
}
