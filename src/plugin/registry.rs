//! Plugin Registry
//!
//! Maps plugin names to their capability bundles and resolves which plugin
//! serves a request.
//!
//! Default selection, used when the caller names no plugin:
//! 1. the preferred plugin for the capability (see [`PluginStore::use_plugin`]),
//!    if it still provides it;
//! 2. otherwise the earliest-registered plugin that provides it.

use crate::plugin::capabilities::Capabilities;
use crate::plugin::error::{PluginError, PluginResult};
use crate::plugin::types::{Capability, PluginInfo};
use std::collections::HashMap;
use strum::IntoEnumIterator;

/// Mapping from plugin name to capability implementations
#[derive(Clone, Default)]
pub struct PluginStore {
    /// Map of plugin name to its capabilities
    plugins: HashMap<String, Capabilities>,

    /// Plugin names in first-registration order
    order: Vec<String>,

    /// Preferred plugin per capability
    preferred: HashMap<Capability, String>,
}

impl std::fmt::Debug for PluginStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginStore")
            .field("plugins", &self.order)
            .field("preferred", &self.preferred)
            .finish()
    }
}

impl PluginStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry for `name`
    ///
    /// Returns the capabilities previously registered under that name. An
    /// overwritten plugin keeps its place in registration order.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        capabilities: Capabilities,
    ) -> Option<Capabilities> {
        let name = name.into();
        let previous = self.plugins.insert(name.clone(), capabilities);
        if previous.is_none() {
            self.order.push(name);
        } else {
            for capability in self.stale_preferences(&name) {
                log::warn!(
                    "Plugin '{}' no longer provides '{}' but is still preferred for it",
                    name,
                    capability
                );
            }
        }
        previous
    }

    /// Capabilities for which `name` is preferred but no longer provided
    pub fn stale_preferences(&self, name: &str) -> Vec<Capability> {
        let provides = |capability: Capability| {
            self.plugins
                .get(name)
                .is_some_and(|capabilities| capabilities.provides(capability))
        };

        Capability::iter()
            .filter(|capability| self.preferred(*capability) == Some(name))
            .filter(|capability| !provides(*capability))
            .collect()
    }

    /// Remove a plugin and any preference that points at it
    pub fn unregister(&mut self, name: &str) -> PluginResult<Capabilities> {
        let removed = self
            .plugins
            .remove(name)
            .ok_or_else(|| PluginError::PluginNotFound {
                plugin_name: name.to_string(),
            })?;

        self.order.retain(|n| n != name);
        self.preferred.retain(|_, n| n != name);
        Ok(removed)
    }

    pub fn get(&self, name: &str) -> Option<&Capabilities> {
        self.plugins.get(name)
    }

    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.contains_key(name)
    }

    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    /// Plugin names in registration order
    pub fn plugin_names(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Names of plugins providing `capability`, in registration order
    pub fn providers(&self, capability: Capability) -> Vec<String> {
        self.order
            .iter()
            .filter(|name| {
                self.plugins
                    .get(name.as_str())
                    .is_some_and(|c| c.provides(capability))
            })
            .cloned()
            .collect()
    }

    pub fn plugin_info(&self, name: &str) -> PluginResult<PluginInfo> {
        let capabilities = self.get(name).ok_or_else(|| PluginError::PluginNotFound {
            plugin_name: name.to_string(),
        })?;

        Ok(PluginInfo {
            name: name.to_string(),
            description: capabilities.description().map(str::to_string),
            provides: capabilities.provided(),
        })
    }

    /// Metadata for every plugin, in registration order
    pub fn available(&self) -> Vec<PluginInfo> {
        self.order
            .iter()
            .filter_map(|name| self.plugin_info(name).ok())
            .collect()
    }

    /// Make `name` the default for `capability`, or for every capability it
    /// provides when `capability` is `None`
    pub fn use_plugin(&mut self, name: &str, capability: Option<Capability>) -> PluginResult<()> {
        let capabilities = self.get(name).ok_or_else(|| PluginError::PluginNotFound {
            plugin_name: name.to_string(),
        })?;

        let targets = match capability {
            Some(capability) if !capabilities.provides(capability) => {
                return Err(PluginError::CapabilityNotSupported {
                    plugin_name: name.to_string(),
                    capability,
                });
            }
            Some(capability) => vec![capability],
            None => capabilities.provided(),
        };

        for capability in targets {
            log::debug!("Preferred plugin for '{}' set to '{}'", capability, name);
            self.preferred.insert(capability, name.to_string());
        }
        Ok(())
    }

    pub fn preferred(&self, capability: Capability) -> Option<&str> {
        self.preferred.get(&capability).map(String::as_str)
    }

    /// Resolve the plugin that serves `capability`
    ///
    /// An explicit `plugin` name is looked up exactly; otherwise the default
    /// selection policy applies.
    pub fn resolve(
        &self,
        plugin: Option<&str>,
        capability: Capability,
    ) -> PluginResult<(&str, &Capabilities)> {
        if let Some(name) = plugin {
            let (name, capabilities) =
                self.plugins
                    .get_key_value(name)
                    .ok_or_else(|| PluginError::PluginNotFound {
                        plugin_name: name.to_string(),
                    })?;

            if !capabilities.provides(capability) {
                return Err(PluginError::CapabilityNotSupported {
                    plugin_name: name.clone(),
                    capability,
                });
            }
            return Ok((name.as_str(), capabilities));
        }

        if let Some(name) = self.preferred.get(&capability) {
            match self.plugins.get_key_value(name.as_str()) {
                Some((name, capabilities)) if capabilities.provides(capability) => {
                    return Ok((name.as_str(), capabilities));
                }
                _ => log::debug!(
                    "Preferred plugin '{}' no longer provides '{}', falling back",
                    name,
                    capability
                ),
            }
        }

        self.order
            .iter()
            .filter_map(|name| self.plugins.get_key_value(name.as_str()))
            .find(|(_, capabilities)| capabilities.provides(capability))
            .map(|(name, capabilities)| (name.as_str(), capabilities))
            .ok_or(PluginError::NoPluginAvailable { capability })
    }

    /// Remove all plugins and preferences
    pub fn clear(&mut self) {
        self.plugins.clear();
        self.order.clear();
        self.preferred.clear();
    }
}
