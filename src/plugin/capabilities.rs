//! Capability bundles
//!
//! A plugin is a set of optional function slots, one per [`Capability`].
//! Slots are reference counted so copying a bundle (or a whole store) never
//! copies the implementations themselves.

use crate::plugin::error::PluginResult;
use crate::plugin::types::{Capability, Kwargs};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use strum::IntoEnumIterator;

pub type ReadFn = Arc<dyn Fn(&str, &Kwargs) -> PluginResult<Value> + Send + Sync>;
pub type SaveFn = Arc<dyn Fn(&str, &Value, &Kwargs) -> PluginResult<Value> + Send + Sync>;
pub type ShowFn = Arc<dyn Fn(&Value, &Kwargs) -> PluginResult<Value> + Send + Sync>;
pub type AppShowFn = Arc<dyn Fn() -> PluginResult<Value> + Send + Sync>;

/// The capability implementations registered under one plugin name
#[derive(Clone, Default)]
pub struct Capabilities {
    description: Option<String>,
    read: Option<ReadFn>,
    save: Option<SaveFn>,
    show: Option<ShowFn>,
    app_show: Option<AppShowFn>,
}

impl Capabilities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a human-readable description
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_read<F>(mut self, read: F) -> Self
    where
        F: Fn(&str, &Kwargs) -> PluginResult<Value> + Send + Sync + 'static,
    {
        self.read = Some(Arc::new(read));
        self
    }

    pub fn with_save<F>(mut self, save: F) -> Self
    where
        F: Fn(&str, &Value, &Kwargs) -> PluginResult<Value> + Send + Sync + 'static,
    {
        self.save = Some(Arc::new(save));
        self
    }

    pub fn with_show<F>(mut self, show: F) -> Self
    where
        F: Fn(&Value, &Kwargs) -> PluginResult<Value> + Send + Sync + 'static,
    {
        self.show = Some(Arc::new(show));
        self
    }

    pub fn with_app_show<F>(mut self, app_show: F) -> Self
    where
        F: Fn() -> PluginResult<Value> + Send + Sync + 'static,
    {
        self.app_show = Some(Arc::new(app_show));
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn read_fn(&self) -> Option<&ReadFn> {
        self.read.as_ref()
    }

    pub fn save_fn(&self) -> Option<&SaveFn> {
        self.save.as_ref()
    }

    pub fn show_fn(&self) -> Option<&ShowFn> {
        self.show.as_ref()
    }

    pub fn app_show_fn(&self) -> Option<&AppShowFn> {
        self.app_show.as_ref()
    }

    pub fn provides(&self, capability: Capability) -> bool {
        match capability {
            Capability::Read => self.read.is_some(),
            Capability::Save => self.save.is_some(),
            Capability::Show => self.show.is_some(),
            Capability::AppShow => self.app_show.is_some(),
        }
    }

    /// Provided capabilities in declaration order
    pub fn provided(&self) -> Vec<Capability> {
        Capability::iter().filter(|c| self.provides(*c)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.provided().is_empty()
    }
}

impl fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capabilities")
            .field("description", &self.description)
            .field("provides", &self.provided())
            .finish()
    }
}
