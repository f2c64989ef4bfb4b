//! Type definitions for the plugin system
//!
//! Capability names, the keyword arguments forwarded to plugins, and the
//! metadata returned by registry queries.

use serde_json::Value;
use std::fmt;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Operation a plugin may implement
///
/// Canonical names are snake_case (`read`, `save`, `show`, `app_show`) for
/// both parsing and display.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumString, Display, AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Capability {
    /// `read(filename, kwargs)`
    Read,
    /// `save(filename, array, kwargs)`
    Save,
    /// `show(array, kwargs)`
    Show,
    /// `app_show()`: run the backend's display loop after `show` calls
    AppShow,
}

/// Keyword arguments forwarded verbatim to a plugin
///
/// Keys keep their insertion order. Inserting an existing key replaces its
/// value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Kwargs {
    entries: Vec<(String, Value)>,
}

impl Kwargs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Kwargs::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key`, returning the value it replaced
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Kwargs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut kwargs = Kwargs::new();
        for (key, value) in iter {
            kwargs.insert(key, value);
        }
        kwargs
    }
}

// key=value pairs, as they would appear in a call expression
impl fmt::Display for Kwargs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (key, value)) in self.entries.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}

/// Plugin metadata returned by registry queries
#[derive(Debug, Clone, PartialEq)]
pub struct PluginInfo {
    pub name: String,
    pub description: Option<String>,
    pub provides: Vec<Capability>,
}
