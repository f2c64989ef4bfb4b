//! TOML configuration file loading
//!
//! The file is optional unless given explicitly. It carries logging options
//! and, per capability, an ordered list of preferred plugins.

use crate::core::error_handling::ContextualError;
use crate::core::logging::LogSettings;
use crate::plugin::api::{Capability, PluginStore};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("The specified configuration file does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read configuration file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error in configuration file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

impl ContextualError for ConfigError {
    fn is_user_actionable(&self) -> bool {
        matches!(self, ConfigError::NotFound { .. } | ConfigError::Parse { .. })
    }

    fn user_message(&self) -> Option<String> {
        self.is_user_actionable().then(|| self.to_string())
    }
}

/// Contents of `imgio.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub log: LogSettings,
    pub plugins: PluginPreferences,
}

/// Preferred plugins per capability, most preferred first
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PluginPreferences {
    pub read: Vec<String>,
    pub save: Vec<String>,
    pub show: Vec<String>,
    pub app_show: Vec<String>,
}

impl PluginPreferences {
    pub fn for_capability(&self, capability: Capability) -> &[String] {
        match capability {
            Capability::Read => &self.read,
            Capability::Save => &self.save,
            Capability::Show => &self.show,
            Capability::AppShow => &self.app_show,
        }
    }

    /// Make the first usable name of each list the preferred plugin
    ///
    /// Names that are not registered, or that lack the capability, are
    /// skipped with a warning.
    pub fn apply(&self, store: &mut PluginStore) {
        for capability in Capability::iter() {
            for name in self.for_capability(capability) {
                match store.use_plugin(name, Some(capability)) {
                    Ok(()) => break,
                    Err(e) => log::warn!("Ignoring preferred '{}' plugin: {}", capability, e),
                }
            }
        }
    }
}

impl Settings {
    pub fn from_toml_str(contents: &str, origin: &Path) -> ConfigResult<Self> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load settings from `config_file`, or from the default location
    ///
    /// An explicit file must exist. A missing default file yields the
    /// default settings.
    pub fn load(config_file: Option<&Path>) -> ConfigResult<Self> {
        let path = match config_file {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                })
            }
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        Self::from_toml_str(&contents, &path)
    }
}

/// `<config dir>/Imgio/imgio.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("Imgio").join("imgio.toml"))
}
