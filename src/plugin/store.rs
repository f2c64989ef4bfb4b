//! Process-wide plugin store
//!
//! A single [`PluginStore`] behind an `RwLock`, created on first use with the
//! built-in plugins registered. Resolution clones the selected function slot
//! and releases the lock before the plugin runs, so plugins may call back into
//! the registry.

use crate::plugin::builtin::api::get_all_builtin_plugins;
use crate::plugin::capabilities::Capabilities;
use crate::plugin::error::{PluginError, PluginResult};
use crate::plugin::registry::PluginStore;
use crate::plugin::types::{Capability, PluginInfo};
use std::sync::{OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

static PLUGIN_STORE: OnceLock<RwLock<PluginStore>> = OnceLock::new();

fn global() -> &'static RwLock<PluginStore> {
    PLUGIN_STORE.get_or_init(|| RwLock::new(builtin_store()))
}

fn builtin_store() -> PluginStore {
    let mut store = PluginStore::new();
    for (name, capabilities) in get_all_builtin_plugins() {
        log::trace!("Registering builtin plugin '{}'", name);
        store.register(name, capabilities);
    }
    store
}

fn poisoned(access: &str, detail: String) -> PluginError {
    PluginError::Generic {
        message: format!(
            "Internal synchronisation error (plugin store {} lock poisoned): {}",
            access, detail
        ),
    }
}

fn read_store() -> PluginResult<RwLockReadGuard<'static, PluginStore>> {
    global()
        .read()
        .map_err(|e| poisoned("read", e.to_string()))
}

fn write_store() -> PluginResult<RwLockWriteGuard<'static, PluginStore>> {
    global()
        .write()
        .map_err(|e| poisoned("write", e.to_string()))
}

/// Reset the store to the built-in plugins only
pub fn init() -> PluginResult<()> {
    *write_store()? = builtin_store();
    log::debug!("Plugin store initialised");
    Ok(())
}

/// Insert or overwrite the plugin `name` with exactly `capabilities`
pub fn register(name: impl Into<String>, capabilities: Capabilities) -> PluginResult<()> {
    let name = name.into();
    let provided = capabilities.provided();

    if write_store()?.register(name.clone(), capabilities).is_some() {
        log::info!("Plugin '{}' re-registered with {:?}", name, provided);
    } else {
        log::debug!("Plugin '{}' registered with {:?}", name, provided);
    }
    Ok(())
}

pub fn unregister(name: &str) -> PluginResult<()> {
    write_store()?.unregister(name)?;
    log::debug!("Plugin '{}' unregistered", name);
    Ok(())
}

/// See [`PluginStore::use_plugin`]
pub fn use_plugin(name: &str, capability: Option<Capability>) -> PluginResult<()> {
    write_store()?.use_plugin(name, capability)
}

pub fn available() -> PluginResult<Vec<PluginInfo>> {
    Ok(read_store()?.available())
}

pub fn plugin_info(name: &str) -> PluginResult<PluginInfo> {
    read_store()?.plugin_info(name)
}

/// Run `f` against the current store
pub fn with_store<R>(f: impl FnOnce(&PluginStore) -> R) -> PluginResult<R> {
    let store = read_store()?;
    Ok(f(&store))
}

/// Run `f` against the current store with write access
pub fn update_store<R>(f: impl FnOnce(&mut PluginStore) -> R) -> PluginResult<R> {
    let mut store = write_store()?;
    Ok(f(&mut store))
}

/// Resolve a plugin and extract one function slot from it
///
/// The lock is released before returning.
pub(crate) fn resolve_slot<F>(
    plugin: Option<&str>,
    capability: Capability,
    slot: impl FnOnce(&Capabilities) -> Option<F>,
) -> PluginResult<(String, F)> {
    let store = read_store()?;
    let (name, capabilities) = store.resolve(plugin, capability)?;

    let function = slot(capabilities).ok_or_else(|| PluginError::CapabilityNotSupported {
        plugin_name: name.to_string(),
        capability,
    })?;
    Ok((name.to_string(), function))
}

/// A full copy of the store taken by [`snapshot`]
#[derive(Debug, Clone)]
pub struct StoreSnapshot {
    store: PluginStore,
}

impl StoreSnapshot {
    pub fn plugin_names(&self) -> Vec<String> {
        self.store.plugin_names()
    }
}

pub fn snapshot() -> PluginResult<StoreSnapshot> {
    Ok(StoreSnapshot {
        store: read_store()?.clone(),
    })
}

/// Overwrite the store with a previous snapshot
pub fn restore(snapshot: StoreSnapshot) -> PluginResult<()> {
    *write_store()? = snapshot.store;
    log::debug!("Plugin store restored from snapshot");
    Ok(())
}

/// Restores the snapshot taken by [`isolate`] when dropped
#[must_use = "the store is restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct IsolationGuard {
    snapshot: Option<StoreSnapshot>,
}

impl Drop for IsolationGuard {
    fn drop(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            if let Err(e) = restore(snapshot) {
                log::error!("Failed to restore plugin store: {}", e);
            }
        }
    }
}

/// Snapshot the store now and restore it when the guard goes out of scope
pub fn isolate() -> PluginResult<IsolationGuard> {
    Ok(IsolationGuard {
        snapshot: Some(snapshot()?),
    })
}
