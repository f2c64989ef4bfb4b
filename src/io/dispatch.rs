//! Façade functions
//!
//! Each call resolves a plugin for one capability and forwards its
//! arguments untouched. Results and errors from the plugin are returned as
//! they are.

use crate::plugin::api::{Capability, Kwargs, PluginResult, Value};
use crate::plugin::store::resolve_slot;

/// Read an image from `filename`
///
/// `plugin` names the backend; `None` uses the default for `read`.
pub fn imread(filename: &str, plugin: Option<&str>, kwargs: &Kwargs) -> PluginResult<Value> {
    let (name, read) = resolve_slot(plugin, Capability::Read, |c| c.read_fn().cloned())?;
    log::debug!("imread('{}', {}) -> plugin '{}'", filename, kwargs, name);
    read(filename, kwargs)
}

/// Save `array` to `filename`
pub fn imsave(
    filename: &str,
    array: &Value,
    plugin: Option<&str>,
    kwargs: &Kwargs,
) -> PluginResult<Value> {
    let (name, save) = resolve_slot(plugin, Capability::Save, |c| c.save_fn().cloned())?;
    log::debug!("imsave('{}', {}) -> plugin '{}'", filename, kwargs, name);
    save(filename, array, kwargs)
}

/// Display `array`
pub fn imshow(array: &Value, plugin: Option<&str>, kwargs: &Kwargs) -> PluginResult<Value> {
    let (name, show) = resolve_slot(plugin, Capability::Show, |c| c.show_fn().cloned())?;
    log::debug!("imshow({}) -> plugin '{}'", kwargs, name);
    show(array, kwargs)
}

/// Run the display loop of the named `app_show` backend, or of the default one
///
/// Resolution is independent of `imshow`; callers that need both on the
/// same backend pass the same `plugin` to each.
pub fn show(plugin: Option<&str>) -> PluginResult<Value> {
    let (name, app_show) =
        resolve_slot(plugin, Capability::AppShow, |c| c.app_show_fn().cloned())?;
    log::debug!("show() -> plugin '{}'", name);
    app_show()
}
