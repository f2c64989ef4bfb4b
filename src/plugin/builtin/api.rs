//! Compile-time registration of builtin plugins
//!
//! Builtin plugins call the `builtin!` macro at module level; the global
//! store picks them up through `inventory` when it is (re)initialised.

use crate::plugin::capabilities::Capabilities;

/// Entry for a builtin plugin
pub struct BuiltinPluginEntry {
    pub name: &'static str,
    pub factory: fn() -> Capabilities,
}

inventory::collect!(BuiltinPluginEntry);

/// Register a builtin plugin: `builtin!("name", factory_fn);`
#[macro_export]
macro_rules! builtin {
    ($name:expr, $factory:expr) => {
        inventory::submit!($crate::plugin::builtin::api::BuiltinPluginEntry {
            name: $name,
            factory: $factory,
        });
    };
}

/// All builtin plugins, sorted by name
pub fn get_all_builtin_plugins() -> Vec<(&'static str, Capabilities)> {
    let mut plugins: Vec<(&'static str, Capabilities)> = inventory::iter::<BuiltinPluginEntry>()
        .map(|entry| (entry.name, (entry.factory)()))
        .collect();
    plugins.sort_by_key(|(name, _)| *name);
    plugins
}
