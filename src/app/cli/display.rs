//! CLI display utilities for formatting output

use crate::plugin::api::{Capability, PluginStore};
use prettytable::{format, row, Table};

/// Plugin table for the `plugins` command
///
/// A `*` marks the capabilities a plugin currently serves by default.
pub fn render_plugin_table(store: &PluginStore) -> String {
    let plugins = store.available();
    if plugins.is_empty() {
        return "No plugins registered.\n".to_string();
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);
    table.set_titles(row!["PLUGIN", "CAPABILITIES", "DESCRIPTION"]);

    for plugin in &plugins {
        let capabilities = if plugin.provides.is_empty() {
            "-".to_string()
        } else {
            plugin
                .provides
                .iter()
                .map(|capability| mark_default(store, &plugin.name, *capability))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let description = plugin.description.as_deref().unwrap_or("-");

        table.add_row(row![plugin.name, capabilities, description]);
    }

    format!("{}\n* default for that capability\n", table)
}

fn mark_default(store: &PluginStore, name: &str, capability: Capability) -> String {
    match store.resolve(None, capability) {
        Ok((default, _)) if default == name => format!("{}*", capability),
        _ => capability.to_string(),
    }
}
