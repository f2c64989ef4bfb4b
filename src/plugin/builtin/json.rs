//! JSON plugin
//!
//! A debugging backend: arrays are stored as JSON documents and "shown" by
//! printing them to stdout. Keyword arguments it understands:
//! - `save`: `compact` (bool) writes a single line instead of pretty JSON
//! - `show`: `title` (string) printed above the array

use crate::builtin;
use crate::plugin::capabilities::Capabilities;
use crate::plugin::error::{PluginError, PluginResult};
use crate::plugin::types::Kwargs;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

pub const PLUGIN_NAME: &str = "json";

builtin!(PLUGIN_NAME, capabilities);

pub fn capabilities() -> Capabilities {
    Capabilities::new()
        .describe("Reads and writes arrays as JSON documents, shows them on stdout")
        .with_read(read)
        .with_save(save)
        .with_show(show)
        .with_app_show(app_show)
}

fn execution_error(operation: &str, cause: impl std::fmt::Display) -> PluginError {
    PluginError::Execution {
        plugin_name: PLUGIN_NAME.to_string(),
        operation: operation.to_string(),
        cause: cause.to_string(),
    }
}

fn read(filename: &str, _kwargs: &Kwargs) -> PluginResult<Value> {
    let file = File::open(filename).map_err(|e| PluginError::io("read", filename, e))?;

    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| execution_error("read", format!("{}: {}", filename, e)))
}

fn save(filename: &str, array: &Value, kwargs: &Kwargs) -> PluginResult<Value> {
    let compact = kwargs
        .get("compact")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let file = File::create(filename).map_err(|e| PluginError::io("save", filename, e))?;
    let mut writer = BufWriter::new(file);

    let written = if compact {
        serde_json::to_writer(&mut writer, array)
    } else {
        serde_json::to_writer_pretty(&mut writer, array)
    };
    written.map_err(|e| execution_error("save", e))?;

    writer
        .write_all(b"\n")
        .and_then(|_| writer.flush())
        .map_err(|e| PluginError::io("save", filename, e))?;

    log::debug!("Saved array to '{}'", filename);
    Ok(Value::Null)
}

/// Text printed by `show`
pub fn render(array: &Value, kwargs: &Kwargs, use_color: bool) -> PluginResult<String> {
    use colored::Colorize;

    let body = serde_json::to_string_pretty(array).map_err(|e| execution_error("show", e))?;

    match kwargs.get("title").and_then(Value::as_str) {
        Some(title) if use_color => Ok(format!("{}\n{}", title.bold(), body)),
        Some(title) => Ok(format!("{}\n{}", title, body)),
        None => Ok(body),
    }
}

fn show(array: &Value, kwargs: &Kwargs) -> PluginResult<Value> {
    let use_color = colored::control::SHOULD_COLORIZE.should_colorize();
    let text = render(array, kwargs, use_color)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", text)
        .and_then(|_| stdout.flush())
        .map_err(|e| PluginError::io("show", "<stdout>", e))?;
    Ok(Value::Null)
}

// show() writes straight to stdout; nothing is left pending
fn app_show() -> PluginResult<Value> {
    Ok(Value::Null)
}
