//! Command-line arguments
//!
//! Global options configure logging and the configuration file; each
//! subcommand maps onto one façade call.

use crate::core::logging::{LogFormat, LogSettings};
use crate::plugin::api::{Kwargs, Value};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "imgio")]
#[command(about = "Read, save and show images through pluggable backends")]
#[command(version)]
#[command(after_help = " * can be specified multiple times")]
pub struct Args {
    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", global = true, value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log file path
    #[arg(short = 'f', long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Log output format
    #[arg(short = 'o', long = "log-format", value_name = "FORMAT", global = true)]
    pub log_format: Option<LogFormat>,

    /// Force coloured output
    #[arg(long = "color", global = true, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable coloured output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List registered plugins and their capabilities
    Plugins,

    /// Read an image and print the result as JSON
    Read {
        /// File to read
        file: String,

        #[command(flatten)]
        target: PluginTarget,
    },

    /// Save an array (given as JSON) to a file
    Save {
        /// Destination file
        file: String,

        /// Array as a JSON document, e.g. '[[0, 1], [1, 0]]'
        #[arg(value_name = "ARRAY_JSON", value_parser = parse_json_value)]
        array: Value,

        #[command(flatten)]
        target: PluginTarget,
    },

    /// Show an array (given as JSON)
    Show {
        /// Array as a JSON document
        #[arg(value_name = "ARRAY_JSON", value_parser = parse_json_value)]
        array: Value,

        #[command(flatten)]
        target: PluginTarget,
    },
}

/// Plugin selection and forwarded keyword arguments
#[derive(clap::Args, Debug, Clone, Default, PartialEq)]
pub struct PluginTarget {
    /// Plugin to use (default: preferred plugin, else first registered provider)
    #[arg(short = 'p', long = "plugin", value_name = "NAME")]
    pub plugin: Option<String>,

    /// Keyword argument forwarded to the plugin; VALUE is JSON or a plain string
    #[arg(short = 'a', long = "arg", value_name = "KEY=VALUE", value_parser = parse_kwarg, action = ArgAction::Append)]
    pub args: Vec<(String, Value)>,
}

impl PluginTarget {
    pub fn kwargs(&self) -> Kwargs {
        self.args.iter().cloned().collect()
    }
}

impl Args {
    /// Logging options given on the command line
    pub fn log_overrides(&self) -> LogSettings {
        LogSettings {
            level: self.log_level.clone(),
            format: self.log_format,
            file: self.log_file.clone(),
        }
    }

    /// `None` leaves the decision to terminal detection
    pub fn color_override(&self) -> Option<bool> {
        match (self.color, self.no_color) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Parse `KEY=VALUE`; VALUE is read as JSON, falling back to a string
pub fn parse_kwarg(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("Invalid argument '{}': expected KEY=VALUE", raw))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("Invalid argument '{}': empty key", raw));
    }

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

pub fn parse_json_value(raw: &str) -> Result<Value, String> {
    serde_json::from_str(raw).map_err(|e| format!("Invalid JSON '{}': {}", raw, e))
}
