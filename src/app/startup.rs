//! Application startup and command execution

use crate::app::cli::args::{Args, Command, PluginTarget};
use crate::app::cli::config::Settings;
use crate::app::cli::display::render_plugin_table;
use crate::app::error::AppError;
use crate::core::error_handling::log_error_with_context;
use crate::core::logging::init_logging;
use crate::io;
use crate::plugin::api::{update_store, with_store, Capability, PluginError};
use clap::Parser;
use std::io::{IsTerminal, Write};

/// Entry point for the `imgio` binary
pub fn startup() {
    let args = Args::parse();

    // Logging is not up yet: report configuration problems directly
    let settings = match Settings::load(args.config_file.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let use_color = args
        .color_override()
        .unwrap_or_else(|| std::io::stdout().is_terminal());
    colored::control::set_override(use_color);

    let log_settings = settings.log.clone().merged(args.log_overrides());
    if let Err(e) = init_logging(&log_settings, use_color).map_err(AppError::from) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    log::debug!("imgio {} starting", env!("CARGO_PKG_VERSION"));

    let mut stdout = std::io::stdout();
    if let Err(e) = run(&args.command, &settings, &mut stdout) {
        log_error_with_context(&e, "Command failed");
        std::process::exit(1);
    }
}

/// Apply configured plugin preferences, then execute `command`
pub fn run(command: &Command, settings: &Settings, out: &mut dyn Write) -> Result<(), AppError> {
    update_store(|store| settings.plugins.apply(store))?;
    execute(command, out)
}

/// Execute one subcommand, writing its output to `out`
pub fn execute(command: &Command, out: &mut dyn Write) -> Result<(), AppError> {
    match command {
        Command::Plugins => {
            let table = with_store(render_plugin_table)?;
            out.write_all(table.as_bytes())?;
        }
        Command::Read { file, target } => {
            let image = io::imread(file, target.plugin.as_deref(), &target.kwargs())?;
            writeln!(out, "{}", serde_json::to_string_pretty(&image)?)?;
        }
        Command::Save {
            file,
            array,
            target,
        } => {
            io::imsave(file, array, target.plugin.as_deref(), &target.kwargs())?;
            log::info!("Saved '{}'", file);
        }
        Command::Show { array, target } => {
            let plugin = show_plugin(target)?;
            io::imshow(array, Some(plugin.as_str()), &target.kwargs())?;

            match io::show(Some(plugin.as_str())) {
                Ok(_) => {}
                Err(PluginError::CapabilityNotSupported { .. }) => {
                    log::debug!("Plugin '{}' has no display loop", plugin)
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
    out.flush()?;
    Ok(())
}

// Pin imshow and show to the same plugin
fn show_plugin(target: &PluginTarget) -> Result<String, AppError> {
    match &target.plugin {
        Some(name) => Ok(name.clone()),
        None => Ok(with_store(|store| {
            store
                .resolve(None, Capability::Show)
                .map(|(name, _)| name.to_string())
        })??),
    }
}
