use clap::Parser;
use imgio::app::cli::args::Args;
use imgio::app::cli::config::{PluginPreferences, Settings};
use imgio::app::error::AppError;
use imgio::app::startup::{execute, run};
use imgio::plugin::api::{isolate, register, Capabilities, Kwargs, PluginError};
use serde_json::{json, Value};
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

fn execute_args(argv: &[&str]) -> Result<String, AppError> {
    let args = Args::try_parse_from(argv).unwrap();
    let mut out = Vec::new();
    execute(&args.command, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
#[serial]
fn test_plugins_lists_json_builtin() {
    let _guard = isolate().unwrap();

    let output = execute_args(&["imgio", "plugins"]).unwrap();

    assert!(output.contains("PLUGIN"));
    assert!(output.contains("json"));
    assert!(output.contains("* default for that capability"));
}

#[test]
#[serial]
fn test_save_then_read_with_json_plugin() {
    let _guard = isolate().unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("image.json");
    let path = path.to_str().unwrap();

    execute_args(&["imgio", "save", path, "[[1, 2], [3, 4]]", "-p", "json"]).unwrap();
    let output = execute_args(&["imgio", "read", path, "-p", "json"]).unwrap();

    let value: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value, json!([[1, 2], [3, 4]]));
}

#[test]
#[serial]
fn test_compact_save_argument_reaches_plugin() {
    let _guard = isolate().unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("image.json");
    let path_str = path.to_str().unwrap();

    execute_args(&["imgio", "save", path_str, "[1, 2, 3]", "-p", "json", "-a", "compact=true"])
        .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "[1,2,3]\n");
}

#[test]
#[serial]
fn test_unknown_plugin_fails() {
    let _guard = isolate().unwrap();

    let err = execute_args(&["imgio", "read", "a.png", "-p", "qt"]).unwrap_err();

    assert!(matches!(
        err,
        AppError::Plugin(PluginError::PluginNotFound { .. })
    ));
}

#[test]
#[serial]
fn test_show_tolerates_missing_app_loop() {
    let _guard = isolate().unwrap();
    register(
        "viewer",
        Capabilities::new().with_show(|_: &Value, _: &Kwargs| Ok(Value::Null)),
    )
    .unwrap();

    assert!(execute_args(&["imgio", "show", "[1]", "-p", "viewer"]).is_ok());
}

#[test]
#[serial]
fn test_run_applies_configured_preferences() {
    let _guard = isolate().unwrap();
    register(
        "fixed",
        Capabilities::new().with_read(|_: &str, _: &Kwargs| Ok(json!("from fixed"))),
    )
    .unwrap();
    let settings = Settings {
        plugins: PluginPreferences {
            read: vec!["fixed".to_string()],
            ..Default::default()
        },
        ..Default::default()
    };
    let args = Args::try_parse_from(["imgio", "read", "anything.png"]).unwrap();

    let mut out = Vec::new();
    run(&args.command, &settings, &mut out).unwrap();

    let value: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value, json!("from fixed"));
}
