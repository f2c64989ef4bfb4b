use imgio::app::cli::config::{ConfigError, Settings};
use imgio::core::logging::LogFormat;
use imgio::plugin::api::{Capabilities, Capability, Kwargs, PluginStore};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn reader() -> Capabilities {
    Capabilities::new().with_read(|_: &str, _: &Kwargs| Ok(json!(null)))
}

#[test]
fn test_load_explicit_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("imgio.toml");
    fs::write(
        &path,
        r#"
[log]
level = "warn"
format = "ext"

[plugins]
read = ["missing", "second"]
"#,
    )
    .unwrap();

    let settings = Settings::load(Some(path.as_path())).unwrap();

    assert_eq!(settings.log.level.as_deref(), Some("warn"));
    assert_eq!(settings.log.format, Some(LogFormat::Ext));
    assert_eq!(settings.plugins.read, vec!["missing", "second"]);
    assert!(settings.plugins.show.is_empty());
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = Settings::load(Some(path.as_path())).unwrap_err();

    assert!(matches!(err, ConfigError::NotFound { .. }));
}

#[test]
fn test_unknown_keys_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("imgio.toml");
    fs::write(&path, "[plugins]\nwrite = [\"json\"]\n").unwrap();

    let err = Settings::load(Some(path.as_path())).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_preferences_skip_unusable_names() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("imgio.toml");
    fs::write(&path, "[plugins]\nread = [\"missing\", \"second\"]\n").unwrap();
    let settings = Settings::load(Some(path.as_path())).unwrap();

    let mut store = PluginStore::new();
    store.register("first", reader());
    store.register("second", reader());
    settings.plugins.apply(&mut store);

    assert_eq!(store.preferred(Capability::Read), Some("second"));
    let (name, _) = store.resolve(None, Capability::Read).unwrap();
    assert_eq!(name, "second");
}
