use clap::Parser;
use imgio::app::cli::args::{Args, Command};
use imgio::core::logging::LogFormat;
use serde_json::json;

#[test]
fn test_read_with_plugin_and_arguments() {
    let args = Args::try_parse_from([
        "imgio", "read", "test.png", "-p", "test", "-a", "as_grey=true", "-a", "dtype=i4",
    ])
    .unwrap();

    let Command::Read { file, target } = args.command else {
        panic!("expected read command");
    };
    assert_eq!(file, "test.png");
    assert_eq!(target.plugin.as_deref(), Some("test"));

    let kwargs = target.kwargs();
    assert_eq!(kwargs.keys().collect::<Vec<_>>(), vec!["as_grey", "dtype"]);
    assert_eq!(kwargs.get("as_grey"), Some(&json!(true)));
    assert_eq!(kwargs.get("dtype"), Some(&json!("i4")));
}

#[test]
fn test_save_parses_array() {
    let args = Args::try_parse_from(["imgio", "save", "out.json", "[[1, 2], [3, 4]]"]).unwrap();

    match args.command {
        Command::Save {
            file,
            array,
            target,
        } => {
            assert_eq!(file, "out.json");
            assert_eq!(array, json!([[1, 2], [3, 4]]));
            assert!(target.plugin.is_none());
            assert!(target.kwargs().is_empty());
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_invalid_array_is_rejected() {
    assert!(Args::try_parse_from(["imgio", "show", "[1, 2"]).is_err());
}

#[test]
fn test_argument_without_value_is_rejected() {
    assert!(Args::try_parse_from(["imgio", "read", "a.png", "-a", "as_grey"]).is_err());
}

#[test]
fn test_global_logging_options() {
    let args = Args::try_parse_from([
        "imgio", "-l", "debug", "-o", "json", "-f", "imgio.log", "--no-color", "plugins",
    ])
    .unwrap();

    let overrides = args.log_overrides();
    assert_eq!(overrides.level.as_deref(), Some("debug"));
    assert_eq!(overrides.format, Some(LogFormat::Json));
    assert_eq!(overrides.file.as_deref(), Some(std::path::Path::new("imgio.log")));
    assert_eq!(args.color_override(), Some(false));
    assert_eq!(args.command, Command::Plugins);
}

#[test]
fn test_unknown_log_level_is_rejected() {
    assert!(Args::try_parse_from(["imgio", "-l", "loud", "plugins"]).is_err());
}

#[test]
fn test_color_flags_conflict() {
    assert!(Args::try_parse_from(["imgio", "--color", "--no-color", "plugins"]).is_err());
}
