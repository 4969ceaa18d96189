use catalog::args::Args;
use catalog::config::{Config, ConfigError};
use catalog::navigation::Route;
use clap::Parser;
use std::time::Duration;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.repository.latency_ms, 0);
    assert_eq!(config.repository.fail_first, 0);
    assert_eq!(config.ui.tick_rate(), Duration::from_millis(100));
    assert_eq!(config.ui.start_route(), Route::Main);
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("catalog/config.toml"));
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_full_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[repository]
latency_ms = 250
fail_first = 2

[ui]
tick_rate_ms = 50
start_route = "detail/3"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.repository.latency(), Duration::from_millis(250));
    assert_eq!(config.repository.fail_first, 2);
    assert_eq!(config.ui.tick_rate_ms, 50);
    assert_eq!(config.ui.start_route(), Route::detail("3"));
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[repository]\nfail_first = 1\n");

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.repository.fail_first, 1);
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.ui.start_route, "main");
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[ui\ntick_rate_ms = ");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_unknown_start_route_is_validation_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[ui]\nstart_route = \"checkout\"\n");

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.start_route, "checkout");
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_zero_tick_rate_is_validation_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[ui]\ntick_rate_ms = 0\n");

    let config = Config::load_from(&path).unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_route_flag_replaces_bad_file_route() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[ui]\nstart_route = \"bogus\"\n");

    let mut config = Config::load_from(&path).unwrap();
    let args = Args::parse_from(["catalog", "--route", "detail/2"]);
    args.apply_to(&mut config);

    assert!(config.validate().is_ok());
    assert_eq!(config.ui.start_route(), Route::detail("2"));
}
