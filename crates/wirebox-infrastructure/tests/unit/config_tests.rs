//! Configuration loading and validation
//!
//! Tests touching `WIREBOX_*` environment variables are ignored by default:
//!
//! ```bash
//! cargo test -p wirebox-infrastructure --test unit config -- --test-threads=1 --ignored
//! ```

use std::env;
use std::fs;

use tempfile::TempDir;
use wirebox_domain::Error;
use wirebox_infrastructure::config::loader::validate_app_config;
use wirebox_infrastructure::config::{AppConfig, ConfigBuilder, ConfigLoader, LoadMode};
use wirebox_infrastructure::constants::{DEFAULT_LOG_LEVEL, DEFAULT_MAX_RESOLUTION_DEPTH};

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("wirebox.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.container.load_mode, LoadMode::Lenient);
    assert_eq!(config.container.max_depth, DEFAULT_MAX_RESOLUTION_DEPTH);
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert!(config.bindings.is_empty());
    assert!(validate_app_config(&config).is_ok());
}

#[test]
fn test_load_from_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[container]
load_mode = "strict"
max_depth = 16

[logging]
level = "debug"

[bindings]
car = "Car"
Color = "Color"
"#,
    );

    let config = ConfigLoader::new().with_config_path(&path).load().unwrap();

    assert_eq!(config.container.load_mode, LoadMode::Strict);
    assert_eq!(config.container.max_depth, 16);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.bindings.get("car").map(String::as_str), Some("Car"));
    assert_eq!(config.bindings.len(), 2);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[container]\nmax_depth = 5\n");

    let config = ConfigLoader::new().with_config_path(&path).load().unwrap();

    assert_eq!(config.container.max_depth, 5);
    assert_eq!(config.container.load_mode, LoadMode::Lenient);
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let loader = ConfigLoader::new().with_config_path(dir.path().join("absent.toml"));

    let config = loader.load().unwrap();

    assert_eq!(config.container.max_depth, DEFAULT_MAX_RESOLUTION_DEPTH);
    assert!(loader.config_path().is_some());
}

#[test]
fn test_zero_depth_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[container]\nmax_depth = 0\n");

    let error = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .unwrap_err();

    assert!(matches!(error, Error::Configuration { .. }));
}

#[test]
fn test_unknown_load_mode_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[container]\nload_mode = \"sloppy\"\n");

    let error = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .unwrap_err();

    assert!(matches!(error, Error::Configuration { source: Some(_), .. }));
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let config = ConfigBuilder::new()
        .with_logging(wirebox_infrastructure::config::LoggingConfig {
            level: "loud".to_string(),
            ..Default::default()
        })
        .build();

    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_empty_binding_type_is_rejected() {
    let config = ConfigBuilder::new().with_binding("car", "").build();

    let error = validate_app_config(&config).unwrap_err();

    assert!(error.to_string().contains("car"));
}

#[test]
fn test_builder() {
    let config = ConfigBuilder::new()
        .with_load_mode(LoadMode::Strict)
        .with_max_depth(3)
        .with_binding("plain", "Plain")
        .build();

    assert_eq!(config.container.load_mode, LoadMode::Strict);
    assert_eq!(config.container.max_depth, 3);
    assert_eq!(config.bindings["plain"], "Plain");
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");
    let config = ConfigBuilder::new()
        .with_load_mode(LoadMode::Strict)
        .with_binding("plain", "Plain")
        .build();
    let loader = ConfigLoader::new().with_config_path(&path);

    loader.save_to_file(&config, &path).unwrap();
    let loaded = loader.load().unwrap();

    assert_eq!(loaded.container, config.container);
    assert_eq!(loaded.bindings, config.bindings);
}

#[test]
fn test_save_to_missing_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("saved.toml");

    let error = ConfigLoader::new()
        .save_to_file(&AppConfig::default(), &path)
        .unwrap_err();

    assert!(matches!(error, Error::Io { .. }));
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[container]\nmax_depth = 5\n");

    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var("WIREBOX_CONTAINER__MAX_DEPTH", "9");
    }
    let result = ConfigLoader::new().with_config_path(&path).load();
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var("WIREBOX_CONTAINER__MAX_DEPTH");
    }

    assert_eq!(result.unwrap().container.max_depth, 9);
}
