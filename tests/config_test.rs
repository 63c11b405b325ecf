//! Integration tests for Settings config loading with layered merge semantics.
//!
//! These tests pass explicit file layers through `load_from`, so neither a global config
//! on the host nor `HOPLIST_*` variables leak in.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use hoplist::config::Settings;
use hoplist::{ApplicationError, Delimiters};

fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write config file");
    path
}

#[test]
fn given_no_config_files_when_load_then_defaults() {
    let settings = Settings::load_from(None, None).expect("load settings");
    assert_eq!(settings.delimiters, Delimiters::default());
}

#[test]
fn given_global_config_when_load_then_overrides_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let global = write_config(
        &dir,
        "hoplist.toml",
        r#"
[delimiters]
prefix = "["
suffix = "]"
"#,
    );

    // Act
    let settings = Settings::load_from(Some(&global), None).expect("load settings");

    // Assert
    assert_eq!(settings.delimiters.prefix, "[");
    assert_eq!(settings.delimiters.separator, ",");
    assert_eq!(settings.delimiters.suffix, "]");
}

#[test]
fn given_global_and_local_config_when_load_then_local_wins_per_field() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let global = write_config(
        &dir,
        "global.toml",
        r#"
[delimiters]
prefix = "["
separator = ";"
"#,
    );
    let local = write_config(
        &dir,
        "local.toml",
        r#"
[delimiters]
separator = " | "
"#,
    );

    // Act
    let settings = Settings::load_from(Some(&global), Some(&local)).expect("load settings");

    // Assert
    assert_eq!(settings.delimiters.prefix, "[");
    assert_eq!(settings.delimiters.separator, " | ");
    assert_eq!(settings.delimiters.suffix, ">");
}

#[test]
fn given_missing_global_config_when_load_then_skipped() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.toml");

    let settings = Settings::load_from(Some(&missing), None).expect("load settings");

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_missing_local_config_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.toml");

    let result = Settings::load_from(None, Some(&missing));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_malformed_config_when_load_then_config_error_names_file() {
    let dir = TempDir::new().unwrap();
    let local = write_config(&dir, "broken.toml", "[delimiters\nprefix = ");

    let err = Settings::load_from(None, Some(&local)).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains("broken.toml"));
}
