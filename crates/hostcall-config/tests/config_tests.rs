//! Configuration loading and precedence tests

use hostcall_config::{ConfigError, ConfigLoader, ProjectConfig, Utf8Policy, CONFIG_FILE_NAME};
use pretty_assertions::assert_eq;
use serial_test::serial;
use std::env;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn create_config_file(dir: &Path, content: &str) -> std::path::PathBuf {
    let config_path = dir.join(CONFIG_FILE_NAME);
    fs::write(&config_path, content).unwrap();
    config_path
}

// ============================================================================
// Config Loading Tests
// ============================================================================

#[test]
#[serial]
fn test_load_strict_policy() {
    let temp_dir = TempDir::new().unwrap();
    create_config_file(
        temp_dir.path(),
        r#"
[arguments]
utf8 = "strict"
"#,
    );

    let config = ConfigLoader::new()
        .load_from_directory(temp_dir.path())
        .unwrap();

    assert!(config.is_project());
    assert_eq!(config.utf8_policy(), Utf8Policy::Strict);
}

#[test]
#[serial]
fn test_empty_config_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    create_config_file(temp_dir.path(), "");

    let config = ConfigLoader::new()
        .load_from_directory(temp_dir.path())
        .unwrap();

    assert!(config.is_project());
    assert_eq!(config.project, ProjectConfig::default());
    assert_eq!(config.utf8_policy(), Utf8Policy::Lossy);
}

#[test]
fn test_invalid_toml_reports_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_config_file(temp_dir.path(), "[arguments\nutf8 = ");

    match ConfigLoader::new().without_env().load_from_file(&path) {
        Err(ConfigError::TomlParseError { file, .. }) => assert_eq!(file, path),
        other => panic!("Expected TomlParseError, got {:?}", other),
    }
}

#[test]
fn test_missing_file_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(CONFIG_FILE_NAME);

    match ConfigLoader::new().without_env().load_from_file(&path) {
        Err(ConfigError::NotFound(missing)) => assert_eq!(missing, path),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

// ============================================================================
// Precedence Tests
// ============================================================================

#[test]
#[serial]
fn test_env_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    create_config_file(temp_dir.path(), "[arguments]\nutf8 = \"strict\"\n");

    env::set_var("HOSTCALL_UTF8", "lossy");
    let config = ConfigLoader::new().load_from_directory(temp_dir.path());
    env::remove_var("HOSTCALL_UTF8");

    assert_eq!(config.unwrap().utf8_policy(), Utf8Policy::Lossy);
}

#[test]
#[serial]
fn test_without_env_ignores_override() {
    let temp_dir = TempDir::new().unwrap();
    create_config_file(temp_dir.path(), "[arguments]\nutf8 = \"strict\"\n");

    env::set_var("HOSTCALL_UTF8", "lossy");
    let config = ConfigLoader::new()
        .without_env()
        .load_from_directory(temp_dir.path());
    env::remove_var("HOSTCALL_UTF8");

    assert_eq!(config.unwrap().utf8_policy(), Utf8Policy::Strict);
}

#[test]
#[serial]
fn test_env_without_file() {
    let temp_dir = TempDir::new().unwrap();

    env::set_var("HOSTCALL_UTF8", "Strict");
    let config = ConfigLoader::new()
        .stop_at(temp_dir.path())
        .load_from_directory(temp_dir.path());
    env::remove_var("HOSTCALL_UTF8");

    let config = config.unwrap();
    assert!(!config.is_project());
    assert_eq!(config.utf8_policy(), Utf8Policy::Strict);
}
