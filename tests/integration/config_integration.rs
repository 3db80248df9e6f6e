//! Integration tests for Configuration System

use propgate::config::{ConfigLoader, PropgateConfig};
use tempfile::TempDir;

#[test]
fn test_config_defaults_without_any_files() {
    let temp_dir = TempDir::new().unwrap();

    let config = ConfigLoader::load(temp_dir.path()).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.files.project_file, "project.toml");
    assert_eq!(config.files.manifest_file, "App.toml");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_project_config_file_overrides_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("config");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("propgate.toml"),
        r#"
[files]
manifest_file = "Application.toml"

[logging]
level = "warn"
format = "json"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load(temp_dir.path()).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.files.project_file, "project.toml");
    assert_eq!(config.files.manifest_file, "Application.toml");
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.format, "json");
}

#[test]
fn test_explicit_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("custom.toml");
    std::fs::write(
        &config_file,
        r#"
[files]
project_file = "settings.toml"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    assert_eq!(config.files.project_file, "settings.toml");
    assert_eq!(config.files.manifest_file, "App.toml");
}

#[test]
fn test_malformed_config_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("broken.toml");
    std::fs::write(&config_file, "[files\nproject_file = ").unwrap();

    assert!(ConfigLoader::load_from_file(&config_file).is_err());
}

#[test]
fn test_validation_rejects_colliding_names_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("custom.toml");
    std::fs::write(
        &config_file,
        r#"
[files]
project_file = "shared.toml"
manifest_file = "shared.toml"
"#,
    )
    .unwrap();

    let config: PropgateConfig = ConfigLoader::load_from_file(&config_file).unwrap();
    assert!(config.validate().is_err());
}
