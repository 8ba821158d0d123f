//! Configuration system tests
//!
//! Tests for config paths and mask config loading/saving.

use maskedit::config::MaskConfig;
use maskedit::config_paths;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("maskedit"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&config));
    }
}

// ========================================================================
// Mask Config Tests
// ========================================================================

#[test]
fn test_config_serialize_deserialize() {
    let mut config = MaskConfig {
        placeholder: '9',
        default_mask: Some("phone".to_string()),
        ..MaskConfig::default()
    };
    config
        .masks
        .insert("plate".to_string(), "AAA-9999".to_string());

    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed: MaskConfig = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let mut config = MaskConfig::default();
    config
        .masks
        .insert("iban-de".to_string(), "DE## #### #### #### #### ##".to_string());
    config.save_to(&path).unwrap();

    let loaded = MaskConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(
        loaded.resolve_mask("iban-de").as_deref(),
        Some("DE## #### #### #### #### ##")
    );
}

#[test]
fn test_load_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = MaskConfig::load_from(&dir.path().join("missing.yaml")).unwrap_err();
    assert!(err.contains("Failed to read config"));
}

#[test]
fn test_load_invalid_yaml_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "masks: [not, a, map]\n").unwrap();

    let err = MaskConfig::load_from(&path).unwrap_err();
    assert!(err.contains("Failed to parse config"));
}

#[test]
fn test_quoted_placeholder_in_yaml() {
    let yaml = "placeholder: \"_\"\nmasks:\n  code: \"__-__\"\n";
    let config: MaskConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.placeholder, '_');
    assert_eq!(config.resolve_mask("code").as_deref(), Some("__-__"));
}
