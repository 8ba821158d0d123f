//! Saving masks through the user config directory
//!
//! Lives in its own test binary because it points `XDG_CONFIG_HOME` at a
//! temporary directory for the whole process.

#![cfg(not(target_os = "windows"))]

use maskedit::config::MaskConfig;
use maskedit::config_paths;

#[test]
fn test_save_mask_writes_user_config() {
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var("XDG_CONFIG_HOME", dir.path());

    let path = config_paths::config_file().unwrap();
    assert_eq!(path, dir.path().join("maskedit").join("config.yaml"));
    assert!(!path.exists());

    let mut config = MaskConfig::load();
    assert_eq!(config, MaskConfig::default());
    config.save_mask("plate", "AAA-####").unwrap();
    assert!(path.exists());

    let loaded = MaskConfig::load();
    assert_eq!(loaded.resolve_mask("plate").as_deref(), Some("AAA-####"));

    let logs = config_paths::ensure_logs_dir().unwrap();
    assert_eq!(logs, dir.path().join("maskedit").join("logs"));
    assert!(logs.is_dir());
}
