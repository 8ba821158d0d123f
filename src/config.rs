//! Mask configuration persistence
//!
//! Stores user preferences in `~/.config/maskedit/config.yaml`:
//!
//! ```yaml
//! placeholder: "#"
//! default_mask: phone
//! masks:
//!   iban-de: "DE## #### #### #### #### ##"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::mask::{MaskPreset, DEFAULT_PLACEHOLDER};

/// Configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskConfig {
    /// Placeholder character used when none is given explicitly
    #[serde(default = "default_placeholder")]
    pub placeholder: char,

    /// Mask name or pattern used when none is given explicitly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_mask: Option<String>,

    /// User-defined masks by name; these shadow the built-in presets
    #[serde(default)]
    pub masks: BTreeMap<String, String>,
}

fn default_placeholder() -> char {
    DEFAULT_PLACEHOLDER
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            default_mask: None,
            masks: BTreeMap::new(),
        }
    }
}

impl MaskConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Self::default()
            }
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse config at {}: {}", path.display(), e))
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file, creating its parent directory
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Add or replace the user mask `name` and write the config to disk
    pub fn save_mask(&mut self, name: &str, pattern: &str) -> Result<(), String> {
        self.masks.insert(name.to_string(), pattern.to_string());
        self.save()
    }

    /// Look up a mask pattern by name: user-defined masks first, then the
    /// built-in presets.
    pub fn resolve_mask(&self, name: &str) -> Option<String> {
        self.masks
            .get(name)
            .cloned()
            .or_else(|| MaskPreset::from_name(name).map(|p| p.pattern().to_string()))
    }

    /// Pattern for `default_mask`, which may be a mask name or a literal
    /// pattern
    pub fn default_pattern(&self) -> Option<String> {
        let mask = self.default_mask.as_deref()?;
        Some(self.resolve_mask(mask).unwrap_or_else(|| mask.to_string()))
    }
}
