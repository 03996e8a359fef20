use crate::keymap::Keymap;
use crate::styles::ThemeType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
///
/// Holds the initial theme and the keymap. The config is only read at
/// startup; toggling the theme at runtime is transient and never written
/// back here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Initial theme name ("dark" or "light")
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Keymap preset and overrides
    #[serde(default)]
    pub keymap: Keymap,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            keymap: Keymap::default(),
        }
    }
}

fn default_theme() -> String {
    "dark".to_string()
}

impl Config {
    /// Parse the configured theme name.
    ///
    /// Unknown names fall back to dark, matching `ThemeType::from_str`.
    pub fn theme_type(&self) -> ThemeType {
        self.theme.parse().unwrap_or_default()
    }

    /// Load the config from disk, creating a default one if it is missing.
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: Config =
                toml::from_str(&content).with_context(|| "Failed to parse config file")?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Save the config to disk.
    pub fn save(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;
        Ok(())
    }
}

/// Default config file location (`~/.config/plateful/config.toml`)
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("plateful")
        .join("config.toml")
}
