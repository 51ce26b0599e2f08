use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::display::OutputFormat;
use crate::theme::{Theme, ThemeOverrides};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Text in the top band of the calendar card
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Output protocol used by the CLI when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,

    /// Colour overrides on top of the default palette
    #[serde(default)]
    pub theme: ThemeOverrides,
}

impl AppConfig {
    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("hcard");

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from the user config dir, or fall back to defaults
    pub fn load() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                tracing::debug!("No config directory: {}", e);
                AppConfig::default()
            }
        }
    }

    /// Load config from `path`. A missing or unreadable file yields defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return AppConfig::default();
        }

        match Self::read(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config {}: {:#}", path.display(), e);
                AppConfig::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = toml::from_str(&content).context("parsing TOML")?;
        Ok(config)
    }

    /// Theme with this config's overrides and label applied
    pub fn theme(&self) -> Theme {
        let theme = Theme::default().with_overrides(&self.theme);
        match &self.label {
            Some(label) => theme.with_label(label),
            None => theme,
        }
    }
}
