//! Application configuration management

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory the file dialogs open in
    pub last_directory: Option<PathBuf>,
    /// Editor settings
    pub editor: EditorConfig,
    /// UI settings
    pub ui: UiConfig,
}

/// Editor-specific settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Font size in pixels
    pub font_size: f32,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme (light/dark)
    pub theme: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            font_size: 14.0,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            window_width: 900.0,
            window_height: 640.0,
        }
    }
}

impl EditorConfig {
    pub const MIN_FONT_SIZE: f32 = 8.0;
    pub const MAX_FONT_SIZE: f32 = 48.0;

    /// Bring a hand-edited font size back into the supported range
    pub fn sanitize(&mut self) {
        self.font_size = if self.font_size.is_finite() {
            self.font_size.clamp(Self::MIN_FONT_SIZE, Self::MAX_FONT_SIZE)
        } else {
            Self::default().font_size
        };
    }

    /// Grow or shrink the font, staying within the supported range
    pub fn adjust_font_size(&mut self, delta: f32) {
        self.font_size = (self.font_size + delta).clamp(Self::MIN_FONT_SIZE, Self::MAX_FONT_SIZE);
    }
}

impl UiConfig {
    pub fn is_dark(&self) -> bool {
        !self.theme.eq_ignore_ascii_case("light")
    }

    pub fn set_dark(&mut self, dark: bool) {
        self.theme = if dark { "dark" } else { "light" }.to_string();
    }
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "textual", "Textual")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_json(&content)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;

        tracing::info!("Saved config to: {}", path.display());
        Ok(())
    }

    fn from_json(content: &str) -> Result<Self> {
        let mut config: Self = serde_json::from_str(content).context("Invalid config file")?;
        config.editor.sanitize();
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = AppConfig::from_json(r#"{ "editor": { "font_size": 18.0 } }"#).unwrap();
        assert_eq!(config.editor.font_size, 18.0);
        assert_eq!(config.ui, UiConfig::default());
        assert_eq!(config.last_directory, None);
    }

    #[test]
    fn test_config_round_trip() {
        let mut config = AppConfig::default();
        config.last_directory = Some(PathBuf::from("/tmp/notes"));
        config.ui.theme = "light".to_string();

        let json = serde_json::to_string(&config).unwrap();
        let loaded = AppConfig::from_json(&json).unwrap();
        assert_eq!(loaded, config);
        assert!(!loaded.ui.is_dark());
    }

    #[test]
    fn test_font_size_is_clamped() {
        let mut editor = EditorConfig::default();
        editor.adjust_font_size(2.0);
        assert_eq!(editor.font_size, 16.0);
        editor.adjust_font_size(100.0);
        assert_eq!(editor.font_size, EditorConfig::MAX_FONT_SIZE);
        editor.adjust_font_size(-100.0);
        assert_eq!(editor.font_size, EditorConfig::MIN_FONT_SIZE);
    }

    #[test]
    fn test_loaded_font_size_is_sanitized() {
        let tiny = AppConfig::from_json(r#"{ "editor": { "font_size": 0.0 } }"#).unwrap();
        assert_eq!(tiny.editor.font_size, EditorConfig::MIN_FONT_SIZE);

        let negative = AppConfig::from_json(r#"{ "editor": { "font_size": -3.0 } }"#).unwrap();
        assert_eq!(negative.editor.font_size, EditorConfig::MIN_FONT_SIZE);

        let huge = AppConfig::from_json(r#"{ "editor": { "font_size": 1000.0 } }"#).unwrap();
        assert_eq!(huge.editor.font_size, EditorConfig::MAX_FONT_SIZE);

        let mut nan = EditorConfig { font_size: f32::NAN };
        nan.sanitize();
        assert_eq!(nan.font_size, EditorConfig::default().font_size);
    }

    #[test]
    fn test_theme_toggle() {
        let mut ui = UiConfig::default();
        assert!(ui.is_dark());
        ui.set_dark(false);
        assert_eq!(ui.theme, "light");
        assert!(!ui.is_dark());
    }

    #[test]
    fn test_invalid_config() {
        assert!(AppConfig::from_json("not json").is_err());
    }
}
