//! Application configuration (window, presentation). Loaded from config.ron at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Window and presentation settings. Loaded from `config.ron` in the current directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window width in logical pixels.
    #[serde(default = "default_window_width")]
    pub window_width: u32,
    /// Window height in logical pixels.
    #[serde(default = "default_window_height")]
    pub window_height: u32,
    #[serde(default = "default_title")]
    pub title: String,
    /// Enable vsync.
    #[serde(default = "default_true")]
    pub vsync: bool,
    /// Background RGB.
    #[serde(default)]
    pub clear_color: [f32; 3],
}

fn default_window_width() -> u32 {
    800
}
fn default_window_height() -> u32 {
    600
}
fn default_title() -> String {
    "Slither".to_string()
}
fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            title: default_title(),
            vsync: default_true(),
            clear_color: [0.0; 3],
        }
    }
}

impl AppConfig {
    /// Load config from `config.ron`. If the file is missing or invalid, returns default config.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(data) => Self::parse(&data).unwrap_or_else(|e| {
                log::warn!("Invalid config at {:?}: {}, using defaults", path, e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn parse(data: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(data)
    }
}

fn config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("config.ron")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = AppConfig::parse("(title: \"Snake\")").unwrap();
        assert_eq!(config.title, "Snake");
        assert_eq!(config.window_width, 800);
        assert_eq!(config.window_height, 600);
        assert!(config.vsync);
        assert_eq!(config.clear_color, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn full_file_parses() {
        let data = r#"(
            window_width: 1024,
            window_height: 768,
            title: "S",
            vsync: false,
            clear_color: (0.1, 0.2, 0.3),
        )"#;
        let config = AppConfig::parse(data).unwrap();
        assert_eq!(config.window_width, 1024);
        assert!(!config.vsync);
        assert_eq!(config.clear_color, [0.1, 0.2, 0.3]);
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(AppConfig::parse("window_width = 3").is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("slither-config-that-does-not-exist.ron");
        assert_eq!(AppConfig::load_from(&path), AppConfig::default());
    }

    #[test]
    fn invalid_file_gives_defaults() {
        let name = format!("slither-bad-config-{}.ron", std::process::id());
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, "not ron at all {").unwrap();
        assert_eq!(AppConfig::load_from(&path), AppConfig::default());
        let _ = std::fs::remove_file(&path);
    }
}
