use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const MIN_WINDOW_SIZE: [f32; 2] = [300.0, 300.0];
const DEFAULT_WINDOW_SIZE: [f32; 2] = [420.0, 320.0];

#[derive(Debug, Default, Serialize, Deserialize)]
/// Persisted window settings. The edit mode itself is never stored.
pub struct AppConfig {
    pub window_width: Option<f32>,
    pub window_height: Option<f32>,
    pub show_console: Option<bool>,
}

impl AppConfig {
    /// Returns the user config file path, if a config directory is available.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("edit-mode").join("config.toml"))
    }

    /// Loads config from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        let Ok(contents) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        Self::parse(&contents)
    }

    fn parse(contents: &str) -> Self {
        toml::from_str(contents).unwrap_or_else(|err| {
            tracing::warn!(%err, "invalid config, using defaults");
            Self::default()
        })
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::config_path().context("no config directory")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        let s = toml::to_string_pretty(self)?;
        std::fs::write(&path, s).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }

    /// Inner window size, never below the minimum.
    pub fn window_size(&self) -> [f32; 2] {
        let width = self.window_width.unwrap_or(DEFAULT_WINDOW_SIZE[0]);
        let height = self.window_height.unwrap_or(DEFAULT_WINDOW_SIZE[1]);
        [width.max(MIN_WINDOW_SIZE[0]), height.max(MIN_WINDOW_SIZE[1])]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_size_defaults_when_unset() {
        assert_eq!(AppConfig::default().window_size(), [420.0, 320.0]);
    }

    #[test]
    fn window_size_is_clamped_to_minimum() {
        let config = AppConfig {
            window_width: Some(120.0),
            window_height: Some(900.0),
            show_console: None,
        };
        assert_eq!(config.window_size(), [300.0, 900.0]);
    }

    #[test]
    fn parse_reads_known_keys() {
        let config = AppConfig::parse("window_width = 640.0\nshow_console = true\n");
        assert_eq!(config.window_width, Some(640.0));
        assert_eq!(config.window_height, None);
        assert_eq!(config.show_console, Some(true));
    }

    #[test]
    fn parse_falls_back_on_garbage() {
        let config = AppConfig::parse("window_width = \"wide\"");
        assert_eq!(config.window_width, None);
    }

    #[test]
    fn serialized_config_round_trips_through_parse() {
        let config = AppConfig {
            window_width: Some(500.0),
            window_height: Some(400.0),
            show_console: Some(false),
        };
        let parsed = AppConfig::parse(&toml::to_string_pretty(&config).unwrap());
        assert_eq!(parsed.window_size(), [500.0, 400.0]);
        assert_eq!(parsed.show_console, Some(false));
    }
}
