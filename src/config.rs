//! Host configuration file handling.
//!
//! Supports JSON and TOML files. Values missing from a file fall back
//! to the built-in defaults, and every loaded file is validated with
//! the same rules the simulator itself applies.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use wiresim_core::constants::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_SCALE, DEFAULT_SPEED,
};
use wiresim_core::{Error, RenderError, Result, SessionError};

/// Host defaults persisted between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Continuous-run speed in steps per second.
    pub speed: f64,
    /// Unit-to-pixel scale factor.
    pub scale: f64,
    /// Drawing surface width in pixels.
    pub canvas_width: u32,
    /// Drawing surface height in pixels.
    pub canvas_height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            scale: DEFAULT_SCALE,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

impl Config {
    /// Loads a config from a `.json` or `.toml` file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::other(format!("Failed to read config file: {}", e)))?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .map_err(|e| Error::other(format!("Invalid JSON config: {}", e)))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)
                .map_err(|e| Error::other(format!("Invalid TOML config: {}", e)))?
        } else {
            return Err(Error::other(
                "Config file must be .json or .toml".to_string(),
            ));
        };

        config.validate()?;
        Ok(config)
    }

    /// Saves the config to a `.json` or `.toml` file.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)
                .map_err(|e| Error::other(format!("Failed to serialize config: {}", e)))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)
                .map_err(|e| Error::other(format!("Failed to serialize config: {}", e)))?
        } else {
            return Err(Error::other(
                "Config file must be .json or .toml".to_string(),
            ));
        };

        std::fs::write(path, content)
            .map_err(|e| Error::other(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Checks the values against the ranges the simulator accepts.
    pub fn validate(&self) -> Result<()> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(SessionError::InvalidSpeed { value: self.speed }.into());
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(SessionError::InvalidScale { value: self.scale }.into());
        }
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(RenderError::InvalidDimensions {
                width: self.canvas_width,
                height: self.canvas_height,
            }
            .into());
        }
        Ok(())
    }

    /// Per-user config location, `~/.wiresim/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".wiresim").join("config.json"))
    }

    /// Loads the per-user config, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.speed = 2.5;
        config.save_to_file(&path).unwrap();

        assert_eq!(Config::load_from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.canvas_width = 1024;
        config.save_to_file(&path).unwrap();

        assert_eq!(Config::load_from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        assert!(Config::default().save_to_file(&path).is_err());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "speed": 2.5 }"#).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.speed, 2.5);
        assert_eq!(config.scale, DEFAULT_SCALE);
        assert_eq!(config.canvas_width, DEFAULT_CANVAS_WIDTH);
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        let mut config = Config::default();
        config.speed = 0.0;
        assert!(config.validate().unwrap_err().is_session_error());

        let mut config = Config::default();
        config.scale = f64::NAN;
        assert!(config.validate().unwrap_err().is_session_error());

        let mut config = Config::default();
        config.canvas_width = 0;
        assert!(config.validate().unwrap_err().is_render_error());
    }
}
