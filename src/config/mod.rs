//! Configuration file support for inkboard.
//!
//! Handles loading and validating settings from the configuration file at
//! `~/.config/inkboard/config.toml`: initial tool selections and the undo
//! history bound. If no config file exists, sensible defaults are used
//! automatically.

pub mod types;

// Re-export commonly used types at module level
pub use types::{ColorSpec, DrawingConfig, HistoryConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::canvas::paint::{MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};

/// Main configuration structure containing all user settings.
///
/// This is the root type deserialized from the TOML file. All fields have
/// sensible defaults and use those when not specified.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_tool = "pen"
/// default_color = "#202020"
/// default_width = 4.0
/// background = "white"
///
/// [history]
/// max_snapshots = 256
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Initial tool selections (tool, color, width, background)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Undo history settings
    #[serde(default)]
    pub history: HistoryConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning
    /// is logged.
    ///
    /// Validated ranges:
    /// - `default_width`: 1.0 - 100.0
    fn validate_and_clamp(&mut self) {
        if !(MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH).contains(&self.drawing.default_width) {
            log::warn!(
                "Invalid default_width {:.1}, clamping to {:.0}-{:.0} range",
                self.drawing.default_width,
                MIN_STROKE_WIDTH,
                MAX_STROKE_WIDTH
            );
            self.drawing.default_width = self
                .drawing
                .default_width
                .clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/inkboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("inkboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Loads configuration from an explicit path, or defaults if not found.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to the default path.
    ///
    /// Serializes the config to TOML and writes it to
    /// `~/.config/inkboard/config.toml`, creating the parent directory if
    /// needed.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        // Create directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Tool;
    use crate::canvas::color::{BLACK, WHITE};
    use std::io::Write;

    #[test]
    fn defaults_when_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("missing.toml")).unwrap();

        assert_eq!(config.drawing.default_tool, Tool::Pen);
        assert_eq!(config.drawing.default_color.to_color(), BLACK);
        assert_eq!(config.drawing.background.to_color(), WHITE);
        assert_eq!(config.drawing.default_width, 4.0);
        assert_eq!(config.history.max_snapshots, 0);
    }

    #[test]
    fn loads_and_clamps_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        write!(
            file,
            r##"
[drawing]
default_tool = "eraser"
default_color = "#ff8000"
default_width = 900.0

[history]
max_snapshots = 32
"##
        )
        .unwrap();
        drop(file);

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.drawing.default_tool, Tool::Eraser);
        assert_eq!(config.drawing.default_width, MAX_STROKE_WIDTH);
        assert_eq!(config.history.max_snapshots, 32);

        let color = config.drawing.default_color.to_color();
        assert_eq!(color.r, 1.0);
        assert!((color.g - 128.0 / 255.0).abs() < 1e-9);
        assert_eq!(color.b, 0.0);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "not [valid toml").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn color_spec_variants_convert() {
        assert_eq!(ColorSpec::Name("black".into()).to_color(), BLACK);
        assert_eq!(ColorSpec::Name("#ffffff".into()).to_color(), WHITE);
        assert_eq!(
            ColorSpec::Rgb([255, 255, 255]).to_color(),
            WHITE
        );
        // Unknown names fall back to black rather than failing the load
        assert_eq!(ColorSpec::Name("no-such-color".into()).to_color(), BLACK);
    }
}
