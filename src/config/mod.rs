//! Configuration file support for sigpad.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/sigpad/config.toml`. Settings
//! include drawing defaults, surface sizing breakpoints, and the export
//! destination.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod types;

// Re-export commonly used types at module level
pub use types::{DrawingConfig, ExportConfig, SurfaceConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_thickness = 3.0
/// default_theme = "light"
///
/// [surface]
/// height = 400
/// wide_width = 600
///
/// [export]
/// save_directory = "~/Pictures/sigpad"
/// filename = "signature.png"
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Drawing defaults (thickness, theme)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Surface sizing and responsive breakpoints
    #[serde(default)]
    pub surface: SurfaceConfig,

    /// Export destination settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or reset to
    /// their default) and a warning is logged, so a bad config file never
    /// prevents the pad from starting.
    ///
    /// Validated ranges:
    /// - `default_thickness`: 1.0 - 20.0
    /// - `height` and the three widths: 16 - 4096 pixels
    /// - breakpoints: `wide_min` must exceed `narrow_max`
    fn validate_and_clamp(&mut self) {
        // Thickness: 1.0 - 20.0
        if !(1.0..=20.0).contains(&self.drawing.default_thickness) {
            log::warn!(
                "Invalid default_thickness {:.1}, clamping to 1.0-20.0 range",
                self.drawing.default_thickness
            );
            self.drawing.default_thickness = if self.drawing.default_thickness.is_finite() {
                self.drawing.default_thickness.clamp(1.0, 20.0)
            } else {
                DrawingConfig::default().default_thickness
            };
        }

        // Surface dimensions: 16 - 4096
        for (name, value) in [
            ("height", &mut self.surface.height),
            ("wide_width", &mut self.surface.wide_width),
            ("medium_width", &mut self.surface.medium_width),
            ("narrow_width", &mut self.surface.narrow_width),
        ] {
            if !(16..=4096).contains(value) {
                log::warn!("Invalid surface {name} {value}, clamping to 16-4096 range");
                *value = (*value).clamp(16, 4096);
            }
        }

        // Breakpoints must be ordered, otherwise the medium bucket vanishes
        if self.surface.wide_min <= self.surface.narrow_max {
            log::warn!(
                "Invalid breakpoints (wide_min {} <= narrow_max {}), using defaults",
                self.surface.wide_min,
                self.surface.narrow_max
            );
            let defaults = SurfaceConfig::default();
            self.surface.wide_min = defaults.wide_min;
            self.surface.narrow_max = defaults.narrow_max;
        }

        // Export filename must be non-empty
        if self.export.filename.trim().is_empty() {
            log::warn!("Empty export filename, falling back to 'signature.png'");
            self.export.filename = ExportConfig::default().filename;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sigpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sigpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// Attempts to read and parse the config file at
    /// `~/.config/sigpad/config.toml`. If the file doesn't exist, or no
    /// config directory can be determined for this user, returns a Config
    /// with default values. All loaded values are validated and clamped to
    /// acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or contains
    /// invalid TOML syntax.
    pub fn load() -> Result<Self> {
        let config_path = match Self::get_config_path() {
            Ok(path) => path,
            Err(err) => {
                log::warn!("No config directory available ({err:#}), using defaults");
                return Ok(Self::default());
            }
        };

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to file.
    ///
    /// Serializes the config to TOML format and writes it to
    /// `~/.config/sigpad/config.toml`. Creates the parent directory if it
    /// doesn't exist. Kept for future use (e.g., runtime config editing).
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    #[allow(dead_code)]
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

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's
    /// config directory. Kept for future use (e.g., `sigpad --init-config`).
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    #[allow(dead_code)]
    pub fn create_default_file() -> Result<()> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        // Create directory
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn default_config_passes_validation_unchanged() {
        let mut config = Config::default();
        config.validate_and_clamp();
        assert_eq!(config.drawing.default_thickness, 3.0);
        assert_eq!(config.drawing.default_theme, Theme::Light);
        assert_eq!(config.surface.height, 400);
        assert_eq!(config.export.filename, "signature.png");
    }

    #[test]
    fn out_of_range_thickness_is_clamped() {
        let mut config = Config::default();
        config.drawing.default_thickness = 99.0;
        config.validate_and_clamp();
        assert_eq!(config.drawing.default_thickness, 20.0);

        config.drawing.default_thickness = 0.2;
        config.validate_and_clamp();
        assert_eq!(config.drawing.default_thickness, 1.0);

        config.drawing.default_thickness = f64::NAN;
        config.validate_and_clamp();
        assert_eq!(config.drawing.default_thickness, 3.0);
    }

    #[test]
    fn inverted_breakpoints_reset_to_defaults() {
        let mut config = Config::default();
        config.surface.wide_min = 300;
        config.surface.narrow_max = 700;
        config.validate_and_clamp();
        assert_eq!(config.surface.wide_min, 750);
        assert_eq!(config.surface.narrow_max, 500);
    }

    #[test]
    fn surface_dimensions_are_clamped() {
        let mut config = Config::default();
        config.surface.height = 0;
        config.surface.wide_width = 100_000;
        config.validate_and_clamp();
        assert_eq!(config.surface.height, 16);
        assert_eq!(config.surface.wide_width, 4096);
    }

    #[test]
    fn empty_filename_falls_back() {
        let mut config = Config::default();
        config.export.filename = "  ".to_string();
        config.validate_and_clamp();
        assert_eq!(config.export.filename, "signature.png");
    }

    #[test]
    fn config_parses_from_toml_fragment() {
        let config: Config = toml::from_str(
            r#"
            [drawing]
            default_thickness = 5.0
            default_theme = "dark"

            [surface]
            wide_width = 800
            "#,
        )
        .unwrap();

        assert_eq!(config.drawing.default_thickness, 5.0);
        assert_eq!(config.drawing.default_theme, Theme::Dark);
        assert_eq!(config.surface.wide_width, 800);
        // Unspecified sections keep their defaults
        assert_eq!(config.surface.height, 400);
        assert_eq!(config.export.filename, "signature.png");
    }
}
