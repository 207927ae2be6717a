// src/config.rs

//! Defines the configuration structures for annotation defaults.
//!
//! Every section derives `Deserialize` with `#[serde(default)]`, so a config
//! file only needs the fields it wants to change. The process-wide [`CONFIG`]
//! reads the JSON file named by `ANNOTATE_CONFIG` on first use and falls back
//! to defaults if the variable is unset or the file is unusable.

use crate::canvas::Channels;
use crate::color::{Color, NamedColor};
use crate::error::ConfigError;
use log::{info, warn};
use once_cell::sync::Lazy; // For the CONFIG static
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV_VAR: &str = "ANNOTATE_CONFIG";

/// Process-wide configuration, loaded once.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Cross marker defaults.
    pub cross: CrossConfig,
    /// Region masking defaults.
    pub mask: MaskConfig,
    /// Text rendering defaults.
    pub text: TextConfig,
    /// Grayscale import defaults.
    pub import: ImportConfig,
}

impl Config {
    /// Parses a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Loads from `ANNOTATE_CONFIG` if set, otherwise defaults.
    fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Config::default();
        };
        match Config::load(&path) {
            Ok(config) => {
                info!("Loaded configuration from {:?}", path);
                config
            }
            Err(e) => {
                warn!("{}. Using default configuration.", e);
                Config::default()
            }
        }
    }
}

/// Cross marker settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrossConfig {
    pub color: Color,
    /// Arm length in pixels, not counting the center.
    pub radius: usize,
}

impl Default for CrossConfig {
    fn default() -> Self {
        CrossConfig {
            color: NamedColor::Red.into(),
            radius: 4, // 9x9 marker
        }
    }
}

/// Region masking settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskConfig {
    pub color: Color,
}

impl Default for MaskConfig {
    fn default() -> Self {
        MaskConfig {
            color: NamedColor::Green.into(),
        }
    }
}

/// Text rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub color: Color,
    /// Blend glyph coverage with the destination instead of thresholding it.
    pub antialias: bool,
    /// Treat the text origin as the center of the rendered block.
    pub center: bool,
    /// Blank rows between lines of multi-line text.
    pub line_spacing: usize,
}

impl Default for TextConfig {
    fn default() -> Self {
        TextConfig {
            color: NamedColor::White.into(),
            antialias: false,
            center: false,
            line_spacing: 1, // One blank row between bands
        }
    }
}

/// Grayscale import settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ImportConfig {
    /// Channels populated by a grayscale import.
    pub channels: Channels,
}
