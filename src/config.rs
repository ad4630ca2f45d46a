//! Configuration for colorizing stroke order diagrams

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or validating a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// How colors are spread over the strokes (or groups) of a diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ColorMode {
    /// Evenly spaced hues over one full turn of the color wheel
    #[default]
    Spectrum,
    /// Golden-ratio hue steps, same sequence for every diagram
    Contrast,
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Spectrum => f.write_str("spectrum"),
            ColorMode::Contrast => f.write_str("contrast"),
        }
    }
}

/// Settings read by every transform call
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ColorizerConfig {
    /// Color assignment mode
    pub mode: ColorMode,

    /// Saturation, 0 is gray and 1 is fully colorful
    pub saturation: f64,

    /// Value, 0 is black and 1 is bright
    pub value: f64,

    /// Output width and height in pixels
    pub image_size: u32,

    /// Color stroke groups instead of individual strokes
    pub group_mode: bool,

    /// Draw the dashed guide grid under the strokes
    pub enable_grid: bool,

    /// Stroke color of the guide grid
    pub grid_color: String,

    /// Inset of the guide grid from the diagram border
    pub grid_offset: i32,
}

impl Default for ColorizerConfig {
    fn default() -> Self {
        Self {
            mode: ColorMode::Spectrum,
            saturation: 0.95,
            value: 0.75,
            image_size: 327,
            group_mode: false,
            enable_grid: false,
            grid_color: "#c4c4c4".to_string(),
            grid_offset: 1,
        }
    }
}

impl ColorizerConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a configuration from a TOML string; missing keys keep their defaults
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: ColorizerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is in its accepted range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.saturation) {
            return Err(ConfigError::Invalid(format!(
                "saturation must be between 0 and 1, got {}",
                self.saturation
            )));
        }
        if !(0.0..=1.0).contains(&self.value) {
            return Err(ConfigError::Invalid(format!(
                "value must be between 0 and 1, got {}",
                self.value
            )));
        }
        if self.image_size == 0 {
            return Err(ConfigError::Invalid(
                "image size must be a positive number of pixels".to_string(),
            ));
        }
        if !(0..=54).contains(&self.grid_offset) {
            return Err(ConfigError::Invalid(format!(
                "grid offset must be between 0 and 54, got {}",
                self.grid_offset
            )));
        }
        Ok(())
    }

    /// Set the color mode
    pub fn with_mode(mut self, mode: ColorMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the saturation
    pub fn with_saturation(mut self, saturation: f64) -> Self {
        self.saturation = saturation;
        self
    }

    /// Set the value
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    /// Set the output image size
    pub fn with_image_size(mut self, size: u32) -> Self {
        self.image_size = size;
        self
    }

    /// Enable or disable per-group coloring
    pub fn with_group_mode(mut self, group_mode: bool) -> Self {
        self.group_mode = group_mode;
        self
    }

    /// Enable or disable the guide grid
    pub fn with_grid(mut self, enable: bool) -> Self {
        self.enable_grid = enable;
        self
    }

    /// Set the guide grid color
    pub fn with_grid_color(mut self, color: impl Into<String>) -> Self {
        self.grid_color = color.into();
        self
    }

    /// Set the guide grid inset
    pub fn with_grid_offset(mut self, offset: i32) -> Self {
        self.grid_offset = offset;
        self
    }
}
