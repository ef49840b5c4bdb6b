use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_TITLE, DEFAULT_ZOOM_MAX, DEFAULT_ZOOM_MIN, DEFAULT_ZOOM_STEP};
use crate::error::{BandviewError, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub title: String,
    pub stretch: DisplayStretch,
    /// Initial window size in logical pixels (width, height).
    pub window_size: [f32; 2],
    pub zoom: ZoomConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            stretch: DisplayStretch::default(),
            window_size: [1024.0, 768.0],
            zoom: ZoomConfig::default(),
        }
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<()> {
        self.zoom.validate()
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| BandviewError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| BandviewError::Config(e.to_string()))
    }
}

/// Read and validate a TOML config file.
pub fn load_config(path: &Path) -> Result<ViewerConfig> {
    let text = std::fs::read_to_string(path)?;
    ViewerConfig::from_toml(&text)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub min: f64,
    pub max: f64,
    /// Zoom change per scroll tick.
    pub step: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_ZOOM_MIN,
            max: DEFAULT_ZOOM_MAX,
            step: DEFAULT_ZOOM_STEP,
        }
    }
}

impl ZoomConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min.is_nan() || self.min < 1.0 {
            return Err(BandviewError::Config(format!(
                "zoom.min must be at least 1, got {}",
                self.min
            )));
        }
        if self.max.is_nan() || self.min >= self.max {
            return Err(BandviewError::Config(format!(
                "zoom.min ({}) must be below zoom.max ({})",
                self.min, self.max
            )));
        }
        if self.step.is_nan() || self.step <= 0.0 {
            return Err(BandviewError::Config(format!(
                "zoom.step must be positive, got {}",
                self.step
            )));
        }
        Ok(())
    }
}

/// How composite values map onto display intensities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayStretch {
    /// Gray composites are min-max normalized, colour composites clipped.
    #[default]
    Auto,
    /// Clip every channel to [0.0, 1.0].
    Clip,
    /// Normalize every channel from its own min..max.
    MinMax,
}

impl fmt::Display for DisplayStretch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayStretch::Auto => write!(f, "Auto"),
            DisplayStretch::Clip => write!(f, "Clip"),
            DisplayStretch::MinMax => write!(f, "Min-Max"),
        }
    }
}
