//! Slider configuration — TOML file describing bounds and the initial range.
//!
//! ```toml
//! min = 0
//! max = 5000
//! low = 500
//! high = 2500
//! label_prefix = "₹"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{RangeValue, SliderBounds};
use crate::error::ConfigError;
use crate::geometry::LabelFormat;
use crate::slider::{RangeSlider, SliderProps};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub min: i64,
    pub max: i64,
    /// Initial selection. Fractional values are rounded.
    pub low: f64,
    pub high: f64,
    pub disabled: bool,
    pub label_prefix: String,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0,
            max: 1000,
            low: 0.0,
            high: 1000.0,
            disabled: false,
            label_prefix: "₹".to_string(),
        }
    }
}

impl SliderConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Validate bounds and build props. The initial value is not clamped:
    /// the slider tolerates whatever the caller supplies.
    pub fn props(&self) -> Result<SliderProps, ConfigError> {
        let bounds = SliderBounds::new(self.min, self.max)?;
        Ok(SliderProps {
            bounds,
            value: RangeValue::from_f64(self.low, self.high),
            disabled: self.disabled,
        })
    }

    pub fn labels(&self) -> LabelFormat {
        LabelFormat::new(self.label_prefix.clone())
    }

    pub fn build(&self) -> Result<RangeSlider, ConfigError> {
        Ok(RangeSlider::new(self.props()?).with_labels(self.labels()))
    }
}
