//! Track geometry and position math.

use serde::{Deserialize, Serialize};

use crate::domain::{Handle, RangeValue};

/// Horizontal extent of the track in host units (pixels, terminal cells).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub left: f64,
    pub width: f64,
}

impl Track {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Absolute pointer position as a fraction of the track width.
    ///
    /// Not clamped: a pointer left of the track yields a negative fraction.
    pub fn fraction_at(&self, x: f64) -> f64 {
        if self.width <= 0.0 {
            return 0.0;
        }
        (x - self.left) / self.width
    }

    /// Pointer movement since `start_x` as a fraction of the track width.
    pub fn delta_fraction(&self, start_x: f64, x: f64) -> f64 {
        if self.width <= 0.0 {
            return 0.0;
        }
        (x - start_x) / self.width
    }

    /// Host coordinate of a percentage position along the track.
    pub fn x_at_percent(&self, pct: f64) -> f64 {
        self.left + self.width * pct / 100.0
    }
}

/// Position of `value` as a percentage of `[min, effective_max]`.
///
/// Computed in `f64` so bounds spanning the whole `i64` range cannot overflow.
pub fn percent_of(value: i64, min: i64, effective_max: i64) -> f64 {
    if effective_max <= min {
        return 0.0;
    }
    (value as f64 - min as f64) / (effective_max as f64 - min as f64) * 100.0
}

/// Formatting for the floating value labels above each handle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelFormat {
    pub prefix: String,
}

impl LabelFormat {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }

    pub fn format(&self, value: i64) -> String {
        format!("{}{}", self.prefix, value)
    }
}

/// Everything a host needs to draw the slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderLayout {
    pub low_pct: f64,
    pub high_pct: f64,
    pub fill_left_pct: f64,
    pub fill_width_pct: f64,
    pub low_label: String,
    pub high_label: String,
    pub effective_max: i64,
}

impl SliderLayout {
    pub fn compute(min: i64, effective_max: i64, value: RangeValue, labels: &LabelFormat) -> Self {
        let low_pct = percent_of(value.low, min, effective_max);
        let high_pct = percent_of(value.high, min, effective_max);
        let fill_width_pct = (high_pct - low_pct).min(100.0 - low_pct).max(0.0);
        Self {
            low_pct,
            high_pct,
            fill_left_pct: low_pct,
            fill_width_pct,
            low_label: labels.format(value.low),
            high_label: labels.format(value.high),
            effective_max,
        }
    }

    pub fn handle_pct(&self, handle: Handle) -> f64 {
        match handle {
            Handle::Low => self.low_pct,
            Handle::High => self.high_pct,
        }
    }
}
