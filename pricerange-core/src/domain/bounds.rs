use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from constructing slider bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundsError {
    #[error("slider min {min} exceeds max {max}")]
    Inverted { min: i64, max: i64 },
}

/// Nominal `[min, max]` interval of a slider, fixed at mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderBounds {
    pub min: i64,
    pub max: i64,
}

impl SliderBounds {
    /// Create bounds, rejecting `min > max`.
    pub fn new(min: i64, max: i64) -> Result<Self, BoundsError> {
        if min > max {
            return Err(BoundsError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }
}

impl Default for SliderBounds {
    fn default() -> Self {
        Self { min: 0, max: 1000 }
    }
}
