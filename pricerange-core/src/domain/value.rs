use std::fmt;

use serde::{Deserialize, Serialize};

use super::Handle;

/// The currently selected `(low, high)` sub-range.
///
/// Owned by the caller. Construction does not validate: a misbehaving caller
/// may hand in `high <= low`, and every consumer clamps instead of rejecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RangeValue {
    pub low: i64,
    pub high: i64,
}

impl RangeValue {
    pub fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }

    /// Build from fractional input, rounding each end half away from zero.
    pub fn from_f64(low: f64, high: f64) -> Self {
        Self {
            low: low.round() as i64,
            high: high.round() as i64,
        }
    }

    pub fn get(&self, handle: Handle) -> i64 {
        match handle {
            Handle::Low => self.low,
            Handle::High => self.high,
        }
    }

    /// Copy with one end replaced.
    pub fn with(self, handle: Handle, value: i64) -> Self {
        match handle {
            Handle::Low => Self { low: value, ..self },
            Handle::High => Self { high: value, ..self },
        }
    }

    /// True when `low < high`.
    pub fn is_ordered(&self) -> bool {
        self.low < self.high
    }
}

impl fmt::Display for RangeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_f64_rounds() {
        assert_eq!(RangeValue::from_f64(19.5, 80.4), RangeValue::new(20, 80));
        assert_eq!(RangeValue::from_f64(-0.6, 2.49), RangeValue::new(-1, 2));
    }

    #[test]
    fn with_replaces_one_end() {
        let v = RangeValue::new(20, 80);
        assert_eq!(v.with(Handle::Low, 30), RangeValue::new(30, 80));
        assert_eq!(v.with(Handle::High, 90), RangeValue::new(20, 90));
        assert_eq!(v.get(Handle::High), 80);
    }

    #[test]
    fn ordering() {
        assert!(RangeValue::new(1, 2).is_ordered());
        assert!(!RangeValue::new(2, 2).is_ordered());
    }
}
