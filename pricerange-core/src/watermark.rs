//! Effective-max watermark.
//!
//! The upper bound used for handle travel and position math is the largest of
//! the nominal `max` and every `value.high` the slider has been handed. It is
//! retained state, not a derived value: once it grows it stays grown for the
//! lifetime of the slider, even when later props would imply a smaller bound.

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveMax {
    value: i64,
}

impl EffectiveMax {
    pub fn new(max: i64, high: i64) -> Self {
        Self { value: max.max(high) }
    }

    /// Fold a new prop update into the watermark. Returns true if it grew.
    pub fn observe(&mut self, max: i64, high: i64) -> bool {
        let next = self.value.max(max).max(high);
        if next > self.value {
            debug!(from = self.value, to = next, "effective max grew");
            self.value = next;
            true
        } else {
            false
        }
    }

    pub fn get(&self) -> i64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_larger_of_max_and_high() {
        assert_eq!(EffectiveMax::new(100, 80).get(), 100);
        assert_eq!(EffectiveMax::new(100, 150).get(), 150);
    }

    #[test]
    fn never_shrinks() {
        let mut wm = EffectiveMax::new(100, 80);
        assert!(wm.observe(100, 250));
        assert_eq!(wm.get(), 250);
        assert!(!wm.observe(100, 60));
        assert_eq!(wm.get(), 250);
        assert!(!wm.observe(50, 40));
        assert_eq!(wm.get(), 250);
    }

    #[test]
    fn grows_with_nominal_max_too() {
        let mut wm = EffectiveMax::new(100, 80);
        assert!(wm.observe(300, 80));
        assert_eq!(wm.get(), 300);
    }
}
