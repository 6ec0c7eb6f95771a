//! Clamp rules shared by drag and direct input.
//!
//! Out-of-range input is adjusted, never rejected. When a misbehaving caller
//! leaves an empty interval (e.g. `high <= min`), the bound that keeps
//! `low < high` wins.

use crate::domain::{Handle, RangeValue};

/// Clamp a low-handle candidate to `[min, high - 1]`.
pub fn clamp_low(candidate: i64, min: i64, high: i64) -> i64 {
    candidate.max(min).min(high.saturating_sub(1))
}

/// Clamp a high-handle candidate to `[low + 1, effective_max]`.
pub fn clamp_high(candidate: i64, low: i64, effective_max: i64) -> i64 {
    candidate.min(effective_max).max(low.saturating_add(1))
}

/// Build the pair emitted when `handle` moves to `candidate`.
///
/// The other end comes from the caller and may itself be out of bounds, so
/// it is pulled into `[min, effective_max]` first and the moved end is then
/// clamped against it.
pub fn clamp_pair(
    value: RangeValue,
    handle: Handle,
    candidate: i64,
    min: i64,
    effective_max: i64,
) -> RangeValue {
    match handle {
        Handle::Low => {
            let high = value.high.min(effective_max).max(min.saturating_add(1));
            RangeValue::new(clamp_low(candidate, min, high), high)
        }
        Handle::High => {
            let low = value.low.max(min).min(effective_max.saturating_sub(1));
            RangeValue::new(low, clamp_high(candidate, low, effective_max))
        }
    }
}

/// Round fractional input to the nearest integer. NaN keeps `fallback`.
pub fn round_input(raw: f64, fallback: i64) -> i64 {
    if raw.is_nan() {
        return fallback;
    }
    // `as` saturates at the i64 range for infinities.
    raw.round() as i64
}
