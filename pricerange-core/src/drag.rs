//! Per-handle drag state machine: `Idle -> Dragging -> Idle`.
//!
//! The low handle moves by pointer delta from where the drag started. The
//! high handle follows the absolute pointer position and snaps to the
//! effective max near the right edge. Both behaviours are kept as-is; they
//! feel different under the pointer and unifying them would change that.

use tracing::debug;

use crate::clamp::{clamp_pair, round_input};
use crate::domain::{Handle, RangeValue};
use crate::geometry::Track;
use crate::listeners::{GlobalListeners, ListenerGuard};
use crate::pointer::{PointerEvent, PointerSource};

/// Absolute track fraction at or beyond which the high handle lands exactly
/// on the effective max.
pub const EDGE_SNAP_FRACTION: f64 = 0.995;

/// An in-progress drag of one handle.
#[derive(Debug)]
pub struct DragSession {
    handle: Handle,
    source: PointerSource,
    start_x: f64,
    start_value: i64,
    track: Track,
    _listeners: ListenerGuard,
}

impl DragSession {
    /// Capture the starting pointer and value and attach global listeners.
    pub fn begin(
        handle: Handle,
        event: &PointerEvent,
        start_value: i64,
        track: Track,
        listeners: &GlobalListeners,
    ) -> Self {
        debug!(handle = handle.label(), x = event.x, start_value, "drag started");
        Self {
            handle,
            source: event.source,
            start_x: event.x,
            start_value,
            track,
            _listeners: listeners.attach(handle, event.source.modality()),
        }
    }

    /// Only the pointer that started the drag may move it.
    pub fn accepts(&self, source: PointerSource) -> bool {
        self.source == source
    }

    /// Pair to emit for a pointer at `x`, clamped against the current value.
    pub fn resolve(&self, x: f64, value: RangeValue, min: i64, effective_max: i64) -> RangeValue {
        let span = effective_max as f64 - min as f64;
        let candidate = match self.handle {
            Handle::Low => {
                let delta = self.track.delta_fraction(self.start_x, x) * span;
                round_input(self.start_value as f64 + delta, self.start_value)
            }
            Handle::High => {
                let fraction = self.track.fraction_at(x);
                if fraction >= EDGE_SNAP_FRACTION {
                    effective_max
                } else {
                    round_input(min as f64 + fraction * span, self.start_value)
                }
            }
        };
        clamp_pair(value, self.handle, candidate, min, effective_max)
    }
}

/// State of one handle.
#[derive(Debug, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(session) => Some(session),
        }
    }

    /// Return to idle, releasing the session's listeners.
    pub fn end(&mut self) -> bool {
        match std::mem::take(self) {
            DragState::Idle => false,
            DragState::Dragging(session) => {
                debug!(handle = session.handle.label(), "drag ended");
                true
            }
        }
    }
}
