//! RangeSlider — a fully controlled two-handle range selector.
//!
//! The caller owns the `(low, high)` pair. The slider reads it from props,
//! emits a new always-valid pair through a [`ChangeSink`] on every drag move
//! or direct input, and never writes it back itself. The caller feeds the
//! accepted value in again with [`RangeSlider::set_value`].

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::clamp::{clamp_pair, round_input};
use crate::domain::{Handle, RangeValue, SliderBounds};
use crate::drag::{DragSession, DragState};
use crate::geometry::{LabelFormat, SliderLayout, Track};
use crate::listeners::{GlobalListeners, ListenerKind};
use crate::pointer::{PointerEvent, PointerPhase};
use crate::watermark::EffectiveMax;

/// Receives every value the slider emits.
pub trait ChangeSink {
    fn on_change(&mut self, value: RangeValue);
}

impl<F: FnMut(RangeValue)> ChangeSink for F {
    fn on_change(&mut self, value: RangeValue) {
        self(value)
    }
}

/// Caller-controlled inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderProps {
    pub bounds: SliderBounds,
    pub value: RangeValue,
    #[serde(default)]
    pub disabled: bool,
}

impl SliderProps {
    pub fn new(bounds: SliderBounds, value: RangeValue) -> Self {
        Self {
            bounds,
            value,
            disabled: false,
        }
    }
}

#[derive(Debug)]
pub struct RangeSlider {
    props: SliderProps,
    effective_max: EffectiveMax,
    labels: LabelFormat,
    low: DragState,
    high: DragState,
    listeners: GlobalListeners,
}

impl RangeSlider {
    pub fn new(props: SliderProps) -> Self {
        Self {
            effective_max: EffectiveMax::new(props.bounds.max, props.value.high),
            props,
            labels: LabelFormat::default(),
            low: DragState::Idle,
            high: DragState::Idle,
            listeners: GlobalListeners::new(),
        }
    }

    pub fn with_labels(mut self, labels: LabelFormat) -> Self {
        self.labels = labels;
        self
    }

    pub fn props(&self) -> &SliderProps {
        &self.props
    }

    pub fn value(&self) -> RangeValue {
        self.props.value
    }

    pub fn effective_max(&self) -> i64 {
        self.effective_max.get()
    }

    pub fn labels(&self) -> &LabelFormat {
        &self.labels
    }

    pub fn listeners(&self) -> &GlobalListeners {
        &self.listeners
    }

    /// Replace all props. Disabling ends any drag in progress.
    pub fn set_props(&mut self, props: SliderProps) {
        self.effective_max.observe(props.bounds.max, props.value.high);
        self.props = props;
        if props.disabled {
            let ended = self.low.end() | self.high.end();
            if ended {
                debug!("slider disabled mid-drag");
            }
        }
    }

    /// Accept a new value from the caller.
    pub fn set_value(&mut self, value: RangeValue) {
        self.set_props(SliderProps { value, ..self.props });
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.set_props(SliderProps {
            disabled,
            ..self.props
        });
    }

    /// Positions and labels for the current props and watermark.
    pub fn layout(&self) -> SliderLayout {
        SliderLayout::compute(
            self.props.bounds.min,
            self.effective_max.get(),
            self.props.value,
            &self.labels,
        )
    }

    pub fn is_dragging(&self, handle: Handle) -> bool {
        self.state(handle).is_dragging()
    }

    /// Pointer-down on a handle. Returns true if a drag started.
    pub fn press(&mut self, handle: Handle, event: PointerEvent, track: Track) -> bool {
        if self.props.disabled || event.phase != PointerPhase::Down {
            return false;
        }
        // A second press on the same handle restarts its drag.
        self.state_mut(handle).end();
        let start_value = self.props.value.get(handle);
        let session = DragSession::begin(handle, &event, start_value, track, &self.listeners);
        *self.state_mut(handle) = DragState::Dragging(session);
        true
    }

    /// Deliver a global pointer event to every drag listening for it.
    ///
    /// Moves emit a clamped value immediately; up and cancel end the drag.
    /// Returns true if any session consumed the event.
    pub fn dispatch<S: ChangeSink + ?Sized>(&mut self, event: PointerEvent, sink: &mut S) -> bool {
        let Some(kind) = ListenerKind::for_phase(event.phase) else {
            return false;
        };
        let modality = event.source.modality();
        let mut consumed = false;

        for handle in Handle::BOTH {
            let accepts = self
                .state(handle)
                .session()
                .is_some_and(|s| s.accepts(event.source));
            if !accepts || !self.listeners.listens(handle, modality, kind) {
                continue;
            }
            consumed = true;

            if event.phase.is_terminal() {
                self.state_mut(handle).end();
                continue;
            }

            let value = self.props.value;
            let min = self.props.bounds.min;
            let effective_max = self.effective_max.get();
            if let Some(session) = self.state(handle).session() {
                let next = session.resolve(event.x, value, min, effective_max);
                trace!(handle = handle.label(), x = event.x, %next, "drag move");
                sink.on_change(next);
            }
        }
        consumed
    }

    /// Direct numeric input for one handle (keyboard, native range input).
    pub fn input<S: ChangeSink + ?Sized>(&mut self, handle: Handle, raw: f64, sink: &mut S) {
        if self.props.disabled {
            return;
        }
        let value = self.props.value;
        let candidate = round_input(raw, value.get(handle));
        sink.on_change(clamp_pair(
            value,
            handle,
            candidate,
            self.props.bounds.min,
            self.effective_max.get(),
        ));
    }

    /// Handle nearest to `x`, if within `tolerance` host units.
    ///
    /// When both handles are equally near, a pointer at or right of them
    /// picks the high handle.
    pub fn handle_at(&self, x: f64, track: Track, tolerance: f64) -> Option<Handle> {
        let layout = self.layout();
        let low_x = track.x_at_percent(layout.low_pct);
        let high_x = track.x_at_percent(layout.high_pct);
        let low_d = (x - low_x).abs();
        let high_d = (x - high_x).abs();

        let pick = if low_d < high_d {
            Handle::Low
        } else if high_d < low_d {
            Handle::High
        } else if x >= high_x {
            Handle::High
        } else {
            Handle::Low
        };
        let distance = low_d.min(high_d);
        (distance <= tolerance).then_some(pick)
    }

    fn state(&self, handle: Handle) -> &DragState {
        match handle {
            Handle::Low => &self.low,
            Handle::High => &self.high,
        }
    }

    fn state_mut(&mut self, handle: Handle) -> &mut DragState {
        match handle {
            Handle::Low => &mut self.low,
            Handle::High => &mut self.high,
        }
    }
}
