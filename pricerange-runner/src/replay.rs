//! Replay a scenario against a live slider and its owning price filter.

use std::time::{Duration, Instant};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use pricerange_core::{PointerEvent, PointerPhase, RangeSlider, RangeValue};

use crate::filter::{PriceFilter, PriceQuery};
use crate::scenario::{Scenario, ScenarioError, Step};

/// One value the slider emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub step: usize,
    pub elapsed_ms: u64,
    pub value: RangeValue,
}

/// A query the owner decided to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRecord {
    pub step: usize,
    pub elapsed_ms: u64,
    pub query: PriceQuery,
}

/// An emitted value that broke the clamp invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvariantViolation {
    pub step: usize,
    pub value: RangeValue,
    pub min: i64,
    pub effective_max: i64,
    pub reason: String,
}

impl InvariantViolation {
    /// Check `value` against `[min, effective_max]` and `low < high`.
    pub fn check(step: usize, value: RangeValue, min: i64, effective_max: i64) -> Option<Self> {
        let reason = if value.low >= value.high {
            "low is not below high"
        } else if value.low < min {
            "low is below min"
        } else if value.high > effective_max {
            "high is above effective max"
        } else {
            return None;
        };
        Some(Self {
            step,
            value,
            min,
            effective_max,
            reason: reason.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub scenario: String,
    pub changes: Vec<ChangeRecord>,
    pub queries: Vec<QueryRecord>,
    pub violations: Vec<InvariantViolation>,
    pub final_value: RangeValue,
    pub effective_max: i64,
    /// Listeners still attached when the script ran out (drags left open).
    pub listeners_open: usize,
    /// Listeners still attached after the slider was dropped.
    pub listeners_leaked: usize,
    pub listeners_attached: u64,
}

impl Transcript {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty() && self.listeners_leaked == 0
    }
}

/// Drive a slider through every step, feeding emitted values through a
/// [`PriceFilter`] owner and back into the slider's props.
pub fn replay(scenario: &Scenario) -> Result<Transcript, ScenarioError> {
    let mut slider = scenario.slider.build()?;
    let listeners = slider.listeners().clone();
    let min = slider.props().bounds.min;
    let quiet = Duration::from_millis(scenario.debounce_ms);
    let mut owner = PriceFilter::new(slider.value(), quiet);

    let start = Instant::now();
    let mut elapsed_ms = 0u64;
    let mut changes = Vec::new();
    let mut queries = Vec::new();
    let mut violations = Vec::new();

    for (step, action) in scenario.steps.iter().enumerate() {
        elapsed_ms += match action {
            Step::Wait { ms } => *ms,
            _ => scenario.step_ms,
        };
        let now = start + Duration::from_millis(elapsed_ms);

        let emitted = match *action {
            // A value set by the page itself is the owner's new state too.
            Step::SetValue { low, high } => {
                owner.apply(RangeValue::new(low, high), now);
                slider.set_value(owner.value());
                Vec::new()
            }
            _ => apply_step(&mut slider, scenario, action),
        };
        for value in emitted {
            let effective_max = slider.effective_max();
            if let Some(v) = InvariantViolation::check(step, value, min, effective_max) {
                warn!(scenario = %scenario.name, step, %value, reason = %v.reason, "clamp invariant broken");
                violations.push(v);
            }
            changes.push(ChangeRecord {
                step,
                elapsed_ms,
                value,
            });
            owner.apply(value, now);
            slider.set_value(owner.value());
        }

        if let Some(query) = owner.poll(now) {
            queries.push(QueryRecord {
                step,
                elapsed_ms,
                query,
            });
        }
    }

    if let Some(query) = owner.flush() {
        queries.push(QueryRecord {
            step: scenario.steps.len(),
            elapsed_ms: elapsed_ms + scenario.debounce_ms,
            query,
        });
    }

    let final_value = slider.value();
    let effective_max = slider.effective_max();
    let listeners_open = listeners.active_count();
    drop(slider);

    let transcript = Transcript {
        scenario: scenario.name.clone(),
        changes,
        queries,
        violations,
        final_value,
        effective_max,
        listeners_open,
        listeners_leaked: listeners.active_count(),
        listeners_attached: listeners.attached_total(),
    };
    debug!(
        scenario = %transcript.scenario,
        changes = transcript.changes.len(),
        queries = transcript.queries.len(),
        "scenario replayed"
    );
    Ok(transcript)
}

fn apply_step(slider: &mut RangeSlider, scenario: &Scenario, step: &Step) -> Vec<RangeValue> {
    let mut emitted = Vec::new();
    match *step {
        Step::Press { handle, x, source } => {
            slider.press(
                handle,
                PointerEvent::new(source, PointerPhase::Down, x),
                scenario.track,
            );
        }
        Step::Move { x, source } => {
            slider.dispatch(PointerEvent::new(source, PointerPhase::Move, x), &mut |v| {
                emitted.push(v)
            });
        }
        Step::Release { x, source } => {
            slider.dispatch(PointerEvent::new(source, PointerPhase::Up, x), &mut |v| {
                emitted.push(v)
            });
        }
        Step::Cancel { source } => {
            slider.dispatch(PointerEvent::new(source, PointerPhase::Cancel, 0.0), &mut |v| {
                emitted.push(v)
            });
        }
        Step::Input { handle, value } => {
            slider.input(handle, value, &mut |v| emitted.push(v));
        }
        Step::SetDisabled { disabled } => slider.set_disabled(disabled),
        Step::SetValue { .. } | Step::Wait { .. } => {}
    }
    emitted
}

/// Replay many scenarios in parallel. Results keep input order.
pub fn replay_all(scenarios: &[Scenario]) -> Vec<Result<Transcript, ScenarioError>> {
    scenarios.par_iter().map(replay).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricerange_core::{Handle, PointerSource, SliderConfig, Track};

    fn config(min: i64, max: i64, low: f64, high: f64) -> SliderConfig {
        SliderConfig {
            min,
            max,
            low,
            high,
            ..SliderConfig::default()
        }
    }

    #[test]
    fn check_reports_each_reason() {
        assert!(InvariantViolation::check(0, RangeValue::new(1, 2), 0, 10).is_none());
        let v = InvariantViolation::check(0, RangeValue::new(2, 2), 0, 10).unwrap();
        assert_eq!(v.reason, "low is not below high");
        let v = InvariantViolation::check(0, RangeValue::new(-1, 2), 0, 10).unwrap();
        assert_eq!(v.reason, "low is below min");
        let v = InvariantViolation::check(0, RangeValue::new(1, 11), 0, 10).unwrap();
        assert_eq!(v.reason, "high is above effective max");
    }

    #[test]
    fn open_drag_is_released_on_drop() {
        let scenario = Scenario::new("open", config(0, 100, 20.0, 80.0), Track::new(0.0, 100.0))
            .with_steps(vec![
                Step::Press {
                    handle: Handle::Low,
                    x: 20.0,
                    source: PointerSource::Mouse,
                },
                Step::Move {
                    x: 40.0,
                    source: PointerSource::Mouse,
                },
            ]);
        let t = replay(&scenario).unwrap();
        assert_eq!(t.listeners_open, 2);
        assert_eq!(t.listeners_leaked, 0);
        assert!(t.is_clean());
        assert_eq!(t.final_value, RangeValue::new(40, 80));
    }

    #[test]
    fn set_value_grows_watermark() {
        let scenario = Scenario::new("grow", config(0, 100, 20.0, 80.0), Track::new(0.0, 100.0))
            .with_steps(vec![
                Step::SetValue { low: 20, high: 400 },
                Step::SetValue { low: 20, high: 60 },
            ]);
        let t = replay(&scenario).unwrap();
        assert_eq!(t.effective_max, 400);
        assert!(t.changes.is_empty());
        assert_eq!(t.queries.len(), 1);
        assert_eq!(t.queries[0].query.to_query_string(), "minPrice=20&maxPrice=60");
    }

    #[test]
    fn set_value_replaces_pending_change() {
        let mouse = PointerSource::Mouse;
        let scenario = Scenario::new("reset", config(0, 100, 20.0, 80.0), Track::new(0.0, 100.0))
            .with_steps(vec![
                Step::Press {
                    handle: Handle::Low,
                    x: 20.0,
                    source: mouse,
                },
                Step::Move { x: 40.0, source: mouse },
                Step::Release { x: 40.0, source: mouse },
                Step::SetValue { low: 10, high: 90 },
            ]);
        let t = replay(&scenario).unwrap();
        assert_eq!(t.changes.len(), 1);
        assert_eq!(t.final_value, RangeValue::new(10, 90));
        let sent: Vec<String> = t.queries.iter().map(|q| q.query.to_query_string()).collect();
        assert_eq!(sent, vec!["minPrice=10&maxPrice=90"]);
    }
}
