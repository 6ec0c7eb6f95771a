//! Randomised interaction scripts.
//!
//! A master seed is expanded into one sub-seed per scenario index via BLAKE3,
//! so a run is reproducible regardless of how rayon schedules the work.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use pricerange_core::{Handle, PointerSource, SliderConfig, Track};

use crate::replay::{replay, InvariantViolation};
use crate::scenario::{Scenario, ScenarioError, Step};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzConfig {
    pub seed: u64,
    pub scenarios: usize,
    pub steps_per_scenario: usize,
    pub min: i64,
    pub max: i64,
    pub track_width: f64,
}

impl Default for FuzzConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            scenarios: 200,
            steps_per_scenario: 64,
            min: 0,
            max: 10_000,
            track_width: 640.0,
        }
    }
}

/// Deterministic sub-seed for one scenario.
pub fn sub_seed(master: u64, index: usize) -> u64 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&master.to_le_bytes());
    hasher.update(&(index as u64).to_le_bytes());
    let hash = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}

fn random_source(rng: &mut StdRng) -> PointerSource {
    if rng.gen_bool(0.5) {
        PointerSource::Mouse
    } else {
        PointerSource::Touch {
            id: rng.gen_range(0..4),
        }
    }
}

fn random_handle(rng: &mut StdRng) -> Handle {
    if rng.gen_bool(0.5) {
        Handle::Low
    } else {
        Handle::High
    }
}

/// Build one random script. Every press is followed by a release or cancel
/// from the same source, so a correct slider ends with nothing attached.
pub fn generate(config: &FuzzConfig, index: usize) -> Scenario {
    let mut rng = StdRng::seed_from_u64(sub_seed(config.seed, index));
    let span = config.max.saturating_sub(config.min).max(2);
    let low = config.min.saturating_add(rng.gen_range(0..span - 1));
    let high = rng.gen_range(low + 1..=config.min.saturating_add(span));
    let slider = SliderConfig {
        min: config.min,
        max: config.max,
        low: low as f64,
        high: high as f64,
        ..SliderConfig::default()
    };
    let width = config.track_width.max(1.0);
    let track = Track::new(rng.gen_range(0.0..50.0), width);
    let x_range = (track.left - width * 0.25)..(track.left + width * 1.25);

    let mut steps = Vec::with_capacity(config.steps_per_scenario);
    while steps.len() < config.steps_per_scenario {
        match rng.gen_range(0..11) {
            0..=5 => {
                let source = random_source(&mut rng);
                steps.push(Step::Press {
                    handle: random_handle(&mut rng),
                    x: rng.gen_range(x_range.clone()),
                    source,
                });
                for _ in 0..rng.gen_range(1..6) {
                    steps.push(Step::Move {
                        x: rng.gen_range(x_range.clone()),
                        source,
                    });
                }
                if rng.gen_bool(0.8) {
                    steps.push(Step::Release {
                        x: rng.gen_range(x_range.clone()),
                        source,
                    });
                } else {
                    steps.push(Step::Cancel { source });
                }
            }
            6 | 7 => steps.push(Step::Input {
                handle: random_handle(&mut rng),
                value: rng.gen_range(
                    config.min as f64 - span as f64..config.max as f64 + span as f64,
                ),
            }),
            8 => {
                // Upstream data occasionally implies a wider range.
                let low = config.min.saturating_add(rng.gen_range(0..span - 1));
                let high = rng.gen_range(low + 1..=config.max.saturating_add(span));
                steps.push(Step::SetValue { low, high });
            }
            9 => {
                // Misbehaving caller: either end out of bounds, maybe inverted.
                let outside = config.min.saturating_sub(span)..=config.max.saturating_add(span);
                steps.push(Step::SetValue {
                    low: rng.gen_range(outside.clone()),
                    high: rng.gen_range(outside),
                });
            }
            _ => steps.push(Step::Wait {
                ms: rng.gen_range(0..500),
            }),
        }
    }

    Scenario::new(format!("fuzz-{}-{index}", config.seed), slider, track).with_steps(steps)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FuzzReport {
    pub seed: u64,
    pub scenarios_run: usize,
    pub total_changes: usize,
    pub total_queries: usize,
    pub violations: Vec<(String, InvariantViolation)>,
    pub listeners_open: usize,
    pub listeners_leaked: usize,
    pub max_effective_max: i64,
}

impl FuzzReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty() && self.listeners_open == 0 && self.listeners_leaked == 0
    }
}

/// Generate and replay `config.scenarios` scripts in parallel.
pub fn fuzz(config: &FuzzConfig) -> Result<FuzzReport, ScenarioError> {
    let transcripts = (0..config.scenarios)
        .into_par_iter()
        .map(|i| replay(&generate(config, i)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut report = FuzzReport {
        seed: config.seed,
        scenarios_run: transcripts.len(),
        max_effective_max: config.max,
        ..FuzzReport::default()
    };
    for t in transcripts {
        report.total_changes += t.changes.len();
        report.total_queries += t.queries.len();
        report.listeners_open += t.listeners_open;
        report.listeners_leaked += t.listeners_leaked;
        report.max_effective_max = report.max_effective_max.max(t.effective_max);
        report
            .violations
            .extend(t.violations.into_iter().map(|v| (t.scenario.clone(), v)));
    }
    info!(
        seed = report.seed,
        scenarios = report.scenarios_run,
        changes = report.total_changes,
        violations = report.violations.len(),
        "fuzz run complete"
    );
    Ok(report)
}
