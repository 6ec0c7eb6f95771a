//! Pointer abstraction.
//!
//! Mouse and touch input are two coordinate sources feeding the same drag
//! state machine, so both modalities share one set of clamp semantics.

use serde::{Deserialize, Serialize};

/// Input modality a listener is registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    Mouse,
    Touch,
}

/// Where a pointer event came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerSource {
    #[default]
    Mouse,
    /// A single touch point, identified so multi-touch drags stay apart.
    Touch { id: u32 },
}

impl PointerSource {
    pub fn modality(self) -> Modality {
        match self {
            PointerSource::Mouse => Modality::Mouse,
            PointerSource::Touch { .. } => Modality::Touch,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

impl PointerPhase {
    /// Up and Cancel both end a drag.
    pub fn is_terminal(self) -> bool {
        matches!(self, PointerPhase::Up | PointerPhase::Cancel)
    }
}

/// A horizontal pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub source: PointerSource,
    pub phase: PointerPhase,
    pub x: f64,
}

impl PointerEvent {
    pub fn new(source: PointerSource, phase: PointerPhase, x: f64) -> Self {
        Self { source, phase, x }
    }

    pub fn mouse(phase: PointerPhase, x: f64) -> Self {
        Self::new(PointerSource::Mouse, phase, x)
    }

    pub fn touch(id: u32, phase: PointerPhase, x: f64) -> Self {
        Self::new(PointerSource::Touch { id }, phase, x)
    }
}
