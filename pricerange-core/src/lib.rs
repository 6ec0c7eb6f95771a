//! PriceRange Core — dual-handle range slider state machine.
//!
//! This crate contains everything a host needs to drive the slider:
//! - Domain types (bounds, range value, handles)
//! - Clamp rules shared by dragging and direct input
//! - Effective-max watermark that only ever grows
//! - Track geometry and layout percentages
//! - Pointer abstraction over mouse and touch
//! - Drag sessions with scoped global listeners
//! - TOML configuration

pub mod clamp;
pub mod config;
pub mod domain;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod listeners;
pub mod pointer;
pub mod slider;
pub mod watermark;

pub use config::SliderConfig;
pub use domain::{BoundsError, Handle, RangeValue, SliderBounds};
pub use drag::{DragState, EDGE_SNAP_FRACTION};
pub use error::ConfigError;
pub use geometry::{LabelFormat, SliderLayout, Track};
pub use listeners::{GlobalListeners, ListenerKind};
pub use pointer::{Modality, PointerEvent, PointerPhase, PointerSource};
pub use slider::{ChangeSink, RangeSlider, SliderProps};
pub use watermark::EffectiveMax;
