//! PriceRange Runner — drives the slider the way a page would.
//!
//! This crate builds on `pricerange-core` to provide:
//! - The owning price filter (last-write-wins, debounced search query)
//! - Scripted scenarios loaded from TOML or JSON
//! - Replay with per-change invariant checks and listener leak detection
//! - Seeded random scenario generation (fuzzing) across threads
//! - Transcript export to JSON and CSV

pub mod export;
pub mod filter;
pub mod fuzz;
pub mod replay;
pub mod scenario;

pub use export::{export_transcript, ExportPaths, TranscriptEnvelope};
pub use filter::{Debouncer, PriceFilter, PriceQuery};
pub use fuzz::{fuzz, generate, FuzzConfig, FuzzReport};
pub use replay::{replay, replay_all, ChangeRecord, InvariantViolation, QueryRecord, Transcript};
pub use scenario::{Scenario, ScenarioError, Step};
