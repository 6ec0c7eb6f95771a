//! Scripted slider interactions, loaded from TOML or JSON.
//!
//! ```toml
//! name = "drag high to the edge"
//!
//! [slider]
//! min = 0
//! max = 100
//! low = 20
//! high = 80
//!
//! [track]
//! left = 0.0
//! width = 1000.0
//!
//! [[steps]]
//! action = "press"
//! handle = "high"
//! x = 800.0
//!
//! [[steps]]
//! action = "move"
//! x = 996.0
//!
//! [[steps]]
//! action = "release"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use pricerange_core::{ConfigError, Handle, PointerSource, SliderConfig, Track};

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("read scenario {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse scenario TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("parse scenario JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported scenario format: {0}")]
    UnknownFormat(PathBuf),

    #[error("scenario slider: {0}")]
    Config(#[from] ConfigError),
}

/// One scripted interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Press {
        handle: Handle,
        x: f64,
        #[serde(default)]
        source: PointerSource,
    },
    Move {
        x: f64,
        #[serde(default)]
        source: PointerSource,
    },
    Release {
        #[serde(default)]
        x: f64,
        #[serde(default)]
        source: PointerSource,
    },
    Cancel {
        #[serde(default)]
        source: PointerSource,
    },
    /// Direct numeric input on one handle.
    Input { handle: Handle, value: f64 },
    /// The parent overwrites the value through props.
    SetValue { low: i64, high: i64 },
    SetDisabled { disabled: bool },
    /// Advance the virtual clock without input.
    Wait { ms: u64 },
}

fn default_step_ms() -> u64 {
    16
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_track() -> Track {
    Track::new(0.0, 1000.0)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub slider: SliderConfig,
    #[serde(default = "default_track")]
    pub track: Track,
    /// Virtual time each step takes.
    #[serde(default = "default_step_ms")]
    pub step_ms: u64,
    /// Quiet period before the owner builds a query.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn new(name: impl Into<String>, slider: SliderConfig, track: Track) -> Self {
        Self {
            name: name.into(),
            slider,
            track,
            step_ms: default_step_ms(),
            debounce_ms: default_debounce_ms(),
            steps: Vec::new(),
        }
    }

    pub fn with_steps(mut self, steps: Vec<Step>) -> Self {
        self.steps = steps;
        self
    }

    /// Load by extension: `.toml` or `.json`.
    pub fn from_file(path: &Path) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path).map_err(|source| ScenarioError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(&content),
            Some("json") => Self::from_json(&content),
            _ => Err(ScenarioError::UnknownFormat(path.to_path_buf())),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Content hash identifying this exact script.
    pub fn fingerprint(&self) -> String {
        let json = serde_json::to_vec(self).unwrap_or_default();
        blake3::hash(&json).to_hex().to_string()
    }
}
