//! Errors surfaced while loading slider configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::BoundsError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read slider config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse slider config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Bounds(#[from] BoundsError),
}
