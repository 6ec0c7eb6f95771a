//! Transcript export: `transcript.json` plus a flat `changes.csv`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::replay::Transcript;
use crate::scenario::Scenario;

/// Paths written by [`export_transcript`].
#[derive(Debug, Clone)]
pub struct ExportPaths {
    pub dir: PathBuf,
    pub transcript: PathBuf,
    pub changes_csv: PathBuf,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptEnvelope {
    pub generated_at: DateTime<Utc>,
    pub scenario_hash: String,
    pub transcript: Transcript,
}

#[derive(Debug, Serialize)]
struct ChangeRow {
    step: usize,
    elapsed_ms: u64,
    low: i64,
    high: i64,
}

/// Write one scenario's transcript under `output_dir/<scenario-hash prefix>/`.
pub fn export_transcript(
    output_dir: impl AsRef<Path>,
    scenario: &Scenario,
    transcript: &Transcript,
) -> Result<ExportPaths> {
    let hash = scenario.fingerprint();
    let dir = output_dir.as_ref().join(&hash[..16]);
    std::fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;

    let envelope = TranscriptEnvelope {
        generated_at: Utc::now(),
        scenario_hash: hash,
        transcript: transcript.clone(),
    };
    let transcript_path = dir.join("transcript.json");
    let json = serde_json::to_string_pretty(&envelope)?;
    std::fs::write(&transcript_path, json)
        .with_context(|| format!("write {}", transcript_path.display()))?;

    let changes_csv = dir.join("changes.csv");
    let mut writer = csv::Writer::from_path(&changes_csv)
        .with_context(|| format!("open {}", changes_csv.display()))?;
    for change in &transcript.changes {
        writer.serialize(ChangeRow {
            step: change.step,
            elapsed_ms: change.elapsed_ms,
            low: change.value.low,
            high: change.value.high,
        })?;
    }
    writer.flush()?;

    Ok(ExportPaths {
        dir,
        transcript: transcript_path,
        changes_csv,
    })
}
