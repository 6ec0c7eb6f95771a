//! PriceRange CLI — layout, replay, fuzz and config check commands.
//!
//! Commands:
//! - `layout` — print handle positions and labels for a slider as JSON
//! - `replay` — run scenario scripts and optionally export transcripts
//! - `fuzz` — replay seeded random scripts and report invariant breaks
//! - `check` — validate a slider config file

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pricerange_core::{SliderConfig, SliderLayout};
use pricerange_runner::{
    export_transcript, fuzz, replay_all, FuzzConfig, Scenario, Transcript,
};

#[derive(Parser)]
#[command(name = "pricerange", about = "PriceRange CLI — dual-handle range slider tools")]
struct Cli {
    /// Log more (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the layout of a slider as JSON.
    Layout {
        /// Slider config (TOML). Flags below override its fields.
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long, allow_hyphen_values = true)]
        min: Option<i64>,

        #[arg(long)]
        max: Option<i64>,

        #[arg(long, allow_hyphen_values = true)]
        low: Option<f64>,

        #[arg(long, allow_hyphen_values = true)]
        high: Option<f64>,

        /// Prefix for value labels (e.g. a currency symbol).
        #[arg(long)]
        prefix: Option<String>,
    },
    /// Replay scenario scripts (.toml or .json).
    Replay {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Export transcript.json and changes.csv per scenario here.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Replay seeded random scripts and check every emitted value.
    Fuzz {
        #[arg(long, default_value_t = 42)]
        seed: u64,

        #[arg(long, default_value_t = 200)]
        scenarios: usize,

        #[arg(long, default_value_t = 64)]
        steps: usize,

        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        min: i64,

        #[arg(long, default_value_t = 10_000)]
        max: i64,
    },
    /// Validate a slider config file.
    Check { config: PathBuf },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Layout {
            config,
            min,
            max,
            low,
            high,
            prefix,
        } => {
            let base = match config {
                Some(path) => SliderConfig::from_file(&path)?,
                None => SliderConfig::default(),
            };
            let config = override_config(base, min, max, low, high, prefix);
            let layout = compute_layout(&config)?;
            println!("{}", serde_json::to_string_pretty(&layout)?);
            Ok(())
        }
        Commands::Replay { files, out } => run_replay(&files, out),
        Commands::Fuzz {
            seed,
            scenarios,
            steps,
            min,
            max,
        } => run_fuzz(FuzzConfig {
            seed,
            scenarios,
            steps_per_scenario: steps,
            min,
            max,
            ..FuzzConfig::default()
        }),
        Commands::Check { config } => {
            let cfg = SliderConfig::from_file(&config)?;
            let props = cfg.props()?;
            println!(
                "ok: bounds [{}, {}], value {}{}",
                props.bounds.min,
                props.bounds.max,
                props.value,
                if props.value.is_ordered() { "" } else { " (unordered, will be clamped)" }
            );
            Ok(())
        }
    }
}

fn override_config(
    mut config: SliderConfig,
    min: Option<i64>,
    max: Option<i64>,
    low: Option<f64>,
    high: Option<f64>,
    prefix: Option<String>,
) -> SliderConfig {
    if let Some(min) = min {
        config.min = min;
    }
    if let Some(max) = max {
        config.max = max;
    }
    if let Some(low) = low {
        config.low = low;
    }
    if let Some(high) = high {
        config.high = high;
    }
    if let Some(prefix) = prefix {
        config.label_prefix = prefix;
    }
    config
}

fn compute_layout(config: &SliderConfig) -> Result<SliderLayout> {
    Ok(config.build()?.layout())
}

fn run_replay(files: &[PathBuf], out: Option<PathBuf>) -> Result<()> {
    let scenarios = files
        .iter()
        .map(|path| Scenario::from_file(path))
        .collect::<Result<Vec<_>, _>>()?;

    let mut dirty = 0usize;
    for (scenario, result) in scenarios.iter().zip(replay_all(&scenarios)) {
        let transcript = result?;
        print_transcript(&transcript);
        if !transcript.is_clean() {
            dirty += 1;
        }
        if let Some(dir) = &out {
            let paths = export_transcript(dir, scenario, &transcript)?;
            info!(dir = %paths.dir.display(), "transcript exported");
            println!("  exported to {}", paths.dir.display());
        }
    }

    if dirty > 0 {
        bail!("{dirty} scenario(s) broke an invariant or leaked listeners");
    }
    Ok(())
}

fn print_transcript(t: &Transcript) {
    println!("{}", t.scenario);
    println!(
        "  changes: {}  queries: {}  final: {}  effective max: {}",
        t.changes.len(),
        t.queries.len(),
        t.final_value,
        t.effective_max
    );
    for q in &t.queries {
        println!("  @{:>6}ms  ?{}", q.elapsed_ms, q.query.to_query_string());
    }
    for v in &t.violations {
        println!("  step {}: {} ({})", v.step, v.value, v.reason);
    }
    if t.listeners_leaked > 0 {
        println!("  leaked listeners: {}", t.listeners_leaked);
    }
}

fn run_fuzz(config: FuzzConfig) -> Result<()> {
    let report = fuzz(&config)?;
    println!(
        "seed {}: {} scenarios, {} changes, {} queries, effective max reached {}",
        report.seed,
        report.scenarios_run,
        report.total_changes,
        report.total_queries,
        report.max_effective_max
    );
    for (scenario, v) in &report.violations {
        println!("  {scenario} step {}: {} ({})", v.step, v.value, v.reason);
    }
    if !report.is_clean() {
        bail!(
            "{} violation(s), {} listener(s) left open, {} leaked",
            report.violations.len(),
            report.listeners_open,
            report.listeners_leaked
        );
    }
    Ok(())
}
