//! `simulate`: runs one day (or arbitrary grid) of the physiological
//! simulation core against a scenario file and writes the response as JSON.
//!
//! Exit codes: `0` on a clean run (even one that carries non-fatal flags),
//! `1` when the response carries a `NumericError` (partial series still
//! written to `--out`), `2` when the request itself is rejected
//! (`SimError::Validation`/`Config`) before any integration runs.

use anyhow::{Context, Result};
use clap::Parser;
use interventions::TimelineItem;
use physiology::Subject;
use registry::{SignalId, SimulationState};
use simcore::{SimError, SimulationCore, SimulationRequest, SimulationResponse};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// One day (or multi-day span) of a physiological simulation.
#[derive(Parser, Debug)]
#[command(name = "simulate", version, about = "Run the physiological simulation core over a scenario")]
struct Args {
    /// Scenario file: JSON `{ "subject": Subject, "timeline": [TimelineItem] }`.
    #[arg(long)]
    scenario: PathBuf,

    /// Day index (0-based) within the scenario's timeline; the grid spans
    /// `[day * 1440, (day + 1) * 1440]` minutes.
    #[arg(long, default_value_t = 0)]
    day: u32,

    /// Grid step, in minutes.
    #[arg(long, default_value_t = 5.0)]
    step: f64,

    /// Where to write the JSON response.
    #[arg(long)]
    out: PathBuf,

    /// Comma-separated signal keys to include in the response; omit to
    /// include every signal.
    #[arg(long, value_delimiter = ',')]
    signals: Option<Vec<String>>,

    /// Previous day's final state (JSON), for multi-day chaining.
    #[arg(long)]
    initial_state: Option<PathBuf>,
}

#[derive(serde::Deserialize)]
struct ScenarioFile {
    subject: Subject,
    #[serde(default)]
    timeline: Vec<TimelineItem>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(response) => {
            let exit_code = if response.error.is_some() { 1 } else { 0 };
            write_response(&args.out, &response)?;
            std::process::exit(exit_code);
        }
        Err(err) => {
            tracing::error!(%err, "simulate rejected the request");
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    }
}

fn run(args: &Args) -> Result<SimulationResponse> {
    let scenario_text = std::fs::read_to_string(&args.scenario)
        .with_context(|| format!("reading scenario file {}", args.scenario.display()))?;
    let scenario: ScenarioFile =
        serde_json::from_str(&scenario_text).with_context(|| format!("parsing scenario file {}", args.scenario.display()))?;

    let initial_state = match &args.initial_state {
        Some(path) => {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading initial state {}", path.display()))?;
            Some(serde_json::from_str::<SimulationState>(&text).with_context(|| format!("parsing initial state {}", path.display()))?)
        }
        None => None,
    };

    let signal_filter = args.signals.as_ref().map(|keys| {
        keys.iter()
            .filter_map(|key| SignalId::ALL.iter().find(|id| id.key() == key).copied())
            .collect::<BTreeSet<_>>()
    });

    let day = args.day as f64;
    let grid = integrator::GridSpec {
        start_minute: day * 1440.0,
        end_minute: (day + 1.0) * 1440.0,
        step_minutes: args.step,
    };

    let mut request = SimulationRequest::new(grid, scenario.subject, scenario.timeline);
    request.signal_filter = signal_filter;
    request.initial_state = initial_state;

    let core = SimulationCore::new().map_err(to_anyhow)?;
    core.run(request).map_err(to_anyhow)
}

fn to_anyhow(err: SimError) -> anyhow::Error {
    anyhow::anyhow!(err)
}

fn write_response(path: &PathBuf, response: &SimulationResponse) -> Result<()> {
    let json = serde_json::to_string_pretty(response).context("serializing response")?;
    std::fs::write(path, json).with_context(|| format!("writing response to {}", path.display()))?;
    Ok(())
}
