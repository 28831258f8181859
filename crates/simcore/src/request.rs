//! The request record `SimulationCore::run` accepts.

use integrator::{CancellationToken, GridSpec};
use interventions::TimelineItem;
use physiology::Subject;
use registry::{SignalId, SimulationState};
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct SimulationRequest {
    pub grid: GridSpec,
    pub subject: Subject,
    pub timeline: Vec<TimelineItem>,
    /// Optional set of signal keys to include in the response. Every signal
    /// is always computed regardless (the registry's small enough that
    /// pruning the computation itself isn't worth the complexity — see
    /// `DESIGN.md`); this only restricts what `series` reports back.
    pub signal_filter: Option<BTreeSet<SignalId>>,
    /// A previous day's final state, for multi-day chaining.
    pub initial_state: Option<SimulationState>,
    pub cancellation: Option<CancellationToken>,
}

impl SimulationRequest {
    pub fn new(grid: GridSpec, subject: Subject, timeline: Vec<TimelineItem>) -> Self {
        Self { grid, subject, timeline, signal_filter: None, initial_state: None, cancellation: None }
    }
}
