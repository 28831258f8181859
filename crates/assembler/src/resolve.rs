//! Reads a [`SourceRef`] against live state (production terms, zero-delay
//! couplings) or against the [`History`] ring buffer (delayed couplings).

use crate::history::History;
use registry::{EvalContext, SimulationState, SourceRef};

/// Resolve `source` against the current step's live state.
pub fn resolve_source(source: SourceRef, state: &SimulationState, ctx: &EvalContext) -> f64 {
    match source {
        SourceRef::Signal(id) => state.signal(id),
        SourceRef::Auxiliary(id) => state.auxiliary(id),
        SourceRef::Accumulator(id) => state.accumulator(id),
        SourceRef::Constant => 1.0,
        SourceRef::Circadian => mathkernel::minute_to_phase(ctx.circadian_minute_of_day),
    }
}

/// Resolve `source` at `at_minute` minutes into the simulation, falling back
/// to the live `state`/`ctx` pair for sources a delay cannot meaningfully
/// apply to (`Constant`, `Circadian` — both already pure functions of the
/// requested time, not of accumulated history).
pub fn resolve_delayed(source: SourceRef, at_minute: f64, history: &History, state: &SimulationState, ctx: &EvalContext) -> f64 {
    match source {
        SourceRef::Signal(id) => history.sample_signal(id, at_minute, state.signal(id)),
        SourceRef::Auxiliary(id) => history.sample_auxiliary(id, at_minute, state.auxiliary(id)),
        SourceRef::Accumulator(id) => history.sample_accumulator(id, at_minute, state.accumulator(id)),
        SourceRef::Constant | SourceRef::Circadian => resolve_source(source, state, ctx),
    }
}
