//! Monitor catalog shapes. Mirrors `registry::SourceRef`'s tagged-union
//! generalization: a monitor may watch a user-visible signal or, like a PD
//! effect (see `pharmacology::pd::PdTarget`), one of the hidden auxiliary or
//! accumulator pools — adenosine clearance and sleep debt both need to be
//! watchable even though neither is a reported signal.

use crate::result::Outcome;
use registry::{AccumulatorId, AuxId, SignalId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonitorTarget {
    Signal(SignalId),
    Auxiliary(AuxId),
    Accumulator(AccumulatorId),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CrossDirection {
    Rising,
    Falling,
}

/// The three pattern shapes a monitor can scan for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum PatternKind {
    /// Value crosses `threshold` from above/below between two consecutive
    /// grid points.
    ThresholdCrossing { threshold: f64, direction: CrossDirection },
    /// `|Δvalue/Δminute|` over a trailing window of `window_minutes` exceeds
    /// `min_abs_slope_per_minute`.
    SlopeEvent { window_minutes: f64, min_abs_slope_per_minute: f64 },
    /// Value stays inside (`inside: true`) or outside (`inside: false`) the
    /// band `[min, max]` for at least `min_duration_minutes`, reported at the
    /// minute the duration requirement is first satisfied.
    RangeResidence { min: Option<f64>, max: Option<f64>, inside: bool, min_duration_minutes: f64 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorDefinition {
    pub id: &'static str,
    pub target: MonitorTarget,
    pub pattern: PatternKind,
    pub outcome: Outcome,
    pub message: &'static str,
}
