//! Step-aligned ring buffer of past state, used to resolve delayed
//! couplings: a delayed source is sampled with a step-aligned lookup and
//! zero-order hold at the boundaries rather than interpolation.
//!
//! Populated once per completed grid step by the integrator — never during
//! an RK4 stage's four interior evaluations, which all read the *previous*
//! step's history. Derivatives are always computed from the current state,
//! never from partially updated values within a step.

use registry::{AccumulatorId, AuxId, SignalId, SimulationState};

#[derive(Debug, Clone)]
pub struct History {
    times: Vec<f64>,
    signals: Vec<[f64; SignalId::COUNT]>,
    auxiliary: Vec<[f64; AuxId::COUNT]>,
    accumulators: Vec<[f64; AccumulatorId::COUNT]>,
}

impl History {
    pub fn new() -> Self {
        Self { times: Vec::new(), signals: Vec::new(), auxiliary: Vec::new(), accumulators: Vec::new() }
    }

    /// Record one completed grid step. `t` must be monotonically
    /// non-decreasing across calls (the integrator's grid is strictly
    /// increasing in practice).
    pub fn push(&mut self, t: f64, state: &SimulationState) {
        self.times.push(t);
        self.signals.push(state.signals);
        self.auxiliary.push(state.auxiliary);
        self.accumulators.push(state.accumulators);
    }

    /// Index of the latest recorded step at or before `at_minute`, or `0`
    /// (zero-order hold against the earliest recorded value) if `at_minute`
    /// precedes every recorded step, or `None` if nothing has been recorded
    /// yet.
    fn index_at_or_before(&self, at_minute: f64) -> Option<usize> {
        if self.times.is_empty() {
            return None;
        }
        match self.times.partition_point(|&t| t <= at_minute) {
            0 => Some(0),
            n => Some(n - 1),
        }
    }

    pub fn sample_signal(&self, id: SignalId, at_minute: f64, fallback: f64) -> f64 {
        match self.index_at_or_before(at_minute) {
            Some(idx) => self.signals[idx][id.index()],
            None => fallback,
        }
    }

    pub fn sample_auxiliary(&self, id: AuxId, at_minute: f64, fallback: f64) -> f64 {
        match self.index_at_or_before(at_minute) {
            Some(idx) => self.auxiliary[idx][id.index()],
            None => fallback,
        }
    }

    pub fn sample_accumulator(&self, id: AccumulatorId, at_minute: f64, fallback: f64) -> f64 {
        match self.index_at_or_before(at_minute) {
            Some(idx) => self.accumulators[idx][id.index()],
            None => fallback,
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registry::SimulationState;
    use std::collections::BTreeMap;

    #[test]
    fn zero_order_hold_before_first_sample_uses_fallback() {
        let history = History::new();
        assert_eq!(history.sample_signal(SignalId::Cortisol, 10.0, 42.0), 42.0);
    }

    #[test]
    fn sample_returns_latest_step_at_or_before_requested_minute() {
        let mut history = History::new();
        let mut s0 = SimulationState::zeroed(BTreeMap::new());
        s0.set_signal(SignalId::Cortisol, 100.0);
        history.push(0.0, &s0);

        let mut s1 = SimulationState::zeroed(BTreeMap::new());
        s1.set_signal(SignalId::Cortisol, 200.0);
        history.push(5.0, &s1);

        assert_eq!(history.sample_signal(SignalId::Cortisol, 3.0, 0.0), 100.0);
        assert_eq!(history.sample_signal(SignalId::Cortisol, 5.0, 0.0), 200.0);
        assert_eq!(history.sample_signal(SignalId::Cortisol, 99.0, 0.0), 200.0);
    }
}
