//! The simulation state record: signals, auxiliaries, accumulators, and the
//! per-intervention PK compartment amounts, folded into one value so a
//! single generic `rk4_step` (see `mathkernel::rk4`) advances everything
//! coherently.

use crate::ids::{AccumulatorId, AuxId, SignalId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::{Add, Mul};

/// PK compartment amounts for one timeline item, indexed by a small
/// compartment-local index (see `pharmacology::pk` for what each index
/// means for a given delivery/kinetics shape).
pub type PkAmounts = Vec<f64>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub signals: [f64; SignalId::COUNT],
    pub auxiliary: [f64; AuxId::COUNT],
    pub accumulators: [f64; AccumulatorId::COUNT],
    /// Keyed by timeline item id. A `BTreeMap` (not `HashMap`) so iteration
    /// order is deterministic, matching the determinism invariant in
    /// determinism is required for reproducible runs.
    pub pk: BTreeMap<u64, PkAmounts>,
}

impl SimulationState {
    pub fn zeroed(pk_shape: BTreeMap<u64, usize>) -> Self {
        Self {
            signals: [0.0; SignalId::COUNT],
            auxiliary: [0.0; AuxId::COUNT],
            accumulators: [0.0; AccumulatorId::COUNT],
            pk: pk_shape.into_iter().map(|(id, n)| (id, vec![0.0; n])).collect(),
        }
    }

    pub fn signal(&self, id: SignalId) -> f64 {
        self.signals[id.index()]
    }

    pub fn set_signal(&mut self, id: SignalId, value: f64) {
        self.signals[id.index()] = value;
    }

    pub fn auxiliary(&self, id: AuxId) -> f64 {
        self.auxiliary[id.index()]
    }

    pub fn set_auxiliary(&mut self, id: AuxId, value: f64) {
        self.auxiliary[id.index()] = value;
    }

    pub fn accumulator(&self, id: AccumulatorId) -> f64 {
        self.accumulators[id.index()]
    }

    pub fn set_accumulator(&mut self, id: AccumulatorId, value: f64) {
        self.accumulators[id.index()] = value;
    }

    /// Clamp every bounded signal/auxiliary/accumulator into its declared
    /// `[min, max]`. Returns the set of entries that were clamped (for the
    /// "clamp saturation" non-fatal flag).
    pub fn clamp_signal(&mut self, id: SignalId, min: Option<f64>, max: Option<f64>) -> bool {
        let v = self.signals[id.index()];
        let clamped = clamp_value(v, min, max);
        let saturated = clamped != v;
        self.signals[id.index()] = clamped;
        saturated
    }

    pub fn clamp_auxiliary(&mut self, id: AuxId, min: Option<f64>, max: Option<f64>) -> bool {
        let v = self.auxiliary[id.index()];
        let clamped = clamp_value(v, min, max);
        let saturated = clamped != v;
        self.auxiliary[id.index()] = clamped;
        saturated
    }
}

fn clamp_value(v: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    let v = match min {
        Some(lo) => v.max(lo),
        None => v,
    };
    match max {
        Some(hi) => v.min(hi),
        None => v,
    }
}

impl Add for SimulationState {
    type Output = SimulationState;
    fn add(self, rhs: SimulationState) -> SimulationState {
        let mut signals = self.signals;
        for i in 0..SignalId::COUNT {
            signals[i] += rhs.signals[i];
        }
        let mut auxiliary = self.auxiliary;
        for i in 0..AuxId::COUNT {
            auxiliary[i] += rhs.auxiliary[i];
        }
        let mut accumulators = self.accumulators;
        for i in 0..AccumulatorId::COUNT {
            accumulators[i] += rhs.accumulators[i];
        }
        let mut pk = self.pk;
        for (id, amounts) in rhs.pk {
            let entry = pk.entry(id).or_insert_with(|| vec![0.0; amounts.len()]);
            for (a, b) in entry.iter_mut().zip(amounts.iter()) {
                *a += b;
            }
        }
        SimulationState { signals, auxiliary, accumulators, pk }
    }
}

impl Mul<f64> for SimulationState {
    type Output = SimulationState;
    fn mul(self, rhs: f64) -> SimulationState {
        let mut signals = self.signals;
        for v in signals.iter_mut() {
            *v *= rhs;
        }
        let mut auxiliary = self.auxiliary;
        for v in auxiliary.iter_mut() {
            *v *= rhs;
        }
        let mut accumulators = self.accumulators;
        for v in accumulators.iter_mut() {
            *v *= rhs;
        }
        let mut pk = self.pk;
        for amounts in pk.values_mut() {
            for v in amounts.iter_mut() {
                *v *= rhs;
            }
        }
        SimulationState { signals, auxiliary, accumulators, pk }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_scale_are_componentwise() {
        let mut a = SimulationState::zeroed(BTreeMap::from([(1u64, 2usize)]));
        a.set_signal(SignalId::Cortisol, 10.0);
        a.pk.get_mut(&1).unwrap()[0] = 4.0;

        let mut b = SimulationState::zeroed(BTreeMap::from([(1u64, 2usize)]));
        b.set_signal(SignalId::Cortisol, 1.0);
        b.pk.get_mut(&1).unwrap()[0] = 1.0;

        let sum = a.clone() + b;
        assert_eq!(sum.signal(SignalId::Cortisol), 11.0);
        assert_eq!(sum.pk[&1][0], 5.0);

        let scaled = a * 2.0;
        assert_eq!(scaled.signal(SignalId::Cortisol), 20.0);
        assert_eq!(scaled.pk[&1][0], 8.0);
    }

    #[test]
    fn clamp_reports_saturation() {
        let mut s = SimulationState::zeroed(BTreeMap::new());
        s.set_signal(SignalId::Glucose, 500.0);
        let saturated = s.clamp_signal(SignalId::Glucose, Some(40.0), Some(400.0));
        assert!(saturated);
        assert_eq!(s.signal(SignalId::Glucose), 400.0);
    }
}
