//! PD applicator: turns a primitive's plasma concentration into an activity
//! delta on its target, or a direct production contribution for a
//! primitive that forces a signal.
//!
//! Occupancy is `mathkernel::hill_response`, generalized here to receptors,
//! transporters, and enzymes uniformly via `registry`'s dense ids, and to
//! signals directly.

use registry::{AccumulatorId, AuxId, EnzymeId, ReceptorId, SignalId, TransporterId};
use serde::{Deserialize, Serialize};

/// What kind of entity a PD effect's target names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum PdTargetKind {
    Signal,
    Auxiliary,
    Accumulator,
    Receptor,
    Transporter,
    Enzyme,
}

/// A resolved target: one dense id tagged with its kind. Auxiliary/
/// accumulator targets generalize beyond the plain signal/receptor/
/// transporter/enzyme set (see `DESIGN.md`), used so a caffeine-style
/// primitive can drive the hidden adenosine-pressure pool instead of only
/// user-visible signals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum PdTarget {
    Signal(SignalId),
    Auxiliary(AuxId),
    Accumulator(AccumulatorId),
    Receptor(ReceptorId),
    Transporter(TransporterId),
    Enzyme(EnzymeId),
}

impl PdTarget {
    pub fn kind(&self) -> PdTargetKind {
        match self {
            PdTarget::Signal(_) => PdTargetKind::Signal,
            PdTarget::Auxiliary(_) => PdTargetKind::Auxiliary,
            PdTarget::Accumulator(_) => PdTargetKind::Accumulator,
            PdTarget::Receptor(_) => PdTargetKind::Receptor,
            PdTarget::Transporter(_) => PdTargetKind::Transporter,
            PdTarget::Enzyme(_) => PdTargetKind::Enzyme,
        }
    }
}

/// The five mechanism shapes named for a PD primitive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Mechanism {
    Agonist,
    Antagonist,
    Inhibitor,
    /// Positive allosteric modulator: scales occupancy's effect up without
    /// binding orthosterically itself.
    PositiveAllosteric,
    /// Negative allosteric modulator: scales occupancy's effect down.
    NegativeAllosteric,
}

/// One PD effect attached to a PK primitive: `(target, mechanism,
/// intrinsic efficacy, affinity)`. `affinity` is the EC50/IC50 used by the
/// occupancy Hill function.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PdEffect {
    pub target: PdTarget,
    pub mechanism: Mechanism,
    pub efficacy: f64,
    pub affinity: f64,
    /// Hill coefficient for the occupancy curve; `1.0` unless cooperative
    /// binding is being modeled.
    pub hill_n: f64,
}

impl PdEffect {
    fn occupancy(&self, concentration: f64) -> f64 {
        mathkernel::hill_response(concentration, 1.0, self.affinity, self.hill_n)
    }

    /// Multiplicative activity delta for a receptor/transporter/enzyme
    /// target, to be applied on top of the C6 baseline activity (itself
    /// starting from `1.0`). Not meaningful for `Signal`/`Auxiliary`/
    /// `Accumulator` targets — those use [`PdEffect::direct_contribution`]
    /// instead.
    pub fn activity_multiplier(&self, concentration: f64) -> f64 {
        let occupancy = self.occupancy(concentration);
        match self.mechanism {
            Mechanism::Agonist | Mechanism::PositiveAllosteric => 1.0 + self.efficacy * occupancy,
            Mechanism::Antagonist | Mechanism::NegativeAllosteric => 1.0 - self.efficacy * occupancy,
            Mechanism::Inhibitor => (1.0 - self.efficacy * occupancy).max(0.0),
        }
    }

    /// Additive production-term contribution for a primitive that targets a
    /// signal/auxiliary/accumulator directly (e.g. a melatonin supplement's
    /// agonist effect on the melatonin signal itself).
    pub fn direct_contribution(&self, concentration: f64) -> f64 {
        self.efficacy * concentration
    }
}

/// Baseline activity maps produced by the profile composer, before any PD
/// deltas for the current step are folded in. `1.0` everywhere a profile
/// has not modified means "no clinical modifier".
#[derive(Debug, Clone)]
pub struct ActivityMap {
    pub receptors: [f64; ReceptorId::COUNT],
    pub transporters: [f64; TransporterId::COUNT],
    pub enzymes: [f64; EnzymeId::COUNT],
}

impl ActivityMap {
    pub fn baseline() -> Self {
        Self {
            receptors: [1.0; ReceptorId::COUNT],
            transporters: [1.0; TransporterId::COUNT],
            enzymes: [1.0; EnzymeId::COUNT],
        }
    }

    pub fn receptor(&self, id: ReceptorId) -> f64 {
        self.receptors[id.index()]
    }

    pub fn transporter(&self, id: TransporterId) -> f64 {
        self.transporters[id.index()]
    }

    pub fn enzyme(&self, id: EnzymeId) -> f64 {
        self.enzymes[id.index()]
    }
}

/// Direct forcing contributions keyed by target, accumulated across every
/// active primitive's PD effects for the current step and added to the
/// target's production.
#[derive(Debug, Clone, Default)]
pub struct DirectForcing {
    pub signals: Vec<(SignalId, f64)>,
    pub auxiliary: Vec<(AuxId, f64)>,
    pub accumulators: Vec<(AccumulatorId, f64)>,
}

impl DirectForcing {
    pub fn signal(&self, id: SignalId) -> f64 {
        self.signals.iter().filter(|(k, _)| *k == id).map(|(_, v)| v).sum()
    }

    pub fn auxiliary(&self, id: AuxId) -> f64 {
        self.auxiliary.iter().filter(|(k, _)| *k == id).map(|(_, v)| v).sum()
    }

    pub fn accumulator(&self, id: AccumulatorId) -> f64 {
        self.accumulators.iter().filter(|(k, _)| *k == id).map(|(_, v)| v).sum()
    }
}

/// Fold one active primitive's effects at the given plasma concentration
/// into `map` (multiplicatively) and `forcing` (additively). Called once per
/// active primitive per step by the integrator, starting from a fresh copy
/// of the C6 baseline map each time (§4.7: "a fresh activity map derived
/// from the C6 baseline map at each step").
pub fn apply_effects(map: &mut ActivityMap, forcing: &mut DirectForcing, effects: &[PdEffect], concentration: f64) {
    for effect in effects {
        match effect.target {
            PdTarget::Receptor(id) => {
                map.receptors[id.index()] *= effect.activity_multiplier(concentration);
            }
            PdTarget::Transporter(id) => {
                map.transporters[id.index()] *= effect.activity_multiplier(concentration);
            }
            PdTarget::Enzyme(id) => {
                map.enzymes[id.index()] *= effect.activity_multiplier(concentration);
            }
            PdTarget::Signal(id) => forcing.signals.push((id, effect.direct_contribution(concentration))),
            PdTarget::Auxiliary(id) => forcing.auxiliary.push((id, effect.direct_contribution(concentration))),
            PdTarget::Accumulator(id) => forcing.accumulators.push((id, effect.direct_contribution(concentration))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn antagonist_reduces_activity_below_baseline() {
        let effect = PdEffect { target: PdTarget::Receptor(ReceptorId::AdenosineA2a), mechanism: Mechanism::Antagonist, efficacy: 0.9, affinity: 5.0, hill_n: 1.0 };
        let multiplier = effect.activity_multiplier(50.0);
        assert!(multiplier < 1.0);
    }

    #[test]
    fn inhibitor_is_floored_at_zero() {
        let effect = PdEffect { target: PdTarget::Transporter(TransporterId::DopamineTransporter), mechanism: Mechanism::Inhibitor, efficacy: 1.0, affinity: 1.0, hill_n: 1.0 };
        let multiplier = effect.activity_multiplier(1000.0);
        assert!(multiplier >= 0.0);
    }

    #[test]
    fn direct_signal_forcing_accumulates_across_effects() {
        let mut map = ActivityMap::baseline();
        let mut forcing = DirectForcing::default();
        let effects = [
            PdEffect { target: PdTarget::Signal(SignalId::Melatonin), mechanism: Mechanism::Agonist, efficacy: 2.0, affinity: 1.0, hill_n: 1.0 },
        ];
        apply_effects(&mut map, &mut forcing, &effects, 3.0);
        assert_relative_eq!(forcing.signal(SignalId::Melatonin), 6.0);
    }
}
