//! The physiological right-hand side the macro RK4 stage evaluates: the
//! pure physiological derivative from the ODE assembler, forced by PD
//! activity/forcing derived from a *given* per-primitive plasma
//! concentration map rather than from a PK sub-system advanced in lockstep.
//!
//! PK compartments are integrated separately (see [`crate::pk_step`]) at
//! their own, possibly finer, resolution — concentration §4.12's stiff-regime
//! microstepping applies to "the PK sub-system only"; the signal/auxiliary/
//! accumulator state advances once per macro grid step regardless of how
//! many PK microsteps that step needed.

use assembler::{DerivativeInputs, History};
use interventions::CompiledTimeline;
use pharmacology::{ActivityMap, DirectForcing};
use physiology::{Physiology, Subject};
use profiles::ComposedProfile;
use registry::{Registry, SimulationState};
use std::collections::BTreeMap;

/// Everything the physiological derivative needs beyond the live state and
/// the evaluation time.
pub struct DerivativeContext<'a> {
    pub registry: &'a Registry,
    pub subject: &'a Subject,
    pub physiology: Physiology,
    pub profile: &'a ComposedProfile,
    pub compiled: &'a CompiledTimeline,
    pub history: &'a History,
}

pub(crate) fn is_asleep_at(compiled: &CompiledTimeline, t: f64) -> bool {
    compiled.state_markers.iter().any(|m| t >= m.start_minute && t < m.end_minute)
}

/// Fold every compiled primitive's PD effects into a fresh copy of the
/// profile's baseline activity map, using `concentrations` (keyed by
/// primitive id) rather than reading any PK state directly — the caller
/// supplies the concentration appropriate to the RK4 stage being evaluated.
fn activity_and_forcing(dc: &DerivativeContext, concentrations: &BTreeMap<u64, f64>) -> (ActivityMap, DirectForcing) {
    let mut activity = dc.profile.activity.clone();
    let mut forcing = DirectForcing::default();
    for iv in &dc.compiled.interventions {
        let concentration = concentrations.get(&iv.primitive_id).copied().unwrap_or(0.0);
        pharmacology::apply_effects(&mut activity, &mut forcing, &iv.primitive.pd, concentration);
    }
    (activity, forcing)
}

/// The pure physiological derivative (signals, auxiliaries, accumulators)
/// at time `t`, given each active primitive's plasma concentration at that
/// instant. `.pk` on the returned state is always empty — PK compartments
/// are advanced by [`crate::pk_step::integrate_pk_substeps`], not by this
/// function or the macro RK4 step it is folded into.
pub fn physio_derivative(
    state: &SimulationState,
    t: f64,
    dc: &DerivativeContext,
    concentrations: &BTreeMap<u64, f64>,
) -> SimulationState {
    let is_asleep = is_asleep_at(dc.compiled, t);
    let ctx = crate::context::eval_context_at(dc.subject, dc.physiology, t, dc.profile.circadian_phase_shift_minutes, is_asleep);
    let (activity, forcing) = activity_and_forcing(dc, concentrations);

    let inputs = DerivativeInputs {
        registry: dc.registry,
        ctx: &ctx,
        profile: dc.profile,
        activity: &activity,
        forcing: &forcing,
        history: dc.history,
    };
    assembler::derivative(state, &inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use interventions::compile_timeline;
    use registry::SignalId;
    use std::collections::BTreeMap;

    fn subject_and_physiology() -> (Subject, Physiology) {
        let subject = physiology::Subject::new(physiology::Sex::Male, 30.0, 80.0, 178.0);
        let phys = physiology::derive_physiology(&subject).unwrap();
        (subject, phys)
    }

    #[test]
    fn derivative_with_empty_timeline_is_finite_everywhere() {
        let registry = registry::catalog::build_registry().unwrap();
        let (subject, phys) = subject_and_physiology();
        let profile = ComposedProfile::baseline();
        let compiled = compile_timeline(&[]).unwrap();
        let history = History::new();
        let dc = DerivativeContext { registry: &registry, subject: &subject, physiology: phys, profile: &profile, compiled: &compiled, history: &history };

        let state = SimulationState::zeroed(BTreeMap::new());
        let dx = physio_derivative(&state, 480.0, &dc, &BTreeMap::new());
        for id in SignalId::ALL {
            assert!(dx.signal(*id).is_finite());
        }
    }

    #[test]
    fn zero_concentration_matches_no_intervention_forcing() {
        let registry = registry::catalog::build_registry().unwrap();
        let (subject, phys) = subject_and_physiology();
        let profile = ComposedProfile::baseline();
        let timeline = vec![interventions::TimelineItem {
            id: 1,
            start_minute: 480.0,
            end_minute: 481.0,
            key: "caffeine".into(),
            params: std::collections::HashMap::new(),
            intensity: 1.0,
        }];
        let compiled = compile_timeline(&timeline).unwrap();
        let history = History::new();
        let dc = DerivativeContext { registry: &registry, subject: &subject, physiology: phys, profile: &profile, compiled: &compiled, history: &history };

        let no_drug_dx = physio_derivative(&SimulationState::zeroed(BTreeMap::new()), 480.0, &dc, &BTreeMap::new());
        let zero_conc: BTreeMap<u64, f64> = compiled.interventions.iter().map(|iv| (iv.primitive_id, 0.0)).collect();
        let zero_conc_dx = physio_derivative(&SimulationState::zeroed(BTreeMap::new()), 480.0, &dc, &zero_conc);
        for id in SignalId::ALL {
            assert_eq!(no_drug_dx.signal(*id), zero_conc_dx.signal(*id));
        }
    }
}
