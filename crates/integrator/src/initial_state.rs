//! Construction of `t=0` state from the registry's `initialValue`s and the
//! composed profile's setpoint bias.

use profiles::ComposedProfile;
use registry::{AccumulatorId, AuxId, EvalContext, InitialValue, Registry, SimulationState};
use std::collections::BTreeMap;

pub fn build_initial_state(
    registry: &Registry,
    ctx0: &EvalContext,
    profile: &ComposedProfile,
    pk_shape: BTreeMap<u64, usize>,
) -> SimulationState {
    let mut state = SimulationState::zeroed(pk_shape);

    for def in &registry.signals {
        let value = match def.initial_value {
            InitialValue::Constant(v) => v,
            InitialValue::FromSetpoint => profile.adjust_setpoint(def.id, def.setpoint.evaluate(ctx0)),
        };
        state.set_signal(def.id, value);
    }

    for (i, def) in registry.auxiliary.iter().enumerate() {
        let id = AuxId::ALL[i];
        let value = match def.initial_value {
            InitialValue::Constant(v) => v,
            InitialValue::FromSetpoint => def.setpoint.evaluate(ctx0),
        };
        state.set_auxiliary(id, value);
    }

    for (i, def) in registry.accumulators.iter().enumerate() {
        let id = AccumulatorId::ALL[i];
        let value = match def.initial_value {
            InitialValue::Constant(v) => v,
            InitialValue::FromSetpoint => def.setpoint.evaluate(ctx0),
        };
        state.set_accumulator(id, value);
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use registry::SignalId;

    #[test]
    fn signals_start_at_their_own_setpoint_by_default() {
        let registry = registry::catalog::build_registry().unwrap();
        let subject = physiology::Subject::new(physiology::Sex::Male, 30.0, 80.0, 178.0);
        let phys = physiology::derive_physiology(&subject).unwrap();
        let ctx0 = crate::context::eval_context_at(&subject, phys, 8.0 * 60.0, 0.0, false);
        let profile = ComposedProfile::baseline();

        let state = build_initial_state(&registry, &ctx0, &profile, BTreeMap::new());
        let def = registry.signal(SignalId::Cortisol);
        assert_eq!(state.signal(SignalId::Cortisol), def.setpoint.evaluate(&ctx0));
    }

    #[test]
    fn accumulators_start_at_zero() {
        let registry = registry::catalog::build_registry().unwrap();
        let subject = physiology::Subject::new(physiology::Sex::Male, 30.0, 80.0, 178.0);
        let phys = physiology::derive_physiology(&subject).unwrap();
        let ctx0 = crate::context::eval_context_at(&subject, phys, 0.0, 0.0, false);
        let profile = ComposedProfile::baseline();

        let state = build_initial_state(&registry, &ctx0, &profile, BTreeMap::new());
        assert_eq!(state.accumulator(AccumulatorId::CortisolIntegral), 0.0);
    }
}
