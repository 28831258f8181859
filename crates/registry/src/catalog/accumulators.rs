//! The 2-entry accumulator catalog (`AccumulatorId`): slow running totals
//! that persist across a multi-day run instead of resetting each day
//! (see `DESIGN.md`, accumulator carry-forward).

use crate::definition::*;
use crate::ids::*;

fn prod(source: SourceRef, coefficient: f64) -> ProductionTerm {
    ProductionTerm::new(source, coefficient)
}

const fn sig(id: SignalId) -> SourceRef {
    SourceRef::Signal(id)
}

pub fn definition(id: AccumulatorId) -> AuxiliaryDefinition {
    match id {
        AccumulatorId::CortisolIntegral => AuxiliaryDefinition {
            setpoint: SetpointKind::Constant(0.0),
            tau_minutes: 1.0e9,
            production: vec![prod(sig(SignalId::Cortisol), 1.0)],
            clearance: vec![],
            couplings: vec![],
            initial_value: InitialValue::Constant(0.0),
            min: Some(0.0),
            max: None,
        },
        AccumulatorId::SleepDebt => AuxiliaryDefinition {
            setpoint: SetpointKind::SleepGated { awake: 0.0017, asleep: -0.002 },
            tau_minutes: 1.0e9,
            production: vec![],
            clearance: vec![],
            couplings: vec![],
            initial_value: InitialValue::Constant(0.0),
            min: Some(0.0),
            max: Some(24.0),
        },
    }
}
