//! The 12-entry hidden-state catalog (`AuxId`). These never appear in a
//! response's signal list; they exist purely to host intermediate pools
//! (neurotransmitter vesicle stores, drive variables) that production terms
//! and couplings read from.

use crate::definition::*;
use crate::ids::*;

fn prod(source: SourceRef, coefficient: f64) -> ProductionTerm {
    ProductionTerm::new(source, coefficient)
}

fn stim(source: SourceRef, strength: f64) -> CouplingTerm {
    CouplingTerm::new(source, CouplingEffect::Stimulate, strength)
}

fn inhib(source: SourceRef, strength: f64) -> CouplingTerm {
    CouplingTerm::new(source, CouplingEffect::Inhibit, strength)
}

const fn sig(id: SignalId) -> SourceRef {
    SourceRef::Signal(id)
}

const fn aux(id: AuxId) -> SourceRef {
    SourceRef::Auxiliary(id)
}

pub fn definition(id: AuxId) -> AuxiliaryDefinition {
    match id {
        AuxId::CrhPool => AuxiliaryDefinition {
            setpoint: SetpointKind::CircadianGaussian { base: 1.0, amplitude: 0.6, peak_hour: 6.5, kappa: 3.0 },
            tau_minutes: 20.0,
            production: vec![],
            clearance: vec![ClearanceTerm::linear(0.05)],
            couplings: vec![inhib(sig(SignalId::Cortisol), 0.002)],
            initial_value: InitialValue::FromSetpoint,
            min: Some(0.0),
            max: Some(10.0),
        },
        AuxId::ActhPool => AuxiliaryDefinition {
            setpoint: SetpointKind::Constant(1.0),
            tau_minutes: 15.0,
            production: vec![prod(aux(AuxId::CrhPool), 0.5)],
            clearance: vec![ClearanceTerm::linear(0.1)],
            couplings: vec![inhib(sig(SignalId::Cortisol), 0.001)],
            initial_value: InitialValue::FromSetpoint,
            min: Some(0.0),
            max: Some(10.0),
        },
        AuxId::DopamineVesicles => AuxiliaryDefinition {
            setpoint: SetpointKind::Constant(1.0),
            tau_minutes: 60.0,
            production: vec![],
            clearance: vec![ClearanceTerm::linear(0.02)],
            couplings: vec![inhib(sig(SignalId::Dopamine), 0.01)],
            initial_value: InitialValue::FromSetpoint,
            min: Some(0.0),
            max: Some(3.0),
        },
        AuxId::NorepinephrineVesicles => AuxiliaryDefinition {
            setpoint: SetpointKind::Constant(1.0),
            tau_minutes: 30.0,
            production: vec![],
            clearance: vec![ClearanceTerm::linear(0.03)],
            couplings: vec![inhib(sig(SignalId::Norepinephrine), 0.02)],
            initial_value: InitialValue::FromSetpoint,
            min: Some(0.0),
            max: Some(3.0),
        },
        AuxId::SerotoninPool => AuxiliaryDefinition {
            setpoint: SetpointKind::Constant(1.0),
            tau_minutes: 90.0,
            production: vec![],
            clearance: vec![ClearanceTerm::linear(0.01)],
            couplings: vec![inhib(sig(SignalId::Serotonin), 0.005)],
            initial_value: InitialValue::FromSetpoint,
            min: Some(0.0),
            max: Some(3.0),
        },
        AuxId::AdenosinePressure => AuxiliaryDefinition {
            setpoint: SetpointKind::CircadianWindow { base: 0.1, amplitude: 0.9, start_hour: 7.0, end_hour: 23.0, transition_hours: 2.0 },
            tau_minutes: 90.0,
            production: vec![],
            clearance: vec![ClearanceTerm::linear(0.015)],
            couplings: vec![inhib(sig(SignalId::Orexin), 0.002)],
            initial_value: InitialValue::FromSetpoint,
            min: Some(0.0),
            max: Some(1.0),
        },
        AuxId::HepaticGlycogen => AuxiliaryDefinition {
            setpoint: SetpointKind::Constant(100.0),
            tau_minutes: 240.0,
            production: vec![],
            clearance: vec![ClearanceTerm::linear(0.003), ClearanceTerm::enzyme_dependent(0.001, EnzymeId::Cyp3a4)],
            couplings: vec![inhib(sig(SignalId::Glucagon), 0.05), inhib(sig(SignalId::Insulin), 0.1)],
            initial_value: InitialValue::FromSetpoint,
            min: Some(0.0),
            max: Some(300.0),
        },
        AuxId::MuscleGlycogen => AuxiliaryDefinition {
            setpoint: SetpointKind::Constant(300.0),
            tau_minutes: 480.0,
            production: vec![],
            clearance: vec![ClearanceTerm::linear(0.0015)],
            couplings: vec![],
            initial_value: InitialValue::FromSetpoint,
            min: Some(0.0),
            max: Some(600.0),
        },
        AuxId::InsulinAction => AuxiliaryDefinition {
            setpoint: SetpointKind::Constant(1.0),
            tau_minutes: 20.0,
            production: vec![prod(sig(SignalId::Insulin), 0.02)],
            clearance: vec![ClearanceTerm::linear(0.05)],
            couplings: vec![],
            initial_value: InitialValue::FromSetpoint,
            min: Some(0.0),
            max: Some(5.0),
        },
        AuxId::GnrhPulse => AuxiliaryDefinition {
            setpoint: SetpointKind::CircadianGaussian { base: 1.0, amplitude: 0.3, peak_hour: 4.0, kappa: 2.0 },
            tau_minutes: 120.0,
            production: vec![],
            clearance: vec![ClearanceTerm::linear(0.02)],
            couplings: vec![],
            initial_value: InitialValue::FromSetpoint,
            min: Some(0.0),
            max: Some(3.0),
        },
        AuxId::CoreTempDrive => AuxiliaryDefinition {
            setpoint: SetpointKind::SleepGated { awake: 1.0, asleep: -0.6 },
            tau_minutes: 60.0,
            production: vec![],
            clearance: vec![],
            couplings: vec![],
            initial_value: InitialValue::FromSetpoint,
            min: Some(-2.0),
            max: Some(2.0),
        },
        AuxId::HungerDrive => AuxiliaryDefinition {
            setpoint: SetpointKind::CircadianGaussian { base: 0.4, amplitude: 0.5, peak_hour: 12.0, kappa: 1.0 },
            tau_minutes: 30.0,
            production: vec![],
            clearance: vec![],
            couplings: vec![inhib(sig(SignalId::Leptin), 0.02), stim(sig(SignalId::Ghrelin), 0.0005)],
            initial_value: InitialValue::FromSetpoint,
            min: Some(0.0),
            max: Some(2.0),
        },
    }
}
