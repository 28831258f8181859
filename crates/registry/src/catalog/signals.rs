//! The concrete 34-entry signal catalog. One match arm per [`SignalId`],
//! each a complete, owned [`SignalDefinition`].

use crate::definition::*;
use crate::ids::*;
use units::{ReferenceRange, Unit};

fn prod(source: SourceRef, coefficient: f64) -> ProductionTerm {
    ProductionTerm::new(source, coefficient)
}

fn prod_t(source: SourceRef, coefficient: f64, transform: Transform) -> ProductionTerm {
    ProductionTerm::with_transform(source, coefficient, transform)
}

fn stim(source: SourceRef, strength: f64) -> CouplingTerm {
    CouplingTerm::new(source, CouplingEffect::Stimulate, strength)
}

fn inhib(source: SourceRef, strength: f64) -> CouplingTerm {
    CouplingTerm::new(source, CouplingEffect::Inhibit, strength)
}

fn inhib_delayed(source: SourceRef, strength: f64, delay_minutes: f64) -> CouplingTerm {
    CouplingTerm::delayed(source, CouplingEffect::Inhibit, strength, delay_minutes)
}

const fn sig(id: SignalId) -> SourceRef {
    SourceRef::Signal(id)
}

const fn aux(id: AuxId) -> SourceRef {
    SourceRef::Auxiliary(id)
}

/// The complete, owned definition for one signal.
pub fn definition(id: SignalId) -> SignalDefinition {
    match id {
        SignalId::Cortisol => SignalDefinition {
            id,
            unit: Unit::NanomolePerLiter,
            reference_range: ReferenceRange::new(50.0, 700.0),
            tendency: Tendency::Mid,
            setpoint: SetpointKind::CircadianGaussian { base: 60.0, amplitude: 350.0, peak_hour: 7.5, kappa: 3.0 },
            tau_minutes: 45.0,
            production: vec![prod(aux(AuxId::CrhPool), 0.9)],
            clearance: vec![ClearanceTerm::linear(0.04), ClearanceTerm::enzyme_dependent(0.01, EnzymeId::Cyp3a4)],
            couplings: vec![inhib(sig(SignalId::Melatonin), 0.015)],
            initial_value: InitialValue::FromSetpoint,
            min: Some(15.0),
            max: Some(900.0),
        },
        SignalId::Melatonin => SignalDefinition {
            id,
            unit: Unit::PicogramPerMilliliter,
            reference_range: ReferenceRange::new(2.0, 120.0),
            tendency: Tendency::None,
            setpoint: SetpointKind::CircadianWindow { base: 4.0, amplitude: 100.0, start_hour: 21.0, end_hour: 7.0, transition_hours: 1.5 },
            tau_minutes: 30.0,
            production: vec![prod(aux(AuxId::AdenosinePressure), 6.0)],
            clearance: vec![ClearanceTerm::linear(0.08)],
            couplings: vec![inhib(sig(SignalId::Cortisol), 0.01)],
            initial_value: InitialValue::FromSetpoint,
            min: Some(1.0),
            max: Some(250.0),
        },
        SignalId::Dopamine => SignalDefinition {
            id,
            unit: Unit::NanomolarPerLiter,
            reference_range: ReferenceRange::new(5.0, 20.0),
            tendency: Tendency::Mid,
            setpoint: SetpointKind::CircadianGaussian { base: 9.0, amplitude: 4.0, peak_hour: 10.0, kappa: 1.2 },
            tau_minutes: 20.0,
            production: vec![prod(aux(AuxId::DopamineVesicles), 0.5)],
            clearance: vec![
                ClearanceTerm::transporter_dependent(0.3, TransporterId::DopamineTransporter),
                ClearanceTerm::enzyme_dependent(0.08, EnzymeId::MonoamineOxidaseA),
                ClearanceTerm::enzyme_dependent(0.02, EnzymeId::Comt),
            ],
            couplings: vec![stim(sig(SignalId::Orexin), 0.01)],
            initial_value: InitialValue::FromSetpoint,
            min: Some(1.0),
            max: Some(60.0),
        },
        SignalId::Serotonin => SignalDefinition {
            id,
            unit: Unit::NanomolarPerLiter,
            reference_range: ReferenceRange::new(100.0, 300.0),
            tendency: Tendency::Higher,
            setpoint: SetpointKind::CircadianGaussian { base: 150.0, amplitude: 40.0, peak_hour: 13.0, kappa: 1.0 },
            tau_minutes: 60.0,
            production: vec![prod(aux(AuxId::SerotoninPool), 0.6)],
            clearance: vec![
                ClearanceTerm::transporter_dependent(0.15, TransporterId::SerotoninTransporter),
                ClearanceTerm::enzyme_dependent(0.05, EnzymeId::MonoamineOxidaseA),
            ],
            couplings: vec![inhib(sig(SignalId::Cortisol), 0.01)],
            initial_value: InitialValue::FromSetpoint,
            min: Some(40.0),
            max: Some(500.0),
        },
        SignalId::Norepinephrine => SignalDefinition {
            id,
            unit: Unit::NanomolarPerLiter,
            reference_range: ReferenceRange::new(0.5, 3.0),
            tendency: Tendency::Mid,
            setpoint: SetpointKind::CircadianGaussian { base: 1.0, amplitude: 0.6, peak_hour: 9.0, kappa: 1.5 },
            tau_minutes: 8.0,
            production: vec![prod(aux(AuxId::NorepinephrineVesicles), 0.4), prod(sig(SignalId::Orexin), 0.02)],
            clearance: vec![
                ClearanceTerm::transporter_dependent(0.3, TransporterId::NorepinephrineTransporter),
                ClearanceTerm::enzyme_dependent(0.1, EnzymeId::Comt),
            ],
            couplings: vec![stim(sig(SignalId::Epinephrine), 0.05)],
            initial_value: InitialValue::FromSetpoint,
            min: Some(0.1),
            max: Some(20.0),
        },
        SignalId::Epinephrine => SignalDefinition {
            id,
            unit: Unit::NanomolarPerLiter,
            reference_range: ReferenceRange::new(0.05, 1.0),
            tendency: Tendency::Mid,
            setpoint: SetpointKind::Constant(0.15),
            tau_minutes: 5.0,
            production: vec![prod(sig(SignalId::Norepinephrine), 0.1)],
            clearance: vec![ClearanceTerm::linear(0.4)],
            couplings: vec![],
            initial_value: InitialValue::FromSetpoint,
            min: Some(0.02),
            max: Some(10.0),
        },
        SignalId::Glucose => SignalDefinition {
            id,
            unit: Unit::MilligramPerDeciliter,
            reference_range: ReferenceRange::new(70.0, 110.0),
            tendency: Tendency::Mid,
            setpoint: SetpointKind::Constant(90.0),
            tau_minutes: 25.0,
            production: vec![
                prod(aux(AuxId::HepaticGlycogen), 0.015),
                prod(sig(SignalId::Cortisol), 0.01),
                prod(sig(SignalId::Epinephrine), 2.0),
            ],
            clearance: vec![
                ClearanceTerm::transporter_dependent(0.012, TransporterId::Glut4),
                ClearanceTerm::linear(0.001),
            ],
            couplings: vec![inhib(sig(SignalId::Insulin), 0.25)],
            initial_value: InitialValue::FromSetpoint,
            min: Some(40.0),
            max: Some(500.0),
        },
        SignalId::Insulin => SignalDefinition {
            id,
            unit: Unit::UnitPerLiter,
            reference_range: ReferenceRange::new(2.0, 25.0),
            tendency: Tendency::Mid,
            setpoint: SetpointKind::Constant(6.0),
            tau_minutes: 10.0,
            production: vec![prod_t(sig(SignalId::Glucose), 0.5, Transform::Hill { emax: 40.0, ec50: 110.0, n: 3.0 })],
            clearance: vec![ClearanceTerm::linear(0.12)],
            couplings: vec![],
            initial_value: InitialValue::FromSetpoint,
            min: Some(1.0),
            max: Some(300.0),
        },
        SignalId::Glucagon => SignalDefinition {
            id,
            unit: Unit::PicogramPerMilliliter,
            reference_range: ReferenceRange::new(50.0, 150.0),
            tendency: Tendency::Mid,
            setpoint: SetpointKind::Constant(80.0),
            tau_minutes: 15.0,
            production: vec![prod_t(sig(SignalId::Glucose), 0.4, Transform::InverseHill { imax: 60.0, ic50: 90.0, n: 3.0 })],
            clearance: vec![ClearanceTerm::linear(0.1)],
            couplings: vec![inhib(sig(SignalId::Insulin), 0.3)],
            initial_value: InitialValue::FromSetpoint,
            min: Some(10.0),
            max: Some(400.0),
        },
        SignalId::Testosterone => SignalDefinition {
            id,
            unit: Unit::NanogramPerDeciliter,
            reference_range: ReferenceRange::new(30.0, 1000.0),
            tendency: Tendency::Mid,
            setpoint: SetpointKind::CircadianGaussian { base: 400.0, amplitude: 150.0, peak_hour: 7.0, kappa: 2.0 },
            tau_minutes: 240.0,
            production: vec![prod(aux(AuxId::GnrhPulse), 0.3)],
            clearance: vec![ClearanceTerm::enzyme_dependent(0.02, EnzymeId::Cyp3a4)],
            couplings: vec![],
            initial_value: InitialValue::FromSetpoint,
            min: Some(10.0),
            max: Some(1200.0),
        },
        SignalId::Estrogen => SignalDefinition {
            id,
            unit: Unit::PicogramPerMilliliter,
            reference_range: ReferenceRange::new(20.0, 400.0),
            tendency: Tendency::Mid,
            setpoint: SetpointKind::CycleDriven { low: 20.0, high: 220.0, hormone: CycleHormone::Estrogen },
            tau_minutes: 360.0,
            production: vec![],
            clearance: vec![ClearanceTerm::enzyme_dependent(0.015, EnzymeId::Cyp1a2)],
            couplings: vec![],
            initial_value: InitialValue::FromSetpoint,
            min: Some(5.0),
            max: Some(500.0),
        },
        SignalId::Progesterone => SignalDefinition {
            id,
            unit: Unit::NanogramPerMilliliter,
            reference_range: ReferenceRange::new(0.2, 25.0),
            tendency: Tendency::Mid,
            setpoint: SetpointKind::CycleDriven { low: 0.3, high: 18.0, hormone: CycleHormone::Progesterone },
            tau_minutes: 360.0,
            production: vec![],
            clearance: vec![ClearanceTerm::enzyme_dependent(0.01, EnzymeId::Cyp3a4)],
            couplings: vec![],
            initial_value: InitialValue::FromSetpoint,
            min: Some(0.1),
            max: Some(30.0),
        },
        SignalId::Lh => SignalDefinition {
            id,
            unit: Unit::InternationalUnitPerLiter,
            reference_range: ReferenceRange::new(1.0, 70.0),
            tendency: Tendency::Mid,
            setpoint: SetpointKind::CycleDriven { low: 2.0, high: 60.0, hormone: CycleHormone::Lh },
            tau_minutes: 180.0,
            production: vec![prod(aux(AuxId::GnrhPulse), 0.2)],
            clearance: vec![ClearanceTerm::linear(0.01)],
            couplings: vec![],
            initial_value: InitialValue::FromSetpoint,
            min: Some(0.5),
            max: Some(100.0),
        },
        SignalId::Fsh => SignalDefinition {
            id,
            unit: Unit::InternationalUnitPerLiter,
            reference_range: ReferenceRange::new(1.0, 25.0),
            tendency: Tendency::Mid,
            setpoint: SetpointKind::CycleDriven { low: 2.0, high: 18.0, hormone: CycleHormone::Fsh },
            tau_minutes: 180.0,
            production: vec![prod(aux(AuxId::GnrhPulse), 0.1)],
            clearance: vec![ClearanceTerm::linear(0.01)],
            couplings: vec![],
            initial_value: InitialValue::FromSetpoint,
            min: Some(0.5),
            max: Some(40.0),
        },
        SignalId::Leptin => SignalDefinition {
            id,
            unit: Unit::NanogramPerMilliliter,
            reference_range: ReferenceRange::new(2.0, 25.0),
            tendency: Tendency::Mid,
            setpoint: SetpointKind::CircadianGaussian { base: 10.0, amplitude: 3.0, peak_hour: 1.0, kappa: 1.0 },
            tau_minutes: 480.0,
            production: vec![prod(aux(AuxId::HepaticGlycogen), 0.005)],
            clearance: vec![ClearanceTerm::linear(0.003)],
            couplings: vec![inhib(aux(AuxId::HungerDrive), 0.1)],
            initial_value: InitialValue::FromSetpoint,
            min: Some(0.5),
            max: Some(80.0),
        },
        SignalId::Ghrelin => SignalDefinition {
            id,
            unit: Unit::PicogramPerMilliliter,
            reference_range: ReferenceRange::new(200.0, 1200.0),
            tendency: Tendency::Lower,
            setpoint: SetpointKind::CircadianGaussian { base: 500.0, amplitude: 300.0, peak_hour: 12.0, kappa: 2.0 },
            tau_minutes: 60.0,
            production: vec![prod(aux(AuxId::HungerDrive), 200.0)],
            clearance: vec![ClearanceTerm::linear(0.05)],
            // Leptin's satiety signal suppresses ghrelin with a lag —
            // adipose-derived leptin released an hour ago, not this
            // instant's level, is what the hypothalamus is responding to.
            couplings: vec![inhib(sig(SignalId::Glucose), 2.0), inhib_delayed(sig(SignalId::Leptin), 8.0, 60.0)],
            initial_value: InitialValue::FromSetpoint,
            min: Some(50.0),
            max: Some(2000.0),
        },
        SignalId::Oxytocin => SignalDefinition {
            id,
            unit: Unit::PicogramPerMilliliter,
            reference_range: ReferenceRange::new(1.0, 10.0),
            tendency: Tendency::Higher,
            setpoint: SetpointKind::Constant(3.0),
            tau_minutes: 30.0,
            production: vec![],
            clearance: vec![ClearanceTerm::linear(0.1)],
            couplings: vec![inhib(sig(SignalId::Cortisol), 0.002)],
            initial_value: InitialValue::FromSetpoint,
            min: Some(0.2),
            max: Some(50.0),
        },
        SignalId::Vasopressin => SignalDefinition {
            id,
            unit: Unit::PicogramPerMilliliter,
            reference_range: ReferenceRange::new(1.0, 5.0),
            tendency: Tendency::Mid,
            setpoint: SetpointKind::Constant(2.0),
            tau_minutes: 60.0,
            production: vec![prod(sig(SignalId::Ethanol), -0.02)],
            clearance: vec![ClearanceTerm::linear(0.05)],
            couplings: vec![],
            initial_value: InitialValue::FromSetpoint,
            min: Some(0.1),
            max: Some(20.0),
        },
        SignalId::GrowthHormone => SignalDefinition {
            id,
            unit: Unit::NanogramPerMilliliter,
            reference_range: ReferenceRange::new(0.1, 10.0),
            tendency: Tendency::Higher,
            setpoint: SetpointKind::SleepGated { awake: 0.5, asleep: 6.0 },
            tau_minutes: 40.0,
            production: vec![],
            clearance: vec![ClearanceTerm::linear(0.06)],
            couplings: vec![inhib(sig(SignalId::Glucose), 0.01)],
            initial_value: InitialValue::FromSetpoint,
            min: Some(0.05),
            max: Some(40.0),
        },
        SignalId::Tsh => SignalDefinition {
            id,
            unit: Unit::InternationalUnitPerLiter,
            reference_range: ReferenceRange::new(0.4, 4.5),
            tendency: Tendency::Mid,
            setpoint: SetpointKind::CircadianGaussian { base: 2.0, amplitude: 0.8, peak_hour: 23.0, kappa: 1.0 },
            tau_minutes: 600.0,
            production: vec![],
            clearance: vec![ClearanceTerm::linear(0.002)],
            couplings: vec![inhib(sig(SignalId::T4), 0.02)],
            initial_value: InitialValue::FromSetpoint,
            min: Some(0.05),
            max: Some(20.0),
        },
        SignalId::T3 => SignalDefinition {
            id,
            unit: Unit::NanogramPerDeciliter,
            reference_range: ReferenceRange::new(80.0, 200.0),
            tendency: Tendency::Mid,
            setpoint: SetpointKind::Constant(120.0),
            tau_minutes: 1440.0,
            production: vec![prod(sig(SignalId::T4), 0.05)],
            clearance: vec![ClearanceTerm::linear(0.0008)],
            couplings: vec![],
            initial_value: InitialValue::FromSetpoint,
            min: Some(20.0),
            max: Some(300.0),
        },
        SignalId::T4 => SignalDefinition {
            id,
            unit: Unit::MicrogramPerDeciliter,
            reference_range: ReferenceRange::new(4.5, 12.0),
            tendency: Tendency::Mid,
            setpoint: SetpointKind::Constant(8.0),
            tau_minutes: 2880.0,
            production: vec![prod(sig(SignalId::Tsh), 0.3)],
            clearance: vec![ClearanceTerm::linear(0.0004)],
            couplings: vec![],
            initial_value: InitialValue::FromSetpoint,
            min: Some(1.0),
            max: Some(20.0),
        },
        SignalId::HeartRate => SignalDefinition {
            id,
            unit: Unit::BeatsPerMinute,
            reference_range: ReferenceRange::new(50.0, 100.0),
            tendency: Tendency::Mid,
            setpoint: SetpointKind::SleepGated { awake: 68.0, asleep: 55.0 },
            tau_minutes: 3.0,
            production: vec![prod(sig(SignalId::Epinephrine), 12.0), prod(sig(SignalId::Norepinephrine), 4.0)],
            clearance: vec![ClearanceTerm::linear(0.2)],
            couplings: vec![],
            initial_value: InitialValue::FromSetpoint,
            min: Some(35.0),
            max: Some(220.0),
        },
        SignalId::SystolicBp => SignalDefinition {
            id,
            unit: Unit::MillimetersOfMercury,
            reference_range: ReferenceRange::new(100.0, 130.0),
            tendency: Tendency::Mid,
            setpoint: SetpointKind::SleepGated { awake: 118.0, asleep: 105.0 },
            tau_minutes: 10.0,
            production: vec![prod(sig(SignalId::Norepinephrine), 4.0)],
            clearance: vec![ClearanceTerm::linear(0.1)],
            couplings: vec![],
            initial_value: InitialValue::FromSetpoint,
            min: Some(70.0),
            max: Some(220.0),
        },
        SignalId::DiastolicBp => SignalDefinition {
            id,
            unit: Unit::MillimetersOfMercury,
            reference_range: ReferenceRange::new(60.0, 85.0),
            tendency: Tendency::Mid,
            setpoint: SetpointKind::SleepGated { awake: 76.0, asleep: 66.0 },
            tau_minutes: 10.0,
            production: vec![prod(sig(SignalId::Norepinephrine), 2.0)],
            clearance: vec![ClearanceTerm::linear(0.1)],
            couplings: vec![],
            initial_value: InitialValue::FromSetpoint,
            min: Some(40.0),
            max: Some(140.0),
        },
        SignalId::CoreTemperature => SignalDefinition {
            id,
            unit: Unit::DegreesCelsius,
            reference_range: ReferenceRange::new(36.3, 37.3),
            tendency: Tendency::Mid,
            setpoint: SetpointKind::CircadianGaussian { base: 36.5, amplitude: 0.5, peak_hour: 18.0, kappa: 1.0 },
            tau_minutes: 90.0,
            production: vec![prod(aux(AuxId::CoreTempDrive), 0.02)],
            clearance: vec![],
            couplings: vec![],
            initial_value: InitialValue::FromSetpoint,
            min: Some(34.5),
            max: Some(41.0),
        },
        SignalId::Acetylcholine => SignalDefinition {
            id,
            unit: Unit::NanomolarPerLiter,
            reference_range: ReferenceRange::new(0.5, 5.0),
            tendency: Tendency::Higher,
            setpoint: SetpointKind::SleepGated { awake: 2.5, asleep: 1.0 },
            tau_minutes: 15.0,
            production: vec![],
            clearance: vec![ClearanceTerm::linear(0.1)],
            couplings: vec![],
            initial_value: InitialValue::FromSetpoint,
            min: Some(0.1),
            max: Some(20.0),
        },
        SignalId::Histamine => SignalDefinition {
            id,
            unit: Unit::NanomolarPerLiter,
            reference_range: ReferenceRange::new(0.3, 3.0),
            tendency: Tendency::Higher,
            setpoint: SetpointKind::SleepGated { awake: 1.5, asleep: 0.3 },
            tau_minutes: 20.0,
            production: vec![],
            clearance: vec![ClearanceTerm::linear(0.08)],
            couplings: vec![],
            initial_value: InitialValue::FromSetpoint,
            min: Some(0.05),
            max: Some(10.0),
        },
        SignalId::Orexin => SignalDefinition {
            id,
            unit: Unit::PicogramPerMilliliter,
            reference_range: ReferenceRange::new(100.0, 350.0),
            tendency: Tendency::Higher,
            setpoint: SetpointKind::SleepGated { awake: 280.0, asleep: 90.0 },
            tau_minutes: 15.0,
            production: vec![],
            clearance: vec![ClearanceTerm::linear(0.05)],
            couplings: vec![inhib(aux(AuxId::AdenosinePressure), 0.3)],
            initial_value: InitialValue::FromSetpoint,
            min: Some(20.0),
            max: Some(500.0),
        },
        SignalId::Triglycerides => SignalDefinition {
            id,
            unit: Unit::MilligramPerDeciliter,
            reference_range: ReferenceRange::new(40.0, 150.0),
            tendency: Tendency::Lower,
            setpoint: SetpointKind::Constant(100.0),
            tau_minutes: 720.0,
            production: vec![prod(sig(SignalId::Glucose), 0.3)],
            clearance: vec![ClearanceTerm::linear(0.0015)],
            couplings: vec![],
            initial_value: InitialValue::FromSetpoint,
            min: Some(20.0),
            max: Some(800.0),
        },
        SignalId::LdlCholesterol => SignalDefinition {
            id,
            unit: Unit::MilligramPerDeciliter,
            reference_range: ReferenceRange::new(50.0, 130.0),
            tendency: Tendency::Lower,
            setpoint: SetpointKind::Constant(100.0),
            tau_minutes: 2880.0,
            production: vec![],
            clearance: vec![ClearanceTerm::linear(0.0004)],
            couplings: vec![],
            initial_value: InitialValue::FromSetpoint,
            min: Some(20.0),
            max: Some(400.0),
        },
        SignalId::HdlCholesterol => SignalDefinition {
            id,
            unit: Unit::MilligramPerDeciliter,
            reference_range: ReferenceRange::new(40.0, 90.0),
            tendency: Tendency::Higher,
            setpoint: SetpointKind::Constant(55.0),
            tau_minutes: 2880.0,
            production: vec![],
            clearance: vec![ClearanceTerm::linear(0.0004)],
            couplings: vec![],
            initial_value: InitialValue::FromSetpoint,
            min: Some(10.0),
            max: Some(150.0),
        },
        SignalId::Lactate => SignalDefinition {
            id,
            unit: Unit::MillimolePerLiter,
            reference_range: ReferenceRange::new(0.5, 2.0),
            tendency: Tendency::Lower,
            setpoint: SetpointKind::Constant(1.0),
            tau_minutes: 15.0,
            production: vec![prod(aux(AuxId::MuscleGlycogen), 0.002)],
            clearance: vec![ClearanceTerm::saturable(0.8, 2.0)],
            couplings: vec![],
            initial_value: InitialValue::FromSetpoint,
            min: Some(0.3),
            max: Some(20.0),
        },
        SignalId::Ethanol => SignalDefinition {
            id,
            unit: Unit::MillimolePerLiter,
            reference_range: ReferenceRange::new(0.0, 0.2),
            tendency: Tendency::Lower,
            setpoint: SetpointKind::Constant(0.0),
            // No own production or clearance: the ethanol intervention's PD
            // direct forcing is the only thing that moves this signal, from
            // its own Michaelis-Menten PK compartment's plasma concentration.
            // A short tau keeps blood ethanol tracking that compartment
            // instead of drifting when forcing eventually falls to zero.
            tau_minutes: 20.0,
            production: vec![],
            clearance: vec![],
            couplings: vec![],
            initial_value: InitialValue::Constant(0.0),
            min: Some(0.0),
            max: Some(100.0),
        },
    }
}
