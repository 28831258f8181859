//! Concrete intervention catalog: stimulants, a meal, exercise, melatonin,
//! ethanol, a benzodiazepine, plus a `sleep` state marker consumed directly
//! by the integrator.

use crate::definition::{InterventionDefinition, Pharmacology, PkPdPrimitive, TimelineItem};
use pharmacology::{DeliveryMode, KineticsKind, Mechanism, PdEffect, PdTarget, PkPrimitive};
use registry::{AuxId, SignalId, TransporterId};

const ALL_KEYS: &[&str] = &[
    "caffeine",
    "methylphenidate",
    "high_carb_meal",
    "exercise",
    "melatonin_supplement",
    "ethanol",
    "benzodiazepine",
    "sleep",
];

pub fn definition(key: &str) -> Option<InterventionDefinition> {
    match key {
        "caffeine" => Some(caffeine()),
        "methylphenidate" => Some(methylphenidate()),
        "high_carb_meal" => Some(high_carb_meal()),
        "exercise" => Some(exercise()),
        "melatonin_supplement" => Some(melatonin_supplement()),
        "ethanol" => Some(ethanol()),
        "benzodiazepine" => Some(benzodiazepine()),
        "sleep" => Some(sleep()),
        _ => None,
    }
}

/// Oral, one-compartment, competitive adenosine-A2a antagonist — modeled as
/// a direct inhibitory forcing on the `adenosine_pressure` auxiliary rather
/// than on `ReceptorId::AdenosineA2a` itself (see `DESIGN.md`: real-time PD
/// receptor targets have no dynamical readout in this core's clearance/
/// coupling vocabulary, so receptor-mediated drug effects are expressed on
/// the downstream pool or signal they would otherwise gate).
fn caffeine() -> InterventionDefinition {
    InterventionDefinition {
        key: "caffeine",
        label: "Caffeine",
        pharmacology: Pharmacology::Factory(|item: &TimelineItem| {
            let dose_mg = item.param("dose_mg", 200.0);
            vec![PkPdPrimitive {
                pk: PkPrimitive {
                    kinetics: KineticsKind::OneCompartment { ka: 0.025, ke: 0.00231, volume_l: 36.0 },
                    delivery: DeliveryMode::Bolus { dose: dose_mg },
                    bioavailability: 0.99,
                },
                pd: vec![PdEffect {
                    target: PdTarget::Auxiliary(AuxId::AdenosinePressure),
                    mechanism: Mechanism::Antagonist,
                    efficacy: -0.9,
                    affinity: 3.0,
                    hill_n: 1.0,
                }],
            }]
        }),
    }
}

/// Oral, one-compartment, dopamine/norepinephrine transporter inhibitor.
/// Transporter targets are the one receptor-family PD target that genuinely
/// feeds the ODE: `ClearanceKind::TransporterDependent` reads the activity
/// map directly.
fn methylphenidate() -> InterventionDefinition {
    InterventionDefinition {
        key: "methylphenidate",
        label: "Methylphenidate",
        pharmacology: Pharmacology::Factory(|item: &TimelineItem| {
            let dose_mg = item.param("dose_mg", 10.0);
            vec![PkPdPrimitive {
                pk: PkPrimitive {
                    kinetics: KineticsKind::OneCompartment { ka: 0.07, ke: 0.00385, volume_l: 200.0 },
                    delivery: DeliveryMode::Bolus { dose: dose_mg },
                    bioavailability: 0.3,
                },
                pd: vec![
                    PdEffect {
                        target: PdTarget::Transporter(TransporterId::DopamineTransporter),
                        mechanism: Mechanism::Inhibitor,
                        efficacy: 0.8,
                        affinity: 0.05,
                        hill_n: 1.0,
                    },
                    PdEffect {
                        target: PdTarget::Transporter(TransporterId::NorepinephrineTransporter),
                        mechanism: Mechanism::Inhibitor,
                        efficacy: 0.6,
                        affinity: 0.05,
                        hill_n: 1.0,
                    },
                ],
            }]
        }),
    }
}

/// Continuous glucose-forcing factory: a virtual "gut glucose load"
/// compartment whose concentration directly forces the `glucose` signal's
/// production, with a smaller anticipatory insulin bump on top of glucose's
/// own Hill-response production term.
fn high_carb_meal() -> InterventionDefinition {
    InterventionDefinition {
        key: "high_carb_meal",
        label: "High-carbohydrate meal",
        pharmacology: Pharmacology::Factory(|item: &TimelineItem| {
            let carbs_g = item.param("carbs_g", 75.0);
            let dose = carbs_g * item.intensity * 0.8;
            vec![PkPdPrimitive {
                pk: PkPrimitive {
                    kinetics: KineticsKind::OneCompartment { ka: 0.04, ke: 0.02, volume_l: 10.0 },
                    delivery: DeliveryMode::Bolus { dose },
                    bioavailability: 1.0,
                },
                pd: vec![
                    PdEffect { target: PdTarget::Signal(SignalId::Glucose), mechanism: Mechanism::Agonist, efficacy: 0.6, affinity: 2.0, hill_n: 1.0 },
                    PdEffect { target: PdTarget::Signal(SignalId::Insulin), mechanism: Mechanism::Agonist, efficacy: 0.15, affinity: 2.0, hill_n: 1.0 },
                ],
            }]
        }),
    }
}

/// Continuous exercise factory: a fast-onset/offset "exertion" compartment
/// driving sympathetic signals up and glucose down for the item's span.
fn exercise() -> InterventionDefinition {
    InterventionDefinition {
        key: "exercise",
        label: "Aerobic exercise",
        pharmacology: Pharmacology::Factory(|item: &TimelineItem| {
            vec![PkPdPrimitive {
                pk: PkPrimitive {
                    kinetics: KineticsKind::OneCompartment { ka: 1.0, ke: 0.1, volume_l: 1.0 },
                    delivery: DeliveryMode::Continuous { intensity: item.intensity },
                    bioavailability: 1.0,
                },
                pd: vec![
                    PdEffect { target: PdTarget::Signal(SignalId::Norepinephrine), mechanism: Mechanism::Agonist, efficacy: 0.8, affinity: 0.3, hill_n: 1.0 },
                    PdEffect { target: PdTarget::Signal(SignalId::Epinephrine), mechanism: Mechanism::Agonist, efficacy: 0.5, affinity: 0.3, hill_n: 1.0 },
                    PdEffect { target: PdTarget::Signal(SignalId::Lactate), mechanism: Mechanism::Agonist, efficacy: 0.4, affinity: 0.3, hill_n: 1.0 },
                    PdEffect { target: PdTarget::Signal(SignalId::Glucose), mechanism: Mechanism::Agonist, efficacy: -0.3, affinity: 0.3, hill_n: 1.0 },
                ],
            }]
        }),
    }
}

/// Direct signal agonist: a fast, low-bioavailability oral compartment
/// forcing the `melatonin` signal directly.
fn melatonin_supplement() -> InterventionDefinition {
    InterventionDefinition {
        key: "melatonin_supplement",
        label: "Melatonin supplement",
        pharmacology: Pharmacology::Factory(|item: &TimelineItem| {
            let dose_mg = item.param("dose_mg", 3.0);
            vec![PkPdPrimitive {
                pk: PkPrimitive {
                    kinetics: KineticsKind::OneCompartment { ka: 0.1, ke: 0.0154, volume_l: 35.0 },
                    delivery: DeliveryMode::Bolus { dose: dose_mg },
                    bioavailability: 0.15,
                },
                pd: vec![PdEffect {
                    target: PdTarget::Signal(SignalId::Melatonin),
                    mechanism: Mechanism::Agonist,
                    efficacy: 40.0,
                    affinity: 0.01,
                    hill_n: 1.0,
                }],
            }]
        }),
    }
}

/// Oral, Michaelis-Menten elimination. The absorption phase is modeled as a
/// short infusion directly into the plasma compartment (no separate gut
/// compartment in `KineticsKind::MichaelisMenten`) rather than a true
/// absorption compartment — a documented simplification (`DESIGN.md`).
fn ethanol() -> InterventionDefinition {
    InterventionDefinition {
        key: "ethanol",
        label: "Ethanol",
        pharmacology: Pharmacology::Factory(|item: &TimelineItem| {
            let dose_g = item.param("dose_g", 14.0);
            const ETHANOL_MW_G_PER_MOL: f64 = 46.07;
            const ASSUMED_VD_L: f64 = 42.0;
            let dose_mmol_per_l = (dose_g / ETHANOL_MW_G_PER_MOL) * 1000.0 / ASSUMED_VD_L;
            vec![PkPdPrimitive {
                pk: PkPrimitive {
                    kinetics: KineticsKind::MichaelisMenten { vmax: 0.0667, km: 0.1 },
                    delivery: DeliveryMode::Infusion { dose: dose_mmol_per_l, duration_minutes: 30.0 },
                    bioavailability: 1.0,
                },
                pd: vec![PdEffect {
                    target: PdTarget::Signal(SignalId::Ethanol),
                    mechanism: Mechanism::Agonist,
                    efficacy: 1.0,
                    affinity: 0.05,
                    hill_n: 1.0,
                }],
            }]
        }),
    }
}

/// Generic benzodiazepine class, PK parameters grounded on lorazepam
/// (half-life 12h, ka 1.0/h, Vd 1.3 L/kg, oral bioavailability 0.90), PD
/// grounded on lorazepam's GABA-A benzodiazepine-site affinity (Ki 3 nM,
/// intrinsic efficacy 0.60): GABA-A positive allosteric modulation is
/// expressed here as direct suppressive forcing on the signals its
/// downstream coupling would otherwise gate (cortisol, norepinephrine), for
/// the same reason caffeine's adenosine antagonism targets a pool directly.
fn benzodiazepine() -> InterventionDefinition {
    InterventionDefinition {
        key: "benzodiazepine",
        label: "Benzodiazepine (lorazepam-class)",
        pharmacology: Pharmacology::Factory(|item: &TimelineItem| {
            let dose_mg = item.param("dose_mg", 1.0);
            vec![PkPdPrimitive {
                pk: PkPrimitive {
                    kinetics: KineticsKind::OneCompartment { ka: 0.01667, ke: 0.000963, volume_l: 91.0 },
                    delivery: DeliveryMode::Bolus { dose: dose_mg },
                    bioavailability: 0.90,
                },
                pd: vec![
                    PdEffect { target: PdTarget::Signal(SignalId::Cortisol), mechanism: Mechanism::Agonist, efficacy: -0.5, affinity: 0.02, hill_n: 1.0 },
                    PdEffect { target: PdTarget::Signal(SignalId::Norepinephrine), mechanism: Mechanism::Agonist, efficacy: -0.3, affinity: 0.02, hill_n: 1.0 },
                ],
            }]
        }),
    }
}

/// No PK/PD: a pure state marker the integrator reads to derive
/// `ctx.is_asleep` for the span of the item.
fn sleep() -> InterventionDefinition {
    InterventionDefinition { key: "sleep", label: "Sleep", pharmacology: Pharmacology::StateMarker }
}
