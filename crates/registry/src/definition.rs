//! Tagged-union shapes for everything a [`SignalDefinition`]/[`AuxiliaryDefinition`]
//! can say about its own dynamics.
//!
//! Every field here is plain, `Copy` data instead of a trait object or a
//! closure: the whole catalog is `const`-constructible, which is what keeps
//! startup validation (`validate.rs`) and the ODE assembler's inner loop
//! array-indexed instead of hash- or vtable-indexed.

use crate::ids::{AccumulatorId, AuxId, EnzymeId, SignalId, TransporterId};
use serde::{Deserialize, Serialize};

/// Anything a production term, clearance term, or coupling can read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceRef {
    Signal(SignalId),
    Auxiliary(AuxId),
    Accumulator(AccumulatorId),
    /// The literal `"constant"` source: contributes `coefficient` unconditionally.
    Constant,
    /// The literal `"circadian"` source: contributes `ctx.circadian_minute_of_day`
    /// mapped to phase, passed through the term's transform.
    Circadian,
}

/// Which normalized cycle hormone a [`SetpointKind::CycleDriven`] setpoint reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CycleHormone {
    Estrogen,
    Progesterone,
    Lh,
    Fsh,
}

/// The known setpoint shapes named in the design notes: "circadian-gaussian,
/// circadian-window, cycle-driven, constant". `setpoint(ctx)` is pure — it
/// never reads signal/auxiliary state, only `ctx`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum SetpointKind {
    /// A fixed value, independent of time or subject.
    Constant(f64),
    /// A von Mises bump centered on a peak hour, e.g. the cortisol awakening
    /// response or a melatonin onset ramp.
    CircadianGaussian {
        base: f64,
        amplitude: f64,
        peak_hour: f64,
        kappa: f64,
    },
    /// A half-cosine window active between two hours (wrap-around allowed),
    /// e.g. nocturnal melatonin or sleep-state-gated growth hormone.
    CircadianWindow {
        base: f64,
        amplitude: f64,
        start_hour: f64,
        end_hour: f64,
        transition_hours: f64,
    },
    /// Scaled by a normalized `[0,1]` menstrual-cycle hormone curve.
    CycleDriven {
        low: f64,
        high: f64,
        hormone: CycleHormone,
    },
    /// Two plateaus gated by sleep state, with no time-of-day shape otherwise.
    SleepGated { awake: f64, asleep: f64 },
}

impl SetpointKind {
    /// Evaluate the setpoint at the given context. Pure: reads only `ctx`,
    /// never signal/auxiliary state.
    pub fn evaluate(&self, ctx: &crate::context::EvalContext) -> f64 {
        use mathkernel::{gaussian_phase, hour_to_phase, minute_to_phase, window_phase};
        match *self {
            SetpointKind::Constant(v) => v,
            SetpointKind::CircadianGaussian { base, amplitude, peak_hour, kappa } => {
                let theta = minute_to_phase(ctx.circadian_minute_of_day);
                let center = hour_to_phase(peak_hour);
                base + amplitude * gaussian_phase(theta, center, kappa)
            }
            SetpointKind::CircadianWindow { base, amplitude, start_hour, end_hour, transition_hours } => {
                let theta = minute_to_phase(ctx.circadian_minute_of_day);
                let start = hour_to_phase(start_hour);
                let end = hour_to_phase(end_hour);
                let transition = hour_to_phase(transition_hours);
                base + amplitude * window_phase(theta, start, end, transition)
            }
            SetpointKind::CycleDriven { low, high, hormone } => {
                let fraction = ctx
                    .cycle
                    .map(|cycle| {
                        let h = physiology::get_menstrual_hormones(cycle.cycle_day, cycle.cycle_length_days);
                        match hormone {
                            CycleHormone::Estrogen => h.estrogen,
                            CycleHormone::Progesterone => h.progesterone,
                            CycleHormone::Lh => h.lh,
                            CycleHormone::Fsh => h.fsh,
                        }
                    })
                    .unwrap_or(0.0);
                low + (high - low) * fraction
            }
            SetpointKind::SleepGated { awake, asleep } => {
                if ctx.is_asleep {
                    asleep
                } else {
                    awake
                }
            }
        }
    }
}

/// A pure scalar transform applied to a source value (or to a clearance
/// contribution) before it is scaled by a term's coefficient/rate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Transform {
    Identity,
    Hill { emax: f64, ec50: f64, n: f64 },
    InverseHill { imax: f64, ic50: f64, n: f64 },
    Logistic { l: f64, k: f64, x0: f64 },
    /// A constant multiplier, e.g. to flip a sign or rescale a unit.
    Scale(f64),
}

impl Transform {
    pub fn apply(&self, x: f64) -> f64 {
        match *self {
            Transform::Identity => x,
            Transform::Hill { emax, ec50, n } => mathkernel::hill_response(x, emax, ec50, n),
            Transform::InverseHill { imax, ic50, n } => mathkernel::inverse_hill(x, imax, ic50, n),
            Transform::Logistic { l, k, x0 } => mathkernel::logistic_response(x, l, k, x0),
            Transform::Scale(s) => x * s,
        }
    }
}

/// One `(source, coefficient, transform)` production term.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProductionTerm {
    pub source: SourceRef,
    pub coefficient: f64,
    pub transform: Transform,
}

impl ProductionTerm {
    pub const fn new(source: SourceRef, coefficient: f64) -> Self {
        Self { source, coefficient, transform: Transform::Identity }
    }

    pub const fn with_transform(source: SourceRef, coefficient: f64, transform: Transform) -> Self {
        Self { source, coefficient, transform }
    }
}

/// The three clearance shapes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum ClearanceKind {
    /// `-rate * x`.
    Linear { rate: f64 },
    /// `-Vmax * x / (Km + x)`.
    Saturable { vmax: f64, km: f64 },
    /// `-rate * activity(enzyme) * x`.
    EnzymeDependent { rate: f64, enzyme: EnzymeId },
    /// Generalization of the same shape to transporter-mediated clearance
    /// (e.g. GLUT4-mediated glucose uptake, monoamine reuptake transporters)
    /// — `-rate * activity(transporter) * x`. Transporters compose into the
    /// activity map identically to enzymes, so the same term shape applies.
    TransporterDependent { rate: f64, transporter: TransporterId },
}

/// A clearance term with an optional multiplicative transform on its
/// contribution ("each clearance term may carry an
/// optional transform(x, state, ctx) -> multiplier").
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClearanceTerm {
    pub kind: ClearanceKind,
    pub transform: Transform,
}

impl ClearanceTerm {
    pub const fn linear(rate: f64) -> Self {
        Self { kind: ClearanceKind::Linear { rate }, transform: Transform::Identity }
    }

    pub const fn saturable(vmax: f64, km: f64) -> Self {
        Self { kind: ClearanceKind::Saturable { vmax, km }, transform: Transform::Identity }
    }

    pub const fn enzyme_dependent(rate: f64, enzyme: EnzymeId) -> Self {
        Self { kind: ClearanceKind::EnzymeDependent { rate, enzyme }, transform: Transform::Identity }
    }

    pub const fn transporter_dependent(rate: f64, transporter: TransporterId) -> Self {
        Self { kind: ClearanceKind::TransporterDependent { rate, transporter }, transform: Transform::Identity }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CouplingEffect {
    Stimulate,
    Inhibit,
}

/// `(source, effect, strength, optional delay)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CouplingTerm {
    pub source: SourceRef,
    pub effect: CouplingEffect,
    pub strength: f64,
    /// Delay in minutes; `0.0` means no delay (read the current step).
    pub delay_minutes: f64,
}

impl CouplingTerm {
    pub const fn new(source: SourceRef, effect: CouplingEffect, strength: f64) -> Self {
        Self { source, effect, strength, delay_minutes: 0.0 }
    }

    pub const fn delayed(source: SourceRef, effect: CouplingEffect, strength: f64, delay_minutes: f64) -> Self {
        Self { source, effect, strength, delay_minutes }
    }

    pub fn signed_strength(&self) -> f64 {
        match self.effect {
            CouplingEffect::Stimulate => self.strength,
            CouplingEffect::Inhibit => -self.strength,
        }
    }
}

/// `initialValue`: a constant or a function of context.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum InitialValue {
    Constant(f64),
    FromSetpoint,
}

/// The ideal direction a signal's value should move for better physiology;
/// informational only (consumed by monitors/UI, never by the ODE itself).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Tendency {
    Higher,
    Lower,
    Mid,
    None,
}

/// Complete, immutable dynamics description for one signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalDefinition {
    pub id: SignalId,
    pub unit: units::Unit,
    pub reference_range: units::ReferenceRange,
    pub tendency: Tendency,
    pub setpoint: SetpointKind,
    /// Relaxation time constant in minutes; never scaled by any profile
    /// modifier (see `DESIGN.md`, Open Question (a)).
    pub tau_minutes: f64,
    pub production: Vec<ProductionTerm>,
    pub clearance: Vec<ClearanceTerm>,
    pub couplings: Vec<CouplingTerm>,
    pub initial_value: InitialValue,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Identical shape to [`SignalDefinition`] minus the user-facing display
/// fields (unit, reference range, tendency) — internal state only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuxiliaryDefinition {
    pub setpoint: SetpointKind,
    pub tau_minutes: f64,
    pub production: Vec<ProductionTerm>,
    pub clearance: Vec<ClearanceTerm>,
    pub couplings: Vec<CouplingTerm>,
    pub initial_value: InitialValue,
    pub min: Option<f64>,
    pub max: Option<f64>,
}
