//! The ODE assembler: builds `dx/dt` for every signal, auxiliary, and
//! accumulator from the registry's catalog, the composed clinical profile,
//! the current step's activity map, and any PD direct forcing.
//!
//! All four ingredients are read-only for the duration of one derivative
//! evaluation; this function is called up to four times per grid step (RK4's
//! interior stages) and must be side-effect free.

use crate::history::History;
use crate::resolve::{resolve_delayed, resolve_source};
use pharmacology::{ActivityMap, DirectForcing};
use profiles::ComposedProfile;
use registry::{
    AccumulatorId, AuxId, AuxiliaryDefinition, ClearanceKind, ClearanceTerm, CouplingEffect,
    CouplingTerm, EvalContext, ProductionTerm, Registry, SignalDefinition, SignalId,
    SimulationState, Transform,
};

/// `Transform::Identity` means "no-op" for a production term or a coupling's
/// source, but a clearance term's optional transform is a *multiplier on the
/// contribution* — for `Identity` that multiplier must be `1.0`, not `x`
/// itself (every existing catalog entry defaults its clearance transform to
/// `Identity` and none of them are meant to be quadratic in the cleared
/// quantity).
fn clearance_multiplier(transform: &Transform, x: f64) -> f64 {
    match transform {
        Transform::Identity => 1.0,
        other => other.apply(x),
    }
}

fn clearance_rate(kind: &ClearanceKind, x: f64, activity: &ActivityMap) -> f64 {
    match *kind {
        ClearanceKind::Linear { rate } => rate * x,
        ClearanceKind::Saturable { vmax, km } => mathkernel::michaelis_menten(x, vmax, km),
        ClearanceKind::EnzymeDependent { rate, enzyme } => rate * activity.enzyme(enzyme) * x,
        ClearanceKind::TransporterDependent { rate, transporter } => rate * activity.transporter(transporter) * x,
    }
}

fn production_sum(terms: &[ProductionTerm], state: &SimulationState, ctx: &EvalContext) -> f64 {
    terms
        .iter()
        .map(|term| term.transform.apply(resolve_source(term.source, state, ctx)) * term.coefficient)
        .sum()
}

fn clearance_sum(terms: &[ClearanceTerm], x: f64, activity: &ActivityMap) -> f64 {
    terms
        .iter()
        .map(|term| clearance_rate(&term.kind, x, activity) * clearance_multiplier(&term.transform, x))
        .sum()
}

fn coupling_sum(
    terms: &[CouplingTerm],
    state: &SimulationState,
    ctx: &EvalContext,
    history: &History,
) -> f64 {
    terms
        .iter()
        .map(|term| {
            let value = if term.delay_minutes > 0.0 {
                resolve_delayed(term.source, ctx.minute_of_sim - term.delay_minutes, history, state, ctx)
            } else {
                resolve_source(term.source, state, ctx)
            };
            match term.effect {
                CouplingEffect::Stimulate => term.strength * value,
                CouplingEffect::Inhibit => -term.strength * value,
            }
        })
        .sum()
}

/// Everything the derivative needs beyond the registry and the live state,
/// bundled so `derivative`'s argument list stays manageable.
pub struct DerivativeInputs<'a> {
    pub registry: &'a Registry,
    pub ctx: &'a EvalContext,
    pub profile: &'a ComposedProfile,
    pub activity: &'a ActivityMap,
    pub forcing: &'a DirectForcing,
    pub history: &'a History,
}

fn relaxation_term(setpoint: f64, x: f64, tau_minutes: f64) -> f64 {
    (setpoint - x) / tau_minutes
}

fn signal_derivative(def: &SignalDefinition, state: &SimulationState, inputs: &DerivativeInputs) -> f64 {
    let x = state.signal(def.id);
    let raw_setpoint = def.setpoint.evaluate(inputs.ctx);
    let setpoint = inputs.profile.adjust_setpoint(def.id, raw_setpoint);
    relaxation_term(setpoint, x, def.tau_minutes)
        + production_sum(&def.production, state, inputs.ctx)
        - clearance_sum(&def.clearance, x, inputs.activity)
        + coupling_sum(&def.couplings, state, inputs.ctx, inputs.history)
        + inputs.forcing.signal(def.id)
}

fn auxiliary_derivative(id: AuxId, def: &AuxiliaryDefinition, state: &SimulationState, inputs: &DerivativeInputs) -> f64 {
    let x = state.auxiliary(id);
    let setpoint = def.setpoint.evaluate(inputs.ctx);
    relaxation_term(setpoint, x, def.tau_minutes)
        + production_sum(&def.production, state, inputs.ctx)
        - clearance_sum(&def.clearance, x, inputs.activity)
        + coupling_sum(&def.couplings, state, inputs.ctx, inputs.history)
        + inputs.forcing.auxiliary(id)
}

fn accumulator_derivative(id: AccumulatorId, def: &AuxiliaryDefinition, state: &SimulationState, inputs: &DerivativeInputs) -> f64 {
    let x = state.accumulator(id);
    let setpoint = def.setpoint.evaluate(inputs.ctx);
    relaxation_term(setpoint, x, def.tau_minutes)
        + production_sum(&def.production, state, inputs.ctx)
        - clearance_sum(&def.clearance, x, inputs.activity)
        + coupling_sum(&def.couplings, state, inputs.ctx, inputs.history)
        + inputs.forcing.accumulator(id)
}

/// The pure physiological derivative: signals, auxiliaries, and
/// accumulators. `.pk` is left empty — the integrator sums this with a
/// separately computed PK derivative before handing the whole to
/// `mathkernel::rk4_step`.
pub fn derivative(state: &SimulationState, inputs: &DerivativeInputs) -> SimulationState {
    let mut out = SimulationState::zeroed(Default::default());

    for def in &inputs.registry.signals {
        out.set_signal(def.id, signal_derivative(def, state, inputs));
    }
    for (i, def) in inputs.registry.auxiliary.iter().enumerate() {
        let id = AuxId::ALL[i];
        out.set_auxiliary(id, auxiliary_derivative(id, def, state, inputs));
    }
    for (i, def) in inputs.registry.accumulators.iter().enumerate() {
        let id = AccumulatorId::ALL[i];
        out.set_accumulator(id, accumulator_derivative(id, def, state, inputs));
    }

    out
}
