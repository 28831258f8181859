//! Profile composition: walk a subject's enabled conditions once per
//! run, accumulate additive deltas into a baseline [`ActivityMap`], and
//! derive the setpoint biases the assembler folds into each signal's
//! `setpoint(ctx)` result.

use crate::catalog;
use crate::receptor_map::{signal_gains, RECEPTOR_SENSITIVITY_GAIN};
use pharmacology::ActivityMap;
use physiology::Subject;
use registry::SignalId;

/// Output of the profile composer: a baseline activity map plus two
/// independent setpoint bias vectors (additive, from receptor deltas;
/// percentage, from explicit `signalModifiers`), and a circadian phase
/// shift. Computed once per simulation run and held read-only thereafter.
#[derive(Debug, Clone)]
pub struct ComposedProfile {
    pub activity: ActivityMap,
    pub setpoint_additive_bias: [f64; SignalId::COUNT],
    pub setpoint_pct_bias: [f64; SignalId::COUNT],
    pub circadian_phase_shift_minutes: f64,
}

impl ComposedProfile {
    pub fn baseline() -> Self {
        Self {
            activity: ActivityMap::baseline(),
            setpoint_additive_bias: [0.0; SignalId::COUNT],
            setpoint_pct_bias: [0.0; SignalId::COUNT],
            circadian_phase_shift_minutes: 0.0,
        }
    }

    /// Apply this profile's bias to a raw `setpoint(ctx)` result for `id`.
    pub fn adjust_setpoint(&self, id: SignalId, raw_setpoint: f64) -> f64 {
        raw_setpoint * (1.0 + self.setpoint_pct_bias[id.index()]) + self.setpoint_additive_bias[id.index()]
    }
}

/// Compose every enabled condition on `subject` into one [`ComposedProfile`].
pub fn compose(subject: &Subject) -> ComposedProfile {
    let mut composed = ComposedProfile::baseline();

    for condition in &subject.conditions {
        if condition.severity <= 0.0 {
            continue;
        }
        let def = catalog::definition(condition.key);
        let severity = condition.severity;

        for m in def.receptor_modifiers {
            composed.activity.receptors[m.receptor.index()] +=
                severity * (m.density_delta + m.sensitivity_delta * RECEPTOR_SENSITIVITY_GAIN);
        }
        for m in def.transporter_modifiers {
            composed.activity.transporters[m.transporter.index()] += severity * m.activity_delta;
        }
        for m in def.enzyme_modifiers {
            composed.activity.enzymes[m.enzyme.index()] += severity * m.activity_delta;
        }
        for m in def.signal_modifiers {
            composed.setpoint_pct_bias[m.signal.index()] += severity * m.setpoint_pct_delta;
        }
        composed.circadian_phase_shift_minutes += severity * def.circadian_phase_shift_minutes;
    }

    // Receptor activity departures from baseline (1.0) resolve through
    // RECEPTOR_SIGNAL_MAP into additive setpoint biases on their mapped
    // signals.
    for id in registry::ReceptorId::ALL {
        let delta = composed.activity.receptors[id.index()] - 1.0;
        if delta == 0.0 {
            continue;
        }
        for (signal, gain_per_density) in signal_gains(*id) {
            composed.setpoint_additive_bias[signal.index()] += delta * gain_per_density;
        }
    }

    // Receptor/transporter/enzyme activities must stay strictly positive;
    // an inhibitor can drive the additive delta below -1.0 (e.g. the
    // CYP2D6 poor-metabolizer profile at severity 1.0 reaches exactly 0.0)
    // so floor rather than clamp away from zero.
    for v in composed.activity.receptors.iter_mut() {
        *v = v.max(0.0);
    }
    for v in composed.activity.transporters.iter_mut() {
        *v = v.max(0.0);
    }
    for v in composed.activity.enzymes.iter_mut() {
        *v = v.max(1e-6);
    }

    composed
}

#[cfg(test)]
mod tests {
    use super::*;
    use physiology::{ConditionKey, EnabledCondition, Sex};

    #[test]
    fn zero_severity_leaves_baseline_untouched() {
        let subject = Subject::new(Sex::Male, 30.0, 80.0, 178.0)
            .with_condition(EnabledCondition::new(ConditionKey::Adhd, 0.0));
        let composed = compose(&subject);
        assert_eq!(composed.activity.transporters, ActivityMap::baseline().transporters);
        assert!(composed.setpoint_additive_bias.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn adhd_increases_dopamine_transporter_activity_with_severity() {
        let subject = Subject::new(Sex::Male, 30.0, 80.0, 178.0)
            .with_condition(EnabledCondition::new(ConditionKey::Adhd, 0.8));
        let composed = compose(&subject);
        assert!(composed.activity.transporter(registry::TransporterId::DopamineTransporter) > 1.0);
    }

    #[test]
    fn cyp2d6_poor_metabolizer_floors_enzyme_activity_near_zero() {
        let subject = Subject::new(Sex::Male, 30.0, 80.0, 178.0)
            .with_condition(EnabledCondition::new(ConditionKey::Cyp2d6PoorMetabolizer, 1.0));
        let composed = compose(&subject);
        assert!(composed.activity.enzyme(registry::EnzymeId::Cyp2d6) < 1e-3);
    }

    #[test]
    fn generalized_anxiety_raises_cortisol_setpoint_bias() {
        let subject = Subject::new(Sex::Male, 30.0, 80.0, 178.0)
            .with_condition(EnabledCondition::new(ConditionKey::GeneralizedAnxiety, 1.0));
        let composed = compose(&subject);
        // GabaA density drops -> negative delta -> negative gain (-40) -> positive additive bias.
        assert!(composed.setpoint_additive_bias[SignalId::Cortisol.index()] > 0.0);
        assert!(composed.setpoint_pct_bias[SignalId::Cortisol.index()] > 0.0);
    }
}
