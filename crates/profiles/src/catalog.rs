//! The concrete clinical profile catalog: ADHD, hypothyroidism, PCOS,
//! insulin resistance/T2DM, generalized anxiety, menopause, shift-work
//! circadian misalignment — each chosen to exercise a distinct modifier
//! class — plus a CYP2D6 poor-metabolizer phenotype.

use crate::modifiers::{EnzymeModifier, ProfileDefinition, ReceptorModifier, SignalModifier, TransporterModifier, EMPTY};
use physiology::ConditionKey;
use registry::{EnzymeId, ReceptorId, SignalId, TransporterId};

const ADHD: ProfileDefinition = ProfileDefinition {
    // Elevated dopamine/norepinephrine transporter activity (faster
    // reuptake) is the core ADHD dopaminergic hypothesis driving the
    // stimulant-response scenarios.
    transporter_modifiers: &[
        TransporterModifier { transporter: TransporterId::DopamineTransporter, activity_delta: 0.6, param_key: None },
        TransporterModifier { transporter: TransporterId::NorepinephrineTransporter, activity_delta: 0.3, param_key: None },
    ],
    receptor_modifiers: &[
        ReceptorModifier { receptor: ReceptorId::DopamineD2, density_delta: -0.2, sensitivity_delta: -0.1, param_key: None },
    ],
    ..EMPTY
};

const HYPOTHYROIDISM: ProfileDefinition = ProfileDefinition {
    signal_modifiers: &[
        SignalModifier { signal: SignalId::Tsh, setpoint_pct_delta: 0.8 },
        SignalModifier { signal: SignalId::T3, setpoint_pct_delta: -0.4 },
        SignalModifier { signal: SignalId::T4, setpoint_pct_delta: -0.4 },
    ],
    // Hypothyroidism is a known CYP3A4 activity suppressor (slower hepatic
    // clearance broadly).
    enzyme_modifiers: &[
        EnzymeModifier { enzyme: EnzymeId::Cyp3a4, activity_delta: -0.3, param_key: None },
    ],
    ..EMPTY
};

const PCOS: ProfileDefinition = ProfileDefinition {
    receptor_modifiers: &[
        ReceptorModifier { receptor: ReceptorId::InsulinReceptor, density_delta: 0.0, sensitivity_delta: -0.4, param_key: None },
    ],
    transporter_modifiers: &[
        TransporterModifier { transporter: TransporterId::Glut4, activity_delta: -0.3, param_key: None },
    ],
    signal_modifiers: &[
        SignalModifier { signal: SignalId::Testosterone, setpoint_pct_delta: 0.3 },
        SignalModifier { signal: SignalId::Lh, setpoint_pct_delta: 0.2 },
    ],
    ..EMPTY
};

const INSULIN_RESISTANCE: ProfileDefinition = ProfileDefinition {
    receptor_modifiers: &[
        ReceptorModifier { receptor: ReceptorId::InsulinReceptor, density_delta: 0.0, sensitivity_delta: -0.5, param_key: None },
    ],
    transporter_modifiers: &[
        TransporterModifier { transporter: TransporterId::Glut4, activity_delta: -0.4, param_key: None },
    ],
    signal_modifiers: &[
        SignalModifier { signal: SignalId::Insulin, setpoint_pct_delta: 0.5 },
        SignalModifier { signal: SignalId::Glucose, setpoint_pct_delta: 0.15 },
    ],
    ..EMPTY
};

const GENERALIZED_ANXIETY: ProfileDefinition = ProfileDefinition {
    receptor_modifiers: &[
        ReceptorModifier { receptor: ReceptorId::GabaA, density_delta: -0.3, sensitivity_delta: -0.2, param_key: None },
    ],
    signal_modifiers: &[
        SignalModifier { signal: SignalId::Cortisol, setpoint_pct_delta: 0.15 },
        SignalModifier { signal: SignalId::Norepinephrine, setpoint_pct_delta: 0.2 },
    ],
    ..EMPTY
};

const MENOPAUSE: ProfileDefinition = ProfileDefinition {
    signal_modifiers: &[
        SignalModifier { signal: SignalId::Estrogen, setpoint_pct_delta: -0.6 },
        SignalModifier { signal: SignalId::Progesterone, setpoint_pct_delta: -0.7 },
        SignalModifier { signal: SignalId::Fsh, setpoint_pct_delta: 1.0 },
        SignalModifier { signal: SignalId::CoreTemperature, setpoint_pct_delta: 0.01 },
    ],
    ..EMPTY
};

const SHIFT_WORK_MISALIGNMENT: ProfileDefinition = ProfileDefinition {
    // 12-hour misalignment at full severity: a worker whose wake/sleep is
    // inverted relative to the circadian signal catalog's hour-of-day
    // parameters.
    circadian_phase_shift_minutes: 720.0,
    signal_modifiers: &[
        SignalModifier { signal: SignalId::CoreTemperature, setpoint_pct_delta: 0.005 },
    ],
    ..EMPTY
};

const CYP2D6_POOR_METABOLIZER: ProfileDefinition = ProfileDefinition {
    // A CYP2D6 poor-metabolizer phenotype carries ~0.0 residual enzyme
    // activity; expressed here as the additive delta that drives CYP2D6
    // activity from the 1.0 baseline to that floor at severity 1
    // (baseline + severity * delta = multiplier).
    enzyme_modifiers: &[
        EnzymeModifier { enzyme: EnzymeId::Cyp2d6, activity_delta: -1.0, param_key: None },
    ],
    ..EMPTY
};

/// Look up the static modifier set for a condition key. Severity scaling
/// and composition into an [`crate::compose::ComposedProfile`] happens in
/// `compose.rs`.
pub fn definition(key: ConditionKey) -> ProfileDefinition {
    match key {
        ConditionKey::Adhd => ADHD,
        ConditionKey::Hypothyroidism => HYPOTHYROIDISM,
        ConditionKey::Pcos => PCOS,
        ConditionKey::InsulinResistance => INSULIN_RESISTANCE,
        ConditionKey::GeneralizedAnxiety => GENERALIZED_ANXIETY,
        ConditionKey::Menopause => MENOPAUSE,
        ConditionKey::ShiftWorkMisalignment => SHIFT_WORK_MISALIGNMENT,
        ConditionKey::Cyp2d6PoorMetabolizer => CYP2D6_POOR_METABOLIZER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_condition_key_has_a_definition() {
        for key in [
            ConditionKey::Adhd,
            ConditionKey::Hypothyroidism,
            ConditionKey::Pcos,
            ConditionKey::InsulinResistance,
            ConditionKey::GeneralizedAnxiety,
            ConditionKey::Menopause,
            ConditionKey::ShiftWorkMisalignment,
            ConditionKey::Cyp2d6PoorMetabolizer,
        ] {
            let _ = definition(key);
        }
    }

    #[test]
    fn cyp2d6_poor_metabolizer_zeroes_activity_at_full_severity() {
        let def = definition(ConditionKey::Cyp2d6PoorMetabolizer);
        assert_eq!(def.enzyme_modifiers.len(), 1);
        assert_eq!(1.0 + def.enzyme_modifiers[0].activity_delta, 0.0);
    }
}
