//! A static graph from receptor key to `(signal, gainPerDensity)` pairs,
//! plus `RECEPTOR_SENSITIVITY_GAIN`, the scalar that folds a receptor's
//! `sensitivity_delta` into the same additive activity value as its
//! `density_delta` before the map is walked.

use registry::{ReceptorId, SignalId};

/// Scales every `sensitivity_delta` before it is added to a receptor's
/// activity alongside `density_delta` — a sensitivity change is modeled as
/// reaching only partial effect of an equivalent density change.
pub const RECEPTOR_SENSITIVITY_GAIN: f64 = 0.5;

/// `(signal, gain_per_density)`: the additive setpoint bias contributed to
/// `signal` per unit of a receptor's activity departure from the 1.0
/// baseline.
pub type SignalGain = (SignalId, f64);

pub fn signal_gains(receptor: ReceptorId) -> &'static [SignalGain] {
    match receptor {
        ReceptorId::GabaA => &[(SignalId::Cortisol, -40.0), (SignalId::Norepinephrine, -0.3)],
        ReceptorId::DopamineD2 => &[(SignalId::Dopamine, -3.0)],
        ReceptorId::SerotoninFiveHt2a => &[(SignalId::Serotonin, -20.0)],
        ReceptorId::AdenosineA2a => &[(SignalId::Dopamine, -2.0)],
        ReceptorId::AdrenergicBeta1 => &[(SignalId::HeartRate, 8.0)],
        ReceptorId::OpioidMu => &[(SignalId::HeartRate, -4.0)],
        ReceptorId::InsulinReceptor => &[(SignalId::Glucose, -15.0)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_receptor_has_a_signal_gain_entry() {
        for id in ReceptorId::ALL {
            assert!(!signal_gains(*id).is_empty());
        }
    }
}
