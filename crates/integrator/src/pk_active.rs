//! Small helpers shared by [`crate::derivative`] and [`crate::run`] for
//! reading a compiled intervention's activity window and plasma
//! concentration against the live state.

use interventions::CompiledIntervention;
use pharmacology::{plasma_concentration_vec, DeliveryMode, KineticsKind, PkPrimitive};
use registry::SimulationState;
use std::borrow::Cow;

/// A timeline item's window is half-open: active for `start <= t < end`.
pub fn is_active(iv: &CompiledIntervention, minute: f64) -> bool {
    minute >= iv.start_minute && minute < iv.end_minute
}

pub fn concentration_of(iv: &CompiledIntervention, state: &SimulationState) -> f64 {
    match state.pk.get(&iv.primitive_id) {
        Some(amounts) => plasma_concentration_vec(&iv.primitive.pk.kinetics, amounts),
        None => 0.0,
    }
}

/// The per-minute rate constant the stiff-regime microstep count is derived
/// from: `ke` for the absorption/elimination kinetics shapes, `Vmax/Km` for
/// Michaelis-Menten (the ethanol case).
pub fn stiffness_rate(kinetics: &KineticsKind) -> f64 {
    match *kinetics {
        KineticsKind::OneCompartment { ke, .. } => ke,
        KineticsKind::TwoCompartment { ke, .. } => ke,
        KineticsKind::MichaelisMenten { vmax, km } => vmax / km.max(1e-9),
    }
}

/// The primitive a PK derivative should actually be evaluated against at
/// `t`: unchanged while the item is active, with its delivery rate forced
/// to zero outside the item's window so input stops while elimination
/// continues to run down whatever mass is already in the compartments.
/// Bolus delivery already contributes zero continuous rate by construction
/// (`DeliveryMode::input_rate`), so only infusion/continuous need this.
pub fn effective_primitive(iv: &CompiledIntervention, t: f64) -> Cow<'_, PkPrimitive> {
    if is_active(iv, t) {
        Cow::Borrowed(&iv.primitive.pk)
    } else {
        let mut p = iv.primitive.pk.clone();
        if !matches!(p.delivery, DeliveryMode::Bolus { .. }) {
            p.delivery = DeliveryMode::Continuous { intensity: 0.0 };
        }
        Cow::Owned(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_open_window_excludes_end_minute() {
        let iv = test_intervention(10.0, 20.0);
        assert!(!is_active(&iv, 9.99));
        assert!(is_active(&iv, 10.0));
        assert!(is_active(&iv, 19.99));
        assert!(!is_active(&iv, 20.0));
    }

    fn test_intervention(start: f64, end: f64) -> CompiledIntervention {
        use pharmacology::{DeliveryMode, KineticsKind, PkPrimitive};
        CompiledIntervention {
            primitive_id: 0,
            item_id: 0,
            start_minute: start,
            end_minute: end,
            primitive: interventions::PkPdPrimitive {
                pk: PkPrimitive {
                    kinetics: KineticsKind::OneCompartment { ka: 0.05, ke: 0.01, volume_l: 30.0 },
                    delivery: DeliveryMode::Bolus { dose: 100.0 },
                    bioavailability: 1.0,
                },
                pd: vec![],
            },
        }
    }
}
