//! PK compartment primitives: per-intervention absorption, distribution and
//! elimination, integrated alongside the physiological ODE by the same RK4
//! stepper (`mathkernel::rk4`).
//!
//! Three kinetics shapes (one-compartment, two-compartment, Michaelis-Menten)
//! expressed as the dense, fixed-size `[f64; N]` state this core's `rk4`
//! generic wants.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// How an item's dose enters its absorption (or plasma, for IV) compartment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum DeliveryMode {
    /// Deposits `dose` into the absorption compartment on the item's first
    /// active step; `endMinute` is cosmetic.
    Bolus { dose: f64 },
    /// Adds `dose / duration_minutes` every minute for the item's span.
    Infusion { dose: f64, duration_minutes: f64 },
    /// Adds `intensity` every minute for the item's span; no fixed total.
    Continuous { intensity: f64 },
}

impl DeliveryMode {
    /// Input rate at minute `minute_in_item` (0 at item start). Bolus input
    /// is handled separately as a discrete deposit, not a rate, so it
    /// returns 0 here.
    pub fn input_rate(&self, _minute_in_item: f64) -> f64 {
        match *self {
            DeliveryMode::Bolus { .. } => 0.0,
            DeliveryMode::Infusion { dose, duration_minutes } => {
                if duration_minutes > 0.0 {
                    dose / duration_minutes
                } else {
                    0.0
                }
            }
            DeliveryMode::Continuous { intensity } => intensity,
        }
    }
}

/// Which ODE shape a kinetics record evaluates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum KineticsKind {
    /// `dA/dt = -ka*A + input`, `dC/dt = ka*A/V - ke*C`.
    OneCompartment { ka: f64, ke: f64, volume_l: f64 },
    /// One-compartment plus a peripheral exchange compartment.
    TwoCompartment { ka: f64, ke: f64, volume_l: f64, k12: f64, k21: f64 },
    /// `dC/dt = -Vmax*C/(Km+C) + input` (no absorption compartment; input
    /// enters the plasma compartment directly). Used for ethanol.
    MichaelisMenten { vmax: f64, km: f64 },
}

impl KineticsKind {
    /// Number of scalar compartments this kinetics shape needs.
    pub fn compartment_count(&self) -> usize {
        match self {
            KineticsKind::OneCompartment { .. } => 2,
            KineticsKind::TwoCompartment { .. } => 3,
            KineticsKind::MichaelisMenten { .. } => 1,
        }
    }
}

/// Resolved PK record for one compiled intervention primitive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PkPrimitive {
    pub kinetics: KineticsKind,
    pub delivery: DeliveryMode,
    pub bioavailability: f64,
}

/// The dense compartment-amount state for one [`PkPrimitive`], wrapped so it
/// composes with `mathkernel::rk4_step` the same way `registry::SimulationState`
/// does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PkState<const N: usize> {
    pub amounts: [f64; N],
}

impl<const N: usize> PkState<N> {
    pub fn zeroed() -> Self {
        Self { amounts: [0.0; N] }
    }

    /// Plasma/effect-site concentration compartment — always index 0 for
    /// `MichaelisMenten`, index 1 (post-absorption) otherwise.
    pub fn plasma_concentration(&self, kinetics: &KineticsKind) -> f64 {
        match kinetics {
            KineticsKind::MichaelisMenten { .. } => self.amounts[0],
            _ => self.amounts[1],
        }
    }
}

impl<const N: usize> Add for PkState<N> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let mut amounts = self.amounts;
        for i in 0..N {
            amounts[i] += rhs.amounts[i];
        }
        Self { amounts }
    }
}

impl<const N: usize> Mul<f64> for PkState<N> {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        let mut amounts = self.amounts;
        for v in amounts.iter_mut() {
            *v *= rhs;
        }
        Self { amounts }
    }
}

/// Evaluate `d(amounts)/dt` for one primitive at `minute_in_item`, given
/// whether this is the item's very first active step (for bolus deposit).
///
/// Bolus deposits are not representable as a continuous rate; the caller
/// (the integrator) adds `dose * bioavailability` directly to the absorption
/// compartment on the item's first step rather than through this function.
pub fn derivative<const N: usize>(
    primitive: &PkPrimitive,
    state: &PkState<N>,
    minute_in_item: f64,
) -> PkState<N> {
    let input = primitive.delivery.input_rate(minute_in_item) * primitive.bioavailability;
    let mut d = [0.0; N];
    match primitive.kinetics {
        KineticsKind::OneCompartment { ka, ke, volume_l } => {
            let a = state.amounts[0];
            let c = state.amounts[1];
            d[0] = -ka * a + input;
            d[1] = (ka * a) / volume_l - ke * c;
        }
        KineticsKind::TwoCompartment { ka, ke, volume_l, k12, k21 } => {
            let a = state.amounts[0];
            let c = state.amounts[1];
            let cp = state.amounts[2];
            d[0] = -ka * a + input;
            d[1] = (ka * a) / volume_l - ke * c - k12 * c + k21 * cp;
            d[2] = k12 * c - k21 * cp;
        }
        KineticsKind::MichaelisMenten { vmax, km } => {
            let c = state.amounts[0];
            d[0] = -vmax * c / (km + c) + input;
        }
    }
    PkState { amounts: d }
}

/// Slice-based twin of [`derivative`] for callers that don't know a
/// primitive's compartment count at compile time (the integrator stores PK
/// amounts as a dynamically sized `Vec<f64>` per timeline item, since
/// different items use different [`KineticsKind`] shapes within one run).
/// Same right-hand side, just indexed through a slice instead of `[f64; N]`.
pub fn derivative_vec(primitive: &PkPrimitive, amounts: &[f64], minute_in_item: f64) -> Vec<f64> {
    let input = primitive.delivery.input_rate(minute_in_item) * primitive.bioavailability;
    match primitive.kinetics {
        KineticsKind::OneCompartment { ka, ke, volume_l } => {
            let a = amounts[0];
            let c = amounts[1];
            vec![-ka * a + input, (ka * a) / volume_l - ke * c]
        }
        KineticsKind::TwoCompartment { ka, ke, volume_l, k12, k21 } => {
            let a = amounts[0];
            let c = amounts[1];
            let cp = amounts[2];
            vec![-ka * a + input, (ka * a) / volume_l - ke * c - k12 * c + k21 * cp, k12 * c - k21 * cp]
        }
        KineticsKind::MichaelisMenten { vmax, km } => {
            let c = amounts[0];
            vec![-vmax * c / (km + c) + input]
        }
    }
}

/// Plasma/effect-site concentration index within a [`PkAmounts`] slice for
/// the given kinetics shape — the slice twin of [`PkState::plasma_concentration`].
pub fn plasma_concentration_vec(kinetics: &KineticsKind, amounts: &[f64]) -> f64 {
    match kinetics {
        KineticsKind::MichaelisMenten { .. } => amounts[0],
        _ => amounts[1],
    }
}

/// Number of PK microsteps for one grid step of length `dt_minutes`, chosen
/// so `ke * (dt/N) < 0.2` — the stiff-regime subdivision named for
/// Michaelis-Menten elimination at high concentration.
pub fn microstep_count(ke_or_vmax_over_km: f64, dt_minutes: f64) -> usize {
    let raw = (ke_or_vmax_over_km * dt_minutes / 0.2).ceil();
    raw.max(1.0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn bolus_input_rate_is_zero() {
        let mode = DeliveryMode::Bolus { dose: 200.0 };
        assert_eq!(mode.input_rate(0.0), 0.0);
    }

    #[test]
    fn infusion_rate_is_dose_over_duration() {
        let mode = DeliveryMode::Infusion { dose: 60.0, duration_minutes: 60.0 };
        assert_relative_eq!(mode.input_rate(10.0), 1.0);
    }

    #[test]
    fn one_compartment_derivative_conserves_mass_with_no_elimination() {
        let primitive = PkPrimitive {
            kinetics: KineticsKind::OneCompartment { ka: 0.05, ke: 0.0, volume_l: 30.0 },
            delivery: DeliveryMode::Bolus { dose: 200.0 },
            bioavailability: 1.0,
        };
        let mut state: PkState<2> = PkState::zeroed();
        state.amounts[0] = 200.0;
        let d = derivative(&primitive, &state, 0.0);
        // Mass only moves between compartments; elimination is zero, so the
        // sum of d(amount)/dt across the absorption amount and V*dC/dt is ~0.
        let absorbed_rate = -d.amounts[0];
        let plasma_mass_rate = d.amounts[1] * 30.0;
        assert_relative_eq!(absorbed_rate, plasma_mass_rate, epsilon = 1e-9);
    }

    #[test]
    fn derivative_vec_matches_fixed_size_derivative() {
        let primitive = PkPrimitive {
            kinetics: KineticsKind::TwoCompartment { ka: 0.1, ke: 0.05, volume_l: 40.0, k12: 0.02, k21: 0.01 },
            delivery: DeliveryMode::Continuous { intensity: 3.0 },
            bioavailability: 0.9,
        };
        let mut state: PkState<3> = PkState::zeroed();
        state.amounts = [50.0, 10.0, 2.0];
        let fixed = derivative(&primitive, &state, 5.0);
        let vec = derivative_vec(&primitive, &state.amounts, 5.0);
        for i in 0..3 {
            assert_relative_eq!(fixed.amounts[i], vec[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn microstep_count_grows_with_rate() {
        assert_eq!(microstep_count(0.1, 5.0), 1);
        assert!(microstep_count(2.0, 5.0) > 1);
    }
}
