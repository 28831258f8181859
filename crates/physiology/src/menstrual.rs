//! Normalized menstrual cycle hormone curves.
//!
//! Returns values in `[0, 1]`; the signal registry scales these into
//! physiological units per-signal using sex- and phase-dependent min/max.

use mathkernel::gaussian_phase;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MenstrualHormones {
    pub estrogen: f64,
    pub progesterone: f64,
    pub lh: f64,
    pub fsh: f64,
}

fn day_to_phase(cycle_day: f64, cycle_length: f64) -> f64 {
    (cycle_day / cycle_length) * 2.0 * PI
}

/// Normalized hormone levels for a given day in a cycle of given length.
///
/// Ovulation is modeled at the cycle midpoint (day `cycle_length / 2`),
/// consistent with a canonical 28-day cycle placing ovulation around day 14.
pub fn get_menstrual_hormones(cycle_day: f64, cycle_length: f64) -> MenstrualHormones {
    let theta = day_to_phase(cycle_day, cycle_length);
    let ovulation = day_to_phase(cycle_length / 2.0, cycle_length);
    let mid_luteal = day_to_phase(cycle_length * 0.75, cycle_length);
    let late_follicular = day_to_phase(cycle_length * 0.42, cycle_length);

    let lh_surge = gaussian_phase(theta, ovulation, 40.0);
    let lh = 0.1 + 0.9 * lh_surge;

    let fsh_early_rise = gaussian_phase(theta, day_to_phase(cycle_length * 0.05, cycle_length), 3.0);
    let fsh_surge = gaussian_phase(theta, ovulation, 25.0);
    let fsh = (0.15 + 0.35 * fsh_early_rise + 0.5 * fsh_surge).min(1.0);

    let estrogen_follicular_peak = gaussian_phase(theta, late_follicular, 8.0);
    let estrogen_luteal_peak = gaussian_phase(theta, mid_luteal, 10.0);
    let estrogen = (0.1 + 0.9 * estrogen_follicular_peak + 0.4 * estrogen_luteal_peak).min(1.0);

    let progesterone_luteal = gaussian_phase(theta, mid_luteal, 6.0);
    let post_ovulation_gate = 1.0 - gaussian_phase(theta, day_to_phase(cycle_length * 0.2, cycle_length), 4.0);
    let progesterone = (0.05 + 0.95 * progesterone_luteal * post_ovulation_gate).clamp(0.0, 1.0);

    MenstrualHormones {
        estrogen,
        progesterone,
        lh,
        fsh,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progesterone_peaks_mid_luteal() {
        let luteal = get_menstrual_hormones(21.0, 28.0);
        let follicular = get_menstrual_hormones(7.0, 28.0);
        assert!(luteal.progesterone > follicular.progesterone);
    }

    #[test]
    fn lh_surges_near_ovulation() {
        let at_ovulation = get_menstrual_hormones(14.0, 28.0);
        let early = get_menstrual_hormones(3.0, 28.0);
        assert!(at_ovulation.lh > early.lh);
    }

    #[test]
    fn all_curves_stay_normalized() {
        for day in 0..28 {
            let h = get_menstrual_hormones(day as f64, 28.0);
            for v in [h.estrogen, h.progesterone, h.lh, h.fsh] {
                assert!((0.0..=1.0).contains(&v), "value {} out of range at day {}", v, day);
            }
        }
    }
}
