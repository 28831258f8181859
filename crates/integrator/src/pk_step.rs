//! PK-only sub-integration: advances every compiled intervention's
//! compartment amounts across one macro grid step, independently of the
//! signal/auxiliary/accumulator state, at its own (possibly finer)
//! resolution — §4.12's "subdividing a single grid step into N microsteps
//! for the PK sub-system only."
//!
//! A primitive's PK derivative (`pharmacology::derivative_vec`) depends only
//! on its own compartment amounts and the evaluation minute (through the
//! delivery rate), never on any signal or auxiliary value, so each
//! primitive's compartments can be RK4-advanced on their own without folding
//! them into the same stepped state as the physiological ODE.

use crate::pk_active::effective_primitive;
use interventions::CompiledTimeline;
use pharmacology::{derivative_vec, plasma_concentration_vec};
use std::collections::BTreeMap;

/// Per-primitive plasma concentration at the three instants the macro RK4
/// step's stages land on: `t`, `t + dt/2` (shared by the two midpoint
/// stages), and `t + dt`.
pub struct StageConcentrations {
    pub start: BTreeMap<u64, f64>,
    pub mid: BTreeMap<u64, f64>,
    pub end: BTreeMap<u64, f64>,
}

impl StageConcentrations {
    pub fn at(&self, t: f64, dt: f64, tau: f64) -> &BTreeMap<u64, f64> {
        let eps = dt * 1e-9;
        if tau <= t + eps {
            &self.start
        } else if tau >= t + dt - eps {
            &self.end
        } else {
            &self.mid
        }
    }
}

/// One fixed-step RK4 advance of a PK primitive's own `Vec<f64>` compartment
/// amounts — the slice-based twin of `mathkernel::rk4_step`, since `Vec<f64>`
/// doesn't implement `Add`/`Mul` and each primitive's compartment count
/// varies at runtime.
fn rk4_step_vec(amounts: &[f64], t: f64, dt: f64, f: impl Fn(&[f64], f64) -> Vec<f64>) -> Vec<f64> {
    let combine = |base: &[f64], k: &[f64], scale: f64| -> Vec<f64> {
        base.iter().zip(k).map(|(b, k)| b + k * scale).collect()
    };

    let k1 = f(amounts, t);
    let x2 = combine(amounts, &k1, dt / 2.0);
    let k2 = f(&x2, t + dt / 2.0);
    let x3 = combine(amounts, &k2, dt / 2.0);
    let k3 = f(&x3, t + dt / 2.0);
    let x4 = combine(amounts, &k3, dt);
    let k4 = f(&x4, t + dt);

    (0..amounts.len())
        .map(|i| amounts[i] + dt / 6.0 * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]))
        .collect()
}

/// Advance every compiled intervention's compartment amounts from `t` to
/// `t + dt` using `microsteps` RK4 substeps (rounded up to an even number so
/// the midpoint concentration needed by the macro step's k2/k3 stages falls
/// exactly on a substep boundary), returning the amounts at `t + dt` plus
/// the concentration samples the physiological macro step needs at its own
/// three distinct evaluation instants.
pub fn integrate_pk_substeps(
    compiled: &CompiledTimeline,
    pk: &BTreeMap<u64, Vec<f64>>,
    t: f64,
    dt: f64,
    microsteps: usize,
) -> (BTreeMap<u64, Vec<f64>>, StageConcentrations) {
    let n = microsteps.max(1);
    let n = if n % 2 == 0 { n.max(2) } else { n + 1 };
    let sub_dt = dt / n as f64;

    let mut pk_next = BTreeMap::new();
    let mut start = BTreeMap::new();
    let mut mid = BTreeMap::new();
    let mut end = BTreeMap::new();

    for iv in &compiled.interventions {
        let Some(initial) = pk.get(&iv.primitive_id) else { continue };
        let kinetics = &iv.primitive.pk.kinetics;
        start.insert(iv.primitive_id, plasma_concentration_vec(kinetics, initial));

        let mut amounts = initial.clone();
        let mut sub_t = t;
        for step in 0..n {
            amounts = rk4_step_vec(&amounts, sub_t, sub_dt, |a, tau| {
                let primitive = effective_primitive(iv, tau);
                let minute_in_item = (tau - iv.start_minute).max(0.0);
                derivative_vec(&primitive, a, minute_in_item)
            });
            sub_t += sub_dt;
            if step + 1 == n / 2 {
                mid.insert(iv.primitive_id, plasma_concentration_vec(kinetics, &amounts));
            }
        }
        end.insert(iv.primitive_id, plasma_concentration_vec(kinetics, &amounts));
        pk_next.insert(iv.primitive_id, amounts);
    }

    (pk_next, StageConcentrations { start, mid, end })
}

#[cfg(test)]
mod tests {
    use super::*;
    use interventions::compile_timeline;

    #[test]
    fn non_stiff_single_primitive_conserves_mass_with_no_elimination() {
        let timeline = vec![interventions::TimelineItem {
            id: 1,
            start_minute: 0.0,
            end_minute: 1e-6,
            key: "caffeine".into(),
            params: [("dose_mg".to_string(), 200.0)].into(),
            intensity: 1.0,
        }];
        let compiled = compile_timeline(&timeline).unwrap();
        let mut pk = BTreeMap::new();
        for iv in &compiled.interventions {
            pk.insert(iv.primitive_id, vec![200.0, 0.0]);
        }

        let (pk_next, stages) = integrate_pk_substeps(&compiled, &pk, 0.0, 5.0, 1);
        for amounts in pk_next.values() {
            assert!(amounts.iter().all(|v| v.is_finite()));
        }
        assert!(!stages.start.is_empty());
        assert!(!stages.mid.is_empty());
        assert!(!stages.end.is_empty());
    }

    #[test]
    fn stiff_ethanol_regime_stays_finite_under_many_substeps() {
        let timeline = vec![interventions::TimelineItem {
            id: 1,
            start_minute: 0.0,
            end_minute: 30.0,
            key: "ethanol".into(),
            params: [("dose_g".to_string(), 14.0)].into(),
            intensity: 1.0,
        }];
        let compiled = compile_timeline(&timeline).unwrap();
        let mut pk = BTreeMap::new();
        for iv in &compiled.interventions {
            pk.insert(iv.primitive_id, vec![0.0]);
        }

        let (pk_next, _stages) = integrate_pk_substeps(&compiled, &pk, 0.0, 5.0, 8);
        for amounts in pk_next.values() {
            assert!(amounts.iter().all(|v| v.is_finite()));
        }
    }
}
