//! Fixed-step 4th-order Runge-Kutta integration.
//!
//! Generic over any state type that supports component-wise addition and
//! scalar multiplication — signals, auxiliaries, accumulators, and PK
//! compartment amounts are all folded into one such state by the caller, so
//! a single `rk4_step` advances the whole coupled system coherently.

use std::ops::{Add, Mul};

/// One fixed-step RK4 advance of `dx/dt = f(x, t)` from `t` to `t + dt`.
///
/// `f` must read only the state passed to it — never mutate through a
/// captured reference — so that the four stage evaluations are each taken
/// from a consistent snapshot, as required for RK4 to be 4th-order accurate.
pub fn rk4_step<S, F>(x: &S, t: f64, dt: f64, f: F) -> S
where
    S: Clone + Add<Output = S> + Mul<f64, Output = S>,
    F: Fn(&S, f64) -> S,
{
    let k1 = f(x, t);
    let x2 = x.clone() + k1.clone() * (dt / 2.0);
    let k2 = f(&x2, t + dt / 2.0);
    let x3 = x.clone() + k2.clone() * (dt / 2.0);
    let k3 = f(&x3, t + dt / 2.0);
    let x4 = x.clone() + k3.clone() * dt;
    let k4 = f(&x4, t + dt);

    let sum = k1 + k2 * 2.0 + k3 * 2.0 + k4;
    x.clone() + sum * (dt / 6.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Scalar(f64);

    impl Add for Scalar {
        type Output = Scalar;
        fn add(self, rhs: Scalar) -> Scalar {
            Scalar(self.0 + rhs.0)
        }
    }

    impl Mul<f64> for Scalar {
        type Output = Scalar;
        fn mul(self, rhs: f64) -> Scalar {
            Scalar(self.0 * rhs)
        }
    }

    #[test]
    fn matches_exponential_decay_to_fourth_order() {
        // dx/dt = -x, x(0) = 1 => x(t) = exp(-t)
        let mut x = Scalar(1.0);
        let dt = 0.1;
        let mut t = 0.0;
        for _ in 0..20 {
            x = rk4_step(&x, t, dt, |s, _t| Scalar(-s.0));
            t += dt;
        }
        assert_relative_eq!(x.0, (-t).exp(), epsilon = 1e-6);
    }

    #[test]
    fn stationary_point_stays_put() {
        let x = Scalar(0.0);
        let next = rk4_step(&x, 0.0, 1.0, |_s, _t| Scalar(0.0));
        assert_relative_eq!(next.0, 0.0);
    }
}
