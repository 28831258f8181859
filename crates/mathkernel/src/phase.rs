//! Circular (phase) helpers for circadian and cyclic dynamics.
//!
//! Every wall-clock minute is mapped onto the unit circle so that functions
//! of time of day are continuous across midnight. All angles are radians.

use std::f64::consts::PI;

const TAU: f64 = 2.0 * PI;

/// Map a minute-of-day (or minute-of-sim) onto the unit circle, period 1440.
pub fn minute_to_phase(minute: f64) -> f64 {
    (minute / 1440.0) * TAU
}

/// Map an hour-of-day onto the unit circle, period 24.
pub fn hour_to_phase(hour: f64) -> f64 {
    (hour / 24.0) * TAU
}

/// Shortest signed angular distance from `a` to `b`, in (-PI, PI].
pub fn circular_distance(a: f64, b: f64) -> f64 {
    let mut d = (b - a) % TAU;
    if d > PI {
        d -= TAU;
    } else if d < -PI {
        d += TAU;
    }
    d
}

/// Von Mises bump on the circle, peak value 1 at `center_theta`.
///
/// `kappa` is the concentration parameter: larger values produce a narrower
/// peak. `kappa = 0` is flat (returns 1 everywhere).
pub fn gaussian_phase(theta: f64, center_theta: f64, kappa: f64) -> f64 {
    let d = circular_distance(center_theta, theta);
    (kappa * (d.cos() - 1.0)).exp()
}

/// A window on the circle: 1 strictly inside `[start_theta, end_theta]`,
/// falling to 0 outside, transitioning over `transition` radians at each
/// edge via a half-cosine ramp. Handles wrap-around (`end_theta < start_theta`).
pub fn window_phase(theta: f64, start_theta: f64, end_theta: f64, transition: f64) -> f64 {
    let span = if end_theta >= start_theta {
        end_theta - start_theta
    } else {
        (end_theta + TAU) - start_theta
    };
    if span <= 0.0 {
        return 0.0;
    }

    // Position of theta relative to start, wrapped into [0, TAU).
    let mut offset = (theta - start_theta) % TAU;
    if offset < 0.0 {
        offset += TAU;
    }

    if offset > span {
        return 0.0;
    }

    let ramp = transition.min(span / 2.0).max(0.0);
    if ramp <= 0.0 {
        return 1.0;
    }

    if offset < ramp {
        // Rising edge: half-cosine from 0 to 1.
        0.5 - 0.5 * (PI * offset / ramp).cos()
    } else if offset > span - ramp {
        // Falling edge: half-cosine from 1 to 0.
        let into_ramp = offset - (span - ramp);
        0.5 + 0.5 * (PI * into_ramp / ramp).cos()
    } else {
        1.0
    }
}

/// Logistic transition on the circle, centered at `center_theta`.
/// `steepness` plays the role of the logistic growth rate `k`, applied to
/// the signed circular distance.
pub fn sigmoid_phase(theta: f64, center_theta: f64, steepness: f64) -> f64 {
    let d = circular_distance(center_theta, theta);
    1.0 / (1.0 + (-steepness * d).exp())
}
