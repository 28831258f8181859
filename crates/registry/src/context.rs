//! The read-only context passed to every setpoint, transform, and coupling
//! evaluation. Deliberately holds no reference to mutable simulation state:
//! "setpoints are pure functions of context; they never read other state."

use physiology::{Physiology, Sex};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CycleContext {
    pub cycle_day: f64,
    pub cycle_length_days: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EvalContext {
    pub minute_of_sim: f64,
    pub minute_of_day: f64,
    /// Equal to `minute_of_day` unless a forced oscillator is active
    /// (forced-oscillator phase shifting is deferred — the field exists so
    /// one can be wired in later without touching any setpoint).
    pub circadian_minute_of_day: f64,
    pub is_asleep: bool,
    pub sex: Sex,
    pub age_years: f64,
    pub cycle: Option<CycleContext>,
    pub physiology: Physiology,
}

impl EvalContext {
    pub fn minute_of_day_for_circadian(&self) -> f64 {
        self.circadian_minute_of_day
    }
}
