//! Subject demographics and enabled clinical conditions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

/// Catalog of clinical conditions the profile composer (`profiles` crate)
/// knows how to apply. Kept here, alongside `Subject`, because a condition
/// is part of the subject's declared state — the modifiers it applies are
/// the profile composer's concern, not the subject's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionKey {
    Adhd,
    Hypothyroidism,
    Pcos,
    InsulinResistance,
    GeneralizedAnxiety,
    Menopause,
    ShiftWorkMisalignment,
    /// CYP2D6 poor-metabolizer phenotype (CPIC activity score 0): reduced
    /// hepatic clearance of CYP2D6 substrates. Severity is not a dose-response
    /// knob here (phenotype is binary in life); severity >0 simply enables it.
    Cyp2d6PoorMetabolizer,
}

/// One enabled condition with its severity in `[0, 1]` and any
/// condition-specific sub-parameters (e.g. a custom EC50 override).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnabledCondition {
    pub key: ConditionKey,
    pub severity: f64,
    #[serde(default)]
    pub params: HashMap<String, f64>,
}

impl EnabledCondition {
    pub fn new(key: ConditionKey, severity: f64) -> Self {
        Self {
            key,
            severity: severity.clamp(0.0, 1.0),
            params: HashMap::new(),
        }
    }
}

/// Demographics and enabled conditions for one simulated subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub sex: Sex,
    pub age_years: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
    /// Menstrual cycle length in days; `None` (and `cycle_day: None`) for
    /// subjects without a cycle (including all male subjects).
    pub cycle_length_days: Option<f64>,
    pub cycle_day: Option<f64>,
    #[serde(default)]
    pub conditions: Vec<EnabledCondition>,
}

impl Subject {
    pub fn new(sex: Sex, age_years: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            sex,
            age_years,
            weight_kg,
            height_cm,
            cycle_length_days: None,
            cycle_day: None,
            conditions: Vec::new(),
        }
    }

    pub fn with_cycle(mut self, cycle_day: f64, cycle_length_days: f64) -> Self {
        self.cycle_day = Some(cycle_day);
        self.cycle_length_days = Some(cycle_length_days);
        self
    }

    pub fn with_condition(mut self, condition: EnabledCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn condition_severity(&self, key: ConditionKey) -> f64 {
        self.conditions
            .iter()
            .find(|c| c.key == key)
            .map(|c| c.severity)
            .unwrap_or(0.0)
    }
}
