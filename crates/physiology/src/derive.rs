//! Pure derivation of `Physiology` from a `Subject`.

use crate::subject::{Sex, Subject};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PhysiologyError {
    #[error("cycle day/length set on a subject whose sex is not Female")]
    CycleOnNonFemaleSubject,
    #[error("cycle_day {0} is outside [0, cycle_length_days)")]
    CycleDayOutOfRange(f64),
    #[error("non-physiological demographic: {0}")]
    InvalidDemographic(String),
}

/// Derived, static-per-run physiological scalars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Physiology {
    pub total_body_water_l: f64,
    pub lean_body_mass_kg: f64,
    pub metabolic_capacity: f64,
    pub renal_clearance_scalar: f64,
    pub hepatic_clearance_scalar: f64,
    pub testosterone_baseline_ng_dl: f64,
}

/// Validate a subject's demographics against the core's constraints.
/// Surfaced as `ConfigError` by the caller before any integration work is
/// attempted.
pub fn validate_subject(subject: &Subject) -> Result<(), PhysiologyError> {
    if subject.age_years < 0.0 || subject.weight_kg <= 0.0 || subject.height_cm <= 0.0 {
        return Err(PhysiologyError::InvalidDemographic(
            "age, weight, and height must be positive".to_string(),
        ));
    }

    match (subject.sex, subject.cycle_day, subject.cycle_length_days) {
        (Sex::Male, None, None) => Ok(()),
        (Sex::Male, _, _) => Err(PhysiologyError::CycleOnNonFemaleSubject),
        (Sex::Female, Some(day), Some(len)) => {
            if day < 0.0 || day >= len {
                Err(PhysiologyError::CycleDayOutOfRange(day))
            } else {
                Ok(())
            }
        }
        (Sex::Female, None, None) => Ok(()),
        (Sex::Female, _, _) => Err(PhysiologyError::InvalidDemographic(
            "cycle_day and cycle_length_days must both be set or both be absent".to_string(),
        )),
    }
}

/// Derive volume-of-distribution-relevant scalars, clearance scalars, and
/// sex-hormone baselines from a subject's demographics.
pub fn derive_physiology(subject: &Subject) -> Result<Physiology, PhysiologyError> {
    validate_subject(subject)?;

    let total_body_water_l = subject.weight_kg * 0.6;

    // Boer (1984) lean body mass formula.
    let lean_body_mass_kg = match subject.sex {
        Sex::Male => 0.407 * subject.weight_kg + 0.267 * subject.height_cm - 19.2,
        Sex::Female => 0.252 * subject.weight_kg + 0.473 * subject.height_cm - 48.3,
    }
    .max(subject.weight_kg * 0.3);

    let years_past_40 = (subject.age_years - 40.0).max(0.0);
    let metabolic_capacity = (1.0 - years_past_40 * 0.005).clamp(0.5, 1.0);
    let renal_clearance_scalar = (1.0 - years_past_40 * 0.01).clamp(0.3, 1.0);

    let years_past_50 = (subject.age_years - 50.0).max(0.0);
    let hepatic_clearance_scalar = (1.0 - years_past_50 * 0.005).clamp(0.4, 1.0);

    let testosterone_baseline_ng_dl = match subject.sex {
        Sex::Male => {
            let years_past_30 = (subject.age_years - 30.0).max(0.0);
            let decline = (1.0 - years_past_30 * 0.01).max(0.5);
            600.0 * decline
        }
        Sex::Female => 35.0,
    };

    Ok(Physiology {
        total_body_water_l,
        lean_body_mass_kg,
        metabolic_capacity,
        renal_clearance_scalar,
        hepatic_clearance_scalar,
        testosterone_baseline_ng_dl,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subject::ConditionKey;

    fn male(age: f64) -> Subject {
        Subject::new(Sex::Male, age, 80.0, 178.0)
    }

    #[test]
    fn cycle_on_male_is_rejected() {
        let s = Subject {
            cycle_day: Some(10.0),
            cycle_length_days: Some(28.0),
            ..male(30.0)
        };
        assert_eq!(validate_subject(&s), Err(PhysiologyError::CycleOnNonFemaleSubject));
    }

    #[test]
    fn male_testosterone_declines_after_30_and_floors_at_half() {
        let young = derive_physiology(&male(30.0)).unwrap();
        let old = derive_physiology(&male(130.0)).unwrap();
        assert!(old.testosterone_baseline_ng_dl < young.testosterone_baseline_ng_dl);
        assert!(old.testosterone_baseline_ng_dl >= young.testosterone_baseline_ng_dl * 0.5 - 1e-6);
    }

    #[test]
    fn total_body_water_is_sixty_percent_of_weight() {
        let phys = derive_physiology(&male(30.0)).unwrap();
        assert!((phys.total_body_water_l - 48.0).abs() < 1e-9);
    }

    #[test]
    fn severity_defaults_to_zero_when_condition_absent() {
        let s = male(30.0);
        assert_eq!(s.condition_severity(ConditionKey::Adhd), 0.0);
    }
}
