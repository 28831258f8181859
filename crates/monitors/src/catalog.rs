//! Concrete monitor catalog: circadian landmarks (cortisol awakening
//! response, melatonin onset), metabolic and cardiovascular thresholds, and
//! the drug/sleep-debt patterns the intervention catalog's scenarios need.

use crate::definition::{CrossDirection, MonitorDefinition, MonitorTarget, PatternKind};
use crate::result::Outcome;
use registry::{AccumulatorId, AuxId, SignalId};

pub fn all() -> Vec<MonitorDefinition> {
    vec![
        cortisol_awakening_response(),
        melatonin_onset(),
        hyperglycemia(),
        hypoglycemia(),
        tachycardia(),
        severe_tachycardia(),
        bradycardia(),
        adenosine_pressure_relief(),
        ethanol_intoxication(),
        elevated_sleep_debt(),
    ]
}

/// CAR: "the sharp rise in cortisol within ~30-60 min of waking" (GLOSSARY).
fn cortisol_awakening_response() -> MonitorDefinition {
    MonitorDefinition {
        id: "cortisol_awakening_response",
        target: MonitorTarget::Signal(SignalId::Cortisol),
        pattern: PatternKind::ThresholdCrossing { threshold: 15.0, direction: CrossDirection::Rising },
        outcome: Outcome::Win,
        message: "cortisol awakening response detected",
    }
}

fn melatonin_onset() -> MonitorDefinition {
    MonitorDefinition {
        id: "melatonin_onset",
        target: MonitorTarget::Signal(SignalId::Melatonin),
        pattern: PatternKind::ThresholdCrossing { threshold: 10.0, direction: CrossDirection::Rising },
        outcome: Outcome::Win,
        message: "nocturnal melatonin onset detected",
    }
}

/// Sustained hyperglycemia: glucose at or above 140 mg/dL for 30+ minutes.
fn hyperglycemia() -> MonitorDefinition {
    MonitorDefinition {
        id: "hyperglycemia",
        target: MonitorTarget::Signal(SignalId::Glucose),
        pattern: PatternKind::RangeResidence { min: Some(140.0), max: None, inside: true, min_duration_minutes: 30.0 },
        outcome: Outcome::Warning,
        message: "sustained hyperglycemia (glucose >= 140 mg/dL for 30+ min)",
    }
}

fn hypoglycemia() -> MonitorDefinition {
    MonitorDefinition {
        id: "hypoglycemia",
        target: MonitorTarget::Signal(SignalId::Glucose),
        pattern: PatternKind::ThresholdCrossing { threshold: 70.0, direction: CrossDirection::Falling },
        outcome: Outcome::Critical,
        message: "glucose fell below the hypoglycemic threshold (70 mg/dL)",
    }
}

fn tachycardia() -> MonitorDefinition {
    MonitorDefinition {
        id: "tachycardia",
        target: MonitorTarget::Signal(SignalId::HeartRate),
        pattern: PatternKind::RangeResidence { min: Some(100.0), max: None, inside: true, min_duration_minutes: 10.0 },
        outcome: Outcome::Warning,
        message: "sustained tachycardia (heart rate >= 100 bpm for 10+ min)",
    }
}

fn severe_tachycardia() -> MonitorDefinition {
    MonitorDefinition {
        id: "severe_tachycardia",
        target: MonitorTarget::Signal(SignalId::HeartRate),
        pattern: PatternKind::ThresholdCrossing { threshold: 130.0, direction: CrossDirection::Rising },
        outcome: Outcome::Critical,
        message: "heart rate crossed into the severe tachycardia range (>= 130 bpm)",
    }
}

fn bradycardia() -> MonitorDefinition {
    MonitorDefinition {
        id: "bradycardia",
        target: MonitorTarget::Signal(SignalId::HeartRate),
        pattern: PatternKind::ThresholdCrossing { threshold: 50.0, direction: CrossDirection::Falling },
        outcome: Outcome::Warning,
        message: "heart rate fell below the bradycardic threshold (50 bpm)",
    }
}

/// Adenosine pressure falling as a competitive antagonist (caffeine) clears
/// the A2a receptor.
fn adenosine_pressure_relief() -> MonitorDefinition {
    MonitorDefinition {
        id: "adenosine_pressure_relief",
        target: MonitorTarget::Auxiliary(AuxId::AdenosinePressure),
        pattern: PatternKind::ThresholdCrossing { threshold: 0.4, direction: CrossDirection::Falling },
        outcome: Outcome::Win,
        message: "adenosine pressure relieved below 0.4",
    }
}

fn ethanol_intoxication() -> MonitorDefinition {
    MonitorDefinition {
        id: "ethanol_intoxication",
        target: MonitorTarget::Signal(SignalId::Ethanol),
        pattern: PatternKind::ThresholdCrossing { threshold: 0.3, direction: CrossDirection::Rising },
        outcome: Outcome::Warning,
        message: "ethanol concentration crossed the intoxication threshold",
    }
}

/// `SleepDebt` accumulates in hours and clamps at 24 (`registry::catalog::accumulators`);
/// 8 hours sustained for an hour marks a meaningfully sleep-deprived subject.
fn elevated_sleep_debt() -> MonitorDefinition {
    MonitorDefinition {
        id: "elevated_sleep_debt",
        target: MonitorTarget::Accumulator(AccumulatorId::SleepDebt),
        pattern: PatternKind::RangeResidence { min: Some(8.0), max: None, inside: true, min_duration_minutes: 60.0 },
        outcome: Outcome::Warning,
        message: "sleep debt accumulated above 8 hours for an hour or more",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let defs = all();
        let mut ids: Vec<&str> = defs.iter().map(|d| d.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), defs.len());
    }
}
