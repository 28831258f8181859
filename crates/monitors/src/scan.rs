//! `scan_all`: runs every catalog monitor against the series an
//! integration produced, collecting the hits and ordering them worst
//! severity first, ties broken by time.

use crate::definition::{MonitorDefinition, MonitorTarget, PatternKind};
use crate::patterns::{range_residence, slope_events, threshold_crossings, Hit};
use crate::result::MonitorResult;
use registry::{AccumulatorId, AuxId, SignalId};
use std::cmp::Reverse;
use std::collections::BTreeMap;

pub struct SeriesBundle<'a> {
    pub minutes: &'a [f64],
    pub signals: &'a BTreeMap<SignalId, Vec<f64>>,
    pub auxiliary: &'a BTreeMap<AuxId, Vec<f64>>,
    pub accumulators: &'a BTreeMap<AccumulatorId, Vec<f64>>,
}

fn values_for<'a>(bundle: &SeriesBundle<'a>, target: MonitorTarget) -> Option<&'a [f64]> {
    match target {
        MonitorTarget::Signal(id) => bundle.signals.get(&id).map(Vec::as_slice),
        MonitorTarget::Auxiliary(id) => bundle.auxiliary.get(&id).map(Vec::as_slice),
        MonitorTarget::Accumulator(id) => bundle.accumulators.get(&id).map(Vec::as_slice),
    }
}

fn run_pattern(minutes: &[f64], values: &[f64], pattern: &PatternKind) -> Vec<Hit> {
    match *pattern {
        PatternKind::ThresholdCrossing { threshold, direction } => threshold_crossings(minutes, values, threshold, direction),
        PatternKind::SlopeEvent { window_minutes, min_abs_slope_per_minute } => slope_events(minutes, values, window_minutes, min_abs_slope_per_minute),
        PatternKind::RangeResidence { min, max, inside, min_duration_minutes } => range_residence(minutes, values, min, max, inside, min_duration_minutes),
    }
}

pub fn scan_all(bundle: &SeriesBundle, defs: &[MonitorDefinition]) -> Vec<MonitorResult> {
    let mut results = Vec::new();

    for def in defs {
        let Some(values) = values_for(bundle, def.target) else { continue };
        if values.len() != bundle.minutes.len() {
            continue;
        }
        for hit in run_pattern(bundle.minutes, values, &def.pattern) {
            results.push(MonitorResult {
                id: def.id.to_string(),
                target: def.target,
                detected_at_minute: hit.minute,
                trigger_value: hit.trigger_value,
                outcome: def.outcome,
                message: def.message.to_string(),
            });
        }
    }

    results.sort_by(|a, b| Reverse(a.outcome).cmp(&Reverse(b.outcome)).then(a.detected_at_minute.partial_cmp(&b.detected_at_minute).unwrap()));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn hypoglycemia_crossing_is_detected_and_ranked_critical_first() {
        let minutes: Vec<f64> = (0..10).map(|i| i as f64 * 5.0).collect();
        let mut glucose = vec![90.0; 10];
        glucose[5] = 65.0;
        let mut cortisol = vec![5.0; 10];
        cortisol[3] = 20.0;

        let mut signals = BTreeMap::new();
        signals.insert(SignalId::Glucose, glucose);
        signals.insert(SignalId::Cortisol, cortisol);
        let auxiliary = BTreeMap::new();
        let accumulators = BTreeMap::new();

        let bundle = SeriesBundle { minutes: &minutes, signals: &signals, auxiliary: &auxiliary, accumulators: &accumulators };
        let results = scan_all(&bundle, &catalog::all());

        assert!(!results.is_empty());
        assert_eq!(results[0].id, "hypoglycemia");
    }

    #[test]
    fn missing_series_is_skipped_without_panic() {
        let minutes = vec![0.0, 5.0];
        let signals = BTreeMap::new();
        let auxiliary = BTreeMap::new();
        let accumulators = BTreeMap::new();
        let bundle = SeriesBundle { minutes: &minutes, signals: &signals, auxiliary: &auxiliary, accumulators: &accumulators };
        assert!(scan_all(&bundle, &catalog::all()).is_empty());
    }
}
