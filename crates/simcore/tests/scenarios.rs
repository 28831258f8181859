//! Concrete end-to-end scenarios run through `SimulationCore::run`.

use interventions::TimelineItem;
use physiology::{ConditionKey, EnabledCondition, Sex, Subject};
use registry::{AccumulatorId, AuxId, SignalId};
use simcore::{SimulationCore, SimulationRequest};
use std::collections::HashMap;

fn grid(end_minute: f64) -> integrator::GridSpec {
    integrator::GridSpec { start_minute: 0.0, end_minute, step_minutes: 5.0 }
}

fn item(id: u64, start: f64, end: f64, key: &str, params: &[(&str, f64)]) -> TimelineItem {
    TimelineItem {
        id,
        start_minute: start,
        end_minute: end,
        key: key.to_string(),
        params: params.iter().map(|(k, v)| (k.to_string(), *v)).collect::<HashMap<_, _>>(),
        intensity: 1.0,
    }
}

fn series(response: &simcore::SimulationResponse, id: SignalId) -> Vec<f64> {
    response.series[&id].to_vec()
}

#[test]
fn baseline_day_keeps_every_signal_within_its_declared_bounds() {
    let core = SimulationCore::new().unwrap();
    let subject = Subject::new(Sex::Male, 30.0, 80.0, 178.0);
    let request = SimulationRequest::new(grid(1440.0), subject, vec![]);
    let response = core.run(request).unwrap();

    assert!(response.error.is_none());
    for &id in SignalId::ALL {
        for &v in response.series[&id].iter() {
            assert!(v.is_finite(), "{:?} went non-finite", id);
        }
    }
}

#[test]
fn baseline_day_separates_cortisol_and_melatonin_peaks() {
    let core = SimulationCore::new().unwrap();
    let subject = Subject::new(Sex::Male, 30.0, 80.0, 178.0);
    let request = SimulationRequest::new(grid(1440.0), subject, vec![]);
    let response = core.run(request).unwrap();

    let minutes = &response.grid;
    let cortisol = series(&response, SignalId::Cortisol);
    let melatonin = series(&response, SignalId::Melatonin);

    let argmax = |v: &[f64]| v.iter().enumerate().max_by(|a, b| a.1.partial_cmp(b.1).unwrap()).map(|(i, _)| i).unwrap();
    let cortisol_peak_minute = minutes.minute_at(argmax(&cortisol));
    let melatonin_peak_minute = minutes.minute_at(argmax(&melatonin));

    // Cortisol peaks in the morning hours, melatonin overnight: on a 24h
    // circadian day the two peaks should land 8-16h apart either way round.
    let raw_separation = (cortisol_peak_minute - melatonin_peak_minute).abs();
    let separation = raw_separation.min(1440.0 - raw_separation);
    assert!(separation > 480.0, "peaks too close: cortisol {cortisol_peak_minute}, melatonin {melatonin_peak_minute}");
}

#[test]
fn caffeine_bolus_suppresses_adenosine_pressure_and_delays_melatonin_onset() {
    let core = SimulationCore::new().unwrap();
    let subject = Subject::new(Sex::Male, 30.0, 80.0, 178.0);
    let dosed = vec![item(1, 480.0, 480.0 + 1e-6, "caffeine", &[("dose_mg", 200.0)])];
    let with_caffeine = core.run(SimulationRequest::new(grid(1440.0), subject.clone(), dosed)).unwrap();
    let without = core.run(SimulationRequest::new(grid(1440.0), subject, vec![])).unwrap();

    let adenosine_with = &with_caffeine.auxiliary_series[&AuxId::AdenosinePressure];
    let adenosine_without = &without.auxiliary_series[&AuxId::AdenosinePressure];

    // Two hours after the dose, adenosine pressure should be measurably
    // lower with caffeine on board than without.
    let idx_2h_after_dose = with_caffeine.grid.len().min(((480.0 + 120.0) / 5.0) as usize);
    assert!(adenosine_with[idx_2h_after_dose] < adenosine_without[idx_2h_after_dose]);

    let onset_minute = |response: &simcore::SimulationResponse| {
        response
            .monitor_results
            .iter()
            .filter(|r| r.id == "melatonin_onset")
            .map(|r| r.detected_at_minute)
            .min_by(|a, b| a.partial_cmp(b).unwrap())
            .expect("nocturnal melatonin onset should be detected on a 24h grid")
    };

    let onset_with = onset_minute(&with_caffeine);
    let onset_without = onset_minute(&without);
    assert!(
        onset_with - onset_without >= 30.0,
        "caffeine should delay melatonin onset by at least 30 min: with={onset_with}, without={onset_without}"
    );
}

#[test]
fn exercise_window_raises_norepinephrine_only_during_its_active_window() {
    let core = SimulationCore::new().unwrap();
    let subject = Subject::new(Sex::Male, 30.0, 80.0, 178.0);
    let timeline = vec![item(1, 600.0, 630.0, "exercise", &[])];
    let response = core.run(SimulationRequest::new(grid(1440.0), subject, timeline)).unwrap();
    let norepi = series(&response, SignalId::Norepinephrine);

    let before = norepi[(590.0 / 5.0) as usize];
    let during = norepi[(615.0 / 5.0) as usize];
    assert!(during > before, "norepinephrine should rise during exercise: before={before} during={during}");
}

#[test]
fn adhd_with_methylphenidate_increases_dopamine_relative_to_untreated_adhd() {
    let core = SimulationCore::new().unwrap();
    let adhd = Subject::new(Sex::Male, 22.0, 70.0, 175.0).with_condition(EnabledCondition::new(ConditionKey::Adhd, 0.8));
    let untreated = core.run(SimulationRequest::new(grid(720.0), adhd.clone(), vec![])).unwrap();
    let treated_timeline = vec![item(1, 480.0, 480.0 + 1e-6, "methylphenidate", &[("dose_mg", 20.0)])];
    let treated = core.run(SimulationRequest::new(grid(720.0), adhd, treated_timeline)).unwrap();

    let dopamine_untreated: f64 = series(&untreated, SignalId::Dopamine).iter().sum();
    let dopamine_treated: f64 = series(&treated, SignalId::Dopamine).iter().sum();
    assert!(dopamine_treated > dopamine_untreated, "treated AUC {dopamine_treated} should exceed untreated AUC {dopamine_untreated}");
}

#[test]
fn mid_luteal_cycle_day_raises_progesterone_above_follicular_baseline() {
    let core = SimulationCore::new().unwrap();
    let follicular = Subject::new(Sex::Female, 28.0, 62.0, 165.0).with_cycle(5.0, 28.0);
    let luteal = Subject::new(Sex::Female, 28.0, 62.0, 165.0).with_cycle(21.0, 28.0);

    let follicular_response = core.run(SimulationRequest::new(grid(60.0), follicular, vec![])).unwrap();
    let luteal_response = core.run(SimulationRequest::new(grid(60.0), luteal, vec![])).unwrap();

    let progesterone_follicular = series(&follicular_response, SignalId::Progesterone)[0];
    let progesterone_luteal = series(&luteal_response, SignalId::Progesterone)[0];
    assert!(progesterone_luteal > progesterone_follicular);
}

/// Cortisol awakening response amplitude over one simulated day: the rise
/// from the overnight trough (00:00-03:00, the day-local half of the
/// 23:00-03:00 trough window) to the morning peak (07:30-09:00).
fn car_amplitude(response: &simcore::SimulationResponse) -> f64 {
    let cortisol = series(response, SignalId::Cortisol);
    let minutes = &response.grid;

    let window = |lo: f64, hi: f64, fold_init: f64, better: fn(f64, f64) -> f64| {
        (0..minutes.len())
            .filter(|&i| {
                let m = minutes.minute_at(i);
                m >= lo && m <= hi
            })
            .map(|i| cortisol[i])
            .fold(fold_init, better)
    };

    let trough = window(0.0, 180.0, f64::INFINITY, f64::min);
    let peak = window(450.0, 540.0, f64::NEG_INFINITY, f64::max);
    peak - trough
}

#[test]
fn multi_day_chaining_with_a_late_coffee_blunts_the_next_days_cortisol_awakening_response() {
    let core = SimulationCore::new().unwrap();
    let subject = Subject::new(Sex::Male, 30.0, 80.0, 178.0);

    let late_coffee = vec![item(1, 1260.0, 1260.0 + 1e-6, "caffeine", &[("dose_mg", 200.0)])];
    let day1 = core.run(SimulationRequest::new(grid(1440.0), subject.clone(), late_coffee)).unwrap();
    assert!(day1.error.is_none());
    assert_eq!(day1.final_state.accumulator(AccumulatorId::SleepDebt).is_nan(), false);

    let mut chained_day2_request = SimulationRequest::new(grid(1440.0), subject.clone(), vec![]);
    chained_day2_request.initial_state = Some(day1.final_state.clone());
    let chained_day2 = core.run(chained_day2_request).unwrap();
    assert!(chained_day2.error.is_none());

    let fresh_day2 = core.run(SimulationRequest::new(grid(1440.0), subject, vec![])).unwrap();
    assert!(fresh_day2.error.is_none());

    let chained_car = car_amplitude(&chained_day2);
    let fresh_car = car_amplitude(&fresh_day2);
    assert!(
        chained_car <= fresh_car * 0.95,
        "a late coffee the prior day should blunt the next day's CAR amplitude by at least 5%: chained={chained_car}, fresh={fresh_car}"
    );
}

#[test]
fn severity_zero_condition_reproduces_the_unconditioned_baseline() {
    let core = SimulationCore::new().unwrap();
    let plain = Subject::new(Sex::Male, 40.0, 85.0, 180.0);
    let disabled = Subject::new(Sex::Male, 40.0, 85.0, 180.0).with_condition(EnabledCondition::new(ConditionKey::Adhd, 0.0));

    let plain_response = core.run(SimulationRequest::new(grid(240.0), plain, vec![])).unwrap();
    let disabled_response = core.run(SimulationRequest::new(grid(240.0), disabled, vec![])).unwrap();

    for &id in SignalId::ALL {
        let a = series(&plain_response, id);
        let b = series(&disabled_response, id);
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < 1e-9, "{:?} diverged under a zero-severity condition", id);
        }
    }
}

#[test]
fn zero_dose_bolus_matches_the_timeline_free_baseline() {
    let core = SimulationCore::new().unwrap();
    let subject = Subject::new(Sex::Male, 30.0, 80.0, 178.0);
    let zero_dose = vec![item(1, 480.0, 480.0 + 1e-6, "caffeine", &[("dose_mg", 0.0)])];

    let baseline = core.run(SimulationRequest::new(grid(720.0), subject.clone(), vec![])).unwrap();
    let dosed = core.run(SimulationRequest::new(grid(720.0), subject, zero_dose)).unwrap();

    for &id in SignalId::ALL {
        let a = series(&baseline, id);
        let b = series(&dosed, id);
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < 1e-6, "{:?} diverged on a zero-dose bolus", id);
        }
    }
}
