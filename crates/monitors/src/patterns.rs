//! The three series-scanning algorithms monitors are built from, each
//! operating on a plain `(minutes, values)` pair so they stay independent of
//! what kind of target produced the series (generalizing the soma voltage
//! threshold check a spiking neuron model runs every step into an
//! after-the-fact scan over a whole recorded series).

use crate::definition::CrossDirection;

/// One raw pattern hit before it is wrapped into a [`crate::MonitorResult`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub minute: f64,
    pub trigger_value: f64,
}

pub fn threshold_crossings(minutes: &[f64], values: &[f64], threshold: f64, direction: CrossDirection) -> Vec<Hit> {
    let mut hits = Vec::new();
    for i in 1..values.len() {
        let (prev, curr) = (values[i - 1], values[i]);
        let crossed = match direction {
            CrossDirection::Rising => prev < threshold && curr >= threshold,
            CrossDirection::Falling => prev > threshold && curr <= threshold,
        };
        if crossed {
            hits.push(Hit { minute: minutes[i], trigger_value: curr });
        }
    }
    hits
}

/// Scans for the first point in each trailing window of at least
/// `window_minutes` whose average slope magnitude exceeds
/// `min_abs_slope_per_minute`. Windows are measured in elapsed minutes, not
/// step count, so this is correct regardless of grid spacing.
pub fn slope_events(minutes: &[f64], values: &[f64], window_minutes: f64, min_abs_slope_per_minute: f64) -> Vec<Hit> {
    let mut hits = Vec::new();
    let mut back = 0usize;
    for i in 0..values.len() {
        while back + 1 < i && minutes[i] - minutes[back] > window_minutes {
            back += 1;
        }
        if minutes[i] - minutes[back] < window_minutes || back == i {
            continue;
        }
        let dt = minutes[i] - minutes[back];
        let slope = (values[i] - values[back]) / dt;
        if slope.abs() >= min_abs_slope_per_minute {
            hits.push(Hit { minute: minutes[i], trigger_value: slope });
        }
    }
    hits
}

fn in_band(value: f64, min: Option<f64>, max: Option<f64>, inside: bool) -> bool {
    let above_min = match min {
        Some(lo) => value >= lo,
        None => true,
    };
    let below_max = match max {
        Some(hi) => value <= hi,
        None => true,
    };
    let within = above_min && below_max;
    if inside {
        within
    } else {
        !within
    }
}

/// Reports one hit per continuous residency run, at the first minute the
/// run's elapsed duration reaches `min_duration_minutes`.
pub fn range_residence(minutes: &[f64], values: &[f64], min: Option<f64>, max: Option<f64>, inside: bool, min_duration_minutes: f64) -> Vec<Hit> {
    let mut hits = Vec::new();
    let mut run_start: Option<usize> = None;
    let mut reported = false;

    for i in 0..values.len() {
        if in_band(values[i], min, max, inside) {
            if run_start.is_none() {
                run_start = Some(i);
                reported = false;
            }
            let start = run_start.unwrap();
            if !reported && minutes[i] - minutes[start] >= min_duration_minutes {
                hits.push(Hit { minute: minutes[i], trigger_value: values[i] });
                reported = true;
            }
        } else {
            run_start = None;
            reported = false;
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minutes(n: usize, step: f64) -> Vec<f64> {
        (0..n).map(|i| i as f64 * step).collect()
    }

    #[test]
    fn rising_crossing_detected_once() {
        let m = minutes(5, 1.0);
        let v = vec![1.0, 2.0, 5.0, 5.0, 1.0];
        let hits = threshold_crossings(&m, &v, 4.0, CrossDirection::Rising);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].minute, 2.0);
    }

    #[test]
    fn falling_crossing_detected() {
        let m = minutes(5, 1.0);
        let v = vec![10.0, 9.0, 3.0, 2.0, 2.0];
        let hits = threshold_crossings(&m, &v, 5.0, CrossDirection::Falling);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].minute, 2.0);
    }

    #[test]
    fn slope_event_fires_on_steep_rise() {
        let m = minutes(10, 5.0);
        let mut v = vec![0.0; 10];
        for i in 5..10 {
            v[i] = 100.0;
        }
        let hits = slope_events(&m, &v, 10.0, 5.0);
        assert!(!hits.is_empty());
    }

    #[test]
    fn range_residence_fires_once_per_run() {
        let m = minutes(20, 1.0);
        let v: Vec<f64> = (0..20).map(|i| if (5..15).contains(&i) { 150.0 } else { 100.0 }).collect();
        let hits = range_residence(&m, &v, Some(140.0), None, true, 5.0);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].minute, 10.0);
    }

    #[test]
    fn range_residence_outside_band_tracks_normal_range() {
        let m = minutes(10, 1.0);
        let v = vec![100.0, 100.0, 40.0, 40.0, 40.0, 40.0, 100.0, 100.0, 100.0, 100.0];
        let hits = range_residence(&m, &v, Some(70.0), None, false, 3.0);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].minute, 5.0);
    }
}
