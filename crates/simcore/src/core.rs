//! `SimulationCore`: builds the registry once and exposes `run` as a pure
//! `(request) -> response` operation.

use crate::error::SimError;
use crate::request::SimulationRequest;
use crate::response::{dense, dense_aux, SimulationResponse};
use integrator::{IntegrationRequest, NumericError};
use monitors::SeriesBundle;
use registry::Registry;

pub struct SimulationCore {
    registry: Registry,
}

impl SimulationCore {
    pub fn new() -> Result<Self, SimError> {
        let registry = registry::catalog::build_registry()?;
        Ok(Self { registry })
    }

    #[tracing::instrument(skip_all, fields(grid_len = request.grid.len()))]
    pub fn run(&self, request: SimulationRequest) -> Result<SimulationResponse, SimError> {
        if !request.grid.is_valid() {
            return Err(SimError::Validation(format!(
                "grid [{}, {}] stepped by {} is not valid (step must be positive and end must not precede start)",
                request.grid.start_minute, request.grid.end_minute, request.grid.step_minutes
            )));
        }

        physiology::validate_subject(&request.subject)?;
        let physiology = physiology::derive_physiology(&request.subject)?;
        let profile = profiles::compose(&request.subject);

        let compiled = {
            let _span = tracing::info_span!("compile_timeline").entered();
            interventions::compile_timeline(&request.timeline)?
        };

        let outcome = {
            let _span = tracing::info_span!("integrate").entered();
            integrator::integrate(IntegrationRequest {
                grid: request.grid,
                subject: &request.subject,
                physiology,
                registry: &self.registry,
                profile: &profile,
                compiled: &compiled,
                initial_state: request.initial_state,
                cancellation: request.cancellation,
            })
        };

        let monitor_results = if outcome.minutes.is_empty() {
            Vec::new()
        } else {
            let _span = tracing::info_span!("scan_monitors").entered();
            let bundle = SeriesBundle {
                minutes: &outcome.minutes,
                signals: &outcome.series,
                auxiliary: &outcome.auxiliary_series,
                accumulators: &outcome.accumulator_series,
            };
            monitors::scan_all(&bundle, &monitors::catalog::all())
        };

        let series = match &request.signal_filter {
            Some(wanted) => outcome.series.into_iter().filter(|(id, _)| wanted.contains(id)).collect(),
            None => outcome.series,
        };

        let error: Option<NumericError> = outcome.error;
        if let Some(err) = &error {
            tracing::warn!(%err, "integration aborted on numerical blow-up");
        }

        Ok(SimulationResponse {
            grid: request.grid,
            series: dense(series),
            auxiliary_series: dense_aux(outcome.auxiliary_series),
            final_state: outcome.final_state,
            monitor_results,
            flags: outcome.flags,
            error,
            cancelled: outcome.cancelled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use integrator::GridSpec;
    use physiology::{Sex, Subject};

    #[test]
    fn invalid_grid_is_rejected_before_integration() {
        let core = SimulationCore::new().unwrap();
        let request = SimulationRequest::new(
            GridSpec { start_minute: 0.0, end_minute: 100.0, step_minutes: 0.0 },
            Subject::new(Sex::Male, 30.0, 80.0, 178.0),
            vec![],
        );
        assert!(matches!(core.run(request), Err(SimError::Validation(_))));
    }

    #[test]
    fn cycle_day_on_male_subject_is_a_config_error() {
        let core = SimulationCore::new().unwrap();
        let mut subject = Subject::new(Sex::Male, 30.0, 80.0, 178.0);
        subject.cycle_day = Some(5.0);
        subject.cycle_length_days = Some(28.0);
        let request = SimulationRequest::new(GridSpec { start_minute: 0.0, end_minute: 60.0, step_minutes: 5.0 }, subject, vec![]);
        assert!(matches!(core.run(request), Err(SimError::Config(_))));
    }

    #[test]
    fn unknown_intervention_key_fails_before_integration() {
        let core = SimulationCore::new().unwrap();
        let timeline = vec![interventions::TimelineItem {
            id: 1,
            start_minute: 0.0,
            end_minute: 10.0,
            key: "not_a_real_key".into(),
            params: Default::default(),
            intensity: 1.0,
        }];
        let request = SimulationRequest::new(
            GridSpec { start_minute: 0.0, end_minute: 60.0, step_minutes: 5.0 },
            Subject::new(Sex::Male, 30.0, 80.0, 178.0),
            timeline,
        );
        assert!(matches!(core.run(request), Err(SimError::Validation(_))));
    }

    #[test]
    fn baseline_day_runs_clean_and_produces_no_numeric_error() {
        let core = SimulationCore::new().unwrap();
        let request = SimulationRequest::new(
            GridSpec { start_minute: 0.0, end_minute: 1440.0, step_minutes: 5.0 },
            Subject::new(Sex::Male, 30.0, 80.0, 178.0),
            vec![],
        );
        let response = core.run(request).unwrap();
        assert!(response.error.is_none());
        assert!(!response.cancelled);
        assert_eq!(response.series.len(), registry::SignalId::COUNT);
    }

    #[test]
    fn signal_filter_restricts_reported_series() {
        let core = SimulationCore::new().unwrap();
        let mut request = SimulationRequest::new(
            GridSpec { start_minute: 0.0, end_minute: 60.0, step_minutes: 5.0 },
            Subject::new(Sex::Male, 30.0, 80.0, 178.0),
            vec![],
        );
        request.signal_filter = Some([registry::SignalId::Cortisol].into_iter().collect());
        let response = core.run(request).unwrap();
        assert_eq!(response.series.len(), 1);
        assert!(response.series.contains_key(&registry::SignalId::Cortisol));
    }
}
