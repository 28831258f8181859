//! The response record `SimulationCore::run` returns: echoed grid, dense
//! per-signal series, final state, monitor results, non-fatal flags, and an
//! optional numeric-failure detail.

use integrator::{Flag, GridSpec, NumericError};
use monitors::MonitorResult;
use ndarray::Array1;
use registry::{AuxId, SignalId, SimulationState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResponse {
    pub grid: GridSpec,
    /// Dense per-signal output series, one `Array1<f64>` of `len(grid)`
    /// values per signal, restricted to `request.signal_filter` when set.
    pub series: BTreeMap<SignalId, Array1<f64>>,
    pub auxiliary_series: BTreeMap<AuxId, Array1<f64>>,
    pub final_state: SimulationState,
    pub monitor_results: Vec<MonitorResult>,
    pub flags: Vec<Flag>,
    pub error: Option<NumericError>,
    pub cancelled: bool,
}

pub(crate) fn dense(series: BTreeMap<SignalId, Vec<f64>>) -> BTreeMap<SignalId, Array1<f64>> {
    series.into_iter().map(|(id, v)| (id, Array1::from_vec(v))).collect()
}

pub(crate) fn dense_aux(series: BTreeMap<AuxId, Vec<f64>>) -> BTreeMap<AuxId, Array1<f64>> {
    series.into_iter().map(|(id, v)| (id, Array1::from_vec(v))).collect()
}
