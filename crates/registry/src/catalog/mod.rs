//! Assembly of the per-id definition tables into one validated [`Registry`].

mod accumulators;
mod auxiliary;
mod signals;

use crate::ids::{AccumulatorId, AuxId, SignalId};
use crate::validate::{Registry, RegistryError};

/// Build the complete, validated registry. Called once at process startup;
/// the returned handle is read-only for the remainder of the run.
pub fn build_registry() -> Result<Registry, RegistryError> {
    let signal_defs = SignalId::ALL.iter().map(|id| signals::definition(*id)).collect();
    let auxiliary_defs = AuxId::ALL.iter().map(|id| auxiliary::definition(*id)).collect();
    let accumulator_defs = AccumulatorId::ALL.iter().map(|id| accumulators::definition(*id)).collect();
    Registry::new(signal_defs, auxiliary_defs, accumulator_defs)
}
