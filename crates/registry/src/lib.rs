//! The signal/auxiliary/accumulator catalog: dense ids, the tagged-union
//! shapes that describe each entry's dynamics, the validated [`Registry`]
//! built from them, and the [`SimulationState`](state::SimulationState)
//! record the integrator advances.

pub mod catalog;
pub mod context;
pub mod definition;
pub mod ids;
pub mod state;
pub mod validate;

pub use context::{CycleContext, EvalContext};
pub use definition::{
    AuxiliaryDefinition, ClearanceKind, ClearanceTerm, CouplingEffect, CouplingTerm, CycleHormone,
    InitialValue, ProductionTerm, SetpointKind, SignalDefinition, SourceRef, Tendency, Transform,
};
pub use ids::{AccumulatorId, AuxId, EnzymeId, ReceptorId, SignalId, TransporterId};
pub use state::{PkAmounts, SimulationState};
pub use validate::{Node, Registry, RegistryError};
