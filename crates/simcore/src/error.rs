//! The exhaustive error kinds a run can be rejected with. `Validation` and
//! `Config` are surfaced before any integration work is attempted; numeric
//! blow-up and cancellation never reach here as an `Err` — they are
//! embedded in the response instead (see `crate::response::SimulationResponse`),
//! since both still carry a valid partial series worth returning.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("registry or timeline internally inconsistent: {0}")]
    Validation(String),
    #[error("subject or profile contradicts a constraint: {0}")]
    Config(String),
}

impl From<registry::RegistryError> for SimError {
    fn from(e: registry::RegistryError) -> Self {
        SimError::Validation(e.to_string())
    }
}

impl From<interventions::CompileError> for SimError {
    fn from(e: interventions::CompileError) -> Self {
        SimError::Validation(e.to_string())
    }
}

impl From<physiology::PhysiologyError> for SimError {
    fn from(e: physiology::PhysiologyError) -> Self {
        SimError::Config(e.to_string())
    }
}
