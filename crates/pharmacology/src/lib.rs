//! PK compartment dynamics (`pk`) and the PD applicator that turns a plasma
//! concentration into an activity delta or direct signal forcing (`pd`) —
//! the two primitives the ODE assembler consumes.

pub mod pd;
pub mod pk;

pub use pd::{ActivityMap, DirectForcing, Mechanism, PdEffect, PdTarget, PdTargetKind, apply_effects};
pub use pk::{
    derivative, derivative_vec, microstep_count, plasma_concentration_vec, DeliveryMode, KineticsKind,
    PkPrimitive, PkState,
};
