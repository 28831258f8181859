//! Profile composer: turns a subject's enabled clinical conditions
//! into a baseline receptor/transporter/enzyme [`pharmacology::ActivityMap`]
//! plus the setpoint biases the ODE assembler applies on top of each
//! signal's pure `setpoint(ctx)`.

pub mod catalog;
pub mod compose;
pub mod modifiers;
pub mod receptor_map;

pub use compose::{compose, ComposedProfile};
pub use modifiers::{EnzymeModifier, ProfileDefinition, ReceptorModifier, SignalModifier, TransporterModifier};
