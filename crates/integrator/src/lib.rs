//! Fixed-step RK4 integrator: advances the coupled physiological +
//! pharmacokinetic state across a uniform time grid, delivering bolus doses,
//! subdividing stiff PK regimes into microsteps, clamping saturated
//! quantities, and detecting numerical blow-up — the loop every other crate
//! in this workspace (`registry`, `physiology`, `profiles`, `pharmacology`,
//! `assembler`, `interventions`) feeds into.

pub mod cancellation;
pub mod context;
pub mod derivative;
pub mod error;
pub mod flags;
pub mod grid;
pub mod initial_state;
pub mod pk_active;
pub mod pk_step;
pub mod run;

pub use cancellation::CancellationToken;
pub use context::eval_context_at;
pub use derivative::{physio_derivative, DerivativeContext};
pub use error::NumericError;
pub use flags::Flag;
pub use grid::GridSpec;
pub use initial_state::build_initial_state;
pub use run::{integrate, IntegrationOutcome, IntegrationRequest};
