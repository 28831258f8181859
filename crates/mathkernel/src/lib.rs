//! Math kernel: phase/angle helpers, dose-response curves, and the RK4
//! stepper shared by every other crate in the simulation core.

pub mod phase;
pub mod response;
pub mod rk4;

pub use phase::{circular_distance, gaussian_phase, hour_to_phase, minute_to_phase, sigmoid_phase, window_phase};
pub use response::{hill_response, inverse_hill, logistic_response, michaelis_menten};
pub use rk4::rk4_step;
