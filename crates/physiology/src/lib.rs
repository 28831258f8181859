//! Subject demographics and derived physiology.
//!
//! Every function here is pure: no signal, auxiliary, or simulation state is
//! read or written, only the subject's static demographics.

pub mod derive;
pub mod menstrual;
pub mod subject;

pub use derive::{derive_physiology, validate_subject, Physiology, PhysiologyError};
pub use menstrual::{get_menstrual_hormones, MenstrualHormones};
pub use subject::{ConditionKey, EnabledCondition, Sex, Subject};
