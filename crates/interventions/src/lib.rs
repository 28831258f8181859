//! Intervention compiler: the timeline + `InterventionDefinition`
//! catalog, and factory expansion into a flat, compiled primitive list.

pub mod catalog;
pub mod compile;
pub mod definition;

pub use compile::{compile_timeline, CompileError, CompiledIntervention, CompiledTimeline, StateMarkerInstance};
pub use definition::{InterventionDefinition, Pharmacology, PkPdPrimitive, TimelineItem};
