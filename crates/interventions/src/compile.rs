//! Timeline compiler: walks the timeline, resolves each item against
//! the definition catalog, expands factories, and flattens the result into
//! one `CompiledIntervention` list — "deterministic and side-effect free;
//! the result is passed to C10 once per run."

use crate::catalog;
use crate::definition::{Pharmacology, PkPdPrimitive, TimelineItem};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CompileError {
    #[error("timeline item {item_id} references unknown intervention key {key:?}")]
    UnknownKey { item_id: u64, key: String },
    #[error("timeline item {item_id} has endMinute <= startMinute ({start} >= {end})")]
    NonPositiveDuration { item_id: u64, start: f64, end: f64 },
}

/// One expanded intervention instance, ready for the integrator.
///
/// `primitive_id` is distinct from `item_id`: a factory may expand one
/// timeline item into several primitives (none of the current catalog
/// entries do, but the shape allows it), and each needs its own PK
/// compartment slot in `SimulationState::pk` — `item_id` alone would collide.
#[derive(Debug, Clone)]
pub struct CompiledIntervention {
    pub primitive_id: u64,
    pub item_id: u64,
    pub start_minute: f64,
    pub end_minute: f64,
    pub primitive: PkPdPrimitive,
}

/// Result of compilation: pharmacological primitives plus the set of item
/// ids that are pure state markers (e.g. `sleep`), kept separate since the
/// integrator consults them for `ctx.is_asleep` rather than for PK/PD.
#[derive(Debug, Clone, Default)]
pub struct CompiledTimeline {
    pub interventions: Vec<CompiledIntervention>,
    pub state_markers: Vec<StateMarkerInstance>,
}

#[derive(Debug, Clone)]
pub struct StateMarkerInstance {
    pub key: String,
    pub start_minute: f64,
    pub end_minute: f64,
}

pub fn compile_timeline(timeline: &[TimelineItem]) -> Result<CompiledTimeline, CompileError> {
    let mut compiled = CompiledTimeline::default();
    let mut next_primitive_id = 0u64;

    for item in timeline {
        if item.end_minute <= item.start_minute {
            return Err(CompileError::NonPositiveDuration { item_id: item.id, start: item.start_minute, end: item.end_minute });
        }

        let def = catalog::definition(&item.key).ok_or_else(|| CompileError::UnknownKey { item_id: item.id, key: item.key.clone() })?;

        match def.pharmacology {
            Pharmacology::Static(primitives) => {
                for primitive in primitives {
                    compiled.interventions.push(CompiledIntervention {
                        primitive_id: next_primitive_id,
                        item_id: item.id,
                        start_minute: item.start_minute,
                        end_minute: item.end_minute,
                        primitive,
                    });
                    next_primitive_id += 1;
                }
            }
            Pharmacology::Factory(f) => {
                for primitive in f(item) {
                    compiled.interventions.push(CompiledIntervention {
                        primitive_id: next_primitive_id,
                        item_id: item.id,
                        start_minute: item.start_minute,
                        end_minute: item.end_minute,
                        primitive,
                    });
                    next_primitive_id += 1;
                }
            }
            Pharmacology::StateMarker => {
                compiled.state_markers.push(StateMarkerInstance { key: item.key.clone(), start_minute: item.start_minute, end_minute: item.end_minute });
            }
        }
    }

    Ok(compiled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn item(id: u64, key: &str, start: f64, end: f64) -> TimelineItem {
        TimelineItem { id, start_minute: start, end_minute: end, key: key.to_string(), params: HashMap::new(), intensity: 1.0 }
    }

    #[test]
    fn unknown_key_fails_compilation() {
        let timeline = vec![item(1, "not_a_real_key", 0.0, 10.0)];
        assert_eq!(
            compile_timeline(&timeline).unwrap_err(),
            CompileError::UnknownKey { item_id: 1, key: "not_a_real_key".to_string() }
        );
    }

    #[test]
    fn non_positive_duration_fails_compilation() {
        let timeline = vec![item(1, "caffeine", 100.0, 100.0)];
        assert_eq!(
            compile_timeline(&timeline).unwrap_err(),
            CompileError::NonPositiveDuration { item_id: 1, start: 100.0, end: 100.0 }
        );
    }

    #[test]
    fn sleep_item_becomes_a_state_marker_not_a_pk_primitive() {
        let timeline = vec![item(1, "sleep", 1380.0, 1860.0)];
        let compiled = compile_timeline(&timeline).unwrap();
        assert!(compiled.interventions.is_empty());
        assert_eq!(compiled.state_markers.len(), 1);
    }

    #[test]
    fn caffeine_expands_to_one_pk_pd_primitive() {
        let timeline = vec![item(1, "caffeine", 480.0, 480.0 + 1.0)];
        let compiled = compile_timeline(&timeline).unwrap();
        assert_eq!(compiled.interventions.len(), 1);
        assert_eq!(compiled.interventions[0].item_id, 1);
    }
}
