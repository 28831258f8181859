//! Timeline items and the `InterventionDefinition` catalog shape: each
//! definition is `(key, label, pharmacology)` where pharmacology is either
//! a static record or a pure function of params.

use pharmacology::{PdEffect, PkPrimitive};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// `(id, startMinute, endMinute, key, params, intensity)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineItem {
    pub id: u64,
    pub start_minute: f64,
    pub end_minute: f64,
    pub key: String,
    #[serde(default)]
    pub params: HashMap<String, f64>,
    #[serde(default = "default_intensity")]
    pub intensity: f64,
}

fn default_intensity() -> f64 {
    1.0
}

impl TimelineItem {
    pub fn param(&self, name: &str, default: f64) -> f64 {
        self.params.get(name).copied().unwrap_or(default)
    }
}

/// One PK primitive plus the PD effects it drives — the per-primitive unit a
/// `Pharmacology` value expands into.
#[derive(Debug, Clone)]
pub struct PkPdPrimitive {
    pub pk: PkPrimitive,
    pub pd: Vec<PdEffect>,
}

/// Either a fixed list of primitives, or a pure function of the timeline
/// item that expands into one ("the factory pattern ... purely compile-time
/// during C11").
pub enum Pharmacology {
    Static(Vec<PkPdPrimitive>),
    Factory(fn(&TimelineItem) -> Vec<PkPdPrimitive>),
    /// Neither PK nor PD: a marker intervention consumed by the integrator
    /// directly (e.g. the `sleep` state predicate in `ctx.isAsleep`).
    StateMarker,
}

/// `(key, label, pharmacology)`. The params schema named in the data model
/// is documentation only here — params are a plain `HashMap<String, f64>`
/// on `TimelineItem` and each factory documents the keys it reads.
pub struct InterventionDefinition {
    pub key: &'static str,
    pub label: &'static str,
    pub pharmacology: Pharmacology,
}
