//! A monitor hit: `MonitorResult(id, target, detectedAtMinute, triggerValue,
//! outcome, message)`.

use crate::definition::MonitorTarget;
use serde::{Deserialize, Serialize};

/// Severity tier a monitor hit is classified into. Ordered `Win < Warning <
/// Critical` so results sort worst-first (`Ord` derive follows declaration
/// order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorResult {
    pub id: String,
    pub target: MonitorTarget,
    pub detected_at_minute: f64,
    pub trigger_value: f64,
    pub outcome: Outcome,
    pub message: String,
}
