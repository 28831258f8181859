//! Physiological unit tags and reference ranges.
//!
//! The engine never implicitly converts between units: every production
//! coefficient in the signal registry is authored already embedding the
//! scale ratio between its source's unit and its target's unit. This crate
//! only carries the closed set of unit tags and the read-only display-scale
//! map consumed by presentation layers outside the core.

use serde::{Deserialize, Serialize};

/// Closed enumeration of units used by signals and auxiliaries in this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    NanomolarPerLiter,
    MicromolarPerLiter,
    PicogramPerMilliliter,
    NanogramPerMilliliter,
    NanogramPerDeciliter,
    MicrogramPerDeciliter,
    MilligramPerDeciliter,
    PicomolePerLiter,
    NanomolePerLiter,
    InternationalUnitPerLiter,
    UnitPerLiter,
    MillimolePerLiter,
    BeatsPerMinute,
    MillimetersOfMercury,
    Milliseconds,
    Percent,
    DegreesCelsius,
    Index,
    FoldChange,
}

impl Unit {
    /// Short display symbol, e.g. for chart axis labels in the surrounding app.
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::NanomolarPerLiter => "nM",
            Unit::MicromolarPerLiter => "µM",
            Unit::PicogramPerMilliliter => "pg/mL",
            Unit::NanogramPerMilliliter => "ng/mL",
            Unit::NanogramPerDeciliter => "ng/dL",
            Unit::MicrogramPerDeciliter => "µg/dL",
            Unit::MilligramPerDeciliter => "mg/dL",
            Unit::PicomolePerLiter => "pmol/L",
            Unit::NanomolePerLiter => "nmol/L",
            Unit::InternationalUnitPerLiter => "IU/L",
            Unit::UnitPerLiter => "U/L",
            Unit::MillimolePerLiter => "mmol/L",
            Unit::BeatsPerMinute => "bpm",
            Unit::MillimetersOfMercury => "mmHg",
            Unit::Milliseconds => "ms",
            Unit::Percent => "%",
            Unit::DegreesCelsius => "°C",
            Unit::Index => "index",
            Unit::FoldChange => "fold-change",
        }
    }
}

/// Closed clinical reference range for a signal, in its native (engine) unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRange {
    pub low: f64,
    pub high: f64,
}

impl ReferenceRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }
}

/// A per-signal display scale factor: `display_value = engine_value * scale`.
///
/// Consumed read-only by presentation layers outside the core; the core
/// itself never applies this factor to its own state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayScale(pub f64);

impl Default for DisplayScale {
    fn default() -> Self {
        DisplayScale(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_range_contains_is_inclusive() {
        let r = ReferenceRange::new(70.0, 100.0);
        assert!(r.contains(70.0));
        assert!(r.contains(100.0));
        assert!(!r.contains(69.9));
    }

    #[test]
    fn unit_symbols_are_stable() {
        assert_eq!(Unit::MilligramPerDeciliter.symbol(), "mg/dL");
        assert_eq!(Unit::NanomolarPerLiter.symbol(), "nM");
    }
}
