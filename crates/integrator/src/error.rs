//! `NumericError`: numerical blow-up (NaN, or a magnitude over 10x the
//! signal's declared max) aborts the run with a specific error naming the
//! offending signal and step; the partial series up to that step is still
//! returned to the caller rather than discarded.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum NumericError {
    #[error("signal {signal_key} became non-finite at minute {minute}")]
    NonFinite { signal_key: String, minute: f64 },
    #[error("signal {signal_key} reached {value} at minute {minute}, more than 10x its declared max {max}")]
    BlowUp { signal_key: String, minute: f64, value: f64, max: f64 },
}
