//! Non-fatal conditions recorded alongside a clean run: clamp saturation is
//! flagged rather than treated as an error, and a stiff PK regime is handled
//! by internally subdividing a single grid step into N microsteps.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Flag {
    ClampSaturation { signal_key: String, minute: f64 },
    PkMicrostepSubdivision { minute: f64, microsteps: usize },
}
