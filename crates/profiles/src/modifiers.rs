//! Modifier shapes a clinical [`ProfileDefinition`] carries: three additive
//! modifier lists plus an explicit setpoint shift list, all scaled by the
//! condition's severity when composed.

use registry::{EnzymeId, ReceptorId, SignalId, TransporterId};

/// `(receptorKey, densityΔ, sensitivityΔ, paramKey?)`. `param_key` names a
/// condition-specific sub-parameter the composer may read from
/// `EnabledCondition::params` instead of the static `density_delta` (e.g. a
/// custom receptor-density override); `None` means always use the static
/// deltas below.
#[derive(Debug, Clone, Copy)]
pub struct ReceptorModifier {
    pub receptor: ReceptorId,
    pub density_delta: f64,
    pub sensitivity_delta: f64,
    pub param_key: Option<&'static str>,
}

/// `(transporterKey, activityΔ, paramKey?)`.
#[derive(Debug, Clone, Copy)]
pub struct TransporterModifier {
    pub transporter: TransporterId,
    pub activity_delta: f64,
    pub param_key: Option<&'static str>,
}

/// `(enzymeKey, activityΔ, paramKey?)`.
#[derive(Debug, Clone, Copy)]
pub struct EnzymeModifier {
    pub enzyme: EnzymeId,
    pub activity_delta: f64,
    pub param_key: Option<&'static str>,
}

/// An explicit setpoint shift: the composer also applies explicit signal
/// modifiers that shift setpoints by a percentage. Applied by the
/// assembler as `setpoint * (1 + severity * pct_delta)`, not baked into the
/// (pure) `SetpointKind::evaluate` itself.
#[derive(Debug, Clone, Copy)]
pub struct SignalModifier {
    pub signal: SignalId,
    pub setpoint_pct_delta: f64,
}

/// Complete modifier set for one clinical condition, scaled by severity at
/// composition time.
#[derive(Debug, Clone, Copy)]
pub struct ProfileDefinition {
    pub receptor_modifiers: &'static [ReceptorModifier],
    pub transporter_modifiers: &'static [TransporterModifier],
    pub enzyme_modifiers: &'static [EnzymeModifier],
    pub signal_modifiers: &'static [SignalModifier],
    /// Minutes added to `minuteOfDay` before circadian setpoints evaluate
    /// it, scaled by severity. Used by shift-work misalignment; zero for
    /// every other condition. This is the composer's one escape hatch
    /// beyond activity/setpoint modifiers, since a phase shift cannot be
    /// expressed as either.
    pub circadian_phase_shift_minutes: f64,
}

pub const EMPTY: ProfileDefinition = ProfileDefinition {
    receptor_modifiers: &[],
    transporter_modifiers: &[],
    enzyme_modifiers: &[],
    signal_modifiers: &[],
    circadian_phase_shift_minutes: 0.0,
};
