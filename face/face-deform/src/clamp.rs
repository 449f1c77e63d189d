//! Engineering-scale delta clamp.
//!
//! A second, tighter safety net behind the parser's validation range. The
//! parser rejects values a user should never have asked for; this clamp
//! bounds what the engine will actually move, per target.

use face_types::Target;
use tracing::warn;

/// Symmetric engineering limits on the magnitude the engine will apply,
/// in the target's own unit.
///
/// Targets absent from this table are not clamped here.
const ENGINEERING_LIMITS: &[(Target, f64)] = &[
    (Target::NasalTip, 1.0),
    (Target::NasalBridge, 1.0),
    (Target::EyeSize, 0.1),
    (Target::JawWidth, 2.0),
    (Target::LipThickness, 1.0),
    (Target::CheekContour, 1.5),
    (Target::ForeheadWidth, 1.5),
];

/// Returns the engineering limit magnitude for a target, if it has one.
#[must_use]
pub fn engineering_limit(target: Target) -> Option<f64> {
    ENGINEERING_LIMITS
        .iter()
        .find(|&&(t, _)| t == target)
        .map(|&(_, limit)| limit)
}

/// Clamps a delta to the target's engineering range.
pub(crate) fn clamp_delta(target: Target, delta: f64) -> f64 {
    let Some(limit) = engineering_limit(target) else {
        return delta;
    };

    let clamped = delta.clamp(-limit, limit);
    if clamped != delta {
        warn!(
            "clamping '{target}' delta {delta} to engineering range [{}, {limit}]",
            -limit
        );
    }
    clamped
}
