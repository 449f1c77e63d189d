//! Deformation target registry.
//!
//! A [`Target`] is a named, independently configured deformable facial
//! attribute. The registry is process-wide static data: units, default
//! deformation ratios, and asymmetric safety limits per target, loaded once
//! and immutable thereafter.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The unit in which a target's deformation delta is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TargetUnit {
    /// Absolute positional change in millimeters.
    Millimeters,
    /// Dimensionless proportional change.
    Ratio,
}

/// A supported deformation target.
///
/// Each target carries its own unit, default deformation ratio, and
/// asymmetric `[min, max]` safety limits. The deformation engine applies a
/// second, tighter engineering clamp on top of these limits at apply time.
///
/// # Invariant
///
/// For every target, `min_delta() <= 0.0 <= max_delta()`.
///
/// # Example
///
/// ```
/// use face_types::{Target, TargetUnit};
///
/// let target = Target::JawWidth;
/// assert_eq!(target.unit(), TargetUnit::Millimeters);
/// assert_eq!(target.max_delta(), 4.0);
/// assert!(target.validate_delta(-2.8));
/// assert!(!target.validate_delta(5.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Target {
    /// Nasal tip projection (depth axis, mm).
    NasalTip,
    /// Nasal bridge height (vertical axis, mm).
    NasalBridge,
    /// Eye size (proportional ratio).
    EyeSize,
    /// Jaw width (lateral axis, mm).
    JawWidth,
    /// Lip thickness (vertical axis, mm).
    LipThickness,
    /// Cheek contour (lateral axis, mm).
    CheekContour,
    /// Forehead width (lateral axis, mm).
    ForeheadWidth,
    /// Submental fat reduction (mm).
    SubmentalFat,
}

impl Target {
    /// All supported targets in registry declaration order.
    pub const ALL: [Self; 8] = [
        Self::NasalTip,
        Self::NasalBridge,
        Self::EyeSize,
        Self::JawWidth,
        Self::LipThickness,
        Self::CheekContour,
        Self::ForeheadWidth,
        Self::SubmentalFat,
    ];

    /// Returns the target's unit.
    #[must_use]
    pub const fn unit(self) -> TargetUnit {
        match self {
            Self::EyeSize => TargetUnit::Ratio,
            _ => TargetUnit::Millimeters,
        }
    }

    /// Returns the default deformation ratio (fraction of `max_delta` used
    /// when no explicit magnitude is given).
    #[must_use]
    pub const fn default_ratio(self) -> f64 {
        match self {
            Self::NasalTip | Self::CheekContour | Self::SubmentalFat => 0.6,
            Self::NasalBridge | Self::LipThickness => 0.5,
            Self::EyeSize => 0.3,
            Self::JawWidth => 0.7,
            Self::ForeheadWidth => 0.8,
        }
    }

    /// Returns the maximum allowed positive delta in the target's unit.
    #[must_use]
    pub const fn max_delta(self) -> f64 {
        match self {
            Self::NasalTip | Self::SubmentalFat => 3.0,
            Self::NasalBridge => 2.5,
            Self::EyeSize => 0.3,
            Self::JawWidth => 4.0,
            Self::LipThickness => 2.0,
            Self::CheekContour => 3.5,
            Self::ForeheadWidth => 5.0,
        }
    }

    /// Returns the minimum allowed (most negative) delta in the target's unit.
    ///
    /// The limits happen to be symmetric in the current registry, but callers
    /// must not rely on that: the two bounds are configured independently.
    #[must_use]
    pub const fn min_delta(self) -> f64 {
        -self.max_delta()
    }

    /// Returns true if `delta` lies within the target's safety range.
    ///
    /// NaN deltas are never valid.
    #[must_use]
    pub fn validate_delta(self, delta: f64) -> bool {
        self.min_delta() <= delta && delta <= self.max_delta()
    }

    /// Returns the target's stable string identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NasalTip => "nasal_tip_mm",
            Self::NasalBridge => "nasal_bridge_mm",
            Self::EyeSize => "eye_size_ratio",
            Self::JawWidth => "jaw_width_mm",
            Self::LipThickness => "lip_thickness_mm",
            Self::CheekContour => "cheek_contour_mm",
            Self::ForeheadWidth => "forehead_width_mm",
            Self::SubmentalFat => "submental_fat_mm",
        }
    }

    /// Looks up a target by its string identifier.
    ///
    /// # Example
    ///
    /// ```
    /// use face_types::Target;
    ///
    /// assert_eq!(Target::from_name("jaw_width_mm"), Some(Target::JawWidth));
    /// assert_eq!(Target::from_name("unknown"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_straddle_zero() {
        for target in Target::ALL {
            assert!(
                target.min_delta() <= 0.0 && 0.0 <= target.max_delta(),
                "limits for {target} must straddle zero"
            );
        }
    }

    #[test]
    fn test_default_ratio_in_unit_interval() {
        for target in Target::ALL {
            let ratio = target.default_ratio();
            assert!((0.0..=1.0).contains(&ratio), "ratio for {target}");
        }
    }

    #[test]
    fn test_units() {
        assert_eq!(Target::EyeSize.unit(), TargetUnit::Ratio);
        assert_eq!(Target::NasalTip.unit(), TargetUnit::Millimeters);
    }

    #[test]
    fn test_validate_delta() {
        assert!(Target::NasalTip.validate_delta(3.0));
        assert!(Target::NasalTip.validate_delta(-3.0));
        assert!(!Target::NasalTip.validate_delta(3.01));
        assert!(!Target::NasalTip.validate_delta(f64::NAN));
    }

    #[test]
    fn test_name_round_trip() {
        for target in Target::ALL {
            assert_eq!(Target::from_name(target.as_str()), Some(target));
        }
    }

    #[test]
    fn test_registry_values() {
        assert_eq!(Target::JawWidth.max_delta(), 4.0);
        assert_eq!(Target::JawWidth.min_delta(), -4.0);
        assert_eq!(Target::EyeSize.max_delta(), 0.3);
        assert_eq!(Target::ForeheadWidth.default_ratio(), 0.8);
    }
}
