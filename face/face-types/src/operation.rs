//! Validated deformation operations.
//!
//! An [`Operation`] is one signed deformation instruction for a single
//! target, produced by the instruction parser and consumed by the
//! deformation engine. Operations are constructed only through the
//! validating [`Operation::new`], which rejects (never clamps) deltas
//! outside the target's safety range.

use thiserror::Error;

use crate::target::Target;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result type for operation construction.
pub type OperationResult<T> = Result<T, OperationError>;

/// Errors that can occur when constructing an operation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OperationError {
    /// The delta falls outside the target's safety range.
    #[error("delta {delta} out of range [{min}, {max}] for target '{target}'")]
    DeltaOutOfRange {
        /// The target the operation addressed.
        target: Target,
        /// The rejected delta.
        delta: f64,
        /// The target's minimum allowed delta.
        min: f64,
        /// The target's maximum allowed delta.
        max: f64,
    },
}

/// The direction of a deformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Action {
    /// Enlarge, raise, thicken, widen.
    Increase,
    /// Reduce, lower, thin, narrow.
    Decrease,
}

/// Engineering parameters attached to a validated operation.
///
/// These describe the spatial falloff the downstream renderer expects:
/// the radius of influence and the Gaussian sigma, both in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeformParams {
    /// Radius of influence in millimeters.
    pub radius_mm: f64,
    /// Gaussian falloff sigma in millimeters.
    pub sigma_mm: f64,
}

impl Default for DeformParams {
    fn default() -> Self {
        Self {
            radius_mm: 12.0,
            sigma_mm: 8.0,
        }
    }
}

/// One validated, signed deformation instruction for a single target.
///
/// # Example
///
/// ```
/// use face_types::{Action, Operation, Target};
///
/// let op = Operation::new(Target::NasalTip, 1.8, Action::Increase, 1.0, "鼻尖").unwrap();
/// assert_eq!(op.target, Target::NasalTip);
///
/// // Out-of-range deltas are rejected, not clamped
/// assert!(Operation::new(Target::NasalTip, 9.0, Action::Increase, 1.0, "鼻尖").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Operation {
    /// The facial attribute being deformed.
    pub target: Target,
    /// Signed magnitude in the target's unit.
    pub delta: f64,
    /// Direction of the deformation.
    pub action: Action,
    /// Intensity multiplier in `[0, 1]` that produced the delta.
    pub intensity: f64,
    /// The keyword in the instruction text that triggered this operation.
    pub source_keyword: String,
    /// Engineering falloff parameters.
    pub params: DeformParams,
}

impl Operation {
    /// Creates a validated operation.
    ///
    /// The default [`DeformParams`] are attached; use
    /// [`with_params`](Operation::with_params) to override them.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::DeltaOutOfRange`] if `delta` falls outside
    /// `[target.min_delta(), target.max_delta()]`. NaN deltas are rejected.
    pub fn new(
        target: Target,
        delta: f64,
        action: Action,
        intensity: f64,
        source_keyword: impl Into<String>,
    ) -> OperationResult<Self> {
        if !target.validate_delta(delta) {
            return Err(OperationError::DeltaOutOfRange {
                target,
                delta,
                min: target.min_delta(),
                max: target.max_delta(),
            });
        }

        Ok(Self {
            target,
            delta,
            action,
            intensity,
            source_keyword: source_keyword.into(),
            params: DeformParams::default(),
        })
    }

    /// Replaces the engineering parameters.
    #[must_use]
    pub const fn with_params(mut self, params: DeformParams) -> Self {
        self.params = params;
        self
    }
}
