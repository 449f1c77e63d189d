//! Internal per-operation error types.
//!
//! These never cross the engine's public boundary: a failing operation is
//! logged and skipped, and [`deform_mesh`](crate::deform_mesh) stays total.
//! They are public so callers can observe skip reasons in tests and logs.

use face_types::Target;
use thiserror::Error;

/// Result type for single-operation application.
pub type DeformResult<T> = Result<T, DeformError>;

/// Reasons a single operation could not be applied.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeformError {
    /// The target has no entry in the deformation dispatch table.
    #[error("target '{target}' has no deformation mapping")]
    UnmappedTarget {
        /// The unmapped target.
        target: Target,
    },

    /// A dispatched region name is missing from the region map.
    #[error("region '{name}' not found in region map")]
    UnknownRegion {
        /// The missing region name.
        name: &'static str,
    },

    /// No region vertex survived the stale-index filter.
    #[error("no valid vertices for target '{target}' in this mesh")]
    NoValidVertices {
        /// The affected target.
        target: Target,
    },
}
