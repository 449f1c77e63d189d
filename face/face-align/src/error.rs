//! Error types for similarity alignment.

use thiserror::Error;

/// Result type for alignment operations.
pub type AlignResult<T> = Result<T, AlignError>;

/// Errors that can occur during similarity estimation.
///
/// Unlike the parser and the deformation engine, the solver fails loudly: a
/// degenerate correspondence set has no meaningful "empty" answer.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AlignError {
    /// The two point sets have different lengths.
    ///
    /// The fields deliberately avoid the name `source`, which thiserror
    /// reserves for the error's cause.
    #[error("point sets must have equal length: {source_len} vs {target_len}")]
    LengthMismatch {
        /// Number of source points.
        source_len: usize,
        /// Number of target points.
        target_len: usize,
    },

    /// Fewer than two correspondence pairs were given.
    #[error("similarity estimation needs at least 2 point pairs, got {count}")]
    TooFewPoints {
        /// Number of pairs given.
        count: usize,
    },

    /// SVD of the cross-covariance matrix did not converge.
    #[error("SVD of the cross-covariance matrix failed")]
    SvdFailed,

    /// The mesh is too small to carry the canonical landmark set.
    #[error("mesh has {vertex_count} vertices, keypoint extraction needs {required}")]
    MissingLandmarks {
        /// Minimum vertex count for the fixed landmark indices.
        required: usize,
        /// The mesh's actual vertex count.
        vertex_count: usize,
    },

    /// A required region resolves to no vertices in this mesh.
    #[error("region '{name}' has no vertices in this mesh")]
    EmptyRegion {
        /// The region name that came up empty.
        name: &'static str,
    },
}
