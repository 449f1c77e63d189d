//! Similarity estimation from paired 2D point sets.
//!
//! Orthogonal Procrustes with uniform scale: the closed-form SVD solution
//! that minimizes the least-squares residual between the transformed source
//! points and the target points.

use nalgebra::{Matrix2, Point2, Rotation2, UnitComplex, Vector2};
use tracing::debug;

use crate::error::{AlignError, AlignResult};
use crate::similarity::Similarity2;

/// Source point spread below this is treated as all-coincident, in which
/// case the scale falls back to 1.0.
const VARIANCE_EPSILON: f64 = 1e-10;

/// Estimates the similarity transform mapping `source` points onto `target`
/// points.
///
/// The returned rotation is always proper (determinant +1): a reflected
/// correspondence set is resolved to the nearest proper rotation, never to a
/// mirror.
///
/// # Errors
///
/// Returns an error if:
/// - The point sets have different lengths
/// - Fewer than two pairs are given
/// - SVD of the cross-covariance matrix fails
///
/// # Example
///
/// ```
/// use face_align::estimate_similarity;
/// use nalgebra::Point2;
///
/// let source = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.0, 1.0),
/// ];
///
/// // Target is source translated by (2, 3)
/// let target = vec![
///     Point2::new(2.0, 3.0),
///     Point2::new(3.0, 3.0),
///     Point2::new(2.0, 4.0),
/// ];
///
/// let transform = estimate_similarity(&source, &target).unwrap();
/// let aligned = transform.transform_point(&source[0]);
/// assert!((aligned - target[0]).norm() < 1e-6);
/// ```
pub fn estimate_similarity(
    source: &[Point2<f64>],
    target: &[Point2<f64>],
) -> AlignResult<Similarity2> {
    if source.len() != target.len() {
        return Err(AlignError::LengthMismatch {
            source_len: source.len(),
            target_len: target.len(),
        });
    }
    if source.len() < 2 {
        return Err(AlignError::TooFewPoints {
            count: source.len(),
        });
    }

    #[allow(clippy::cast_precision_loss)]
    let n = source.len() as f64;
    let source_centroid = centroid(source);
    let target_centroid = centroid(target);

    let source_centered: Vec<Vector2<f64>> = source
        .iter()
        .map(|p| p.coords - source_centroid)
        .collect();
    let target_centered: Vec<Vector2<f64>> = target
        .iter()
        .map(|p| p.coords - target_centroid)
        .collect();

    // Cross-covariance S = sum(source_i * target_i^T) / n
    let mut cross = Matrix2::zeros();
    for (s, t) in source_centered.iter().zip(target_centered.iter()) {
        cross += s * t.transpose();
    }
    cross /= n;

    let svd = cross.svd(true, true);
    let u = svd.u.ok_or(AlignError::SvdFailed)?;
    let v_t = svd.v_t.ok_or(AlignError::SvdFailed)?;

    // Rotation R = V * U^T
    let mut rotation_matrix = v_t.transpose() * u.transpose();

    // Handle reflection case (det(R) = -1): flip the sign of the last
    // column of V, and of the corresponding singular value in the scale.
    let mut last_singular_sign = 1.0;
    if rotation_matrix.determinant() < 0.0 {
        let mut v = v_t.transpose();
        v[(0, 1)] = -v[(0, 1)];
        v[(1, 1)] = -v[(1, 1)];
        rotation_matrix = v * u.transpose();
        last_singular_sign = -1.0;
    }

    let rotation =
        UnitComplex::from_rotation_matrix(&Rotation2::from_matrix_unchecked(rotation_matrix));

    let source_variance =
        source_centered.iter().map(Vector2::norm_squared).sum::<f64>() / n;
    let scale = if source_variance > VARIANCE_EPSILON {
        (svd.singular_values[0] + last_singular_sign * svd.singular_values[1]) / source_variance
    } else {
        1.0
    };

    // Translation: t = target_centroid - scale * R * source_centroid
    let translation = target_centroid - scale * (rotation * source_centroid);

    debug!(
        "estimated similarity from {} pairs: angle {:.4} rad, scale {:.4}",
        source.len(),
        rotation.angle(),
        scale
    );

    Ok(Similarity2::with_scale(rotation, translation, scale))
}

/// Computes the centroid of a set of points.
fn centroid(points: &[Point2<f64>]) -> Vector2<f64> {
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    let sum: Vector2<f64> = points.iter().map(|p| p.coords).sum();
    sum / n
}
