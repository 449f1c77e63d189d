//! Canonical keypoint extraction.
//!
//! Produces the fixed 3-point correspondence set used to align two face
//! meshes: both eye centers and the nose tip. Eye centers average a small
//! ring of landmarks around each eye rather than trusting any single one.

use face_region::RegionMap;
use face_types::FaceMesh;
use nalgebra::Point2;

use crate::error::{AlignError, AlignResult};
use crate::procrustes::estimate_similarity;
use crate::similarity::Similarity2;

/// Landmark indices averaged into the left eye center.
const LEFT_EYE_LANDMARKS: [u32; 4] = [33, 7, 163, 144];

/// Landmark indices averaged into the right eye center.
const RIGHT_EYE_LANDMARKS: [u32; 4] = [362, 382, 380, 374];

/// Minimum vertex count for the fixed landmark indices to resolve.
const REQUIRED_VERTEX_COUNT: usize = 383;

/// Extracts the canonical 3-point keypoint set from a face mesh.
///
/// Returns, in order: left eye center, right eye center, nose tip. The eye
/// centers average fixed landmark groups from the external detector's
/// topology; the nose tip averages the `nose_tip` region of the injected
/// region map, so a deployment with a different detector topology supplies
/// its own table.
///
/// # Errors
///
/// Returns [`AlignError::MissingLandmarks`] if the mesh has fewer vertices
/// than the highest landmark index requires, or
/// [`AlignError::EmptyRegion`] if the region map has no usable `nose_tip`
/// vertices for this mesh.
pub fn face_keypoints(mesh: &FaceMesh, regions: &RegionMap) -> AlignResult<Vec<Point2<f64>>> {
    if mesh.vertex_count() < REQUIRED_VERTEX_COUNT {
        return Err(AlignError::MissingLandmarks {
            required: REQUIRED_VERTEX_COUNT,
            vertex_count: mesh.vertex_count(),
        });
    }

    let nose_tip: Vec<u32> = regions
        .valid_vertices_for("nose_tip", mesh)
        .into_iter()
        .collect();
    if nose_tip.is_empty() {
        return Err(AlignError::EmptyRegion { name: "nose_tip" });
    }

    Ok(vec![
        mean_xy(mesh, &LEFT_EYE_LANDMARKS),
        mean_xy(mesh, &RIGHT_EYE_LANDMARKS),
        mean_xy(mesh, &nose_tip),
    ])
}

/// Estimates the similarity transform aligning `source`'s face onto
/// `target`'s, from their canonical keypoints.
///
/// # Errors
///
/// Returns an error if either mesh is missing landmarks or the estimation
/// itself fails.
///
/// # Example
///
/// ```
/// use face_align::align_faces;
/// use face_region::RegionMap;
/// use face_types::{FaceMesh, Point3};
///
/// let mut mesh = FaceMesh::new();
/// for i in 0..400 {
///     mesh.vertices.push(Point3::new(f64::from(i % 20), f64::from(i / 20), 0.0));
/// }
///
/// let regions = RegionMap::face_default();
/// let transform = align_faces(&mesh, &mesh, &regions).unwrap();
/// assert!(transform.is_identity(1e-9));
/// ```
pub fn align_faces(
    source: &FaceMesh,
    target: &FaceMesh,
    regions: &RegionMap,
) -> AlignResult<Similarity2> {
    let source_keypoints = face_keypoints(source, regions)?;
    let target_keypoints = face_keypoints(target, regions)?;
    estimate_similarity(&source_keypoints, &target_keypoints)
}

/// XY mean of the given vertex indices. Callers guarantee the indices are
/// in bounds and non-empty.
fn mean_xy(mesh: &FaceMesh, indices: &[u32]) -> Point2<f64> {
    #[allow(clippy::cast_precision_loss)]
    let n = indices.len() as f64;
    let (sum_x, sum_y) = indices.iter().fold((0.0, 0.0), |(x, y), &i| {
        let v = &mesh.vertices[i as usize];
        (x + v.x, y + v.y)
    });
    Point2::new(sum_x / n, sum_y / n)
}
