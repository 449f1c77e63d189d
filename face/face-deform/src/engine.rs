//! Operation application engine.

use face_region::RegionMap;
use face_types::{FaceMesh, Operation, Target};
use nalgebra::Vector3;
use tracing::{debug, info, warn};

use crate::clamp::clamp_delta;
use crate::dispatch::regions_for;
use crate::error::{DeformError, DeformResult};
use crate::output::DeformOutput;

/// Global attenuation applied to every delta before it becomes a
/// displacement, converting clinical magnitudes to mesh-local motion.
pub const ATTENUATION: f64 = 0.1;

/// Per-operation displacement statistics.
struct OpStats {
    moved: usize,
    max_displacement: f64,
}

/// Applies an operation sequence to a copy of `mesh`.
///
/// Operations are applied in order, each on the output of the previous one.
/// A failing operation (unmapped target, missing region, no valid vertices)
/// is logged and skipped without disturbing the others; the function itself
/// never fails. Topology is preserved: no vertex or face is ever added or
/// removed.
///
/// # Example
///
/// ```
/// use face_deform::deform_mesh;
/// use face_region::RegionMap;
/// use face_types::{Action, FaceMesh, Operation, Point3, Target};
///
/// let mut mesh = FaceMesh::new();
/// for i in 0..12 {
///     mesh.vertices.push(Point3::new(f64::from(i), 0.0, 0.0));
/// }
///
/// let op = Operation::new(Target::NasalTip, 1.0, Action::Increase, 1.0, "鼻尖")
///     .unwrap();
/// let output = deform_mesh(&mesh, &[op], &RegionMap::face_default());
///
/// assert_eq!(output.operations_applied, 1);
/// assert_eq!(output.mesh.vertex_count(), mesh.vertex_count());
/// ```
#[must_use]
pub fn deform_mesh(
    mesh: &FaceMesh,
    operations: &[Operation],
    regions: &RegionMap,
) -> DeformOutput {
    let mut output = DeformOutput::passthrough(mesh.clone());

    for op in operations {
        match apply_operation(&mut output.mesh, op, regions) {
            Ok(stats) => {
                output.operations_applied += 1;
                output.vertices_modified += stats.moved;
                output.max_displacement = output.max_displacement.max(stats.max_displacement);
                debug!(
                    "applied '{}' (keyword '{}'): {} vertices, max {:.4}",
                    op.target, op.source_keyword, stats.moved, stats.max_displacement
                );
            }
            Err(err) => {
                output.operations_skipped += 1;
                warn!("skipping operation: {err}");
            }
        }
    }

    info!("deformation finished: {}", output.summary());
    output
}

/// Applies one operation in place.
///
/// The displacement plan is built in full before any vertex moves, so a
/// failure leaves the mesh untouched.
fn apply_operation(
    mesh: &mut FaceMesh,
    op: &Operation,
    regions: &RegionMap,
) -> DeformResult<OpStats> {
    let entries = regions_for(op.target).ok_or(DeformError::UnmappedTarget {
        target: op.target,
    })?;

    let scaled = ATTENUATION * clamp_delta(op.target, op.delta);

    let mut plan: Vec<(usize, Vector3<f64>)> = Vec::new();
    for entry in entries {
        let region = regions
            .get(entry.region)
            .ok_or(DeformError::UnknownRegion { name: entry.region })?;

        let valid = region.valid_vertices(mesh);
        if valid.is_empty() {
            continue;
        }

        let direction = Vector3::from(entry.direction);
        let cap = region.displacement_cap();

        if op.target == Target::JawWidth {
            // Lateral width change is weighted by signed distance from the
            // vertical centerline so the chin point stays put and the sides
            // move symmetrically toward or away from it.
            let center = mesh.centerline_x();
            let max_abs = valid
                .iter()
                .map(|&i| (mesh.vertices[i as usize].x - center).abs())
                .fold(0.0_f64, f64::max);
            if max_abs <= f64::EPSILON {
                continue;
            }
            for &i in &valid {
                let rel = (mesh.vertices[i as usize].x - center) / max_abs;
                plan.push((i as usize, cap_norm(direction * (scaled * rel), cap)));
            }
        } else {
            let displacement = cap_norm(direction * scaled, cap);
            for &i in &valid {
                plan.push((i as usize, displacement));
            }
        }
    }

    if plan.is_empty() {
        return Err(DeformError::NoValidVertices { target: op.target });
    }

    let mut max_displacement = 0.0_f64;
    for &(i, displacement) in &plan {
        mesh.vertices[i] += displacement;
        max_displacement = max_displacement.max(displacement.norm());
    }

    Ok(OpStats {
        moved: plan.len(),
        max_displacement,
    })
}

/// Rescales a displacement whose magnitude exceeds `cap` down onto it.
fn cap_norm(displacement: Vector3<f64>, cap: f64) -> Vector3<f64> {
    let norm = displacement.norm();
    if norm > cap {
        displacement * (cap / norm)
    } else {
        displacement
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use face_region::FaceRegion;
    use face_types::{Action, Point3};

    /// A 400-vertex mesh laid out on a 20-wide grid centered on x = 0,
    /// large enough to cover every built-in region's index range.
    fn landmark_mesh() -> FaceMesh {
        let mut mesh = FaceMesh::new();
        for i in 0..400_u32 {
            mesh.vertices.push(Point3::new(
                f64::from(i % 20) - 9.5,
                f64::from(i / 20),
                0.0,
            ));
        }
        mesh.faces.push([0, 1, 2]);
        mesh.faces.push([3, 4, 5]);
        mesh
    }

    fn op(target: Target, delta: f64, action: Action) -> Operation {
        Operation::new(target, delta, action, 1.0, "test").unwrap()
    }

    #[test]
    fn test_empty_operations_is_passthrough() {
        let mesh = landmark_mesh();
        let output = deform_mesh(&mesh, &[], &RegionMap::face_default());

        assert!(output.is_noop());
        assert_eq!(output.mesh, mesh);
    }

    #[test]
    fn test_nasal_tip_projection_with_engineering_clamp() {
        let mesh = landmark_mesh();
        // 1.8 is inside the parser's safety range but above the engine's
        // 1.0 limit, so the applied displacement is 0.1 * 1.0.
        let output = deform_mesh(
            &mesh,
            &[op(Target::NasalTip, 1.8, Action::Increase)],
            &RegionMap::face_default(),
        );

        assert_eq!(output.operations_applied, 1);
        assert_eq!(output.vertices_modified, 9);
        for i in 1..10 {
            assert_relative_eq!(output.mesh.vertices[i].z, 0.1, epsilon = 1e-12);
        }
        assert_relative_eq!(output.mesh.vertices[0].z, 0.0, epsilon = 1e-12);
        assert_relative_eq!(output.max_displacement, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_eye_pair_moves_symmetrically() {
        let mesh = landmark_mesh();
        let output = deform_mesh(
            &mesh,
            &[op(Target::EyeSize, 0.09, Action::Increase)],
            &RegionMap::face_default(),
        );

        // Left eye widens outward (+x), right eye mirrors (-x).
        assert_relative_eq!(
            output.mesh.vertices[33].x,
            mesh.vertices[33].x + 0.009,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            output.mesh.vertices[362].x,
            mesh.vertices[362].x - 0.009,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_jaw_narrowing_pulls_both_sides_toward_centerline() {
        let mesh = landmark_mesh();
        let output = deform_mesh(
            &mesh,
            &[op(Target::JawWidth, -1.2, Action::Decrease)],
            &RegionMap::face_default(),
        );

        // Vertex 172 sits right of the centerline, vertex 180 left of it;
        // narrowing moves both toward x = 0.
        assert!(mesh.vertices[172].x > 0.0);
        assert!(output.mesh.vertices[172].x < mesh.vertices[172].x);

        assert!(mesh.vertices[180].x < 0.0);
        assert!(output.mesh.vertices[180].x > mesh.vertices[180].x);
    }

    #[test]
    fn test_jaw_weight_scales_with_centerline_distance() {
        let mesh = landmark_mesh();
        let output = deform_mesh(
            &mesh,
            &[op(Target::JawWidth, -1.2, Action::Decrease)],
            &RegionMap::face_default(),
        );

        // Outermost jaw vertices move the full attenuated delta; inner ones
        // proportionally less.
        let outer = 180; // x = -9.5, the region's extreme
        let moved = (output.mesh.vertices[outer].x - mesh.vertices[outer].x).abs();
        assert_relative_eq!(moved, 0.12, epsilon = 1e-12);

        let inner = 189; // x = -0.5
        let moved_inner = (output.mesh.vertices[inner].x - mesh.vertices[inner].x).abs();
        assert_relative_eq!(moved_inner, 0.12 * 0.5 / 9.5, epsilon = 1e-12);
    }

    #[test]
    fn test_unmapped_target_is_skipped() {
        let mesh = landmark_mesh();
        let output = deform_mesh(
            &mesh,
            &[op(Target::SubmentalFat, -1.8, Action::Decrease)],
            &RegionMap::face_default(),
        );

        assert_eq!(output.operations_applied, 0);
        assert_eq!(output.operations_skipped, 1);
        assert_eq!(output.mesh, mesh);
    }

    #[test]
    fn test_no_valid_vertices_is_skipped() {
        let mut mesh = FaceMesh::new();
        mesh.vertices.push(Point3::new(0.0, 0.0, 0.0));

        let output = deform_mesh(
            &mesh,
            &[op(Target::NasalTip, 1.0, Action::Increase)],
            &RegionMap::face_default(),
        );

        assert_eq!(output.operations_skipped, 1);
        assert_eq!(output.mesh, mesh);
    }

    #[test]
    fn test_partial_region_on_small_mesh() {
        // Only 5 of nose_tip's 9 indices exist; the survivors still move.
        let mut mesh = FaceMesh::new();
        for i in 0..5 {
            mesh.vertices.push(Point3::new(f64::from(i), 0.0, 0.0));
        }

        let output = deform_mesh(
            &mesh,
            &[op(Target::NasalTip, 1.0, Action::Increase)],
            &RegionMap::face_default(),
        );

        assert_eq!(output.operations_applied, 1);
        assert_eq!(output.vertices_modified, 4);
        assert_relative_eq!(output.mesh.vertices[1].z, 0.1, epsilon = 1e-12);
        assert_relative_eq!(output.mesh.vertices[0].z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_region_displacement_cap_binds() {
        let mesh = landmark_mesh();
        let mut regions = RegionMap::new();
        regions.add(FaceRegion::from_vertices("nose_tip", 1..10).with_displacement_cap(0.05));

        let output = deform_mesh(
            &mesh,
            &[op(Target::NasalTip, 1.0, Action::Increase)],
            &regions,
        );

        assert_relative_eq!(output.max_displacement, 0.05, epsilon = 1e-12);
    }

    #[test]
    fn test_operations_accumulate_in_sequence() {
        let mesh = landmark_mesh();
        let ops = [
            op(Target::NasalTip, 1.0, Action::Increase),
            op(Target::NasalTip, 1.0, Action::Increase),
        ];
        let output = deform_mesh(&mesh, &ops, &RegionMap::face_default());

        assert_eq!(output.operations_applied, 2);
        assert_relative_eq!(output.mesh.vertices[1].z, 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_topology_is_preserved() {
        let mesh = landmark_mesh();
        let ops = [
            op(Target::NasalTip, 1.0, Action::Increase),
            op(Target::JawWidth, -1.2, Action::Decrease),
            op(Target::EyeSize, 0.09, Action::Increase),
        ];
        let output = deform_mesh(&mesh, &ops, &RegionMap::face_default());

        assert_eq!(output.mesh.vertex_count(), mesh.vertex_count());
        assert_eq!(output.mesh.faces, mesh.faces);
    }

    #[test]
    fn test_input_mesh_is_not_mutated() {
        let mesh = landmark_mesh();
        let before = mesh.clone();
        let _ = deform_mesh(
            &mesh,
            &[op(Target::NasalTip, 1.0, Action::Increase)],
            &RegionMap::face_default(),
        );

        assert_eq!(mesh, before);
    }
}
