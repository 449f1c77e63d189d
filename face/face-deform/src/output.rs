//! Deformation output and statistics.

use face_types::FaceMesh;

/// Result of applying an operation sequence to a mesh.
///
/// Holds the deformed copy plus summary statistics. The input mesh is never
/// mutated; topology (vertex count, face array) is preserved bit for bit.
///
/// # Example
///
/// ```
/// use face_deform::deform_mesh;
/// use face_region::RegionMap;
/// use face_types::FaceMesh;
///
/// let mesh = FaceMesh::new();
/// let output = deform_mesh(&mesh, &[], &RegionMap::face_default());
///
/// assert_eq!(output.operations_applied, 0);
/// assert!(output.mesh.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct DeformOutput {
    /// The deformed mesh.
    pub mesh: FaceMesh,

    /// Number of operations that displaced at least one vertex.
    pub operations_applied: usize,

    /// Number of operations skipped (unmapped target, missing region, or
    /// no valid vertices in this mesh).
    pub operations_skipped: usize,

    /// Total vertex displacements written, summed over applied operations.
    pub vertices_modified: usize,

    /// Largest single-vertex displacement magnitude, in mesh-local units.
    pub max_displacement: f64,
}

impl DeformOutput {
    /// Creates an output that passes `mesh` through unchanged.
    #[must_use]
    pub(crate) fn passthrough(mesh: FaceMesh) -> Self {
        Self {
            mesh,
            operations_applied: 0,
            operations_skipped: 0,
            vertices_modified: 0,
            max_displacement: 0.0,
        }
    }

    /// Returns true if no operation moved any vertex.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.operations_applied == 0
    }

    /// Returns a one-line human-readable summary.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} applied, {} skipped, {} vertex displacement(s), max {:.4}",
            self.operations_applied,
            self.operations_skipped,
            self.vertices_modified,
            self.max_displacement
        )
    }
}
