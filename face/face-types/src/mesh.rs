//! Triangulated facial landmark mesh.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A triangulated facial landmark mesh.
///
/// Stores vertex positions and triangle faces separately, with faces
/// referencing vertices by index. The vertex count is fixed by the external
/// landmark detector (one vertex per landmark) and the face array is produced
/// by a one-time external triangulation; edits move vertices but never add or
/// remove vertices or faces.
///
/// # Invariant
///
/// Every face index must be smaller than the vertex count. Use
/// [`faces_in_bounds`](FaceMesh::faces_in_bounds) to check a mesh received
/// from an external collaborator.
///
/// # Example
///
/// ```
/// use face_types::{FaceMesh, Point3};
///
/// let mut mesh = FaceMesh::new();
/// mesh.vertices.push(Point3::new(0.0, 0.0, 0.0));
/// mesh.vertices.push(Point3::new(1.0, 0.0, 0.0));
/// mesh.vertices.push(Point3::new(0.0, 1.0, 0.0));
/// mesh.faces.push([0, 1, 2]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceMesh {
    /// Vertex positions, one per detected landmark.
    pub vertices: Vec<Point3<f64>>,

    /// Triangle faces as indices into the vertex array.
    pub faces: Vec<[u32; 3]>,
}

impl FaceMesh {
    /// Creates a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Creates a mesh from vertices and faces.
    ///
    /// # Example
    ///
    /// ```
    /// use face_types::{FaceMesh, Point3};
    ///
    /// let vertices = vec![
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(0.0, 1.0, 0.0),
    /// ];
    /// let mesh = FaceMesh::from_parts(vertices, vec![[0, 1, 2]]);
    /// assert_eq!(mesh.face_count(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Point3<f64>>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Creates a mesh from raw coordinate and index data.
    ///
    /// This is the convenient entry point for meshes arriving from the
    /// external landmark/triangulation collaborator as flat arrays.
    ///
    /// Returns an empty mesh if either array length is not divisible by 3.
    ///
    /// # Example
    ///
    /// ```
    /// use face_types::FaceMesh;
    ///
    /// let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    /// let indices = [0, 1, 2];
    ///
    /// let mesh = FaceMesh::from_raw(&positions, &indices);
    /// assert_eq!(mesh.vertex_count(), 3);
    /// assert_eq!(mesh.face_count(), 1);
    /// ```
    #[must_use]
    pub fn from_raw(positions: &[f64], indices: &[u32]) -> Self {
        if positions.len() % 3 != 0 || indices.len() % 3 != 0 {
            return Self::new();
        }

        let vertices = positions
            .chunks_exact(3)
            .map(|c| Point3::new(c[0], c[1], c[2]))
            .collect();
        let faces = indices
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();

        Self { vertices, faces }
    }

    /// Returns the number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangle faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns true if every face index refers to an existing vertex.
    ///
    /// # Example
    ///
    /// ```
    /// use face_types::{FaceMesh, Point3};
    ///
    /// let mut mesh = FaceMesh::new();
    /// mesh.vertices.push(Point3::new(0.0, 0.0, 0.0));
    /// mesh.faces.push([0, 1, 2]);
    ///
    /// assert!(!mesh.faces_in_bounds());
    /// ```
    #[must_use]
    pub fn faces_in_bounds(&self) -> bool {
        let count = self.vertex_count();
        self.faces
            .iter()
            .all(|f| f.iter().all(|&i| (i as usize) < count))
    }

    /// Computes the mean X coordinate of all vertices.
    ///
    /// This is the vertical centerline used for laterally symmetric
    /// deformations. Returns 0.0 for an empty mesh.
    #[must_use]
    pub fn centerline_x(&self) -> f64 {
        if self.vertices.is_empty() {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let n = self.vertices.len() as f64;
        self.vertices.iter().map(|v| v.x).sum::<f64>() / n
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_is_empty() {
        let mesh = FaceMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn test_from_raw() {
        let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let indices = [0, 1, 2];

        let mesh = FaceMesh::from_raw(&positions, &indices);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
        assert_relative_eq!(mesh.vertices[1].x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_from_raw_ragged_input() {
        let mesh = FaceMesh::from_raw(&[0.0, 1.0], &[0, 1, 2]);
        assert!(mesh.is_empty());

        let mesh = FaceMesh::from_raw(&[0.0, 1.0, 2.0], &[0, 1]);
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_faces_in_bounds() {
        let mut mesh = FaceMesh::new();
        mesh.vertices.push(Point3::new(0.0, 0.0, 0.0));
        mesh.vertices.push(Point3::new(1.0, 0.0, 0.0));
        mesh.vertices.push(Point3::new(0.0, 1.0, 0.0));
        mesh.faces.push([0, 1, 2]);
        assert!(mesh.faces_in_bounds());

        mesh.faces.push([0, 1, 3]);
        assert!(!mesh.faces_in_bounds());
    }

    #[test]
    fn test_centerline_x() {
        let mut mesh = FaceMesh::new();
        mesh.vertices.push(Point3::new(-2.0, 0.0, 0.0));
        mesh.vertices.push(Point3::new(4.0, 1.0, 0.0));
        assert_relative_eq!(mesh.centerline_x(), 1.0, epsilon = 1e-12);

        let empty = FaceMesh::new();
        assert_relative_eq!(empty.centerline_x(), 0.0, epsilon = 1e-12);
    }
}
