//! 2D similarity transform type.

use face_types::{FaceMesh, Point3};
use nalgebra::{Point2, UnitComplex, Vector2};

/// A 2D similarity transformation: rotation, translation, and uniform scale.
///
/// The transformation is applied in the order: scale -> rotate -> translate.
/// The rotation is a proper rotation by construction (no reflection).
///
/// # Example
///
/// ```
/// use face_align::Similarity2;
/// use nalgebra::{Point2, UnitComplex, Vector2};
/// use std::f64::consts::PI;
///
/// let transform = Similarity2::new(
///     UnitComplex::new(PI / 2.0),
///     Vector2::new(1.0, 0.0),
/// );
///
/// let moved = transform.transform_point(&Point2::new(1.0, 0.0));
/// assert!((moved - Point2::new(1.0, 1.0)).norm() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Similarity2 {
    /// Rotation as a unit complex number.
    pub rotation: UnitComplex<f64>,
    /// Translation vector.
    pub translation: Vector2<f64>,
    /// Uniform scale factor (default 1.0).
    pub scale: f64,
}

impl Default for Similarity2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Similarity2 {
    /// Creates a transform with rotation and translation, scale 1.0.
    #[must_use]
    pub const fn new(rotation: UnitComplex<f64>, translation: Vector2<f64>) -> Self {
        Self {
            rotation,
            translation,
            scale: 1.0,
        }
    }

    /// Creates a transform with rotation, translation, and scale.
    #[must_use]
    pub const fn with_scale(
        rotation: UnitComplex<f64>,
        translation: Vector2<f64>,
        scale: f64,
    ) -> Self {
        Self {
            rotation,
            translation,
            scale,
        }
    }

    /// Creates an identity transform.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            rotation: UnitComplex::identity(),
            translation: Vector2::zeros(),
            scale: 1.0,
        }
    }

    /// Creates a transform with only translation.
    #[must_use]
    pub fn from_translation(translation: Vector2<f64>) -> Self {
        Self {
            rotation: UnitComplex::identity(),
            translation,
            scale: 1.0,
        }
    }

    /// Creates a transform with only uniform scale.
    #[must_use]
    pub fn from_scale(scale: f64) -> Self {
        Self {
            rotation: UnitComplex::identity(),
            translation: Vector2::zeros(),
            scale,
        }
    }

    /// Transforms a 2D point.
    ///
    /// The transformation order is: scale -> rotate -> translate.
    #[must_use]
    pub fn transform_point(&self, point: &Point2<f64>) -> Point2<f64> {
        let scaled = point.coords * self.scale;
        let rotated = self.rotation * scaled;
        Point2::from(rotated + self.translation)
    }

    /// Transforms a 2D vector (direction).
    ///
    /// Vectors are scaled and rotated but not translated.
    #[must_use]
    pub fn transform_vector(&self, vector: &Vector2<f64>) -> Vector2<f64> {
        self.rotation * (vector * self.scale)
    }

    /// Composes this transform with another (self * other).
    ///
    /// The result applies `other` first, then `self`.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            rotation: self.rotation * other.rotation,
            translation: self.translation + self.rotation * (other.translation * self.scale),
            scale: self.scale * other.scale,
        }
    }

    /// Computes the inverse of this transform.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let inv_scale = 1.0 / self.scale;
        let inv_rotation = self.rotation.inverse();
        let inv_translation = inv_rotation * (-self.translation * inv_scale);

        Self {
            rotation: inv_rotation,
            translation: inv_translation,
            scale: inv_scale,
        }
    }

    /// Returns true if this transform is approximately the identity.
    #[must_use]
    pub fn is_identity(&self, epsilon: f64) -> bool {
        self.rotation.angle().abs() < epsilon
            && self.translation.norm() < epsilon
            && (self.scale - 1.0).abs() < epsilon
    }
}

/// Applies a similarity transform to a mesh's XY coordinates.
///
/// The Z coordinate of every vertex is untouched, as is the face array: the
/// alignment step normalizes in-plane pose and size only.
///
/// # Example
///
/// ```
/// use face_align::{transform_mesh_xy, Similarity2};
/// use face_types::{FaceMesh, Point3};
/// use nalgebra::Vector2;
///
/// let mesh = FaceMesh::from_parts(vec![Point3::new(1.0, 2.0, 3.0)], vec![]);
/// let shifted = transform_mesh_xy(&mesh, &Similarity2::from_translation(Vector2::new(1.0, 1.0)));
///
/// assert!((shifted.vertices[0] - Point3::new(2.0, 3.0, 3.0)).norm() < 1e-10);
/// ```
#[must_use]
pub fn transform_mesh_xy(mesh: &FaceMesh, transform: &Similarity2) -> FaceMesh {
    let vertices = mesh
        .vertices
        .iter()
        .map(|v| {
            let moved = transform.transform_point(&Point2::new(v.x, v.y));
            Point3::new(moved.x, moved.y, v.z)
        })
        .collect();

    FaceMesh::from_parts(vertices, mesh.faces.clone())
}
