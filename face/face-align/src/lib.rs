//! 2D similarity alignment between facial landmark meshes.
//!
//! Before two face meshes can be compared or morphed, their in-plane pose
//! and size must agree. This crate estimates the least-squares similarity
//! transform (rotation + uniform scale + translation, never a reflection)
//! between paired 2D point sets, and extracts the canonical eye/nose
//! keypoint correspondences that drive whole-face alignment.
//!
//! # Example
//!
//! ```
//! use face_align::{align_faces, transform_mesh_xy};
//! use face_region::RegionMap;
//! use face_types::{FaceMesh, Point3};
//!
//! let mut source = FaceMesh::new();
//! for i in 0..400 {
//!     source
//!         .vertices
//!         .push(Point3::new(f64::from(i % 20), f64::from(i / 20), 0.0));
//! }
//!
//! let mut target = source.clone();
//! for v in &mut target.vertices {
//!     v.x += 5.0;
//! }
//!
//! let transform = align_faces(&source, &target, &RegionMap::face_default()).unwrap();
//! let aligned = transform_mesh_xy(&source, &transform);
//! assert!((aligned.vertices[0] - target.vertices[0]).norm() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod keypoints;
mod procrustes;
mod similarity;

pub use error::{AlignError, AlignResult};
pub use keypoints::{align_faces, face_keypoints};
pub use procrustes::estimate_similarity;
pub use similarity::{transform_mesh_xy, Similarity2};
