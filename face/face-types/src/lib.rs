//! Core types for VisageForge.
//!
//! This crate provides the foundational vocabulary for the facial mesh
//! simulation pipeline:
//!
//! - [`FaceMesh`] - A triangulated facial landmark mesh
//! - [`Target`] - A deformable facial attribute with units and safety limits
//! - [`Operation`] - A validated, signed deformation instruction
//! - [`DeformParams`] - Engineering parameters attached to operations
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with no engine or framework dependencies. It can
//! be used in CLI tools, servers, WASM, and bindings alike.
//!
//! # Units
//!
//! Deformation deltas are expressed in each target's unit: millimeters for
//! positional targets, a dimensionless ratio for proportional targets (see
//! [`TargetUnit`]). Mesh coordinates are unscaled `f64` in image pixel space.
//!
//! # Coordinate System
//!
//! Meshes built from a face photograph use image-aligned axes:
//! - X: lateral (left/right across the face)
//! - Y: vertical (up/down the face)
//! - Z: depth (out of the image plane)
//!
//! # Example
//!
//! ```
//! use face_types::{FaceMesh, Point3, Target};
//!
//! let mut mesh = FaceMesh::new();
//! mesh.vertices.push(Point3::new(0.0, 0.0, 0.0));
//! mesh.vertices.push(Point3::new(1.0, 0.0, 0.0));
//! mesh.vertices.push(Point3::new(0.5, 1.0, 0.0));
//! mesh.faces.push([0, 1, 2]);
//!
//! assert_eq!(mesh.vertex_count(), 3);
//! assert!(mesh.faces_in_bounds());
//!
//! // Every registered target has a safety range straddling zero
//! for target in Target::ALL {
//!     assert!(target.min_delta() <= 0.0 && 0.0 <= target.max_delta());
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod mesh;
mod operation;
mod target;

pub use mesh::FaceMesh;
pub use operation::{Action, DeformParams, Operation, OperationError, OperationResult};
pub use target::{Target, TargetUnit};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3};
