//! Named facial landmark regions.
//!
//! This crate maps anatomical region names (nose tip, jaw line, left eye, …)
//! to the sets of mesh-vertex indices that belong to them:
//!
//! - [`FaceRegion`] - A named vertex-index set with a displacement cap
//! - [`RegionMap`] - A lookup collection of regions
//!
//! The built-in table ([`RegionMap::face_default`]) covers the 468-landmark
//! topology produced by the external face landmark detector. The landmark
//! index set is treated as an opaque, pluggable mapping: nothing in this
//! crate depends on a particular detector beyond the index values in the
//! default table.
//!
//! # Lifecycle
//!
//! Region tables are built once at process start and never mutated. They are
//! plain data and safe to share across concurrent requests without locking.
//!
//! # Quick Start
//!
//! ```
//! use face_region::RegionMap;
//! use face_types::{FaceMesh, Point3};
//!
//! let regions = RegionMap::face_default();
//!
//! // Lookup never fails: unknown names yield an empty set
//! assert!(!regions.vertices_for("nose_tip").is_empty());
//! assert!(regions.vertices_for("dorsal_fin").is_empty());
//!
//! // Stale indices are filtered against the actual mesh
//! let mut mesh = FaceMesh::new();
//! for i in 0..20 {
//!     mesh.vertices.push(Point3::new(f64::from(i), 0.0, 0.0));
//! }
//! let valid = regions.valid_vertices_for("left_eye", &mesh);
//! assert!(valid.is_empty()); // left_eye starts at landmark 33
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod builtin;
mod region;
mod region_map;

pub use region::FaceRegion;
pub use region_map::RegionMap;
