//! Region-local facial mesh deformation.
//!
//! Applies validated edit operations to a [`FaceMesh`](face_types::FaceMesh)
//! by displacing named region vertices along per-target directions. The
//! engine is deliberately conservative:
//!
//! - Deltas pass a second, tighter engineering clamp on top of the parser's
//!   validation range.
//! - Every displacement is attenuated by [`ATTENUATION`] and capped at the
//!   region's displacement limit.
//! - Topology is immutable: vertices move, but none are added or removed
//!   and the face array is untouched.
//! - [`deform_mesh`] is total. A failing operation is logged and skipped;
//!   the rest of the sequence still applies.
//!
//! # Example
//!
//! ```
//! use face_deform::deform_mesh;
//! use face_parse::parse;
//! use face_region::RegionMap;
//! use face_types::{FaceMesh, Point3};
//!
//! let mut mesh = FaceMesh::new();
//! for i in 0..400 {
//!     mesh.vertices.push(Point3::new(f64::from(i % 20), 0.0, 0.0));
//! }
//!
//! let ops = parse("鼻先を高くする");
//! let output = deform_mesh(&mesh, &ops, &RegionMap::face_default());
//! assert_eq!(output.operations_applied, 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod clamp;
mod dispatch;
mod engine;
mod error;
mod output;

pub use clamp::engineering_limit;
pub use engine::{deform_mesh, ATTENUATION};
pub use error::{DeformError, DeformResult};
pub use output::DeformOutput;
