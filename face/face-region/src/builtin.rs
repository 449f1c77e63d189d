//! Built-in region table for the external detector's face topology.
//!
//! Index ranges follow the 468-landmark layout of the external landmark
//! detection model. The ranges are deliberately coarse: the landmark index
//! set is an opaque, pluggable mapping, and a deployment with a different
//! detector replaces this table rather than this crate.

use crate::region::FaceRegion;
use crate::region_map::RegionMap;

/// Region name, index range (half-open), displacement cap in mesh units.
const FACE_REGION_TABLE: &[(&str, u32, u32, f64)] = &[
    ("nose_tip", 1, 10, 0.4),
    ("nose_bridge", 168, 175, 0.4),
    ("left_eye", 33, 42, 0.2),
    ("right_eye", 362, 373, 0.2),
    ("left_eyebrow", 70, 76, 0.3),
    ("right_eyebrow", 300, 307, 0.3),
    ("mouth_outer", 61, 84, 0.3),
    ("mouth_inner", 78, 95, 0.3),
    ("jaw_line", 172, 199, 0.5),
    ("left_cheek", 116, 140, 0.4),
    ("right_cheek", 345, 359, 0.4),
    ("forehead", 10, 22, 0.4),
    ("chin", 175, 185, 0.4),
];

/// Builds the default face region map.
pub(crate) fn face_regions() -> RegionMap {
    FACE_REGION_TABLE
        .iter()
        .map(|&(name, start, end, cap)| {
            FaceRegion::from_vertices(name, start..end).with_displacement_cap(cap)
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_all_builtin_regions_present() {
        let map = face_regions();
        assert_eq!(map.len(), FACE_REGION_TABLE.len());
        for &(name, ..) in FACE_REGION_TABLE {
            assert!(map.contains(name), "missing region {name}");
        }
    }

    #[test]
    fn test_region_extents() {
        let map = face_regions();
        assert_eq!(map.vertices_for("nose_tip").len(), 9);
        assert_eq!(map.vertices_for("jaw_line").len(), 27);
        assert_eq!(map.vertices_for("right_eye").len(), 11);
    }

    #[test]
    fn test_caps_are_positive() {
        let map = face_regions();
        for (_, region) in map.iter() {
            assert!(region.displacement_cap() > 0.0);
        }
    }

    #[test]
    fn test_symmetric_regions_share_caps() {
        let map = face_regions();
        let left = map.get("left_eye").unwrap().displacement_cap();
        let right = map.get("right_eye").unwrap().displacement_cap();
        assert_eq!(left, right);

        let left = map.get("left_cheek").unwrap().displacement_cap();
        let right = map.get("right_cheek").unwrap().displacement_cap();
        assert_eq!(left, right);
    }
}
