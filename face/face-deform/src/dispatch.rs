//! Target-to-region dispatch table.
//!
//! Maps each deformation target onto the named region(s) it moves and the
//! unit direction each region's vertices are displaced along. Laterally
//! paired targets (eyes, cheeks) list mirrored directions so a single delta
//! widens or narrows both sides symmetrically.

use face_types::Target;

/// One region displaced along a fixed direction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RegionDisplacement {
    /// Name of the region in the region map.
    pub(crate) region: &'static str,

    /// Unit direction the region's vertices move along, scaled by the
    /// attenuated delta.
    pub(crate) direction: [f64; 3],
}

const NASAL_TIP: &[RegionDisplacement] = &[RegionDisplacement {
    region: "nose_tip",
    direction: [0.0, 0.0, 1.0],
}];

const NASAL_BRIDGE: &[RegionDisplacement] = &[RegionDisplacement {
    region: "nose_bridge",
    direction: [0.0, 1.0, 0.0],
}];

const EYE_SIZE: &[RegionDisplacement] = &[
    RegionDisplacement {
        region: "left_eye",
        direction: [1.0, 0.0, 0.0],
    },
    RegionDisplacement {
        region: "right_eye",
        direction: [-1.0, 0.0, 0.0],
    },
];

const JAW_WIDTH: &[RegionDisplacement] = &[RegionDisplacement {
    region: "jaw_line",
    direction: [1.0, 0.0, 0.0],
}];

const LIP_THICKNESS: &[RegionDisplacement] = &[RegionDisplacement {
    region: "mouth_outer",
    direction: [0.0, 1.0, 0.0],
}];

const CHEEK_CONTOUR: &[RegionDisplacement] = &[
    RegionDisplacement {
        region: "left_cheek",
        direction: [1.0, 0.0, 0.0],
    },
    RegionDisplacement {
        region: "right_cheek",
        direction: [-1.0, 0.0, 0.0],
    },
];

const FOREHEAD_WIDTH: &[RegionDisplacement] = &[RegionDisplacement {
    region: "forehead",
    direction: [1.0, 0.0, 0.0],
}];

/// Returns the region displacements for a target, or `None` when the target
/// is recognized by the parser but has no geometric mapping yet.
pub(crate) fn regions_for(target: Target) -> Option<&'static [RegionDisplacement]> {
    match target {
        Target::NasalTip => Some(NASAL_TIP),
        Target::NasalBridge => Some(NASAL_BRIDGE),
        Target::EyeSize => Some(EYE_SIZE),
        Target::JawWidth => Some(JAW_WIDTH),
        Target::LipThickness => Some(LIP_THICKNESS),
        Target::CheekContour => Some(CHEEK_CONTOUR),
        Target::ForeheadWidth => Some(FOREHEAD_WIDTH),
        Target::SubmentalFat => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use face_region::RegionMap;

    #[test]
    fn test_every_dispatched_region_exists_in_builtin_map() {
        let regions = RegionMap::face_default();
        for target in Target::ALL {
            let Some(entries) = regions_for(target) else {
                continue;
            };
            for entry in entries {
                assert!(
                    regions.contains(entry.region),
                    "missing region '{}' for target '{target}'",
                    entry.region
                );
            }
        }
    }

    #[test]
    fn test_paired_targets_are_mirrored() {
        for target in [Target::EyeSize, Target::CheekContour] {
            let entries = regions_for(target).unwrap();
            assert_eq!(entries.len(), 2);
            assert_eq!(entries[0].direction[0], -entries[1].direction[0]);
        }
    }

    #[test]
    fn test_submental_has_no_mapping() {
        assert!(regions_for(Target::SubmentalFat).is_none());
    }
}
