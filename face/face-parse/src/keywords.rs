//! Ordered keyword tables.
//!
//! All three tables are ordered slices, not maps: the parser's precedence is
//! first-declared-wins, and that order must stay deterministic and
//! reviewable. Reordering entries changes parse results.

use face_types::{Action, Target};

/// Facial term → deformation target, in declaration order.
///
/// Matching is by substring, so overlapping terms are possible (顎下 also
/// contains 顎); every matching entry emits an operation, in this order.
pub const TARGET_KEYWORDS: &[(&str, Target)] = &[
    // Nose
    ("鼻尖", Target::NasalTip),
    ("鼻先", Target::NasalTip),
    ("鼻の先", Target::NasalTip),
    ("鼻筋", Target::NasalBridge),
    ("鼻の高さ", Target::NasalBridge),
    // Eyes
    ("目", Target::EyeSize),
    ("目のサイズ", Target::EyeSize),
    ("目の大きさ", Target::EyeSize),
    // Jaw
    ("顎", Target::JawWidth),
    ("顎幅", Target::JawWidth),
    ("あご", Target::JawWidth),
    // Lips
    ("唇", Target::LipThickness),
    ("くちびる", Target::LipThickness),
    ("唇の厚さ", Target::LipThickness),
    // Cheeks
    ("頬", Target::CheekContour),
    ("ほほ", Target::CheekContour),
    ("ほお", Target::CheekContour),
    // Forehead
    ("額", Target::ForeheadWidth),
    ("ひたい", Target::ForeheadWidth),
    // Submental
    ("顎下", Target::SubmentalFat),
    ("顎下脂肪", Target::SubmentalFat),
    ("顎下脂肪吸引", Target::SubmentalFat),
    ("二重顎", Target::SubmentalFat),
    ("サブメンタル", Target::SubmentalFat),
    ("submental", Target::SubmentalFat),
];

/// Action term → direction, in declaration order. First match wins.
pub const ACTION_KEYWORDS: &[(&str, Action)] = &[
    ("高く", Action::Increase),
    ("高", Action::Increase),
    ("大きく", Action::Increase),
    ("大", Action::Increase),
    ("厚く", Action::Increase),
    ("厚", Action::Increase),
    ("広く", Action::Increase),
    ("広", Action::Increase),
    ("引き締め", Action::Decrease),
    ("細く", Action::Decrease),
    ("細", Action::Decrease),
    ("小さく", Action::Decrease),
    ("小", Action::Decrease),
    ("薄く", Action::Decrease),
    ("薄", Action::Decrease),
    ("狭く", Action::Decrease),
    ("狭", Action::Decrease),
    ("吸引", Action::Decrease),
];

/// Intensity adverb → multiplier, in declaration order. First match wins.
pub const INTENSITY_KEYWORDS: &[(&str, f64)] = &[
    ("少し", 0.3),
    ("軽く", 0.3),
    ("ちょっと", 0.4),
    ("適度に", 0.5),
    ("普通に", 0.5),
    ("かなり", 0.7),
    ("強く", 0.8),
    ("とても", 0.8),
    ("非常に", 0.9),
    ("極めて", 1.0),
];

/// Returns the trigger terms registered for a target, in table order.
#[must_use]
pub fn keywords_for(target: Target) -> Vec<&'static str> {
    TARGET_KEYWORDS
        .iter()
        .filter(|&&(_, t)| t == target)
        .map(|&(kw, _)| kw)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_target_has_a_keyword() {
        for target in Target::ALL {
            assert!(
                !keywords_for(target).is_empty(),
                "target {target} has no trigger terms"
            );
        }
    }

    #[test]
    fn test_intensity_multipliers_in_unit_interval() {
        for &(kw, mult) in INTENSITY_KEYWORDS {
            assert!((0.0..=1.0).contains(&mult), "multiplier for {kw}");
        }
    }

    #[test]
    fn test_keywords_for_nasal_tip() {
        assert_eq!(keywords_for(Target::NasalTip), ["鼻尖", "鼻先", "鼻の先"]);
    }
}
