//! Instruction parsing pipeline.

use face_types::{Action, Operation, Target};
use tracing::{debug, warn};

use crate::keywords::{ACTION_KEYWORDS, INTENSITY_KEYWORDS, TARGET_KEYWORDS};
use crate::numeric::{find_numeric_override, NumericOverride};

/// A matched keyword before validation.
struct Candidate {
    target: Target,
    delta: f64,
    action: Action,
    intensity: f64,
    keyword: &'static str,
}

/// Parses a free-text edit instruction into validated operations.
///
/// The parser is total: malformed or unmatched text yields an empty vector,
/// never an error. Operations are emitted in keyword-table declaration
/// order, not in text order.
///
/// # Example
///
/// ```
/// use face_parse::parse;
/// use face_types::{Action, Target};
///
/// let ops = parse("目を大きくする");
/// assert_eq!(ops.len(), 1);
/// assert_eq!(ops[0].target, Target::EyeSize);
/// assert_eq!(ops[0].action, Action::Increase);
///
/// assert!(parse("").is_empty());
/// assert!(parse("xyz unrelated text").is_empty());
/// ```
#[must_use]
pub fn parse(text: &str) -> Vec<Operation> {
    let normalized = normalize(text);
    let mut candidates = scan_keywords(&normalized);

    // The numeric override scans the original, pre-normalization text and
    // applies to the first emitted operation only.
    if let Some(first) = candidates.first_mut() {
        if let Some(found) = find_numeric_override(text) {
            apply_override(first, found);
        }
    }

    let operations: Vec<Operation> = candidates
        .into_iter()
        .filter_map(|c| {
            Operation::new(c.target, c.delta, c.action, c.intensity, c.keyword)
                .map_err(|err| warn!("dropping operation: {err}"))
                .ok()
        })
        .collect();

    debug!(
        "parsed {} operation(s) from instruction ({} chars)",
        operations.len(),
        text.len()
    );
    operations
}

/// Maps full-width digits to ASCII and collapses whitespace runs.
fn normalize(text: &str) -> String {
    let ascii_digits: String = text
        .chars()
        .map(|c| match c {
            '０'..='９' => {
                #[allow(clippy::cast_possible_truncation)]
                let offset = (c as u32 - '０' as u32) as u8;
                (b'0' + offset) as char
            }
            other => other,
        })
        .collect();

    ascii_digits.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Scans the ordered keyword table and builds one candidate per match.
fn scan_keywords(text: &str) -> Vec<Candidate> {
    let marker_action = sign_marker(text);

    TARGET_KEYWORDS
        .iter()
        .filter(|&&(keyword, _)| text.contains(keyword))
        .map(|&(keyword, target)| {
            let action = ACTION_KEYWORDS
                .iter()
                .find(|&&(action_kw, _)| text.contains(action_kw))
                .map(|&(_, a)| a)
                .or(marker_action)
                .unwrap_or(Action::Increase);

            let intensity = INTENSITY_KEYWORDS
                .iter()
                .find(|&&(adverb, _)| text.contains(adverb))
                .map_or(1.0, |&(_, m)| m);

            let mut delta = target.max_delta() * target.default_ratio() * intensity;
            if action == Action::Decrease {
                delta = -delta;
            }

            Candidate {
                target,
                delta,
                action,
                intensity,
                keyword,
            }
        })
        .collect()
}

/// Infers a direction from an explicit sign marker in the text.
fn sign_marker(text: &str) -> Option<Action> {
    if text.contains('+') || text.contains("プラス") {
        Some(Action::Increase)
    } else if text.contains('-') || text.contains("マイナス") {
        Some(Action::Decrease)
    } else {
        None
    }
}

/// Replaces a candidate's delta with an explicit numeric value.
///
/// Unsigned magnitudes inherit the candidate's action direction; explicitly
/// signed values are taken verbatim.
fn apply_override(candidate: &mut Candidate, found: NumericOverride) {
    candidate.delta = match found {
        NumericOverride::Absolute { value, signed } => {
            if !signed && candidate.action == Action::Decrease {
                -value
            } else {
                value
            }
        }
        NumericOverride::FractionOfMax { value, signed } => {
            let delta = value * candidate.target.max_delta();
            if !signed && candidate.action == Action::Decrease {
                -delta
            } else {
                delta
            }
        }
    };
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_millimeter_override_wins_over_default() {
        let ops = parse("鼻尖 +1.8mm");
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].target, Target::NasalTip);
        assert_relative_eq!(ops[0].delta, 1.8, epsilon = 1e-12);
    }

    #[test]
    fn test_default_magnitude() {
        let ops = parse("目を大きくする");
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].target, Target::EyeSize);
        assert_eq!(ops[0].action, Action::Increase);
        // default_ratio(0.3) * max_delta(0.3) * intensity(1.0)
        assert_relative_eq!(ops[0].delta, 0.09, epsilon = 1e-12);
    }

    #[test]
    fn test_intensity_value_override() {
        let ops = parse("顎を細くする 強度3");
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].target, Target::JawWidth);
        assert_eq!(ops[0].action, Action::Decrease);
        // (3/10) * max_delta(4.0), negated by the decrease action
        assert_relative_eq!(ops[0].delta, -1.2, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_and_unmatched() {
        assert!(parse("").is_empty());
        assert!(parse("xyz unrelated text").is_empty());
    }

    #[test]
    fn test_intensity_adverb() {
        let ops = parse("唇を厚くする 少し");
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].target, Target::LipThickness);
        assert_relative_eq!(ops[0].intensity, 0.3, epsilon = 1e-12);
        // max(2.0) * ratio(0.5) * 0.3
        assert_relative_eq!(ops[0].delta, 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_decrease_adverb_combination() {
        let ops = parse("頬を引き締める かなり");
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].target, Target::CheekContour);
        assert_eq!(ops[0].action, Action::Decrease);
        // max(3.5) * ratio(0.6) * 0.7, negative
        assert_relative_eq!(ops[0].delta, -1.47, epsilon = 1e-12);
    }

    #[test]
    fn test_table_order_not_text_order() {
        // 目 appears before 鼻尖 in the text, but 鼻尖 is declared first.
        let ops = parse("目と鼻尖を大きくする");
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[0].target, Target::NasalTip);
        assert_eq!(ops[1].target, Target::EyeSize);
    }

    #[test]
    fn test_sign_marker_inference() {
        let ops = parse("鼻筋 -0.5mm");
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].action, Action::Decrease);
        assert_relative_eq!(ops[0].delta, -0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_percent_override() {
        let ops = parse("額を広くする 50%");
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].target, Target::ForeheadWidth);
        // 0.5 * max_delta(5.0)
        assert_relative_eq!(ops[0].delta, 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_out_of_range_override_is_dropped() {
        // 9mm exceeds the nasal tip safety range [-3, 3]: reject, not clamp.
        let ops = parse("鼻尖 +9mm");
        assert!(ops.is_empty());
    }

    #[test]
    fn test_override_applies_to_first_operation_only() {
        let ops = parse("鼻尖と目 +1.5mm");
        assert_eq!(ops.len(), 2);
        assert_relative_eq!(ops[0].delta, 1.5, epsilon = 1e-12);
        // Second operation keeps its keyword default.
        assert_relative_eq!(ops[1].delta, 0.09, epsilon = 1e-12);
    }

    #[test]
    fn test_overlapping_keywords_emit_per_match() {
        // 顎下脂肪吸引 contains 顎 (jaw), 顎下, 顎下脂肪 and itself.
        let ops = parse("顎下脂肪吸引");
        assert_eq!(ops.len(), 4);
        assert_eq!(ops[0].target, Target::JawWidth);
        assert!(ops[1..].iter().all(|op| op.target == Target::SubmentalFat));
        // 吸引 is a decrease action
        assert!(ops.iter().all(|op| op.action == Action::Decrease));
    }

    #[test]
    fn test_normalize_full_width_digits() {
        assert_eq!(normalize("強度３   です"), "強度3 です");
    }

    #[test]
    fn test_full_width_digits_do_not_trigger_override() {
        // The override scan sees the original text, where １.８ is not an
        // ASCII number, so the keyword default applies.
        let ops = parse("鼻尖 １.８mm");
        assert_eq!(ops.len(), 1);
        assert_relative_eq!(ops[0].delta, 1.8, epsilon = 1e-12); // 3.0 * 0.6
    }
}
