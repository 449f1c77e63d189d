//! Numeric override extraction.
//!
//! An instruction may carry an explicit magnitude that overrides the
//! keyword-derived default: a millimeter value (`+1.8mm`), a percentage of
//! the target's maximum delta (`30%`), or a 0-10 intensity (`強度3`).
//! Pattern priority is mm > percent > intensity; only the first match of the
//! highest-priority pattern that occurs applies, and it overrides the first
//! emitted operation only.
//!
//! Scanning runs over the *original* instruction text, before digit
//! normalization.

use regex::Regex;
use std::sync::LazyLock;

static MM_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"([+-]?[0-9]+(?:\.[0-9]+)?)\s*[mM][mM]").unwrap()
});

static PERCENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"([+-]?[0-9]+(?:\.[0-9]+)?)\s*%").unwrap()
});

static INTENSITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"強度\s*([0-9]+(?:\.[0-9]+)?)|([0-9]+(?:\.[0-9]+)?)\s*強度").unwrap()
});

/// Which override pattern matched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum NumericOverride {
    /// Absolute value in the target's own unit. `signed` is true when the
    /// text carried an explicit `+`/`-`.
    Absolute {
        /// The captured value, including any explicit sign.
        value: f64,
        /// True if the text spelled out a sign.
        signed: bool,
    },
    /// Fraction of the target's maximum delta (percentage / 100).
    FractionOfMax {
        /// The fraction, including any explicit sign.
        value: f64,
        /// True if the text spelled out a sign.
        signed: bool,
    },
}

/// Scans `text` for a numeric override, in pattern-priority order.
pub(crate) fn find_numeric_override(text: &str) -> Option<NumericOverride> {
    if let Some(caps) = MM_RE.captures(text) {
        let raw = caps.get(1)?.as_str();
        return Some(NumericOverride::Absolute {
            value: raw.parse().ok()?,
            signed: raw.starts_with(['+', '-']),
        });
    }

    if let Some(caps) = PERCENT_RE.captures(text) {
        let raw = caps.get(1)?.as_str();
        let value: f64 = raw.parse().ok()?;
        return Some(NumericOverride::FractionOfMax {
            value: value / 100.0,
            signed: raw.starts_with(['+', '-']),
        });
    }

    if let Some(caps) = INTENSITY_RE.captures(text) {
        let raw = caps.get(1).or_else(|| caps.get(2))?.as_str();
        let value: f64 = raw.parse().ok()?;
        // 0-10 scale mapped onto [0, 1] of max delta
        return Some(NumericOverride::FractionOfMax {
            value: value / 10.0,
            signed: false,
        });
    }

    None
}
