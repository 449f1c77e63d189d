//! Natural-language edit instruction parser.
//!
//! Converts free-text cosmetic edit requests (Japanese, mixed full/half
//! width digits) into ordered, validated [`Operation`](face_types::Operation)
//! sequences:
//!
//! ```
//! use face_parse::parse;
//! use face_types::{Action, Target};
//!
//! let ops = parse("顎を細くする 強度3");
//! assert_eq!(ops.len(), 1);
//! assert_eq!(ops[0].target, Target::JawWidth);
//! assert_eq!(ops[0].action, Action::Decrease);
//! ```
//!
//! # Pipeline
//!
//! 1. Normalize full-width digits and whitespace
//! 2. Scan the ordered facial-term table (substring match, declaration
//!    order wins)
//! 3. Infer action from action keywords, then sign markers, defaulting to
//!    increase
//! 4. Infer an intensity multiplier from adverbs, defaulting to 1.0
//! 5. Compute the default magnitude from the target registry
//! 6. Apply at most one numeric override (mm > percent > intensity) to the
//!    first operation
//! 7. Drop (never clamp) out-of-range operations
//!
//! # Failure model
//!
//! [`parse`] is total. Unparseable text is not an error; it is an
//! instruction containing zero operations. The deformation engine applies
//! its own, tighter clamp later — validation here is the outer of two
//! independent safety nets.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod keywords;
mod numeric;
mod parser;

pub use keywords::{keywords_for, ACTION_KEYWORDS, INTENSITY_KEYWORDS, TARGET_KEYWORDS};
pub use parser::parse;

use face_types::Target;

/// Returns the supported deformation targets in registry order.
#[must_use]
pub const fn supported_targets() -> &'static [Target] {
    &Target::ALL
}

/// Returns every (target, trigger terms) pairing in registry order.
///
/// # Example
///
/// ```
/// use face_parse::target_keywords;
/// use face_types::Target;
///
/// let table = target_keywords();
/// assert_eq!(table[0].0, Target::NasalTip);
/// assert!(table[0].1.contains(&"鼻尖"));
/// ```
#[must_use]
pub fn target_keywords() -> Vec<(Target, Vec<&'static str>)> {
    Target::ALL
        .into_iter()
        .map(|t| (t, keywords_for(t)))
        .collect()
}
