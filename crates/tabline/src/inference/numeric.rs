//! Lenient prefix number parsing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::input::is_blank;

// Optional sign, then `Infinity` or a decimal literal with optional exponent.
// Anchored at the start only: trailing text after the number is ignored.
static NUMBER_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("number prefix pattern is valid")
});

/// Parse the longest numeric prefix of `value`.
///
/// Leading whitespace (and a byte-order mark) is skipped and anything after the number is ignored,
/// so `" 12px"` yields 12. Returns `None` when no number starts the text.
pub fn parse_number(value: &str) -> Option<f64> {
    let candidate = value.trim_start_matches(is_blank);
    let matched = NUMBER_PREFIX.find(candidate)?;
    matched.as_str().parse::<f64>().ok()
}
