//! Text normalization for name comparison.
//!
//! Both guesses and true names go through [`normalize`] before comparison, and
//! the suggestion ranker matches on normalized forms.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize a name for comparison.
///
/// Lower-cases first, then decomposes (NFD) and drops combining marks so
/// accents do not matter. `_` reads as a space, whitespace runs collapse to
/// one space and the ends are trimmed.
///
/// The result is a fixed point: `normalize(&normalize(s)) == normalize(s)`.
///
/// # Examples
///
/// ```
/// use pixel_guess_core::text::normalize;
///
/// assert_eq!(normalize("  Héimérdinger "), "heimerdinger");
/// assert_eq!(normalize("Dr._Mundo"), "dr. mundo");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_space = false;

    let decomposed = s
        .chars()
        .flat_map(char::to_lowercase)
        .nfd()
        .filter(|c| !is_combining_mark(*c));

    for ch in decomposed {
        if ch == '_' || ch.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(ch);
    }

    out
}

/// Compare two names after normalization.
pub fn names_match(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}
