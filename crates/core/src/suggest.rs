//! Suggestion ranking for the guess autocomplete.
//!
//! Matching is substring-based on normalized names (see [`crate::text`]).
//! Ordering:
//! - names that start with the query come first
//! - then ascending normalized name
//! - then the original spelling, so the order is total and repeatable

use std::cmp::Ordering;

use crate::text::normalize;

/// Rank `candidates` against a free-text `query`.
///
/// A blank query yields no suggestions at all. The caller's candidate slice
/// is never reordered; a new vector is returned.
///
/// # Examples
///
/// ```
/// use pixel_guess_core::suggest::rank;
///
/// let pool = ["Annie", "Anivia", "Cassiopeia"];
/// assert_eq!(rank("ann", &pool), vec!["Annie"]);
/// assert_eq!(rank("an", &pool), vec!["Anivia", "Annie"]);
/// assert!(rank("   ", &pool).is_empty());
/// ```
pub fn rank<S: AsRef<str>>(query: &str, candidates: &[S]) -> Vec<String> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let needle = normalize(query);
    let mut matches: Vec<(bool, String, &str)> = candidates
        .iter()
        .filter_map(|candidate| {
            let name: &str = candidate.as_ref();
            let key = normalize(name);
            if key.contains(&needle) {
                Some((key.starts_with(&needle), key, name))
            } else {
                None
            }
        })
        .collect();

    matches.sort_by(|a, b| compare(a, b));
    matches.into_iter().map(|(_, _, name)| name.to_string()).collect()
}

fn compare(a: &(bool, String, &str), b: &(bool, String, &str)) -> Ordering {
    // `true` (prefix match) sorts first.
    b.0.cmp(&a.0)
        .then_with(|| a.1.cmp(&b.1))
        .then_with(|| a.2.cmp(b.2))
}

/// Move a focus index by `delta` within `len` items, wrapping both ways.
///
/// Returns 0 when there is nothing to focus.
pub fn wrap_focus(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (((index as isize + delta) % len + len) % len) as usize
}
