//! Locale-aware comparison of display titles.
//!
//! Titles are compared level by level, the way collation tables do it:
//!
//! 1. Base letters, ignoring case and accents (`"éclair"` sorts with `"eclair"`)
//! 2. Accents (`"resume"` < `"résumé"`)
//! 3. Case, lowercase first (`"apple"` < `"Apple"`)
//! 4. Decomposed code points, so only canonically equivalent strings
//!    (`"caf\u{e9}"` and `"cafe\u{301}"`) compare equal
//!
//! Decomposition uses NFD from `unicode-normalization`.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compare two titles for display ordering.
pub fn compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| case_weights(a).cmp(case_weights(b)))
        .then_with(|| a.nfd().cmp(b.nfd()))
}

/// Lowercased letters with combining marks stripped.
fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Lowercased decomposition, accents kept.
fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn case_weights(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.nfd().map(char::is_uppercase)
}
