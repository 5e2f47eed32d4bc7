//! Unicode normalization for circle name and location comparison.
//!
//! Event sites are inconsistent about full-width vs half-width characters:
//! the same circle may appear as `ｻｰｸﾙA` on the site and `サークルA` in a
//! favorites export. NFKC folds compatibility variants together so the two
//! spellings compare equal as plain strings.

use unicode_normalization::UnicodeNormalization;

/// Canonicalize a display string into its NFKC form.
///
/// Pure and total: defined for every input including the empty string, and
/// idempotent (`normalize(normalize(s)) == normalize(s)`). The result is
/// used only for equality comparison and sorting, never displayed.
pub fn normalize(s: &str) -> String {
    s.nfkc().collect()
}
