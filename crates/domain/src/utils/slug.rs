//! Profile id and initials derivation

use crate::constants::{DEFAULT_INITIALS, FALLBACK_PROFILE_SLUG};

/// Derive a URL-safe profile id from a display name: lower-cased, runs of
/// non-word characters collapsed to `-`, trimmed of leading/trailing `-`.
/// Word characters are ASCII `[a-z0-9_]` only, so accented letters become
/// separators. Reduces to `"profile"` when nothing survives.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_sep = false;

    for ch in lowered.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            pending_sep = false;
            slug.push(ch);
        } else {
            pending_sep = true;
        }
    }

    if slug.is_empty() { FALLBACK_PROFILE_SLUG.to_string() } else { slug }
}

/// Derive avatar initials from a name: the first two characters,
/// upper-cased. Falls back to the fixed default when the name is empty.
pub fn derive_initials(name: &str) -> String {
    let initials: String = name.trim().chars().take(2).collect::<String>().to_uppercase();
    if initials.is_empty() { DEFAULT_INITIALS.to_string() } else { initials }
}
