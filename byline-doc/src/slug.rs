//! Slug generation and URL-slug validation.
//!
//! One function, two callers: heading anchor ids (renderer and outline) and
//! post URL path segments (post validation). Anchors accept whatever
//! `slugify` produces; URL slugs are additionally gated by [`is_valid_slug`],
//! which is stricter (no underscores, bounded length).

/// Maximum accepted length for a post URL slug.
pub const MAX_SLUG_LENGTH: usize = 100;

/// Derive a URL-fragment-safe identifier from display text.
///
/// Lowercases and trims, strips every character that is not a word
/// character, whitespace or hyphen, collapses whitespace runs into a single
/// hyphen, collapses hyphen runs, and strips hyphens from both ends.
/// Deterministic and idempotent; empty input yields empty output, which
/// callers must handle (anchor injection skips empty ids, the normalizer
/// falls back to a placeholder title).
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;
    for ch in lowered.trim().chars() {
        if ch.is_whitespace() || ch == '-' {
            pending_hyphen = true;
        } else if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        }
        // Anything else is stripped without breaking the current run.
    }
    slug
}

/// Whether `slug` is an acceptable post URL slug.
///
/// Full match of `^[a-z0-9]+(-[a-z0-9]+)*$` with length in
/// `[1, MAX_SLUG_LENGTH]`. Note this is stricter than what `slugify`
/// emits: underscores pass through slug generation but are rejected here.
pub fn is_valid_slug(slug: &str) -> bool {
    slug_format_ok(slug) && slug.len() <= MAX_SLUG_LENGTH
}

/// Format-only half of [`is_valid_slug`], with the length bound left to the
/// caller (post validation reads it from configurable limits).
pub(crate) fn slug_format_ok(slug: &str) -> bool {
    !slug.is_empty()
        && slug.split('-').all(|part| {
            !part.is_empty()
                && part
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        })
}
