use once_cell::sync::Lazy;
use regex::Regex;

// Non-word characters after lowercasing; whitespace and hyphens survive
// until the separator collapse.
static STRIP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9_\s-]+").expect("Invalid slug strip pattern"));
static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s_-]+").expect("Invalid slug separator pattern"));
static SLUG_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("Invalid slug format pattern"));

/// Derive a URL-friendly slug from free text.
///
/// Lowercases, trims, strips everything outside ASCII word characters,
/// whitespace and hyphens, then collapses each run of whitespace,
/// underscores and hyphens into a single hyphen and drops hyphens at the
/// edges. Non-ASCII letters are filtered out rather than transliterated,
/// keeping the output alphabet to `a-z`, `0-9` and `-`.
///
/// Total and idempotent. Returns the empty string when nothing survives
/// (e.g. `"!!!"`), which [`validate_slug`] rejects, so callers deriving
/// slugs from titles must handle the empty result explicitly.
pub fn generate_slug(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let lowered = input.to_lowercase();
    let stripped = STRIP.replace_all(lowered.trim(), "");
    let collapsed = SEPARATORS.replace_all(&stripped, "-");
    collapsed.trim_matches('-').to_string()
}

/// True iff the whole string is one or more `[a-z0-9]+` groups joined by
/// single hyphens. The empty string is not a valid slug. No maximum length
/// is enforced.
pub fn validate_slug(candidate: &str) -> bool {
    SLUG_FORMAT.is_match(candidate)
}
