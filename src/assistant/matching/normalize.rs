//! Query normalization.

/// Lowercase and whitespace-trim a raw query.
///
/// Pure, total, and idempotent. Empty input normalizes to the empty
/// string; callers treat an empty normalized query as "do not submit".
#[must_use]
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}
