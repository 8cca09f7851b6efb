//! Listing and keyword-filter helpers.
//!
//! Lives in `core` so the registry validators and the SQL repository agree on
//! the same bounds and the same pattern escaping.

// ---------------------------------------------------------------------------
// Pagination bounds
// ---------------------------------------------------------------------------

/// Smallest page size a listing accepts.
pub const MIN_LIST_LIMIT: i64 = 1;

/// Largest page size a listing accepts.
pub const MAX_LIST_LIMIT: i64 = 999;

/// Whether `limit` lies within `[MIN_LIST_LIMIT, MAX_LIST_LIMIT]`.
pub fn is_valid_limit(limit: i64) -> bool {
    (MIN_LIST_LIMIT..=MAX_LIST_LIMIT).contains(&limit)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: i64) -> i64 {
    offset.max(0)
}

// ---------------------------------------------------------------------------
// Keyword matching
// ---------------------------------------------------------------------------

/// Escape `\`, `%` and `_` so `keyword` matches literally inside a
/// `LIKE`/`ILIKE` pattern using the default `\` escape character.
pub fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Build a `%keyword%` substring pattern with wildcards escaped.
pub fn contains_pattern(keyword: &str) -> String {
    format!("%{}%", escape_like(keyword))
}
