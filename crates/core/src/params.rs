//! Flat request parameters and their coercion rules.
//!
//! Transports decode a form body or query string into [`RawParams`] and hand
//! it to the registry untouched. Numeric fields go through [`str_to_int`],
//! so an absent or non-numeric value reads as `0`; the validators then reject
//! that zero wherever a field is required.

use crate::error::CoreError;
use crate::types::DbId;

/// Parse a decimal integer, returning `0` for anything that does not parse.
///
/// Accepts an optional leading `+` or `-`. Surrounding whitespace, decimal
/// points, and empty input all yield `0`.
///
/// ```
/// use shipdeck_core::params::str_to_int;
/// assert_eq!(str_to_int("42"), 42);
/// assert_eq!(str_to_int("abc"), 0);
/// assert_eq!(str_to_int(""), 0);
/// ```
pub fn str_to_int(raw: &str) -> i64 {
    raw.parse::<i64>().unwrap_or(0)
}

/// Reject a zero identifier with `"id cannot be empty"`.
pub fn require_id(id: DbId) -> Result<DbId, CoreError> {
    if id == 0 {
        return Err(CoreError::missing("id"));
    }
    Ok(id)
}

/// An ordered list of `(key, value)` pairs as submitted by the caller.
///
/// Keys may repeat. Single-valued lookups read the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParams {
    pairs: Vec<(String, String)>,
}

impl RawParams {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// First value submitted for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First value for `key`, or the empty string when absent.
    pub fn text(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_string()
    }

    /// First value for `key` coerced with [`str_to_int`].
    pub fn int(&self, key: &str) -> i64 {
        self.get(key).map(str_to_int).unwrap_or(0)
    }

    /// Every value submitted for a repeated key, coerced one by one.
    ///
    /// Both `key` and the bracketed `key[]` spelling are collected, in
    /// submission order.
    pub fn ints(&self, key: &str) -> Vec<i64> {
        let bracketed = format!("{key}[]");
        self.pairs
            .iter()
            .filter(|(k, _)| k == key || *k == bracketed)
            .map(|(_, v)| str_to_int(v))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
