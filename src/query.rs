//! Query normalization.
//!
//! A query becomes a list of lowercased, whitespace-delimited terms. Queries
//! shorter than [`MIN_QUERY_CHARS`] after trimming never reach the scorer;
//! callers check [`is_searchable`] first.

/// Minimum trimmed query length, in characters, before scoring runs.
pub const MIN_QUERY_CHARS: usize = 2;

/// Does this query clear the minimum-length gate?
///
/// Length is counted in `char`s of the trimmed query, so a two-letter query
/// in any script qualifies. This deliberately differs from a browser's
/// UTF-16 `length`: a single astral-plane character such as an emoji counts
/// as one, not two. `str::trim` also keeps a leading U+FEFF, which a
/// JavaScript `trim()` would strip.
pub fn is_searchable(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_CHARS
}

/// Lowercase and split on whitespace. Empty segments never appear.
pub fn terms(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
