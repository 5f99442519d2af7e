// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored documents become an ordered list.
//!
//! Score every document, drop the ones that scored nothing, sort by score
//! descending, keep the first `max_results`. The sort is stable and the index
//! iterates in key order, so equal scores come out in key order.

use crate::query::terms;
use crate::scoring::core::score_document;
use crate::types::{SearchIndex, SearchResult};
use std::cmp::Ordering;

/// Result cap for the inline dropdown.
pub const DROPDOWN_LIMIT: usize = 10;

/// Result cap for the full results page.
pub const RESULTS_PAGE_LIMIT: usize = 100;

/// Score the whole index against `query` and return the top `max_results`.
///
/// Pure and deterministic. Does not apply the minimum-length gate; a query
/// with no terms simply matches nothing.
pub fn rank(index: &SearchIndex, query: &str, max_results: usize) -> Vec<SearchResult> {
    let terms = terms(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<SearchResult> = index
        .iter()
        .filter_map(|(key, doc)| {
            let score = score_document(doc, &terms);
            (score > 0.0).then(|| SearchResult {
                key: key.clone(),
                document: doc.clone(),
                score,
            })
        })
        .collect();

    let matched = results.len();
    results.sort_by(compare_results);
    results.truncate(max_results);

    tracing::debug!(
        terms = terms.len(),
        candidates = index.len(),
        matched,
        returned = results.len(),
        "scored query"
    );

    results
}

/// Higher score first. Scores are never NaN, but treat it as equal anyway so
/// the sort stays total.
pub fn compare_results(a: &SearchResult, b: &SearchResult) -> Ordering {
    b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
}
