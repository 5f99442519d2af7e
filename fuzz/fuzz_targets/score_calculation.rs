// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for score calculation invariants.
//!
//! Scores must be finite, positive, sorted and deterministic for any query
//! against the fixture index, including queries full of regex metacharacters
//! and multi-byte text.

#![no_main]

use arbitrary::Arbitrary;
use fitsearch::{parse_index, rank, score_document, terms, SearchIndex};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    query: String,
    max_results: u8,
}

fuzz_target!(|input: Input| {
    static INDEX: std::sync::OnceLock<SearchIndex> = std::sync::OnceLock::new();
    let index = INDEX.get_or_init(|| {
        let body = include_str!("../../data/fixtures/search-index.json");
        parse_index(body).expect("fixture index parses")
    });

    let query: String = input.query.chars().take(200).collect();
    let max = usize::from(input.max_results);

    let first = rank(index, &query, max);
    let second = rank(index, &query, max);

    // INVARIANT 1: deterministic
    assert_eq!(first, second, "ranking is not deterministic for {:?}", query);

    // INVARIANT 2: capped
    assert!(first.len() <= max);

    // INVARIANT 3: finite, positive, descending
    for r in &first {
        assert!(r.score.is_finite(), "non-finite score for {:?}", query);
        assert!(r.score > 0.0, "zero score returned for {:?}", query);
    }
    for pair in first.windows(2) {
        assert!(pair[0].score >= pair[1].score, "results out of order for {:?}", query);
    }

    // INVARIANT 4: every document's score is non-negative, returned or not
    let q = terms(&query);
    for doc in index.documents() {
        let score = score_document(doc, &q);
        assert!(score.is_finite() && score >= 0.0);
    }
});
