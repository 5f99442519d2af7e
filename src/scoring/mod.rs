// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! The title dominates. A leading title hit is worth 25 points before the
//! calculator multiplier; body text earns half a point per mention.

mod core;
pub mod ranking;

pub use self::core::*;
pub use ranking::{compare_results, rank, DROPDOWN_LIMIT, RESULTS_PAGE_LIMIT};

use crate::types::{SearchIndex, SearchResult};

/// Anything that can turn (index, query) into an ordered result list.
///
/// The widget is generic over this so alternative rankers (and test spies)
/// can stand in for [`WeightedRanker`].
pub trait Ranker {
    fn rank(&self, index: &SearchIndex, query: &str, max_results: usize) -> Vec<SearchResult>;
}

/// The field-weighted scorer described in [`core`](self::core).
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedRanker;

impl Ranker for WeightedRanker {
    fn rank(&self, index: &SearchIndex, query: &str, max_results: usize) -> Vec<SearchResult> {
        rank(index, query, max_results)
    }
}
