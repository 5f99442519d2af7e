// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Every document starts at zero and collects points per query term from
//! each field it carries. All comparisons run on lowercased field text.
//!
//! | Field       | Points per term                                        |
//! |-------------|--------------------------------------------------------|
//! | Title       | 10 on substring, +15 if equal or a leading whole word  |
//! | Description | 5 on substring                                         |
//! | Content     | 0.5 per non-overlapping occurrence                     |
//! | Tag         | 8 per tag containing the term, +5 per tag equal to it  |
//! | Category    | 7 on substring                                         |
//! | URL         | 3 on substring                                         |
//!
//! Calculators get the whole sum multiplied by 1.2, once, at the end.
//!
//! The title bonus is what keeps "BMI Calculator" above a long article that
//! mentions "bmi" forty times in its body: a single title hit is worth 25
//! points, the same as fifty body mentions.

use crate::types::{DocumentType, SearchDocument};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Term appears anywhere in the title.
pub const TITLE_MATCH: f64 = 10.0;

/// Title equals the term, or starts with `term + " "`.
pub const TITLE_LEADING_BONUS: f64 = 15.0;

/// Term appears anywhere in the description.
pub const DESCRIPTION_MATCH: f64 = 5.0;

/// Per non-overlapping occurrence in the content body.
pub const CONTENT_OCCURRENCE: f64 = 0.5;

/// Tag contains the term.
pub const TAG_MATCH: f64 = 8.0;

/// Tag equals the term (on top of [`TAG_MATCH`]).
pub const TAG_EXACT_BONUS: f64 = 5.0;

/// Term appears in the category.
pub const CATEGORY_MATCH: f64 = 7.0;

/// Term appears in the URL.
pub const URL_MATCH: f64 = 3.0;

/// Applied to the final sum for calculator documents.
pub const CALCULATOR_MULTIPLIER: f64 = 1.2;

/// Score one document against pre-normalized terms.
///
/// `terms` must already be lowercased (see [`crate::query::terms`]). Returns
/// 0.0 when nothing matches; the ranking step drops those.
pub fn score_document(doc: &SearchDocument, terms: &[String]) -> f64 {
    let title = doc.title.to_lowercase();
    let description = doc.description.to_lowercase();
    let url = doc.url.to_lowercase();
    let content = doc.content.as_deref().map(str::to_lowercase);
    let category = doc.category.as_deref().map(str::to_lowercase);
    let tags: Vec<String> = doc.tags.iter().map(|t| t.to_lowercase()).collect();

    let mut score = 0.0;

    for term in terms {
        score += title_score(&title, term);

        if description.contains(term.as_str()) {
            score += DESCRIPTION_MATCH;
        }

        if let Some(content) = &content {
            score += CONTENT_OCCURRENCE * count_occurrences(content, term) as f64;
        }

        for tag in &tags {
            score += tag_score(tag, term);
        }

        if category.as_deref().is_some_and(|c| c.contains(term.as_str())) {
            score += CATEGORY_MATCH;
        }

        if url.contains(term.as_str()) {
            score += URL_MATCH;
        }
    }

    if doc.kind == DocumentType::Calculator {
        score *= CALCULATOR_MULTIPLIER;
    }

    score
}

/// Title contribution for one term against a lowercased title.
pub fn title_score(title: &str, term: &str) -> f64 {
    if !title.contains(term) {
        return 0.0;
    }
    if is_leading_match(title, term) {
        TITLE_MATCH + TITLE_LEADING_BONUS
    } else {
        TITLE_MATCH
    }
}

/// Tag contribution for one term against one lowercased tag.
pub fn tag_score(tag: &str, term: &str) -> f64 {
    if !tag.contains(term) {
        return 0.0;
    }
    if tag == term {
        TAG_MATCH + TAG_EXACT_BONUS
    } else {
        TAG_MATCH
    }
}

/// Exact title, or the term followed by a space at the very start.
fn is_leading_match(title: &str, term: &str) -> bool {
    title == term
        || title
            .strip_prefix(term)
            .is_some_and(|rest| rest.starts_with(' '))
}

/// Non-overlapping occurrences of `term` in `haystack`.
///
/// Equivalent to splitting on the term and counting segments minus one.
/// The empty term counts zero rather than "between every character".
pub fn count_occurrences(haystack: &str, term: &str) -> usize {
    if term.is_empty() {
        return 0;
    }
    haystack.matches(term).count()
}
