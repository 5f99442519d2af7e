// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a site search index.
//!
//! The index is a flat JSON object: document key → document. Nothing here is
//! validated beyond what serde needs to parse it. A document with an empty
//! title and description is still a document; it just rarely scores.
//!
//! | Rust Type        | JSON shape                                   |
//! |------------------|----------------------------------------------|
//! | `DocumentType`   | `"calculator" \| "article" \| "page"`        |
//! | `SearchDocument` | `{ title, description, url, type, ... }`     |
//! | `SearchIndex`    | `{ "<key>": SearchDocument, ... }`           |
//! | `SearchResult`   | `SearchDocument` + `score` (+ `key`)         |

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

/// What kind of page a document points at.
///
/// Drives the icon and label shown next to a result, and the calculator
/// score multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Calculator,
    Article,
    Page,
}

impl DocumentType {
    /// Lowercase wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Calculator => "calculator",
            DocumentType::Article => "article",
            DocumentType::Page => "page",
        }
    }

    /// Human-readable label for badges.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Calculator => "Calculator",
            DocumentType::Article => "Article",
            DocumentType::Page => "Page",
        }
    }

    /// Icon name used by the presentation layer.
    pub fn icon(&self) -> &'static str {
        match self {
            DocumentType::Calculator => "calculator",
            DocumentType::Article => "file-text",
            DocumentType::Page => "file",
        }
    }
}

/// One indexable unit: a calculator, an article, or a plain page.
///
/// Optional fields are tolerated when missing and contribute nothing to the
/// score. Unknown fields in the index JSON are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchDocument {
    pub title: String,
    pub description: String,
    /// Root-relative path or absolute URL.
    pub url: String,
    #[serde(rename = "type")]
    pub kind: DocumentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Long-form body text. Matchable, but weighted far below the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

// =============================================================================
// INDEX
// =============================================================================

/// Document key → document.
///
/// Backed by a `BTreeMap`, so iteration is in key order. The scorer walks the
/// index in this order and sorts stably, which means equal scores always come
/// out in key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchIndex(BTreeMap<String, SearchDocument>);

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&SearchDocument> {
        self.0.get(key)
    }

    /// Insert a document, returning the one previously stored under `key`.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        doc: SearchDocument,
    ) -> Option<SearchDocument> {
        self.0.insert(key.into(), doc)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, SearchDocument> {
        self.0.iter()
    }

    pub fn documents(&self) -> btree_map::Values<'_, String, SearchDocument> {
        self.0.values()
    }
}

impl FromIterator<(String, SearchDocument)> for SearchIndex {
    fn from_iter<I: IntoIterator<Item = (String, SearchDocument)>>(iter: I) -> Self {
        SearchIndex(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SearchIndex {
    type Item = (&'a String, &'a SearchDocument);
    type IntoIter = btree_map::Iter<'a, String, SearchDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// A document plus the score it earned for one query.
///
/// Created fresh on every scoring pass and never mutated afterwards. When
/// serialized the document fields are flattened, so JSON consumers see the
/// original document shape with `key` and `score` added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub key: String,
    #[serde(flatten)]
    pub document: SearchDocument,
    pub score: f64,
}
