//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures and test doubles to avoid duplication.

#![doc(hidden)]

use crate::diagnostics::DiagnosticSink;
use crate::error::LoadError;
use crate::loader::{IndexSource, IndexStatus, LoadOutcome};
use crate::scoring::{Ranker, WeightedRanker};
use crate::types::{DocumentType, SearchDocument, SearchIndex, SearchResult};
use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Create a document with just a title and type; everything else empty.
pub fn make_doc(title: &str, kind: DocumentType) -> SearchDocument {
    SearchDocument {
        title: title.to_string(),
        description: String::new(),
        url: String::new(),
        kind,
        category: None,
        tags: vec![],
        content: None,
    }
}

/// Build an index from `(key, document)` pairs.
pub fn make_index<K: Into<String>>(docs: Vec<(K, SearchDocument)>) -> SearchIndex {
    docs.into_iter().map(|(k, d)| (k.into(), d)).collect()
}

/// The canonical single-calculator index.
pub fn bmi_doc() -> SearchDocument {
    SearchDocument {
        title: "BMI Calculator".to_string(),
        description: "Calculate your Body Mass Index".to_string(),
        url: "/calculators/bmi".to_string(),
        kind: DocumentType::Calculator,
        category: Some("Body Composition".to_string()),
        tags: vec!["bmi".to_string(), "weight".to_string(), "health".to_string()],
        content: None,
    }
}

pub fn bmi_index() -> SearchIndex {
    make_index(vec![("bmi", bmi_doc())])
}

/// Wrap an index as a successful load.
pub fn loaded(index: SearchIndex) -> LoadOutcome {
    LoadOutcome {
        status: IndexStatus::Loaded {
            documents: index.len(),
        },
        index,
    }
}

/// Sink that remembers every failure message.
#[derive(Debug, Default)]
pub struct RecordingSink {
    failures: RefCell<Vec<String>>,
}

impl RecordingSink {
    pub fn failures(&self) -> Vec<String> {
        self.failures.borrow().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn index_load_failed(&self, error: &LoadError) {
        self.failures.borrow_mut().push(error.to_string());
    }
}

/// Source whose fetch always rejects, like a dropped network request.
#[derive(Debug, Clone)]
pub struct FailingSource {
    message: String,
}

impl FailingSource {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[async_trait(?Send)]
impl IndexSource for FailingSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        Err(LoadError::Fetch(self.message.clone()))
    }
}

/// In-memory source that counts how often it was fetched.
#[derive(Debug)]
pub struct CountingSource {
    body: String,
    fetches: Cell<usize>,
}

impl CountingSource {
    pub fn new(index: &SearchIndex) -> Self {
        Self {
            body: serde_json::to_string(index).unwrap_or_default(),
            fetches: Cell::new(0),
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetches.get()
    }
}

#[async_trait(?Send)]
impl IndexSource for CountingSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        self.fetches.set(self.fetches.get() + 1);
        Ok(self.body.clone())
    }
}

/// Ranker spy: delegates to [`WeightedRanker`] and counts calls.
#[derive(Debug, Clone, Default)]
pub struct CountingRanker {
    calls: Rc<Cell<usize>>,
}

impl CountingRanker {
    /// Shared counter, readable after the ranker moves into a widget.
    pub fn counter(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.calls)
    }
}

impl Ranker for CountingRanker {
    fn rank(&self, index: &SearchIndex, query: &str, max_results: usize) -> Vec<SearchResult> {
        self.calls.set(self.calls.get() + 1);
        WeightedRanker.rank(index, query, max_results)
    }
}
