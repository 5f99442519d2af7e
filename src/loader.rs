// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index loading: one fetch, one parse, never an error.
//!
//! The index is a single static JSON document. Whatever goes wrong while
//! fetching or parsing it, callers get an empty [`SearchIndex`] back and the
//! failure goes to the injected [`DiagnosticSink`]. Downstream that looks like
//! "no results", which is the intended degradation.
//!
//! Document shape is not validated beyond what serde requires. A document
//! with a missing required field, or an unknown `type`, fails the whole parse.

use crate::diagnostics::DiagnosticSink;
use crate::error::LoadError;
use crate::types::SearchIndex;
use async_trait::async_trait;
use std::path::PathBuf;

/// Well-known path the site serves its index from.
pub const DEFAULT_INDEX_PATH: &str = "/search-index.json";

/// Something that can produce the raw index JSON.
///
/// `?Send` because loads happen on a single-threaded event loop.
#[async_trait(?Send)]
pub trait IndexSource {
    async fn fetch(&self) -> Result<String, LoadError>;
}

/// Reads the index from a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait(?Send)]
impl IndexSource for FileSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        std::fs::read_to_string(&self.path).map_err(|source| LoadError::Read {
            path: self.path.clone(),
            source,
        })
    }
}

/// Index JSON already in memory, e.g. a body the host page fetched.
#[derive(Debug, Clone)]
pub struct StaticSource {
    body: String,
}

impl StaticSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

#[async_trait(?Send)]
impl IndexSource for StaticSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        Ok(self.body.clone())
    }
}

/// Did the index arrive, or are we running on an empty stand-in?
///
/// The UI treats both the same. This exists so logs and tests can tell them
/// apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexStatus {
    Loaded { documents: usize },
    Degraded,
}

/// What a load produced.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    pub index: SearchIndex,
    pub status: IndexStatus,
}

/// Parse index JSON. The only fallible step that is not I/O.
pub fn parse_index(body: &str) -> Result<SearchIndex, LoadError> {
    Ok(serde_json::from_str(body)?)
}

/// Collapse a load result into an outcome, reporting failures to `sink`.
pub fn degrade(result: Result<SearchIndex, LoadError>, sink: &dyn DiagnosticSink) -> LoadOutcome {
    match result {
        Ok(index) => LoadOutcome {
            status: IndexStatus::Loaded {
                documents: index.len(),
            },
            index,
        },
        Err(error) => {
            sink.index_load_failed(&error);
            LoadOutcome {
                index: SearchIndex::default(),
                status: IndexStatus::Degraded,
            }
        }
    }
}

/// Fetch and parse once, keeping the status around.
pub async fn fetch_index<S>(source: &S, sink: &dyn DiagnosticSink) -> LoadOutcome
where
    S: IndexSource + ?Sized,
{
    let result = match source.fetch().await {
        Ok(body) => parse_index(&body),
        Err(error) => Err(error),
    };
    let outcome = degrade(result, sink);
    tracing::debug!(status = ?outcome.status, "search index load finished");
    outcome
}

/// Fetch and parse once. Failures yield an empty index.
pub async fn load_index<S>(source: &S, sink: &dyn DiagnosticSink) -> SearchIndex
where
    S: IndexSource + ?Sized,
{
    fetch_index(source, sink).await.index
}
