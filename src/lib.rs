// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Client-side site search for calculator and article sites.
//!
//! The whole index is one static JSON object fetched once per widget. Queries
//! are scored in memory against every document with fixed field weights, so
//! there is no server and no prebuilt inverted structure.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  loader.rs  │────▶│  scoring/    │────▶│  widget/     │────▶│  results.rs  │
//! │ (load_index)│     │ (rank)       │     │ (SearchWidget│     │ (ResultsPage)│
//! └─────────────┘     └──────────────┘     │  state)      │     └──────────────┘
//!        │                   ▲             └──────────────┘
//!        ▼                   │                    │
//!  diagnostics.rs        query.rs           navigation.rs
//! ```
//!
//! # Usage
//!
//! ```
//! use fitsearch::{load_index, rank, NullSink, StaticSource};
//!
//! let json = r#"{"bmi": {
//!     "title": "BMI Calculator",
//!     "description": "Calculate your Body Mass Index",
//!     "url": "/calculators/bmi",
//!     "type": "calculator"
//! }}"#;
//! let index = futures::executor::block_on(load_index(&StaticSource::new(json), &NullSink));
//! let results = rank(&index, "bmi", 10);
//! assert_eq!(results[0].document.url, "/calculators/bmi");
//! ```

pub mod diagnostics;
pub mod error;
pub mod loader;
pub mod navigation;
pub mod query;
pub mod results;
pub mod scoring;
pub mod testing;
pub mod types;
pub mod widget;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use diagnostics::{
    DiagnosticSink, NullSink, TracingSink, RESULTS_PAGE_COMPONENT, WIDGET_COMPONENT,
};
pub use error::LoadError;
pub use loader::{
    degrade, fetch_index, load_index, parse_index, FileSource, IndexSource, IndexStatus,
    LoadOutcome, StaticSource, DEFAULT_INDEX_PATH,
};
pub use navigation::{
    initial_query, results_url, LocalePrefix, Navigation, NoLocale, PathLocalizer, QUERY_PARAM,
    RESULTS_ROUTE,
};
pub use query::{is_searchable, terms, MIN_QUERY_CHARS};
pub use results::{PopularLink, ResultEntry, ResultsPage, ResultsView, POPULAR_LINKS};
pub use scoring::{
    rank, score_document, Ranker, WeightedRanker, CALCULATOR_MULTIPLIER, DROPDOWN_LIMIT,
    RESULTS_PAGE_LIMIT,
};
pub use types::{DocumentType, SearchDocument, SearchIndex, SearchResult};
pub use widget::{Dropdown, DropdownItem, SearchWidget, WidgetConfig, WidgetState};
