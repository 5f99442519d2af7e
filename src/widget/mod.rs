// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The interactive search box: query state, dropdown visibility, navigation.
//!
//! Headless. The host feeds it events (keystrokes, focus, clicks, submit,
//! item selection, index delivery) and reads back state and a dropdown view
//! model. Rescoring is synchronous on every qualifying change; there is no
//! debounce here.
//!
//! # States
//!
//! ```text
//!            query >= 2, no index          index arrives
//!   Idle ─────────────────────────▶ Loading ─────────────▶ Results
//!    ▲                                                        │
//!    └──────────── query < 2, or click outside ───────────────┘
//! ```
//!
//! Clicking outside only hides the dropdown; focusing the input again shows
//! the last results without rescoring.

mod config;
mod dropdown;

pub use config::{WidgetConfig, DEFAULT_PLACEHOLDER};
pub use dropdown::{Dropdown, DropdownItem};

use crate::diagnostics::DiagnosticSink;
use crate::loader::{fetch_index, IndexSource, IndexStatus, LoadOutcome};
use crate::navigation::{document_target, results_url, Navigation, NoLocale, PathLocalizer};
use crate::query::is_searchable;
use crate::scoring::{Ranker, WeightedRanker};
use crate::types::{SearchIndex, SearchResult};

/// Observer for every result set the widget produces: `(query, results)`.
pub type SearchCallback = Box<dyn FnMut(&str, &[SearchResult])>;

/// Coarse widget state, derived from the flags below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    /// Dropdown hidden.
    Idle,
    /// Query qualifies, index still in flight.
    Loading,
    /// Dropdown open over the latest result set (possibly empty).
    Results,
}

/// One search box instance. Owns its own copy of the index.
pub struct SearchWidget<R: Ranker = WeightedRanker> {
    config: WidgetConfig,
    ranker: R,
    localizer: Box<dyn PathLocalizer>,
    on_search: Option<SearchCallback>,

    query: String,
    index: Option<SearchIndex>,
    index_status: Option<IndexStatus>,
    results: Vec<SearchResult>,

    is_open: bool,
    is_loading: bool,
    focused: bool,
    mounted: bool,
    load_started: bool,
}

impl SearchWidget<WeightedRanker> {
    pub fn new(config: WidgetConfig) -> Self {
        Self::with_ranker(config, WeightedRanker)
    }
}

impl Default for SearchWidget<WeightedRanker> {
    fn default() -> Self {
        Self::new(WidgetConfig::default())
    }
}

impl<R: Ranker> SearchWidget<R> {
    pub fn with_ranker(config: WidgetConfig, ranker: R) -> Self {
        let query = config.initial_query.clone();
        Self {
            config,
            ranker,
            localizer: Box::new(NoLocale),
            on_search: None,
            query,
            index: None,
            index_status: None,
            results: Vec::new(),
            is_open: false,
            is_loading: false,
            focused: false,
            mounted: false,
            load_started: false,
        }
    }

    /// Route root-relative result URLs through `localizer` on selection.
    pub fn with_localizer(mut self, localizer: impl PathLocalizer + 'static) -> Self {
        self.localizer = Box::new(localizer);
        self
    }

    /// Register the `(query, results)` observer.
    pub fn on_search(mut self, callback: impl FnMut(&str, &[SearchResult]) + 'static) -> Self {
        self.on_search = Some(Box::new(callback));
        self
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Attach to the page: honors `auto_focus` and evaluates the initial query.
    pub fn mount(&mut self) {
        self.mounted = true;
        if self.config.auto_focus {
            self.focused = true;
        }
        self.refresh();
    }

    /// Detach. Index deliveries and input events that arrive afterwards
    /// neither rescore nor reach the `on_search` observer.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.is_open = false;
    }

    /// Fetch the index once and apply it.
    ///
    /// A second call is a no-op: each instance fetches at most once in its
    /// lifetime and there is no retry after a failure.
    pub async fn load<S>(&mut self, source: &S, sink: &dyn DiagnosticSink)
    where
        S: IndexSource + ?Sized,
    {
        if self.load_started {
            tracing::debug!("search index already requested; skipping fetch");
            return;
        }
        self.load_started = true;
        let outcome = fetch_index(source, sink).await;
        self.receive_index(outcome);
    }

    /// Apply a finished load. Ignored once unmounted.
    pub fn receive_index(&mut self, outcome: LoadOutcome) {
        if !self.mounted {
            tracing::debug!(
                status = ?outcome.status,
                "discarding search index delivered after unmount"
            );
            return;
        }
        self.index_status = Some(outcome.status);
        self.index = Some(outcome.index);
        self.refresh();
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Keystroke: the query updates immediately and results follow.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refresh();
    }

    /// Input gained focus. Reopens over the last results if the query still
    /// qualifies; nothing is rescored.
    pub fn focus(&mut self) {
        if !self.mounted {
            return;
        }
        self.focused = true;
        if is_searchable(&self.query) {
            self.is_open = true;
        }
    }

    /// Input lost focus. The dropdown stays until a click lands outside.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Document-level pointer press. `inside` is whether it hit the widget's
    /// root element.
    pub fn pointer_down(&mut self, inside: bool) {
        if !inside && self.is_open {
            self.is_open = false;
            tracing::debug!("search dropdown closed by outside click");
        }
    }

    /// Form submit. Short queries do nothing.
    pub fn submit(&mut self) -> Option<Navigation> {
        if !is_searchable(&self.query) {
            return None;
        }
        self.is_open = false;
        Some(Navigation::ResultsPage {
            url: results_url(&self.query),
        })
    }

    /// Pick the result at `position` in the current list.
    pub fn select(&mut self, position: usize) -> Option<Navigation> {
        let url = self.results.get(position)?.document.url.clone();
        self.is_open = false;
        Some(self.navigate_to(&url))
    }

    /// Navigation target for a result URL: root-relative paths are localized,
    /// absolute URLs pass through.
    pub fn navigate_to(&self, url: &str) -> Navigation {
        document_target(url, self.localizer.as_ref())
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// `None` until a load finishes.
    pub fn index_status(&self) -> Option<IndexStatus> {
        self.index_status
    }

    /// A hidden dropdown is `Idle` even while the index is still in flight.
    pub fn state(&self) -> WidgetState {
        if !self.is_open {
            WidgetState::Idle
        } else if self.is_loading {
            WidgetState::Loading
        } else {
            WidgetState::Results
        }
    }

    /// View model for the dropdown, `None` while hidden.
    pub fn dropdown(&self) -> Option<Dropdown> {
        if !self.is_open {
            return None;
        }
        if self.is_loading {
            return Some(Dropdown::Loading);
        }
        Some(Dropdown::from_results(&self.query, &self.results))
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Re-derive results from `(query, index)`. Runs after every change to
    /// either.
    fn refresh(&mut self) {
        if !self.mounted {
            return;
        }

        if !is_searchable(&self.query) {
            self.results.clear();
            self.is_open = false;
            self.is_loading = false;
            self.notify();
            return;
        }

        let Some(index) = &self.index else {
            self.is_loading = true;
            self.is_open = true;
            return;
        };

        self.results = self
            .ranker
            .rank(index, &self.query, self.config.max_results);
        self.is_loading = false;
        self.is_open = true;
        tracing::debug!(
            query = %self.query,
            results = self.results.len(),
            "search results updated"
        );
        self.notify();
    }

    fn notify(&mut self) {
        if let Some(callback) = self.on_search.as_mut() {
            callback(&self.query, &self.results);
        }
    }
}
