//! The full results page.
//!
//! Wraps its own [`SearchWidget`] (large result cap, auto-focused, seeded
//! from the URL) and keeps a separate copy of the latest `(query, results)`
//! pair, fed only through the widget's `on_search` callback. The page never
//! scores anything itself.

use crate::diagnostics::DiagnosticSink;
use crate::loader::IndexSource;
use crate::navigation::{initial_query, Navigation, PathLocalizer};
use crate::scoring::{Ranker, WeightedRanker, RESULTS_PAGE_LIMIT};
use crate::types::SearchResult;
use crate::widget::{SearchWidget, WidgetConfig};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

/// Tag badges shown per result.
pub const MAX_TAG_BADGES: usize = 3;

/// A fixed suggestion shown when there is nothing else to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PopularLink {
    pub title: &'static str,
    pub url: &'static str,
}

/// Suggestions for the empty-query prompt and the no-results panel.
pub const POPULAR_LINKS: &[PopularLink] = &[
    PopularLink {
        title: "BMI Calculator",
        url: "/calculators/bmi",
    },
    PopularLink {
        title: "Body Fat Calculator",
        url: "/calculators/body-fat",
    },
    PopularLink {
        title: "TDEE Calculator",
        url: "/calculators/tdee",
    },
    PopularLink {
        title: "Calorie Calculator",
        url: "/calculators/calories",
    },
    PopularLink {
        title: "Macro Calculator",
        url: "/calculators/macros",
    },
    PopularLink {
        title: "One Rep Max Calculator",
        url: "/calculators/one-rep-max",
    },
];

/// One row of the full results list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEntry {
    pub title: String,
    pub description: String,
    pub url: String,
    pub category: Option<String>,
    /// At most [`MAX_TAG_BADGES`].
    pub tags: Vec<String>,
    pub type_label: &'static str,
    pub icon: &'static str,
}

impl From<&SearchResult> for ResultEntry {
    fn from(result: &SearchResult) -> Self {
        let doc = &result.document;
        ResultEntry {
            title: doc.title.clone(),
            description: doc.description.clone(),
            url: doc.url.clone(),
            category: doc.category.clone(),
            tags: doc.tags.iter().take(MAX_TAG_BADGES).cloned().collect(),
            type_label: doc.kind.label(),
            icon: doc.kind.icon(),
        }
    }
}

/// What the page renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ResultsView {
    /// No callback from the widget yet.
    Loading,
    /// Empty query: "start typing" plus suggestions.
    Prompt { popular: &'static [PopularLink] },
    /// Ranked list for `query`.
    Found {
        query: String,
        entries: Vec<ResultEntry>,
    },
    /// Query produced nothing; echoed verbatim next to the suggestions.
    NoResults {
        query: String,
        popular: &'static [PopularLink],
    },
}

/// The page's own copy of the last search, separate from the widget's.
#[derive(Debug, Clone, Default, PartialEq)]
struct LatestSearch {
    query: String,
    results: Vec<SearchResult>,
}

pub struct ResultsPage<R: Ranker = WeightedRanker> {
    widget: SearchWidget<R>,
    latest: Rc<RefCell<Option<LatestSearch>>>,
}

impl ResultsPage<WeightedRanker> {
    /// Build the page for a URL like `/search?q=body%20fat`.
    pub fn from_url(url: &str) -> Self {
        Self::new(initial_query(url))
    }

    pub fn new(initial_query: impl Into<String>) -> Self {
        Self::with_ranker(initial_query, WeightedRanker)
    }
}

impl<R: Ranker> ResultsPage<R> {
    pub fn with_ranker(initial_query: impl Into<String>, ranker: R) -> Self {
        let config = WidgetConfig {
            max_results: RESULTS_PAGE_LIMIT,
            auto_focus: true,
            initial_query: initial_query.into(),
            ..WidgetConfig::default()
        };

        let latest: Rc<RefCell<Option<LatestSearch>>> = Rc::default();
        let sink = Rc::clone(&latest);
        let widget =
            SearchWidget::with_ranker(config, ranker).on_search(move |query, results| {
                *sink.borrow_mut() = Some(LatestSearch {
                    query: query.to_string(),
                    results: results.to_vec(),
                });
            });

        Self { widget, latest }
    }

    /// Localize root-relative result links opened from the page.
    pub fn with_localizer(mut self, localizer: impl PathLocalizer + 'static) -> Self {
        self.widget = self.widget.with_localizer(localizer);
        self
    }

    pub fn mount(&mut self) {
        self.widget.mount();
    }

    pub fn unmount(&mut self) {
        self.widget.unmount();
    }

    /// Fetch the index for the embedded widget.
    pub async fn load<S>(&mut self, source: &S, sink: &dyn DiagnosticSink)
    where
        S: IndexSource + ?Sized,
    {
        self.widget.load(source, sink).await;
    }

    /// The search box at the top of the page, for re-querying.
    pub fn widget(&self) -> &SearchWidget<R> {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut SearchWidget<R> {
        &mut self.widget
    }

    /// Query as last reported by the widget, if any.
    pub fn query(&self) -> Option<String> {
        self.latest.borrow().as_ref().map(|l| l.query.clone())
    }

    /// Open the result at `position` in the full list.
    pub fn open(&self, position: usize) -> Option<Navigation> {
        let latest = self.latest.borrow();
        let result = latest.as_ref()?.results.get(position)?;
        Some(self.widget.navigate_to(&result.document.url))
    }

    pub fn view(&self) -> ResultsView {
        let latest = self.latest.borrow();
        let Some(latest) = latest.as_ref() else {
            return ResultsView::Loading;
        };

        if latest.query.trim().is_empty() {
            return ResultsView::Prompt {
                popular: POPULAR_LINKS,
            };
        }

        if latest.results.is_empty() {
            return ResultsView::NoResults {
                query: latest.query.clone(),
                popular: POPULAR_LINKS,
            };
        }

        ResultsView::Found {
            query: latest.query.clone(),
            entries: latest.results.iter().map(ResultEntry::from).collect(),
        }
    }
}
