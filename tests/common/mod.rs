//! Shared test utilities and fixtures.

#![allow(dead_code)]

use fitsearch::{parse_index, SearchIndex, SearchWidget, WidgetConfig};
use std::fs;

// Re-export canonical test utilities from fitsearch::testing
pub use fitsearch::testing::{
    bmi_doc, bmi_index, loaded, make_doc, make_index, CountingRanker, CountingSource,
    FailingSource, RecordingSink,
};

/// Fixture index with calculators, articles and pages.
pub const FIXTURE_INDEX: &str = "data/fixtures/search-index.json";

/// Load the fixture index, panicking if it is missing or malformed.
pub fn fixture_index() -> SearchIndex {
    let body = fs::read_to_string(FIXTURE_INDEX).expect("Failed to read fixture index");
    parse_index(&body).expect("Failed to parse fixture index")
}

/// A mounted widget with `index` already delivered.
pub fn ready_widget(index: SearchIndex) -> SearchWidget {
    let mut widget = SearchWidget::new(WidgetConfig::default());
    widget.mount();
    widget.receive_index(loaded(index));
    widget
}

/// Keys of a result list, in order.
pub fn keys(results: &[fitsearch::SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.key.as_str()).collect()
}

/// Float comparison for scores that went through the calculator multiplier.
pub fn assert_score(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "score {} != expected {}",
        actual,
        expected
    );
}
