//! Widget state transitions, callbacks and the mount guard.

use super::common::{
    bmi_index, fixture_index, loaded, make_doc, make_index, ready_widget, CountingRanker,
    CountingSource, RecordingSink,
};
use fitsearch::{
    Dropdown, DocumentType, SearchResult, SearchWidget, WidgetConfig, WidgetState,
    DROPDOWN_LIMIT,
};
use futures::executor::block_on;
use std::cell::RefCell;
use std::rc::Rc;

type Calls = Rc<RefCell<Vec<(String, usize)>>>;

fn recording_widget(config: WidgetConfig) -> (SearchWidget, Calls) {
    let calls: Calls = Rc::default();
    let log = Rc::clone(&calls);
    let widget = SearchWidget::new(config).on_search(move |query: &str, results: &[SearchResult]| {
        log.borrow_mut().push((query.to_string(), results.len()));
    });
    (widget, calls)
}

#[test]
fn test_short_queries_never_reach_the_ranker() {
    let ranker = CountingRanker::default();
    let calls = ranker.counter();
    let mut widget = SearchWidget::with_ranker(WidgetConfig::default(), ranker);
    widget.mount();
    widget.receive_index(loaded(fixture_index()));

    for query in ["", "b", " b ", "\t", "  x"] {
        widget.set_query(query);
        assert!(widget.results().is_empty(), "query {:?} produced results", query);
        assert!(!widget.is_open());
    }
    assert_eq!(calls.get(), 0);

    widget.set_query("bm");
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_short_query_reports_empty_results() {
    let (mut widget, calls) = recording_widget(WidgetConfig::default());
    widget.mount();
    widget.receive_index(loaded(bmi_index()));
    widget.set_query("bmi");
    widget.set_query("b");

    let calls = calls.borrow();
    assert_eq!(calls.last(), Some(&("b".to_string(), 0)));
}

#[test]
fn test_clearing_input_closes_and_resets() {
    let mut widget = ready_widget(fixture_index());
    widget.set_query("protein");
    assert!(widget.is_open());
    assert_eq!(widget.results().len(), 2);

    widget.set_query("");
    assert!(!widget.is_open());
    assert!(widget.results().is_empty());
    assert_eq!(widget.state(), WidgetState::Idle);
    assert!(widget.dropdown().is_none());
}

#[test]
fn test_click_outside_then_focus_reopens_same_results() {
    let ranker = CountingRanker::default();
    let rank_calls = ranker.counter();
    let source = CountingSource::new(&fixture_index());
    let sink = RecordingSink::default();

    let mut widget = SearchWidget::with_ranker(WidgetConfig::default(), ranker);
    widget.mount();
    block_on(widget.load(&source, &sink));
    widget.set_query("body fat");
    let before = widget.results().to_vec();
    let scored = rank_calls.get();

    widget.pointer_down(true);
    assert!(widget.is_open(), "click inside keeps the dropdown");

    widget.pointer_down(false);
    assert!(!widget.is_open());
    assert_eq!(widget.query(), "body fat");

    widget.focus();
    assert!(widget.is_open());
    assert_eq!(widget.results(), before.as_slice());
    assert_eq!(rank_calls.get(), scored, "focus must not rescore");
    assert_eq!(source.fetches(), 1);
}

#[test]
fn test_focus_with_short_query_stays_closed() {
    let mut widget = ready_widget(bmi_index());
    widget.set_query("b");
    widget.focus();
    assert!(!widget.is_open());
    assert!(widget.is_focused());
}

#[test]
fn test_blur_does_not_close() {
    let mut widget = ready_widget(bmi_index());
    widget.set_query("bmi");
    widget.blur();
    assert!(widget.is_open());
    assert!(!widget.is_focused());
}

#[test]
fn test_loading_then_results() {
    let (mut widget, calls) = recording_widget(WidgetConfig::default());
    widget.mount();
    widget.set_query("tdee");

    assert_eq!(widget.state(), WidgetState::Loading);
    assert!(widget.is_loading());
    assert_eq!(widget.dropdown(), Some(Dropdown::Loading));
    // mount reported the empty initial query; nothing since
    assert_eq!(calls.borrow().len(), 1);

    widget.receive_index(loaded(fixture_index()));
    assert_eq!(widget.state(), WidgetState::Results);
    assert!(!widget.is_loading());
    assert_eq!(calls.borrow().last(), Some(&("tdee".to_string(), 1)));
}

#[test]
fn test_callback_gets_capped_list() {
    let docs = (0..15)
        .map(|i| (format!("guide-{:02}", i), make_doc("Stretching guide", DocumentType::Article)))
        .collect();
    let (mut widget, calls) = recording_widget(WidgetConfig::default());
    widget.mount();
    widget.receive_index(loaded(make_index(docs)));
    widget.set_query("stretching");

    assert_eq!(calls.borrow().last(), Some(&("stretching".to_string(), DROPDOWN_LIMIT)));
    assert_eq!(widget.results().len(), DROPDOWN_LIMIT);
}

#[test]
fn test_initial_query_scored_once_index_arrives() {
    let (mut widget, calls) = recording_widget(WidgetConfig {
        initial_query: "bmi".to_string(),
        ..WidgetConfig::default()
    });
    widget.mount();
    assert_eq!(widget.state(), WidgetState::Loading);
    assert!(calls.borrow().is_empty());

    widget.receive_index(loaded(bmi_index()));
    assert_eq!(calls.borrow().as_slice(), &[("bmi".to_string(), 1)]);
}

#[test]
fn test_index_fetched_once_per_instance() {
    let source = CountingSource::new(&bmi_index());
    let sink = RecordingSink::default();
    let mut widget = SearchWidget::default();
    widget.mount();

    block_on(widget.load(&source, &sink));
    block_on(widget.load(&source, &sink));
    assert_eq!(source.fetches(), 1);
}

#[test]
fn test_each_widget_holds_its_own_index() {
    let mut first = ready_widget(bmi_index());
    let mut second = ready_widget(fixture_index());

    first.set_query("protein");
    second.set_query("protein");
    assert!(first.results().is_empty());
    assert_eq!(second.results().len(), 2);
}

#[test]
fn test_late_index_after_unmount_is_dropped() {
    let (mut widget, calls) = recording_widget(WidgetConfig::default());
    widget.mount();
    widget.set_query("bmi");
    let reported = calls.borrow().len();

    widget.unmount();
    widget.receive_index(loaded(bmi_index()));

    assert!(widget.index_status().is_none());
    assert_eq!(calls.borrow().len(), reported);
    assert!(!widget.is_open());
}

#[test]
fn test_input_after_unmount_is_ignored() {
    let (mut widget, calls) = recording_widget(WidgetConfig::default());
    widget.mount();
    widget.receive_index(loaded(bmi_index()));
    let reported = calls.borrow().len();

    widget.unmount();
    widget.set_query("bmi");

    assert_eq!(calls.borrow().len(), reported);
    assert!(!widget.is_open());
    assert!(widget.results().is_empty());
    assert_eq!(widget.state(), WidgetState::Idle);
}

#[test]
fn test_dismissed_while_loading_reports_idle() {
    let mut widget = SearchWidget::default();
    widget.mount();
    widget.set_query("tdee");
    widget.pointer_down(false);

    assert_eq!(widget.state(), WidgetState::Idle);
    assert_eq!(widget.dropdown(), None);
}
