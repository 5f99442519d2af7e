//! Results page: URL seeding, view states, re-querying.

use super::common::{fixture_index, loaded, FailingSource, RecordingSink, FIXTURE_INDEX};
use fitsearch::{
    FileSource, IndexStatus, LocalePrefix, Navigation, ResultsPage, ResultsView, POPULAR_LINKS,
    RESULTS_PAGE_LIMIT,
};
use futures::executor::block_on;

fn loaded_page(url: &str) -> ResultsPage {
    let mut page = ResultsPage::from_url(url);
    page.mount();
    block_on(page.load(&FileSource::new(FIXTURE_INDEX), &RecordingSink::default()));
    page
}

#[test]
fn test_spinner_until_first_report() {
    let mut page = ResultsPage::from_url("/search?q=protein");
    assert_eq!(page.view(), ResultsView::Loading);

    // Mounted, query qualifies, index still missing: still waiting
    page.mount();
    assert_eq!(page.view(), ResultsView::Loading);
    assert_eq!(page.query(), None);
}

#[test]
fn test_no_query_parameter_shows_prompt() {
    let page = loaded_page("/search");
    assert_eq!(
        page.view(),
        ResultsView::Prompt {
            popular: POPULAR_LINKS
        }
    );
    assert_eq!(page.query().as_deref(), Some(""));
}

#[test]
fn test_query_from_url_is_prefilled_and_scored() {
    let page = loaded_page("/search?q=protein");
    assert_eq!(page.widget().query(), "protein");

    let ResultsView::Found { query, entries } = page.view() else {
        panic!("expected results");
    };
    assert_eq!(query, "protein");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].title, "Protein Calculator");
    assert_eq!(entries[0].type_label, "Calculator");
    assert_eq!(entries[0].category.as_deref(), Some("Nutrition"));
    assert_eq!(entries[1].type_label, "Article");
}

#[test]
fn test_tags_capped_at_three() {
    let page = loaded_page("/search?q=smart%20scale");
    let ResultsView::Found { entries, .. } = page.view() else {
        panic!("expected results");
    };
    let scales = entries
        .iter()
        .find(|e| e.url == "/blog/best-smart-scales")
        .expect("smart scale review should match");
    assert_eq!(scales.tags, vec!["smart scale", "body fat", "review"]);
}

#[test]
fn test_page_list_is_not_capped_at_dropdown_size() {
    let page = loaded_page("/search?q=calculator");
    assert_eq!(page.widget().config().max_results, RESULTS_PAGE_LIMIT);
    let ResultsView::Found { entries, .. } = page.view() else {
        panic!("expected results");
    };
    // four calculators plus the about page mentioning calculators
    assert_eq!(entries.len(), 5);
}

#[test]
fn test_requery_through_widget_updates_page() {
    let mut page = loaded_page("/search?q=protein");
    page.widget_mut().set_query("tdee");

    let ResultsView::Found { query, entries } = page.view() else {
        panic!("expected results");
    };
    assert_eq!(query, "tdee");
    assert_eq!(entries[0].url, "/calculators/tdee");

    page.widget_mut().set_query("");
    assert!(matches!(page.view(), ResultsView::Prompt { .. }));
}

#[test]
fn test_no_results_echoes_query() {
    let page = loaded_page("/search?q=yoga+pilates");
    assert_eq!(
        page.view(),
        ResultsView::NoResults {
            query: "yoga pilates".to_string(),
            popular: POPULAR_LINKS
        }
    );
}

#[test]
fn test_failed_index_looks_like_no_results() {
    let sink = RecordingSink::default();
    let mut page = ResultsPage::from_url("/search?q=bmi");
    page.mount();
    block_on(page.load(&FailingSource::new("503"), &sink));

    assert_eq!(page.widget().index_status(), Some(IndexStatus::Degraded));
    assert_eq!(sink.failures().len(), 1);
    assert!(matches!(page.view(), ResultsView::NoResults { .. }));
}

#[test]
fn test_open_result_localized() {
    let mut page =
        ResultsPage::from_url("/search?q=bmi").with_localizer(LocalePrefix::new("de", "en"));
    page.mount();
    page.widget_mut().receive_index(loaded(fixture_index()));

    assert_eq!(
        page.open(0),
        Some(Navigation::Document {
            url: "/de/calculators/bmi".to_string()
        })
    );
    assert_eq!(page.open(99), None);
}

#[test]
fn test_page_and_widget_hold_separate_copies() {
    let mut page = loaded_page("/search?q=protein");
    page.widget_mut().set_query("tdee");

    // The page learns about the new query only through the callback
    assert_eq!(page.widget().query(), "tdee");
    assert_eq!(page.query().as_deref(), Some("tdee"));
    assert_eq!(page.widget().results().len(), 1);
}
