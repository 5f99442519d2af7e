use crate::navigation::results_url;
use crate::types::SearchResult;
use serde::Serialize;

/// What the dropdown under the input shows, when it is open.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Dropdown {
    /// Query qualifies but the index has not arrived yet.
    Loading,
    /// Nothing matched; the query is echoed back verbatim.
    NoResults { query: String },
    #[serde(rename_all = "camelCase")]
    Results {
        items: Vec<DropdownItem>,
        /// "View all results" link to the results page.
        view_all_url: String,
    },
}

impl Dropdown {
    pub(crate) fn from_results(query: &str, results: &[SearchResult]) -> Self {
        if results.is_empty() {
            return Dropdown::NoResults {
                query: query.to_string(),
            };
        }
        Dropdown::Results {
            items: results.iter().map(DropdownItem::from).collect(),
            view_all_url: results_url(query),
        }
    }
}

/// One row in the dropdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DropdownItem {
    pub title: String,
    pub description: String,
    pub url: String,
    pub category: Option<String>,
    pub type_label: &'static str,
    pub icon: &'static str,
}

impl From<&SearchResult> for DropdownItem {
    fn from(result: &SearchResult) -> Self {
        let doc = &result.document;
        DropdownItem {
            title: doc.title.clone(),
            description: doc.description.clone(),
            url: doc.url.clone(),
            category: doc.category.clone(),
            type_label: doc.kind.label(),
            icon: doc.kind.icon(),
        }
    }
}
