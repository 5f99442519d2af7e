use crate::scoring::DROPDOWN_LIMIT;
use serde::Deserialize;

/// Default input placeholder.
pub const DEFAULT_PLACEHOLDER: &str = "Search calculators, articles...";

/// Host-settable widget options.
///
/// Every field has a default, so a host can pass a partial object:
///
/// ```
/// use fitsearch::WidgetConfig;
///
/// let config: WidgetConfig = serde_json::from_str(r#"{"maxResults": 5}"#).unwrap();
/// assert_eq!(config.max_results, 5);
/// assert!(config.show_icon);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Input placeholder text.
    pub placeholder: String,
    /// Result cap handed to the ranker (default: 10).
    pub max_results: usize,
    /// Overrides the container class.
    pub class_name: Option<String>,
    /// Show the magnifier icon inside the input (default: true).
    pub show_icon: bool,
    /// Focus the input on mount (default: false).
    pub auto_focus: bool,
    /// Query the input starts with.
    pub initial_query: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            max_results: DROPDOWN_LIMIT,
            class_name: None,
            show_icon: true,
            auto_focus: false,
            initial_query: String::new(),
        }
    }
}
