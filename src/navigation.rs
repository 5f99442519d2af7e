//! Routes, query parameters and locale-aware paths.
//!
//! The results page lives at [`RESULTS_ROUTE`] and reads its query from the
//! [`QUERY_PARAM`] parameter. Root-relative document URLs go through a
//! [`PathLocalizer`] before navigation; absolute URLs never do.

/// Path of the full results page.
pub const RESULTS_ROUTE: &str = "/search";

/// Query-string parameter carrying the search text.
pub const QUERY_PARAM: &str = "q";

/// Where a widget interaction wants the host to go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Submitted query, headed for the results page.
    ResultsPage { url: String },
    /// A picked result.
    Document { url: String },
}

impl Navigation {
    pub fn url(&self) -> &str {
        match self {
            Navigation::ResultsPage { url } | Navigation::Document { url } => url,
        }
    }
}

/// Results page URL for `query`, percent-encoded as a URI component.
///
/// Spaces become `%20` and `%` becomes `%25`.
pub fn results_url(query: &str) -> String {
    format!(
        "{}?{}={}",
        RESULTS_ROUTE,
        QUERY_PARAM,
        urlencoding::encode(query)
    )
}

/// Read the search query out of a URL or a path with a query string.
///
/// Form-urlencoded decoding, so `+` is a space. A missing parameter (or a
/// URL without a query string at all) reads as the empty string.
pub fn initial_query(url: &str) -> String {
    let Some((_, rest)) = url.split_once('?') else {
        return String::new();
    };
    let query_string = rest.split('#').next().unwrap_or_default();

    url::form_urlencoded::parse(query_string.as_bytes())
        .find(|(key, _)| key == QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default()
}

/// `/path` but not `//host/path`.
pub fn is_root_relative(url: &str) -> bool {
    url.starts_with('/') && !url.starts_with("//")
}

/// Maps site paths to their locale-specific form.
pub trait PathLocalizer {
    fn localize(&self, path: &str) -> String;
}

/// Identity: single-locale sites.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocale;

impl PathLocalizer for NoLocale {
    fn localize(&self, path: &str) -> String {
        path.to_string()
    }
}

/// Prefix `/{locale}` unless the active locale is the default one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalePrefix {
    pub locale: String,
    pub default_locale: String,
}

impl LocalePrefix {
    pub fn new(locale: impl Into<String>, default_locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            default_locale: default_locale.into(),
        }
    }
}

impl PathLocalizer for LocalePrefix {
    fn localize(&self, path: &str) -> String {
        if self.locale == self.default_locale || !is_root_relative(path) {
            return path.to_string();
        }

        let prefix = format!("/{}", self.locale);
        let already_prefixed = path
            .strip_prefix(&prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with(['/', '?', '#']));
        if already_prefixed {
            return path.to_string();
        }

        if path == "/" {
            prefix
        } else {
            format!("{}{}", prefix, path)
        }
    }
}

/// Destination for a selected result: localized if root-relative.
pub fn document_target(url: &str, localizer: &dyn PathLocalizer) -> Navigation {
    let url = if is_root_relative(url) {
        localizer.localize(url)
    } else {
        url.to_string()
    };
    Navigation::Document { url }
}
