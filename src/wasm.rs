//! WebAssembly bindings for the search widget.
//!
//! The host page owns the network: it fetches [`DEFAULT_INDEX_PATH`] itself
//! and hands the body (or the failure) to `receiveIndex` / `indexFailed`.
//! Both go through the same degrade path as native loads, so a failed fetch
//! is logged once and leaves an empty index behind.

use crate::diagnostics::TracingSink;
use crate::error::LoadError;
use crate::loader::{degrade, parse_index, DEFAULT_INDEX_PATH};
use crate::navigation::LocalePrefix;
use crate::types::SearchResult;
use crate::widget::{SearchWidget, WidgetConfig, WidgetState};
use serde::{Deserialize, Serialize};
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

/// Constructor options passed from JavaScript: widget config plus locale.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct HostOptions {
    #[serde(flatten)]
    widget: WidgetConfig,
    locale: Option<String>,
    default_locale: Option<String>,
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Where the host should fetch the index from.
#[wasm_bindgen(js_name = indexPath)]
pub fn index_path() -> String {
    DEFAULT_INDEX_PATH.to_string()
}

/// WASM-accessible search widget. One instance per search box.
#[wasm_bindgen]
pub struct SiteSearch {
    widget: SearchWidget,
    sink: TracingSink,
}

#[wasm_bindgen]
impl SiteSearch {
    /// Create and mount a widget.
    ///
    /// `options` is a partial `WidgetConfig` (camelCase) with optional
    /// `locale` / `defaultLocale`. `on_search` receives `(query, results)`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        options: JsValue,
        on_search: Option<js_sys::Function>,
    ) -> Result<SiteSearch, JsValue> {
        let options: HostOptions = if options.is_undefined() || options.is_null() {
            HostOptions::default()
        } else {
            from_value(options).map_err(|e| e.to_string())?
        };

        let mut widget = SearchWidget::new(options.widget);
        if let Some(locale) = options.locale {
            let default_locale = options.default_locale.unwrap_or_else(|| locale.clone());
            widget = widget.with_localizer(LocalePrefix::new(locale, default_locale));
        }
        if let Some(callback) = on_search {
            widget = widget.on_search(move |query: &str, results: &[SearchResult]| {
                let payload = to_js(results).unwrap_or(JsValue::NULL);
                if callback
                    .call2(&JsValue::NULL, &JsValue::from_str(query), &payload)
                    .is_err()
                {
                    tracing::debug!("onSearch callback threw");
                }
            });
        }
        widget.mount();

        Ok(SiteSearch {
            widget,
            sink: TracingSink::default(),
        })
    }

    /// Deliver the fetched index body.
    #[wasm_bindgen(js_name = receiveIndex)]
    pub fn receive_index(&mut self, body: &str) {
        let outcome = degrade(parse_index(body), &self.sink);
        self.widget.receive_index(outcome);
    }

    /// Report that the fetch itself failed.
    #[wasm_bindgen(js_name = indexFailed)]
    pub fn index_failed(&mut self, message: String) {
        let outcome = degrade(Err(LoadError::Fetch(message)), &self.sink);
        self.widget.receive_index(outcome);
    }

    #[wasm_bindgen(js_name = setQuery)]
    pub fn set_query(&mut self, query: String) {
        self.widget.set_query(query);
    }

    pub fn focus(&mut self) {
        self.widget.focus();
    }

    pub fn blur(&mut self) {
        self.widget.blur();
    }

    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, inside: bool) {
        self.widget.pointer_down(inside);
    }

    /// URL to navigate to, or `undefined` when the query is too short.
    pub fn submit(&mut self) -> Option<String> {
        self.widget.submit().map(|nav| nav.url().to_string())
    }

    /// URL of the selected result, or `undefined` for a bad position.
    pub fn select(&mut self, position: usize) -> Option<String> {
        self.widget.select(position).map(|nav| nav.url().to_string())
    }

    pub fn unmount(&mut self) {
        self.widget.unmount();
    }

    /// Dropdown view model, or `null` while hidden.
    pub fn dropdown(&self) -> Result<JsValue, JsValue> {
        match self.widget.dropdown() {
            Some(dropdown) => to_js(&dropdown),
            None => Ok(JsValue::NULL),
        }
    }

    /// `"idle"`, `"loading"` or `"results"`.
    pub fn state(&self) -> String {
        match self.widget.state() {
            WidgetState::Idle => "idle",
            WidgetState::Loading => "loading",
            WidgetState::Results => "results",
        }
        .to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn query(&self) -> String {
        self.widget.query().to_string()
    }

    #[wasm_bindgen(getter, js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.widget.is_open()
    }

    #[wasm_bindgen(getter, js_name = isLoading)]
    pub fn is_loading(&self) -> bool {
        self.widget.is_loading()
    }

    #[wasm_bindgen(getter)]
    pub fn placeholder(&self) -> String {
        self.widget.config().placeholder.clone()
    }

    #[wasm_bindgen(getter, js_name = className)]
    pub fn class_name(&self) -> Option<String> {
        self.widget.config().class_name.clone()
    }

    #[wasm_bindgen(getter, js_name = showIcon)]
    pub fn show_icon(&self) -> bool {
        self.widget.config().show_icon
    }

    #[wasm_bindgen(getter, js_name = autoFocus)]
    pub fn auto_focus(&self) -> bool {
        self.widget.config().auto_focus
    }
}
