//! Where load failures get reported.
//!
//! Index loading never returns an error to its caller. Instead it hands the
//! failure to a [`DiagnosticSink`] once and carries on with an empty index.
//! The sink is passed in explicitly; there is no process-wide logger.

use crate::error::LoadError;

/// Component tag for the inline search widget.
pub const WIDGET_COMPONENT: &str = "SearchWidget";

/// Component tag for the full results page.
pub const RESULTS_PAGE_COMPONENT: &str = "SearchResultsPage";

/// Receives diagnostics from the index loader.
pub trait DiagnosticSink {
    /// Called exactly once per failed load.
    fn index_load_failed(&self, error: &LoadError);
}

/// Sink that emits a `tracing` warning tagged with a component name.
#[derive(Debug, Clone, Copy)]
pub struct TracingSink {
    component: &'static str,
}

impl TracingSink {
    pub const fn new(component: &'static str) -> Self {
        Self { component }
    }

    pub fn component(&self) -> &'static str {
        self.component
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new(WIDGET_COMPONENT)
    }
}

impl DiagnosticSink for TracingSink {
    fn index_load_failed(&self, error: &LoadError) {
        tracing::warn!(component = self.component, error = %error, "failed to load search index");
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn index_load_failed(&self, _error: &LoadError) {}
}
