use std::path::PathBuf;
use thiserror::Error;

/// Why an index could not be loaded.
///
/// Never surfaced to end users: the loader reports it to a
/// [`DiagnosticSink`](crate::diagnostics::DiagnosticSink) and falls back to an
/// empty index.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read index {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch index: {0}")]
    Fetch(String),

    #[error("invalid index JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
