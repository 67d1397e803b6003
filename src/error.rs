//! reader failures.

use std::io;

/// why a metric could not be read this tick.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// the file could not be opened, or the command could not be run.
    #[error("failed to read {path}: {error}")]
    Unavailable {
        path: String,
        #[source]
        error: io::Error,
    },

    /// the content did not have the expected shape.
    #[error("failed to parse {path}: {detail}")]
    Parse { path: String, detail: String },

    /// the content parsed, but cannot produce a value (e.g. a zero total).
    #[error("degenerate input from {path}: {detail}")]
    Degenerate { path: String, detail: String },
}

// === impl ReadError ===

impl ReadError {
    pub(crate) fn unavailable(path: impl Into<String>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |error| Self::Unavailable { path, error }
    }

    pub(crate) fn parse(path: impl Into<String>, detail: impl ToString) -> Self {
        Self::Parse {
            path: path.into(),
            detail: detail.to_string(),
        }
    }

    pub(crate) fn degenerate(path: impl Into<String>, detail: impl ToString) -> Self {
        Self::Degenerate {
            path: path.into(),
            detail: detail.to_string(),
        }
    }
}
