use thiserror::Error;

use metaed_lib::LibraryError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Document or settings error from the library
    #[error("{0}")]
    Library(#[from] LibraryError),

    /// Logger could not be installed
    #[error("Logging setup failed: {0}")]
    Logging(String),

    /// JSON output failed
    #[error("JSON error: {0}")]
    Json(String),
}

impl CliError {
    pub(crate) fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }

    pub(crate) fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }
}
