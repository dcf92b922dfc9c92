use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading or writing metadata documents and settings.
#[derive(Debug, Error)]
pub enum LibraryError {
    /// I/O error on a specific file
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The settings file exists but is not valid TOML
    #[error("Invalid settings file {path}: {message}")]
    Settings { path: PathBuf, message: String },

    /// Serializing settings failed
    #[error("Could not write settings: {0}")]
    SettingsWrite(String),
}

impl LibraryError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn settings(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Settings {
            path: path.into(),
            message: message.into(),
        }
    }
}
