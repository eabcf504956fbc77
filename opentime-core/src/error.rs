//! Error types for opentime-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from building or querying the window registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A time-of-day string is not `H:MM` / `HH:MM` or is out of range.
    #[error("invalid time of day '{value}': {reason}")]
    InvalidFormat { value: String, reason: &'static str },

    /// Two definitions share the same id.
    #[error("duplicate window id '{id}'")]
    DuplicateId { id: String },

    /// No window is registered under the requested id.
    #[error("window '{id}' not found")]
    NotFound { id: String },

    /// The window table file did not exist at the given path.
    #[error("window config not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Underlying I/O failure while reading a window table.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error on load, with the offending file.
    #[error("failed to parse window config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl RegistryError {
    pub(crate) fn invalid(value: &str, reason: &'static str) -> Self {
        RegistryError::InvalidFormat {
            value: value.to_owned(),
            reason,
        }
    }
}
