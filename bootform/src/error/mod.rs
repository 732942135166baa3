//! Error types and error handling

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used across the library
pub type Result<T> = std::result::Result<T, BootformError>;

/// Library error type
///
/// Rendering itself never fails; every variant here comes from locating or
/// reading the model metadata, or from loading configuration.
#[derive(Debug, Error)]
pub enum BootformError {
    /// Schema file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Schema document is malformed
    #[error("Failed to parse {}: {message}", path.display())]
    Parse {
        /// Document origin (file path, or `<inline>` for strings)
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// No app with this label exists in the schema
    #[error("Unknown app: '{0}'")]
    UnknownApp(String),

    /// The app exists but has no model with this name
    #[error("App '{app}' has no model named '{model}'")]
    UnknownModel {
        /// App label that was searched
        app: String,
        /// Model name that was requested
        model: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<figment::Error> for BootformError {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}
