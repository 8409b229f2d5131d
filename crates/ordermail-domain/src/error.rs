//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for ordermail
#[derive(Error, Debug)]
pub enum Error {
    /// No builder is registered under the derived key
    #[error("No builder registered under key '{key}'. Available builders: {available:?}")]
    Resolution {
        /// The key that failed to resolve
        key: String,
        /// Keys that are registered, for a helpful error message
        available: Vec<String>,
    },

    /// A second builder was registered under an already-taken key
    #[error("Builder already registered under key '{key}'")]
    DuplicateBuilder {
        /// The key that was registered twice
        key: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
    },
}

impl Error {
    /// Create a resolution error for an unregistered key
    pub fn resolution<S: Into<String>>(key: S, available: Vec<String>) -> Self {
        Self::Resolution {
            key: key.into(),
            available,
        }
    }

    /// Create a duplicate-builder error
    pub fn duplicate_builder<S: Into<String>>(key: S) -> Self {
        Self::DuplicateBuilder { key: key.into() }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
