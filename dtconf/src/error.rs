//! Error types for the dtconf library.
//!
//! This module provides the error hierarchy for configuration resolution,
//! using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a dtconf error.
///
/// # Examples
///
/// ```
/// use dtconf::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(5)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the dtconf library.
///
/// Only [`Error::ConfigurationLoading`] aborts a resolution pass. Missing
/// user bundles and unknown keys are reported through logging instead.
#[derive(Debug, Error)]
pub enum Error {
    /// The default configuration resource could not be loaded.
    #[error("unable to load configuration resource '{resource}': {reason}")]
    ConfigurationLoading {
        /// Name of the resource that failed to load.
        resource: String,
        /// The reason the load failed.
        reason: String,
    },

    /// `.properties` text could not be parsed.
    #[error("malformed properties at line {line}: {reason}")]
    MalformedProperties {
        /// One-based line where the offending entry starts.
        line: usize,
        /// What is wrong with the entry.
        reason: String,
    },

    /// A locale tag could not be parsed.
    #[error("invalid locale '{value}': {reason}")]
    InvalidLocale {
        /// The rejected locale tag.
        value: String,
        /// The reason the tag is invalid.
        reason: String,
    },

    /// A configuration value could not be coerced to the requested type.
    #[error("invalid value '{value}' for '{key}': expected {expected}")]
    InvalidValue {
        /// Canonical name of the configuration key.
        key: String,
        /// The raw value.
        value: String,
        /// Description of the expected type.
        expected: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A settings file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// Output could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error aborts a resolution pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use dtconf::Error;
    ///
    /// let err = Error::ConfigurationLoading {
    ///     resource: "datatables-default.properties".to_string(),
    ///     reason: "not found".to_string(),
    /// };
    /// assert!(err.is_loading_failure());
    /// ```
    #[must_use]
    pub fn is_loading_failure(&self) -> bool {
        matches!(self, Self::ConfigurationLoading { .. })
    }
}
