// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the error types that can occur when loading or writing
//! configuration data. All errors use `thiserror` for proper error handling
//! and conversion.
//!
//! Note that malformed configuration *lines* are not errors: the parser skips
//! them silently by design. Errors here cover the source boundary (a file that
//! cannot be opened or read) and write-back I/O.

use thiserror::Error;

/// The main error type for configuration operations.
///
/// This enum represents the errors that can occur when reading a configuration
/// source or writing a store back out. It is marked as `#[non_exhaustive]` to
/// allow for future additions without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use textcfg::domain::errors::ConfigError;
///
/// fn open_config() -> Result<String, ConfigError> {
///     Err(ConfigError::SourceError {
///         source_name: "file".to_string(),
///         message: "config.ini not found".to_string(),
///         source: None,
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// An error occurred while opening or reading a configuration source.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading or writing configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
