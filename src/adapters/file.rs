// SPDX-License-Identifier: MIT OR Apache-2.0

//! File-backed text source adapter.
//!
//! This module provides a [`TextSource`] that reads configuration text from a
//! file on disk, with optional discovery of the OS-appropriate default
//! configuration directory.

use crate::domain::{ConfigError, Result};
use crate::ports::TextSource;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed size for configuration files (10MB).
/// The whole source is buffered in memory, so an unbounded file is refused.
const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// A text source backed by a file path.
///
/// The file is read in one piece when the parser asks for it. A missing or
/// unreadable file is a fatal [`ConfigError::SourceError`]; the parse aborts
/// with no partial store.
///
/// # Examples
///
/// ```rust,no_run
/// use textcfg::adapters::FileSource;
/// use textcfg::ports::TextSource;
///
/// let source = FileSource::new("/etc/myapp/config.ini");
/// let text = source.read().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FileSource {
    /// Path to the configuration file
    path: PathBuf,
}

impl FileSource {
    /// Creates a file source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Creates a file source pointing at the default OS-appropriate location.
    ///
    /// This uses the `directories` crate to determine the configuration
    /// directory for the current operating system and looks for the given
    /// file name inside it.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization qualifier (e.g., "com.example")
    /// * `filename` - The configuration file name (e.g., "config.ini")
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use textcfg::adapters::FileSource;
    ///
    /// let source = FileSource::from_default_location("myapp", "com.example", "config.ini").unwrap();
    /// ```
    pub fn from_default_location(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::SourceError {
                source_name: "file".to_string(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;

        Ok(Self::new(proj_dirs.config_dir().join(filename)))
    }

    /// The path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn file_label(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("<unknown>")
    }
}

impl TextSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    fn read(&self) -> Result<String> {
        let metadata = fs::metadata(&self.path).map_err(|e| ConfigError::SourceError {
            source_name: "file".to_string(),
            message: format!("Failed to read file metadata: {}", self.file_label()),
            source: Some(Box::new(e)),
        })?;

        if metadata.len() > MAX_FILE_SIZE {
            return Err(ConfigError::SourceError {
                source_name: "file".to_string(),
                message: format!(
                    "Configuration file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_FILE_SIZE
                ),
                source: None,
            });
        }

        fs::read_to_string(&self.path).map_err(|e| ConfigError::SourceError {
            source_name: "file".to_string(),
            message: format!("Failed to read configuration file: {}", self.file_label()),
            source: Some(Box::new(e)),
        })
    }
}
