// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory text source adapters.
//!
//! This module provides [`TextSource`] implementations for configuration text
//! that is already in memory: a raw string, or a list of command-line
//! arguments treated as one line each.

use crate::domain::Result;
use crate::ports::TextSource;

/// A text source wrapping a raw in-memory string.
///
/// # Examples
///
/// ```
/// use textcfg::adapters::StringSource;
/// use textcfg::ports::TextSource;
///
/// let source = StringSource::new("key = value");
/// assert_eq!(source.read().unwrap(), "key = value");
/// ```
#[derive(Debug, Clone)]
pub struct StringSource {
    text: String,
}

impl StringSource {
    /// Wraps the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TextSource for StringSource {
    fn name(&self) -> &str {
        "string"
    }

    fn read(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}

/// A text source built from command-line arguments.
///
/// Each argument is treated as one configuration line; the arguments are
/// joined with newlines before parsing, so `--` style flag handling is left
/// entirely to the caller.
///
/// # Examples
///
/// ```
/// use textcfg::adapters::ArgsSource;
/// use textcfg::ports::TextSource;
///
/// let source = ArgsSource::new(vec!["host=localhost", "port=8080"]);
/// assert_eq!(source.read().unwrap(), "host=localhost\nport=8080");
/// ```
#[derive(Debug, Clone)]
pub struct ArgsSource {
    args: Vec<String>,
}

impl ArgsSource {
    /// Wraps the given argument list.
    pub fn new<S: AsRef<str>>(args: Vec<S>) -> Self {
        Self {
            args: args.iter().map(|a| a.as_ref().to_string()).collect(),
        }
    }

    /// Builds a source from the process's own arguments, skipping the program
    /// name.
    pub fn from_env_args() -> Self {
        Self {
            args: std::env::args().skip(1).collect(),
        }
    }
}

impl TextSource for ArgsSource {
    fn name(&self) -> &str {
        "args"
    }

    fn read(&self) -> Result<String> {
        Ok(self.args.join("\n"))
    }
}
