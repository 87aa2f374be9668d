// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the [`ConfigParser`] trait, the interface implemented
//! by the format-specific parsers (sectioned INI and flat properties). A
//! parser turns buffered text into a populated [`ConfigStore`].

use crate::domain::{ConfigStore, Result};

/// A trait for format-specific configuration parsers.
///
/// Parsing is lenient: lines that match no rule of the format are skipped
/// silently, so `parse` only fails when something below the text level goes
/// wrong. The store it returns is best-effort and complete for well-formed
/// input.
///
/// # Examples
///
/// ```
/// use textcfg::ports::ConfigParser;
/// use textcfg::domain::{ConfigStore, Result};
///
/// struct NullParser;
///
/// impl ConfigParser for NullParser {
///     fn format_name(&self) -> &str {
///         "null"
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["null"]
///     }
///
///     fn parse(&self, _content: &str) -> Result<ConfigStore> {
///         Ok(ConfigStore::new("null"))
///     }
/// }
/// ```
pub trait ConfigParser {
    /// The name of the format this parser understands.
    fn format_name(&self) -> &str;

    /// File extensions (without the leading dot) this parser claims.
    fn supported_extensions(&self) -> &[&str];

    /// Parses buffered text into a store.
    fn parse(&self, content: &str) -> Result<ConfigStore>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_SECTION;

    struct TestParser;

    impl ConfigParser for TestParser {
        fn format_name(&self) -> &str {
            "test"
        }

        fn supported_extensions(&self) -> &[&str] {
            &["test", "tst"]
        }

        fn parse(&self, content: &str) -> Result<ConfigStore> {
            let mut store = ConfigStore::new("test");
            for line in content.lines() {
                if let Some((key, value)) = line.split_once('=') {
                    store.put(DEFAULT_SECTION, key.trim(), value.trim());
                }
            }
            Ok(store)
        }
    }

    #[test]
    fn test_parser_contract() {
        let parser = TestParser;
        assert_eq!(parser.format_name(), "test");
        assert_eq!(parser.supported_extensions(), &["test", "tst"]);

        let store = parser.parse("a = 1").unwrap();
        assert!(store.has_key(DEFAULT_SECTION, "a"));
    }
}
