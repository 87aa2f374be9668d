// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flat (properties) format parser adapter.
//!
//! The flat format has no sections and no variable substitution, and it never
//! normalizes numbers: everything is stored as text and coercion is deferred
//! entirely to the typed accessors on [`crate::domain::Value`]. Comment
//! stripping, escape decoding and line continuation work exactly as in the
//! sectioned format.

use std::collections::HashMap;

use crate::domain::engine::{self, ParseOptions};
use crate::domain::{ConfigStore, Result};
use crate::ports::ConfigParser;

const OPTIONS: ParseOptions = ParseOptions {
    format_name: "properties",
    sections: false,
    normalize_numbers: false,
    substitute: false,
};

/// Parser for the flat configuration format.
///
/// # Examples
///
/// ```
/// use textcfg::adapters::PropertiesParser;
/// use textcfg::ports::ConfigParser;
/// use textcfg::domain::DEFAULT_SECTION;
///
/// let parser = PropertiesParser::new();
/// let store = parser.parse("name = demo\ncount = 3\n").unwrap();
/// assert_eq!(store.get(DEFAULT_SECTION, "count").unwrap().as_i64(), Some(3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertiesParser;

impl PropertiesParser {
    /// Creates a flat-format parser.
    pub fn new() -> Self {
        PropertiesParser
    }
}

impl ConfigParser for PropertiesParser {
    fn format_name(&self) -> &str {
        "properties"
    }

    fn supported_extensions(&self) -> &[&str] {
        &["properties"]
    }

    fn parse(&self, content: &str) -> Result<ConfigStore> {
        Ok(engine::parse(content, &OPTIONS, &HashMap::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Value, DEFAULT_SECTION};

    #[test]
    fn test_parser_metadata() {
        let parser = PropertiesParser::new();
        assert_eq!(parser.format_name(), "properties");
        assert_eq!(parser.supported_extensions(), &["properties"]);
    }

    #[test]
    fn test_everything_stored_as_text() {
        let parser = PropertiesParser::new();
        let store = parser.parse("n = 42\nf = 3.14\n").unwrap();
        assert_eq!(
            store.get(DEFAULT_SECTION, "n"),
            Some(&Value::Text("42".to_string()))
        );
        assert_eq!(
            store.get(DEFAULT_SECTION, "f"),
            Some(&Value::Text("3.14".to_string()))
        );
    }

    #[test]
    fn test_coercion_deferred_to_accessors() {
        let parser = PropertiesParser::new();
        let store = parser.parse("n = 42\n").unwrap();
        assert_eq!(store.get(DEFAULT_SECTION, "n").unwrap().as_i64(), Some(42));
    }

    #[test]
    fn test_comments_and_blanks_skipped() {
        let parser = PropertiesParser::new();
        let store = parser
            .parse("# header\n\n; another comment\nkey = value\n")
            .unwrap();
        assert_eq!(store.len(), 1);
    }
}
