// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sectioned (INI) format parser adapter.
//!
//! The sectioned format recognizes `[section]` headers, normalizes
//! numeric-looking values into numbers, and resolves `${name}` variable
//! references against an explicit environment snapshot plus the keys already
//! parsed into the current section.

use std::collections::HashMap;

use crate::domain::engine::{self, ParseOptions};
use crate::domain::{ConfigStore, Result};
use crate::ports::ConfigParser;

const OPTIONS: ParseOptions = ParseOptions {
    format_name: "ini",
    sections: true,
    normalize_numbers: true,
    substitute: true,
};

/// Parser for the sectioned configuration format.
///
/// The substitution environment is part of the parser and is snapshotted when
/// the parser is built, never read from ambient process state during a parse.
/// [`IniParser::new`] starts with no variables at all; use
/// [`IniParser::from_env`] to capture the process environment, or
/// [`IniParser::with_vars`] for an explicit map.
///
/// # Examples
///
/// ```
/// use textcfg::adapters::IniParser;
/// use textcfg::ports::ConfigParser;
///
/// let parser = IniParser::new();
/// let store = parser.parse("[db]\nhost = localhost\nport = 5432\n").unwrap();
/// assert_eq!(store.get("db", "port").unwrap().as_i64(), Some(5432));
/// ```
#[derive(Debug, Clone, Default)]
pub struct IniParser {
    /// Substitution variables, snapshotted at construction
    vars: HashMap<String, String>,
}

impl IniParser {
    /// Creates a parser with an empty substitution environment.
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    /// Creates a parser whose environment is a snapshot of the process
    /// environment variables, taken now.
    pub fn from_env() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Creates a parser with an explicit substitution environment.
    pub fn with_vars(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }

    /// Layers additional properties over the current environment; existing
    /// names are overridden.
    pub fn add_vars(mut self, vars: impl IntoIterator<Item = (String, String)>) -> Self {
        self.vars.extend(vars);
        self
    }
}

impl ConfigParser for IniParser {
    fn format_name(&self) -> &str {
        "ini"
    }

    fn supported_extensions(&self) -> &[&str] {
        &["ini"]
    }

    fn parse(&self, content: &str) -> Result<ConfigStore> {
        Ok(engine::parse(content, &OPTIONS, &self.vars))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Value, DEFAULT_SECTION};

    #[test]
    fn test_parser_metadata() {
        let parser = IniParser::new();
        assert_eq!(parser.format_name(), "ini");
        assert_eq!(parser.supported_extensions(), &["ini"]);
    }

    #[test]
    fn test_sections_and_numbers() {
        let parser = IniParser::new();
        let store = parser
            .parse("[server]\nhost = localhost\nport = 8080\nratio = 0.5\n")
            .unwrap();
        assert_eq!(
            store.get("server", "host"),
            Some(&Value::Text("localhost".to_string()))
        );
        assert_eq!(store.get("server", "port"), Some(&Value::Int(8080)));
        assert_eq!(store.get("server", "ratio"), Some(&Value::Float(0.5)));
    }

    #[test]
    fn test_new_has_no_ambient_environment() {
        // Even with PATH set in the real environment, new() resolves nothing.
        let parser = IniParser::new();
        let store = parser.parse("p = ${PATH}\n").unwrap();
        assert_eq!(
            store.get(DEFAULT_SECTION, "p"),
            Some(&Value::Text("${PATH}".to_string()))
        );
    }

    #[test]
    fn test_with_vars_substitutes() {
        let mut vars = HashMap::new();
        vars.insert("HOME".to_string(), "/home/u".to_string());
        let parser = IniParser::with_vars(vars);
        let store = parser.parse("path = ${HOME}/cfg\n").unwrap();
        assert_eq!(
            store.get(DEFAULT_SECTION, "path"),
            Some(&Value::Text("/home/u/cfg".to_string()))
        );
    }

    #[test]
    fn test_add_vars_overrides() {
        let mut base = HashMap::new();
        base.insert("NAME".to_string(), "old".to_string());
        let parser = IniParser::with_vars(base)
            .add_vars([("NAME".to_string(), "new".to_string())]);
        let store = parser.parse("v = ${NAME}\n").unwrap();
        assert_eq!(
            store.get(DEFAULT_SECTION, "v"),
            Some(&Value::Text("new".to_string()))
        );
    }
}
