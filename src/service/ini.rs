// SPDX-License-Identifier: MIT OR Apache-2.0

//! High-level facade for sectioned (INI) configuration documents.
//!
//! [`IniConfig`] ties a text source, the sectioned parser and the resulting
//! store together: load from a file, a raw string or an argument list, read
//! and mutate values, and serialize the document back out.

use indexmap::IndexMap;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::adapters::{ArgsSource, FileSource, IniParser, StringSource};
use crate::domain::{escape, ConfigStore, Result, Value};
use crate::ports::{ConfigParser, TextSource};

/// A sectioned configuration document.
///
/// The substitution environment is fixed when the document is created:
/// [`IniConfig::new`] resolves nothing, [`IniConfig::from_env`] snapshots the
/// process environment, [`IniConfig::with_vars`] takes an explicit map.
///
/// # Examples
///
/// ```
/// use textcfg::service::IniConfig;
///
/// let mut config = IniConfig::new();
/// config.load_str("[server]\nhost = localhost\nport = 8080\n").unwrap();
///
/// assert_eq!(config.get("server", "port").unwrap().as_i64(), Some(8080));
/// assert_eq!(config.sections(), vec!["server"]);
/// ```
#[derive(Debug, Clone)]
pub struct IniConfig {
    parser: IniParser,
    store: ConfigStore,
    /// Backing file, remembered by the path-based load and save operations
    resource: Option<PathBuf>,
}

impl IniConfig {
    /// Creates an empty document with no substitution environment.
    pub fn new() -> Self {
        Self::with_parser(IniParser::new())
    }

    /// Creates an empty document whose substitution environment is a snapshot
    /// of the current process environment.
    pub fn from_env() -> Self {
        Self::with_parser(IniParser::from_env())
    }

    /// Creates an empty document with an explicit substitution environment.
    pub fn with_vars(vars: HashMap<String, String>) -> Self {
        Self::with_parser(IniParser::with_vars(vars))
    }

    fn with_parser(parser: IniParser) -> Self {
        Self {
            store: ConfigStore::new(parser.format_name()),
            parser,
            resource: None,
        }
    }

    /// Loads the document from any text source, replacing current content.
    pub fn load(&mut self, source: &dyn TextSource) -> Result<()> {
        let text = source.read()?;
        self.store = self.parser.parse(&text)?;
        Ok(())
    }

    /// Loads the document from a file and remembers it as the backing file.
    pub fn load_path<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let source = FileSource::new(path.as_ref());
        self.load(&source)?;
        self.resource = Some(path.as_ref().to_path_buf());
        Ok(())
    }

    /// Loads the document from raw text.
    pub fn load_str(&mut self, text: &str) -> Result<()> {
        self.load(&StringSource::new(text))
    }

    /// Loads the document from a list of arguments, one line per argument.
    pub fn load_args<S: AsRef<str>>(&mut self, args: Vec<S>) -> Result<()> {
        self.load(&ArgsSource::new(args))
    }

    /// The opaque diagnostic identifier of the underlying store.
    pub fn id(&self) -> &str {
        self.store.id()
    }

    /// The backing file path, if this document was loaded from one.
    pub fn resource(&self) -> Option<&Path> {
        self.resource.as_deref()
    }

    /// Looks up a value in a section.
    pub fn get(&self, section: &str, key: &str) -> Option<&Value> {
        self.store.get(section, key)
    }

    /// Finds the first value for `key` across all sections in order.
    pub fn get_value(&self, key: &str) -> Option<&Value> {
        self.store.find(key)
    }

    /// Whether any section holds the given key.
    pub fn has_key(&self, key: &str) -> bool {
        self.store.has_key_anywhere(key)
    }

    /// Whether the given section holds the given key.
    pub fn has_key_in(&self, section: &str, key: &str) -> bool {
        self.store.has_key(section, key)
    }

    /// Inserts or replaces a value (last write wins).
    pub fn put(&mut self, section: &str, key: &str, value: impl Into<Value>) {
        self.store.put(section, key, value);
    }

    /// Removes one key.
    pub fn remove(&mut self, section: &str, key: &str) -> Option<Value> {
        self.store.remove(section, key)
    }

    /// Removes a whole section and returns its entries.
    pub fn remove_section(&mut self, section: &str) -> Option<IndexMap<String, Value>> {
        self.store.remove_section(section)
    }

    /// Section names in insertion order.
    pub fn sections(&self) -> Vec<&str> {
        self.store.sections()
    }

    /// Keys of one section in insertion order.
    pub fn keys(&self, section: &str) -> Vec<&str> {
        self.store.keys(section)
    }

    /// The entries of one section, if present.
    pub fn section(&self, name: &str) -> Option<&IndexMap<String, Value>> {
        self.store.section(name)
    }

    /// A snapshot of one section restricted to keys with the given prefix.
    pub fn section_with_prefix(&self, name: &str, prefix: &str) -> IndexMap<String, Value> {
        self.store
            .section(name)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|(key, _)| key.starts_with(prefix))
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Serializes the document: each section as `[name]` followed by its
    /// `key = value` lines, with a blank line after each section block.
    ///
    /// Keys and values are re-escaped so that reloading the output reproduces
    /// the stored text exactly. An optional header comment is emitted first as
    /// a `#` line. Write failures surface as errors; no partial output is
    /// reported as success.
    pub fn write<W: Write>(&self, writer: &mut W, header_comment: Option<&str>) -> Result<()> {
        if let Some(comment) = header_comment {
            writeln!(writer, "#{}", comment)?;
        }
        for (section, entries) in self.store.iter() {
            writeln!(writer, "[{}]", section)?;
            for (key, value) in entries {
                writeln!(
                    writer,
                    "{} = {}",
                    escape::encode_key(key),
                    escape::encode_value(&value.canonical())
                )?;
            }
            writeln!(writer)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Serializes the document to a file, creating parent directories as
    /// needed, and remembers it as the backing file.
    pub fn save_as<P: AsRef<Path>>(
        &mut self,
        path: P,
        header_comment: Option<&str>,
    ) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(File::create(path)?);
        self.write(&mut writer, header_comment)?;
        self.resource = Some(path.to_path_buf());
        tracing::debug!(id = self.id(), path = %path.display(), "saved ini document");
        Ok(())
    }
}

impl Default for IniConfig {
    fn default() -> Self {
        Self::new()
    }
}
