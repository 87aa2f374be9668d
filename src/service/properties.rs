// SPDX-License-Identifier: MIT OR Apache-2.0

//! High-level facade for flat (properties) configuration documents.
//!
//! [`PropertiesConfig`] wraps the flat parser and its store: one implicit
//! section, text-only values, and the array/list/map decoders on read. It can
//! optionally auto-save mutations back to the backing file.

use indexmap::IndexMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::adapters::{ArgsSource, FileSource, PropertiesParser, StringSource};
use crate::domain::{escape, ConfigStore, Result, Value, DEFAULT_SECTION};
use crate::ports::{ConfigParser, TextSource};

/// A flat configuration document.
///
/// # Examples
///
/// ```
/// use textcfg::service::PropertiesConfig;
///
/// let mut config = PropertiesConfig::new();
/// config.load_str("name = demo\nretries = 3\n").unwrap();
///
/// assert_eq!(config.get("retries").unwrap().as_i64(), Some(3));
/// assert!(config.has_key("name"));
/// ```
#[derive(Debug, Clone)]
pub struct PropertiesConfig {
    parser: PropertiesParser,
    store: ConfigStore,
    /// Backing file, remembered by the path-based load and save operations
    resource: Option<PathBuf>,
    auto_save: bool,
}

impl PropertiesConfig {
    /// Creates an empty document.
    pub fn new() -> Self {
        let parser = PropertiesParser::new();
        Self {
            store: ConfigStore::new(parser.format_name()),
            parser,
            resource: None,
            auto_save: false,
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

    /// The backing file path, if any.
    pub fn resource(&self) -> Option<&Path> {
        self.resource.as_deref()
    }

    /// Looks up a value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.store.get(DEFAULT_SECTION, key)
    }

    /// Whether the document holds the given key.
    pub fn has_key(&self, key: &str) -> bool {
        self.store.has_key(DEFAULT_SECTION, key)
    }

    /// Adds a new key, refusing to overwrite an existing one.
    ///
    /// Use [`PropertiesConfig::replace`] to overwrite.
    pub fn add(&mut self, key: &str, value: impl Into<Value>) {
        if self.has_key(key) {
            tracing::debug!(key, "key already present, not duplicating");
            return;
        }
        self.store.put(DEFAULT_SECTION, key, value);
        self.maybe_auto_save();
    }

    /// Inserts or replaces a key.
    pub fn replace(&mut self, key: &str, value: impl Into<Value>) {
        self.store.put(DEFAULT_SECTION, key, value);
        self.maybe_auto_save();
    }

    /// Removes a key, reporting the removed value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let removed = self.store.remove(DEFAULT_SECTION, key);
        if removed.is_some() {
            self.maybe_auto_save();
        } else {
            tracing::debug!(key, "key not found, nothing removed");
        }
        removed
    }

    /// Decodes a `[...]` wrapped value as an ordered list of strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use textcfg::service::PropertiesConfig;
    ///
    /// let mut config = PropertiesConfig::new();
    /// config.load_str(r#"arr = ["a","b","c"]"#).unwrap();
    /// assert_eq!(
    ///     config.get_array("arr"),
    ///     Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
    /// );
    /// ```
    pub fn get_array(&self, key: &str) -> Option<Vec<String>> {
        self.get(key)?.as_array()
    }

    /// Alias for [`PropertiesConfig::get_array`], mirroring list-style use.
    pub fn get_list(&self, key: &str) -> Option<Vec<String>> {
        self.get_array(key)
    }

    /// Decodes a `{...}` wrapped value as a `key:value` map.
    ///
    /// One level of `[...]` nesting inside values is supported; deeper
    /// nesting is unspecified.
    pub fn get_map(&self, key: &str) -> Option<IndexMap<String, String>> {
        self.get(key)?.as_map()
    }

    /// Iterates entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.store
            .section(DEFAULT_SECTION)
            .into_iter()
            .flat_map(|entries| entries.iter())
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> Vec<&str> {
        self.store.keys(DEFAULT_SECTION)
    }

    /// Renders every entry as `key:value`, in insertion order.
    pub fn properties(&self) -> Vec<String> {
        self.entries()
            .map(|(key, value)| format!("{}:{}", key, value.canonical()))
            .collect()
    }

    /// Number of keys in the document.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the document has no keys.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Drops every key.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Persists every mutation to the backing file as it happens.
    pub fn enable_auto_save(&mut self) {
        self.auto_save = true;
        tracing::debug!(id = self.id(), "auto-save enabled");
    }

    /// Stops persisting mutations automatically.
    pub fn disable_auto_save(&mut self) {
        self.auto_save = false;
        tracing::debug!(id = self.id(), "auto-save disabled");
    }

    /// Whether auto-save is active.
    pub fn auto_save(&self) -> bool {
        self.auto_save
    }

    /// Serializes the document as `key = value` lines in store order.
    ///
    /// Keys and values are re-escaped so that reloading the output reproduces
    /// the stored text exactly. An optional header comment is emitted first as
    /// a `#` line. Write failures surface as errors; no partial output is
    /// reported as success.
    pub fn write<W: Write>(&self, writer: &mut W, header_comment: Option<&str>) -> Result<()> {
        if let Some(comment) = header_comment {
            writeln!(writer, "#{}", comment)?;
        }
        for (key, value) in self.entries() {
            writeln!(
                writer,
                "{} = {}",
                escape::encode_key(key),
                escape::encode_value(&value.canonical())
            )?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Serializes the document to the backing file.
    ///
    /// Fails with a [`crate::domain::ConfigError::SourceError`] when the
    /// document has no backing file.
    pub fn save(&self) -> Result<()> {
        let Some(path) = self.resource.as_deref() else {
            return Err(crate::domain::ConfigError::SourceError {
                source_name: "properties".to_string(),
                message: format!("document {} has no backing file to save to", self.id()),
                source: None,
            });
        };
        let mut writer = BufWriter::new(File::create(path)?);
        self.write(&mut writer, None)?;
        tracing::debug!(id = self.id(), path = %path.display(), "saved properties document");
        Ok(())
    }

    /// Serializes the document to a file, creating parent directories as
    /// needed, and remembers it as the backing file.
    pub fn save_as<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.resource = Some(path.to_path_buf());
        self.save()
    }

    fn maybe_auto_save(&self) {
        if !self.auto_save {
            return;
        }
        if let Err(e) = self.save() {
            tracing::warn!(id = self.id(), "auto-save failed: {}", e);
        }
    }
}

impl Default for PropertiesConfig {
    fn default() -> Self {
        Self::new()
    }
}
