// SPDX-License-Identifier: MIT OR Apache-2.0

//! The in-memory configuration store.
//!
//! A [`ConfigStore`] is an insertion-ordered mapping from section name to an
//! insertion-ordered mapping from key to [`Value`]. The sectioned format fills
//! many sections; the flat format uses only the [`DEFAULT_SECTION`] sentinel.
//! Insertion order is preserved because it dictates serialization order on
//! write-back.
//!
//! A store is created empty, populated by one parse pass (or incrementally via
//! [`ConfigStore::put`] / [`ConfigStore::remove`]), optionally serialized back
//! to text, and discarded. It owns its values exclusively. Mutation from
//! multiple threads requires external synchronization; read-only access after
//! parsing is safe to share.

use indexmap::IndexMap;

use crate::domain::value::Value;

/// Sentinel section for keys that precede any `[section]` header, and the
/// single implicit section of the flat format.
pub const DEFAULT_SECTION: &str = "_default";

/// An ordered section → key → value mapping with a diagnostic identity.
///
/// # Examples
///
/// ```
/// use textcfg::domain::store::{ConfigStore, DEFAULT_SECTION};
///
/// let mut store = ConfigStore::new("ini");
/// store.put(DEFAULT_SECTION, "key", "value");
/// assert!(store.has_key(DEFAULT_SECTION, "key"));
/// ```
#[derive(Clone, Debug)]
pub struct ConfigStore {
    /// Diagnostic identifier, `<format>-<3 digits>`. Never used for identity
    /// comparisons.
    id: String,
    sections: IndexMap<String, IndexMap<String, Value>>,
}

impl ConfigStore {
    /// Creates an empty store tagged with the given format name.
    pub fn new(format_name: &str) -> Self {
        Self {
            id: format!("{}-{:03}", format_name, fastrand::u32(0..1000)),
            sections: IndexMap::new(),
        }
    }

    /// The opaque diagnostic identifier of this store.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Inserts or replaces a value.
    ///
    /// A new key is appended in insertion order; an existing key keeps its
    /// position and only its value is replaced (last write wins).
    pub fn put(&mut self, section: &str, key: &str, value: impl Into<Value>) {
        let entries = self.sections.entry(section.to_string()).or_default();
        if entries.insert(key.to_string(), value.into()).is_some() {
            tracing::debug!(section, key, "replaced existing key");
        }
    }

    /// Looks up a value; absent section or key reports `None`.
    pub fn get(&self, section: &str, key: &str) -> Option<&Value> {
        self.sections.get(section)?.get(key)
    }

    /// Finds the first value for `key` across all sections in store order.
    pub fn find(&self, key: &str) -> Option<&Value> {
        self.sections.values().find_map(|entries| entries.get(key))
    }

    /// Whether the given section holds the given key.
    pub fn has_key(&self, section: &str, key: &str) -> bool {
        self.get(section, key).is_some()
    }

    /// Whether any section holds the given key.
    pub fn has_key_anywhere(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Removes one key, preserving the order of the remaining entries.
    pub fn remove(&mut self, section: &str, key: &str) -> Option<Value> {
        self.sections.get_mut(section)?.shift_remove(key)
    }

    /// Removes a whole section and returns its entries.
    pub fn remove_section(&mut self, section: &str) -> Option<IndexMap<String, Value>> {
        self.sections.shift_remove(section)
    }

    /// Section names in insertion order.
    pub fn sections(&self) -> Vec<&str> {
        self.sections.keys().map(String::as_str).collect()
    }

    /// Keys of one section in insertion order; empty for a missing section.
    pub fn keys(&self, section: &str) -> Vec<&str> {
        self.sections
            .get(section)
            .map(|entries| entries.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// The entries of one section, if present.
    pub fn section(&self, name: &str) -> Option<&IndexMap<String, Value>> {
        self.sections.get(name)
    }

    /// Iterates sections and their entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexMap<String, Value>)> {
        self.sections
            .iter()
            .map(|(name, entries)| (name.as_str(), entries))
    }

    /// Total number of keys across all sections.
    pub fn len(&self) -> usize {
        self.sections.values().map(IndexMap::len).sum()
    }

    /// Whether the store holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every section and key.
    pub fn clear(&mut self) {
        self.sections.clear();
    }
}

// Identity compares content only; the diagnostic id is excluded.
impl PartialEq for ConfigStore {
    fn eq(&self, other: &Self) -> bool {
        self.sections == other.sections
    }
}
