// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value type with best-effort typed conversions.
//!
//! This module provides the [`Value`] type, a tagged union holding either raw
//! text or a normalized number, together with the typed accessor layer that
//! converts a stored value into a caller-requested type on read.
//!
//! Conversions never fail hard: an accessor that cannot produce the requested
//! type reports `None` (or `false` for booleans) and the caller keeps the
//! original value. Callers needing strict validation should inspect the
//! variant themselves before coercing.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::escape;

/// A stored configuration value.
///
/// Values are immutable once stored; replacing a key swaps the whole entry in
/// the store. Every variant is reconstructible back to its canonical string
/// form via [`Value::canonical`], which is also what serialization emits.
///
/// The sectioned format stores numeric-looking values as [`Value::Int`] or
/// [`Value::Float`]; the flat format always stores [`Value::Text`] and defers
/// all coercion to the accessors below.
///
/// # Examples
///
/// ```
/// use textcfg::domain::value::Value;
///
/// let value = Value::from("42");
/// assert_eq!(value.as_i64(), Some(42));
/// assert_eq!(value.canonical(), "42");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Raw text, stored exactly as decoded from the source.
    Text(String),
    /// A normalized integer value.
    Int(i64),
    /// A normalized floating-point value.
    Float(f64),
}

impl Value {
    /// Parses raw text into a normalized value.
    ///
    /// Text that is entirely numeric (an optional sign, digits, and at most
    /// one decimal point) becomes [`Value::Int`] or [`Value::Float`];
    /// everything else stays [`Value::Text`] unchanged. Exponents, hex forms
    /// and digit grouping are not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use textcfg::domain::value::Value;
    ///
    /// assert_eq!(Value::normalize("42"), Value::Int(42));
    /// assert_eq!(Value::normalize("-2.5"), Value::Float(-2.5));
    /// assert_eq!(Value::normalize("42a"), Value::Text("42a".to_string()));
    /// ```
    pub fn normalize(text: &str) -> Value {
        if !is_numeric_text(text) {
            return Value::Text(text.to_string());
        }
        if !text.contains('.') {
            if let Ok(i) = text.parse::<i64>() {
                return Value::Int(i);
            }
        }
        match text.parse::<f64>() {
            Ok(f) => Value::Float(f),
            Err(_) => Value::Text(text.to_string()),
        }
    }

    /// Renders the canonical, round-trippable string form of the value.
    pub fn canonical(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
        }
    }

    /// Returns the stored text when the value is textual.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Whether the value was normalized into a number.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Converts the value to an `i64`.
    ///
    /// Numeric values widen or truncate (a float truncates toward zero);
    /// textual values are parsed. Unparseable text yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use textcfg::domain::value::Value;
    ///
    /// assert_eq!(Value::Float(3.9).as_i64(), Some(3));
    /// assert_eq!(Value::from("17").as_i64(), Some(17));
    /// assert_eq!(Value::from("seventeen").as_i64(), None);
    /// ```
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Float(f) => Some(*f as i64),
            Value::Text(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
            }
        }
    }

    /// Converts the value to an `i32`, truncating like an `as` cast.
    pub fn as_i32(&self) -> Option<i32> {
        self.as_i64().map(|i| i as i32)
    }

    /// Converts the value to an `i16`, truncating like an `as` cast.
    pub fn as_i16(&self) -> Option<i16> {
        self.as_i64().map(|i| i as i16)
    }

    /// Converts the value to an `i8`, truncating like an `as` cast.
    pub fn as_i8(&self) -> Option<i8> {
        self.as_i64().map(|i| i as i8)
    }

    /// Converts the value to an `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }

    /// Converts the value to an `f32`.
    pub fn as_f32(&self) -> Option<f32> {
        self.as_f64().map(|f| f as f32)
    }

    /// Converts the value to a boolean.
    ///
    /// Case-insensitive `"true"` is `true`; any other canonical text
    /// (including misspellings) is `false`. No other spellings are validated.
    pub fn as_bool(&self) -> bool {
        self.canonical().trim().eq_ignore_ascii_case("true")
    }

    /// Takes the first character of the canonical text, if any.
    pub fn as_char(&self) -> Option<char> {
        self.canonical().chars().next()
    }

    /// Decodes a value syntactically wrapped in `[...]` as an ordered list.
    ///
    /// The inner text splits on commas outside quotes; each element is
    /// trimmed and stripped of one surrounding quote pair. Values not wrapped
    /// in brackets yield `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use textcfg::domain::value::Value;
    ///
    /// let value = Value::from(r#"["a","b","c"]"#);
    /// assert_eq!(value.as_array(), Some(vec!["a".into(), "b".into(), "c".into()]));
    /// assert_eq!(Value::from("plain").as_array(), None);
    /// ```
    pub fn as_array(&self) -> Option<Vec<String>> {
        let text = self.canonical();
        let trimmed = text.trim();
        let inner = trimmed.strip_prefix('[')?.strip_suffix(']')?;
        if inner.trim().is_empty() {
            return Some(Vec::new());
        }
        Some(
            split_outside_quotes(inner)
                .into_iter()
                .map(|item| escape::strip_quotes(item.trim()).to_string())
                .collect(),
        )
    }

    /// Decodes a value syntactically wrapped in `{...}` as a key/value map.
    ///
    /// The inner text splits into `key:value` pairs on top-level commas, where
    /// commas inside a nested `[...]` array do not split. Exactly one level of
    /// nesting is supported; the behavior of deeper nesting is unspecified.
    /// Entries without a `:` are skipped, and the first occurrence of a
    /// duplicate key wins. Values not wrapped in braces yield `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use textcfg::domain::value::Value;
    ///
    /// let value = Value::from("{x:1,y:2}");
    /// let map = value.as_map().unwrap();
    /// assert_eq!(map.get("x"), Some(&"1".to_string()));
    /// assert_eq!(map.get("y"), Some(&"2".to_string()));
    /// ```
    pub fn as_map(&self) -> Option<IndexMap<String, String>> {
        let text = self.canonical();
        let trimmed = text.trim();
        let inner = trimmed.strip_prefix('{')?.strip_suffix('}')?;

        let mut map = IndexMap::new();
        for entry in split_top_level(inner) {
            let entry = entry.trim();
            let Some((key, value)) = entry.split_once(':') else {
                continue;
            };
            let key = key.trim().to_string();
            if !map.contains_key(&key) {
                map.insert(key, value.trim().to_string());
            }
        }
        Some(map)
    }
}

/// Splits on commas that are not inside a `"…"` or `'…'` quoted run.
fn split_outside_quotes(input: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    for c in input.chars() {
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                }
                current.push(c);
            }
            None => match c {
                '"' | '\'' => {
                    quote = Some(c);
                    current.push(c);
                }
                ',' => {
                    parts.push(std::mem::take(&mut current));
                }
                _ => current.push(c),
            },
        }
    }
    parts.push(current);
    parts
}

/// Splits on commas at bracket depth zero. One level of `[...]` nesting is
/// the supported contract; deeper input just keeps counting.
fn split_top_level(input: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth: i32 = 0;
    for c in input.chars() {
        match c {
            '[' => {
                depth += 1;
                current.push(c);
            }
            ']' => {
                depth -= 1;
                current.push(c);
            }
            ',' if depth <= 0 => {
                parts.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    parts.push(current);
    parts
}

/// Whether text matches the recognized numeric grammar: an optional sign,
/// digits, and at most one decimal point with at least one digit overall.
fn is_numeric_text(text: &str) -> bool {
    let body = text.strip_prefix(['+', '-']).unwrap_or(text);
    if body.is_empty() {
        return false;
    }
    let mut seen_dot = false;
    let mut seen_digit = false;
    for c in body.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    seen_digit
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f64::from(f))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Text(b.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{}", s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{}", v),
        }
    }
}
