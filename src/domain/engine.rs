// SPDX-License-Identifier: MIT OR Apache-2.0

//! The shared parsing engine behind both configuration formats.
//!
//! Each logical line flows strictly through classification, continuation
//! assembly, escape decoding, variable substitution, numeric normalization
//! and storage, in that order, before the next line is read. The engine is
//! parameterized by [`ParseOptions`] so the sectioned and the flat format run
//! the same state machine.
//!
//! Parsing is lenient by contract: lines that classify as nothing are skipped
//! silently and never fail the parse.

use indexmap::IndexMap;
use std::collections::HashMap;

use crate::domain::escape;
use crate::domain::line::{self, LineClass};
use crate::domain::store::{ConfigStore, DEFAULT_SECTION};
use crate::domain::subst;
use crate::domain::value::Value;

/// Per-format switches for the engine.
#[derive(Clone, Copy, Debug)]
pub struct ParseOptions {
    /// Format name used to tag the resulting store's diagnostic id.
    pub format_name: &'static str,
    /// Whether `[section]` headers are recognized.
    pub sections: bool,
    /// Whether numeric-looking values are stored as numbers.
    pub normalize_numbers: bool,
    /// Whether `${name}` references are resolved.
    pub substitute: bool,
}

/// Runs the parse pipeline over buffered source text.
///
/// `vars` is the substitution environment snapshot; it is ignored unless
/// [`ParseOptions::substitute`] is set.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use textcfg::domain::engine::{parse, ParseOptions};
///
/// let options = ParseOptions {
///     format_name: "ini",
///     sections: true,
///     normalize_numbers: true,
///     substitute: true,
/// };
/// let store = parse("[db]\nport = 5432\n", &options, &HashMap::new());
/// assert_eq!(store.get("db", "port").unwrap().as_i64(), Some(5432));
/// ```
pub fn parse(content: &str, options: &ParseOptions, vars: &HashMap<String, String>) -> ConfigStore {
    tracing::debug!(format = options.format_name, "begin parsing");

    let mut store = ConfigStore::new(options.format_name);
    let mut current_section = DEFAULT_SECTION.to_string();
    // An open continuation: the key and the value accumulated so far.
    let mut pending: Option<(String, String)> = None;

    for raw in content.lines() {
        // Comment lines never reach the assembler, even mid-continuation.
        if line::is_comment(raw) {
            continue;
        }

        // Continuation is decided on the original line, before any stripping.
        let continued = line::ends_with_unescaped_backslash(raw);
        let class = line::classify(raw, options.sections);

        if let Some((key, mut buffer)) = pending.take() {
            if matches!(&class, LineClass::KeyValue { .. }) {
                // An explicit key/value line interrupts the chain; the
                // buffered value never stores, same as a chain left open at
                // end of input. The new key is handled below.
                tracing::debug!(key, "new key interrupts open continuation, dropping buffered value");
            } else if continued {
                let body = raw.strip_suffix('\\').unwrap_or(raw);
                buffer.push_str(body);
                buffer.push('\n');
                pending = Some((key, buffer));
                continue;
            } else {
                // The first line that breaks the backslash chain terminates
                // the value and is part of it.
                buffer.push_str(&escape::decode(raw));
                flush(&mut store, &current_section, &key, buffer, options, vars);
                continue;
            }
        }

        match class {
            LineClass::Comment => {}
            LineClass::Section(name) => {
                current_section = name;
            }
            LineClass::KeyValue { key, value } => {
                let key = escape::decode(&key);
                if continued {
                    let body = value.strip_suffix('\\').unwrap_or(&value);
                    let mut buffer = escape::decode_value(body);
                    buffer.push('\n');
                    pending = Some((key, buffer));
                } else {
                    let buffer = escape::decode_value(&value);
                    flush(&mut store, &current_section, &key, buffer, options, vars);
                }
            }
            LineClass::Blank => {
                if !raw.trim().is_empty() {
                    tracing::debug!(line = raw, "skipping unrecognized line");
                }
            }
        }
    }

    if let Some((key, _)) = pending {
        // Trailing backslash at end of input: the buffer never flushes.
        tracing::debug!(key, "dropping unterminated continuation at end of input");
    }

    tracing::debug!(
        format = options.format_name,
        keys = store.len(),
        "finished parsing"
    );
    store
}

fn flush(
    store: &mut ConfigStore,
    section: &str,
    key: &str,
    text: String,
    options: &ParseOptions,
    vars: &HashMap<String, String>,
) {
    let mut text = text;
    if options.substitute && text.contains("${") {
        let empty = IndexMap::new();
        let siblings = store.section(section).unwrap_or(&empty);
        text = subst::substitute(&text, vars, siblings);
    }
    let value = if options.normalize_numbers {
        Value::normalize(&text)
    } else {
        Value::Text(text)
    };
    store.put(section, key, value);
}
