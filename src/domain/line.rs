// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-line classification rules shared by both configuration formats.
//!
//! Every raw line is classified into exactly one of comment, section header,
//! key/value, or blank/unrecognized. Unrecognized lines are not an error; the
//! parser skips them silently as a deliberate leniency policy.

/// The classification of one raw input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineClass {
    /// A line whose first non-whitespace character is `;` or `#`.
    Comment,
    /// A `[name]` header (sectioned format only); the name is trimmed.
    Section(String),
    /// A `key = value` line, both sides trimmed, inline comments stripped.
    KeyValue {
        /// The key, everything before the first unescaped `=`.
        key: String,
        /// The raw value text, not yet escape-decoded.
        value: String,
    },
    /// Anything else, including lines left empty by comment stripping.
    Blank,
}

/// Classifies a raw line under the given format rules.
///
/// # Examples
///
/// ```
/// use textcfg::domain::line::{classify, LineClass};
///
/// assert_eq!(classify("; note", true), LineClass::Comment);
/// assert_eq!(classify("[core]", true), LineClass::Section("core".to_string()));
/// assert_eq!(
///     classify("key = value", true),
///     LineClass::KeyValue { key: "key".to_string(), value: "value".to_string() }
/// );
/// assert_eq!(classify("no equals here", true), LineClass::Blank);
/// ```
pub fn classify(line: &str, sections: bool) -> LineClass {
    if is_comment(line) {
        return LineClass::Comment;
    }
    if sections {
        if let Some(name) = parse_section(line) {
            return LineClass::Section(name);
        }
    }
    let stripped = strip_inline_comment(line);
    if stripped.trim().is_empty() {
        return LineClass::Blank;
    }
    match split_key_value(&stripped) {
        Some((key, value)) if !key.is_empty() => LineClass::KeyValue { key, value },
        _ => LineClass::Blank,
    }
}

/// Whether the line is a comment, ignoring leading whitespace.
pub fn is_comment(line: &str) -> bool {
    matches!(line.trim_start().chars().next(), Some(';') | Some('#'))
}

/// Parses a `[name]` section header; the captured name is trimmed.
///
/// The name must not contain `]`.
pub fn parse_section(line: &str) -> Option<String> {
    let trimmed = line.trim();
    let inner = trimmed.strip_prefix('[')?.strip_suffix(']')?;
    if inner.contains(']') {
        return None;
    }
    Some(inner.trim().to_string())
}

/// Removes a trailing comment started by an unescaped `#` or `;`.
///
/// A marker is escaped when preceded by an odd run of backslashes (the same
/// rule as continuation detection): the escaping backslash is dropped and the
/// marker becomes a literal character. An even run means every backslash is
/// itself escaped, so the marker starts a comment.
///
/// # Examples
///
/// ```
/// use textcfg::domain::line::strip_inline_comment;
///
/// assert_eq!(strip_inline_comment("key = a # note"), "key = a ");
/// assert_eq!(strip_inline_comment(r"key = a\#b # note"), "key = a#b ");
/// assert_eq!(strip_inline_comment(r"key = a\\# note"), r"key = a\\");
/// ```
pub fn strip_inline_comment(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    for c in line.chars() {
        if c == '#' || c == ';' {
            let run = out.chars().rev().take_while(|&b| b == '\\').count();
            if run % 2 == 1 {
                out.pop();
                out.push(c);
            } else {
                break;
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Whether the line ends with an unescaped backslash (an odd-length run).
pub fn ends_with_unescaped_backslash(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Splits on the first unescaped `=`; both sides are trimmed.
fn split_key_value(line: &str) -> Option<(String, String)> {
    let mut prev = '\0';
    for (idx, c) in line.char_indices() {
        if c == '=' && prev != '\\' {
            let key = line[..idx].trim().to_string();
            let value = line[idx + 1..].trim().to_string();
            return Some((key, value));
        }
        prev = c;
    }
    None
}
