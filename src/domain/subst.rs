// SPDX-License-Identifier: MIT OR Apache-2.0

//! Variable substitution for `${name}` references in decoded values.
//!
//! The sectioned format resolves `${name}` tokens against a layered lookup:
//! keys already stored in the current section shadow the variable snapshot
//! supplied by the caller (typically environment variables plus explicit
//! properties, captured once at load time). Substitution results are
//! re-expanded recursively, and the variable name itself may contain nested
//! `${…}` tokens. Unresolvable references stay literal; there is no error.

use indexmap::IndexMap;
use std::collections::HashMap;

use crate::domain::value::Value;

/// Recursion bound for re-expansion; stops reference cycles.
const MAX_DEPTH: u32 = 16;

/// Replaces `${name}` tokens in `text`.
///
/// `section` holds the keys stored so far in the current section and takes
/// precedence over `vars`.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use indexmap::IndexMap;
/// use textcfg::domain::subst::substitute;
///
/// let mut vars = HashMap::new();
/// vars.insert("HOME".to_string(), "/home/u".to_string());
/// let section = IndexMap::new();
///
/// assert_eq!(substitute("${HOME}/cfg", &vars, &section), "/home/u/cfg");
/// assert_eq!(substitute("${MISSING}", &vars, &section), "${MISSING}");
/// ```
pub fn substitute(
    text: &str,
    vars: &HashMap<String, String>,
    section: &IndexMap<String, Value>,
) -> String {
    expand(text, vars, section, MAX_DEPTH)
}

fn expand(
    text: &str,
    vars: &HashMap<String, String>,
    section: &IndexMap<String, Value>,
    depth: u32,
) -> String {
    if depth == 0 || !text.contains("${") {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match find_closing_brace(after) {
            Some(end) => {
                // The name may itself contain ${…}; expand it first.
                let name = expand(&after[..end], vars, section, depth - 1);
                match lookup(&name, vars, section) {
                    Some(replacement) => {
                        out.push_str(&expand(&replacement, vars, section, depth - 1));
                    }
                    None => {
                        out.push_str("${");
                        out.push_str(&name);
                        out.push('}');
                    }
                }
                rest = &after[end + 1..];
            }
            None => {
                // Unterminated token, keep the rest literally.
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Finds the `}` matching the `${` that opened before `text`, accounting for
/// nested `${…}` tokens.
fn find_closing_brace(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 0u32;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'$' && i + 1 < bytes.len() && bytes[i + 1] == b'{' {
            depth += 1;
            i += 2;
            continue;
        }
        if bytes[i] == b'}' {
            if depth == 0 {
                return Some(i);
            }
            depth -= 1;
        }
        i += 1;
    }
    None
}

fn lookup(
    name: &str,
    vars: &HashMap<String, String>,
    section: &IndexMap<String, Value>,
) -> Option<String> {
    if let Some(value) = section.get(name) {
        return Some(value.canonical());
    }
    vars.get(name).cloned()
}
