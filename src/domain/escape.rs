// SPDX-License-Identifier: MIT OR Apache-2.0

//! Escape sequence decoding and encoding for raw value text.
//!
//! Raw values coming out of the line classifier may be wrapped in a single
//! pair of matching quotes and may contain backslash escape sequences. Quote
//! stripping happens first and escape decoding after, so an escaped quote
//! inside an otherwise-quoted value survives.
//!
//! Serialization runs the codec in reverse: [`encode_value`] and
//! [`encode_key`] escape everything the parser would otherwise strip or
//! decode, so a written document reloads to the exact stored text.

/// Strips one matching pair of outer `"…"` or `'…'` quotes, if present.
///
/// Only a value fully wrapped in a single matching pair is affected; a quote
/// on one side only, or mismatched quote kinds, are left alone.
///
/// # Examples
///
/// ```
/// use textcfg::domain::escape::strip_quotes;
///
/// assert_eq!(strip_quotes("\"hello\""), "hello");
/// assert_eq!(strip_quotes("'hi'"), "hi");
/// assert_eq!(strip_quotes("\"unbalanced"), "\"unbalanced");
/// ```
pub fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2 {
        let bytes = value.as_bytes();
        let first = bytes[0];
        let last = bytes[value.len() - 1];
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Decodes backslash escape sequences in a single left-to-right pass.
///
/// Recognized sequences: `\"`, `\'`, `\\`, `\t`, `\r`, `\n`, `\0`, `\b`
/// (backspace), `\f` (form feed), `\#`, `\;`, `\=`, `\:` and `\[`. An
/// unrecognized sequence is kept literally, backslash included. The single
/// pass guarantees
/// decoding is never applied twice: `\\t` yields a backslash followed by `t`,
/// not a tab.
///
/// # Examples
///
/// ```
/// use textcfg::domain::escape::decode;
///
/// assert_eq!(decode(r"a\tb"), "a\tb");
/// assert_eq!(decode(r"a\\tb"), r"a\tb");
/// ```
pub fn decode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\'') => out.push('\''),
            Some('\\') => out.push('\\'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('n') => out.push('\n'),
            Some('0') => out.push('\0'),
            Some('b') => out.push('\u{0008}'),
            Some('f') => out.push('\u{000C}'),
            Some('#') => out.push('#'),
            Some(';') => out.push(';'),
            Some('=') => out.push('='),
            Some(':') => out.push(':'),
            Some('[') => out.push('['),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Decodes a raw value: outer quotes stripped first, escapes after.
pub fn decode_value(value: &str) -> String {
    decode(strip_quotes(value))
}

/// Renders a value for serialization so that reloading reproduces it exactly.
///
/// Backslashes, comment markers, quotes and control characters are escaped,
/// and a value with leading or trailing spaces is wrapped in double quotes so
/// the classifier's trimming cannot eat them.
///
/// # Examples
///
/// ```
/// use textcfg::domain::escape::{decode_value, encode_value};
///
/// assert_eq!(encode_value("a#b"), r"a\#b");
/// assert_eq!(decode_value(&encode_value(r"C:\temp")), r"C:\temp");
/// ```
pub fn encode_value(value: &str) -> String {
    let encoded = encode_text(value, false);
    if encoded.starts_with(' ') || encoded.ends_with(' ') {
        format!("\"{}\"", encoded)
    } else {
        encoded
    }
}

/// Renders a key for serialization; beyond [`encode_value`]'s set this also
/// escapes `=` (the separator) and `[` (a section header opener).
pub fn encode_key(key: &str) -> String {
    encode_text(key, true)
}

fn encode_text(text: &str, key: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str(r"\\"),
            '\t' => out.push_str(r"\t"),
            '\r' => out.push_str(r"\r"),
            '\n' => out.push_str(r"\n"),
            '\0' => out.push_str(r"\0"),
            '\u{0008}' => out.push_str(r"\b"),
            '\u{000C}' => out.push_str(r"\f"),
            '#' => out.push_str(r"\#"),
            ';' => out.push_str(r"\;"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str(r"\'"),
            '=' if key => out.push_str(r"\="),
            '[' if key => out.push_str(r"\["),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_quotes_double() {
        assert_eq!(strip_quotes("\"value\""), "value");
    }

    #[test]
    fn test_strip_quotes_single() {
        assert_eq!(strip_quotes("'value'"), "value");
    }

    #[test]
    fn test_strip_quotes_mismatched() {
        assert_eq!(strip_quotes("\"value'"), "\"value'");
        assert_eq!(strip_quotes("'value\""), "'value\"");
    }

    #[test]
    fn test_strip_quotes_too_short() {
        assert_eq!(strip_quotes("\""), "\"");
        assert_eq!(strip_quotes(""), "");
    }

    #[test]
    fn test_decode_all_sequences() {
        assert_eq!(
            decode(r#"\"\'\t\r\n\0\b\f\#\;\=\:\["#),
            "\"'\t\r\n\0\u{0008}\u{000C}#;=:["
        );
    }

    #[test]
    fn test_decode_backslash_not_double_decoded() {
        // `\\` is one literal backslash; the following `n` stays an `n`.
        assert_eq!(decode(r"\\n"), r"\n");
        assert_eq!(decode(r"\\"), r"\");
    }

    #[test]
    fn test_decode_unknown_escape_preserved() {
        assert_eq!(decode(r"\q"), r"\q");
    }

    #[test]
    fn test_decode_trailing_backslash() {
        assert_eq!(decode("end\\"), "end\\");
    }

    #[test]
    fn test_decode_value_quotes_then_escapes() {
        // The escaped quote inside the quoted value survives stripping.
        assert_eq!(decode_value(r#""a \" b""#), "a \" b");
    }

    #[test]
    fn test_decode_value_plain() {
        assert_eq!(decode_value("plain"), "plain");
    }

    #[test]
    fn test_encode_value_escapes_markers_and_backslashes() {
        assert_eq!(encode_value("a#b"), r"a\#b");
        assert_eq!(encode_value("a;b"), r"a\;b");
        assert_eq!(encode_value(r"C:\temp"), r"C:\\temp");
        assert_eq!(encode_value("line1\nline2"), r"line1\nline2");
    }

    #[test]
    fn test_encode_value_quotes_padded_text() {
        assert_eq!(encode_value("  x  "), "\"  x  \"");
        assert_eq!(decode_value(&encode_value("  x  ")), "  x  ");
    }

    #[test]
    fn test_encode_value_decode_round_trip() {
        for text in [r"C:\temp", "a#b;c", "tab\there", "'quoted'", "\"x\"", "end\\"] {
            assert_eq!(decode_value(&encode_value(text)), text);
        }
    }

    #[test]
    fn test_encode_key_escapes_separator_and_section_opener() {
        assert_eq!(encode_key("a=b"), r"a\=b");
        assert_eq!(encode_key("[odd"), r"\[odd");
        assert_eq!(encode_key("plain_key"), "plain_key");
    }
}
