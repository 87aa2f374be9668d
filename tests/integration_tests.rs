// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the two configuration formats.
//!
//! These tests exercise the public facades end to end: loading from files,
//! strings and argument lists, the parsing pipeline behaviors, mutation, and
//! serialization.

use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;
use textcfg::prelude::*;

#[test]
fn test_ini_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "[db]\nhost = localhost\nport = 5432").unwrap();

    let mut config = IniConfig::new();
    config.load_path(temp_file.path()).unwrap();

    assert_eq!(config.get("db", "host").unwrap().canonical(), "localhost");
    assert_eq!(config.get("db", "port").unwrap().as_i64(), Some(5432));
}

#[test]
fn test_ini_unreadable_source_is_fatal() {
    let mut config = IniConfig::new();
    let result = config.load_path("/definitely/not/here.ini");
    assert!(result.is_err());
    // The failed load leaves no partial content behind.
    assert!(config.store().is_empty());
}

#[test]
fn test_continuation_produces_joined_value() {
    let mut config = IniConfig::new();
    config.load_str("key = part1\\\npart2\n").unwrap();
    assert_eq!(
        config.get(DEFAULT_SECTION, "key").unwrap().canonical(),
        "part1\npart2"
    );
}

#[test]
fn test_comment_stripping_with_escape() {
    let mut config = IniConfig::new();
    config.load_str("key = a\\#b # trailing comment\n").unwrap();
    assert_eq!(config.get(DEFAULT_SECTION, "key").unwrap().canonical(), "a#b");
}

#[test]
fn test_duplicate_keys_replace() {
    let mut config = IniConfig::new();
    config.load_str("k=1\nk=2\n").unwrap();
    assert_eq!(config.get(DEFAULT_SECTION, "k").unwrap().as_i64(), Some(2));
    assert_eq!(config.keys(DEFAULT_SECTION).len(), 1);
}

#[test]
fn test_substitution_from_supplied_vars() {
    let mut vars = HashMap::new();
    vars.insert("HOME".to_string(), "/home/u".to_string());

    let mut config = IniConfig::with_vars(vars);
    config.load_str("path = ${HOME}/cfg\n").unwrap();
    assert_eq!(
        config.get(DEFAULT_SECTION, "path").unwrap().canonical(),
        "/home/u/cfg"
    );
}

#[test]
fn test_unknown_key_access_reports_absence() {
    let mut config = IniConfig::new();
    config.load_str("[s]\nk = v\n").unwrap();

    assert!(config.get("s", "missing").is_none());
    assert!(config.get_value("missing").is_none());
    assert!(!config.has_key("missing"));
    assert!(!config.has_key_in("missing_section", "k"));
}

#[test]
fn test_numeric_normalization_in_sectioned_format() {
    let mut config = IniConfig::new();
    config.load_str("n = 42\nt = 42a\n").unwrap();
    assert!(config.get(DEFAULT_SECTION, "n").unwrap().is_number());
    assert!(!config.get(DEFAULT_SECTION, "t").unwrap().is_number());
}

#[test]
fn test_flat_format_stays_text() {
    let mut config = PropertiesConfig::new();
    config.load_str("n = 42\n").unwrap();
    assert!(!config.get("n").unwrap().is_number());
    assert_eq!(config.get("n").unwrap().as_i64(), Some(42));
}

#[test]
fn test_array_decoding() {
    let mut config = PropertiesConfig::new();
    config.load_str(r#"arr = ["a","b","c"]"#).unwrap();
    assert_eq!(
        config.get_array("arr"),
        Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
    );
}

#[test]
fn test_map_decoding() {
    let mut config = PropertiesConfig::new();
    config.load_str("m = {x:1,y:2}").unwrap();
    let map = config.get_map("m").unwrap();
    assert_eq!(map.get("x"), Some(&"1".to_string()));
    assert_eq!(map.get("y"), Some(&"2".to_string()));
}

#[test]
fn test_ini_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("round.ini");

    let mut config = IniConfig::new();
    config.load_str("[a]\nx = 1\ny = text\n[b]\nz = 2.5\n").unwrap();
    config.save_as(&path, Some(" round trip")).unwrap();

    let mut reloaded = IniConfig::new();
    reloaded.load_path(&path).unwrap();
    assert_eq!(config.store(), reloaded.store());
}

#[test]
fn test_properties_round_trip_through_writer() {
    let mut config = PropertiesConfig::new();
    config.load_str("a = 1\nb = hello world\nc = x=y\n").unwrap();

    let mut out = Vec::new();
    config.write(&mut out, Some(" generated")).unwrap();

    let mut reloaded = PropertiesConfig::new();
    reloaded.load_str(&String::from_utf8(out).unwrap()).unwrap();
    assert_eq!(reloaded.store(), config.store());
}

#[test]
fn test_load_from_args() {
    let mut config = PropertiesConfig::new();
    config
        .load_args(vec!["host=localhost", "port=8080"])
        .unwrap();
    assert_eq!(config.get("host").unwrap().canonical(), "localhost");
    assert_eq!(config.get("port").unwrap().as_i64(), Some(8080));
}

#[test]
fn test_malformed_lines_yield_best_effort_store() {
    let mut config = IniConfig::new();
    config
        .load_str("good = 1\nthis line matches nothing\n[ok]\nalso_good = 2\n")
        .unwrap();
    assert_eq!(config.store().len(), 2);
}

#[test]
fn test_typed_accessors_on_loaded_values() {
    let mut config = IniConfig::new();
    config
        .load_str("[t]\nb = true\nc = hello\nn = 3.9\n")
        .unwrap();

    assert!(config.get("t", "b").unwrap().as_bool());
    assert_eq!(config.get("t", "c").unwrap().as_char(), Some('h'));
    assert_eq!(config.get("t", "n").unwrap().as_i64(), Some(3));
    // A coercion that cannot succeed reports absence, never an error.
    assert_eq!(config.get("t", "c").unwrap().as_i64(), None);
}

#[test]
fn test_sections_and_keys_in_insertion_order() {
    let mut config = IniConfig::new();
    config
        .load_str("[zeta]\nb = 2\na = 1\n[alpha]\nc = 3\n")
        .unwrap();
    assert_eq!(config.sections(), vec!["zeta", "alpha"]);
    assert_eq!(config.keys("zeta"), vec!["b", "a"]);
}

#[test]
fn test_escape_sequences_end_to_end() {
    let mut config = PropertiesConfig::new();
    config.load_str("tab = a\\tb\nquoted = \"  spaced  \"\n").unwrap();
    assert_eq!(config.get("tab").unwrap().canonical(), "a\tb");
    assert_eq!(config.get("quoted").unwrap().canonical(), "  spaced  ");
}
