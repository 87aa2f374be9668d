// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text source trait definition.
//!
//! This module defines the [`TextSource`] trait, the port through which the
//! parsers obtain raw configuration text. A source yields the whole text at
//! once; parsing operates on a fully buffered document, never a stream.

use crate::domain::Result;

/// A finite source of raw configuration text.
///
/// A source either produces the complete text or fails with a fatal
/// [`crate::domain::ConfigError::SourceError`]; there is no partial read.
///
/// # Examples
///
/// ```
/// use textcfg::ports::TextSource;
/// use textcfg::domain::Result;
///
/// struct Fixed;
///
/// impl TextSource for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn read(&self) -> Result<String> {
///         Ok("key = value".to_string())
///     }
/// }
/// ```
pub trait TextSource {
    /// A short name identifying the kind of source, used in diagnostics.
    fn name(&self) -> &str;

    /// Reads the complete source text into memory.
    fn read(&self) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestSource;

    impl TextSource for TestSource {
        fn name(&self) -> &str {
            "test"
        }

        fn read(&self) -> Result<String> {
            Ok("a = 1\nb = 2".to_string())
        }
    }

    #[test]
    fn test_source_read() {
        let source = TestSource;
        assert_eq!(source.name(), "test");
        assert_eq!(source.read().unwrap(), "a = 1\nb = 2");
    }
}
