// SPDX-License-Identifier: MIT OR Apache-2.0

//! A hexagonal architecture crate for parsing text-based configuration.
//!
//! This crate implements two configuration formats over one parsing engine: a
//! flat `key=value` properties format and a sectioned `[section]` INI format.
//! The engine handles line continuations, comment stripping with escape-aware
//! boundaries, backslash escape decoding, optional `${name}` variable
//! substitution, numeric normalization, and a typed accessor layer on read.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and the parsing engine (`Value`,
//!   `ConfigStore`, classifier, escape codec, substitution)
//! - **Ports**: Trait definitions that define interfaces (`TextSource`,
//!   `ConfigParser`)
//! - **Adapters**: Text sources (file, string, argument list) and the two
//!   format parsers
//! - **Service**: The per-format document facades (`IniConfig`,
//!   `PropertiesConfig`)
//!
//! # Leniency
//!
//! Parsing is deliberately lenient: a line that matches no rule is skipped
//! silently and the caller gets a best-effort store. Only an unreadable
//! source or a failed write-back produces an error. Typed access never fails
//! either; an impossible coercion reports absence and the stored value stays
//! available.
//!
//! # Feature Flags
//!
//! - `ini`: Enable the sectioned format (default)
//! - `properties`: Enable the flat format (default)
//! - `full`: Enable both formats
//!
//! # Quick Start
//!
//! ```rust
//! use textcfg::prelude::*;
//!
//! # fn main() -> textcfg::domain::Result<()> {
//! let mut config = IniConfig::new();
//! config.load_str("[server]\nhost = localhost\nport = 8080\n")?;
//!
//! assert_eq!(config.get("server", "port").unwrap().as_i64(), Some(8080));
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for
/// convenient access.
pub mod prelude {
    pub use crate::domain::{ConfigError, ConfigStore, Result, Value, DEFAULT_SECTION};
    pub use crate::ports::{ConfigParser, TextSource};

    pub use crate::adapters::{ArgsSource, FileSource, StringSource};
    #[cfg(feature = "ini")]
    pub use crate::adapters::IniParser;
    #[cfg(feature = "properties")]
    pub use crate::adapters::PropertiesParser;

    #[cfg(feature = "ini")]
    pub use crate::service::IniConfig;
    #[cfg(feature = "properties")]
    pub use crate::service::PropertiesConfig;
}
