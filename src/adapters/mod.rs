// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing concrete sources and format parsers.
//!
//! This module contains implementations of the ports: text sources (file,
//! raw string, argument list) and the two format parsers. The parsers are
//! feature-gated the same way the formats are.

pub mod file;
#[cfg(feature = "ini")]
pub mod ini;
#[cfg(feature = "properties")]
pub mod properties;
pub mod text;

pub use file::FileSource;
#[cfg(feature = "ini")]
pub use ini::IniParser;
#[cfg(feature = "properties")]
pub use properties::PropertiesParser;
pub use text::{ArgsSource, StringSource};
