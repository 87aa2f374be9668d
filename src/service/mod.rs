// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the per-format document facades.
//!
//! These types combine a text source, a parser and the resulting store into
//! the surface most callers use directly: [`IniConfig`] for the sectioned
//! format and [`PropertiesConfig`] for the flat format.

#[cfg(feature = "ini")]
pub mod ini;
#[cfg(feature = "properties")]
pub mod properties;

#[cfg(feature = "ini")]
pub use ini::IniConfig;
#[cfg(feature = "properties")]
pub use properties::PropertiesConfig;
