// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module holds the parsing engine and the fundamental types of the
//! crate: the tagged [`Value`], the insertion-ordered [`ConfigStore`], the
//! escape codec, the line classifier, and variable substitution. It is
//! independent of any external concerns; the format-specific surfaces live in
//! the adapters and service layers.

pub mod engine;
pub mod errors;
pub mod escape;
pub mod line;
pub mod store;
pub mod subst;
pub mod value;

// Re-export commonly used types
pub use errors::{ConfigError, Result};
pub use store::{ConfigStore, DEFAULT_SECTION};
pub use value::Value;
