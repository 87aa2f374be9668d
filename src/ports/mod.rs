// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing the trait seams of the crate.
//!
//! This module defines the interfaces between the parsing core and its
//! collaborators: where raw text comes from ([`TextSource`]) and how a format
//! turns it into a store ([`ConfigParser`]).

pub mod parser;
pub mod source;

pub use parser::ConfigParser;
pub use source::TextSource;
