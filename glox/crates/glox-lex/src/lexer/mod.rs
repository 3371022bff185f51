//! Scanner module.
//!
//! This module organizes the scanner into smaller, focused components:
//! - `core` - Scanner struct, dispatch, and the top-level loop
//! - `operator` - One- and two-character operators
//! - `comment` - Line comment skipping
//! - `string` - String literals
//! - `number` - Number literals
//! - `identifier` - Identifiers and keywords

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::Scanner;
