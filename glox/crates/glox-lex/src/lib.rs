//! glox-lex - Scanner for the Lox Programming Language
//!
//! This crate turns Lox source text into a flat list of tokens, each tagged
//! with the line it started on. It is the first phase of a Lox interpreter;
//! nothing here parses or evaluates.
//!
//! # Example Usage
//!
//! ```
//! use glox_lex::{scan, Literal, TokenKind};
//!
//! let tokens = scan("var answer = 42;").unwrap();
//! assert_eq!(tokens.len(), 6);
//! assert_eq!(tokens[3].literal, Literal::Number(42.0));
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
//! ```
//!
//! Errors can also be collected through a [`glox_util::Reporter`]:
//!
//! ```
//! use glox_util::Handler;
//!
//! let mut handler = Handler::new();
//! assert!(glox_lex::scan_with("\"open", &mut handler).is_err());
//! assert_eq!(handler.diagnostics()[0].to_string(), "[line 1] Error: incomplete string: \"open");
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, token kind, and literal types
//! - [`keywords`] - Reserved word lookup
//! - [`cursor`] - Character cursor for source traversal
//! - [`ascii`] - Character classes
//! - [`error`] - Scan errors
//!
//! # Lexical Grammar
//!
//! - **Single characters**: `( ) { } , . - + ; * /`
//! - **One or two characters**: `! != = == < <= > >=`
//! - **Literals**: identifiers `[A-Za-z_][A-Za-z0-9_]*`, strings `"..."`
//!   (multi-line, no escapes), numbers `123` and `123.45`
//! - **Keywords**: `and class else false for fun if nil or print return super
//!   this true var while`
//! - **Ignored**: spaces, tabs, carriage returns, newlines, `//` line comments

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod ascii;
pub mod cursor;
pub mod error;
pub mod keywords;
mod lexer;
pub mod token;

mod edge_cases;

use glox_util::Reporter;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use keywords::keyword;
pub use lexer::Scanner;
pub use token::{Literal, Token, TokenKind};

/// Scans a whole source buffer.
///
/// On success the list ends with exactly one `Eof` token. The first error
/// abandons the scan and no tokens are returned.
pub fn scan(source: &str) -> LexResult<Vec<Token>> {
    Scanner::new(source).scan_tokens()
}

/// Scans a whole source buffer, telling `reporter` about the error (if any)
/// before it is returned.
pub fn scan_with(source: &str, reporter: &mut dyn Reporter) -> LexResult<Vec<Token>> {
    Scanner::with_reporter(source, reporter).scan_tokens()
}
