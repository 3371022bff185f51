//! Character classes used by the scanner.
//!
//! Lox identifiers are ASCII-only: anything outside these classes at a token
//! boundary is an unexpected character, even if Unicode would call it a
//! letter.

/// Checks if a character can start an identifier: `[A-Za-z_]`.
///
/// ```
/// use glox_lex::ascii::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('α'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier: `[A-Za-z0-9_]`.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character is a decimal digit: `[0-9]`.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character is insignificant whitespace.
///
/// Only space, tab, carriage return and newline count; form feed and
/// vertical tab are unexpected characters.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}
