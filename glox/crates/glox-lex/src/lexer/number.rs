//! Number literal lexing.
//!
//! Lox numbers are decimal only: a digit run, optionally followed by `.`
//! and another digit run. No sign, exponent, radix prefix, or bare leading
//! or trailing dot.

use crate::ascii::is_digit;
use crate::lexer::Scanner;
use crate::token::{Literal, Token, TokenKind};

impl<'a> Scanner<'a> {
    /// Lexes a number literal.
    ///
    /// Called with the cursor on the first digit. The `.` is consumed only
    /// when a digit follows it, so `123.` scans as a number and then a dot.
    pub(crate) fn lex_number(&mut self) -> Token {
        self.cursor.eat_while(is_digit);

        if self.cursor.current_char() == '.' && is_digit(self.cursor.peek_char(1)) {
            self.cursor.advance();
            self.cursor.eat_while(is_digit);
        }

        let value = parse_number(self.cursor.slice_from(self.token_start));
        self.make_token(TokenKind::Number, Literal::Number(value))
    }
}

/// Parses a lexeme accepted by [`Scanner::lex_number`].
///
/// The digit-gated consumption only ever produces `[0-9]+(\.[0-9]+)?`, which
/// `f64::from_str` accepts for every length.
fn parse_number(text: &str) -> f64 {
    match text.parse::<f64>() {
        Ok(value) => value,
        Err(e) => unreachable!("number lexeme {:?} failed to parse: {}", text, e),
    }
}
