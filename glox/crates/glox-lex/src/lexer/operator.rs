//! Operator lexing.
//!
//! Handles the four operators that have a two-character form with a
//! trailing `=`, plus the slash (which may start a comment instead).

use crate::lexer::Scanner;
use crate::token::{Literal, Token, TokenKind};

impl<'a> Scanner<'a> {
    /// Lexes bang or bang-equals.
    ///
    /// Handles: `!`, `!=`
    pub(crate) fn lex_bang(&mut self) -> Token {
        self.lex_with_equal(TokenKind::Bang, TokenKind::BangEqual)
    }

    /// Lexes equals or equals-equals.
    ///
    /// Handles: `=`, `==`
    pub(crate) fn lex_equal(&mut self) -> Token {
        self.lex_with_equal(TokenKind::Equal, TokenKind::EqualEqual)
    }

    /// Lexes less or less-equals.
    ///
    /// Handles: `<`, `<=`
    pub(crate) fn lex_less(&mut self) -> Token {
        self.lex_with_equal(TokenKind::Less, TokenKind::LessEqual)
    }

    /// Lexes greater or greater-equals.
    ///
    /// Handles: `>`, `>=`
    pub(crate) fn lex_greater(&mut self) -> Token {
        self.lex_with_equal(TokenKind::Greater, TokenKind::GreaterEqual)
    }

    /// Lexes slash, or skips a line comment.
    ///
    /// Returns `None` when the slash opened a `//` comment, which produces
    /// no token.
    pub(crate) fn lex_slash(&mut self) -> Option<Token> {
        self.cursor.advance();
        if self.cursor.match_char('/') {
            self.skip_line_comment();
            None
        } else {
            Some(self.make_token(TokenKind::Slash, Literal::Absent))
        }
    }

    fn lex_with_equal(&mut self, single: TokenKind, double: TokenKind) -> Token {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            double
        } else {
            single
        };
        self.make_token(kind, Literal::Absent)
    }
}
