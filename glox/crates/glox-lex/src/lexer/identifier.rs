//! Identifier and keyword lexing.

use crate::ascii::is_ident_continue;
use crate::keywords::keyword;
use crate::lexer::Scanner;
use crate::token::{Literal, Token, TokenKind};

impl<'a> Scanner<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Identifiers start with an ASCII letter or underscore, followed by
    /// ASCII letters, digits, or underscores. The finished word is looked up
    /// in the reserved-word table; matching is exact and case-sensitive.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        self.cursor.eat_while(is_ident_continue);

        let text = self.cursor.slice_from(self.token_start);
        let kind = keyword(text).unwrap_or(TokenKind::Identifier);
        self.make_token(kind, Literal::Absent)
    }
}
