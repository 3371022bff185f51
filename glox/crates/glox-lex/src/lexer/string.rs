//! String literal lexing.
//!
//! Strings run from one `"` to the next. There are no escape sequences, and
//! a string may span several lines.

use crate::error::{LexError, LexResult};
use crate::lexer::Scanner;
use crate::token::{Literal, Token, TokenKind};

impl<'a> Scanner<'a> {
    /// Lexes a string literal.
    ///
    /// Called with the cursor on the opening quote. Newlines inside the
    /// literal still advance the line counter. The token's lexeme keeps both
    /// quotes; its literal is the text between them, taken verbatim.
    ///
    /// # Errors
    ///
    /// `LexError::UnterminatedString` if the input ends before the closing
    /// quote. The error carries the line the input ended on and the partial
    /// lexeme, opening quote included.
    pub(crate) fn lex_string(&mut self) -> LexResult<Token> {
        self.cursor.advance();
        self.cursor.eat_while(|c| c != '"');

        if self.cursor.is_at_end() {
            let line = self.cursor.line();
            let partial = self.cursor.slice_from(self.token_start).to_string();
            return Err(self.fail(LexError::UnterminatedString { line, partial }));
        }

        self.cursor.advance();

        let lexeme = self.cursor.slice_from(self.token_start);
        let value = lexeme[1..lexeme.len() - 1].to_string();
        Ok(self.make_token(TokenKind::String, Literal::String(value)))
    }
}
