//! Core scanner implementation.
//!
//! This module contains the Scanner struct, the per-token dispatch, and the
//! loop that turns a whole source buffer into a token list.

use glox_util::Reporter;

use crate::ascii::{is_digit, is_ident_start, is_whitespace};
use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::token::{Literal, Token, TokenKind};

/// Scanner for Lox source code.
///
/// The scanner walks the source once, left to right. Each call to
/// [`Scanner::next_token`] skips whitespace and comments, then recognizes
/// exactly one token. The first error ends the scan: it is reported to the
/// optional [`Reporter`] once, and every later call returns the same error.
///
/// # Example
///
/// ```
/// use glox_lex::{Scanner, TokenKind};
///
/// let tokens = Scanner::new("var x = 1;").scan_tokens().unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Var,
///         TokenKind::Identifier,
///         TokenKind::Equal,
///         TokenKind::Number,
///         TokenKind::Semicolon,
///         TokenKind::Eof,
///     ]
/// );
/// ```
pub struct Scanner<'a> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    /// Sink told about the error that ends the scan.
    reporter: Option<&'a mut dyn Reporter>,

    /// Starting position of the current token (byte offset).
    pub(super) token_start: usize,

    /// Line number where the current token starts (1-based).
    pub(super) token_start_line: u32,

    /// The error that ended the scan, if any.
    error: Option<LexError>,

    /// Whether the iterator has handed out `Eof` or an error.
    exhausted: bool,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner that reports errors only through return values.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            reporter: None,
            token_start: 0,
            token_start_line: 1,
            error: None,
            exhausted: false,
        }
    }

    /// Creates a scanner that also tells `reporter` about the error that ends
    /// the scan.
    pub fn with_reporter(source: &'a str, reporter: &'a mut dyn Reporter) -> Self {
        Self {
            reporter: Some(reporter),
            ..Self::new(source)
        }
    }

    /// Scans the whole source.
    ///
    /// Returns every token in source order, terminated by exactly one
    /// `Eof` token, or the first error encountered. No partial list is
    /// returned on failure.
    pub fn scan_tokens(mut self) -> LexResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    /// Returns the next token from the source.
    ///
    /// Skips whitespace and comments, then dispatches on the current
    /// character. At the end of input this returns an `Eof` token carrying
    /// the current line, and keeps returning one on further calls.
    pub fn next_token(&mut self) -> LexResult<Token> {
        if let Some(error) = &self.error {
            return Err(error.clone());
        }

        loop {
            self.token_start = self.cursor.position();
            self.token_start_line = self.cursor.line();

            if self.cursor.is_at_end() {
                return Ok(Token::eof(self.cursor.line()));
            }

            let token = match self.cursor.current_char() {
                '(' => self.single(TokenKind::LeftParen),
                ')' => self.single(TokenKind::RightParen),
                '{' => self.single(TokenKind::LeftBrace),
                '}' => self.single(TokenKind::RightBrace),
                ',' => self.single(TokenKind::Comma),
                '.' => self.single(TokenKind::Dot),
                '-' => self.single(TokenKind::Minus),
                '+' => self.single(TokenKind::Plus),
                ';' => self.single(TokenKind::Semicolon),
                '*' => self.single(TokenKind::Star),
                '!' => self.lex_bang(),
                '=' => self.lex_equal(),
                '<' => self.lex_less(),
                '>' => self.lex_greater(),
                '/' => match self.lex_slash() {
                    Some(token) => token,
                    None => continue,
                },
                '"' => self.lex_string()?,
                c if is_whitespace(c) => {
                    self.cursor.advance();
                    continue;
                },
                c if is_digit(c) => self.lex_number(),
                c if is_ident_start(c) => self.lex_identifier(),
                c => {
                    let line = self.cursor.line();
                    self.cursor.advance();
                    return Err(self.fail(LexError::UnexpectedCharacter { line, ch: c }));
                },
            };

            return Ok(token);
        }
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Consumes one character and emits `kind` for it.
    fn single(&mut self, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.make_token(kind, Literal::Absent)
    }

    /// Builds a token from everything consumed since `token_start`.
    pub(super) fn make_token(&self, kind: TokenKind, literal: Literal) -> Token {
        Token::new(
            kind,
            self.cursor.slice_from(self.token_start),
            literal,
            self.token_start_line,
        )
    }

    /// Records `error` as the end of the scan and tells the reporter.
    pub(super) fn fail(&mut self, error: LexError) -> LexError {
        if let Some(reporter) = self.reporter.as_deref_mut() {
            reporter.report(error.line(), &error.to_string());
        }
        self.error = Some(error.clone());
        error
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = LexResult<Token>;

    /// Yields every token up to and including `Eof`, or up to and including
    /// the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let result = self.next_token();
        if !matches!(&result, Ok(token) if !token.is_eof()) {
            self.exhausted = true;
        }
        Some(result)
    }
}
