//! Token definitions for the Lox language.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact lexeme it was scanned
//! from, the decoded [`Literal`] (strings and numbers only), and the line the
//! token started on.

use std::fmt;

/// The kind of a token.
///
/// Literal kinds and the end-of-input marker live in the same enumeration as
/// punctuation and keywords, so every consumer matches over one closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    // Single-character tokens
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `/`
    Slash,
    /// `*`
    Star,

    // One or two character tokens
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,

    // Literals
    /// A name that is not a reserved word
    Identifier,
    /// A double-quoted string
    String,
    /// A decimal number
    Number,

    // Keywords
    /// `and`
    And,
    /// `class`
    Class,
    /// `else`
    Else,
    /// `false`
    False,
    /// `fun`
    Fun,
    /// `for`
    For,
    /// `if`
    If,
    /// `nil`
    Nil,
    /// `or`
    Or,
    /// `print`
    Print,
    /// `return`
    Return,
    /// `super`
    Super,
    /// `this`
    This,
    /// `true`
    True,
    /// `var`
    Var,
    /// `while`
    While,

    /// End of input
    Eof,
}

impl TokenKind {
    /// Every reserved word, in alphabetical order.
    pub const KEYWORDS: [TokenKind; 16] = [
        TokenKind::And,
        TokenKind::Class,
        TokenKind::Else,
        TokenKind::False,
        TokenKind::For,
        TokenKind::Fun,
        TokenKind::If,
        TokenKind::Nil,
        TokenKind::Or,
        TokenKind::Print,
        TokenKind::Return,
        TokenKind::Super,
        TokenKind::This,
        TokenKind::True,
        TokenKind::Var,
        TokenKind::While,
    ];

    /// Returns the fixed spelling of the kind.
    ///
    /// Literal kinds and `Eof` have no fixed spelling and return a
    /// descriptive name instead.
    ///
    /// ```
    /// use glox_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::BangEqual.as_str(), "!=");
    /// assert_eq!(TokenKind::While.as_str(), "while");
    /// assert_eq!(TokenKind::Identifier.as_str(), "identifier");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Minus => "-",
            TokenKind::Plus => "+",
            TokenKind::Semicolon => ";",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::Bang => "!",
            TokenKind::BangEqual => "!=",
            TokenKind::Equal => "=",
            TokenKind::EqualEqual => "==",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::And => "and",
            TokenKind::Class => "class",
            TokenKind::Else => "else",
            TokenKind::False => "false",
            TokenKind::Fun => "fun",
            TokenKind::For => "for",
            TokenKind::If => "if",
            TokenKind::Nil => "nil",
            TokenKind::Or => "or",
            TokenKind::Print => "print",
            TokenKind::Return => "return",
            TokenKind::Super => "super",
            TokenKind::This => "this",
            TokenKind::True => "true",
            TokenKind::Var => "var",
            TokenKind::While => "while",
            TokenKind::Eof => "end of input",
        }
    }

    /// Returns true for the sixteen reserved words.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Class
                | TokenKind::Else
                | TokenKind::False
                | TokenKind::Fun
                | TokenKind::For
                | TokenKind::If
                | TokenKind::Nil
                | TokenKind::Or
                | TokenKind::Print
                | TokenKind::Return
                | TokenKind::Super
                | TokenKind::This
                | TokenKind::True
                | TokenKind::Var
                | TokenKind::While
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The decoded value carried by a token.
///
/// Only `String` and `Number` tokens carry a present literal; everything else
/// is `Absent`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Literal {
    /// No value (punctuation, operators, keywords, identifiers, end of input)
    #[default]
    Absent,
    /// String contents without the surrounding quotes
    String(String),
    /// A 64-bit floating point number
    Number(#[cfg_attr(feature = "serde", serde(serialize_with = "serialize_number"))] f64),
}

/// JSON has no infinity, so a digit run too long for `f64` serializes as the
/// same text `Display` prints.
#[cfg(feature = "serde")]
fn serialize_number<S: serde::Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.collect_str(value)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Absent => f.write_str("nil"),
            Literal::String(s) => f.write_str(s),
            Literal::Number(n) => write!(f, "{}", n),
        }
    }
}

/// A scanned token.
///
/// # Example
///
/// ```
/// use glox_lex::{Literal, Token, TokenKind};
///
/// let token = Token::new(TokenKind::Number, "1.5", Literal::Number(1.5), 3);
/// assert_eq!(token.to_string(), "[3]1.5:Number(1.5)");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    /// What kind of token this is
    pub kind: TokenKind,
    /// The exact source text, quotes included for strings
    pub lexeme: String,
    /// Decoded value for strings and numbers
    pub literal: Literal,
    /// 1-based line the token started on
    pub line: u32,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, literal: Literal, line: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
        }
    }

    /// Creates the end-of-input token for `line`.
    pub fn eof(line: u32) -> Self {
        Self::new(TokenKind::Eof, "", Literal::Absent, line)
    }

    /// Returns true for the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]{}:{:?}({})",
            self.line, self.lexeme, self.kind, self.literal
        )
    }
}
