//! Scanner error type.
//!
//! Every variant is fatal to the scan that produced it: the scanner returns
//! the error instead of a token list and never resynchronizes.

use glox_util::diagnostic::{
    Diagnostic, DiagnosticCode, E_LEXER_UNEXPECTED_CHAR, E_LEXER_UNTERMINATED_STRING,
};
use thiserror::Error;

/// Error produced when the source cannot be tokenized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character outside every recognized class at a token boundary
    #[error("unexpected character: {ch}")]
    UnexpectedCharacter {
        /// Line the character was found on
        line: u32,
        /// The offending character
        ch: char,
    },

    /// End of input reached inside a string literal
    #[error("incomplete string: {partial}")]
    UnterminatedString {
        /// Line the input ended on
        line: u32,
        /// Text captured so far, opening quote included
        partial: String,
    },
}

impl LexError {
    /// Returns the 1-based line the error was detected on.
    pub fn line(&self) -> u32 {
        match self {
            LexError::UnexpectedCharacter { line, .. } | LexError::UnterminatedString { line, .. } => {
                *line
            },
        }
    }

    /// Returns the diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnexpectedCharacter { .. } => E_LEXER_UNEXPECTED_CHAR,
            LexError::UnterminatedString { .. } => E_LEXER_UNTERMINATED_STRING,
        }
    }

    /// Converts the error into a renderable diagnostic.
    ///
    /// ```
    /// use glox_lex::LexError;
    ///
    /// let err = LexError::UnexpectedCharacter { line: 3, ch: '#' };
    /// assert_eq!(
    ///     err.to_diagnostic().to_string(),
    ///     "[line 3] Error: unexpected character: #"
    /// );
    /// ```
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.line(), self.to_string()).with_code(self.code())
    }
}

/// Result alias for scanner operations
pub type LexResult<T> = std::result::Result<T, LexError>;
