//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides the types the scanner uses to hand errors to
//! whoever drives it:
//!
//! - [`Reporter`] is the sink a driver passes in. The scanner calls it with
//!   a line number and a message right before it gives up.
//! - [`Handler`] is the stock sink. It collects [`Diagnostic`]s so the
//!   driver can render them afterwards.
//! - [`Diagnostic`] renders as `[line <N>] Error<where>: <message>`.
//!
//! # Examples
//!
//! ```
//! use glox_util::diagnostic::{Handler, Reporter};
//!
//! let mut handler = Handler::new();
//! handler.report(3, "unexpected character: #");
//!
//! assert!(handler.has_errors());
//! assert_eq!(
//!     handler.diagnostics()[0].to_string(),
//!     "[line 3] Error: unexpected character: #"
//! );
//! ```

mod codes;

pub use codes::DiagnosticCode;
pub use codes::{E_LEXER_UNEXPECTED_CHAR, E_LEXER_UNTERMINATED_STRING};

use std::fmt;

/// A sink for `(line, message)` error reports.
///
/// Implemented by [`Handler`] and by any `FnMut(u32, &str)` closure, so a
/// caller can pass `&mut |line, msg| { ... }` when it only wants the facts.
pub trait Reporter {
    /// Receive one error report. `line` is 1-based.
    fn report(&mut self, line: u32, message: &str);
}

impl<F> Reporter for F
where
    F: FnMut(u32, &str),
{
    fn report(&mut self, line: u32, message: &str) {
        self(line, message)
    }
}

/// An error message tied to a source line
///
/// # Examples
///
/// ```
/// use glox_util::diagnostic::{Diagnostic, DiagnosticCode};
///
/// let diag = Diagnostic::error(2, "incomplete string: \"abc")
///     .with_code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING);
/// assert_eq!(diag.to_string(), "[line 2] Error: incomplete string: \"abc");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line the error was detected on
    pub line: u32,
    /// Text spliced between `Error` and the colon (empty for scanner errors)
    pub location: String,
    /// Main diagnostic message
    pub message: String,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
}

impl Diagnostic {
    /// Create an error diagnostic
    pub fn error(line: u32, message: impl Into<String>) -> Self {
        Self {
            line,
            location: String::new(),
            message: message.into(),
            code: None,
        }
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the `<where>` part of the rendered message
    ///
    /// ```
    /// use glox_util::diagnostic::Diagnostic;
    ///
    /// let diag = Diagnostic::error(1, "expected expression").with_location(" at end");
    /// assert_eq!(diag.to_string(), "[line 1] Error at end: expected expression");
    /// ```
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}] Error{}: {}",
            self.line, self.location, self.message
        )
    }
}

/// Handler for collecting diagnostics
///
/// # Examples
///
/// ```
/// use glox_util::diagnostic::{Diagnostic, Handler};
///
/// let mut handler = Handler::new();
/// handler.emit(Diagnostic::error(1, "unexpected character: @"));
///
/// if handler.has_errors() {
///     eprintln!("scan failed with {} error(s)", handler.error_count());
/// }
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    /// Record a pre-built diagnostic
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Get all diagnostics in the order they were reported
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl Reporter for Handler {
    fn report(&mut self, line: u32, message: &str) {
        self.emit(Diagnostic::error(line, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_diagnostic_error() {
        let diag = Diagnostic::error(4, "error message");
        assert_eq!(diag.line, 4);
        assert_eq!(diag.message, "error message");
        assert!(diag.location.is_empty());
        assert_eq!(diag.code, None);
    }

    #[test]
    fn test_diagnostic_with_code() {
        let diag = Diagnostic::error(1, "test").with_code(E_LEXER_UNEXPECTED_CHAR);
        assert_eq!(diag.code, Some(E_LEXER_UNEXPECTED_CHAR));
    }

    #[test]
    fn test_diagnostic_display_without_location() {
        let diag = Diagnostic::error(12, "unexpected character: ?");
        assert_eq!(diag.to_string(), "[line 12] Error: unexpected character: ?");
    }

    #[test]
    fn test_diagnostic_display_with_location() {
        let diag = Diagnostic::error(1, "oops").with_location(" at 'x'");
        assert_eq!(diag.to_string(), "[line 1] Error at 'x': oops");
    }

    #[test]
    fn test_handler_new() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
    }

    #[test]
    fn test_handler_report() {
        let mut handler = Handler::new();
        handler.report(7, "incomplete string: \"a");
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.diagnostics()[0].line, 7);
        assert_eq!(handler.diagnostics()[0].message, "incomplete string: \"a");
    }

    #[test]
    fn test_closure_reporter() {
        let mut seen = Vec::new();
        {
            let mut sink = |line: u32, message: &str| seen.push((line, message.to_string()));
            let reporter: &mut dyn Reporter = &mut sink;
            reporter.report(5, "unexpected character: $");
        }
        assert_eq!(seen, vec![(5, "unexpected character: $".to_string())]);
    }

    #[quickcheck]
    fn prop_display_starts_with_line_prefix(line: u32, message: String) -> bool {
        let rendered = Diagnostic::error(line, message.clone()).to_string();
        rendered.starts_with(&format!("[line {}] Error: ", line)) && rendered.ends_with(&message)
    }
}
