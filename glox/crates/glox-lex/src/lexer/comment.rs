//! Comment skipping.
//!
//! Lox only has line comments. Block comments are not part of the language,
//! so `/*` scans as a slash followed by a star.

use crate::lexer::Scanner;

impl<'a> Scanner<'a> {
    /// Skips the rest of a line comment.
    ///
    /// Called with the cursor just past `//`. Stops in front of the newline
    /// (or at the end of input) so the newline is still counted.
    pub(super) fn skip_line_comment(&mut self) {
        self.cursor.eat_while(|c| c != '\n');
    }
}
