//! The reserved-word table.
//!
//! Built once on first use and never written afterwards, so any number of
//! scanners on any number of threads can read it without locking.

use std::sync::LazyLock;

use glox_util::FxHashMap;

use crate::token::TokenKind;

static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    TokenKind::KEYWORDS
        .iter()
        .map(|&kind| (kind.as_str(), kind))
        .collect()
});

/// Looks up the reserved word spelled exactly `ident`.
///
/// Returns `None` for anything else, which the scanner turns into an
/// identifier.
///
/// ```
/// use glox_lex::{keyword, TokenKind};
///
/// assert_eq!(keyword("class"), Some(TokenKind::Class));
/// assert_eq!(keyword("Class"), None);
/// assert_eq!(keyword("classy"), None);
/// ```
pub fn keyword(ident: &str) -> Option<TokenKind> {
    KEYWORDS.get(ident).copied()
}
