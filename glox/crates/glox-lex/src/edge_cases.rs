//! Edge case tests for glox-lex
