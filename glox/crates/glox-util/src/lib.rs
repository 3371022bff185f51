//! glox-util - Shared foundation types for the glox toolchain
//!
//! The scanner and the driver agree on two things that live here:
//!
//! - how errors travel: the [`Reporter`] sink, the collecting [`Handler`],
//!   and the [`Diagnostic`] record with its `[line N] Error: msg` rendering;
//! - which hash map backs read-mostly tables such as the keyword table
//!   ([`FxHashMap`]).

pub mod diagnostic;

pub use diagnostic::{Diagnostic, DiagnosticCode, Handler, Reporter};

// Re-export commonly used types
pub use rustc_hash::FxHashMap;
