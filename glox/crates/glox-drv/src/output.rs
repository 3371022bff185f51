//! Token and diagnostic rendering.

use std::io::Write;

use clap::ValueEnum;
use glox_lex::{LexError, Token};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How tokens and diagnostics are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `[line]lexeme:Kind(literal)` listing per token
    #[default]
    Plain,
    /// One JSON object per line
    Json,
}

/// JSON shape of a scan error.
#[derive(Serialize)]
struct DiagnosticRecord<'a> {
    line: u32,
    code: String,
    message: &'a str,
}

/// Writes each token on its own line.
pub fn write_tokens<W: Write>(out: &mut W, tokens: &[Token], format: OutputFormat) -> Result<()> {
    for token in tokens {
        match format {
            OutputFormat::Plain => writeln!(out, "{}", token)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, token)?;
                writeln!(out)?;
            },
        }
    }
    out.flush()?;
    Ok(())
}

/// Writes a scan error as a single line.
pub fn write_diagnostic<W: Write>(out: &mut W, error: &LexError, format: OutputFormat) -> Result<()> {
    let diagnostic = error.to_diagnostic();
    match format {
        OutputFormat::Plain => writeln!(out, "{}", diagnostic)?,
        OutputFormat::Json => {
            let record = DiagnosticRecord {
                line: diagnostic.line,
                code: error.code().as_str(),
                message: &diagnostic.message,
            };
            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)?;
        },
    }
    out.flush()?;
    Ok(())
}
