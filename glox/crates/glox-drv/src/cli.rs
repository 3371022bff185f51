//! Command line definition.

use std::path::PathBuf;

use clap::Parser;

use crate::output::OutputFormat;

/// glox - scan Lox source into tokens
///
/// With a script path, prints the tokens of that file. Without one, starts
/// an interactive prompt that scans each line as it is entered.
#[derive(Parser, Debug)]
#[command(name = "glox")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan Lox source into tokens", long_about = None)]
pub struct Cli {
    /// Script to scan (omit for an interactive prompt)
    pub script: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "GLOX_VERBOSE")]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "GLOX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "GLOX_NO_COLOR")]
    pub no_color: bool,

    /// Output format (overrides the configuration file)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}
