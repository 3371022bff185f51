//! glox-drv - Scanner Driver
//!
//! Reads Lox source from a file or an interactive prompt, runs it through
//! `glox-lex`, and prints the tokens or the scan error.
//!
//! The interactive loop is written against `BufRead`/`Write` so it can be
//! driven from memory:
//!
//! ```
//! use glox_drv::{Config, Session};
//!
//! let mut config = Config::default();
//! config.repl.banner = false;
//! let session = Session::new(&config, None);
//!
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! session.run_prompt(&b"print 1;\n"[..], &mut out, &mut err).unwrap();
//!
//! let out = String::from_utf8(out).unwrap();
//! assert!(out.contains("[1]print:Print(nil)"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::debug;

pub use cli::Cli;
pub use config::Config;
pub use error::{DriverError, Result};
pub use output::OutputFormat;

/// Version reported by the banner and `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Load configuration from an explicit file, or search the default
/// locations when none was given.
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Run the mode selected on the command line against stdio.
pub fn run(cli: &Cli, config: &Config) -> Result<()> {
    let session = Session::new(config, cli.format);

    match &cli.script {
        Some(path) => session.run_file(path),
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let stderr = io::stderr();
            session.run_prompt(stdin.lock(), &mut stdout.lock(), &mut stderr.lock())
        },
    }
}

/// Settings resolved from the configuration file and command line.
#[derive(Debug, Clone)]
pub struct Session {
    format: OutputFormat,
    prompt: String,
    banner: bool,
}

impl Session {
    /// Resolve settings. An explicit `format` beats the configuration file.
    pub fn new(config: &Config, format: Option<OutputFormat>) -> Self {
        Self {
            format: format.unwrap_or(config.output.format),
            prompt: config.repl.prompt.clone(),
            banner: config.repl.banner,
        }
    }

    /// The output format in effect.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Scan a whole script file, printing its tokens to stdout.
    ///
    /// A scan error is printed to stderr before it is returned. Bytes that
    /// are not valid UTF-8 become U+FFFD, which the scanner rejects as an
    /// unexpected character outside string literals.
    pub fn run_file(&self, path: &Path) -> Result<()> {
        let bytes = std::fs::read(path).map_err(|source| DriverError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "read script");

        let source = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = source {
            debug!(path = %path.display(), "script is not valid UTF-8");
        }

        let stdout = io::stdout();
        let stderr = io::stderr();
        self.run_source(&source, &mut stdout.lock(), &mut stderr.lock())
    }

    /// Scan one source buffer, writing tokens to `out` or the diagnostic to
    /// `err`.
    pub fn run_source<O: Write, E: Write>(&self, source: &str, out: &mut O, err: &mut E) -> Result<()> {
        let mut reporter = |line: u32, message: &str| debug!(line, reason = message, "scan failed");

        match glox_lex::scan_with(source, &mut reporter) {
            Ok(tokens) => {
                debug!(tokens = tokens.len(), "scanned source");
                output::write_tokens(out, &tokens, self.format)
            },
            Err(error) => {
                output::write_diagnostic(err, &error, self.format)?;
                Err(error.into())
            },
        }
    }

    /// Run the interactive prompt until `input` is exhausted.
    ///
    /// Each line is scanned on its own, so line numbers restart at 1 and a
    /// string cannot continue onto the next line. Scan errors are printed and
    /// the loop keeps going.
    pub fn run_prompt<R: BufRead, O: Write, E: Write>(
        &self,
        mut input: R,
        out: &mut O,
        err: &mut E,
    ) -> Result<()> {
        if self.banner {
            writeln!(out, "Lox (glox) {}", VERSION)?;
        }

        let mut line = String::new();
        let mut count = 0usize;
        loop {
            write!(out, "{}", self.prompt)?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            count += 1;

            let source = line.trim_end_matches(&['\n', '\r'][..]);
            match self.run_source(source, out, err) {
                Ok(()) | Err(DriverError::Scan(_)) => {},
                Err(e) => return Err(e),
            }
        }

        debug!(lines = count, "end of input");
        Ok(())
    }
}
