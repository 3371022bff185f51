//! Error handling for the glox driver.
//!
//! Every failure the driver can hit maps onto a sysexits-style process exit
//! code through [`DriverError::exit_code`].

use std::path::PathBuf;

use glox_lex::LexError;
use thiserror::Error;

/// Command line usage error (bad flags, too many scripts).
pub const EX_USAGE: u8 = 64;
/// The script could not be tokenized.
pub const EX_DATAERR: u8 = 65;
/// Internal failure, such as the logger refusing to initialize.
pub const EX_SOFTWARE: u8 = 70;
/// Reading the script or writing output failed.
pub const EX_IOERR: u8 = 74;
/// The configuration file is missing or malformed.
pub const EX_CONFIG: u8 = 78;

/// Main error type for the glox driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The configuration file could not be found or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The script file could not be read.
    #[error("could not read {}", path.display())]
    Read {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Writing tokens or diagnostics failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The script contains a lexical error. The diagnostic has already been
    /// written by the time this is returned.
    #[error(transparent)]
    Scan(#[from] LexError),
}

impl DriverError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            DriverError::Config(_) => EX_CONFIG,
            DriverError::Read { .. } | DriverError::Io(_) => EX_IOERR,
            DriverError::Json(_) => EX_SOFTWARE,
            DriverError::Scan(_) => EX_DATAERR,
        }
    }

    /// Whether the error was already shown to the user as a diagnostic.
    pub fn is_reported(&self) -> bool {
        matches!(self, DriverError::Scan(_))
    }
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
