//! Error types for the spellfix library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`SpellfixError`] enum. Loading data files is the only place where errors
//! are fatal; correcting a word never fails for ordinary input.
//!
//! # Examples
//!
//! ```
//! use spellfix::error::{Result, SpellfixError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpellfixError::invalid_input("empty word"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for spellfix operations.
#[derive(Error, Debug)]
pub enum SpellfixError {
    /// I/O errors (missing data files, unreadable paths)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV decoding errors in the count tables
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A data file was readable but a row could not be interpreted
    #[error("Parse error: {0}")]
    Parse(String),

    /// A word that cannot be scored (empty, or outside the alphabet)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration that cannot drive a corrector
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with SpellfixError.
pub type Result<T> = std::result::Result<T, SpellfixError>;

impl SpellfixError {
    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        SpellfixError::Parse(msg.into())
    }

    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        SpellfixError::InvalidInput(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SpellfixError::InvalidConfig(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SpellfixError::Other(msg.into())
    }
}
