//! Error types for the Milon library.
//!
//! The matching core is total over its input: any string tokenizes and
//! matches without failing. Errors only come from the pluggable parts
//! around it (custom tokenizer patterns, affix tables, configuration and
//! word-list files read by the CLI).
//!
//! # Examples
//!
//! ```
//! use milon::error::{MilonError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(MilonError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Milon operations.
#[derive(Error, Debug)]
pub enum MilonError {
    /// I/O errors (reading word lists, configuration files, input text)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenizer patterns, affix tables, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with MilonError.
pub type Result<T> = std::result::Result<T, MilonError>;

impl MilonError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        MilonError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        MilonError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        MilonError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        MilonError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
