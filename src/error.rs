//! Error types for INI parsing and writing.
//!
//! ## Error Categories
//!
//! - **Syntax errors**: malformed input with line/column information
//! - **Write-state errors**: structural write requests issued out of order
//! - **Configuration errors**: invalid reader/writer options, rejected eagerly
//! - **I/O errors**: failures in the underlying source or sink
//!
//! ## Examples
//!
//! ```rust
//! use inifile::{from_str, Error};
//!
//! let result = from_str("[Unterminated");
//! assert!(matches!(result, Err(Error::Syntax { line: 1, .. })));
//! ```

use crate::write::WriteState;
use std::io;
use thiserror::Error;

/// Represents all possible errors that can occur while reading or writing INI text.
///
/// Parse errors carry the 1-based line and column at the point of failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Structural parse error with position information
    #[error("{msg} - line {line}, column {column}")]
    Syntax {
        line: usize,
        column: usize,
        msg: String,
    },

    /// A write request issued while the writer was in the wrong state.
    ///
    /// This is a usage error on the caller's side, not a data error.
    #[error("cannot {operation}: writer state is {state}")]
    WriteState {
        operation: &'static str,
        state: WriteState,
    },

    /// Invalid reader or writer configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Creates a syntax error with line and column information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inifile::Error;
    ///
    /// let err = Error::syntax(10, 5, "expected section end (])");
    /// assert!(err.to_string().contains("line 10"));
    /// ```
    pub fn syntax(line: usize, column: usize, msg: impl Into<String>) -> Self {
        Error::Syntax {
            line,
            column,
            msg: msg.into(),
        }
    }

    /// Creates a write-state error for an operation attempted in the wrong state.
    pub fn write_state(operation: &'static str, state: WriteState) -> Self {
        Error::WriteState { operation, state }
    }

    /// Creates a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Creates an I/O error from a display message.
    pub fn io(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
