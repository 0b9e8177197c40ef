//! Configuration options for the reader and writer.
//!
//! This module provides two builder-style option structs:
//!
//! - [`ReadOptions`]: delimiter sets and lexing toggles for [`IniReader`](crate::IniReader)
//! - [`WriteOptions`]: delimiters, indentation and line termination for
//!   [`IniWriter`](crate::IniWriter)
//!
//! ## Examples
//!
//! ```rust
//! use inifile::{ReadOptions, WriteOptions};
//!
//! // Parse hash-commented, colon-assigned input with line continuation
//! let read = ReadOptions::new()
//!     .with_comment_delimiters(&['#'])?
//!     .with_assign_delimiters(&[':'])?
//!     .with_line_continuation(true);
//!
//! // Emit LF-terminated output indented by four spaces
//! let write = WriteOptions::new()
//!     .with_indent(4)
//!     .with_line_ending("\n");
//! # Ok::<(), inifile::Error>(())
//! ```

use crate::{Error, Result};

/// Lexing configuration for [`IniReader`](crate::IniReader).
///
/// Options are fixed at reader construction and affect every subsequent read.
/// Delimiter sets must be non-empty; when several delimiter characters are
/// configured, the first match wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadOptions {
    /// Characters that introduce a comment (default `;`).
    pub comment_delimiters: Vec<char>,
    /// Characters that separate a key from its value (default `=`).
    pub assign_delimiters: Vec<char>,
    /// Discard comments instead of capturing them.
    pub ignore_comments: bool,
    /// Honor a trailing backslash as a logical-line continuation.
    pub line_continuation: bool,
    /// Recognize a comment after a key's value on the same line (default true).
    pub accept_comment_after_key: bool,
    /// Accept a key line with no assignment operator, yielding an empty value.
    pub accept_no_assignment: bool,
    /// Consume all text after the assignment operator verbatim, disabling
    /// quote and comment detection within the value.
    pub consume_all_key_text: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        ReadOptions {
            comment_delimiters: vec![';'],
            assign_delimiters: vec!['='],
            ignore_comments: false,
            line_continuation: false,
            accept_comment_after_key: true,
            accept_no_assignment: false,
            consume_all_key_text: false,
        }
    }
}

impl ReadOptions {
    /// Creates the default reader options (`;` comments, `=` assignment).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the comment delimiter set.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `delimiters` is empty.
    pub fn with_comment_delimiters(mut self, delimiters: &[char]) -> Result<Self> {
        if delimiters.is_empty() {
            return Err(Error::config("must supply at least one comment delimiter"));
        }
        self.comment_delimiters = delimiters.to_vec();
        Ok(self)
    }

    /// Sets the assignment delimiter set.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `delimiters` is empty.
    pub fn with_assign_delimiters(mut self, delimiters: &[char]) -> Result<Self> {
        if delimiters.is_empty() {
            return Err(Error::config("must supply at least one assign delimiter"));
        }
        self.assign_delimiters = delimiters.to_vec();
        Ok(self)
    }

    /// Discards comments instead of capturing them.
    #[must_use]
    pub fn with_ignore_comments(mut self, ignore: bool) -> Self {
        self.ignore_comments = ignore;
        self
    }

    /// Honors a trailing backslash as a logical-line continuation.
    #[must_use]
    pub fn with_line_continuation(mut self, continuation: bool) -> Self {
        self.line_continuation = continuation;
        self
    }

    /// Controls whether a comment is recognized after a key's value.
    #[must_use]
    pub fn with_comment_after_key(mut self, accept: bool) -> Self {
        self.accept_comment_after_key = accept;
        self
    }

    /// Accepts key lines with no assignment operator (empty value).
    #[must_use]
    pub fn with_no_assignment(mut self, accept: bool) -> Self {
        self.accept_no_assignment = accept;
        self
    }

    /// Consumes all text after the assignment operator verbatim.
    #[must_use]
    pub fn with_consume_all_key_text(mut self, consume: bool) -> Self {
        self.consume_all_key_text = consume;
        self
    }

    pub(crate) fn is_comment(&self, ch: char) -> bool {
        self.comment_delimiters.contains(&ch)
    }

    pub(crate) fn is_assign(&self, ch: char) -> bool {
        self.assign_delimiters.contains(&ch)
    }
}

/// Emission configuration for [`IniWriter`](crate::IniWriter).
///
/// The indentation is a count of spaces prefixed to every emitted line, so the
/// unsigned type makes a negative width unrepresentable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteOptions {
    /// Number of spaces prefixed to every emitted line (default 0).
    pub indent: usize,
    /// Character introducing emitted comments (default `;`).
    pub comment_delimiter: char,
    /// Character separating keys from values (default `=`).
    pub assign_delimiter: char,
    /// Line terminator (default CRLF).
    pub line_ending: String,
    /// Wrap emitted values in double quotes.
    pub use_value_quotes: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            indent: 0,
            comment_delimiter: ';',
            assign_delimiter: '=',
            line_ending: "\r\n".to_string(),
            use_value_quotes: false,
        }
    }
}

impl WriteOptions {
    /// Creates the default writer options (no indent, `;`, `=`, CRLF).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation width in spaces.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the emitted comment delimiter.
    #[must_use]
    pub fn with_comment_delimiter(mut self, delimiter: char) -> Self {
        self.comment_delimiter = delimiter;
        self
    }

    /// Sets the emitted assignment delimiter.
    #[must_use]
    pub fn with_assign_delimiter(mut self, delimiter: char) -> Self {
        self.assign_delimiter = delimiter;
        self
    }

    /// Sets the line terminator.
    #[must_use]
    pub fn with_line_ending(mut self, ending: impl Into<String>) -> Self {
        self.line_ending = ending.into();
        self
    }

    /// Wraps emitted values in double quotes.
    #[must_use]
    pub fn with_value_quotes(mut self, quote: bool) -> Self {
        self.use_value_quotes = quote;
        self
    }
}
