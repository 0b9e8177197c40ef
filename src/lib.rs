//! # inifile
//!
//! A streaming INI parser and writer with an ordered, comment-preserving
//! document model.
//!
//! ## What it does
//!
//! `inifile` converts human-editable INI text into a structured in-memory
//! [`Document`] (sections, ordered key/value entries, inline comments) and
//! converts that model back into deterministic textual form. The dialect is
//! configurable: comment and assignment delimiter sets, quoted values,
//! backslash line continuation, trailing-comment capture.
//!
//! ## Key Features
//!
//! - **Streaming lexer**: [`IniReader`] is a pull-based tokenizer that emits
//!   one structural [`Item`] per call, with 1-based line/column on every
//!   item and every error
//! - **Checked emission order**: [`IniWriter`] is driven by an explicit
//!   write-state machine and rejects structurally invalid write sequences
//!   before any partial output
//! - **Ordered model**: sections and entries preserve insertion order, so
//!   load → save round-trips byte-identically
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! inifile = "0.1"
//! ```
//!
//! ### Parsing and querying
//!
//! ```rust
//! let doc = inifile::from_str("[General]\nname = test ; a comment\n")?;
//!
//! assert_eq!(doc.get("General", "name"), Some("test"));
//! let entry = doc.section("General").unwrap().entry("name").unwrap();
//! assert_eq!(entry.comment.as_deref(), Some("a comment"));
//! # Ok::<(), inifile::Error>(())
//! ```
//!
//! ### Building and rendering
//!
//! ```rust
//! use inifile::ini;
//!
//! let doc = ini! {
//!     ["General"]
//!     "name" = "test"
//! };
//!
//! assert_eq!(inifile::to_string(&doc)?, "[General]\r\nname = test\r\n");
//! # Ok::<(), inifile::Error>(())
//! ```
//!
//! ### Custom dialects
//!
//! ```rust
//! use inifile::ReadOptions;
//!
//! let options = ReadOptions::new()
//!     .with_comment_delimiters(&['#'])?
//!     .with_line_continuation(true);
//! let doc = inifile::from_str_with_options("[s]\nk = a\\\nb # note\n", options)?;
//! assert_eq!(doc.get("s", "k"), Some("ab"));
//! # Ok::<(), inifile::Error>(())
//! ```
//!
//! ## Scope
//!
//! Values are raw trimmed strings: there is no schema layer, no typed-value
//! conversion, no interpolation and no includes. The core never touches the
//! filesystem; adapters hand it text (see [`from_reader`]) and receive text
//! or bytes back.

pub mod document;
pub mod error;
pub mod macros;
pub mod options;
pub mod read;
pub mod write;

pub use document::{Document, Entry, Section};
pub use error::{Error, Result};
pub use options::{ReadOptions, WriteOptions};
pub use read::{IniReader, Item, ReadState};
pub use write::{IniWriter, WriteState};

use std::io;

/// Parses a [`Document`] from INI text with default options.
///
/// # Examples
///
/// ```rust
/// let doc = inifile::from_str("[General]\nname = test\n")?;
/// assert_eq!(doc.get("General", "name"), Some("test"));
/// # Ok::<(), inifile::Error>(())
/// ```
///
/// # Errors
///
/// Returns a syntax error carrying line/column on malformed input.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(input: &str) -> Result<Document> {
    Document::load_str(input, ReadOptions::default())
}

/// Parses a [`Document`] from INI text with custom reader options.
///
/// # Errors
///
/// Returns a syntax error carrying line/column on malformed input.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(input: &str, options: ReadOptions) -> Result<Document> {
    Document::load_str(input, options)
}

/// Parses a [`Document`] from an I/O stream of INI text.
///
/// The stream is read to completion before lexing begins; the handle is
/// released when this function returns, on every path.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
///
/// let doc = inifile::from_reader(Cursor::new(b"[General]\nname = test\n"))?;
/// assert_eq!(doc.get("General", "name"), Some("test"));
/// # Ok::<(), inifile::Error>(())
/// ```
///
/// # Errors
///
/// Returns an I/O error if reading fails, or a syntax error on malformed
/// input.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Document> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    from_str(&input)
}

/// Parses a [`Document`] from an I/O stream with custom reader options.
///
/// # Errors
///
/// Returns an I/O error if reading fails, or a syntax error on malformed
/// input.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader_with_options<R: io::Read>(
    mut reader: R,
    options: ReadOptions,
) -> Result<Document> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    from_str_with_options(&input, options)
}

/// Renders a [`Document`] to a string with default options (CRLF lines).
///
/// # Examples
///
/// ```rust
/// let doc = inifile::from_str("[General]\nname = test\n")?;
/// assert_eq!(inifile::to_string(&doc)?, "[General]\r\nname = test\r\n");
/// # Ok::<(), inifile::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if rendering fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(document: &Document) -> Result<String> {
    to_string_with_options(document, WriteOptions::default())
}

/// Renders a [`Document`] to a string with custom writer options.
///
/// # Errors
///
/// Returns an error if rendering fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options(document: &Document, options: WriteOptions) -> Result<String> {
    let mut buffer = Vec::new();
    document.save(&mut buffer, options)?;
    String::from_utf8(buffer).map_err(|err| Error::io(err.to_string()))
}

/// Writes a [`Document`] to a sink with default options.
///
/// # Errors
///
/// Returns an I/O error if writing to the sink fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W: io::Write>(writer: W, document: &Document) -> Result<()> {
    document.save(writer, WriteOptions::default())
}

/// Writes a [`Document`] to a sink with custom writer options.
///
/// # Errors
///
/// Returns an I/O error if writing to the sink fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W: io::Write>(
    writer: W,
    document: &Document,
    options: WriteOptions,
) -> Result<()> {
    document.save(writer, options)
}
