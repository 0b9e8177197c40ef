//! Streaming INI lexer.
//!
//! This module provides [`IniReader`], a pull-based tokenizer that walks a
//! character stream one rune at a time and emits one structural [`Item`] per
//! [`read`](IniReader::read) call: a section header, a key/value pair, or a
//! blank/comment line.
//!
//! ## Overview
//!
//! - **Single-pass lexing**: each `read` advances exactly to the next
//!   structural item, no backtracking
//! - **Position tracking**: every item and every error carries a 1-based
//!   line and column
//! - **Configurable dialect**: delimiter sets and lexing toggles via
//!   [`ReadOptions`](crate::ReadOptions)
//!
//! ## Usage
//!
//! ```rust
//! use inifile::{IniReader, Item};
//!
//! let mut reader = IniReader::from_str("[General]\nname = test ; a comment\n");
//!
//! let item = reader.read()?.unwrap();
//! assert!(matches!(item, Item::Section { .. }));
//!
//! let item = reader.read()?.unwrap();
//! match item {
//!     Item::Key { name, value, comment, .. } => {
//!         assert_eq!(name, "name");
//!         assert_eq!(value, "test");
//!         assert_eq!(comment.as_deref(), Some("a comment"));
//!     }
//!     other => panic!("expected a key, got {:?}", other),
//! }
//!
//! assert!(reader.read()?.is_none());
//! # Ok::<(), inifile::Error>(())
//! ```

use crate::options::ReadOptions;
use crate::{Error, Result};

/// One structural unit read from the INI stream.
///
/// Every variant carries the 1-based line and column at which the item
/// started. `Empty` represents a blank line or a comment-only line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// A `[name]` section header. Text after `]` is discarded during lexing,
    /// so a section item never carries a comment of its own.
    Section {
        name: String,
        comment: Option<String>,
        line: usize,
        column: usize,
    },
    /// A key/value pair with an optional trailing comment.
    Key {
        name: String,
        value: String,
        comment: Option<String>,
        line: usize,
        column: usize,
    },
    /// A blank line, or a comment-only line if `comment` is present.
    Empty {
        comment: Option<String>,
        line: usize,
        column: usize,
    },
}

impl Item {
    /// The 1-based line on which this item started.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Item::Section { line, .. } | Item::Key { line, .. } | Item::Empty { line, .. } => *line,
        }
    }

    /// The 1-based column at which this item started.
    #[must_use]
    pub fn column(&self) -> usize {
        match self {
            Item::Section { column, .. }
            | Item::Key { column, .. }
            | Item::Empty { column, .. } => *column,
        }
    }

    /// The comment attached to this item, if any.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        match self {
            Item::Section { comment, .. }
            | Item::Key { comment, .. }
            | Item::Empty { comment, .. } => comment.as_deref(),
        }
    }
}

/// The reader's position in its lifecycle.
///
/// `EndOfFile`, `Error` and `Closed` are terminal: once reached, further
/// reads are no-ops returning `Ok(None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadState {
    /// No read has been performed yet.
    Initial,
    /// At least one item has been read and more may follow.
    Interactive,
    /// The end of the stream was reached.
    EndOfFile,
    /// A structural parse error occurred; the stream is unusable beyond it.
    Error,
    /// The reader was closed.
    Closed,
}

/// The streaming INI lexer.
///
/// Created via [`IniReader::from_str`] or [`IniReader::with_options`].
/// Adapters that read from files or other byte streams should collect the
/// input into a `String` first (see [`crate::from_reader`]), which keeps the
/// underlying handle's release scoped and deterministic.
pub struct IniReader<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
    state: ReadState,
    options: ReadOptions,
}

impl<'a> IniReader<'a> {
    /// Creates a reader over `input` with default options.
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn from_str(input: &'a str) -> Self {
        Self::with_options(input, ReadOptions::default())
    }

    /// Creates a reader over `input` with the given options.
    #[must_use]
    pub fn with_options(input: &'a str, options: ReadOptions) -> Self {
        IniReader {
            input,
            position: 0,
            line: 1,
            column: 1,
            state: ReadState::Initial,
            options,
        }
    }

    /// The reader's current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ReadState {
        self.state
    }

    /// The 1-based line of the read cursor.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// The 1-based column of the read cursor.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Advances to the next structural item.
    ///
    /// Returns `Ok(Some(item))` for each item, `Ok(None)` once the end of the
    /// stream is reached or after [`close`](Self::close).
    ///
    /// # Errors
    ///
    /// Returns a syntax error carrying line/column on malformed input
    /// (missing `]`, missing assignment operator, unterminated quote). After
    /// an error the reader is in [`ReadState::Error`] and subsequent calls
    /// return `Ok(None)`.
    pub fn read(&mut self) -> Result<Option<Item>> {
        match self.state {
            ReadState::Closed | ReadState::EndOfFile | ReadState::Error => return Ok(None),
            ReadState::Initial | ReadState::Interactive => {}
        }
        self.state = ReadState::Interactive;
        match self.read_next() {
            Ok(item) => Ok(item),
            Err(err) => {
                self.state = ReadState::Error;
                Err(err)
            }
        }
    }

    /// Reads forward until the next section header.
    ///
    /// Non-section items are discarded. Returns `Ok(None)` if the stream ends
    /// first.
    ///
    /// # Errors
    ///
    /// Propagates any syntax error encountered while skipping.
    pub fn next_section(&mut self) -> Result<Option<Item>> {
        while let Some(item) = self.read()? {
            if matches!(item, Item::Section { .. }) {
                return Ok(Some(item));
            }
        }
        Ok(None)
    }

    /// Reads forward until the next key within the current section.
    ///
    /// Returns `Ok(None)` if a section boundary is crossed or the stream ends
    /// before a key is found. The section item itself is consumed.
    ///
    /// # Errors
    ///
    /// Propagates any syntax error encountered while skipping.
    pub fn next_key(&mut self) -> Result<Option<Item>> {
        while let Some(item) = self.read()? {
            match item {
                Item::Section { .. } => return Ok(None),
                Item::Key { .. } => return Ok(Some(item)),
                Item::Empty { .. } => {}
            }
        }
        Ok(None)
    }

    /// Closes the reader. Idempotent; further reads return `Ok(None)`.
    pub fn close(&mut self) {
        self.state = ReadState::Closed;
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.input[self.position..].chars().next()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn read_next(&mut self) -> Result<Option<Item>> {
        loop {
            let line = self.line;
            let column = self.column;

            let ch = match self.peek_char() {
                Some(ch) => ch,
                None => {
                    self.state = ReadState::EndOfFile;
                    return Ok(None);
                }
            };

            if self.options.is_comment(ch) {
                self.next_char();
                let text = self.read_comment();
                let comment = if self.options.ignore_comments {
                    None
                } else {
                    Some(text)
                };
                return Ok(Some(Item::Empty {
                    comment,
                    line,
                    column,
                }));
            }

            match ch {
                ' ' | '\t' | '\r' => {
                    self.skip_line_whitespace();
                    // retry the same logical item past the indentation
                }
                '\n' => {
                    self.next_char();
                    return Ok(Some(Item::Empty {
                        comment: None,
                        line,
                        column,
                    }));
                }
                '[' => return self.read_section(line, column).map(Some),
                _ => return self.read_key(line, column).map(Some),
            }
        }
    }

    fn read_section(&mut self, line: usize, column: usize) -> Result<Item> {
        self.next_char(); // consume '['
        let mut name = String::new();

        loop {
            match self.peek_char() {
                Some(']') => break,
                Some('\n') | None => {
                    return Err(Error::syntax(
                        self.line,
                        self.column,
                        "expected section end (])",
                    ));
                }
                Some(ch) => {
                    name.push(ch);
                    self.next_char();
                }
            }
        }

        // everything after ']' is garbage, comment delimiters included
        self.consume_to_end();
        trim_trailing_whitespace(&mut name);

        Ok(Item::Section {
            name,
            comment: None,
            line,
            column,
        })
    }

    fn read_key(&mut self, line: usize, column: usize) -> Result<Item> {
        let mut name = String::new();

        loop {
            match self.peek_char() {
                Some(ch) if self.options.is_assign(ch) => {
                    self.next_char();
                    break;
                }
                Some('\n') | None => {
                    if self.options.accept_no_assignment {
                        break;
                    }
                    let delimiter = self.options.assign_delimiters.first().copied().unwrap_or('=');
                    return Err(Error::syntax(
                        self.line,
                        self.column,
                        format!("expected assignment operator ({delimiter})"),
                    ));
                }
                Some(ch) => {
                    name.push(ch);
                    self.next_char();
                }
            }
        }

        let value = self.read_key_value()?;
        let comment = self.search_for_comment();
        trim_trailing_whitespace(&mut name);

        Ok(Item::Key {
            name,
            value,
            comment,
            line,
            column,
        })
    }

    fn read_key_value(&mut self) -> Result<String> {
        self.skip_line_whitespace();

        let mut value = String::new();
        let mut found_quote = false;
        let mut characters = 0usize;

        loop {
            let ch = self.peek_char();
            if matches!(ch, Some(c) if !is_whitespace(c)) {
                characters += 1;
            }

            if !self.options.consume_all_key_text && ch == Some('"') {
                self.next_char();
                // only a quote in first position opens a quoted value
                if !found_quote && characters == 1 {
                    found_quote = true;
                    continue;
                }
                break;
            }

            let at_eol = matches!(ch, Some('\n') | None);
            if found_quote && at_eol {
                return Err(Error::syntax(
                    self.line,
                    self.column,
                    "expected closing quote (\")",
                ));
            }

            if self.options.line_continuation && ch == Some('\\') {
                let mut buffer = String::from('\\');
                self.next_char();
                while let Some(c) = self.peek_char() {
                    if c == '\n' || !is_whitespace(c) {
                        break;
                    }
                    self.next_char();
                    if c != '\r' {
                        buffer.push(c);
                    }
                }
                if self.peek_char() == Some('\n') {
                    // joined with the next physical line, no newline inserted
                    self.next_char();
                    continue;
                }
                // not a continuation: keep the backslash and trailing blanks
                value.push_str(&buffer);
                continue;
            }

            if !self.options.consume_all_key_text
                && !found_quote
                && self.options.accept_comment_after_key
                && matches!(ch, Some(c) if self.options.is_comment(c))
            {
                break;
            }

            if at_eol {
                break;
            }

            if let Some(c) = ch {
                value.push(c);
                self.next_char();
            }
        }

        if !found_quote {
            trim_trailing_whitespace(&mut value);
        }
        Ok(value)
    }

    /// Scans the remainder of the line for a trailing comment, consuming
    /// through the line feed.
    fn search_for_comment(&mut self) -> Option<String> {
        while let Some(ch) = self.next_char() {
            if ch == '\n' {
                return None;
            }
            if self.options.is_comment(ch) {
                if self.options.ignore_comments {
                    self.consume_to_end();
                    return None;
                }
                return Some(self.read_comment());
            }
        }
        None
    }

    /// Captures the rest of the line as a comment, consuming the line feed
    /// and trimming surrounding whitespace.
    fn read_comment(&mut self) -> String {
        self.skip_line_whitespace();
        let mut text = String::new();
        while let Some(ch) = self.peek_char() {
            self.next_char();
            if ch == '\n' {
                break;
            }
            text.push(ch);
        }
        trim_trailing_whitespace(&mut text);
        text
    }

    fn consume_to_end(&mut self) {
        while let Some(ch) = self.next_char() {
            if ch == '\n' {
                break;
            }
        }
    }

    /// Skips whitespace without ever crossing a line feed.
    fn skip_line_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch == '\n' || !is_whitespace(ch) {
                break;
            }
            self.next_char();
        }
    }
}

fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}

fn trim_trailing_whitespace(text: &mut String) {
    let trimmed = text.trim_end().len();
    text.truncate(trimmed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_position_accessors() {
        let item = Item::Empty {
            comment: Some("note".to_string()),
            line: 3,
            column: 5,
        };
        assert_eq!(item.line(), 3);
        assert_eq!(item.column(), 5);
        assert_eq!(item.comment(), Some("note"));
    }

    #[test]
    fn state_starts_initial() {
        let reader = IniReader::from_str("[A]\n");
        assert_eq!(reader.state(), ReadState::Initial);
        assert_eq!(reader.line(), 1);
        assert_eq!(reader.column(), 1);
    }

    #[test]
    fn close_is_idempotent() {
        let mut reader = IniReader::from_str("[A]\n");
        reader.close();
        reader.close();
        assert_eq!(reader.state(), ReadState::Closed);
        assert_eq!(reader.read().unwrap(), None);
    }
}
