//! INI emission.
//!
//! This module provides [`IniWriter`], a line-oriented emitter driven by an
//! explicit write-state machine. The state machine enforces valid emission
//! order: keys may only be written once a section header has been written,
//! and nothing may be written after [`close`](IniWriter::close).
//!
//! Each call composes its complete line (indentation, body, line terminator)
//! in memory and hands it to the sink in a single write, so a rejected call
//! never emits a partial line.
//!
//! ## Usage
//!
//! ```rust
//! use inifile::IniWriter;
//!
//! let mut writer = IniWriter::new(Vec::new());
//! writer.write_section("General", None)?;
//! writer.write_key("name", "test", Some("a comment"))?;
//! writer.close()?;
//!
//! let output = String::from_utf8(writer.into_inner()).unwrap();
//! assert_eq!(output, "[General]\r\nname = test ; a comment\r\n");
//! # Ok::<(), inifile::Error>(())
//! ```

use crate::options::WriteOptions;
use crate::{Error, Result};
use std::fmt;
use std::io;

/// The writer's position in its required emission order.
///
/// Transitions are one-directional: `Start` → `BeforeFirstSection` →
/// `Section` → `Closed`, with `Closed` terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteState {
    /// Nothing has been written yet.
    Start,
    /// Blank or comment lines have been written, but no section header.
    BeforeFirstSection,
    /// A section header has been written; keys are accepted.
    Section,
    /// The writer was closed; every further write fails.
    Closed,
}

impl WriteState {
    /// Returns the state name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            WriteState::Start => "Start",
            WriteState::BeforeFirstSection => "BeforeFirstSection",
            WriteState::Section => "Section",
            WriteState::Closed => "Closed",
        }
    }
}

impl fmt::Display for WriteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The INI writer.
///
/// Emits structural lines to any [`io::Write`] sink under the ordering rules
/// of [`WriteState`]. Created via [`IniWriter::new`] or
/// [`IniWriter::with_options`].
pub struct IniWriter<W: io::Write> {
    sink: W,
    options: WriteOptions,
    state: WriteState,
    indent: String,
}

impl<W: io::Write> IniWriter<W> {
    /// Creates a writer over `sink` with default options (CRLF, `;`, `=`).
    pub fn new(sink: W) -> Self {
        Self::with_options(sink, WriteOptions::default())
    }

    /// Creates a writer over `sink` with the given options.
    pub fn with_options(sink: W, options: WriteOptions) -> Self {
        let indent = " ".repeat(options.indent);
        IniWriter {
            sink,
            options,
            state: WriteState::Start,
            indent,
        }
    }

    /// The writer's current state.
    #[must_use]
    pub fn state(&self) -> WriteState {
        self.state
    }

    /// Writes a `[name]` section header with an optional trailing comment
    /// and transitions the writer into the `Section` state.
    ///
    /// # Errors
    ///
    /// Returns a write-state error if the writer is closed, or an I/O error
    /// from the sink.
    pub fn write_section(&mut self, name: &str, comment: Option<&str>) -> Result<()> {
        self.ensure_open("write a section")?;
        self.state = WriteState::Section;

        let mut line = format!("[{name}]");
        self.append_comment(&mut line, comment);
        self.write_line(&line)
    }

    /// Writes a `key <assign> value` line with an optional trailing comment.
    ///
    /// The value is wrapped in double quotes when value quoting is enabled.
    /// Embedded line feeds in the value are stripped; values are single
    /// physical lines by construction.
    ///
    /// # Errors
    ///
    /// Returns a write-state error unless the writer is in the `Section`
    /// state, or an I/O error from the sink.
    pub fn write_key(&mut self, key: &str, value: &str, comment: Option<&str>) -> Result<()> {
        self.ensure_open("write a key")?;
        if self.state != WriteState::Section {
            return Err(Error::write_state("write a key", self.state));
        }

        let mut line = format!(
            "{key} {} {}",
            self.options.assign_delimiter,
            self.key_value(value)
        );
        self.append_comment(&mut line, comment);
        self.write_line(&line)
    }

    /// Writes a comment-only line, or a blank line when `comment` is absent.
    ///
    /// While still in the `Start` state this transitions the writer to
    /// `BeforeFirstSection`.
    ///
    /// # Errors
    ///
    /// Returns a write-state error if the writer is closed, or an I/O error
    /// from the sink.
    pub fn write_empty(&mut self, comment: Option<&str>) -> Result<()> {
        self.ensure_open("write an empty line")?;
        if self.state == WriteState::Start {
            self.state = WriteState::BeforeFirstSection;
        }

        match comment {
            Some(text) => {
                let line = format!("{} {text}", self.options.comment_delimiter);
                self.write_line(&line)
            }
            None => self.write_line(""),
        }
    }

    /// Flushes the underlying sink.
    ///
    /// # Errors
    ///
    /// Returns a write-state error if the writer is closed, or an I/O error
    /// from the sink.
    pub fn flush(&mut self) -> Result<()> {
        self.ensure_open("flush")?;
        self.sink.flush()?;
        Ok(())
    }

    /// Flushes the sink and transitions the writer into the terminal
    /// `Closed` state. Calling `close` again is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the flush fails.
    pub fn close(&mut self) -> Result<()> {
        if self.state == WriteState::Closed {
            return Ok(());
        }
        self.sink.flush()?;
        self.state = WriteState::Closed;
        Ok(())
    }

    /// Consumes the writer, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn ensure_open(&self, operation: &'static str) -> Result<()> {
        if self.state == WriteState::Closed {
            return Err(Error::write_state(operation, self.state));
        }
        Ok(())
    }

    fn key_value(&self, value: &str) -> String {
        let cleaned = value.replace('\n', "");
        if self.options.use_value_quotes {
            format!("\"{cleaned}\"")
        } else {
            cleaned
        }
    }

    fn append_comment(&self, line: &mut String, comment: Option<&str>) {
        if let Some(text) = comment {
            line.push(' ');
            line.push(self.options.comment_delimiter);
            line.push(' ');
            line.push_str(text);
        }
    }

    // one write_all per line so a failed call leaves no partial line behind
    fn write_line(&mut self, body: &str) -> Result<()> {
        let mut line =
            String::with_capacity(self.indent.len() + body.len() + self.options.line_ending.len());
        line.push_str(&self.indent);
        line.push_str(body);
        line.push_str(&self.options.line_ending);
        self.sink.write_all(line.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_display_names() {
        assert_eq!(WriteState::Start.to_string(), "Start");
        assert_eq!(WriteState::Closed.as_str(), "Closed");
    }

    #[test]
    fn starts_in_start_state() {
        let writer = IniWriter::new(Vec::new());
        assert_eq!(writer.state(), WriteState::Start);
    }
}
