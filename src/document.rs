//! The in-memory INI document model.
//!
//! A [`Document`] is an insertion-ordered collection of named [`Section`]s,
//! each holding an insertion-ordered mapping of key to [`Entry`]. The model
//! is the sole intermediary between the lexer and the writer: it is
//! populated by driving [`IniReader`](crate::IniReader) to exhaustion and
//! flushed by driving [`IniWriter`](crate::IniWriter) over its contents.
//!
//! ## Merge rules on load
//!
//! Two distinct rules apply while loading, easy to conflate and therefore
//! stated (and tested) separately:
//!
//! - **Duplicate section header**: the existing section is removed and a
//!   fresh, empty section is appended — a repeated `[X]` resets `X`.
//! - **Duplicate key within one section occurrence**: the first value wins;
//!   later repeats are silently dropped.
//!
//! ## Examples
//!
//! ```rust
//! let mut doc = inifile::from_str("[General]\nname = test ; a comment\n")?;
//! assert_eq!(doc.get("General", "name"), Some("test"));
//!
//! doc.set("General", "port", "8080");
//! let text = inifile::to_string(&doc)?;
//! assert_eq!(text, "[General]\r\nname = test ; a comment\r\nport = 8080\r\n");
//! # Ok::<(), inifile::Error>(())
//! ```

use crate::options::{ReadOptions, WriteOptions};
use crate::read::{IniReader, Item};
use crate::write::IniWriter;
use crate::{Error, Result};
use indexmap::IndexMap;
use std::io;

/// A single key's value and optional trailing comment within a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The raw trimmed value. Never contains a line feed.
    pub value: String,
    /// The trailing comment, if one was present or set.
    pub comment: Option<String>,
}

impl Entry {
    /// Creates an entry with no comment.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Entry {
            value: value.into(),
            comment: None,
        }
    }
}

/// A named group of key/value entries.
///
/// Entries preserve insertion order and keys are case-sensitively unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    comment: Option<String>,
    entries: IndexMap<String, Entry>,
}

impl Section {
    /// Creates an empty section.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Section {
            name: name.into(),
            comment: None,
            entries: IndexMap::new(),
        }
    }

    /// The section name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The section-level comment, if any.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Sets or clears the section-level comment.
    pub fn set_comment(&mut self, comment: Option<String>) {
        self.comment = comment;
    }

    /// Returns the value for `key`, or `None` if the key is absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|entry| entry.value.as_str())
    }

    /// Returns the full entry for `key`, or `None` if the key is absent.
    #[must_use]
    pub fn entry(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// Sets `key` to `value` with no comment.
    ///
    /// Creates the entry if absent; otherwise updates value and clears the
    /// comment in place, preserving the entry's position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.set_with_comment(key, value, None);
    }

    /// Sets `key` to `value` with an optional comment.
    ///
    /// Creates the entry if absent; otherwise updates value and comment in
    /// place, preserving the entry's position.
    pub fn set_with_comment(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        comment: Option<String>,
    ) {
        let entry = Entry {
            value: value.into(),
            comment,
        };
        self.entries.insert(key.into(), entry);
    }

    /// Removes `key`, returning its entry if it was present. The remaining
    /// entries keep their relative order.
    pub fn remove(&mut self, key: &str) -> Option<Entry> {
        self.entries.shift_remove(key)
    }

    /// Returns `true` if the section contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over `(key, entry)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    /// The number of entries in the section.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the section has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An ordered collection of uniquely named sections.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    sections: IndexMap<String, Section>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a document from INI text with the given reader options.
    ///
    /// Comment capture is forced on regardless of `options.ignore_comments`;
    /// the model retains comments so that a later save can reproduce them.
    ///
    /// # Errors
    ///
    /// Returns the first syntax error encountered; the partially built
    /// document is discarded.
    pub fn load_str(input: &str, mut options: ReadOptions) -> Result<Self> {
        options.ignore_comments = false;
        let mut reader = IniReader::with_options(input, options);
        let mut document = Document::new();
        let mut current: Option<String> = None;

        while let Some(item) = reader.read()? {
            match item {
                Item::Section { name, comment, .. } => {
                    // a repeated header resets the section and moves it to
                    // the end of the document
                    document.sections.shift_remove(&name);
                    let mut section = Section::new(name.clone());
                    section.comment = comment;
                    current = Some(name.clone());
                    document.sections.insert(name, section);
                }
                Item::Key {
                    name,
                    value,
                    comment,
                    line,
                    column,
                } => {
                    let section = current
                        .as_ref()
                        .and_then(|name| document.sections.get_mut(name));
                    match section {
                        Some(section) => {
                            // first occurrence of a key wins
                            if !section.entries.contains_key(&name) {
                                section.entries.insert(name, Entry { value, comment });
                            }
                        }
                        None => {
                            return Err(Error::syntax(
                                line,
                                column,
                                "key found before any section header",
                            ));
                        }
                    }
                }
                Item::Empty { .. } => {}
            }
        }

        Ok(document)
    }

    /// Writes the document to `sink` with the given writer options.
    ///
    /// Sections are emitted in model order, each header followed by its
    /// entries in insertion order. The writer is closed after the last item;
    /// on a failed write the sink is still released when the writer drops.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error from the sink.
    pub fn save<W: io::Write>(&self, sink: W, options: WriteOptions) -> Result<()> {
        let mut writer = IniWriter::with_options(sink, options);
        for section in self.sections.values() {
            writer.write_section(&section.name, section.comment())?;
            for (key, entry) in section.iter() {
                writer.write_key(key, &entry.value, entry.comment.as_deref())?;
            }
        }
        writer.close()
    }

    /// Returns the value of `key` in `section`, or `None` if either is
    /// absent.
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections.get(section).and_then(|s| s.get(key))
    }

    /// Sets `key` in `section` to `value` with no comment, creating the
    /// section and key if absent.
    pub fn set(&mut self, section: &str, key: impl Into<String>, value: impl Into<String>) {
        self.set_with_comment(section, key, value, None);
    }

    /// Sets `key` in `section` to `value` with an optional comment, creating
    /// the section and key if absent. An existing entry is updated in place,
    /// preserving its position.
    pub fn set_with_comment(
        &mut self,
        section: &str,
        key: impl Into<String>,
        value: impl Into<String>,
        comment: Option<String>,
    ) {
        self.sections
            .entry(section.to_string())
            .or_insert_with(|| Section::new(section))
            .set_with_comment(key, value, comment);
    }

    /// Looks up a section by name.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Looks up a section by name for mutation.
    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.get_mut(name)
    }

    /// Adds `section` to the end of the document, replacing (and returning)
    /// any existing section of the same name.
    pub fn add_section(&mut self, section: Section) -> Option<Section> {
        let previous = self.sections.shift_remove(&section.name);
        self.sections.insert(section.name.clone(), section);
        previous
    }

    /// Removes the section named `name`, returning it if it was present.
    /// The remaining sections keep their relative order.
    pub fn remove_section(&mut self, name: &str) -> Option<Section> {
        self.sections.shift_remove(name)
    }

    /// Returns `true` if a section named `name` exists.
    #[must_use]
    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Iterates over the sections in model order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    /// The number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if the document has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_new_has_no_comment() {
        let entry = Entry::new("v");
        assert_eq!(entry.value, "v");
        assert_eq!(entry.comment, None);
    }

    #[test]
    fn set_creates_section_and_key() {
        let mut doc = Document::new();
        doc.set("General", "name", "test");
        assert!(doc.contains_section("General"));
        assert_eq!(doc.get("General", "name"), Some("test"));
    }

    #[test]
    fn set_updates_in_place() {
        let mut doc = Document::new();
        doc.set("S", "a", "1");
        doc.set("S", "b", "2");
        doc.set_with_comment("S", "a", "3", Some("changed".to_string()));

        let section = doc.section("S").unwrap();
        let keys: Vec<_> = section.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(section.get("a"), Some("3"));
        assert_eq!(section.entry("a").unwrap().comment.as_deref(), Some("changed"));
    }

    #[test]
    fn set_without_comment_clears_comment() {
        let mut doc = Document::new();
        doc.set_with_comment("S", "a", "1", Some("note".to_string()));
        doc.set("S", "a", "2");
        assert_eq!(doc.section("S").unwrap().entry("a").unwrap().comment, None);
    }

    #[test]
    fn remove_preserves_order() {
        let mut section = Section::new("S");
        section.set("a", "1");
        section.set("b", "2");
        section.set("c", "3");
        let removed = section.remove("b").unwrap();
        assert_eq!(removed.value, "2");
        let keys: Vec<_> = section.keys().collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn add_section_replaces_at_end() {
        let mut doc = Document::new();
        doc.set("A", "k", "1");
        doc.set("B", "k", "2");
        doc.add_section(Section::new("A"));

        let names: Vec<_> = doc.sections().map(Section::name).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert!(doc.section("A").unwrap().is_empty());
    }
}
