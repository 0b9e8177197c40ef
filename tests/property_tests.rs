//! Property-based tests for the load/save round trip and the two merge
//! rules, across generated section/key/value alphabets.

use inifile::{from_str, to_string, to_string_with_options, Document, WriteOptions};
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,11}"
}

// trimmed, newline-free, delimiter-free: survives an unquoted round trip
fn value_strategy() -> impl Strategy<Value = String> {
    "([A-Za-z0-9][A-Za-z0-9 =_.]{0,18}[A-Za-z0-9])?"
}

fn document_strategy() -> impl Strategy<Value = Document> {
    prop::collection::vec(
        (
            name_strategy(),
            prop::collection::vec((name_strategy(), value_strategy()), 0..8),
        ),
        0..5,
    )
    .prop_map(|sections| {
        let mut doc = Document::new();
        for (section, entries) in sections {
            doc.add_section(inifile::Section::new(section.clone()));
            for (key, value) in entries {
                doc.set(&section, key, value);
            }
        }
        doc
    })
}

proptest! {
    #[test]
    fn prop_round_trip_document(doc in document_strategy()) {
        let rendered = to_string(&doc).unwrap();
        let parsed = from_str(&rendered).unwrap();
        prop_assert_eq!(&parsed, &doc);

        let rerendered = to_string(&parsed).unwrap();
        prop_assert_eq!(rerendered, rendered);
    }

    #[test]
    fn prop_first_key_wins(
        section in name_strategy(),
        key in name_strategy(),
        first in value_strategy(),
        second in value_strategy(),
    ) {
        let input = format!("[{section}]\n{key} = {first}\n{key} = {second}\n");
        let doc = from_str(&input).unwrap();
        prop_assert_eq!(doc.get(&section, &key), Some(first.as_str()));
    }

    #[test]
    fn prop_duplicate_section_replaces(
        section in name_strategy(),
        first_key in name_strategy(),
        second_key in name_strategy(),
        value in value_strategy(),
    ) {
        let input = format!(
            "[{section}]\n{first_key} = {value}\n[{section}]\n{second_key} = {value}\n"
        );
        let doc = from_str(&input).unwrap();

        prop_assert_eq!(doc.len(), 1);
        let loaded = doc.section(&section).unwrap();
        prop_assert_eq!(loaded.len(), 1);
        prop_assert_eq!(loaded.get(&second_key), Some(value.as_str()));
    }

    #[test]
    fn prop_quoted_values_round_trip(
        section in name_strategy(),
        key in name_strategy(),
        value in "[A-Za-z0-9 ;=.]{0,20}",
    ) {
        let mut doc = Document::new();
        doc.set(&section, key.clone(), value.clone());

        let options = WriteOptions::new().with_value_quotes(true);
        let rendered = to_string_with_options(&doc, options).unwrap();
        let parsed = from_str(&rendered).unwrap();
        prop_assert_eq!(parsed.get(&section, &key), Some(value.as_str()));
    }
}
