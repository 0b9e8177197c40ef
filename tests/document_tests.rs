use inifile::{from_str, from_str_with_options, ini, to_string, Error, ReadOptions, Section};

#[test]
fn test_end_to_end_example() {
    let doc = from_str("[General]\nname = test ; a comment\n").unwrap();

    assert_eq!(doc.len(), 1);
    let section = doc.section("General").unwrap();
    assert_eq!(section.name(), "General");
    assert_eq!(section.comment(), None);
    assert_eq!(section.len(), 1);

    let entry = section.entry("name").unwrap();
    assert_eq!(entry.value, "test");
    assert_eq!(entry.comment.as_deref(), Some("a comment"));

    assert_eq!(
        to_string(&doc).unwrap(),
        "[General]\r\nname = test ; a comment\r\n"
    );
}

#[test]
fn test_load_save_round_trip_is_idempotent() {
    let input = "[General]\r\n\
                 name = test ; a comment\r\n\
                 port = 8080\r\n\
                 [Logging]\r\n\
                 level = info\r\n";
    let once = to_string(&from_str(input).unwrap()).unwrap();
    assert_eq!(once, input);
    let twice = to_string(&from_str(&once).unwrap()).unwrap();
    assert_eq!(twice, once);
}

#[test]
fn test_first_key_wins_within_a_section() {
    let doc = from_str("[s]\nkey = first\nkey = second\nother = v\n").unwrap();
    let section = doc.section("s").unwrap();
    assert_eq!(section.get("key"), Some("first"));
    let keys: Vec<_> = section.keys().collect();
    assert_eq!(keys, vec!["key", "other"]);
}

#[test]
fn test_duplicate_section_header_replaces() {
    let doc = from_str("[X]\na = 1\nb = 2\n[Y]\nc = 3\n[X]\nd = 4\n").unwrap();

    assert_eq!(doc.len(), 2);
    let x = doc.section("X").unwrap();
    // only the second occurrence's entries survive
    assert_eq!(x.len(), 1);
    assert_eq!(x.get("d"), Some("4"));
    assert_eq!(x.get("a"), None);

    // the replacement also moved X behind Y
    let names: Vec<_> = doc.sections().map(Section::name).collect();
    assert_eq!(names, vec!["Y", "X"]);
}

#[test]
fn test_blank_and_comment_lines_are_not_retained() {
    let doc = from_str("; header\n\n[s]\n\nkey = v\n; trailing\n").unwrap();
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.section("s").unwrap().len(), 1);
    assert_eq!(to_string(&doc).unwrap(), "[s]\r\nkey = v\r\n");
}

#[test]
fn test_key_before_section_is_an_error() {
    let err = from_str("key = v\n[s]\n").unwrap_err();
    assert_eq!(
        err,
        Error::syntax(1, 1, "key found before any section header")
    );
}

#[test]
fn test_parse_error_aborts_load() {
    let err = from_str("[s]\nkey = \"unterminated\n").unwrap_err();
    assert!(matches!(err, Error::Syntax { line: 2, .. }));
}

#[test]
fn test_load_with_custom_options() {
    let options = ReadOptions::new()
        .with_comment_delimiters(&['#'])
        .unwrap()
        .with_line_continuation(true);
    let doc = from_str_with_options("[s]\nkey = abc\\\ndef # joined\n", options).unwrap();

    let entry = doc.section("s").unwrap().entry("key").unwrap();
    assert_eq!(entry.value, "abcdef");
    assert_eq!(entry.comment.as_deref(), Some("joined"));
}

#[test]
fn test_load_forces_comment_capture() {
    let options = ReadOptions::new().with_ignore_comments(true);
    let doc = from_str_with_options("[s]\nkey = v ; kept\n", options).unwrap();
    let entry = doc.section("s").unwrap().entry("key").unwrap();
    assert_eq!(entry.comment.as_deref(), Some("kept"));
}

#[test]
fn test_mutation_api() {
    let mut doc = from_str("[General]\nname = test\n").unwrap();

    assert!(doc.contains_section("General"));
    assert!(doc.section("General").unwrap().contains_key("name"));
    assert_eq!(doc.get("General", "missing"), None);
    assert_eq!(doc.get("Missing", "name"), None);

    doc.set("General", "port", "8080");
    doc.set_with_comment("General", "name", "updated", Some("renamed".to_string()));
    doc.set("New", "key", "value");

    let general = doc.section("General").unwrap();
    let keys: Vec<_> = general.keys().collect();
    assert_eq!(keys, vec!["name", "port"]);
    assert_eq!(general.get("name"), Some("updated"));
    assert_eq!(general.entry("name").unwrap().comment.as_deref(), Some("renamed"));
    assert!(doc.contains_section("New"));

    let removed = doc.section_mut("General").unwrap().remove("name").unwrap();
    assert_eq!(removed.value, "updated");
    assert!(!doc.section("General").unwrap().contains_key("name"));

    let removed = doc.remove_section("New").unwrap();
    assert_eq!(removed.name(), "New");
    assert!(!doc.contains_section("New"));
}

#[test]
fn test_section_comment_round_trip() {
    let mut doc = from_str("[General]\nname = test\n").unwrap();
    doc.section_mut("General")
        .unwrap()
        .set_comment(Some("main settings".to_string()));

    assert_eq!(
        to_string(&doc).unwrap(),
        "[General] ; main settings\r\nname = test\r\n"
    );
}

#[test]
fn test_macro_built_document_renders() {
    let doc = ini! {
        ["General"]
        "name" = "test",
        "port" = "8080"

        ["Logging"]
        "level" = "info"
    };

    assert_eq!(
        to_string(&doc).unwrap(),
        "[General]\r\nname = test\r\nport = 8080\r\n[Logging]\r\nlevel = info\r\n"
    );
}

#[test]
fn test_empty_document_renders_empty() {
    let doc = from_str("").unwrap();
    assert!(doc.is_empty());
    assert_eq!(to_string(&doc).unwrap(), "");
}
