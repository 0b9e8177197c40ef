//! Declarative construction of [`Document`](crate::Document) values.

/// Builds a [`Document`](crate::Document) from section/key literals.
///
/// Sections appear in the order written; keys appear in the order written
/// within their section. Values must be string expressions.
///
/// # Examples
///
/// ```rust
/// use inifile::ini;
///
/// let doc = ini! {
///     ["General"]
///     "name" = "test",
///     "port" = "8080"
///
///     ["Logging"]
///     "level" = "info"
/// };
///
/// assert_eq!(doc.get("General", "port"), Some("8080"));
/// assert_eq!(doc.get("Logging", "level"), Some("info"));
/// ```
#[macro_export]
macro_rules! ini {
    () => {
        $crate::Document::new()
    };

    ( $( [$section:literal] $( $key:literal = $value:literal ),* $(,)? )* ) => {{
        let mut document = $crate::Document::new();
        $(
            document.add_section($crate::Section::new($section));
            $(
                document.set($section, $key, $value);
            )*
        )*
        document
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn empty_macro_is_empty_document() {
        let doc = ini!();
        assert!(doc.is_empty());
    }

    #[test]
    fn macro_preserves_order() {
        let doc = ini! {
            ["B"]
            "y" = "2",
            "x" = "1"

            ["A"]
        };
        let names: Vec<_> = doc.sections().map(|s| s.name()).collect();
        assert_eq!(names, vec!["B", "A"]);
        let keys: Vec<_> = doc.section("B").unwrap().keys().collect();
        assert_eq!(keys, vec!["y", "x"]);
        assert!(doc.section("A").unwrap().is_empty());
    }
}
