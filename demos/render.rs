//! Build a document programmatically and render it.
//!
//! Run with: `cargo run --example render`

use inifile::{ini, WriteOptions};

fn main() -> inifile::Result<()> {
    let mut doc = ini! {
        ["General"]
        "name" = "demo app",
        "threads" = "4"

        ["Logging"]
        "level" = "info"
    };

    doc.set_with_comment("Logging", "file", "/var/log/demo.log", Some("rotated daily".to_string()));
    doc.section_mut("General")
        .unwrap()
        .set_comment(Some("application settings".to_string()));

    println!("--- default (CRLF) ---");
    print!("{}", inifile::to_string(&doc)?);

    println!("--- indented, LF, quoted values ---");
    let options = WriteOptions::new()
        .with_indent(2)
        .with_line_ending("\n")
        .with_value_quotes(true);
    print!("{}", inifile::to_string_with_options(&doc, options)?);

    Ok(())
}
