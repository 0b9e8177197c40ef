//! Parse INI text and inspect the resulting document.
//!
//! Run with: `cargo run --example parse`

use inifile::ReadOptions;

fn main() -> inifile::Result<()> {
    let input = "\
; application settings
[General]
name = demo app ; shown in the title bar
threads = 4

[Logging]
level = info
file = /var/log/demo.log
";

    let doc = inifile::from_str(input)?;

    for section in doc.sections() {
        println!("[{}]", section.name());
        for (key, entry) in section.iter() {
            match &entry.comment {
                Some(comment) => println!("  {key} = {} (comment: {comment})", entry.value),
                None => println!("  {key} = {}", entry.value),
            }
        }
    }

    // the same text under a hash-comment dialect
    let options = ReadOptions::new().with_comment_delimiters(&['#'])?;
    let doc = inifile::from_str_with_options("[s]\nkey = value # note\n", options)?;
    println!(
        "hash dialect: key = {:?}",
        doc.section("s").and_then(|s| s.entry("key"))
    );

    Ok(())
}
