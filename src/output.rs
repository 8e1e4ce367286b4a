//! Anki-importable TSV output.
//!
//! Columns are Front, Back, Tags. Fields are cleaned so a row is always one
//! line: tabs become spaces and newlines become `<br>` (Anki renders HTML).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::Result;
use crate::model::Flashcard;

/// Convert a section title into a valid Anki tag.
///
/// Anki tags are space-delimited, so every run of characters outside
/// `[A-Za-z0-9_-]` collapses to a single underscore.
pub fn sanitize_tag(title: &str) -> String {
    static ILLEGAL: OnceLock<Regex> = OnceLock::new();
    let re = ILLEGAL.get_or_init(|| Regex::new(r"[^\w\-]+").expect("valid regex"));
    re.replace_all(title, "_").trim_matches('_').to_string()
}

/// Write a deck to any writer as TSV with a header row.
pub fn write_tsv<W: Write>(writer: &mut W, cards: &[Flashcard]) -> Result<()> {
    writeln!(writer, "Front\tBack\tTags")?;
    for card in cards {
        writeln!(
            writer,
            "{}\t{}\t{}",
            tsv_field(&card.front),
            tsv_field(&card.back),
            tsv_field(&card.tag)
        )?;
    }
    Ok(())
}

/// Write a deck to a file path.
pub fn write_tsv_file<P: AsRef<Path>>(path: P, cards: &[Flashcard]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_tsv(&mut writer, cards)?;
    writer.flush()?;
    Ok(())
}

fn tsv_field(value: &str) -> String {
    value
        .replace('\t', " ")
        .replace('\r', "")
        .replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_tag() {
        assert_eq!(sanitize_tag("Chapter 1: Intro"), "Chapter_1_Intro");
        assert_eq!(sanitize_tag("Self-Attention"), "Self-Attention");
        assert_eq!(sanitize_tag("  weird -- title!!  "), "weird_-_title");
        assert_eq!(sanitize_tag("!!!"), "");
    }

    #[test]
    fn test_write_tsv() {
        let cards = vec![
            Flashcard {
                front: "What is\na PDF?".into(),
                back: "A\tformat.".into(),
                tag: "Intro".into(),
            },
            Flashcard::new("Q2", "A2"),
        ];

        let mut buf = Vec::new();
        write_tsv(&mut buf, &cards).unwrap();
        let out = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Front\tBack\tTags");
        assert_eq!(lines[1], "What is<br>a PDF?\tA format.\tIntro");
        assert_eq!(lines[2], "Q2\tA2\t");
    }

    #[test]
    fn test_write_tsv_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.tsv");

        let cards = vec![Flashcard {
            front: "Q".into(),
            back: "A".into(),
            tag: "t".into(),
        }];
        write_tsv_file(&path, &cards).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Front\tBack\tTags\n"));
        assert!(contents.contains("Q\tA\tt"));
    }
}
