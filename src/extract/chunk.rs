//! Section chunking.
//!
//! Splits section text that exceeds the model context budget into
//! overlapping windows. Lengths are measured in characters and windows are
//! cut on character boundaries, so multi-byte text never splits a scalar
//! value.

use crate::error::Result;
use crate::extract::ExtractOptions;
use crate::model::{Chunk, Section};

/// Split one section into chunks.
///
/// A section at or under `max_chunk_len` characters yields a single chunk
/// equal to its text. Larger sections yield windows of `max_chunk_len`
/// characters whose starts advance by `max_chunk_len - chunk_overlap`, so
/// every window after the first begins `chunk_overlap` characters before
/// the previous window's end. The final window is truncated to the
/// remaining text.
///
/// # Errors
///
/// [`crate::Error::Config`] when `chunk_overlap >= max_chunk_len`.
pub fn chunk_section(section: &Section, options: &ExtractOptions) -> Result<Vec<Chunk>> {
    options.validate_chunking()?;

    let text = &section.text;
    // Byte length bounds char length from above, so short texts skip the
    // boundary scan entirely.
    if text.len() <= options.max_chunk_len || text.chars().count() <= options.max_chunk_len {
        return Ok(vec![Chunk {
            section_title: section.title.clone(),
            index: 0,
            text: text.clone(),
        }]);
    }

    // bounds[i] is the byte offset of the i-th character; the final entry
    // is the total byte length.
    let mut bounds: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    bounds.push(text.len());
    let char_len = bounds.len() - 1;

    let stride = options.max_chunk_len - options.chunk_overlap;
    let mut chunks = Vec::new();
    let mut start = 0;
    loop {
        let end = (start + options.max_chunk_len).min(char_len);
        chunks.push(Chunk {
            section_title: section.title.clone(),
            index: chunks.len(),
            text: text[bounds[start]..bounds[end]].to_string(),
        });
        if end == char_len {
            break;
        }
        start += stride;
    }

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn section(text: String) -> Section {
        Section {
            title: "Test".into(),
            start_page: 0,
            end_page: 0,
            text,
        }
    }

    fn options(max: usize, overlap: usize) -> ExtractOptions {
        ExtractOptions::new()
            .with_max_chunk_len(max)
            .with_chunk_overlap(overlap)
    }

    #[test]
    fn test_short_section_single_chunk() {
        let s = section("hello world".into());
        let chunks = chunk_section(&s, &options(100, 10)).unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "hello world");
        assert_eq!(chunks[0].index, 0);
    }

    #[test]
    fn test_exact_threshold_single_chunk() {
        let s = section("x".repeat(100));
        let chunks = chunk_section(&s, &options(100, 10)).unwrap();
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn test_overlap_windows() {
        // 25 chars, max 10, overlap 2: windows [0,10), [8,18), [16,25).
        let text: String = ('a'..='y').collect();
        let s = section(text.clone());
        let chunks = chunk_section(&s, &options(10, 2)).unwrap();

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].text, &text[0..10]);
        assert_eq!(chunks[1].text, &text[8..18]);
        assert_eq!(chunks[2].text, &text[16..25]);

        // Each window starts with the previous window's last two chars.
        assert_eq!(&chunks[1].text[..2], &chunks[0].text[8..]);
        assert_eq!(&chunks[2].text[..2], &chunks[1].text[8..]);
    }

    #[test]
    fn test_indices_are_sequential() {
        let s = section("x".repeat(50));
        let chunks = chunk_section(&s, &options(10, 2)).unwrap();
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.index, i);
        }
    }

    #[test]
    fn test_multibyte_text_cut_on_char_boundaries() {
        // 3-byte chars: byte slicing at the window edge would panic.
        let s = section("あ".repeat(30));
        let chunks = chunk_section(&s, &options(10, 2)).unwrap();
        // Stride 8 gives windows starting at 0, 8, 16, 24.
        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks[0].text.chars().count(), 10);
        assert!(chunks.iter().all(|c| c.text.chars().count() <= 10));
        assert_eq!(chunks.last().unwrap().text.chars().count(), 6);
    }

    #[test]
    fn test_overlap_equal_to_max_is_config_error() {
        let s = section("x".repeat(200));
        let err = chunk_section(&s, &options(100, 100)).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_overlap_larger_than_max_is_config_error() {
        let s = section("short".into());
        let err = chunk_section(&s, &options(10, 20)).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
