//! Font-size heading detection.
//!
//! Fallback for documents without an embedded outline: a span is a heading
//! candidate when it is visually larger than the body text. The comparison
//! is inclusive (`>=`) so spans sharing the threshold size are selected the
//! same way on every run.

use crate::error::Result;
use crate::extract::ExtractOptions;
use crate::model::Heading;
use crate::source::DocumentSource;

/// Detect heading candidates across the whole document, in reading order.
///
/// The median font size over all spans sets the baseline; spans at
/// `heading_ratio` × median or larger qualify, provided they are non-empty
/// after trimming and shorter than `max_heading_len` characters. A document
/// with no spans, or where nothing reaches the threshold, yields an empty
/// sequence.
pub fn detect<S: DocumentSource>(source: &S, options: &ExtractOptions) -> Result<Vec<Heading>> {
    let mut spans = Vec::new();
    for page in 0..source.page_count() {
        spans.extend(source.page_spans(page)?);
    }

    if spans.is_empty() {
        return Ok(Vec::new());
    }

    let mut sizes: Vec<f32> = spans.iter().map(|s| s.font_size).collect();
    sizes.sort_by(f32::total_cmp);
    let median = sizes[sizes.len() / 2];
    let threshold = median * options.heading_ratio;

    let headings: Vec<Heading> = spans
        .into_iter()
        .filter_map(|span| {
            let text = span.text.trim();
            if span.font_size >= threshold
                && !text.is_empty()
                && text.chars().count() < options.max_heading_len
            {
                Some(Heading {
                    page: span.page,
                    font_size: span.font_size,
                    text: text.to_string(),
                })
            } else {
                None
            }
        })
        .collect();

    log::debug!(
        "median font size {:.1}, threshold {:.1}, {} heading candidate(s)",
        median,
        threshold,
        headings.len()
    );

    Ok(headings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::MockSource;

    fn spans(sizes_and_text: &[(usize, f32, &str)]) -> MockSource {
        let max_page = sizes_and_text.iter().map(|(p, _, _)| *p).max().unwrap_or(0);
        let mut source = MockSource::with_pages(max_page + 1);
        for (page, size, text) in sizes_and_text {
            source = source.with_span(*page, *size, text);
        }
        source
    }

    #[test]
    fn test_detect_larger_spans() {
        let source = spans(&[
            (0, 18.0, "Chapter One"),
            (0, 10.0, "body text"),
            (0, 10.0, "more body"),
            (1, 10.0, "body"),
            (1, 16.0, "Chapter Two"),
        ]);

        let headings = detect(&source, &ExtractOptions::default()).unwrap();
        assert_eq!(headings.len(), 2);
        assert_eq!(headings[0].text, "Chapter One");
        assert_eq!(headings[1].page, 1);
    }

    #[test]
    fn test_detect_threshold_is_inclusive() {
        // Median 10.0 with ratio 1.2 puts the threshold exactly at 12.0.
        let source = spans(&[
            (0, 12.0, "Exactly at threshold"),
            (0, 10.0, "a"),
            (0, 10.0, "b"),
        ]);

        let headings = detect(&source, &ExtractOptions::default()).unwrap();
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].text, "Exactly at threshold");
    }

    #[test]
    fn test_detect_skips_blank_and_long_spans() {
        let long = "x".repeat(300);
        let source = spans(&[
            (0, 20.0, "   "),
            (0, 20.0, long.as_str()),
            (0, 10.0, "body"),
            (0, 10.0, "body"),
        ]);

        let headings = detect(&source, &ExtractOptions::default()).unwrap();
        assert!(headings.is_empty());
    }

    #[test]
    fn test_detect_no_spans() {
        let source = MockSource::with_pages(3);
        let headings = detect(&source, &ExtractOptions::default()).unwrap();
        assert!(headings.is_empty());
    }

    #[test]
    fn test_detect_is_deterministic() {
        let source = spans(&[
            (0, 12.0, "A"),
            (0, 10.0, "body"),
            (0, 10.0, "body"),
            (1, 10.0, "body"),
            (1, 10.0, "body"),
            (1, 12.0, "B"),
            (1, 12.0, "C"),
        ]);

        let options = ExtractOptions::default();
        let first = detect(&source, &options).unwrap();
        let second = detect(&source, &options).unwrap();

        let texts: Vec<&str> = first.iter().map(|h| h.text.as_str()).collect();
        assert_eq!(texts, vec!["A", "B", "C"]);
        let texts_again: Vec<&str> = second.iter().map(|h| h.text.as_str()).collect();
        assert_eq!(texts, texts_again);
    }
}
