//! Outline reading.
//!
//! Thin wrapper over the source's embedded outline: entries keep document
//! order, target pages are clamped into the valid range. An absent outline
//! yields an empty sequence, which signals the heading-detection fallback.

use crate::model::OutlineEntry;
use crate::source::DocumentSource;

/// Read the document's outline entries, clamped to valid pages.
///
/// Never fails; a document without an outline yields an empty vector.
pub fn read<S: DocumentSource>(source: &S) -> Vec<OutlineEntry> {
    let last_page = match source.page_count() {
        0 => return Vec::new(),
        n => n - 1,
    };

    source
        .outline()
        .into_iter()
        .map(|mut entry| {
            if entry.page > last_page {
                log::debug!(
                    "clamping outline target {} to last page {} for {:?}",
                    entry.page,
                    last_page,
                    entry.title
                );
                entry.page = last_page;
            }
            entry
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::MockSource;

    #[test]
    fn test_read_clamps_out_of_range_pages() {
        let source = MockSource::with_pages(5).with_outline(vec![
            OutlineEntry::new("Intro", 0, 0),
            OutlineEntry::new("Appendix", 0, 99),
        ]);

        let entries = read(&source);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].page, 4);
    }

    #[test]
    fn test_read_empty_outline() {
        let source = MockSource::with_pages(3);
        assert!(read(&source).is_empty());
    }
}
