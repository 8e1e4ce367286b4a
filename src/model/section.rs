//! Section-level types: outline entries, detected headings, sections, chunks.

use serde::{Deserialize, Serialize};

/// One entry of a document's embedded outline (table of contents).
///
/// Pages are 0-indexed. Entries are ordered by document position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Entry title as stored in the document.
    pub title: String,

    /// Nesting level (0 = top level).
    pub level: u32,

    /// Target page, 0-indexed.
    pub page: usize,
}

impl OutlineEntry {
    /// Create a new outline entry.
    pub fn new(title: impl Into<String>, level: u32, page: usize) -> Self {
        Self {
            title: title.into(),
            level,
            page,
        }
    }
}

/// A heading candidate detected by the font-size heuristic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Heading {
    /// Page the heading was found on, 0-indexed.
    pub page: usize,

    /// Font size of the originating span, in points.
    pub font_size: f32,

    /// Heading text, already trimmed.
    pub text: String,
}

/// A contiguous, titled page range of a document.
///
/// Sections are produced in document order; their page ranges are
/// non-overlapping and jointly cover `[0, page_count - 1]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Section title, free of tab and newline characters.
    pub title: String,

    /// First page of the section, 0-indexed.
    pub start_page: usize,

    /// Last page of the section, 0-indexed, inclusive.
    pub end_page: usize,

    /// Concatenated text of all pages in the range, in page order.
    pub text: String,
}

impl Section {
    /// Number of pages covered by this section.
    pub fn page_count(&self) -> usize {
        self.end_page - self.start_page + 1
    }
}

/// A sub-span of a section's text sized to fit a model context window.
///
/// A section at or under the chunking threshold yields exactly one chunk
/// equal to its own text; larger sections yield overlapping windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    /// Title of the owning section.
    pub section_title: String,

    /// Position of this chunk within its section, starting at 0.
    pub index: usize,

    /// Chunk text.
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_page_count() {
        let section = Section {
            title: "Intro".into(),
            start_page: 3,
            end_page: 7,
            text: String::new(),
        };
        assert_eq!(section.page_count(), 5);
    }

    #[test]
    fn test_outline_entry_new() {
        let entry = OutlineEntry::new("Chapter 1", 0, 4);
        assert_eq!(entry.title, "Chapter 1");
        assert_eq!(entry.page, 4);
    }
}
