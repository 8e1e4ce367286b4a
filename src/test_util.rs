//! Shared in-memory document source for unit tests.

use crate::error::{Error, Result};
use crate::model::OutlineEntry;
use crate::source::{DocumentSource, TextSpan};

/// Scriptable [`DocumentSource`] with fixed pages, spans, and outline.
pub(crate) struct MockSource {
    pages: Vec<String>,
    spans: Vec<TextSpan>,
    outline: Vec<OutlineEntry>,
    name: String,
}

impl MockSource {
    /// A source with `count` pages of generated text.
    pub fn with_pages(count: usize) -> Self {
        Self::with_page_texts((0..count).map(|i| format!("page {} text\n", i)).collect())
    }

    /// A source with the given page texts.
    pub fn with_page_texts(pages: Vec<String>) -> Self {
        Self {
            pages,
            spans: Vec::new(),
            outline: Vec::new(),
            name: "mock".to_string(),
        }
    }

    pub fn with_outline(mut self, outline: Vec<OutlineEntry>) -> Self {
        self.outline = outline;
        self
    }

    pub fn with_span(mut self, page: usize, font_size: f32, text: &str) -> Self {
        self.spans.push(TextSpan {
            page,
            font_size,
            text: text.to_string(),
        });
        self
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }
}

impl DocumentSource for MockSource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, page: usize) -> Result<String> {
        self.pages
            .get(page)
            .cloned()
            .ok_or_else(|| Error::MalformedDocument(format!("page {} out of range", page)))
    }

    fn page_spans(&self, page: usize) -> Result<Vec<TextSpan>> {
        if page >= self.pages.len() {
            return Err(Error::MalformedDocument(format!(
                "page {} out of range",
                page
            )));
        }
        Ok(self
            .spans
            .iter()
            .filter(|s| s.page == page)
            .cloned()
            .collect())
    }

    fn outline(&self) -> Vec<OutlineEntry> {
        self.outline.clone()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
