//! Document access abstraction.
//!
//! Provides a trait-based interface for per-page text and span access,
//! isolating the concrete PDF library (lopdf) from the extraction logic.

mod pdf;

pub use pdf::PdfSource;

use crate::error::Result;
use crate::model::OutlineEntry;

/// A text span with its originating page and font size.
///
/// Spans are transient: produced on demand by a [`DocumentSource`] and
/// consumed only by heading detection.
#[derive(Debug, Clone)]
pub struct TextSpan {
    /// Page the span appears on, 0-indexed.
    pub page: usize,

    /// Font size in points.
    pub font_size: f32,

    /// Text content of the span.
    pub text: String,
}

/// Abstract interface for reading a document's pages.
///
/// Implementations supply page text in reading order, span-level font
/// metadata, the embedded outline if any, and a display name used for
/// whole-document fallback titling.
pub trait DocumentSource {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Plain text of a page, 0-indexed.
    fn page_text(&self, page: usize) -> Result<String>;

    /// Text spans of a page in reading order, 0-indexed.
    fn page_spans(&self, page: usize) -> Result<Vec<TextSpan>>;

    /// Embedded outline entries in document order.
    ///
    /// Absence of an outline is not an error; it yields an empty sequence.
    fn outline(&self) -> Vec<OutlineEntry>;

    /// Display name of the document (typically the file stem).
    fn name(&self) -> &str;
}
