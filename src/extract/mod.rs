//! Section extraction: outline reading, heading detection, partitioning,
//! and chunking.
//!
//! The pipeline is strictly sequential and allocation-once: every value it
//! produces is immutable after creation.

pub mod chunk;
pub mod headings;
pub mod outline;
pub mod partition;

pub use partition::BoundarySource;

use crate::error::{Error, Result};
use crate::model::{Chunk, Section};
use crate::source::DocumentSource;

/// Configuration for section extraction and chunking.
///
/// Defaults match the reference behavior: headings are spans at least 1.2×
/// the median font size, sections over 80 000 characters are split into
/// windows overlapping by 2 000 characters.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// A span qualifies as a heading when its font size is at least
    /// `heading_ratio` × the document's median font size.
    pub heading_ratio: f32,

    /// Spans at or above this many characters (trimmed) are never headings.
    pub max_heading_len: usize,

    /// Maximum chunk length in characters.
    pub max_chunk_len: usize,

    /// Overlap between consecutive chunks in characters. Must be smaller
    /// than `max_chunk_len`.
    pub chunk_overlap: usize,
}

impl ExtractOptions {
    /// Create extraction options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heading font-size ratio.
    pub fn with_heading_ratio(mut self, ratio: f32) -> Self {
        self.heading_ratio = ratio;
        self
    }

    /// Set the maximum heading length in characters.
    pub fn with_max_heading_len(mut self, len: usize) -> Self {
        self.max_heading_len = len;
        self
    }

    /// Set the maximum chunk length in characters.
    pub fn with_max_chunk_len(mut self, len: usize) -> Self {
        self.max_chunk_len = len;
        self
    }

    /// Set the chunk overlap in characters.
    pub fn with_chunk_overlap(mut self, overlap: usize) -> Self {
        self.chunk_overlap = overlap;
        self
    }

    /// Fail fast on configurations that would make chunking loop forever.
    pub(crate) fn validate_chunking(&self) -> Result<()> {
        if self.chunk_overlap >= self.max_chunk_len {
            return Err(Error::Config(format!(
                "chunk overlap ({}) must be smaller than max chunk length ({})",
                self.chunk_overlap, self.max_chunk_len
            )));
        }
        Ok(())
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            heading_ratio: 1.2,
            max_heading_len: 200,
            max_chunk_len: 80_000,
            chunk_overlap: 2_000,
        }
    }
}

/// Extract titled sections from a document.
///
/// Boundary policy, first success wins: embedded outline, font-size heading
/// detection, then a single whole-document section titled after the source
/// name. The returned sections are contiguous, ordered, and jointly cover
/// every page.
///
/// # Errors
///
/// [`Error::EmptyDocument`] when the document has zero pages;
/// [`Error::MalformedDocument`] when page text cannot be read.
pub fn extract_sections<S: DocumentSource>(
    source: &S,
    options: &ExtractOptions,
) -> Result<Vec<Section>> {
    if source.page_count() == 0 {
        return Err(Error::EmptyDocument);
    }

    let entries = outline::read(source);
    let detected = if entries.is_empty() {
        log::info!("no outline found, detecting headings by font size");
        headings::detect(source, options)?
    } else {
        Vec::new()
    };

    let boundaries = BoundarySource::resolve(entries, detected);
    partition::partition(source, &boundaries)
}

/// Chunk every section, preserving section order and chunk order within a
/// section.
pub fn chunk_sections(sections: &[Section], options: &ExtractOptions) -> Result<Vec<Chunk>> {
    options.validate_chunking()?;
    let mut chunks = Vec::with_capacity(sections.len());
    for section in sections {
        chunks.extend(chunk::chunk_section(section, options)?);
    }
    Ok(chunks)
}
