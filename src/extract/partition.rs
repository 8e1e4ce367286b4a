//! Section partitioning.
//!
//! Converts boundary candidates (outline entries, detected headings, or
//! nothing) into an ordered, gap-free sequence of titled page ranges. Every
//! end page is derived from the next start page, so gaps and overlaps
//! cannot arise by construction.

use crate::error::Result;
use crate::model::{Heading, OutlineEntry, Section};
use crate::source::DocumentSource;

/// Where section boundaries come from, resolved once per document.
#[derive(Debug, Clone)]
pub enum BoundarySource {
    /// Boundaries from the document's embedded outline.
    Outline(Vec<OutlineEntry>),

    /// Boundaries from font-size heading detection.
    Headings(Vec<Heading>),

    /// No usable boundaries; the whole document becomes one section.
    WholeDocument,
}

impl BoundarySource {
    /// Pick the boundary source by policy: outline first, then headings,
    /// then the whole-document fallback.
    pub fn resolve(outline: Vec<OutlineEntry>, headings: Vec<Heading>) -> Self {
        if !outline.is_empty() {
            BoundarySource::Outline(outline)
        } else if !headings.is_empty() {
            BoundarySource::Headings(headings)
        } else {
            BoundarySource::WholeDocument
        }
    }

    /// Boundary starts as `(page, title)` pairs in document order.
    fn starts(&self, fallback_title: &str) -> Vec<(usize, String)> {
        match self {
            BoundarySource::Outline(entries) => entries
                .iter()
                .map(|e| (e.page, sanitize_title(&e.title)))
                .collect(),
            BoundarySource::Headings(headings) => headings
                .iter()
                .map(|h| (h.page, sanitize_title(&h.text)))
                .collect(),
            BoundarySource::WholeDocument => vec![(0, sanitize_title(fallback_title))],
        }
    }
}

/// Partition the document into titled sections.
///
/// Guarantees on the output: sections appear in document order, ranges are
/// non-overlapping, and their union is exactly `[0, page_count - 1]`. The
/// first boundary is pulled to page 0 so front matter joins the first
/// section; boundaries sharing a start page collapse to the first title.
pub fn partition<S: DocumentSource>(
    source: &S,
    boundaries: &BoundarySource,
) -> Result<Vec<Section>> {
    let page_count = source.page_count();
    debug_assert!(page_count > 0, "empty documents are rejected upstream");
    let last_page = page_count - 1;

    let mut starts = boundaries.starts(source.name());
    if starts.is_empty() {
        starts.push((0, sanitize_title(source.name())));
    }

    // Clamp into range and force monotonic starts, then collapse duplicates
    // keeping the first title encountered.
    let mut previous = 0;
    for (page, _) in starts.iter_mut() {
        *page = (*page).min(last_page).max(previous);
        previous = *page;
    }
    starts.dedup_by(|current, kept| current.0 == kept.0);
    starts[0].0 = 0;

    let mut sections = Vec::with_capacity(starts.len());
    for (i, (start_page, title)) in starts.iter().enumerate() {
        let end_page = match starts.get(i + 1) {
            Some((next_start, _)) => next_start - 1,
            None => last_page,
        };

        let mut text = String::new();
        for page in *start_page..=end_page {
            text.push_str(&source.page_text(page)?);
        }

        sections.push(Section {
            title: title.clone(),
            start_page: *start_page,
            end_page,
            text,
        });
    }

    log::debug!("partitioned {} page(s) into {} section(s)", page_count, sections.len());
    Ok(sections)
}

/// Make a title safe to hand downstream: no tabs, carriage returns, or
/// newlines, and interior whitespace runs collapsed to a single space.
fn sanitize_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_space = false;
    for c in title.trim().chars() {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(c);
        }
    }
    out
}
