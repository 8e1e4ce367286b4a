//! # ankigen
//!
//! Turn PDF documents into Anki flashcard decks.
//!
//! The library extracts topically coherent, titled sections from a PDF —
//! using the embedded outline when present, a font-size heading heuristic
//! when it is not, and a whole-document fallback otherwise — then splits
//! oversized sections into overlapping chunks sized for a model context
//! window and sends each chunk to a card-generating model.
//!
//! ## Quick Start
//!
//! ```no_run
//! use ankigen::{extract, generate, output, PdfSource};
//!
//! fn main() -> ankigen::Result<()> {
//!     let source = PdfSource::open("handbook.pdf")?;
//!
//!     let options = extract::ExtractOptions::default();
//!     let sections = extract::extract_sections(&source, &options)?;
//!
//!     let gen_options = generate::GenerateOptions::default();
//!     let client = generate::AnthropicClient::new("sk-...", &gen_options);
//!     let deck = generate::generate_deck(&client, &sections, &options, &gen_options)?;
//!
//!     output::write_tsv_file("handbook_flashcards.tsv", &deck)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! Document → per-page text and spans → {outline, detected headings} →
//! ordered sections → ordered chunks → flashcards → TSV. Each stage
//! completes fully before the next begins, and every value is immutable
//! once produced.

pub mod error;
pub mod extract;
pub mod generate;
pub mod model;
pub mod output;
pub mod source;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export commonly used types
pub use error::{Error, Result};
pub use extract::{BoundarySource, ExtractOptions};
pub use generate::{AnthropicClient, CardGenerator, GenerateOptions};
pub use model::{Chunk, Flashcard, Heading, OutlineEntry, Section};
pub use source::{DocumentSource, PdfSource, TextSpan};

use std::path::Path;

/// Extract sections from a PDF file with default options.
///
/// # Example
///
/// ```no_run
/// let sections = ankigen::extract_file("document.pdf").unwrap();
/// println!("{} section(s)", sections.len());
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<Vec<Section>> {
    let source = PdfSource::open(path)?;
    extract::extract_sections(&source, &ExtractOptions::default())
}

/// Extract sections from a PDF file with custom options.
pub fn extract_file_with_options<P: AsRef<Path>>(
    path: P,
    options: &ExtractOptions,
) -> Result<Vec<Section>> {
    let source = PdfSource::open(path)?;
    extract::extract_sections(&source, options)
}
