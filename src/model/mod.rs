//! Value types shared across the extraction and generation stages.
//!
//! Everything here is produced once, read-only afterwards, and owned by a
//! single stage of the pipeline at a time.

mod card;
mod section;

pub use card::Flashcard;
pub use section::{Chunk, Heading, OutlineEntry, Section};
