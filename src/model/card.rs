//! Flashcard type matching the JSON contract of the generation model.

use serde::{Deserialize, Serialize};

/// A single question/answer flashcard.
///
/// The model returns objects with `front` and `back` keys; `tag` is stamped
/// afterwards from the owning section's sanitized title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flashcard {
    /// Question side.
    pub front: String,

    /// Answer side.
    pub back: String,

    /// Anki tag, derived from the section title. Empty until stamped.
    #[serde(default)]
    pub tag: String,
}

impl Flashcard {
    /// Create a new untagged flashcard.
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            tag: String::new(),
        }
    }
}
