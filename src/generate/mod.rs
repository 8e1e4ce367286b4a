//! Flashcard generation from extracted sections.
//!
//! The extraction core only needs the input/output contract of the language
//! model, captured by [`CardGenerator`]. The concrete Anthropic client lives
//! in [`anthropic`]; tests substitute their own implementations.

mod anthropic;

pub use anthropic::AnthropicClient;

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::extract::{chunk, ExtractOptions};
use crate::model::{Flashcard, Section};
use crate::output::sanitize_tag;

/// Instructions given to the model for every request.
pub const SYSTEM_PROMPT: &str = "\
You are an expert flashcard creator. Your task is to generate high-quality Anki flashcards from the provided text.

Rules:
- Each flashcard should test ONE atomic fact or concept.
- The front should be a clear, specific question.
- The back should be a concise, complete answer.
- Avoid yes/no questions. Prefer \"what\", \"how\", \"why\", \"explain\" questions.
- Cover the most important concepts, definitions, formulas, and relationships.
- Do not create trivial or overly obvious cards.
- Output ONLY a JSON array of objects with \"front\" and \"back\" keys. No other text.";

/// Options for flashcard generation.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Model identifier.
    pub model: String,

    /// Response token budget per request.
    pub max_tokens: u32,

    /// Upper bound on cards per section, if any.
    pub max_cards: Option<usize>,
}

impl GenerateOptions {
    /// Create generation options for the given model.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Self::default()
        }
    }

    /// Set the per-request response token budget.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Limit the number of cards generated per section.
    pub fn with_max_cards(mut self, max_cards: Option<usize>) -> Self {
        self.max_cards = max_cards;
        self
    }
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            model: "claude-sonnet-4-5".to_string(),
            max_tokens: 4096,
            max_cards: None,
        }
    }
}

/// Contract for the card-generating model call.
///
/// `limit` caps the number of cards requested for this call; `None` means
/// as many as the model sees fit.
pub trait CardGenerator {
    /// Generate flashcards for one titled chunk of text.
    fn generate(&self, title: &str, text: &str, limit: Option<usize>) -> Result<Vec<Flashcard>>;
}

/// Build the user prompt for one chunk.
pub fn user_prompt(title: &str, text: &str, limit: Option<usize>) -> String {
    let mut prompt = format!(
        "Create flashcards from this section titled \"{}\":\n\n{}\n\n\
         Return a JSON array of flashcard objects, each with \"front\" and \"back\" keys.",
        title, text
    );
    if let Some(limit) = limit {
        prompt.push_str(&format!("\n\nGenerate at most {} flashcards.", limit));
    }
    prompt
}

/// Pull the JSON card array out of a model response.
///
/// The model is told to answer with bare JSON, but responses sometimes wrap
/// the array in prose; the first bracketed region is taken.
pub fn parse_cards(response: &str) -> Result<Vec<Flashcard>> {
    static ARRAY: OnceLock<Regex> = OnceLock::new();
    let re = ARRAY.get_or_init(|| Regex::new(r"(?s)\[.*\]").expect("valid regex"));

    let json = re
        .find(response)
        .ok_or_else(|| Error::InvalidResponse("no JSON array in response".to_string()))?;

    serde_json::from_str(json.as_str())
        .map_err(|e| Error::InvalidResponse(format!("invalid card JSON: {}", e)))
}

/// Generate a full deck from extracted sections.
///
/// Sections are chunked, each chunk is sent to the generator in order, and
/// every produced card is tagged with its section's sanitized title. A
/// chunk whose response cannot be parsed is logged and skipped; transport
/// and configuration errors abort the run.
pub fn generate_deck<G: CardGenerator>(
    generator: &G,
    sections: &[Section],
    extract_options: &ExtractOptions,
    options: &GenerateOptions,
) -> Result<Vec<Flashcard>> {
    extract_options.validate_chunking()?;

    let mut deck = Vec::new();
    for section in sections {
        let cards = generate_section(generator, section, extract_options, options)?;
        deck.extend(cards);
    }
    Ok(deck)
}

/// Generate cards for a single section, honoring the per-section card
/// budget across its chunks.
pub fn generate_section<G: CardGenerator>(
    generator: &G,
    section: &Section,
    extract_options: &ExtractOptions,
    options: &GenerateOptions,
) -> Result<Vec<Flashcard>> {
    let chunks = chunk::chunk_section(section, extract_options)?;
    let total = chunks.len();
    let tag = sanitize_tag(&section.title);

    let mut cards: Vec<Flashcard> = Vec::new();
    for chunk in &chunks {
        let remaining = match options.max_cards {
            Some(max) => {
                let left = max.saturating_sub(cards.len());
                if left == 0 {
                    break;
                }
                Some(left)
            }
            None => None,
        };

        let title = if total == 1 {
            section.title.clone()
        } else {
            format!("{} (part {}/{})", section.title, chunk.index + 1, total)
        };

        match generator.generate(&title, &chunk.text, remaining) {
            Ok(generated) => cards.extend(generated),
            Err(Error::InvalidResponse(msg)) => {
                log::warn!("skipping chunk {:?}: {}", title, msg);
            }
            Err(e) => return Err(e),
        }
    }

    if let Some(max) = options.max_cards {
        cards.truncate(max);
    }
    for card in &mut cards {
        card.tag = tag.clone();
    }
    Ok(cards)
}
