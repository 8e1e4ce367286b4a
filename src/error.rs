//! Error types for the ankigen library.

use std::io;
use thiserror::Error;

/// Result type alias for ankigen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting sections or generating cards.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document cannot be opened or its pages cannot be read.
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// The document is encrypted and requires a password.
    #[error("Document is encrypted")]
    Encrypted,

    /// The document has no pages, so there is nothing to generate cards from.
    #[error("Document has no pages")]
    EmptyDocument,

    /// Invalid extraction or chunking configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The flashcard generation API returned a failure.
    #[error("API error: {0}")]
    Api(String),

    /// A model response could not be parsed into flashcards.
    #[error("Unparseable model response: {0}")]
    InvalidResponse(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::MalformedDocument(err.to_string()),
        }
    }
}
