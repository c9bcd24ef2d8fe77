//! RDF serialization
//!
//! Two concerns live here:
//! - decoding raw bytes into triples (Turtle through `rio_turtle`, JSON-LD
//!   through an expanded-form reader over `serde_json`), and
//! - rendering a triple sequence back out as Turtle text or a
//!   JSON-LD-shaped document.
//!
//! Formats with no wired decoder (SPARQL Update, N3, RDF/XML) fail with
//! [`ParseError::UnsupportedFormat`].

pub mod jsonld;
pub mod turtle;

use thiserror::Error;

/// Parse errors
#[derive(Error, Debug)]
pub enum ParseError {
    /// Malformed input bytes for the declared MIME type
    #[error("decode error: {0}")]
    Decode(String),

    /// MIME type with no wired decoder
    #[error("{0} is not supported by the parser")]
    UnsupportedFormat(String),
}

pub type ParseResult<T> = Result<T, ParseError>;

impl From<rio_turtle::TurtleError> for ParseError {
    fn from(e: rio_turtle::TurtleError) -> Self {
        ParseError::Decode(e.to_string())
    }
}

/// Serialization errors
#[derive(Error, Debug)]
pub enum SerializeError {
    /// IO error while writing
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialize(String),
}

pub type SerializeResult<T> = Result<T, SerializeError>;
