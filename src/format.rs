//! RDF format registry
//!
//! Maps MIME types and file extensions to formats, and records which formats
//! have a wired decoder or encoder. The registry is immutable data owned by
//! the dispatch paths; there is no process-wide mutable table.

/// MIME type for Turtle documents.
pub const TURTLE_MIME: &str = "text/turtle";
/// MIME type for JSON-LD documents.
pub const JSONLD_MIME: &str = "application/ld+json";
/// MIME type for SPARQL Update requests (internal, never decodable).
pub const SPARQL_UPDATE_MIME: &str = "application/sparql-update";
/// MIME type for Notation3 documents (recognized, no decoder wired).
pub const N3_MIME: &str = "text/n3";
/// MIME type for RDF/XML documents (recognized, no decoder wired).
pub const RDFXML_MIME: &str = "application/rdf+xml";

/// An RDF serialization format known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    /// Turtle (.ttl)
    Turtle,
    /// JSON-LD (.jsonld)
    JsonLd,
    /// SPARQL Update, marked internal: recognized but never parsed here
    SparqlUpdate,
    /// Notation3 (.n3), extension mapping only
    N3,
    /// RDF/XML (.rdf), extension mapping only
    RdfXml,
}

impl RdfFormat {
    /// Look up a format by MIME type.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            TURTLE_MIME => Some(RdfFormat::Turtle),
            JSONLD_MIME => Some(RdfFormat::JsonLd),
            SPARQL_UPDATE_MIME => Some(RdfFormat::SparqlUpdate),
            N3_MIME => Some(RdfFormat::N3),
            RDFXML_MIME => Some(RdfFormat::RdfXml),
            _ => None,
        }
    }

    /// Look up a format by file extension (with leading dot), a lookup aid
    /// for callers choosing a MIME type from a filename.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            ".ttl" => Some(RdfFormat::Turtle),
            ".n3" => Some(RdfFormat::N3),
            ".rdf" => Some(RdfFormat::RdfXml),
            ".jsonld" => Some(RdfFormat::JsonLd),
            _ => None,
        }
    }

    /// Canonical MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            RdfFormat::Turtle => TURTLE_MIME,
            RdfFormat::JsonLd => JSONLD_MIME,
            RdfFormat::SparqlUpdate => SPARQL_UPDATE_MIME,
            RdfFormat::N3 => N3_MIME,
            RdfFormat::RdfXml => RDFXML_MIME,
        }
    }

    /// Whether a statement decoder is wired for this format.
    pub fn is_decodable(&self) -> bool {
        matches!(self, RdfFormat::Turtle | RdfFormat::JsonLd)
    }
}
