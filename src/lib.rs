//! In-memory RDF knowledge graph
//!
//! Models an RDF graph as a flat collection of subject-predicate-object
//! statements and provides:
//!
//! - a queryable in-memory triple store with wildcard pattern matching
//! - serializers rendering the store as Turtle text or a JSON-LD-shaped
//!   document
//! - an inverse transform folding a flat triple set back into a nested
//!   value, used to populate typed records from graph data
//!
//! The store is single-threaded by design: every mutation takes `&mut self`
//! and callers sharing a graph across threads must synchronize externally.
//! [`Graph::load_uri`] performs a blocking HTTP request.
//!
//! # Example
//!
//! ```rust
//! use rdf_graph::{Graph, Namespace, Term};
//!
//! let mut g = Graph::new("http://schema.org/");
//! let ns1 = Namespace::new("ns1", "http://schema.org/");
//! g.bind(&ns1);
//!
//! let profile = Term::new_resource("http://solid/profile/card#me");
//! g.add_triple(profile.clone(), rdf_graph::vocab::rdf_type(), ns1.with_attr("Profile"));
//! g.add_triple(profile.clone(), ns1.with_attr("name"), Term::new_literal("John Doe"));
//!
//! let mut out = Vec::new();
//! g.serialize(&mut out, "text/turtle").unwrap();
//! let turtle = String::from_utf8(out).unwrap();
//! assert!(turtle.starts_with("@prefix ns1: <http://schema.org/> ."));
//! ```

#![warn(clippy::all)]

pub mod fetch;
pub mod format;
pub mod graph;
pub mod namespace;
pub mod serialization;
pub mod term;
pub mod triple;
pub mod unmarshal;

// Re-export main types for convenience
pub use term::{vocab, BlankNode, Literal, NamespaceAttr, Resource, Term};

pub use triple::Triple;

pub use namespace::Namespace;

pub use graph::{Graph, LoadError};

pub use format::{
    RdfFormat, JSONLD_MIME, N3_MIME, RDFXML_MIME, SPARQL_UPDATE_MIME, TURTLE_MIME,
};

pub use serialization::{ParseError, ParseResult, SerializeError, SerializeResult};

pub use fetch::{http_client, FetchError, FetchResult};

pub use unmarshal::{resolve_nested, unmarshal, UnmarshalError, UnmarshalResult};
