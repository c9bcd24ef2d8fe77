//! In-memory RDF graph
//!
//! An insertion-ordered, unindexed triple store with wildcard pattern
//! queries, namespace bindings, format dispatch for parsing and
//! serialization, and remote document loading.
//!
//! The graph is not designed for concurrent mutation: it takes `&mut self`
//! for every mutating operation and callers sharing a graph across threads
//! must provide their own synchronization. [`Graph::load_uri`] performs a
//! blocking network request.

use crate::fetch::{self, FetchError, RDF_ACCEPT};
use crate::format::RdfFormat;
use crate::namespace::Namespace;
use crate::serialization::{jsonld, turtle, ParseError, ParseResult, SerializeResult};
use crate::term::Term;
use crate::triple::Triple;
use indexmap::IndexMap;
use std::fmt;
use std::io::Write;
use thiserror::Error;
use tracing::debug;

/// Errors surfaced by [`Graph::load_uri`].
#[derive(Error, Debug)]
pub enum LoadError {
    /// Network or HTTP-status failure
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The fetched document could not be decoded
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// An in-memory RDF graph.
///
/// Triples are kept in insertion order; that order drives subject grouping
/// during serialization. The primary [`Graph::add`] path deduplicates by
/// structural equality, while [`Graph::add_triple`] always appends.
pub struct Graph {
    triples: Vec<Triple>,
    uri: String,
    term: Term,
    namespaces: IndexMap<String, String>,
    skip_verify: bool,
}

impl Graph {
    /// Create an empty graph with the given base URI.
    pub fn new(uri: impl Into<String>) -> Self {
        let uri = uri.into();
        let term = Term::new_resource(uri.clone());
        Self {
            triples: Vec::new(),
            uri,
            term,
            namespaces: IndexMap::new(),
            skip_verify: false,
        }
    }

    /// Disable or re-enable TLS certificate verification for
    /// [`Graph::load_uri`]. Verification is enabled by default.
    pub fn set_skip_verify(&mut self, skip: bool) {
        self.skip_verify = skip;
    }

    /// Number of triples in the graph.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check if the graph holds no triples.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// The graph's base URI.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The resource term naming the graph's own URI.
    pub fn term(&self) -> &Term {
        &self.term
    }

    /// Iterate over every stored triple in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// The full triple sequence in insertion order.
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// Add a triple unless a structurally equal one is already stored.
    pub fn add(&mut self, triple: Triple) {
        if !self.triples.contains(&triple) {
            self.triples.push(triple);
        }
    }

    /// Add a triple made of individual subject, predicate, and object terms.
    /// Unlike [`Graph::add`] this path never deduplicates.
    pub fn add_triple(&mut self, subject: Term, predicate: Term, object: Term) {
        self.triples.push(Triple::new(subject, predicate, object));
    }

    /// Remove the first stored triple structurally equal to `triple`; no-op
    /// when absent.
    pub fn remove(&mut self, triple: &Triple) {
        if let Some(pos) = self.triples.iter().position(|t| t == triple) {
            self.triples.remove(pos);
        }
    }

    /// Return the first triple matching the pattern, in storage order. A
    /// `None` component is a wildcard; with all three unset the first stored
    /// triple is returned.
    pub fn one(&self, s: Option<&Term>, p: Option<&Term>, o: Option<&Term>) -> Option<&Triple> {
        self.triples.iter().find(|t| t.matches(s, p, o))
    }

    /// Return every triple matching the pattern, in storage order.
    ///
    /// With all three components unset this returns an empty result rather
    /// than the whole store; use [`Graph::iter`] or [`Graph::triples`] to
    /// dump the graph.
    pub fn all(&self, s: Option<&Term>, p: Option<&Term>, o: Option<&Term>) -> Vec<&Triple> {
        if s.is_none() && p.is_none() && o.is_none() {
            return Vec::new();
        }
        self.triples.iter().filter(|t| t.matches(s, p, o)).collect()
    }

    /// Add every triple of another graph through the deduplicating
    /// [`Graph::add`] path.
    pub fn merge(&mut self, other: &Graph) {
        for triple in other.iter() {
            self.add(triple.clone());
        }
    }

    /// Record a namespace binding for serialization. The prefix is
    /// normalized to end with `:`.
    pub fn bind(&mut self, namespace: &Namespace) {
        self.namespaces
            .insert(namespace.prefix.clone(), namespace.uri.clone());
    }

    /// Bound namespace table, in bind order.
    pub fn namespaces(&self) -> &IndexMap<String, String> {
        &self.namespaces
    }

    /// Parse RDF bytes under the given MIME type, appending the decoded
    /// statements without deduplication.
    pub fn parse(&mut self, data: &[u8], mime: &str) -> ParseResult<()> {
        let decoded = match RdfFormat::from_mime(mime) {
            Some(RdfFormat::Turtle) => turtle::decode(data, Some(&self.uri))?,
            Some(RdfFormat::JsonLd) => jsonld::decode(data)?,
            _ => return Err(ParseError::UnsupportedFormat(mime.to_string())),
        };

        debug!("parsed {} statements as {}", decoded.len(), mime);
        for triple in decoded {
            self.add_triple(triple.subject, triple.predicate, triple.object);
        }
        Ok(())
    }

    /// Fetch RDF data from a URI and parse it into the graph.
    ///
    /// The URI fragment is stripped before the request; when the graph was
    /// created with an empty base URI the document URI becomes the base.
    /// Fails on transport errors, non-200 responses, and undecodable bodies.
    /// This call blocks.
    pub fn load_uri(&mut self, uri: &str) -> Result<(), LoadError> {
        let doc = fetch::defrag(uri).to_string();
        if self.uri.is_empty() {
            self.uri = doc.clone();
            self.term = Term::new_resource(doc.clone());
        }

        debug!("fetching graph from {}", doc);
        let client = fetch::http_client(self.skip_verify)?;
        let response = client
            .get(&doc)
            .header(reqwest::header::ACCEPT, RDF_ACCEPT)
            .send()
            .map_err(FetchError::from)?;

        let status = response.status();
        if status.as_u16() != 200 {
            return Err(FetchError::Status {
                uri: uri.to_string(),
                code: status.as_u16(),
            }
            .into());
        }

        let mime = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .unwrap_or("")
            .trim()
            .to_string();
        let body = response.bytes().map_err(FetchError::from)?;

        self.parse(&body, &mime)?;
        Ok(())
    }

    /// Serialize the graph under the given MIME type. `application/ld+json`
    /// selects the JSON-LD writer; every other type falls back to Turtle.
    pub fn serialize<W: Write>(&self, w: &mut W, mime: &str) -> SerializeResult<()> {
        match RdfFormat::from_mime(mime) {
            Some(RdfFormat::JsonLd) => jsonld::write(w, &self.triples),
            _ => turtle::write(w, &self.triples, &self.namespaces),
        }
    }
}

impl fmt::Display for Graph {
    /// Diagnostic dump: `@prefix` lines followed by one statement per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (prefix, uri) in &self.namespaces {
            writeln!(f, "@prefix {} <{}> .", prefix, uri)?;
        }
        if !self.namespaces.is_empty() {
            writeln!(f)?;
        }
        for triple in &self.triples {
            writeln!(f, "{}", triple)?;
        }
        Ok(())
    }
}
