//! RDF term model
//!
//! A [`Term`] is one of the four kinds of RDF node: a named resource, a
//! literal, a blank node, or a namespaced attribute. The enum is a closed sum
//! type, so equality, encoding, and serialization dispatch are all
//! exhaustively pattern-matched; adding a term kind is a compile-time-checked
//! change.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter backing auto-generated blank node identifiers.
static NEXT_BLANK_ID: AtomicU64 = AtomicU64::new(1);

/// Named resource identified by a URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Resource {
    /// The resource URI.
    pub uri: String,
}

impl Resource {
    /// Create a resource from a URI string.
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.uri)
    }
}

/// Literal value with optional datatype and language tag.
///
/// The datatype is itself a [`Term`], typically a [`Resource`] naming an XSD
/// type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    /// The lexical value.
    pub value: String,
    /// Optional datatype term.
    pub datatype: Option<Box<Term>>,
    /// Optional language tag (e.g. `en`).
    pub language: Option<String>,
}

impl Literal {
    /// Create a plain literal.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            datatype: None,
            language: None,
        }
    }

    /// Create a literal with a datatype term.
    pub fn with_datatype(value: impl Into<String>, datatype: Term) -> Self {
        Self {
            value: value.into(),
            datatype: Some(Box::new(datatype)),
            language: None,
        }
    }

    /// Create a literal with a language tag.
    pub fn with_language(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            datatype: None,
            language: Some(language.into()),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.value)?;
        if let Some(lang) = &self.language {
            write!(f, "@{}", lang)?;
        } else if let Some(datatype) = &self.datatype {
            write!(f, "^^{}", datatype)?;
        }
        Ok(())
    }
}

/// Blank node with a graph-scoped identifier.
///
/// Identifiers are only meaningful within a single graph or parse; two blank
/// nodes from different documents never denote the same node even when their
/// identifiers collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlankNode {
    /// Local identifier, without the `_:` marker.
    pub id: String,
}

impl BlankNode {
    /// Create a blank node with a fresh auto-generated identifier.
    pub fn new() -> Self {
        let n = NEXT_BLANK_ID.fetch_add(1, Ordering::Relaxed);
        Self {
            id: format!("n{}", n),
        }
    }

    /// Create a blank node with a given identifier.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Default for BlankNode {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.id)
    }
}

/// Namespaced attribute, denoting `prefix:attr`.
///
/// The prefix is resolved against the bound namespace table of the graph at
/// serialization time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespaceAttr {
    /// Namespace prefix, always ending with `:`.
    pub prefix: String,
    /// Attribute name.
    pub attr: String,
}

impl NamespaceAttr {
    /// Create a namespaced attribute. The prefix is normalized to end with
    /// `:`.
    pub fn new(prefix: impl Into<String>, attr: impl Into<String>) -> Self {
        let mut prefix = prefix.into();
        if !prefix.ends_with(':') {
            prefix.push(':');
        }
        Self {
            prefix,
            attr: attr.into(),
        }
    }
}

impl fmt::Display for NamespaceAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.attr)
    }
}

/// An RDF term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// Named resource (URI).
    Resource(Resource),
    /// Literal value.
    Literal(Literal),
    /// Blank node.
    BlankNode(BlankNode),
    /// Namespaced attribute (`prefix:attr`).
    NamespaceAttr(NamespaceAttr),
}

impl Term {
    /// Create a resource term from a URI string.
    pub fn new_resource(uri: impl Into<String>) -> Self {
        Term::Resource(Resource::new(uri))
    }

    /// Create a plain literal term.
    pub fn new_literal(value: impl Into<String>) -> Self {
        Term::Literal(Literal::new(value))
    }

    /// Create a literal term with a datatype.
    pub fn new_literal_with_datatype(value: impl Into<String>, datatype: Term) -> Self {
        Term::Literal(Literal::with_datatype(value, datatype))
    }

    /// Create a literal term with a language tag.
    pub fn new_literal_with_language(
        value: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Term::Literal(Literal::with_language(value, language))
    }

    /// Create a blank node term with a fresh identifier.
    pub fn new_blank_node() -> Self {
        Term::BlankNode(BlankNode::new())
    }

    /// Create a blank node term with a given identifier.
    pub fn new_blank_node_with_id(id: impl Into<String>) -> Self {
        Term::BlankNode(BlankNode::with_id(id))
    }

    /// Check if this is a resource.
    pub fn is_resource(&self) -> bool {
        matches!(self, Term::Resource(_))
    }

    /// Check if this is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// Check if this is a blank node.
    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    /// Raw value of the term, without brackets, quotes, or suffixes: the URI
    /// of a resource, the lexical value of a literal, `_:id` for a blank
    /// node, `prefix:attr` for a namespaced attribute.
    pub fn value(&self) -> String {
        match self {
            Term::Resource(r) => r.uri.clone(),
            Term::Literal(l) => l.value.clone(),
            Term::BlankNode(b) => format!("_:{}", b.id),
            Term::NamespaceAttr(a) => format!("{}{}", a.prefix, a.attr),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Resource(r) => write!(f, "{}", r),
            Term::Literal(l) => write!(f, "{}", l),
            Term::BlankNode(b) => write!(f, "{}", b),
            Term::NamespaceAttr(a) => write!(f, "{}", a),
        }
    }
}

impl From<Resource> for Term {
    fn from(resource: Resource) -> Self {
        Term::Resource(resource)
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Term::Literal(literal)
    }
}

impl From<BlankNode> for Term {
    fn from(node: BlankNode) -> Self {
        Term::BlankNode(node)
    }
}

impl From<NamespaceAttr> for Term {
    fn from(attr: NamespaceAttr) -> Self {
        Term::NamespaceAttr(attr)
    }
}

/// Common vocabulary terms.
pub mod vocab {
    use super::Term;

    /// The `rdf:type` predicate resource.
    pub fn rdf_type() -> Term {
        Term::new_resource("http://www.w3.org/1999/02/22-rdf-syntax-ns#type")
    }
}
