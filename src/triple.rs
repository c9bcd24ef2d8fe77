//! RDF triple: an ordered (subject, predicate, object) statement.

use crate::term::Term;
use std::fmt;

/// A subject-predicate-object statement, the atomic unit of an RDF graph.
///
/// Equality is structural: two triples are equal when all three components
/// are pairwise equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// Subject
    pub subject: Term,
    /// Predicate
    pub predicate: Term,
    /// Object
    pub object: Term,
}

impl Triple {
    /// Create a new triple.
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }

    /// Check whether this triple matches a pattern of optional components.
    /// A `None` component is a wildcard matching any value; a `Some`
    /// component must be structurally equal.
    pub fn matches(&self, s: Option<&Term>, p: Option<&Term>, o: Option<&Term>) -> bool {
        if let Some(s) = s {
            if s != &self.subject {
                return false;
            }
        }
        if let Some(p) = p {
            if p != &self.predicate {
                return false;
            }
        }
        if let Some(o) = o {
            if o != &self.object {
                return false;
            }
        }
        true
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}
