//! Namespace prefixes for compact IRI notation.

use crate::term::{NamespaceAttr, Term};

/// Namespace (prefix → URI binding), used to abbreviate serialized output.
///
/// The prefix is normalized to end with `:` on construction. Immutable once
/// constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    /// Prefix, always ending with `:`.
    pub prefix: String,
    /// URI stem the prefix stands for.
    pub uri: String,
}

impl Namespace {
    /// Create a new namespace binding.
    pub fn new(prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        let mut prefix = prefix.into();
        if !prefix.ends_with(':') {
            prefix.push(':');
        }
        Self {
            prefix,
            uri: uri.into(),
        }
    }

    /// Build the term `prefix:name` under this namespace.
    pub fn with_attr(&self, name: impl Into<String>) -> Term {
        Term::NamespaceAttr(NamespaceAttr::new(self.prefix.clone(), name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_normalization() {
        let ns = Namespace::new("ns1", "http://schema.org/");
        assert_eq!(ns.prefix, "ns1:");

        let ns = Namespace::new("ns1:", "http://schema.org/");
        assert_eq!(ns.prefix, "ns1:");
    }

    #[test]
    fn test_with_attr() {
        let ns = Namespace::new("ns1", "http://schema.org/");
        let term = ns.with_attr("Profile");
        assert_eq!(term.to_string(), "ns1:Profile");
    }
}
