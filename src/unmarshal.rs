//! Nested resolution of flat triple sequences
//!
//! Folds a flat triple sequence describing one root entity and its
//! transitively referenced sub-entities into a nested document, then decodes
//! that document into a caller-supplied record type. Field population is
//! driven by matching short predicate keys (the last `/`- or `#`-delimited
//! URI segment) and injected `key` fields against the record's serde field
//! names.
//!
//! The root is the subject of the *first* triple; multi-root documents
//! require one invocation per root. This is a structural limitation of the
//! resolver, not an aggregation bug.

use crate::serialization::{turtle, ParseError};
use crate::triple::Triple;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

/// Unmarshalling errors
#[derive(Error, Debug)]
pub enum UnmarshalError {
    /// The input bytes could not be decoded into triples
    #[error(transparent)]
    Decode(#[from] ParseError),

    /// The resolver was invoked with zero triples
    #[error("no subject found in input")]
    NoSubject,

    /// A reference cycle deeper than a direct self-loop was found
    #[error("cycle detected while resolving {0}")]
    CycleDetected(String),

    /// The nested document did not fit the target record shape
    #[error("encoding error: {0}")]
    Encoding(String),
}

pub type UnmarshalResult<T> = Result<T, UnmarshalError>;

/// subject → (predicate → objects), multiplicity preserved
type Grouped = IndexMap<String, IndexMap<String, Vec<String>>>;

/// Decode Turtle bytes and hydrate `target`-shaped data from the statements
/// rooted at the first triple's subject.
///
/// Unrecognized keys are ignored; keys absent from the input leave fields at
/// their serde defaults.
pub fn unmarshal<T: DeserializeOwned>(data: &[u8]) -> UnmarshalResult<T> {
    let triples = turtle::decode(data, None)?;
    let document = resolve_nested(&triples)?;
    serde_json::from_value(document).map_err(|e| UnmarshalError::Encoding(e.to_string()))
}

/// Fold a flat triple sequence into a nested document rooted at the first
/// triple's subject.
pub fn resolve_nested(triples: &[Triple]) -> UnmarshalResult<Value> {
    let root = triples.first().ok_or(UnmarshalError::NoSubject)?;
    let root_subject = root.subject.value();

    let mut grouped: Grouped = IndexMap::new();
    for triple in triples {
        grouped
            .entry(triple.subject.value())
            .or_default()
            .entry(triple.predicate.value())
            .or_default()
            .push(triple.object.value());
    }
    debug!("resolving {} grouped subjects", grouped.len());

    let mut path = Vec::new();
    let entity = resolve_entity(&grouped, &root_subject, &mut path)?;
    Ok(Value::Object(entity))
}

fn resolve_entity(
    grouped: &Grouped,
    subject: &str,
    path: &mut Vec<String>,
) -> UnmarshalResult<Map<String, Value>> {
    if path.iter().any(|seen| seen == subject) {
        return Err(UnmarshalError::CycleDetected(subject.to_string()));
    }
    path.push(subject.to_string());

    let mut result = Map::new();
    if let Some(predicates) = grouped.get(subject) {
        for (predicate, objects) in predicates {
            let key = short_key(predicate);

            let value = if objects.len() == 1 {
                let object = &objects[0];
                if object == subject {
                    // Self-referential statement: keep the raw object string
                    // instead of recursing forever.
                    Value::String(object.clone())
                } else if grouped.contains_key(object) {
                    Value::Array(vec![resolve_child(grouped, object, path)?])
                } else {
                    Value::String(object.clone())
                }
            } else {
                let mut items = Vec::with_capacity(objects.len());
                for object in objects {
                    if grouped.contains_key(object) {
                        items.push(resolve_child(grouped, object, path)?);
                    } else {
                        items.push(Value::String(object.clone()));
                    }
                }
                Value::Array(items)
            };

            result.insert(key, value);
        }
    }

    path.pop();
    Ok(result)
}

/// Resolve a grouped object as a nested entity and inject its short
/// identifier as a synthetic `key` field.
fn resolve_child(
    grouped: &Grouped,
    subject: &str,
    path: &mut Vec<String>,
) -> UnmarshalResult<Value> {
    let mut entity = resolve_entity(grouped, subject, path)?;
    entity.insert("key".to_string(), Value::String(short_key(subject)));
    Ok(Value::Object(entity))
}

/// Last non-empty `/`- or `#`-delimited segment of a URI.
fn short_key(uri: &str) -> String {
    uri.rsplit(['/', '#'])
        .find(|segment| !segment.is_empty())
        .unwrap_or(uri)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Term;
    use serde::Deserialize;
    use serde_json::json;

    fn triple(s: &str, p: &str, o: Term) -> Triple {
        Triple::new(Term::new_resource(s), Term::new_resource(p), o)
    }

    #[test]
    fn test_short_key() {
        assert_eq!(short_key("http://xmlns.com/foaf/0.1/name"), "name");
        assert_eq!(short_key("http://example.org/card#me"), "me");
        assert_eq!(short_key("#credential1"), "credential1");
        assert_eq!(short_key("http://example.org/people/"), "people");
    }

    #[test]
    fn test_two_level_chain() {
        let triples = vec![
            triple(
                "http://example.org/root",
                "http://schema.org/name",
                Term::new_literal("Alice"),
            ),
            triple(
                "http://example.org/root",
                "http://schema.org/knows",
                Term::new_resource("http://example.org/child"),
            ),
            triple(
                "http://example.org/child",
                "http://schema.org/name",
                Term::new_literal("Bob"),
            ),
        ];

        let value = resolve_nested(&triples).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Alice",
                "knows": [{"name": "Bob", "key": "child"}],
            })
        );
    }

    #[test]
    fn test_repeated_predicate_builds_list() {
        let triples = vec![
            triple(
                "http://example.org/root",
                "http://schema.org/skills",
                Term::new_resource("http://example.org/skill1"),
            ),
            triple(
                "http://example.org/root",
                "http://schema.org/skills",
                Term::new_literal("improvised"),
            ),
            triple(
                "http://example.org/skill1",
                "http://schema.org/name",
                Term::new_literal("Leadership"),
            ),
        ];

        let value = resolve_nested(&triples).unwrap();
        assert_eq!(
            value,
            json!({
                "skills": [
                    {"name": "Leadership", "key": "skill1"},
                    "improvised",
                ],
            })
        );
    }

    #[test]
    fn test_self_loop_keeps_literal() {
        let triples = vec![triple(
            "http://example.org/root",
            "http://schema.org/sameAs",
            Term::new_resource("http://example.org/root"),
        )];

        let value = resolve_nested(&triples).unwrap();
        assert_eq!(value, json!({"sameAs": "http://example.org/root"}));
    }

    #[test]
    fn test_deep_cycle_is_detected() {
        let triples = vec![
            triple(
                "http://example.org/a",
                "http://schema.org/knows",
                Term::new_resource("http://example.org/b"),
            ),
            triple(
                "http://example.org/b",
                "http://schema.org/knows",
                Term::new_resource("http://example.org/a"),
            ),
        ];

        assert!(matches!(
            resolve_nested(&triples),
            Err(UnmarshalError::CycleDetected(_))
        ));
    }

    #[test]
    fn test_empty_input_fails_with_no_subject() {
        assert!(matches!(
            resolve_nested(&[]),
            Err(UnmarshalError::NoSubject)
        ));
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Person {
        name: String,
        email: String,
        knows: Vec<Know>,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Know {
        name: String,
        key: String,
    }

    #[test]
    fn test_unmarshal_into_record() {
        let doc = concat!(
            "<http://example.org/alice> <http://schema.org/name> \"Alice\" .\n",
            "<http://example.org/alice> <http://schema.org/knows> <http://example.org/bob> .\n",
            "<http://example.org/bob> <http://schema.org/name> \"Bob\" .\n",
        );

        let person: Person = unmarshal(doc.as_bytes()).unwrap();
        assert_eq!(person.name, "Alice");
        // missing key stays at its default
        assert_eq!(person.email, "");
        assert_eq!(person.knows.len(), 1);
        assert_eq!(person.knows[0].name, "Bob");
        assert_eq!(person.knows[0].key, "bob");
    }

    #[test]
    fn test_unmarshal_empty_document_fails() {
        let result: UnmarshalResult<Person> = unmarshal(b"");
        assert!(matches!(result, Err(UnmarshalError::NoSubject)));
    }

    #[test]
    fn test_unmarshal_malformed_turtle_fails() {
        let result: UnmarshalResult<Person> = unmarshal(b"not turtle at all");
        assert!(matches!(result, Err(UnmarshalError::Decode(_))));
    }
}
