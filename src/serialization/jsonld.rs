//! JSON-LD decoding and writing
//!
//! The writer produces a JSON-LD-shaped document: a flat array with one
//! fragment per triple. Subjects are deliberately *not* merged across
//! fragments, so a subject with N statements yields N array entries sharing
//! the same `@id`.
//!
//! The decoder reads expanded-form JSON-LD (an array of node objects with
//! `@id`, `@type`, and predicate keys mapping to arrays of value objects).
//! Context processing and compaction are out of scope.

use crate::serialization::{ParseError, ParseResult, SerializeError, SerializeResult};
use crate::term::{Term, vocab};
use crate::triple::Triple;
use serde_json::{json, Map, Value};
use std::io::Write;

/// Write a triple sequence as a flat array of JSON-LD fragments, one per
/// triple.
pub fn write<W: Write>(w: &mut W, triples: &[Triple]) -> SerializeResult<()> {
    let mut fragments: Vec<Value> = Vec::new();

    for triple in triples {
        let mut one = Map::new();
        let id = match &triple.subject {
            Term::BlankNode(b) => b.to_string(),
            other => other.value(),
        };
        one.insert("@id".to_string(), Value::String(id));

        match &triple.object {
            Term::Resource(r) => {
                one.insert(triple.predicate.value(), json!([{ "@id": r.uri }]));
            }
            Term::Literal(l) => {
                let mut v = Map::new();
                v.insert("@value".to_string(), Value::String(l.value.clone()));
                if let Some(datatype) = &l.datatype {
                    v.insert("@type".to_string(), Value::String(datatype.value()));
                }
                if let Some(language) = &l.language {
                    v.insert("@language".to_string(), Value::String(language.clone()));
                }
                one.insert(triple.predicate.value(), Value::Array(vec![Value::Object(v)]));
            }
            // Blank node and namespaced-attribute objects contribute no
            // predicate entry; the fragment carries the @id alone.
            _ => {}
        }

        fragments.push(Value::Object(one));
    }

    serde_json::to_writer(w, &Value::Array(fragments))
        .map_err(|e| SerializeError::Serialize(e.to_string()))
}

/// Decode expanded-form JSON-LD bytes into a flat triple sequence.
pub fn decode(data: &[u8]) -> ParseResult<Vec<Triple>> {
    let document: Value =
        serde_json::from_slice(data).map_err(|e| ParseError::Decode(e.to_string()))?;

    let nodes: Vec<&Value> = match &document {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) => match map.get("@graph") {
            Some(Value::Array(items)) => items.iter().collect(),
            _ => vec![&document],
        },
        _ => {
            return Err(ParseError::Decode(
                "expected a JSON-LD node object or array".to_string(),
            ))
        }
    };

    let mut triples = Vec::new();
    for node in nodes {
        decode_node(node, &mut triples)?;
    }
    Ok(triples)
}

/// Decode one node object, appending its statements and returning the term
/// naming the node.
fn decode_node(node: &Value, triples: &mut Vec<Triple>) -> ParseResult<Term> {
    let node = node
        .as_object()
        .ok_or_else(|| ParseError::Decode("node object expected".to_string()))?;

    let subject = match node.get("@id").and_then(Value::as_str) {
        Some(id) => id_term(id),
        None => Term::new_blank_node(),
    };

    for (key, value) in node {
        match key.as_str() {
            "@id" => {}
            "@type" => {
                for ty in as_slice(value) {
                    if let Some(uri) = ty.as_str() {
                        triples.push(Triple::new(
                            subject.clone(),
                            vocab::rdf_type(),
                            Term::new_resource(uri),
                        ));
                    }
                }
            }
            _ if key.starts_with('@') => {
                // Other keywords (@context, @index, ...) are not part of the
                // expanded shape this decoder accepts.
                return Err(ParseError::Decode(format!("unsupported keyword {}", key)));
            }
            predicate => {
                for item in as_slice(value) {
                    let object = decode_object(item, triples)?;
                    triples.push(Triple::new(
                        subject.clone(),
                        Term::new_resource(predicate),
                        object,
                    ));
                }
            }
        }
    }

    Ok(subject)
}

fn decode_object(item: &Value, triples: &mut Vec<Triple>) -> ParseResult<Term> {
    match item {
        Value::String(s) => Ok(Term::new_literal(s)),
        Value::Object(map) => {
            if let Some(value) = map.get("@value") {
                let value = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                if let Some(language) = map.get("@language").and_then(Value::as_str) {
                    Ok(Term::new_literal_with_language(value, language))
                } else if let Some(datatype) = map.get("@type").and_then(Value::as_str) {
                    Ok(Term::new_literal_with_datatype(
                        value,
                        Term::new_resource(datatype),
                    ))
                } else {
                    Ok(Term::new_literal(value))
                }
            } else if map.len() == 1 {
                match map.get("@id").and_then(Value::as_str) {
                    Some(id) => Ok(id_term(id)),
                    None => Err(ParseError::Decode("value object expected".to_string())),
                }
            } else {
                // Embedded node object: decode its statements, link by id.
                decode_node(item, triples)
            }
        }
        other => Err(ParseError::Decode(format!(
            "unsupported object value: {}",
            other
        ))),
    }
}

fn id_term(id: &str) -> Term {
    match id.strip_prefix("_:") {
        Some(blank_id) => Term::new_blank_node_with_id(blank_id),
        None => Term::new_resource(id),
    }
}

fn as_slice(value: &Value) -> &[Value] {
    match value {
        Value::Array(items) => items.as_slice(),
        other => std::slice::from_ref(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_str(triples: &[Triple]) -> String {
        let mut out = Vec::new();
        write(&mut out, triples).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_fragments_are_not_merged() {
        let alice = Term::new_resource("http://example.org/alice");
        let triples = vec![
            Triple::new(
                alice.clone(),
                Term::new_resource("http://example.org/name"),
                Term::new_literal("Alice"),
            ),
            Triple::new(
                alice.clone(),
                Term::new_resource("http://example.org/knows"),
                Term::new_resource("http://example.org/bob"),
            ),
        ];

        let document: Value = serde_json::from_str(&write_str(&triples)).unwrap();
        let fragments = document.as_array().unwrap();

        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0]["@id"], fragments[1]["@id"]);
        assert_eq!(
            fragments[0]["http://example.org/name"][0]["@value"],
            json!("Alice")
        );
        assert_eq!(
            fragments[1]["http://example.org/knows"][0]["@id"],
            json!("http://example.org/bob")
        );
    }

    #[test]
    fn test_literal_annotations() {
        let triples = vec![
            Triple::new(
                Term::new_resource("http://example.org/a"),
                Term::new_resource("http://example.org/age"),
                Term::new_literal_with_datatype(
                    "30",
                    Term::new_resource("http://www.w3.org/2001/XMLSchema#integer"),
                ),
            ),
            Triple::new(
                Term::new_resource("http://example.org/a"),
                Term::new_resource("http://example.org/name"),
                Term::new_literal_with_language("Alice", "en"),
            ),
        ];

        let document: Value = serde_json::from_str(&write_str(&triples)).unwrap();
        let fragments = document.as_array().unwrap();

        assert_eq!(
            fragments[0]["http://example.org/age"][0]["@type"],
            json!("http://www.w3.org/2001/XMLSchema#integer")
        );
        assert_eq!(
            fragments[1]["http://example.org/name"][0]["@language"],
            json!("en")
        );
    }

    #[test]
    fn test_blank_node_subject_keeps_marker() {
        let triples = vec![Triple::new(
            Term::new_blank_node_with_id("b0"),
            Term::new_resource("http://example.org/name"),
            Term::new_literal("Anon"),
        )];

        let document: Value = serde_json::from_str(&write_str(&triples)).unwrap();
        assert_eq!(document[0]["@id"], json!("_:b0"));
    }

    #[test]
    fn test_decode_expanded_document() {
        let input = br#"[
            {
                "@id": "http://example.org/alice",
                "@type": ["http://schema.org/Person"],
                "http://schema.org/name": [{"@value": "Alice"}],
                "http://schema.org/knows": [{"@id": "http://example.org/bob"}]
            }
        ]"#;

        let triples = decode(input).unwrap();
        assert_eq!(triples.len(), 3);
        assert_eq!(triples[0].predicate, vocab::rdf_type());
        // Node object keys iterate in sorted order, so `knows` lands before
        // `name`.
        assert_eq!(
            triples[1].object,
            Term::new_resource("http://example.org/bob")
        );
        assert_eq!(triples[2].object, Term::new_literal("Alice"));
    }

    #[test]
    fn test_decode_round_trips_writer_output() {
        let triples = vec![Triple::new(
            Term::new_resource("http://example.org/alice"),
            Term::new_resource("http://schema.org/name"),
            Term::new_literal_with_language("Alice", "en"),
        )];

        let parsed = decode(write_str(&triples).as_bytes()).unwrap();
        assert_eq!(parsed, triples);
    }

    #[test]
    fn test_decode_rejects_non_json() {
        assert!(decode(b"not json").is_err());
    }
}
