//! Turtle decoding and writing
//!
//! Decoding goes through the external statement decoder (`rio_turtle`); the
//! writer is a simplified emitter that groups triples by subject. It does not
//! produce collection shorthand, numeric literal shorthand, or
//! base-URI-relative compaction.

use crate::serialization::{ParseError, ParseResult, SerializeResult};
use crate::term::Term;
use crate::triple::Triple;
use indexmap::IndexMap;
use rio_api::parser::TriplesParser;
use rio_turtle::TurtleParser;
use std::io::{BufReader, Cursor, Write};

/// Decode Turtle bytes into a flat triple sequence. Relative IRIs in the
/// document resolve against `base` when one is given and well-formed.
pub fn decode(data: &[u8], base: Option<&str>) -> ParseResult<Vec<Triple>> {
    let base_iri = base.and_then(|uri| oxiri::Iri::parse(uri.to_string()).ok());
    let reader = BufReader::new(Cursor::new(data));
    let mut parser = TurtleParser::new(reader, base_iri);

    let mut triples = Vec::new();
    parser.parse_all(&mut |t| {
        let subject = convert_subject(t.subject)?;
        let predicate = convert_named_node(t.predicate);
        let object = convert_term(t.object)?;
        triples.push(Triple::new(subject, predicate, object));
        Ok::<(), ParseError>(())
    })?;

    Ok(triples)
}

fn convert_subject(s: rio_api::model::Subject<'_>) -> ParseResult<Term> {
    match s {
        rio_api::model::Subject::NamedNode(n) => Ok(Term::new_resource(n.iri)),
        rio_api::model::Subject::BlankNode(b) => Ok(Term::new_blank_node_with_id(b.id)),
        _ => Err(ParseError::Decode("unsupported subject type".to_string())),
    }
}

fn convert_named_node(n: rio_api::model::NamedNode<'_>) -> Term {
    Term::new_resource(n.iri)
}

fn convert_term(o: rio_api::model::Term<'_>) -> ParseResult<Term> {
    match o {
        rio_api::model::Term::NamedNode(n) => Ok(Term::new_resource(n.iri)),
        rio_api::model::Term::BlankNode(b) => Ok(Term::new_blank_node_with_id(b.id)),
        rio_api::model::Term::Literal(l) => Ok(match l {
            rio_api::model::Literal::Simple { value } => Term::new_literal(value),
            rio_api::model::Literal::LanguageTaggedString { value, language } => {
                Term::new_literal_with_language(value, language)
            }
            rio_api::model::Literal::Typed { value, datatype } => {
                Term::new_literal_with_datatype(value, Term::new_resource(datatype.iri))
            }
        }),
        _ => Err(ParseError::Decode("unsupported object type".to_string())),
    }
}

/// Write a triple sequence as Turtle text.
///
/// Emits one `@prefix` line per bound namespace (in table order) followed by
/// a blank line, then one block per subject in order of first appearance.
/// Within a block each predicate-object pair is terminated by `;` except the
/// last, which is terminated by `.`.
pub fn write<W: Write>(
    w: &mut W,
    triples: &[Triple],
    namespaces: &IndexMap<String, String>,
) -> SerializeResult<()> {
    for (prefix, uri) in namespaces {
        writeln!(w, "@prefix {} <{}> .", prefix, uri)?;
    }
    if !namespaces.is_empty() {
        writeln!(w)?;
    }

    let mut by_subject: IndexMap<String, Vec<&Triple>> = IndexMap::new();
    for triple in triples {
        by_subject
            .entry(triple.subject.to_string())
            .or_default()
            .push(triple);
    }

    let subject_count = by_subject.len();
    for (i, (subject, group)) in by_subject.iter().enumerate() {
        writeln!(w, "{}", subject)?;

        for (key, triple) in group.iter().enumerate() {
            let p = triple.predicate.to_string();
            let o = triple.object.to_string();

            if key == group.len() - 1 {
                write!(w, "  {} {} .", p, o)?;
            } else {
                writeln!(w, "  {} {} ;", p, o)?;
            }
        }

        if subject_count > i + 1 {
            write!(w, "\n\n")?;
        }
    }

    Ok(())
}
