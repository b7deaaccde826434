//! Turtle and N-Triples via rio

use super::{ParseError, ParseResult, SerializeError, SerializeResult};
use crate::rdf::{Literal, NamedNode, RdfObject, RdfPredicate, Triple};
use rio_api::formatter::TriplesFormatter;
use rio_api::parser::TriplesParser;
use rio_turtle::{NTriplesFormatter, NTriplesParser, TurtleFormatter, TurtleParser};
use std::io::{BufReader, Cursor};

const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

/// Parse a Turtle document
pub(super) fn parse_turtle(input: &str) -> ParseResult<Vec<Triple>> {
    let mut reader = BufReader::new(Cursor::new(input));
    let mut parser = TurtleParser::new(&mut reader, None);
    let mut triples = Vec::new();

    let res: Result<(), rio_turtle::TurtleError> = parser.parse_all(&mut |t| {
        triples.push(convert_triple(t).map_err(invalid_data)?);
        Ok(())
    });

    res.map(|_| triples).map_err(|e| ParseError::Parse(e.to_string()))
}

/// Parse an N-Triples document
pub(super) fn parse_ntriples(input: &str) -> ParseResult<Vec<Triple>> {
    let mut reader = BufReader::new(Cursor::new(input));
    let mut parser = NTriplesParser::new(&mut reader);
    let mut triples = Vec::new();

    let res: Result<(), rio_turtle::TurtleError> = parser.parse_all(&mut |t| {
        triples.push(convert_triple(t).map_err(invalid_data)?);
        Ok(())
    });

    res.map(|_| triples).map_err(|e| ParseError::Parse(e.to_string()))
}

/// Serialize triples as Turtle
pub(super) fn serialize_turtle(triples: &[Triple]) -> SerializeResult<String> {
    let mut formatter = TurtleFormatter::new(Vec::new());
    for triple in triples {
        with_rio_triple(triple, |t| formatter.format(t))?;
    }
    let output = formatter.finish()?;
    String::from_utf8(output).map_err(|e| SerializeError::Serialize(e.to_string()))
}

/// Serialize triples as N-Triples
pub(super) fn serialize_ntriples(triples: &[Triple]) -> SerializeResult<String> {
    let mut formatter = NTriplesFormatter::new(Vec::new());
    for triple in triples {
        with_rio_triple(triple, |t| formatter.format(t))?;
    }
    let output = formatter.finish()?;
    String::from_utf8(output).map_err(|e| SerializeError::Serialize(e.to_string()))
}

/// Borrow a triple as a rio model triple for the duration of `f`
pub(super) fn with_rio_triple<F>(triple: &Triple, f: F) -> std::io::Result<()>
where
    F: FnOnce(&rio_api::model::Triple<'_>) -> std::io::Result<()>,
{
    let datatype = match &triple.object {
        RdfObject::Literal(l) => Some(l.datatype()),
        RdfObject::NamedNode(_) => None,
    };

    let object = match &triple.object {
        RdfObject::NamedNode(n) => {
            rio_api::model::Term::NamedNode(rio_api::model::NamedNode { iri: n.as_str() })
        }
        RdfObject::Literal(l) => {
            let literal = if let Some(language) = l.language() {
                rio_api::model::Literal::LanguageTaggedString {
                    value: l.value(),
                    language,
                }
            } else {
                match &datatype {
                    Some(dt) if dt.as_str() != XSD_STRING => rio_api::model::Literal::Typed {
                        value: l.value(),
                        datatype: rio_api::model::NamedNode { iri: dt.as_str() },
                    },
                    _ => rio_api::model::Literal::Simple { value: l.value() },
                }
            };
            rio_api::model::Term::Literal(literal)
        }
    };

    let rio_triple = rio_api::model::Triple {
        subject: rio_api::model::Subject::NamedNode(rio_api::model::NamedNode {
            iri: triple.subject.as_str(),
        }),
        predicate: rio_api::model::NamedNode {
            iri: triple.predicate.as_str(),
        },
        object,
    };

    f(&rio_triple)
}

fn invalid_data(e: ParseError) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
}

fn convert_triple(t: rio_api::model::Triple<'_>) -> ParseResult<Triple> {
    let subject = match t.subject {
        rio_api::model::Subject::NamedNode(n) => named_node(n.iri)?,
        _ => return Err(ParseError::Parse("Only IRI subjects are supported".to_string())),
    };
    let predicate =
        RdfPredicate::new(t.predicate.iri).map_err(|e| ParseError::Parse(e.to_string()))?;
    let object = match t.object {
        rio_api::model::Term::NamedNode(n) => RdfObject::NamedNode(named_node(n.iri)?),
        rio_api::model::Term::Literal(rio_api::model::Literal::Simple { value }) => {
            RdfObject::Literal(Literal::new_simple_literal(value))
        }
        rio_api::model::Term::Literal(rio_api::model::Literal::LanguageTaggedString {
            value,
            language,
        }) => {
            let literal = oxrdf::Literal::new_language_tagged_literal(value, language)
                .map_err(|e| ParseError::Parse(e.to_string()))?;
            RdfObject::Literal(literal.into())
        }
        rio_api::model::Term::Literal(rio_api::model::Literal::Typed { value, datatype }) => {
            RdfObject::Literal(Literal::new_typed_literal(value, named_node(datatype.iri)?))
        }
        _ => {
            return Err(ParseError::Parse(
                "Only IRI and literal objects are supported".to_string(),
            ))
        }
    };
    Ok(Triple::new(subject, predicate, object))
}

fn named_node(iri: &str) -> ParseResult<NamedNode> {
    NamedNode::new(iri).map_err(|e| ParseError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turtle_prefixes_and_order() {
        let input = r#"
            @prefix vcard: <http://www.w3.org/2006/vcard/ns#> .
            <http://vivo.ufl.edu/individual/n9> vcard:givenName "Michael" ;
                vcard:familyName "Conlon" .
        "#;
        let triples = parse_turtle(input).unwrap();
        assert_eq!(triples.len(), 2);
        assert_eq!(triples[0].predicate.as_str(), "http://www.w3.org/2006/vcard/ns#givenName");
        assert_eq!(triples[1].object.value(), "Conlon");
    }

    #[test]
    fn test_blank_node_subject_rejected() {
        let input = r#"_:b <http://example.org/p> "x" ."#;
        assert!(parse_turtle(input).is_err());
    }

    #[test]
    fn test_typed_literal_roundtrip() {
        let input = concat!(
            r#"<http://example.org/v> <http://vivoweb.org/ontology/core#dateTime> "#,
            r#""2013-01-01T00:00:00"^^<http://www.w3.org/2001/XMLSchema#dateTime> ."#
        );
        let triples = parse_ntriples(input).unwrap();
        let text = serialize_ntriples(&triples).unwrap();
        assert!(text.contains("^^<http://www.w3.org/2001/XMLSchema#dateTime>"));
        assert_eq!(parse_ntriples(&text).unwrap(), triples);
    }
}
