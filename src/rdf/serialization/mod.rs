//! RDF serialization formats
//!
//! Supports:
//! - Turtle (TTL), parse and serialize
//! - N-Triples (NT), parse and serialize
//! - RDF/XML, serialize only (the format VIVO's ingest tools accept)

mod rdfxml;
mod turtle;

use super::Triple;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// RDF serialization format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RdfFormat {
    /// Turtle format (.ttl)
    Turtle,
    /// N-Triples format (.nt)
    #[default]
    NTriples,
    /// RDF/XML format (.rdf)
    RdfXml,
}

/// Parse errors
#[derive(Error, Debug)]
pub enum ParseError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Unsupported format
    #[error("Unsupported format: {0:?}")]
    UnsupportedFormat(RdfFormat),
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Serialization errors
#[derive(Error, Debug)]
pub enum SerializeError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),
}

pub type SerializeResult<T> = Result<T, SerializeError>;

/// Parse RDF data from a string
pub fn parse(input: &str, format: RdfFormat) -> ParseResult<Vec<Triple>> {
    match format {
        RdfFormat::Turtle => turtle::parse_turtle(input),
        RdfFormat::NTriples => turtle::parse_ntriples(input),
        RdfFormat::RdfXml => Err(ParseError::UnsupportedFormat(format)),
    }
}

/// Serialize triples to a document in the given format
pub fn serialize(triples: &[Triple], format: RdfFormat) -> SerializeResult<String> {
    match format {
        RdfFormat::Turtle => turtle::serialize_turtle(triples),
        RdfFormat::NTriples => turtle::serialize_ntriples(triples),
        RdfFormat::RdfXml => rdfxml::serialize_rdfxml(triples),
    }
}
