//! RDF/XML output via rio_xml

use super::turtle::with_rio_triple;
use super::{SerializeError, SerializeResult};
use crate::rdf::Triple;
use rio_api::formatter::TriplesFormatter;
use rio_xml::RdfXmlFormatter;

/// Serialize triples as an RDF/XML document
pub(super) fn serialize_rdfxml(triples: &[Triple]) -> SerializeResult<String> {
    let mut formatter = RdfXmlFormatter::new(Vec::new())?;
    for triple in triples {
        with_rio_triple(triple, |t| formatter.format(t))?;
    }
    let output = formatter.finish()?;
    String::from_utf8(output).map_err(|e| SerializeError::Serialize(e.to_string()))
}
