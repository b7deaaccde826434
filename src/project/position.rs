//! Position projection and the collection lookups

use super::EntityProjector;
use crate::backend::{PredicateCatalog, QueryRunner};
use crate::model::{Position, PositionType};
use crate::rdf::{vocab, NamedNode, RdfObject};
use std::collections::HashMap;
use tracing::debug;

impl<'a> EntityProjector<'a> {
    /// Project a position.
    ///
    /// `vivo:relates` points at both the person and the organization. With
    /// `person` given, that object is the person and any other the
    /// organization. Without it, an object typed `foaf:Organization` is the
    /// organization and anything else the person.
    pub fn get_position(&self, uri: &NamedNode, person: Option<&NamedNode>) -> Position {
        let mut position = Position::new(uri.clone());
        let organization = self.catalog.resolve(vocab::FOAF_ORGANIZATION);

        for (tag, object) in self.statements(uri) {
            let literal = object.as_literal().cloned();
            match tag.as_str() {
                vocab::VIVO_RELATES => {
                    let Some(related) = object.as_named_node() else {
                        continue;
                    };
                    let is_person = match person {
                        Some(person) => related == person,
                        None => !self
                            .get_types(related)
                            .iter()
                            .any(|t| t == organization.as_str()),
                    };
                    if is_person {
                        position.person_uri = Some(related.as_str().to_string());
                    } else {
                        position.org_uri = Some(related.as_str().to_string());
                    }
                }
                vocab::RDFS_LABEL if literal.is_some() => position.label = literal,
                vocab::VIVO_RANK if literal.is_some() => position.rank = literal,
                vocab::UFV_HR_JOB_TITLE if literal.is_some() => position.hr_title = literal,
                vocab::RDF_TYPE => {
                    if let Some(position_type) = self
                        .catalog
                        .compact(object.value())
                        .and_then(|t| PositionType::from_tag(&t))
                    {
                        position.position_type = Some(position_type);
                    }
                }
                vocab::VIVO_DATE_TIME_INTERVAL => {
                    if let RdfObject::NamedNode(dti) = &object {
                        position.interval = Some(self.get_datetime_interval(dti));
                    }
                }
                _ => {}
            }
        }
        position
    }
}

/// Identifiers of every position related to `person`
pub fn get_position_uris(
    runner: &dyn QueryRunner,
    catalog: &dyn PredicateCatalog,
    person: &NamedNode,
) -> Vec<NamedNode> {
    let query = format!(
"{}SELECT DISTINCT ?position_uri WHERE {{
    {} vivo:relatedBy ?position_uri .
    ?position_uri rdf:type vivo:Position .
}}",
        catalog.prologue(),
        person
    );
    let uris: Vec<NamedNode> = runner
        .select(&query)
        .iter()
        .filter_map(|solution| solution.get("position_uri"))
        .filter_map(|term| term.as_named_node().cloned())
        .collect();
    debug!("{} has {} positions", person, uris.len());
    uris
}

/// Map of ufid → person for everyone in the store with a ufid
pub fn make_ufid_dictionary(
    runner: &dyn QueryRunner,
    catalog: &dyn PredicateCatalog,
) -> HashMap<String, NamedNode> {
    let query = format!(
        "{}SELECT ?x ?ufid WHERE {{\n    ?x ufv:ufid ?ufid .\n}}",
        catalog.prologue()
    );
    let dictionary: HashMap<String, NamedNode> = runner
        .select(&query)
        .iter()
        .filter_map(|solution| {
            let uri = solution.get("x")?.as_named_node()?.clone();
            let ufid = solution.get("ufid")?.value().to_string();
            Some((ufid, uri))
        })
        .collect();
    debug!("ufid dictionary has {} entries", dictionary.len());
    dictionary
}

/// The person with `ufid`, if the dictionary knows one
pub fn find_person<'d>(
    ufid: &str,
    dictionary: &'d HashMap<String, NamedNode>,
) -> Option<&'d NamedNode> {
    dictionary.get(ufid)
}
