//! Person reconciliation

use super::{Delta, DeltaGenerator, FieldAction, FieldSpec};
use crate::model::{Person, Position, SourcePerson};
use crate::rdf::vocab;
use tracing::debug;

const PERSON_FIELDS: [FieldSpec<Person, SourcePerson>; 7] = [
    FieldSpec {
        name: "privacy_flag",
        predicate: vocab::UFV_PRIVACY_FLAG,
        graph: FieldAction::Literal(|g| g.privacy_flag.as_ref()),
        source: |s| s.privacy_flag.clone(),
    },
    FieldSpec {
        name: "homedept_uri",
        predicate: vocab::UFV_HOME_DEPT,
        graph: FieldAction::Resource(|g| g.homedept_uri.as_deref()),
        source: |s| s.homedept_uri.clone(),
    },
    FieldSpec {
        name: "display_name",
        predicate: vocab::RDFS_LABEL,
        graph: FieldAction::Literal(|g| g.display_name.as_ref()),
        source: |s| s.display_name.clone(),
    },
    FieldSpec {
        name: "ufid",
        predicate: vocab::UFV_UFID,
        graph: FieldAction::Literal(|g| g.ufid.as_ref()),
        source: |s| s.ufid.clone(),
    },
    FieldSpec {
        name: "gatorlink",
        predicate: vocab::UFV_GATORLINK,
        graph: FieldAction::Literal(|g| g.gatorlink.as_ref()),
        source: |s| s.gatorlink.clone(),
    },
    FieldSpec {
        name: "date_harvested",
        predicate: vocab::UFV_DATE_HARVESTED,
        graph: FieldAction::Literal(|g| g.date_harvested.as_ref()),
        source: |s| s.date_harvested.clone(),
    },
    FieldSpec {
        name: "harvested_by",
        predicate: vocab::UFV_HARVESTED_BY,
        graph: FieldAction::Literal(|g| g.harvested_by.as_ref()),
        source: |s| s.harvested_by.clone(),
    },
];

/// Only HR records are authoritative for the person's class
const HR_PERSON_FIELDS: [FieldSpec<Person, SourcePerson>; 1] = [FieldSpec {
    name: "person_type",
    predicate: vocab::RDF_TYPE,
    graph: FieldAction::Resource(|g| g.person_type.as_deref()),
    source: |s| s.person_type.clone(),
}];

impl<'a> DeltaGenerator<'a> {
    /// Reconcile a projected person, its contact record and its positions
    /// with a source record.
    ///
    /// A person without a contact record gets a new one. A person whose
    /// contact record was not projected is left alone on that side. The
    /// source position updates the first graph position with the same type
    /// and organization, or becomes a new position.
    pub fn update_person(
        &self,
        graph: &Person,
        positions: &[Position],
        source: &SourcePerson,
    ) -> Delta {
        let mut delta = self.update_entity(&graph.uri, graph, source, &PERSON_FIELDS);
        if source.hr_position {
            delta.extend(self.update_entity(&graph.uri, graph, source, &HR_PERSON_FIELDS));
        }

        match (&graph.vcard, &graph.vcard_uri) {
            (Some(vcard), _) => delta.extend(self.update_vcard(vcard, &source.vcard())),
            (None, None) => {
                debug!("{} has no contact record", graph.uri);
                delta.absorb(self.materializer.add_vcard(&graph.uri, &source.vcard()));
            }
            (None, Some(uri)) => debug!("Contact record {} of {} not projected", uri, graph.uri),
        }

        if let Some(position) = source.position(&graph.uri) {
            let matched = positions.iter().find(|p| {
                p.position_type == Some(position.position_type)
                    && p.org_uri.as_deref() == Some(position.org_uri.as_str())
            });
            match matched {
                Some(existing) => delta.extend(self.update_position(existing, &position)),
                None => {
                    debug!(
                        "No {} position at {} for {}",
                        position.position_type.tag(),
                        position.org_uri,
                        graph.uri
                    );
                    delta.absorb(self.materializer.add_position(&graph.uri, &position));
                }
            }
        }

        delta
    }
}
