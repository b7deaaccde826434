//! Contact record reconciliation

use super::{Delta, DeltaGenerator, FieldAction, FieldSpec};
use crate::materialize::EntryKind;
use crate::model::{Name, SourceName, SourceVcard, TelephoneKind, Vcard};
use crate::rdf::{vocab, Literal, NamedNode};

const NAME_FIELDS: [FieldSpec<Name, SourceName>; 5] = [
    FieldSpec {
        name: "given_name",
        predicate: vocab::VCARD_GIVEN_NAME,
        graph: FieldAction::Literal(|g| g.given_name.as_ref()),
        source: |s| s.given_name.clone(),
    },
    FieldSpec {
        name: "family_name",
        predicate: vocab::VCARD_FAMILY_NAME,
        graph: FieldAction::Literal(|g| g.family_name.as_ref()),
        source: |s| s.family_name.clone(),
    },
    FieldSpec {
        name: "additional_name",
        predicate: vocab::VCARD_ADDITIONAL_NAME,
        graph: FieldAction::Literal(|g| g.additional_name.as_ref()),
        source: |s| s.additional_name.clone(),
    },
    FieldSpec {
        name: "honorific_prefix",
        predicate: vocab::VCARD_HONORIFIC_PREFIX,
        graph: FieldAction::Literal(|g| g.honorific_prefix.as_ref()),
        source: |s| s.honorific_prefix.clone(),
    },
    FieldSpec {
        name: "honorific_suffix",
        predicate: vocab::VCARD_HONORIFIC_SUFFIX,
        graph: FieldAction::Literal(|g| g.honorific_suffix.as_ref()),
        source: |s| s.honorific_suffix.clone(),
    },
];

impl<'a> DeltaGenerator<'a> {
    /// Reconcile the name entity of `vcard`, creating it when missing
    pub fn update_name(
        &self,
        vcard: &NamedNode,
        graph: Option<&Name>,
        source: &SourceName,
    ) -> Delta {
        let mut delta = Delta::new();
        let created;
        let graph = match graph {
            Some(name) => name,
            None => {
                let uri = delta.absorb(self.materializer.add_name(vcard, &SourceName::default()));
                created = Name::new(uri);
                &created
            }
        };
        delta.extend(self.update_entity(&graph.uri, graph, source, &NAME_FIELDS));
        delta
    }

    /// Reconcile a single-valued entry. `existing` is the matched entity and
    /// its current value; without one a new entry is created first.
    fn update_entry(
        &self,
        vcard: &NamedNode,
        kind: EntryKind,
        existing: Option<(&NamedNode, Option<&Literal>)>,
        value: &str,
    ) -> Delta {
        let mut delta = Delta::new();
        let (uri, old) = match existing {
            Some((uri, old)) => (uri.clone(), old),
            None => (delta.absorb(self.materializer.add_entry(vcard, kind, None)), None),
        };
        delta.extend(self.update_literal(&uri, kind.value_tag(), old, Some(value)));
        delta
    }

    /// Reconcile a contact record: name, then title, telephone, fax and
    /// email.
    ///
    /// Telephones are matched by kind and only the first of a kind is
    /// updated. The primary email updates the first existing email.
    pub fn update_vcard(&self, graph: &Vcard, source: &SourceVcard) -> Delta {
        let mut delta = Delta::new();

        if let Some(name) = &source.name {
            delta.extend(self.update_name(&graph.uri, graph.name.as_ref(), name));
        }

        if let Some(title) = &source.title {
            let existing = graph.title.as_ref().map(|t| (&t.uri, t.title.as_ref()));
            delta.extend(self.update_entry(&graph.uri, EntryKind::Title, existing, title));
        }

        let telephones = [
            (EntryKind::Telephone, TelephoneKind::Telephone, &source.phone),
            (EntryKind::Fax, TelephoneKind::Fax, &source.fax),
        ];
        for (entry, kind, number) in telephones {
            let Some(number) = number else { continue };
            let existing = graph
                .first_telephone(kind)
                .map(|t| (&t.uri, t.number.as_ref()));
            delta.extend(self.update_entry(&graph.uri, entry, existing, number));
        }

        if let Some(email) = &source.primary_email {
            let existing = graph
                .email_addresses
                .first()
                .map(|e| (&e.uri, e.email.as_ref()));
            delta.extend(self.update_entry(&graph.uri, EntryKind::Email, existing, email));
        }

        delta
    }
}
