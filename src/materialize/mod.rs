//! Entity materialization
//!
//! Creates sub-entities the graph doesn't have yet: mint an identifier,
//! type it, link it to its parent, then one statement per populated
//! attribute. Materialization only ever adds.

use crate::backend::{PredicateCatalog, UriMinter};
use crate::model::{format_date, SourceName, SourcePerson, SourcePosition, SourceVcard};
use crate::rdf::{vocab, Literal, NamedNode, Triple};
use chrono::NaiveDateTime;
use tracing::{debug, warn};

/// A freshly minted entity and the statements that create it
#[derive(Debug, Clone, PartialEq)]
pub struct Materialized {
    pub uri: NamedNode,
    pub add: Vec<Triple>,
}

/// Single-valued vcard entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Title,
    Telephone,
    Fax,
    Email,
}

impl EntryKind {
    /// Class of the entry entity
    pub fn class_tag(&self) -> &'static str {
        match self {
            EntryKind::Title => vocab::VCARD_TITLE_CLASS,
            EntryKind::Telephone => vocab::VCARD_TELEPHONE_CLASS,
            EntryKind::Fax => vocab::VCARD_FAX_CLASS,
            EntryKind::Email => vocab::VCARD_EMAIL_CLASS,
        }
    }

    /// Vcard → entry link
    pub fn link_tag(&self) -> &'static str {
        match self {
            EntryKind::Title => vocab::VCARD_HAS_TITLE,
            EntryKind::Telephone | EntryKind::Fax => vocab::VCARD_HAS_TELEPHONE,
            EntryKind::Email => vocab::VCARD_HAS_EMAIL,
        }
    }

    /// Entry → value
    pub fn value_tag(&self) -> &'static str {
        match self {
            EntryKind::Title => vocab::VCARD_TITLE,
            EntryKind::Telephone | EntryKind::Fax => vocab::VCARD_TELEPHONE,
            EntryKind::Email => vocab::VCARD_EMAIL,
        }
    }
}

/// Name attribute → predicate
const NAME_FIELDS: [(&str, fn(&SourceName) -> Option<&String>); 5] = [
    (vocab::VCARD_GIVEN_NAME, |n| n.given_name.as_ref()),
    (vocab::VCARD_FAMILY_NAME, |n| n.family_name.as_ref()),
    (vocab::VCARD_ADDITIONAL_NAME, |n| n.additional_name.as_ref()),
    (vocab::VCARD_HONORIFIC_PREFIX, |n| n.honorific_prefix.as_ref()),
    (vocab::VCARD_HONORIFIC_SUFFIX, |n| n.honorific_suffix.as_ref()),
];

/// Person data attribute → predicate
const PERSON_DATA_FIELDS: [(&str, fn(&SourcePerson) -> Option<&String>); 6] = [
    (vocab::UFV_UFID, |p| p.ufid.as_ref()),
    (vocab::UFV_PRIVACY_FLAG, |p| p.privacy_flag.as_ref()),
    (vocab::RDFS_LABEL, |p| p.display_name.as_ref()),
    (vocab::UFV_GATORLINK, |p| p.gatorlink.as_ref()),
    (vocab::UFV_DATE_HARVESTED, |p| p.date_harvested.as_ref()),
    (vocab::UFV_HARVESTED_BY, |p| p.harvested_by.as_ref()),
];

/// Mints and describes new entities
pub struct EntityMaterializer<'a> {
    minter: &'a dyn UriMinter,
    catalog: &'a dyn PredicateCatalog,
}

impl<'a> EntityMaterializer<'a> {
    pub fn new(minter: &'a dyn UriMinter, catalog: &'a dyn PredicateCatalog) -> Self {
        Self { minter, catalog }
    }

    /// `subject rdf:type <class>`
    pub fn type_triple(&self, subject: &NamedNode, class_tag: &str) -> Triple {
        let class: NamedNode = self.catalog.resolve(class_tag).into();
        self.resource_triple(subject, vocab::RDF_TYPE, &class)
    }

    pub fn resource_triple(&self, subject: &NamedNode, tag: &str, object: &NamedNode) -> Triple {
        Triple::new(subject.clone(), self.catalog.resolve(tag), object.clone().into())
    }

    pub fn literal_triple(&self, subject: &NamedNode, tag: &str, value: &str) -> Triple {
        Triple::new(
            subject.clone(),
            self.catalog.resolve(tag),
            Literal::new_simple_literal(value).into(),
        )
    }

    /// Link to an IRI held as text; skipped with a warning if it isn't one
    fn reference_triple(&self, subject: &NamedNode, tag: &str, iri: &str) -> Option<Triple> {
        match NamedNode::new(iri) {
            Ok(object) => Some(self.resource_triple(subject, tag, &object)),
            Err(e) => {
                warn!("Skipping {} on {}: {}", tag, subject, e);
                None
            }
        }
    }

    /// Date interval with one `vivo:DateTimeValue` per present bound
    pub fn add_dti(
        &self,
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    ) -> Materialized {
        let uri = self.minter.mint();
        let mut add = vec![self.type_triple(&uri, vocab::VIVO_DATE_TIME_INTERVAL_CLASS)];

        for (tag, date) in [(vocab::VIVO_START, start), (vocab::VIVO_END, end)] {
            let Some(date) = date else { continue };
            let value_uri = self.minter.mint();
            add.push(self.type_triple(&value_uri, vocab::VIVO_DATE_TIME_VALUE));
            add.push(Triple::new(
                value_uri.clone(),
                self.catalog.resolve(vocab::VIVO_DATE_TIME),
                Literal::new_date_time(format_date(&date)).into(),
            ));
            let precision: NamedNode =
                self.catalog.resolve(vocab::VIVO_YEAR_MONTH_DAY_PRECISION).into();
            add.push(self.resource_triple(&value_uri, vocab::VIVO_DATE_TIME_PRECISION, &precision));
            add.push(self.resource_triple(&uri, tag, &value_uri));
        }

        debug!("Materialized interval {} ({} triples)", uri, add.len());
        Materialized { uri, add }
    }

    /// Position relating `person` to the source position's organization
    pub fn add_position(&self, person: &NamedNode, position: &SourcePosition) -> Materialized {
        let uri = self.minter.mint();
        let mut add = vec![
            self.type_triple(&uri, vocab::VIVO_POSITION),
            self.type_triple(&uri, position.position_type.tag()),
        ];

        let data = [
            (vocab::RDFS_LABEL, &position.label),
            (vocab::VIVO_RANK, &position.rank),
            (vocab::UFV_HR_JOB_TITLE, &position.hr_title),
        ];
        for (tag, value) in data {
            if let Some(value) = value {
                add.push(self.literal_triple(&uri, tag, value));
            }
        }

        add.push(self.resource_triple(&uri, vocab::VIVO_RELATES, person));
        add.push(self.resource_triple(person, vocab::VIVO_RELATED_BY, &uri));
        if let Some(org) = self.reference_triple(&uri, vocab::VIVO_RELATES, &position.org_uri) {
            let inverse = org
                .object
                .as_named_node()
                .map(|o| self.resource_triple(o, vocab::VIVO_RELATED_BY, &uri));
            add.push(org);
            add.extend(inverse);
        }

        if position.start_date.is_some() || position.end_date.is_some() {
            let dti = self.add_dti(position.start_date, position.end_date);
            add.push(self.resource_triple(&uri, vocab::VIVO_DATE_TIME_INTERVAL, &dti.uri));
            add.extend(dti.add);
        }

        debug!("Materialized position {} for {}", uri, person);
        Materialized { uri, add }
    }

    /// Name entity on `vcard`; an empty name still gets its type and link
    pub fn add_name(&self, vcard: &NamedNode, name: &SourceName) -> Materialized {
        let uri = self.minter.mint();
        let mut add = vec![
            self.type_triple(&uri, vocab::VCARD_NAME),
            self.resource_triple(vcard, vocab::VCARD_HAS_NAME, &uri),
        ];
        for (tag, field) in NAME_FIELDS {
            if let Some(value) = field(name) {
                add.push(self.literal_triple(&uri, tag, value));
            }
        }
        Materialized { uri, add }
    }

    /// Single entry entity (title, telephone, fax or email) on `vcard`
    pub fn add_entry(
        &self,
        vcard: &NamedNode,
        kind: EntryKind,
        value: Option<&str>,
    ) -> Materialized {
        let uri = self.minter.mint();
        let mut add = vec![
            self.type_triple(&uri, kind.class_tag()),
            self.resource_triple(vcard, kind.link_tag(), &uri),
        ];
        if let Some(value) = value {
            add.push(self.literal_triple(&uri, kind.value_tag(), value));
        }
        Materialized { uri, add }
    }

    /// Contact record for `person`: always a name, plus one entry per
    /// populated single entry
    pub fn add_vcard(&self, person: &NamedNode, vcard: &SourceVcard) -> Materialized {
        let uri = self.minter.mint();
        let mut add = vec![
            self.type_triple(&uri, vocab::VCARD_INDIVIDUAL),
            self.resource_triple(person, vocab::OBO_HAS_CONTACT_INFO, &uri),
            self.resource_triple(&uri, vocab::OBO_CONTACT_INFO_OF, person),
        ];

        let name = vcard.name.clone().unwrap_or_default();
        add.extend(self.add_name(&uri, &name).add);

        let entries = [
            (EntryKind::Title, &vcard.title),
            (EntryKind::Telephone, &vcard.phone),
            (EntryKind::Fax, &vcard.fax),
            (EntryKind::Email, &vcard.primary_email),
        ];
        for (kind, value) in entries {
            if let Some(value) = value {
                add.extend(self.add_entry(&uri, kind, Some(value)).add);
            }
        }

        debug!("Materialized vcard {} for {}", uri, person);
        Materialized { uri, add }
    }

    /// A new person with contact record and, when the source names one,
    /// a position
    pub fn add_person(&self, person: &SourcePerson) -> Materialized {
        let uri = self.minter.mint();
        let mut add = Vec::new();

        match person.person_type.as_deref() {
            Some(person_type) => {
                add.extend(self.reference_triple(&uri, vocab::RDF_TYPE, person_type))
            }
            None => add.push(self.type_triple(&uri, vocab::FOAF_PERSON)),
        }
        add.push(self.type_triple(&uri, vocab::UFV_UF_ENTITY));
        add.push(self.type_triple(&uri, vocab::UFV_UF_CURRENT_ENTITY));

        for (tag, field) in PERSON_DATA_FIELDS {
            if let Some(value) = field(person) {
                add.push(self.literal_triple(&uri, tag, value));
            }
        }
        if let Some(homedept) = &person.homedept_uri {
            add.extend(self.reference_triple(&uri, vocab::UFV_HOME_DEPT, homedept));
        }

        add.extend(self.add_vcard(&uri, &person.vcard()).add);

        if let Some(position) = person.position(&uri) {
            add.extend(self.add_position(&uri, &position).add);
        }

        debug!("Materialized person {} ({} triples)", uri, add.len());
        Materialized { uri, add }
    }
}
