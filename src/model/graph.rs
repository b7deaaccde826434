//! Graph-side records
//!
//! What the projector builds from the store. Every record carries the
//! identifier it was projected from; every other field is `None` (or an
//! empty list) when the store holds no such statement.
//!
//! Literal fields keep the stored term, datatype and language tag
//! included, so a superseded value can be retracted exactly.

use super::{PositionType, TelephoneKind};
use crate::rdf::{Literal, NamedNode};
use chrono::NaiveDateTime;

/// A person
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub uri: NamedNode,
    /// Most specific class IRI
    pub person_type: Option<String>,
    pub display_name: Option<Literal>,
    pub ufid: Option<Literal>,
    pub homedept_uri: Option<String>,
    pub privacy_flag: Option<Literal>,
    pub gatorlink: Option<Literal>,
    pub eracommonsid: Option<Literal>,
    pub date_harvested: Option<Literal>,
    pub harvested_by: Option<Literal>,
    pub vcard_uri: Option<String>,
    /// Dereferenced contact record, when requested and present
    pub vcard: Option<Vcard>,
}

impl Person {
    pub fn new(uri: NamedNode) -> Self {
        Self {
            uri,
            person_type: None,
            display_name: None,
            ufid: None,
            homedept_uri: None,
            privacy_flag: None,
            gatorlink: None,
            eracommonsid: None,
            date_harvested: None,
            harvested_by: None,
            vcard_uri: None,
            vcard: None,
        }
    }
}

/// Contact record of a person
#[derive(Debug, Clone, PartialEq)]
pub struct Vcard {
    pub uri: NamedNode,
    pub person_uri: Option<String>,
    pub name: Option<Name>,
    pub title: Option<Title>,
    /// In fetch order
    pub telephones: Vec<Telephone>,
    /// In fetch order
    pub email_addresses: Vec<EmailAddress>,
}

impl Vcard {
    pub fn new(uri: NamedNode) -> Self {
        Self {
            uri,
            person_uri: None,
            name: None,
            title: None,
            telephones: Vec::new(),
            email_addresses: Vec::new(),
        }
    }

    /// First telephone entity of the given kind
    pub fn first_telephone(&self, kind: TelephoneKind) -> Option<&Telephone> {
        self.telephones.iter().find(|t| t.kind == Some(kind))
    }
}

/// Name parts of a contact record
#[derive(Debug, Clone, PartialEq)]
pub struct Name {
    pub uri: NamedNode,
    pub given_name: Option<Literal>,
    pub family_name: Option<Literal>,
    pub additional_name: Option<Literal>,
    pub honorific_prefix: Option<Literal>,
    pub honorific_suffix: Option<Literal>,
}

impl Name {
    pub fn new(uri: NamedNode) -> Self {
        Self {
            uri,
            given_name: None,
            family_name: None,
            additional_name: None,
            honorific_prefix: None,
            honorific_suffix: None,
        }
    }
}

/// Preferred title entity
#[derive(Debug, Clone, PartialEq)]
pub struct Title {
    pub uri: NamedNode,
    pub title: Option<Literal>,
}

/// Telephone or fax entity
#[derive(Debug, Clone, PartialEq)]
pub struct Telephone {
    pub uri: NamedNode,
    pub number: Option<Literal>,
    /// `None` when the entity carries neither vcard class
    pub kind: Option<TelephoneKind>,
}

/// Email entity
#[derive(Debug, Clone, PartialEq)]
pub struct EmailAddress {
    pub uri: NamedNode,
    pub email: Option<Literal>,
}

/// Start/end pair. Never mutated: a changed interval is a new entity.
#[derive(Debug, Clone, PartialEq)]
pub struct DatetimeInterval {
    pub uri: NamedNode,
    pub start_uri: Option<String>,
    pub start: Option<NaiveDateTime>,
    pub end_uri: Option<String>,
    pub end: Option<NaiveDateTime>,
}

impl DatetimeInterval {
    pub fn new(uri: NamedNode) -> Self {
        Self {
            uri,
            start_uri: None,
            start: None,
            end_uri: None,
            end: None,
        }
    }
}

/// A person's position in an organization
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub uri: NamedNode,
    pub label: Option<Literal>,
    pub hr_title: Option<Literal>,
    pub rank: Option<Literal>,
    pub position_type: Option<PositionType>,
    pub org_uri: Option<String>,
    pub person_uri: Option<String>,
    pub interval: Option<DatetimeInterval>,
}

impl Position {
    pub fn new(uri: NamedNode) -> Self {
        Self {
            uri,
            label: None,
            hr_title: None,
            rank: None,
            position_type: None,
            org_uri: None,
            person_uri: None,
            interval: None,
        }
    }

    pub fn dti_uri(&self) -> Option<&str> {
        self.interval.as_ref().map(|i| i.uri.as_str())
    }

    pub fn start_date(&self) -> Option<NaiveDateTime> {
        self.interval.as_ref().and_then(|i| i.start)
    }

    pub fn end_date(&self) -> Option<NaiveDateTime> {
        self.interval.as_ref().and_then(|i| i.end)
    }
}

/// Educational training, read only
#[derive(Debug, Clone, PartialEq)]
pub struct Degree {
    pub uri: NamedNode,
    pub major_field: Option<String>,
    pub earned_uri: Option<String>,
    /// Abbreviation of the earned degree
    pub degree_name: Option<String>,
    pub institution_uri: Option<String>,
    /// Label of the training institution
    pub institution_name: Option<String>,
    pub interval: Option<DatetimeInterval>,
}

impl Degree {
    pub fn new(uri: NamedNode) -> Self {
        Self {
            uri,
            major_field: None,
            earned_uri: None,
            degree_name: None,
            institution_uri: None,
            institution_name: None,
            interval: None,
        }
    }
}
