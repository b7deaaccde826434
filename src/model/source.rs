//! Source-side records
//!
//! The HR feed delivers one flat, single-valued record per person. A field
//! that is `None` is authoritative absence: for name parts and direct
//! person properties it retracts whatever the graph holds.

use super::PositionType;
use crate::canon::{
    improve_jobcode_description, position_type_for_salary_plan, repair_email, repair_phone_number,
};
use crate::rdf::NamedNode;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Source record errors
#[derive(Error, Debug)]
pub enum SourceError {
    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A reference field does not hold an IRI
    #[error("Invalid IRI in {field}: {value}")]
    InvalidIri { field: &'static str, value: String },
}

pub type SourceResult<T> = Result<T, SourceError>;

/// Flat person record from an authoritative source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcePerson {
    /// Whether the record comes from the HR feed. Only HR records may
    /// change the person's type.
    pub hr_position: bool,

    pub ufid: Option<String>,
    /// Class IRI
    pub person_type: Option<String>,
    pub display_name: Option<String>,
    pub privacy_flag: Option<String>,
    pub gatorlink: Option<String>,
    pub homedept_uri: Option<String>,
    pub date_harvested: Option<String>,
    pub harvested_by: Option<String>,

    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub additional_name: Option<String>,
    pub honorific_prefix: Option<String>,
    pub honorific_suffix: Option<String>,

    /// Preferred title
    pub title: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub primary_email: Option<String>,

    pub position_label: Option<String>,
    pub position_type: Option<PositionType>,
    pub position_orguri: Option<String>,
    pub position_rank: Option<String>,
    pub hr_title: Option<String>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
}

impl SourcePerson {
    /// Empty record with the given classification
    pub fn new(hr_position: bool) -> Self {
        Self {
            hr_position,
            ufid: None,
            person_type: None,
            display_name: None,
            privacy_flag: None,
            gatorlink: None,
            homedept_uri: None,
            date_harvested: None,
            harvested_by: None,
            given_name: None,
            family_name: None,
            additional_name: None,
            honorific_prefix: None,
            honorific_suffix: None,
            title: None,
            phone: None,
            fax: None,
            primary_email: None,
            position_label: None,
            position_type: None,
            position_orguri: None,
            position_rank: None,
            hr_title: None,
            start_date: None,
            end_date: None,
        }
    }

    /// Parse and validate a JSON record
    pub fn from_json(text: &str) -> SourceResult<Self> {
        let person: SourcePerson = serde_json::from_str(text)?;
        person.validate()?;
        Ok(person)
    }

    /// Check that reference fields hold IRIs
    pub fn validate(&self) -> SourceResult<()> {
        let references = [
            ("person_type", &self.person_type),
            ("homedept_uri", &self.homedept_uri),
            ("position_orguri", &self.position_orguri),
        ];
        for (field, value) in references {
            if let Some(value) = value {
                if NamedNode::new(value).is_err() {
                    return Err(SourceError::InvalidIri {
                        field,
                        value: value.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Name parts as their own record
    pub fn name(&self) -> SourceName {
        SourceName {
            given_name: self.given_name.clone(),
            family_name: self.family_name.clone(),
            additional_name: self.additional_name.clone(),
            honorific_prefix: self.honorific_prefix.clone(),
            honorific_suffix: self.honorific_suffix.clone(),
        }
    }

    /// Contact fields as a vcard record
    pub fn vcard(&self) -> SourceVcard {
        SourceVcard {
            name: Some(self.name()),
            title: self.title.clone(),
            phone: self.phone.clone(),
            fax: self.fax.clone(),
            primary_email: self.primary_email.clone(),
        }
    }

    /// Position fields, when the record names a position type and an
    /// organization
    pub fn position(&self, person_uri: &NamedNode) -> Option<SourcePosition> {
        let position_type = self.position_type?;
        let org_uri = self.position_orguri.clone()?;
        Some(SourcePosition {
            label: self.position_label.clone(),
            position_type,
            org_uri,
            person_uri: person_uri.as_str().to_string(),
            rank: self.position_rank.clone(),
            hr_title: self.hr_title.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
        })
    }
}

/// Name parts from the source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceName {
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub additional_name: Option<String>,
    pub honorific_prefix: Option<String>,
    pub honorific_suffix: Option<String>,
}

/// Contact fields from the source.
///
/// `None` for a single entry (title, phone, fax, email) means the source
/// says nothing about it; the graph value is left alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceVcard {
    pub name: Option<SourceName>,
    pub title: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub primary_email: Option<String>,
}

/// Position fields from the source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcePosition {
    pub label: Option<String>,
    pub position_type: PositionType,
    pub org_uri: String,
    pub person_uri: String,
    pub rank: Option<String>,
    pub hr_title: Option<String>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
}

/// Raw row of the HR feed, before canonicalization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HrRecord {
    pub ufid: String,
    pub person_type: Option<String>,
    pub display_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub name_prefix: Option<String>,
    pub name_suffix: Option<String>,
    pub gatorlink: Option<String>,
    pub privacy_flag: Option<String>,
    pub homedept_uri: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub email: Option<String>,
    pub preferred_title: Option<String>,
    /// Abbreviated job code description
    pub jobcode_description: Option<String>,
    pub salary_plan: Option<String>,
    /// Organization of the position; the home department when absent
    pub position_orguri: Option<String>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub date_harvested: Option<String>,
    pub harvested_by: Option<String>,
}

impl HrRecord {
    /// Canonicalize into a source person.
    ///
    /// Phones are repaired and emails cleaned; values that can't be
    /// repaired are dropped. The job code description becomes the position
    /// label, and the preferred title when none is given. The salary plan
    /// decides the position type.
    pub fn into_source_person(self) -> SourcePerson {
        let phone = self.phone.as_deref().map(repair_phone_number);
        let fax = self.fax.as_deref().map(repair_phone_number);
        let email = self.email.as_deref().map(repair_email);
        let position_label = self.jobcode_description.as_deref().map(improve_jobcode_description);
        let position_type = self
            .salary_plan
            .as_deref()
            .and_then(position_type_for_salary_plan);

        SourcePerson {
            hr_position: true,
            ufid: Some(self.ufid),
            person_type: self.person_type,
            display_name: self.display_name,
            privacy_flag: self.privacy_flag,
            gatorlink: self.gatorlink,
            position_orguri: self.position_orguri.or_else(|| self.homedept_uri.clone()),
            homedept_uri: self.homedept_uri,
            date_harvested: self.date_harvested,
            harvested_by: self.harvested_by,
            given_name: self.first_name,
            family_name: self.last_name,
            additional_name: self.middle_name,
            honorific_prefix: self.name_prefix,
            honorific_suffix: self.name_suffix,
            title: self.preferred_title.or_else(|| position_label.clone()),
            phone: phone.filter(|p| !p.is_empty()),
            fax: fax.filter(|f| !f.is_empty()),
            primary_email: email.filter(|e| !e.is_empty()),
            position_label,
            position_type,
            position_rank: None,
            hr_title: self.jobcode_description,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}
