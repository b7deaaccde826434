//! Typed records on both sides of the reconciliation
//!
//! - [`graph`]: hierarchical records projected from the triple store
//! - [`source`]: flat records from the HR feed

pub mod graph;
pub mod source;

pub use graph::{
    DatetimeInterval, Degree, EmailAddress, Name, Person, Position, Telephone, Title, Vcard,
};
pub use source::{
    HrRecord, SourceError, SourceName, SourcePerson, SourcePosition, SourceResult, SourceVcard,
};

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Lexical form of `xsd:dateTime` values written by this crate
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Format a date the way it is stored in `vivo:dateTime`
pub fn format_date(date: &NaiveDateTime) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Drop sub-second precision, which stored values never carry
pub fn whole_seconds(date: NaiveDateTime) -> NaiveDateTime {
    date.with_nanosecond(0).unwrap_or(date)
}

/// Parse a stored `vivo:dateTime` value, ignoring any fractional seconds
/// or timezone suffix. Unparseable values yield `None`.
pub fn parse_date(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.get(..19).unwrap_or(value);
    NaiveDateTime::parse_from_str(trimmed, DATE_FORMAT).ok()
}

/// Position categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PositionType {
    Faculty,
    NonFacultyAcademic,
    ClinicalFaculty,
    Postdoc,
    Librarian,
    NonAcademic,
    StudentAssistant,
    GraduateAssistant,
    Housestaff,
    #[serde(rename = "temp-faculty")]
    TemporaryFaculty,
    FacultyAdministrative,
    CourtesyFaculty,
}

impl PositionType {
    pub const ALL: [PositionType; 12] = [
        PositionType::Faculty,
        PositionType::NonFacultyAcademic,
        PositionType::ClinicalFaculty,
        PositionType::Postdoc,
        PositionType::Librarian,
        PositionType::NonAcademic,
        PositionType::StudentAssistant,
        PositionType::GraduateAssistant,
        PositionType::Housestaff,
        PositionType::TemporaryFaculty,
        PositionType::FacultyAdministrative,
        PositionType::CourtesyFaculty,
    ];

    /// Class tag asserted as the position's specific `rdf:type`
    pub fn tag(&self) -> &'static str {
        match self {
            PositionType::Faculty => "vivo:FacultyPosition",
            PositionType::NonFacultyAcademic => "vivo:Non-FacultyAcademicPosition",
            PositionType::ClinicalFaculty => "ufl:ClinicalFacultyPosition",
            PositionType::Postdoc => "ufl:PostDocPosition",
            PositionType::Librarian => "vivo:LibrarianPosition",
            PositionType::NonAcademic => "vivo:Non-AcademicPosition",
            PositionType::StudentAssistant => "ufl:StudentAssistant",
            PositionType::GraduateAssistant => "ufl:GraduateAssistant",
            PositionType::Housestaff => "ufl:Housestaff",
            PositionType::TemporaryFaculty => "ufl:TemporaryFaculty",
            PositionType::FacultyAdministrative => "vivo:FacultyAdministrativePosition",
            PositionType::CourtesyFaculty => "ufl:CourtesyFacultyPosition",
        }
    }

    /// Category for a class tag, if it is one of ours
    pub fn from_tag(tag: &str) -> Option<PositionType> {
        Self::ALL.into_iter().find(|t| t.tag() == tag)
    }
}

/// Telephone entity kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TelephoneKind {
    /// Voice line (`vcard:Telephone`)
    Telephone,
    /// Fax line (`vcard:Fax`)
    Fax,
}

impl TelephoneKind {
    /// Class tag of the telephone entity
    pub fn tag(&self) -> &'static str {
        match self {
            TelephoneKind::Telephone => crate::rdf::vocab::VCARD_TELEPHONE_CLASS,
            TelephoneKind::Fax => crate::rdf::vocab::VCARD_FAX_CLASS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_position_type_tags_roundtrip() {
        for position_type in PositionType::ALL {
            assert_eq!(PositionType::from_tag(position_type.tag()), Some(position_type));
        }
        assert_eq!(PositionType::from_tag("vivo:Position"), None);
    }

    #[test]
    fn test_position_type_serde_names() {
        let t: PositionType = serde_json::from_str("\"clinical-faculty\"").unwrap();
        assert_eq!(t, PositionType::ClinicalFaculty);
        assert_eq!(
            serde_json::to_string(&PositionType::NonFacultyAcademic).unwrap(),
            "\"non-faculty-academic\""
        );
        let t: PositionType = serde_json::from_str("\"temp-faculty\"").unwrap();
        assert_eq!(t, PositionType::TemporaryFaculty);
        assert_eq!(
            serde_json::to_string(&PositionType::TemporaryFaculty).unwrap(),
            "\"temp-faculty\""
        );
    }

    #[test]
    fn test_dates() {
        let date = NaiveDate::from_ymd_opt(2014, 3, 23)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(format_date(&date), "2014-03-23T00:00:00");
        assert_eq!(parse_date("2014-03-23T00:00:00"), Some(date));
        assert_eq!(parse_date("2014-03-23T00:00:00.000Z"), Some(date));
        assert_eq!(parse_date("March 2014"), None);

        let precise = NaiveDate::from_ymd_opt(2014, 3, 23)
            .and_then(|d| d.and_hms_micro_opt(0, 0, 0, 500))
            .unwrap();
        assert_eq!(whole_seconds(precise), date);
        assert_eq!(format_date(&whole_seconds(precise)), "2014-03-23T00:00:00");
    }
}
