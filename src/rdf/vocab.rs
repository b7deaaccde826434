//! Predicate and class tags used by the people synchronization.
//!
//! Tags are resolved through a [`PredicateCatalog`](crate::backend::PredicateCatalog)
//! on write and matched against compacted IRIs on read.

// RDF / RDFS / OWL / FOAF
pub const RDF_TYPE: &str = "rdf:type";
pub const RDFS_LABEL: &str = "rdfs:label";
pub const OWL_THING: &str = "owl:Thing";
pub const FOAF_PERSON: &str = "foaf:Person";
pub const FOAF_AGENT: &str = "foaf:Agent";
pub const FOAF_ORGANIZATION: &str = "foaf:Organization";
pub const VITRO_MOST_SPECIFIC_TYPE: &str = "vitro:mostSpecificType";

// Person
pub const UFV_UFID: &str = "ufv:ufid";
pub const UFV_HOME_DEPT: &str = "ufv:homeDept";
pub const UFV_PRIVACY_FLAG: &str = "ufv:privacyFlag";
pub const UFV_GATORLINK: &str = "ufv:gatorlink";
pub const UFV_DATE_HARVESTED: &str = "ufv:dateHarvested";
pub const UFV_HARVESTED_BY: &str = "ufv:harvestedBy";
pub const UFV_UF_ENTITY: &str = "ufv:UFEntity";
pub const UFV_UF_CURRENT_ENTITY: &str = "ufv:UFCurrentEntity";
pub const VIVO_ERA_COMMONS_ID: &str = "vivo:eRACommonsId";

// Contact information
pub const OBO_HAS_CONTACT_INFO: &str = "obo:ARG_2000028";
pub const OBO_CONTACT_INFO_OF: &str = "obo:ARG_2000029";
pub const VCARD_INDIVIDUAL: &str = "vcard:Individual";
pub const VCARD_NAME: &str = "vcard:Name";
pub const VCARD_HAS_NAME: &str = "vcard:hasName";
pub const VCARD_GIVEN_NAME: &str = "vcard:givenName";
pub const VCARD_FAMILY_NAME: &str = "vcard:familyName";
pub const VCARD_ADDITIONAL_NAME: &str = "vcard:additionalName";
pub const VCARD_HONORIFIC_PREFIX: &str = "vcard:honorificPrefix";
pub const VCARD_HONORIFIC_SUFFIX: &str = "vcard:honorificSuffix";
pub const VCARD_TITLE_CLASS: &str = "vcard:Title";
pub const VCARD_HAS_TITLE: &str = "vcard:hasTitle";
pub const VCARD_TITLE: &str = "vcard:title";
pub const VCARD_TELEPHONE_CLASS: &str = "vcard:Telephone";
pub const VCARD_FAX_CLASS: &str = "vcard:Fax";
pub const VCARD_HAS_TELEPHONE: &str = "vcard:hasTelephone";
pub const VCARD_TELEPHONE: &str = "vcard:telephone";
pub const VCARD_EMAIL_CLASS: &str = "vcard:Email";
pub const VCARD_HAS_EMAIL: &str = "vcard:hasEmail";
pub const VCARD_EMAIL: &str = "vcard:email";

// Positions and dates
pub const VIVO_POSITION: &str = "vivo:Position";
pub const VIVO_RELATES: &str = "vivo:relates";
pub const VIVO_RELATED_BY: &str = "vivo:relatedBy";
pub const VIVO_RANK: &str = "vivo:rank";
pub const UFV_HR_JOB_TITLE: &str = "ufv:hrJobTitle";
pub const VIVO_DATE_TIME_INTERVAL: &str = "vivo:dateTimeInterval";
pub const VIVO_DATE_TIME_INTERVAL_CLASS: &str = "vivo:DateTimeInterval";
pub const VIVO_START: &str = "vivo:start";
pub const VIVO_END: &str = "vivo:end";
pub const VIVO_DATE_TIME_VALUE: &str = "vivo:DateTimeValue";
pub const VIVO_DATE_TIME: &str = "vivo:dateTime";
pub const VIVO_DATE_TIME_PRECISION: &str = "vivo:dateTimePrecision";
pub const VIVO_YEAR_MONTH_DAY_PRECISION: &str = "vivo:yearMonthDayPrecision";

// Degrees
pub const VIVO_MAJOR_FIELD: &str = "vivo:majorField";
pub const VIVO_DEGREE_EARNED: &str = "vivo:degreeEarned";
pub const VIVO_TRAINING_AT_ORGANIZATION: &str = "vivo:trainingAtOrganization";
pub const VIVO_ABBREVIATION: &str = "vivo:abbreviation";

/// `rdf:type` values that say nothing about what kind of person this is
pub const STRUCTURAL_PERSON_TYPES: &[&str] = &[
    FOAF_PERSON,
    FOAF_AGENT,
    OWL_THING,
    UFV_UF_ENTITY,
    UFV_UF_CURRENT_ENTITY,
];
