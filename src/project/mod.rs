//! Entity projection
//!
//! Folds the flat statements about one subject into a typed record. Only
//! predicates the records know about are read; anything else is ignored.
//! References to owned sub-entities (vcard, name, title, telephones,
//! emails, date intervals) are dereferenced one level at a time.
//!
//! A subject with no statements projects to a record holding only its
//! identifier. The delta generator reads that as "not there yet".

mod position;

pub use position::{find_person, get_position_uris, make_ufid_dictionary};

use crate::backend::{PredicateCatalog, TripleFetch};
use crate::model::{
    parse_date, DatetimeInterval, Degree, EmailAddress, Name, Person, Telephone, TelephoneKind,
    Title, Vcard,
};
use crate::rdf::{vocab, Literal, NamedNode, RdfObject};
use tracing::debug;

/// Builds graph-side records from a triple fetch
pub struct EntityProjector<'a> {
    fetch: &'a dyn TripleFetch,
    catalog: &'a dyn PredicateCatalog,
}

impl<'a> EntityProjector<'a> {
    pub fn new(fetch: &'a dyn TripleFetch, catalog: &'a dyn PredicateCatalog) -> Self {
        Self { fetch, catalog }
    }

    /// Statements about `uri` with predicates compacted to tags.
    /// Predicates outside every known namespace are dropped.
    fn statements(&self, uri: &NamedNode) -> Vec<(String, RdfObject)> {
        let statements: Vec<(String, RdfObject)> = self
            .fetch
            .fetch(uri)
            .into_iter()
            .filter_map(|(predicate, object)| {
                self.catalog
                    .compact(predicate.as_str())
                    .map(|tag| (tag, object))
            })
            .collect();
        debug!("Fetched {} statements for {}", statements.len(), uri);
        statements
    }

    /// Class IRIs of `uri`, in fetch order
    pub fn get_types(&self, uri: &NamedNode) -> Vec<String> {
        self.statements(uri)
            .into_iter()
            .filter(|(tag, _)| tag == vocab::RDF_TYPE)
            .map(|(_, object)| object.value().to_string())
            .collect()
    }

    /// First value of `tag` on `uri`
    pub fn get_value(&self, uri: &NamedNode, tag: &str) -> Option<String> {
        let predicate = self.catalog.resolve(tag);
        self.fetch
            .fetch(uri)
            .into_iter()
            .find(|(p, _)| p == &predicate)
            .map(|(_, object)| object.value().to_string())
    }

    pub fn get_label(&self, uri: &NamedNode) -> Option<String> {
        self.get_value(uri, vocab::RDFS_LABEL)
    }

    /// First literal of `tag` on `uri`, as stored
    pub fn get_literal(&self, uri: &NamedNode, tag: &str) -> Option<Literal> {
        let predicate = self.catalog.resolve(tag);
        self.fetch
            .fetch(uri)
            .into_iter()
            .filter(|(p, _)| p == &predicate)
            .find_map(|(_, object)| object.as_literal().cloned())
    }

    /// Project a person; with `with_contact` the vcard is dereferenced too
    pub fn get_person(&self, uri: &NamedNode, with_contact: bool) -> Person {
        let mut person = Person::new(uri.clone());
        let mut most_specific_type = None;
        let mut asserted_type = None;

        for (tag, object) in self.statements(uri) {
            let value = object.value().to_string();
            let literal = object.as_literal().cloned();
            match tag.as_str() {
                vocab::VITRO_MOST_SPECIFIC_TYPE => most_specific_type = Some(value),
                vocab::RDF_TYPE => {
                    let structural = self
                        .catalog
                        .compact(&value)
                        .is_some_and(|t| vocab::STRUCTURAL_PERSON_TYPES.contains(&t.as_str()));
                    if !structural && asserted_type.is_none() {
                        asserted_type = Some(value);
                    }
                }
                vocab::OBO_HAS_CONTACT_INFO => person.vcard_uri = Some(value),
                vocab::UFV_HOME_DEPT => person.homedept_uri = Some(value),
                vocab::RDFS_LABEL if literal.is_some() => person.display_name = literal,
                vocab::UFV_UFID if literal.is_some() => person.ufid = literal,
                vocab::UFV_PRIVACY_FLAG if literal.is_some() => person.privacy_flag = literal,
                vocab::UFV_GATORLINK if literal.is_some() => person.gatorlink = literal,
                vocab::VIVO_ERA_COMMONS_ID if literal.is_some() => person.eracommonsid = literal,
                vocab::UFV_DATE_HARVESTED if literal.is_some() => {
                    person.date_harvested = literal
                }
                vocab::UFV_HARVESTED_BY if literal.is_some() => person.harvested_by = literal,
                _ => {}
            }
        }
        person.person_type = most_specific_type.or(asserted_type);

        if with_contact {
            person.vcard = person
                .vcard_uri
                .as_deref()
                .and_then(|v| NamedNode::new(v).ok())
                .map(|v| self.get_vcard(&v));
        }
        person
    }

    /// Project a contact record with its name, title, telephones and emails
    pub fn get_vcard(&self, uri: &NamedNode) -> Vcard {
        let mut vcard = Vcard::new(uri.clone());
        let mut name_uri = None;
        let mut title_uri = None;
        let mut telephone_uris = Vec::new();
        let mut email_uris = Vec::new();

        for (tag, object) in self.statements(uri) {
            match tag.as_str() {
                vocab::OBO_CONTACT_INFO_OF => vcard.person_uri = Some(object.value().to_string()),
                vocab::VCARD_HAS_NAME => name_uri = object.as_named_node().cloned(),
                vocab::VCARD_HAS_TITLE => title_uri = object.as_named_node().cloned(),
                vocab::VCARD_HAS_TELEPHONE => {
                    telephone_uris.extend(object.as_named_node().cloned())
                }
                vocab::VCARD_HAS_EMAIL => email_uris.extend(object.as_named_node().cloned()),
                _ => {}
            }
        }

        vcard.name = name_uri.map(|u| self.get_name(&u));
        vcard.title = title_uri.map(|u| self.get_title(&u));
        vcard.telephones = telephone_uris.iter().map(|u| self.get_telephone(u)).collect();
        vcard.email_addresses = email_uris.iter().map(|u| self.get_email(u)).collect();
        vcard
    }

    pub fn get_name(&self, uri: &NamedNode) -> Name {
        let mut name = Name::new(uri.clone());
        for (tag, object) in self.statements(uri) {
            let Some(value) = object.as_literal().cloned() else {
                continue;
            };
            let value = Some(value);
            match tag.as_str() {
                vocab::VCARD_GIVEN_NAME => name.given_name = value,
                vocab::VCARD_FAMILY_NAME => name.family_name = value,
                vocab::VCARD_ADDITIONAL_NAME => name.additional_name = value,
                vocab::VCARD_HONORIFIC_PREFIX => name.honorific_prefix = value,
                vocab::VCARD_HONORIFIC_SUFFIX => name.honorific_suffix = value,
                _ => {}
            }
        }
        name
    }

    pub fn get_title(&self, uri: &NamedNode) -> Title {
        Title {
            uri: uri.clone(),
            title: self.get_literal(uri, vocab::VCARD_TITLE),
        }
    }

    /// A telephone is a fax when it carries `vcard:Fax` at all, since
    /// `vcard:Fax` entities are usually also typed `vcard:Telephone`
    pub fn get_telephone(&self, uri: &NamedNode) -> Telephone {
        let mut telephone = Telephone {
            uri: uri.clone(),
            number: None,
            kind: None,
        };
        for (tag, object) in self.statements(uri) {
            match tag.as_str() {
                vocab::VCARD_TELEPHONE => {
                    if let Some(number) = object.as_literal() {
                        telephone.number = Some(number.clone());
                    }
                }
                vocab::RDF_TYPE => match self.catalog.compact(object.value()).as_deref() {
                    Some(vocab::VCARD_FAX_CLASS) => telephone.kind = Some(TelephoneKind::Fax),
                    Some(vocab::VCARD_TELEPHONE_CLASS) if telephone.kind.is_none() => {
                        telephone.kind = Some(TelephoneKind::Telephone)
                    }
                    _ => {}
                },
                _ => {}
            }
        }
        telephone
    }

    pub fn get_email(&self, uri: &NamedNode) -> EmailAddress {
        EmailAddress {
            uri: uri.clone(),
            email: self.get_literal(uri, vocab::VCARD_EMAIL),
        }
    }

    /// Interval with its start and end values dereferenced
    pub fn get_datetime_interval(&self, uri: &NamedNode) -> DatetimeInterval {
        let mut interval = DatetimeInterval::new(uri.clone());
        for (tag, object) in self.statements(uri) {
            let Some(value_uri) = object.as_named_node() else {
                continue;
            };
            match tag.as_str() {
                vocab::VIVO_START => {
                    interval.start_uri = Some(value_uri.as_str().to_string());
                    interval.start = self.get_date_time_value(value_uri);
                }
                vocab::VIVO_END => {
                    interval.end_uri = Some(value_uri.as_str().to_string());
                    interval.end = self.get_date_time_value(value_uri);
                }
                _ => {}
            }
        }
        interval
    }

    fn get_date_time_value(&self, uri: &NamedNode) -> Option<chrono::NaiveDateTime> {
        self.get_value(uri, vocab::VIVO_DATE_TIME)
            .and_then(|v| parse_date(&v))
    }

    /// Educational training with degree, institution and interval
    /// dereferenced
    pub fn get_degree(&self, uri: &NamedNode) -> Degree {
        let mut degree = Degree::new(uri.clone());
        for (tag, object) in self.statements(uri) {
            match (tag.as_str(), object.as_named_node()) {
                (vocab::VIVO_MAJOR_FIELD, _) => {
                    degree.major_field = Some(object.value().to_string())
                }
                (vocab::VIVO_DEGREE_EARNED, Some(earned)) => {
                    degree.earned_uri = Some(earned.as_str().to_string());
                    degree.degree_name = self.get_value(earned, vocab::VIVO_ABBREVIATION);
                }
                (vocab::VIVO_TRAINING_AT_ORGANIZATION, Some(institution)) => {
                    degree.institution_uri = Some(institution.as_str().to_string());
                    degree.institution_name = self.get_label(institution);
                }
                (vocab::VIVO_DATE_TIME_INTERVAL, Some(dti)) => {
                    degree.interval = Some(self.get_datetime_interval(dti));
                }
                _ => {}
            }
        }
        degree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::{PrefixCatalog, RdfStore};
    use chrono::NaiveDate;

    const DATA: &str = r#"
        @prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
        @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
        @prefix foaf: <http://xmlns.com/foaf/0.1/> .
        @prefix vivo: <http://vivoweb.org/ontology/core#> .
        @prefix vcard: <http://www.w3.org/2006/vcard/ns#> .
        @prefix obo: <http://purl.obolibrary.org/obo/> .
        @prefix vitro: <http://vitro.mannlib.cornell.edu/ns/vitro/0.7#> .
        @prefix ufv: <http://vivo.ufl.edu/ontology/vivo-ufl/> .
        @prefix ind: <http://vivo.ufl.edu/individual/> .

        ind:n25674 rdf:type foaf:Person, ufv:UFEntity, vivo:FacultyMember ;
            rdfs:label "Conlon, Michael" ;
            ufv:ufid "12345678" ;
            ufv:homeDept ind:n8763427 ;
            ufv:privacyFlag "0" ;
            ufv:gatorlink "mconlon" ;
            obo:ARG_2000028 ind:n6754 ;
            <http://example.org/unknown> "ignored" .

        ind:n6754 rdf:type vcard:Individual ;
            obo:ARG_2000029 ind:n25674 ;
            vcard:hasName ind:n7001 ;
            vcard:hasTitle ind:n7002 ;
            vcard:hasTelephone ind:n7003, ind:n7004 ;
            vcard:hasEmail ind:n7005 .

        ind:n7001 rdf:type vcard:Name ;
            vcard:givenName "Michael" ;
            vcard:additionalName "Anthony" ;
            vcard:familyName "Conlon" .
        ind:n7002 rdf:type vcard:Title ; vcard:title "Associate Director" .
        ind:n7003 rdf:type vcard:Telephone, vcard:Fax ; vcard:telephone "(352) 273-8989" .
        ind:n7004 rdf:type vcard:Telephone ; vcard:telephone "(352) 273-8700" .
        ind:n7005 rdf:type vcard:Email ; vcard:email "mconlon@ufl.edu" .

        ind:deg1 vivo:majorField "Statistics" ;
            vivo:degreeEarned ind:phd ;
            vivo:trainingAtOrganization ind:uf ;
            vivo:dateTimeInterval ind:dti1 .
        ind:phd vivo:abbreviation "PhD" .
        ind:uf rdf:type foaf:Organization ; rdfs:label "University of Florida" .
        ind:dti1 vivo:end ind:dtv1 .
        ind:dtv1 vivo:dateTime "1982-05-01T00:00:00" .
    "#;

    fn node(local: &str) -> NamedNode {
        NamedNode::new(&format!("http://vivo.ufl.edu/individual/{}", local)).unwrap()
    }

    fn fixture() -> (RdfStore, PrefixCatalog) {
        (RdfStore::from_turtle(DATA).unwrap(), PrefixCatalog::new())
    }

    #[test]
    fn test_get_person() {
        let (store, catalog) = fixture();
        let projector = EntityProjector::new(&store, &catalog);
        let person = projector.get_person(&node("n25674"), true);

        assert_eq!(person.display_name.as_ref().map(Literal::value), Some("Conlon, Michael"));
        assert_eq!(person.ufid.as_ref().map(Literal::value), Some("12345678"));
        assert_eq!(
            person.person_type.as_deref(),
            Some("http://vivoweb.org/ontology/core#FacultyMember")
        );
        assert_eq!(
            person.homedept_uri.as_deref(),
            Some("http://vivo.ufl.edu/individual/n8763427")
        );
        assert_eq!(person.eracommonsid, None);
        let vcard = person.vcard.unwrap();
        assert_eq!(vcard.uri, node("n6754"));
    }

    #[test]
    fn test_literals_keep_datatype_and_language() {
        let (mut store, catalog) = fixture();
        store
            .load_turtle(
                r#"
                @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
                @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
                @prefix ufv: <http://vivo.ufl.edu/ontology/vivo-ufl/> .
                <http://vivo.ufl.edu/individual/p9> rdfs:label "Gator, Alberta"@en-US ;
                    ufv:privacyFlag "0"^^xsd:int .
                "#,
            )
            .unwrap();
        let projector = EntityProjector::new(&store, &catalog);
        let person = projector.get_person(&node("p9"), false);

        let label = person.display_name.unwrap();
        assert_eq!(label.value(), "Gator, Alberta");
        assert!(label.language().is_some());
        let flag = person.privacy_flag.unwrap();
        assert_eq!(flag.value(), "0");
        assert_eq!(flag.datatype().as_str(), "http://www.w3.org/2001/XMLSchema#int");
    }

    #[test]
    fn test_most_specific_type_wins() {
        let (mut store, catalog) = fixture();
        store
            .load(
                concat!(
                    "<http://vivo.ufl.edu/individual/n25674> ",
                    "<http://vitro.mannlib.cornell.edu/ns/vitro/0.7#mostSpecificType> ",
                    "<http://vivoweb.org/ontology/core#NonFacultyAcademic> ."
                ),
                crate::rdf::RdfFormat::NTriples,
            )
            .unwrap();
        let projector = EntityProjector::new(&store, &catalog);
        let person = projector.get_person(&node("n25674"), false);
        assert_eq!(
            person.person_type.as_deref(),
            Some("http://vivoweb.org/ontology/core#NonFacultyAcademic")
        );
        assert!(person.vcard.is_none());
    }

    #[test]
    fn test_get_vcard() {
        let (store, catalog) = fixture();
        let projector = EntityProjector::new(&store, &catalog);
        let vcard = projector.get_vcard(&node("n6754"));

        assert_eq!(
            vcard.person_uri.as_deref(),
            Some("http://vivo.ufl.edu/individual/n25674")
        );
        let name = vcard.name.as_ref().unwrap();
        assert_eq!(name.given_name.as_ref().map(Literal::value), Some("Michael"));
        assert_eq!(name.additional_name.as_ref().map(Literal::value), Some("Anthony"));
        assert_eq!(name.honorific_suffix, None);
        assert_eq!(
            vcard.title.as_ref().unwrap().title.as_ref().map(Literal::value),
            Some("Associate Director")
        );

        assert_eq!(vcard.telephones.len(), 2);
        assert_eq!(vcard.telephones[0].kind, Some(TelephoneKind::Fax));
        assert_eq!(vcard.telephones[1].kind, Some(TelephoneKind::Telephone));
        let telephone = vcard.first_telephone(TelephoneKind::Telephone).unwrap();
        assert_eq!(telephone.number.as_ref().map(Literal::value), Some("(352) 273-8700"));
        assert_eq!(
            vcard.email_addresses[0].email.as_ref().map(Literal::value),
            Some("mconlon@ufl.edu")
        );
    }

    #[test]
    fn test_empty_subject_projects_identifier_only() {
        let (store, catalog) = fixture();
        let projector = EntityProjector::new(&store, &catalog);

        let person = projector.get_person(&node("missing"), true);
        assert_eq!(person, Person::new(node("missing")));

        let vcard = projector.get_vcard(&node("missing"));
        assert!(vcard.name.is_none());
        assert!(vcard.telephones.is_empty());
    }

    #[test]
    fn test_get_degree() {
        let (store, catalog) = fixture();
        let projector = EntityProjector::new(&store, &catalog);
        let degree = projector.get_degree(&node("deg1"));

        assert_eq!(degree.major_field.as_deref(), Some("Statistics"));
        assert_eq!(degree.degree_name.as_deref(), Some("PhD"));
        assert_eq!(degree.institution_name.as_deref(), Some("University of Florida"));
        let interval = degree.interval.unwrap();
        assert_eq!(interval.start, None);
        assert_eq!(
            interval.end,
            NaiveDate::from_ymd_opt(1982, 5, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
        );
    }

    #[test]
    fn test_get_types_and_value() {
        let (store, catalog) = fixture();
        let projector = EntityProjector::new(&store, &catalog);
        assert_eq!(
            projector.get_types(&node("uf")),
            vec!["http://xmlns.com/foaf/0.1/Organization".to_string()]
        );
        assert_eq!(
            projector.get_label(&node("uf")).as_deref(),
            Some("University of Florida")
        );
        assert_eq!(projector.get_value(&node("uf"), vocab::VIVO_ABBREVIATION), None);
    }
}
