//! RDF namespace and prefix management
//!
//! Short predicate tags (`vcard:givenName`) are resolved to full IRIs here,
//! and full IRIs read back from the store are compacted into tags.

use super::types::{NamedNode, RdfPredicate};
use crate::backend::PredicateCatalog;
use indexmap::IndexMap;
use thiserror::Error;
use tracing::warn;

/// Prefix errors
#[derive(Error, Debug)]
pub enum PrefixError {
    /// Unknown prefix
    #[error("Unknown prefix: {0}")]
    UnknownPrefix(String),

    /// Invalid IRI
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),
}

pub type PrefixResult<T> = Result<T, PrefixError>;

/// Namespace (prefix → IRI mapping)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    /// Prefix
    pub prefix: String,
    /// IRI
    pub iri: String,
}

impl Namespace {
    /// Create a new namespace
    pub fn new(prefix: impl Into<String>, iri: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            iri: iri.into(),
        }
    }
}

/// Prefix catalog pre-seeded with the VIVO ontologies
#[derive(Debug, Clone)]
pub struct PrefixCatalog {
    /// Prefix → IRI mappings, in registration order
    prefixes: IndexMap<String, String>,
}

impl PrefixCatalog {
    /// Create a catalog with the standard and VIVO prefixes
    pub fn new() -> Self {
        let mut catalog = Self {
            prefixes: IndexMap::new(),
        };

        catalog.add_prefix("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#");
        catalog.add_prefix("rdfs", "http://www.w3.org/2000/01/rdf-schema#");
        catalog.add_prefix("xsd", "http://www.w3.org/2001/XMLSchema#");
        catalog.add_prefix("owl", "http://www.w3.org/2002/07/owl#");
        catalog.add_prefix("foaf", "http://xmlns.com/foaf/0.1/");
        catalog.add_prefix("vivo", "http://vivoweb.org/ontology/core#");
        catalog.add_prefix("vcard", "http://www.w3.org/2006/vcard/ns#");
        catalog.add_prefix("obo", "http://purl.obolibrary.org/obo/");
        catalog.add_prefix("vitro", "http://vitro.mannlib.cornell.edu/ns/vitro/0.7#");
        // UF local properties and UF position classes live in different namespaces
        catalog.add_prefix("ufv", "http://vivo.ufl.edu/ontology/vivo-ufl/");
        catalog.add_prefix("ufl", "http://vivoweb.org/ontology/vivo-ufl/");

        catalog
    }

    /// Add a prefix, replacing any previous mapping
    pub fn add_prefix(&mut self, prefix: impl Into<String>, iri: impl Into<String>) {
        self.prefixes.insert(prefix.into(), iri.into());
    }

    /// Get IRI for a prefix
    pub fn get_iri(&self, prefix: &str) -> PrefixResult<&str> {
        self.prefixes
            .get(prefix)
            .map(|s| s.as_str())
            .ok_or_else(|| PrefixError::UnknownPrefix(prefix.to_string()))
    }

    /// Expand a compact IRI (prefix:local) to full IRI
    pub fn expand(&self, compact_iri: &str) -> PrefixResult<String> {
        match compact_iri.split_once(':') {
            Some((prefix, local)) => {
                let iri = self.get_iri(prefix)?;
                Ok(format!("{}{}", iri, local))
            }
            None => Err(PrefixError::InvalidIri(compact_iri.to_string())),
        }
    }

    /// Compact an IRI using the longest matching namespace
    pub fn compact(&self, iri: &str) -> Option<String> {
        self.prefixes
            .iter()
            .filter(|(_, namespace_iri)| iri.starts_with(namespace_iri.as_str()))
            .max_by_key(|(_, namespace_iri)| namespace_iri.len())
            .map(|(prefix, namespace_iri)| format!("{}:{}", prefix, &iri[namespace_iri.len()..]))
    }

    /// `PREFIX` declarations for every registered namespace
    pub fn sparql_prologue(&self) -> String {
        self.prefixes
            .iter()
            .map(|(prefix, iri)| format!("PREFIX {}: <{}>\n", prefix, iri))
            .collect()
    }

    /// Get all registered prefixes
    pub fn prefixes(&self) -> Vec<Namespace> {
        self.prefixes
            .iter()
            .map(|(prefix, iri)| Namespace::new(prefix.clone(), iri.clone()))
            .collect()
    }
}

impl Default for PrefixCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl PredicateCatalog for PrefixCatalog {
    fn resolve(&self, tag: &str) -> RdfPredicate {
        match self.expand(tag) {
            Ok(iri) => NamedNode::new_unchecked(iri).into(),
            Err(e) => {
                // untagged input is taken to be an absolute IRI already
                warn!("Tag {} not resolvable ({}), using it verbatim", tag, e);
                NamedNode::new_unchecked(tag).into()
            }
        }
    }

    fn compact(&self, iri: &str) -> Option<String> {
        PrefixCatalog::compact(self, iri)
    }

    fn prologue(&self) -> String {
        self.sparql_prologue()
    }
}
