//! In-memory RDF triple store
//!
//! Keeps triples in insertion order so subject fetches return predicates in
//! the order they were asserted, the same guarantee a SPARQL endpoint gives
//! for a single-subject scan.

use super::serialization::{self, ParseResult, RdfFormat};
use super::types::{NamedNode, RdfObject, RdfPredicate, Triple, TriplePattern};
use crate::backend::TripleFetch;
use crate::delta::Delta;
use indexmap::IndexSet;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// RDF store errors
#[derive(Error, Debug)]
pub enum RdfStoreError {
    /// Triple not found
    #[error("Triple not found: {0}")]
    TripleNotFound(String),

    /// Duplicate triple
    #[error("Duplicate triple: {0}")]
    DuplicateTriple(String),
}

pub type RdfStoreResult<T> = Result<T, RdfStoreError>;

/// RDF triple store with a subject index
#[derive(Clone, Debug, Default)]
pub struct RdfStore {
    /// All triples, insertion ordered
    triples: IndexSet<Triple>,

    /// Subject index: Subject -> triples with that subject, insertion ordered
    by_subject: HashMap<NamedNode, Vec<Triple>>,
}

impl RdfStore {
    /// Create a new empty RDF store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a Turtle document
    pub fn from_turtle(input: &str) -> ParseResult<Self> {
        let mut store = Self::new();
        store.load_turtle(input)?;
        Ok(store)
    }

    /// Parse a document and add its triples, skipping duplicates.
    /// Returns the number of triples added.
    pub fn load(&mut self, input: &str, format: RdfFormat) -> ParseResult<usize> {
        let triples = serialization::parse(input, format)?;
        let added = triples
            .into_iter()
            .filter(|t| self.insert(t.clone()).is_ok())
            .count();
        debug!("Loaded {} triples", added);
        Ok(added)
    }

    pub fn load_turtle(&mut self, input: &str) -> ParseResult<usize> {
        self.load(input, RdfFormat::Turtle)
    }

    /// Insert a triple into the store
    pub fn insert(&mut self, triple: Triple) -> RdfStoreResult<()> {
        if self.triples.contains(&triple) {
            return Err(RdfStoreError::DuplicateTriple(triple.to_string()));
        }

        self.by_subject
            .entry(triple.subject.clone())
            .or_default()
            .push(triple.clone());
        self.triples.insert(triple);

        Ok(())
    }

    /// Remove a triple from the store
    pub fn remove(&mut self, triple: &Triple) -> RdfStoreResult<()> {
        if !self.triples.shift_remove(triple) {
            return Err(RdfStoreError::TripleNotFound(triple.to_string()));
        }

        if let Some(list) = self.by_subject.get_mut(&triple.subject) {
            list.retain(|t| t != triple);
            if list.is_empty() {
                self.by_subject.remove(&triple.subject);
            }
        }

        Ok(())
    }

    /// Apply a delta: retract its removals, then assert its additions.
    ///
    /// Missing removals and duplicate additions are tolerated, matching
    /// how a SPARQL update endpoint treats them. Returns the number of
    /// triples that actually changed.
    pub fn apply(&mut self, delta: &Delta) -> usize {
        let removed = delta.sub.iter().filter(|t| self.remove(t).is_ok()).count();
        let added = delta
            .add
            .iter()
            .filter(|t| self.insert((*t).clone()).is_ok())
            .count();
        debug!("Applied delta: {} added, {} removed", added, removed);
        added + removed
    }

    /// Check if a triple exists in the store
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Get the total number of triples
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Clear all triples
    pub fn clear(&mut self) {
        self.triples.clear();
        self.by_subject.clear();
    }

    /// Query triples matching a pattern, in insertion order
    pub fn query(&self, pattern: &TriplePattern) -> Vec<Triple> {
        match &pattern.subject {
            Some(subject) => self
                .triples_for_subject(subject)
                .iter()
                .filter(|t| pattern.matches(t))
                .cloned()
                .collect(),
            None => self
                .triples
                .iter()
                .filter(|t| pattern.matches(t))
                .cloned()
                .collect(),
        }
    }

    /// Get triples with a specific subject
    pub fn triples_for_subject(&self, subject: &NamedNode) -> &[Triple] {
        self.by_subject
            .get(subject)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Get an iterator over all triples
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }
}

impl TripleFetch for RdfStore {
    fn fetch(&self, subject: &NamedNode) -> Vec<(RdfPredicate, RdfObject)> {
        self.triples_for_subject(subject)
            .iter()
            .map(|t| (t.predicate.clone(), t.object.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::types::Literal;

    fn node(iri: &str) -> NamedNode {
        NamedNode::new(iri).unwrap()
    }

    fn label(subject: &str, value: &str) -> Triple {
        Triple::new(
            node(subject),
            RdfPredicate::new("http://www.w3.org/2000/01/rdf-schema#label").unwrap(),
            Literal::new_simple_literal(value).into(),
        )
    }

    #[test]
    fn test_insert_and_contains() {
        let mut store = RdfStore::new();
        let triple = label("http://example.org/a", "A");

        assert!(store.insert(triple.clone()).is_ok());
        assert_eq!(store.len(), 1);
        assert!(store.contains(&triple));
        assert!(store.insert(triple).is_err());
    }

    #[test]
    fn test_remove() {
        let mut store = RdfStore::new();
        let triple = label("http://example.org/a", "A");

        store.insert(triple.clone()).unwrap();
        store.remove(&triple).unwrap();
        assert!(store.is_empty());
        assert!(store.triples_for_subject(&node("http://example.org/a")).is_empty());
        assert!(store.remove(&triple).is_err());
    }

    #[test]
    fn test_fetch_preserves_insertion_order() {
        let mut store = RdfStore::new();
        store.insert(label("http://example.org/a", "first")).unwrap();
        store.insert(label("http://example.org/b", "other")).unwrap();
        store.insert(label("http://example.org/a", "second")).unwrap();
        store.insert(label("http://example.org/a", "third")).unwrap();

        let values: Vec<String> = store
            .fetch(&node("http://example.org/a"))
            .into_iter()
            .map(|(_, o)| o.value().to_string())
            .collect();
        assert_eq!(values, vec!["first", "second", "third"]);

        store.remove(&label("http://example.org/a", "second")).unwrap();
        let values: Vec<String> = store
            .fetch(&node("http://example.org/a"))
            .into_iter()
            .map(|(_, o)| o.value().to_string())
            .collect();
        assert_eq!(values, vec!["first", "third"]);
    }

    #[test]
    fn test_fetch_unknown_subject_is_empty() {
        let store = RdfStore::new();
        assert!(store.fetch(&node("http://example.org/missing")).is_empty());
    }

    #[test]
    fn test_apply_delta() {
        let mut store = RdfStore::new();
        store.insert(label("http://example.org/a", "old")).unwrap();

        let mut delta = Delta::new();
        delta.retract(label("http://example.org/a", "old"));
        delta.retract(label("http://example.org/a", "never there"));
        delta.assert(label("http://example.org/a", "new"));

        assert_eq!(store.apply(&delta), 2);
        assert!(store.contains(&label("http://example.org/a", "new")));
        assert!(!store.contains(&label("http://example.org/a", "old")));
        // reapplying only hits duplicates and misses
        assert_eq!(store.apply(&delta), 0);
    }

    #[test]
    fn test_pattern_query() {
        let mut store = RdfStore::new();
        store.insert(label("http://example.org/a", "A")).unwrap();
        store.insert(label("http://example.org/b", "B")).unwrap();

        assert_eq!(store.query(&TriplePattern::default()).len(), 2);
        let pattern = TriplePattern::new(
            None,
            None,
            Some(Literal::new_simple_literal("B").into()),
        );
        let results = store.query(&pattern);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].subject.as_str(), "http://example.org/b");
    }

    #[test]
    fn test_from_turtle() {
        let store = RdfStore::from_turtle(
            r#"<http://example.org/a> <http://www.w3.org/2000/01/rdf-schema#label> "A" ."#,
        )
        .unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.contains(&label("http://example.org/a", "A")));
    }

    #[test]
    fn test_load_turtle_skips_duplicates() {
        let mut store = RdfStore::new();
        store.insert(label("http://example.org/a", "A")).unwrap();
        let added = store
            .load_turtle(
                r#"
                @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
                <http://example.org/a> rdfs:label "A", "B" .
                "#,
            )
            .unwrap();
        assert_eq!(added, 1);
        assert_eq!(store.len(), 2);
    }
}
