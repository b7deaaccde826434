//! Delta generation
//!
//! Compares a graph-side record with the source-side record for the same
//! entity and produces the statements to add and to remove. Fields that
//! agree produce nothing. Sub-entities missing from the graph are
//! materialized first and then filled in as pure additions.

mod person;
mod position;
mod vcard;

use crate::backend::PredicateCatalog;
use crate::materialize::{EntityMaterializer, Materialized};
use crate::rdf::{serialize, Literal, NamedNode, RdfFormat, RdfObject, SerializeResult, Triple};
use tracing::{debug, warn};

/// Statements to add and to remove
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Delta {
    pub add: Vec<Triple>,
    pub sub: Vec<Triple>,
}

impl Delta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assert(&mut self, triple: Triple) {
        self.add.push(triple);
    }

    pub fn retract(&mut self, triple: Triple) {
        self.sub.push(triple);
    }

    /// Take over the creation statements of a new entity
    pub fn absorb(&mut self, materialized: Materialized) -> NamedNode {
        self.add.extend(materialized.add);
        materialized.uri
    }

    pub fn extend(&mut self, other: Delta) {
        self.add.extend(other.add);
        self.sub.extend(other.sub);
    }

    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.sub.is_empty()
    }

    /// Additions as a triple document
    pub fn add_document(&self, format: RdfFormat) -> SerializeResult<String> {
        serialize(&self.add, format)
    }

    /// Removals as a triple document
    pub fn sub_document(&self, format: RdfFormat) -> SerializeResult<String> {
        serialize(&self.sub, format)
    }
}

/// How a field is read on the graph side and written back
pub enum FieldAction<G> {
    /// Literal; the stored term is what gets retracted
    Literal(fn(&G) -> Option<&Literal>),
    /// Reference to an entity, value is an IRI
    Resource(fn(&G) -> Option<&str>),
    /// Reference to a class, value is a catalog tag
    Class(fn(&G) -> Option<&'static str>),
}

/// One row of a field table: where a value lives on each side and how it
/// is stored in the graph
pub struct FieldSpec<G, S> {
    pub name: &'static str,
    pub predicate: &'static str,
    pub graph: FieldAction<G>,
    pub source: fn(&S) -> Option<String>,
}

/// Computes deltas, materializing missing sub-entities on the way
pub struct DeltaGenerator<'a> {
    materializer: EntityMaterializer<'a>,
    catalog: &'a dyn PredicateCatalog,
}

impl<'a> DeltaGenerator<'a> {
    pub fn new(materializer: EntityMaterializer<'a>, catalog: &'a dyn PredicateCatalog) -> Self {
        Self {
            materializer,
            catalog,
        }
    }

    pub fn materializer(&self) -> &EntityMaterializer<'a> {
        &self.materializer
    }

    /// Reconcile every field of a table on entity `uri`
    pub fn update_entity<G, S>(
        &self,
        uri: &NamedNode,
        graph: &G,
        source: &S,
        fields: &[FieldSpec<G, S>],
    ) -> Delta {
        let mut delta = Delta::new();
        for field in fields {
            let new = (field.source)(source);
            let change = match &field.graph {
                FieldAction::Literal(read) => {
                    self.update_literal(uri, field.predicate, read(graph), new.as_deref())
                }
                FieldAction::Resource(read) => {
                    self.update_resource(uri, field.predicate, read(graph), new.as_deref())
                }
                FieldAction::Class(read) => {
                    let resolve = |t: &str| self.catalog.resolve(t).as_str().to_string();
                    let old = read(graph).map(resolve);
                    let new = new.as_deref().map(resolve);
                    self.update_resource(uri, field.predicate, old.as_deref(), new.as_deref())
                }
            };
            if !change.is_empty() {
                debug!("{} on {} changes to {:?}", field.name, uri, new);
            }
            delta.extend(change);
        }
        delta
    }

    /// Replace a literal value: retract the stored term if present, assert
    /// the new value if present. Values are compared on their lexical form,
    /// so equal values produce an empty delta whatever their datatype.
    pub fn update_literal(
        &self,
        uri: &NamedNode,
        tag: &str,
        old: Option<&Literal>,
        new: Option<&str>,
    ) -> Delta {
        let mut delta = Delta::new();
        if old.map(Literal::value) == new {
            return delta;
        }
        let predicate = self.catalog.resolve(tag);
        if let Some(old) = old {
            delta.retract(Triple::new(uri.clone(), predicate.clone(), old.clone().into()));
        }
        if let Some(new) = new {
            delta.assert(Triple::new(
                uri.clone(),
                predicate,
                Literal::new_simple_literal(new).into(),
            ));
        }
        delta
    }

    /// Replace a reference. Values that are not IRIs are skipped with a
    /// warning.
    pub fn update_resource(
        &self,
        uri: &NamedNode,
        tag: &str,
        old: Option<&str>,
        new: Option<&str>,
    ) -> Delta {
        let mut delta = Delta::new();
        if old == new {
            return delta;
        }
        let predicate = self.catalog.resolve(tag);
        let object = |iri: &str| match NamedNode::new(iri) {
            Ok(node) => Some(RdfObject::NamedNode(node)),
            Err(e) => {
                warn!("Skipping {} on {}: {}", tag, uri, e);
                None
            }
        };
        if let Some(old) = old.and_then(object) {
            delta.retract(Triple::new(uri.clone(), predicate.clone(), old));
        }
        if let Some(new) = new.and_then(object) {
            delta.assert(Triple::new(uri.clone(), predicate, new));
        }
        delta
    }
}
