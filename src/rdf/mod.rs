//! RDF support for the VIVO people synchronization
//!
//! This module provides the triple-level plumbing the reconciliation runs on:
//! - RDF terms and triples (IRI subjects, IRI or literal objects)
//! - Prefix catalog for compact predicate tags
//! - In-memory triple store with SPARQL SELECT evaluation
//! - Turtle, N-Triples and RDF/XML serialization
//!
//! # Example
//!
//! ```rust
//! use vivo_people_sync::rdf::{RdfStore, Triple, NamedNode, Literal, RdfPredicate};
//!
//! let mut store = RdfStore::new();
//!
//! let subject = NamedNode::new("http://vivo.ufl.edu/individual/n25674").unwrap();
//! let predicate = RdfPredicate::new("http://www.w3.org/2000/01/rdf-schema#label").unwrap();
//! let object = Literal::new_simple_literal("Conlon, Michael");
//!
//! let triple = Triple::new(subject.clone(), predicate, object.into());
//! store.insert(triple).unwrap();
//!
//! assert_eq!(store.triples_for_subject(&subject).len(), 1);
//! ```

mod namespace;
mod query;
mod serialization;
mod store;
mod types;
pub mod vocab;

pub use types::{
    Literal, NamedNode, RdfError, RdfObject, RdfPredicate, RdfResult, Triple, TriplePattern,
};

pub use store::{RdfStore, RdfStoreError, RdfStoreResult};

pub use query::{QueryError, QueryResult, QuerySolution};

pub use namespace::{Namespace, PrefixCatalog, PrefixError, PrefixResult};

pub use serialization::{
    parse, serialize, ParseError, ParseResult, RdfFormat, SerializeError, SerializeResult,
};
