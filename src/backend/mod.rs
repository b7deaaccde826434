//! Collaborator interfaces
//!
//! The reconciliation core never talks to a triple store directly. It reads
//! through [`TripleFetch`] and [`QueryRunner`], mints identifiers through
//! [`UriMinter`] and resolves predicate tags through [`PredicateCatalog`].
//! [`RdfStore`](crate::rdf::RdfStore) and
//! [`PrefixCatalog`](crate::rdf::PrefixCatalog) are the in-process
//! implementations; a remote SPARQL endpoint can stand behind the same traits.

use crate::rdf::{NamedNode, QuerySolution, RdfObject, RdfPredicate};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;
use uuid::Uuid;

/// Trait for reading all statements about one subject
pub trait TripleFetch: Send + Sync {
    /// All (predicate, object) pairs for `subject`, in store order.
    /// An unknown subject or an unreachable store yields an empty list.
    fn fetch(&self, subject: &NamedNode) -> Vec<(RdfPredicate, RdfObject)>;
}

/// Trait for running SELECT queries
pub trait QueryRunner: Send + Sync {
    /// Variable bindings for `query`. Malformed queries and failures yield
    /// an empty list.
    fn select(&self, query: &str) -> Vec<QuerySolution>;
}

/// Trait for minting identifiers for new entities
pub trait UriMinter: Send + Sync {
    /// A fresh identifier, never handed out before
    fn mint(&self) -> NamedNode;
}

/// Trait for mapping short predicate tags to full IRIs and back
pub trait PredicateCatalog: Send + Sync {
    /// Full predicate IRI for `tag` (e.g. `vcard:givenName`)
    fn resolve(&self, tag: &str) -> RdfPredicate;

    /// Short tag for `iri`, if a known namespace covers it
    fn compact(&self, iri: &str) -> Option<String>;

    /// `PREFIX` lines for query text
    fn prologue(&self) -> String;
}

/// Mints `<namespace>n<uuid>` identifiers
#[derive(Debug, Clone)]
pub struct UuidMinter {
    namespace: String,
}

impl UuidMinter {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }
}

impl UriMinter for UuidMinter {
    fn mint(&self) -> NamedNode {
        let uri = format!("{}n{}", self.namespace, Uuid::new_v4().simple());
        debug!("Minted {}", uri);
        NamedNode::new_unchecked(uri)
    }
}

/// Mints `<namespace>n<counter>` identifiers from a seed.
///
/// Deterministic, so previews and tests can predict the identifiers a run
/// will assign.
#[derive(Debug)]
pub struct SequenceMinter {
    namespace: String,
    next: AtomicU64,
}

impl SequenceMinter {
    pub fn new(namespace: impl Into<String>, seed: u64) -> Self {
        Self {
            namespace: namespace.into(),
            next: AtomicU64::new(seed),
        }
    }

    /// The value the next `mint` will use
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }
}

impl UriMinter for SequenceMinter {
    fn mint(&self) -> NamedNode {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        let uri = format!("{}n{}", self.namespace, n);
        debug!("Minted {}", uri);
        NamedNode::new_unchecked(uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const NS: &str = "http://vivo.ufl.edu/individual/";

    #[test]
    fn test_sequence_minter_is_deterministic() {
        let minter = SequenceMinter::new(NS, 100);
        assert_eq!(minter.mint().as_str(), "http://vivo.ufl.edu/individual/n100");
        assert_eq!(minter.mint().as_str(), "http://vivo.ufl.edu/individual/n101");
        assert_eq!(minter.peek(), 102);
    }

    #[test]
    fn test_uuid_minter_unique() {
        let minter = UuidMinter::new(NS);
        let minted: HashSet<String> = (0..50).map(|_| minter.mint().as_str().to_string()).collect();
        assert_eq!(minted.len(), 50);
        assert!(minted.iter().all(|uri| uri.starts_with("http://vivo.ufl.edu/individual/n")));
    }

    #[test]
    fn test_minted_iris_are_valid() {
        let minter = UuidMinter::new(NS);
        let uri = minter.mint();
        assert!(NamedNode::new(uri.as_str()).is_ok());
    }

    #[test]
    fn test_minter_as_trait_object() {
        let minter: Box<dyn UriMinter> = Box::new(SequenceMinter::new(NS, 1));
        assert_eq!(minter.mint().as_str(), "http://vivo.ufl.edu/individual/n1");
    }
}
