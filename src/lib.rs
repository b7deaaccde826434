//! VIVO People Sync
//!
//! Keeps the people of a VIVO triple store in agreement with the HR feed.
//! The feed supplies flat single-valued records; VIVO stores the same facts
//! as a hierarchy of linked entities (person → vcard → name, title,
//! telephones, emails; person ↔ position ↔ organization). Each run computes
//! the minimal set of triples to add and to remove.
//!
//! # Components
//!
//! - [`canon`]: repairs phone numbers, emails and HR job titles
//! - [`project`]: folds the triples of an entity into a typed record
//! - [`materialize`]: mints and describes entities the graph lacks
//! - [`delta`]: compares graph-side and source-side records
//! - [`sync`]: the per-person pipeline over the collaborator traits in
//!   [`backend`]
//!
//! ## Example Usage
//!
//! ```rust
//! use vivo_people_sync::backend::SequenceMinter;
//! use vivo_people_sync::model::SourcePerson;
//! use vivo_people_sync::rdf::{PrefixCatalog, RdfStore};
//! use vivo_people_sync::sync::PeopleSync;
//!
//! let mut store = RdfStore::new();
//! let minter = SequenceMinter::new("http://vivo.ufl.edu/individual/", 1);
//! let catalog = PrefixCatalog::new();
//!
//! let mut person = SourcePerson::new(true);
//! person.ufid = Some("12345678".to_string());
//! person.family_name = Some("Gator".to_string());
//!
//! let sync = PeopleSync::new(&store, &store, &minter, &catalog);
//! let result = sync.reconcile(&person, &sync.ufid_dictionary()).unwrap();
//! assert!(result.created);
//! assert!(result.delta.sub.is_empty());
//!
//! store.apply(&result.delta);
//! let sync = PeopleSync::new(&store, &store, &minter, &catalog);
//! let again = sync.reconcile(&person, &sync.ufid_dictionary()).unwrap();
//! assert!(again.delta.is_empty());
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod canon;
pub mod config;
pub mod delta;
pub mod materialize;
pub mod model;
pub mod project;
pub mod rdf;
pub mod sync;

// Re-export main types for convenience
pub use backend::{
    PredicateCatalog, QueryRunner, SequenceMinter, TripleFetch, UriMinter, UuidMinter,
};

pub use canon::{
    improve_jobcode_description, position_type_for_salary_plan, repair_email,
    repair_phone_number,
};

pub use config::{ConfigError, ConfigResult, MinterKind, SyncConfig};

pub use delta::{Delta, DeltaGenerator};

pub use materialize::{EntityMaterializer, EntryKind, Materialized};

pub use model::{
    HrRecord, Person, Position, PositionType, SourceError, SourcePerson, SourcePosition,
    SourceVcard, Vcard,
};

pub use project::EntityProjector;

pub use rdf::{NamedNode, PrefixCatalog, RdfFormat, RdfStore, Triple};

pub use sync::{PeopleSync, Reconciliation, SyncError, SyncResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
