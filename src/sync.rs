//! Person reconciliation pipeline
//!
//! Looks the source record up by ufid, then either materializes a new
//! person or projects the existing one with its positions and computes the
//! delta against it.

use crate::backend::{PredicateCatalog, QueryRunner, TripleFetch, UriMinter};
use crate::delta::{Delta, DeltaGenerator};
use crate::materialize::EntityMaterializer;
use crate::model::{Position, SourceError, SourcePerson};
use crate::project::{find_person, get_position_uris, make_ufid_dictionary, EntityProjector};
use crate::rdf::NamedNode;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, info};

/// Synchronization errors
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Invalid source record: {0}")]
    Source(#[from] SourceError),

    #[error("Source record has no ufid")]
    MissingUfid,
}

pub type SyncResult<T> = Result<T, SyncError>;

/// Outcome of reconciling one source record
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    pub person_uri: NamedNode,
    /// The person was not in the graph and has been materialized
    pub created: bool,
    pub delta: Delta,
}

/// Reconciles source records against a graph through the collaborator
/// traits
pub struct PeopleSync<'a> {
    fetch: &'a dyn TripleFetch,
    runner: &'a dyn QueryRunner,
    minter: &'a dyn UriMinter,
    catalog: &'a dyn PredicateCatalog,
    with_contact: bool,
}

impl<'a> PeopleSync<'a> {
    pub fn new(
        fetch: &'a dyn TripleFetch,
        runner: &'a dyn QueryRunner,
        minter: &'a dyn UriMinter,
        catalog: &'a dyn PredicateCatalog,
    ) -> Self {
        Self {
            fetch,
            runner,
            minter,
            catalog,
            with_contact: true,
        }
    }

    /// Whether contact records are projected and reconciled
    pub fn with_contact(mut self, with_contact: bool) -> Self {
        self.with_contact = with_contact;
        self
    }

    /// ufid → person for everyone currently in the graph
    pub fn ufid_dictionary(&self) -> HashMap<String, NamedNode> {
        make_ufid_dictionary(self.runner, self.catalog)
    }

    /// Compute the delta that brings the graph in line with `source`.
    ///
    /// The record must carry a ufid and well-formed references. The
    /// dictionary is not updated when a person is created.
    pub fn reconcile(
        &self,
        source: &SourcePerson,
        dictionary: &HashMap<String, NamedNode>,
    ) -> SyncResult<Reconciliation> {
        let ufid = source.ufid.as_deref().ok_or(SyncError::MissingUfid)?;
        source.validate()?;

        let materializer = EntityMaterializer::new(self.minter, self.catalog);

        let Some(uri) = find_person(ufid, dictionary) else {
            let created = materializer.add_person(source);
            info!("Creating {} for ufid {} ({} triples)", created.uri, ufid, created.add.len());
            let mut delta = Delta::new();
            let person_uri = delta.absorb(created);
            return Ok(Reconciliation {
                person_uri,
                created: true,
                delta,
            });
        };

        let projector = EntityProjector::new(self.fetch, self.catalog);
        let person = projector.get_person(uri, self.with_contact);
        let positions: Vec<Position> = get_position_uris(self.runner, self.catalog, uri)
            .iter()
            .map(|p| projector.get_position(p, Some(uri)))
            .collect();
        debug!("Projected {} with {} positions", uri, positions.len());

        let generator = DeltaGenerator::new(materializer, self.catalog);
        let delta = generator.update_person(&person, &positions, source);
        info!(
            "Updating {} for ufid {}: {} to add, {} to remove",
            uri,
            ufid,
            delta.add.len(),
            delta.sub.len()
        );

        Ok(Reconciliation {
            person_uri: uri.clone(),
            created: false,
            delta,
        })
    }
}
