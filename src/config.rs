//! Synchronization configuration
//!
//! Loaded from YAML. Every key is optional; missing keys take the values of
//! the UF VIVO deployment.
//!
//! ```yaml
//! individual_namespace: "http://vivo.ufl.edu/individual/"
//! minter:
//!   kind: sequence
//!   seed: 1000
//! prefixes:
//!   ex: "http://example.org/"
//! output_format: rdfxml
//! fetch_contact: true
//! ```

use crate::backend::{SequenceMinter, UriMinter, UuidMinter};
use crate::rdf::{PrefixCatalog, RdfFormat};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// How identifiers for new entities are minted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MinterKind {
    #[default]
    Uuid,
    Sequence,
}

/// Minter settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinterConfig {
    pub kind: MinterKind,
    /// First counter value for the sequence minter
    pub seed: u64,
}

impl Default for MinterConfig {
    fn default() -> Self {
        Self {
            kind: MinterKind::Uuid,
            seed: 1,
        }
    }
}

/// Synchronization settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Namespace of minted identifiers
    pub individual_namespace: String,
    pub minter: MinterConfig,
    /// Prefixes added to the built-in catalog
    pub prefixes: IndexMap<String, String>,
    /// Format of rendered deltas
    pub output_format: RdfFormat,
    /// Project contact records when reading people
    pub fetch_contact: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            individual_namespace: "http://vivo.ufl.edu/individual/".to_string(),
            minter: MinterConfig::default(),
            prefixes: IndexMap::new(),
            output_format: RdfFormat::NTriples,
            fetch_contact: true,
        }
    }
}

impl SyncConfig {
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: SyncConfig = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_path<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    /// Built-in catalog plus the configured prefixes
    pub fn catalog(&self) -> PrefixCatalog {
        let mut catalog = PrefixCatalog::new();
        for (prefix, iri) in &self.prefixes {
            catalog.add_prefix(prefix.clone(), iri.clone());
        }
        catalog
    }

    pub fn minter(&self) -> Box<dyn UriMinter> {
        match self.minter.kind {
            MinterKind::Uuid => Box::new(UuidMinter::new(self.individual_namespace.clone())),
            MinterKind::Sequence => Box::new(SequenceMinter::new(
                self.individual_namespace.clone(),
                self.minter.seed,
            )),
        }
    }
}
