#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Read-only hoarding catalog.
//!
//! The catalog is the fixed set of placements a dashboard session browses.
//! It is exposed through the [`CatalogProvider`] trait so the filter and
//! selection logic never depends on where the records came from. The
//! default [`Catalog`] is built from TOML definitions embedded at compile
//! time (see [`registry`]); a TOML file on disk can replace it via
//! [`Catalog::from_path`] or the `ADSPACE_CATALOG` environment variable.

pub mod registry;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use adspace_catalog_models::{InvalidConversionScoreError, PlacementRecord};
use serde::Deserialize;
use thiserror::Error;

/// Environment variable naming a catalog TOML file to load instead of the
/// embedded one.
pub const CATALOG_ENV_VAR: &str = "ADSPACE_CATALOG";

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog file {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The catalog TOML could not be parsed.
    #[error("Failed to parse catalog '{name}': {source}")]
    Parse {
        /// File path or registry name of the offending definition.
        name: String,
        /// Underlying TOML error.
        source: toml::de::Error,
    },

    /// Two placements share the same identifier.
    #[error("Duplicate placement id {id}")]
    DuplicateId {
        /// The repeated identifier.
        id: u32,
    },

    /// A placement failed per-record validation.
    #[error(transparent)]
    InvalidConversionScore(#[from] InvalidConversionScoreError),

    /// The catalog contains no placements.
    #[error("Catalog contains no placements")]
    Empty,
}

/// Read-only source of placement records.
///
/// Implementations must return records in a stable order; filtered views
/// preserve it.
pub trait CatalogProvider {
    /// All placements, in catalog order.
    fn placements(&self) -> &[PlacementRecord];

    /// Looks up a placement by identifier.
    fn get(&self, id: u32) -> Option<&PlacementRecord> {
        self.placements().iter().find(|p| p.id == id)
    }

    /// Number of placements in the catalog.
    fn len(&self) -> usize {
        self.placements().len()
    }

    /// Whether the catalog is empty.
    fn is_empty(&self) -> bool {
        self.placements().is_empty()
    }
}

/// Shape of a catalog TOML document: a list of `[[placements]]` tables.
#[derive(Debug, Deserialize)]
pub(crate) struct CatalogDocument {
    pub(crate) placements: Vec<PlacementRecord>,
}

/// A validated, immutable list of placements.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    placements: Vec<PlacementRecord>,
}

impl Catalog {
    /// Builds a catalog after checking that ids are unique and every record
    /// is valid.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] for an empty list,
    /// [`CatalogError::DuplicateId`] if two records share an id, or
    /// [`CatalogError::InvalidConversionScore`] for an out-of-range score.
    pub fn new(placements: Vec<PlacementRecord>) -> Result<Self, CatalogError> {
        if placements.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = BTreeSet::new();
        for placement in &placements {
            placement.validate()?;
            if !seen.insert(placement.id) {
                return Err(CatalogError::DuplicateId { id: placement.id });
            }
        }

        Ok(Self { placements })
    }

    /// Returns the catalog compiled into the binary.
    ///
    /// # Panics
    ///
    /// Panics if the embedded definitions are malformed. They are
    /// compile-time constants, so this indicates a development error caught
    /// by the registry tests.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(registry::all_placements())
            .unwrap_or_else(|e| panic!("Embedded catalog is invalid: {e}"))
    }

    /// Parses a catalog from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if the text is not a valid catalog
    /// document, or any error from [`Catalog::new`].
    pub fn from_toml_str(name: &str, text: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument =
            toml::de::from_str(text).map_err(|source| CatalogError::Parse {
                name: name.to_string(),
                source,
            })?;
        Self::new(doc.placements)
    }

    /// Loads a catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, or any error
    /// from [`Catalog::from_toml_str`].
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&path.display().to_string(), &text)?;
        log::info!(
            "Loaded {} placements from {}",
            catalog.placements.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Loads the catalog named by `path`, falling back to the
    /// `ADSPACE_CATALOG` environment variable and then the embedded catalog.
    ///
    /// # Errors
    ///
    /// Returns any error from [`Catalog::from_path`] when a file is named.
    pub fn resolve(path: Option<&Path>) -> Result<Self, CatalogError> {
        if let Some(path) = path {
            return Self::from_path(path);
        }

        match std::env::var_os(CATALOG_ENV_VAR) {
            Some(env_path) if !env_path.is_empty() => Self::from_path(Path::new(&env_path)),
            _ => {
                log::debug!("No catalog file configured; using embedded catalog");
                Ok(Self::embedded())
            }
        }
    }
}

impl CatalogProvider for Catalog {
    fn placements(&self) -> &[PlacementRecord] {
        &self.placements
    }
}
