//! Where the catalog definition comes from.
//!
//! Production runs use the compiled-in definition. `UML_CATALOG_PATH` points
//! the process at a document on disk instead, which is how alternative
//! catalogs are reviewed before they are bundled.

use crate::catalog::CatalogStore;
use anyhow::Result;
use std::env;
use std::path::PathBuf;

pub const ENV_CATALOG_PATH: &str = "UML_CATALOG_PATH";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogSource {
    Bundled,
    Path(PathBuf),
}

impl CatalogSource {
    /// `Path` when `UML_CATALOG_PATH` is set and non-empty, else `Bundled`.
    pub fn from_env() -> Self {
        Self::from_override(env_non_empty(ENV_CATALOG_PATH).map(PathBuf::from))
    }

    /// Explicit override wins; otherwise consult the environment.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        match explicit {
            Some(path) => CatalogSource::Path(path),
            None => Self::from_env(),
        }
    }

    fn from_override(path: Option<PathBuf>) -> Self {
        path.map_or(CatalogSource::Bundled, CatalogSource::Path)
    }

    pub fn load(&self) -> Result<CatalogStore> {
        match self {
            CatalogSource::Bundled => CatalogStore::bundled(),
            CatalogSource::Path(path) => CatalogStore::load(path),
        }
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}
