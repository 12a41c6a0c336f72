//! Diagram catalog wiring.
//!
//! The catalog definition (`catalogs/uml_reference_v1.json`) is compiled into
//! the library, validated once, and published behind a process-wide handle.
//! Types here mirror the schema fields; callers use `CatalogStore` for
//! lookups and `initialize` to obtain the shared instance.

pub mod fragment;
pub mod index;
pub mod model;

pub use fragment::check_fragment;
pub use index::CatalogStore;
pub use model::{
    BUNDLED_CATALOG, CatalogDocument, CatalogKey, CatalogMetadata, DiagramDescription, DiagramId,
    DiagramType, NotationElement, WorkedExample,
};

pub use model::{bundled_catalog, load_catalog_from_path, parse_catalog_str};

use anyhow::Result;
use log::info;
use std::sync::OnceLock;

/// Repository-relative path of the bundled catalog definition.
pub const DEFAULT_CATALOG_PATH: &str = "catalogs/uml_reference_v1.json";

static CATALOG: OnceLock<CatalogStore> = OnceLock::new();

/// Build and publish the bundled catalog.
///
/// The first successful call publishes the store; later calls (from any
/// thread) get the same instance back. A definition error leaves nothing
/// published and must be treated as fatal by the caller.
pub fn initialize() -> Result<&'static CatalogStore> {
    if let Some(store) = CATALOG.get() {
        return Ok(store);
    }
    let store = CatalogStore::bundled()?;
    // A concurrent initializer may have won; both built the same definition.
    let published = CATALOG.get_or_init(|| store);
    info!(diagrams = published.len(); "published bundled catalog");
    Ok(published)
}

/// The published catalog, if `initialize` has succeeded.
pub fn installed() -> Option<&'static CatalogStore> {
    CATALOG.get()
}
