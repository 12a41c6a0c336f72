//! Reference catalog of UML diagram types.
//!
//! Each diagram type carries an explanation, an ordered set of notation
//! elements and one worked example, with SVG fragments for the visuals. The
//! catalog is validated once at startup and then only read: `initialize`
//! publishes it, `Resolver` answers lookups with either a record or an
//! explicit fallback to the landing view.

pub mod catalog;
pub mod config;
pub mod resolver;
pub mod schema_loader;

use log::warn;

pub use catalog::{
    BUNDLED_CATALOG, CatalogDocument, CatalogKey, CatalogMetadata, CatalogStore,
    DEFAULT_CATALOG_PATH, DiagramDescription, DiagramId, DiagramType, NotationElement,
    WorkedExample, bundled_catalog, check_fragment, initialize, installed, load_catalog_from_path,
    parse_catalog_str,
};
pub use config::CatalogSource;
pub use resolver::{DEFAULT_VIEW, Resolution, Resolver};
pub use schema_loader::CatalogSchema;

/// Resolve `requested` against the published catalog.
///
/// Returns `Fallback` when the catalog has not been initialized; callers are
/// expected to call `initialize` during startup.
pub fn resolve(requested: &str) -> Resolution<'static> {
    match published() {
        Some(store) => Resolver::new(store).resolve(requested),
        None => Resolution::Fallback,
    }
}

/// Ids of the published catalog in definition order; empty before
/// `initialize`.
pub fn list_ids() -> Vec<&'static str> {
    published().map(CatalogStore::list_ids).unwrap_or_default()
}

fn published() -> Option<&'static CatalogStore> {
    let store = installed();
    if store.is_none() {
        // Startup bug, not an unknown id.
        warn!("catalog lookup before initialize(); serving {DEFAULT_VIEW}");
    }
    store
}
