//! Request-side lookup with an explicit fallback outcome.
//!
//! The resolver turns whatever identifier a request carried into either a
//! record to present or an instruction to show the landing view. It knows
//! nothing about rendering or transport, and an unknown identifier is not an
//! error: empty, malformed and unrecognized ids all collapse into `Fallback`.

use crate::catalog::{CatalogStore, DiagramType};
use log::debug;

/// Name of the view a presentation layer shows on `Resolution::Fallback`.
pub const DEFAULT_VIEW: &str = "index";

#[derive(Clone, Copy, Debug, PartialEq)]
/// Outcome of resolving a requested diagram id.
pub enum Resolution<'a> {
    Found(&'a DiagramType),
    Fallback,
}

impl<'a> Resolution<'a> {
    pub fn record(&self) -> Option<&'a DiagramType> {
        match *self {
            Resolution::Found(diagram) => Some(diagram),
            Resolution::Fallback => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolution::Fallback)
    }
}

impl<'a> From<Option<&'a DiagramType>> for Resolution<'a> {
    fn from(value: Option<&'a DiagramType>) -> Self {
        value.map_or(Resolution::Fallback, Resolution::Found)
    }
}

#[derive(Clone, Copy, Debug)]
/// Stateless view over a catalog store.
pub struct Resolver<'a> {
    store: &'a CatalogStore,
}

impl<'a> Resolver<'a> {
    pub fn new(store: &'a CatalogStore) -> Self {
        Self { store }
    }

    /// Resolve `requested` against the catalog.
    pub fn resolve(&self, requested: &str) -> Resolution<'a> {
        let resolution = Resolution::from(self.store.get(requested));
        if resolution.is_fallback() {
            debug!(requested; "unknown diagram id, falling back to {DEFAULT_VIEW}");
        }
        resolution
    }

    /// Ids for menus, in catalog order.
    pub fn list_ids(&self) -> Vec<&'a str> {
        self.store.list_ids()
    }

    pub fn store(&self) -> &'a CatalogStore {
        self.store
    }
}
