//! Typed records for catalog documents.
//!
//! Field names mirror `schema/uml_catalog.schema.json`. Every field is
//! required at deserialization time; emptiness and uniqueness rules are
//! enforced when the document is indexed (see `CatalogStore`).

use crate::schema_loader::CatalogSchema;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Borrow;
use std::fmt;
use std::fs;
use std::path::Path;

/// Fixed catalog definition compiled into the library.
pub const BUNDLED_CATALOG: &str = include_str!("../../catalogs/uml_reference_v1.json");

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Stable lookup key of a diagram type, e.g. `use-case`.
pub struct DiagramId(pub String);

impl DiagramId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for DiagramId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DiagramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Identifies which catalog a document describes.
pub struct CatalogKey(pub String);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogMetadata {
    pub key: CatalogKey,
    pub title: String,
    #[serde(default)]
    pub labels: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// A whole catalog document as stored on disk.
pub struct CatalogDocument {
    pub schema_version: String,
    pub catalog: CatalogMetadata,
    pub diagrams: Vec<DiagramType>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Reference content for one UML diagram category.
pub struct DiagramType {
    pub id: DiagramId,
    pub title: String,
    pub description: DiagramDescription,
    /// Ordered from the simplest construct to the most involved.
    pub notations: Vec<NotationElement>,
    pub example: WorkedExample,
}

impl DiagramType {
    /// Find a notation element by its exact name.
    pub fn notation(&self, name: &str) -> Option<&NotationElement> {
        self.notations.iter().find(|notation| notation.name == name)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiagramDescription {
    /// What the diagram is.
    pub what: String,
    /// Why and when it is used.
    pub why: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// One visual construct of a diagram type.
pub struct NotationElement {
    pub name: String,
    pub description: String,
    /// Standalone SVG fragment, forwarded verbatim.
    pub visual: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// A scenario that combines the notations of a diagram type.
pub struct WorkedExample {
    pub scenario: String,
    pub description: String,
    /// Standalone SVG fragment, forwarded verbatim.
    pub visual: String,
}

/// Parse and schema-check a catalog document from JSON text.
pub fn parse_catalog_str(text: &str) -> Result<CatalogDocument> {
    let raw: Value = serde_json::from_str(text).context("parsing catalog JSON")?;
    CatalogSchema::load()?.validate(&raw)?;
    serde_json::from_value(raw).context("decoding catalog document")
}

/// Read, parse and schema-check a catalog document from disk.
pub fn load_catalog_from_path(path: &Path) -> Result<CatalogDocument> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    parse_catalog_str(&text).with_context(|| format!("loading catalog {}", path.display()))
}

/// The compiled-in catalog definition.
pub fn bundled_catalog() -> Result<CatalogDocument> {
    parse_catalog_str(BUNDLED_CATALOG).context("loading bundled catalog")
}
