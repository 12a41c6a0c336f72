//! Indexed, read-only view of a catalog document.
//!
//! The store enforces the accepted schema versions and every per-record rule
//! before it exists, so a half-valid catalog is never observable. Lookups are
//! exact and case-sensitive; a miss is `None`, never an error.

use crate::catalog::fragment::check_fragment;
use crate::catalog::{
    CatalogDocument, CatalogKey, CatalogMetadata, DiagramId, DiagramType, bundled_catalog,
    load_catalog_from_path, parse_catalog_str,
};
use anyhow::{Context, Result, bail};
use log::info;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

// Only one catalog layout exists today. Callers may widen the accepted set
// via env for forward-compatible documents.
const DEFAULT_SCHEMA_VERSION: &str = "uml_catalog_v1";
const ENV_ALLOWED_SCHEMA_VERSIONS: &str = "UML_ALLOWED_CATALOG_SCHEMAS";

#[derive(Debug)]
/// Diagram types in definition order plus an index keyed by diagram id.
pub struct CatalogStore {
    metadata: CatalogMetadata,
    diagrams: Vec<DiagramType>,
    by_id: BTreeMap<DiagramId, usize>,
}

impl CatalogStore {
    /// Build a store from an already-decoded document.
    ///
    /// Fails on the first definition error: unsupported schema version, bad
    /// catalog metadata, empty catalog, or any record rule violation.
    pub fn from_document(document: CatalogDocument) -> Result<Self> {
        validate_schema_version(&document.schema_version)?;
        validate_catalog_metadata(&document.catalog)?;
        let by_id = build_index(&document.diagrams)?;
        info!(
            catalog = document.catalog.key.0.as_str(),
            diagrams = document.diagrams.len();
            "catalog store ready"
        );
        Ok(Self {
            metadata: document.catalog,
            diagrams: document.diagrams,
            by_id,
        })
    }

    /// Parse, schema-check and index a JSON catalog document.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::from_document(parse_catalog_str(text)?)
    }

    /// Load and index a catalog document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let document = load_catalog_from_path(path)?;
        Self::from_document(document).with_context(|| format!("indexing {}", path.display()))
    }

    /// Index the compiled-in catalog definition.
    pub fn bundled() -> Result<Self> {
        Self::from_document(bundled_catalog()?).context("indexing bundled catalog")
    }

    pub fn metadata(&self) -> &CatalogMetadata {
        &self.metadata
    }

    pub fn key(&self) -> &CatalogKey {
        &self.metadata.key
    }

    /// Resolve a diagram type by its exact id.
    pub fn get(&self, id: &str) -> Option<&DiagramType> {
        self.by_id.get(id).map(|&slot| &self.diagrams[slot])
    }

    /// All ids in definition order.
    pub fn list_ids(&self) -> Vec<&str> {
        self.diagrams.iter().map(|diagram| diagram.id.as_str()).collect()
    }

    /// `(id, title)` pairs in definition order, for landing views.
    pub fn menu(&self) -> Vec<(&str, &str)> {
        self.diagrams
            .iter()
            .map(|diagram| (diagram.id.as_str(), diagram.title.as_str()))
            .collect()
    }

    /// Iterates diagram types in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &DiagramType> {
        self.diagrams.iter()
    }

    pub fn len(&self) -> usize {
        self.diagrams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagrams.is_empty()
    }
}

fn validate_schema_version(schema_version: &str) -> Result<()> {
    if schema_version.is_empty() {
        bail!("schema_version must not be empty");
    }

    let allowed = allowed_schema_versions();
    if !allowed.contains(schema_version) {
        bail!(
            "schema_version '{}' not in allowed set {:?}",
            schema_version,
            allowed
        );
    }

    Ok(())
}

/// Accepted `schema_version` values, including env-provided extras.
pub fn allowed_schema_versions() -> BTreeSet<String> {
    let mut versions: BTreeSet<String> = BTreeSet::new();
    versions.insert(DEFAULT_SCHEMA_VERSION.to_string());
    if let Ok(raw) = std::env::var(ENV_ALLOWED_SCHEMA_VERSIONS) {
        for v in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            versions.insert(v.to_string());
        }
    }
    versions
}

fn validate_catalog_metadata(meta: &CatalogMetadata) -> Result<()> {
    if !is_identifier(&meta.key.0) {
        bail!("catalog.key must match ^[A-Za-z0-9_.-]+$, got '{}'", meta.key.0);
    }
    if meta.title.trim().is_empty() {
        bail!("catalog.title must not be empty");
    }
    if meta.labels.iter().any(|label| label.trim().is_empty()) {
        bail!("catalog.labels must not contain empty entries");
    }
    Ok(())
}

fn is_identifier(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}

fn build_index(diagrams: &[DiagramType]) -> Result<BTreeMap<DiagramId, usize>> {
    if diagrams.is_empty() {
        bail!("catalog contains no diagram types");
    }

    let mut map = BTreeMap::new();
    for (slot, diagram) in diagrams.iter().enumerate() {
        if !is_identifier(&diagram.id.0) {
            bail!(
                "diagram id '{}' must match ^[A-Za-z0-9_.-]+$",
                diagram.id.0
            );
        }
        if map.contains_key(&diagram.id) {
            bail!("duplicate diagram id {}", diagram.id);
        }
        validate_diagram(diagram).with_context(|| format!("diagram {}", diagram.id))?;
        map.insert(diagram.id.clone(), slot);
    }
    Ok(map)
}

fn validate_diagram(diagram: &DiagramType) -> Result<()> {
    if diagram.title.trim().is_empty() {
        bail!("title must not be empty");
    }
    if diagram.description.what.trim().is_empty() {
        bail!("description.what must not be empty");
    }
    if diagram.description.why.trim().is_empty() {
        bail!("description.why must not be empty");
    }
    if diagram.notations.is_empty() {
        bail!("notation sequence must not be empty");
    }

    let mut names: BTreeSet<&str> = BTreeSet::new();
    for notation in &diagram.notations {
        if notation.name.trim().is_empty() {
            bail!("encountered notation with no name");
        }
        if !names.insert(notation.name.as_str()) {
            bail!("duplicate notation name '{}'", notation.name);
        }
        if notation.description.trim().is_empty() {
            bail!("notation '{}' has an empty description", notation.name);
        }
        check_fragment(&notation.visual)
            .with_context(|| format!("notation '{}' visual", notation.name))?;
    }

    let example = &diagram.example;
    if example.scenario.trim().is_empty() {
        bail!("example.scenario must not be empty");
    }
    if example.description.trim().is_empty() {
        bail!("example.description must not be empty");
    }
    check_fragment(&example.visual).context("example visual")?;
    Ok(())
}
