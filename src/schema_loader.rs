//! JSON Schema contract for catalog documents.
//!
//! The contract ships inside the library (`schema/uml_catalog.schema.json`)
//! so a document can be checked structurally before typed deserialization.
//! Structural failures are reported all at once, one violation per line.

use anyhow::{Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;

/// Raw text of the catalog document contract.
pub const CATALOG_SCHEMA: &str = include_str!("../schema/uml_catalog.schema.json");

/// Compiled catalog document contract.
pub struct CatalogSchema {
    compiled: JSONSchema,
}

impl CatalogSchema {
    /// Compile the embedded contract.
    pub fn load() -> Result<Self> {
        let raw: Value = serde_json::from_str(CATALOG_SCHEMA)
            .map_err(|err| anyhow!("parsing embedded catalog schema: {err}"))?;
        let compiled = JSONSchema::compile(&raw)
            .map_err(|err| anyhow!("compiling embedded catalog schema: {err}"))?;
        Ok(Self { compiled })
    }

    /// Validate a raw catalog document against the contract.
    pub fn validate(&self, document: &Value) -> Result<()> {
        if let Err(errors) = self.compiled.validate(document) {
            let details = errors
                .map(|err| {
                    let path = err.instance_path.to_string();
                    if path.is_empty() {
                        err.to_string()
                    } else {
                        format!("{path}: {err}")
                    }
                })
                .collect::<Vec<_>>()
                .join("\n");
            bail!("catalog document failed schema validation:\n{details}");
        }
        Ok(())
    }
}
