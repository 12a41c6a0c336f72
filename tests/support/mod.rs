#![allow(dead_code)]

use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

pub const FIXTURE_VISUAL: &str = r#"<svg width="40" height="20" xmlns="http://www.w3.org/2000/svg"><rect x="1" y="1" width="38" height="18"/></svg>"#;

pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn catalog_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_uml-catalog"))
}

pub fn bundled_catalog_path() -> PathBuf {
    repo_root().join(umlcatalog::DEFAULT_CATALOG_PATH)
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    cmd.env_remove("UML_CATALOG_PATH")
        .env_remove("UML_ALLOWED_CATALOG_SCHEMAS");
    cmd.output()
        .with_context(|| format!("failed to spawn {:?}", cmd.get_program()))
}

// Smallest document that passes every definition rule.
pub fn minimal_document() -> Value {
    json!({
        "schema_version": "uml_catalog_v1",
        "catalog": {"key": "fixture_catalog", "title": "Fixture catalog"},
        "diagrams": [
            fixture_diagram("state", "State Machine Diagram"),
            fixture_diagram("component", "Component Diagram")
        ]
    })
}

pub fn fixture_diagram(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": {
            "what": format!("What a {title} is."),
            "why": format!("Why a {title} is used.")
        },
        "notations": [
            {"name": "Box", "description": "A plain box.", "visual": FIXTURE_VISUAL},
            {"name": "Arrow", "description": "A plain arrow.", "visual": FIXTURE_VISUAL}
        ],
        "example": {
            "scenario": "Fixture scenario",
            "description": "Boxes connected by arrows.",
            "visual": FIXTURE_VISUAL
        }
    })
}

pub fn write_document(document: &Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("allocating catalog file")?;
    serde_json::to_writer(&mut file, document)?;
    Ok(file)
}
