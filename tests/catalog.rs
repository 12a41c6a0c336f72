// Bundled catalog guard rails: every entry satisfies the record rules and
// the on-disk definition matches what the library embeds.
mod support;

use anyhow::Result;
use std::collections::BTreeSet;
use umlcatalog::{
    BUNDLED_CATALOG, CatalogStore, bundled_catalog, check_fragment, load_catalog_from_path,
};

use support::bundled_catalog_path;

#[test]
fn bundled_catalog_lists_diagrams_in_definition_order() -> Result<()> {
    let store = CatalogStore::bundled()?;
    assert_eq!(
        store.list_ids(),
        vec!["use-case", "class", "activity", "sequence"]
    );
    assert_eq!(store.len(), 4);
    assert_eq!(store.key().0, "uml_reference_v1");
    Ok(())
}

#[test]
fn every_entry_satisfies_record_rules() -> Result<()> {
    let store = CatalogStore::bundled()?;
    for diagram in store.iter() {
        assert!(!diagram.id.as_str().is_empty());
        assert!(!diagram.title.trim().is_empty(), "{} title", diagram.id);
        assert!(!diagram.description.what.trim().is_empty(), "{} what", diagram.id);
        assert!(!diagram.description.why.trim().is_empty(), "{} why", diagram.id);
        assert!(!diagram.notations.is_empty(), "{} notations", diagram.id);

        let mut names = BTreeSet::new();
        for notation in &diagram.notations {
            assert!(
                names.insert(notation.name.as_str()),
                "{} repeats notation {}",
                diagram.id,
                notation.name
            );
            assert!(!notation.description.trim().is_empty());
            check_fragment(&notation.visual)?;
        }

        assert!(!diagram.example.scenario.trim().is_empty());
        assert!(!diagram.example.description.trim().is_empty());
        check_fragment(&diagram.example.visual)?;
    }
    Ok(())
}

#[test]
fn notation_order_is_preserved() -> Result<()> {
    let store = CatalogStore::bundled()?;
    let activity = store.get("activity").expect("activity diagram present");
    let names: Vec<&str> = activity.notations.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names.first(), Some(&"Initial Node"));
    assert_eq!(names.last(), Some(&"Swimlanes"));
    assert_eq!(names.len(), 8);
    Ok(())
}

#[test]
fn on_disk_definition_matches_embedded_copy() -> Result<()> {
    let from_disk = load_catalog_from_path(&bundled_catalog_path())?;
    let embedded = bundled_catalog()?;
    assert_eq!(from_disk, embedded);
    assert!(!BUNDLED_CATALOG.is_empty());
    Ok(())
}

#[test]
fn load_from_path_builds_equivalent_store() -> Result<()> {
    let loaded = CatalogStore::load(&bundled_catalog_path())?;
    let bundled = CatalogStore::bundled()?;
    assert_eq!(loaded.list_ids(), bundled.list_ids());
    assert_eq!(loaded.get("class"), bundled.get("class"));
    Ok(())
}

#[test]
fn menu_pairs_ids_with_titles() -> Result<()> {
    let store = CatalogStore::bundled()?;
    let menu = store.menu();
    assert_eq!(menu.len(), store.len());
    assert_eq!(menu[0], ("use-case", "Use Case Diagram"));
    assert_eq!(menu[3], ("sequence", "Sequence Diagram"));
    Ok(())
}

#[test]
fn notation_lookup_is_exact() -> Result<()> {
    let store = CatalogStore::bundled()?;
    let class = store.get("class").expect("class diagram present");
    assert!(class.notation("Composition").is_some());
    assert!(class.notation("composition").is_none());
    Ok(())
}
