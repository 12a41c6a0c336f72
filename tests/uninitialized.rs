// Lookups through the process-wide handle before startup has published the
// catalog. Kept in its own test binary so no other test initializes first.
use anyhow::Result;
use umlcatalog::{initialize, installed, list_ids, resolve};

#[test]
fn lookups_before_initialize_fall_back_until_published() -> Result<()> {
    assert!(installed().is_none());
    assert!(resolve("class").is_fallback());
    assert!(list_ids().is_empty());

    initialize()?;
    assert!(resolve("class").record().is_some());
    assert_eq!(list_ids(), vec!["use-case", "class", "activity", "sequence"]);
    Ok(())
}
