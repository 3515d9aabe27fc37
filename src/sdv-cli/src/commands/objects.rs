//! Object catalog command handlers
//!
//! Builds `objects.json` from unpacked content and inspects single entries.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use sdv::{ObjectCatalog, ObjectRecord, ObjectSources};
use tracing::{info, warn};

use crate::config::Paths;

/// Why a requested ID has no catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Absent {
    /// In the content table but excluded from the catalog
    Skipped,
    /// Not in the content table at all
    Unknown,
}

/// Handle the objects command
pub fn build(paths: &Paths, sort: bool, dry_run: bool) -> Result<()> {
    let source = paths.content_source();

    if dry_run {
        let sources = ObjectSources::load(&source).context("Failed to load content")?;
        let (catalog, stats) =
            sdv::build_catalog(&sources).context("Failed to build object catalog")?;

        println!("Objects:      {}", stats.total);
        println!("Cataloged:    {}", catalog.len());
        println!("Skipped:      {}", stats.skipped);
        println!("Overridden:   {}", stats.overridden);
        println!("Without icon: {}", stats.without_icon);
        println!(
            "Dry run, {} not written",
            paths.output_dir.join(sdv::OUTPUT_FILE).display()
        );
        return Ok(());
    }

    let (path, stats) = sdv::export_objects(&source, &paths.output_dir, sort)
        .context("Failed to export object catalog")?;

    println!("Wrote {} objects to {}", stats.written(), path.display());
    Ok(())
}

/// Handle the show command
pub fn show(paths: &Paths, ids: &[String]) -> Result<()> {
    let sources = ObjectSources::load(&paths.content_source()).context("Failed to load content")?;
    let (catalog, _) = sdv::build_catalog(&sources).context("Failed to build object catalog")?;

    let (found, absent) = select(&catalog, &sources, ids);
    for (id, reason) in &absent {
        match reason {
            Absent::Skipped => warn!(id = %id, "Object is excluded from the catalog"),
            Absent::Unknown => warn!(id = %id, "No such object in content"),
        }
    }

    info!(found = found.len(), missing = absent.len(), "Lookup complete");
    println!("{}", serde_json::to_string_pretty(&found)?);
    Ok(())
}

/// Split requested IDs into catalog entries and the reasons for the rest
pub fn select<'a>(
    catalog: &'a ObjectCatalog,
    sources: &ObjectSources,
    ids: &'a [String],
) -> (IndexMap<&'a str, &'a ObjectRecord>, Vec<(&'a str, Absent)>) {
    let mut found = IndexMap::new();
    let mut absent = Vec::new();

    for id in ids {
        if let Some(object) = catalog.get(id) {
            found.insert(id.as_str(), object);
        } else if sources.objects.contains_key(id) {
            absent.push((id.as_str(), Absent::Skipped));
        } else {
            absent.push((id.as_str(), Absent::Unknown));
        }
    }

    (found, absent)
}
