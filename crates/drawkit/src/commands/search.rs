//! Search the generated manifest.

use std::path::Path;

use anyhow::{Context, Result};
use drawkit_registry::{filter_items, load_manifest};

/// Run the search command, printing `name  title` per match.
pub fn run(manifest_path: &Path, query: &str, limit: usize) -> Result<()> {
    let manifest = load_manifest(manifest_path)
        .with_context(|| format!("Failed to load {}", manifest_path.display()))?;

    let matches = filter_items(&manifest, query, limit);
    tracing::debug!(
        "{} of {} items match {:?}",
        matches.len(),
        manifest.items.len(),
        query
    );

    if matches.is_empty() {
        tracing::info!("No illustrations match {:?}", query);
        return Ok(());
    }

    for item in matches {
        println!("{}  {}", item.name, item.title);
    }

    Ok(())
}
