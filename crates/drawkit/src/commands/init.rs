//! Initialize a drawkit project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing drawkit...");

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    let source_dir = config_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join("svgs");
    if !source_dir.exists() {
        fs::create_dir_all(&source_dir).context("Failed to create svgs directory")?;
        tracing::info!("Created {}", source_dir.display());
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Drop SVG files into svgs/ and run 'drawkit convert'.");

    Ok(())
}

pub const DEFAULT_CONFIG: &str = r#"# drawkit configuration

[source]
# Directory scanned for illustrations (not recursive)
dir = "svgs"
extension = "svg"

[output]
# Generated components land in <dir>/<name>/<name>.tsx
dir = "registry/new-york/illustrations"

[registry]
name = "illustrations"
homepage = ""
schema = "https://ui.shadcn.com/schema/registry.json"
# Prefix used for file paths inside the manifest
files_prefix = "registry/new-york/illustrations"
manifest = "registry.json"
public_manifest = "public/r/registry.json"

[component]
class_name = "w-full h-auto"
utils_import = "@/lib/utils"

[convert]
# Reject style declarations without a name or value
strict_styles = true
parallel = true

[install]
# Where the registry is hosted, e.g. "https://illustrations.example.com"
base_url = ""
package_manager = "pnpm"
"#;
