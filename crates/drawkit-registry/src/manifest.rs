//! Registry manifest model and persistence.
//!
//! The manifest follows the shadcn registry layout so the generated
//! components can be installed with `shadcn add`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Schema URL written to `$schema` by default.
pub const DEFAULT_SCHEMA: &str = "https://ui.shadcn.com/schema/registry.json";

/// Item and file type of generated components.
pub const COMPONENT_TYPE: &str = "registry:component";

/// The aggregated manifest listing every generated component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryManifest {
    #[serde(rename = "$schema")]
    pub schema: String,

    /// Registry name
    pub name: String,

    /// Homepage of the published registry
    pub homepage: String,

    /// Items in discovery order
    pub items: Vec<RegistryItem>,
}

/// One generated component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryItem {
    /// Original kebab-case file stem
    pub name: String,

    #[serde(rename = "type")]
    pub item_type: String,

    /// Human readable title
    pub title: String,

    pub files: Vec<RegistryFile>,
}

/// A file belonging to a registry item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryFile {
    /// Path relative to the registry root
    pub path: String,

    #[serde(rename = "type")]
    pub file_type: String,
}

impl RegistryItem {
    /// Create a component item with a single source file.
    pub fn component(name: &str, title: &str, path: String) -> Self {
        Self {
            name: name.to_string(),
            item_type: COMPONENT_TYPE.to_string(),
            title: title.to_string(),
            files: vec![RegistryFile {
                path,
                file_type: COMPONENT_TYPE.to_string(),
            }],
        }
    }
}

impl RegistryManifest {
    /// Create an empty manifest.
    pub fn new(
        schema: impl Into<String>,
        name: impl Into<String>,
        homepage: impl Into<String>,
    ) -> Self {
        Self {
            schema: schema.into(),
            name: name.into(),
            homepage: homepage.into(),
            items: Vec::new(),
        }
    }

    /// Serialize as pretty JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String, ManifestError> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Write the manifest to every path, creating parent directories.
    ///
    /// Copies are written one after another; a failure leaves earlier copies
    /// in place.
    pub fn write_to(&self, paths: &[PathBuf]) -> Result<(), ManifestError> {
        let json = self.to_json()?;

        for path in paths {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|source| ManifestError::Write {
                    path: parent.display().to_string(),
                    source,
                })?;
            }

            fs::write(path, &json).map_err(|source| ManifestError::Write {
                path: path.display().to_string(),
                source,
            })?;

            tracing::debug!("Wrote manifest to {}", path.display());
        }

        Ok(())
    }
}

/// Load a manifest from disk.
pub fn load_manifest(path: &Path) -> Result<RegistryManifest, ManifestError> {
    let content = fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.display().to_string(),
        source,
    })?;

    Ok(serde_json::from_str(&content)?)
}

/// Errors that can occur reading or writing a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Invalid manifest JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read manifest {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write manifest {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}
