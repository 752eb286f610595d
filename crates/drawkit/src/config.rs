//! Configuration file (drawkit.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use drawkit_registry::{BuildConfig, PackageManager, DEFAULT_SCHEMA};
use drawkit_transform::generator::{DEFAULT_CLASS_NAME, DEFAULT_UTILS_IMPORT};
use drawkit_transform::StylePolicy;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub component: ComponentConfig,
    #[serde(default)]
    pub convert: ConvertSettings,
    #[serde(default)]
    pub install: InstallConfig,
}

#[derive(Debug, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_source_dir")]
    pub dir: String,
    #[serde(default = "default_extension")]
    pub extension: String,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: String,
}

#[derive(Debug, Deserialize)]
pub struct RegistryConfig {
    #[serde(default = "default_registry_name")]
    pub name: String,
    #[serde(default)]
    pub homepage: String,
    #[serde(default = "default_schema")]
    pub schema: String,
    #[serde(default = "default_output_dir")]
    pub files_prefix: String,
    #[serde(default = "default_manifest")]
    pub manifest: String,
    #[serde(default = "default_public_manifest")]
    pub public_manifest: String,
}

#[derive(Debug, Deserialize)]
pub struct ComponentConfig {
    #[serde(default = "default_class_name")]
    pub class_name: String,
    #[serde(default = "default_utils_import")]
    pub utils_import: String,
}

#[derive(Debug, Deserialize)]
pub struct ConvertSettings {
    #[serde(default = "default_true")]
    pub strict_styles: bool,
    #[serde(default = "default_true")]
    pub parallel: bool,
}

#[derive(Debug, Deserialize, Default)]
pub struct InstallConfig {
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub package_manager: PackageManager,
}

// Used when a whole table is missing; must match the field defaults.
impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            dir: default_source_dir(),
            extension: default_extension(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            name: default_registry_name(),
            homepage: String::new(),
            schema: default_schema(),
            files_prefix: default_output_dir(),
            manifest: default_manifest(),
            public_manifest: default_public_manifest(),
        }
    }
}

impl Default for ComponentConfig {
    fn default() -> Self {
        Self {
            class_name: default_class_name(),
            utils_import: default_utils_import(),
        }
    }
}

impl Default for ConvertSettings {
    fn default() -> Self {
        Self {
            strict_styles: true,
            parallel: true,
        }
    }
}

fn default_source_dir() -> String {
    "svgs".to_string()
}
fn default_extension() -> String {
    "svg".to_string()
}
fn default_output_dir() -> String {
    "registry/new-york/illustrations".to_string()
}
fn default_registry_name() -> String {
    "illustrations".to_string()
}
fn default_schema() -> String {
    DEFAULT_SCHEMA.to_string()
}
fn default_manifest() -> String {
    "registry.json".to_string()
}
fn default_public_manifest() -> String {
    "public/r/registry.json".to_string()
}
fn default_class_name() -> String {
    DEFAULT_CLASS_NAME.to_string()
}
fn default_utils_import() -> String {
    DEFAULT_UTILS_IMPORT.to_string()
}
fn default_true() -> bool {
    true
}

impl ConfigFile {
    /// Build the registry builder configuration.
    pub fn build_config(&self) -> BuildConfig {
        BuildConfig {
            source_dir: PathBuf::from(&self.source.dir),
            extension: self.source.extension.trim_start_matches('.').to_string(),
            output_dir: PathBuf::from(&self.output.dir),
            manifest_path: PathBuf::from(&self.registry.manifest),
            public_manifest_path: PathBuf::from(&self.registry.public_manifest),
            schema: self.registry.schema.clone(),
            registry_name: self.registry.name.clone(),
            homepage: self.registry.homepage.clone(),
            files_prefix: self.registry.files_prefix.clone(),
            class_name: self.component.class_name.clone(),
            utils_import: self.component.utils_import.clone(),
            style_policy: if self.convert.strict_styles {
                StylePolicy::Strict
            } else {
                StylePolicy::Lenient
            },
            parallel: self.convert.parallel,
        }
    }
}

/// Load configuration if the file exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!("Loaded config from {}", path.display());

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();

        let config = load_config(&temp.path().join("drawkit.toml")).unwrap();
        let build = config.build_config();

        assert_eq!(build.source_dir, PathBuf::from("svgs"));
        assert_eq!(build.extension, "svg");
        assert_eq!(build.manifest_path, PathBuf::from("registry.json"));
        assert_eq!(build.public_manifest_path, PathBuf::from("public/r/registry.json"));
        assert_eq!(build.schema, DEFAULT_SCHEMA);
        assert_eq!(build.style_policy, StylePolicy::Strict);
        assert!(build.parallel);
    }

    #[test]
    fn partial_sections_keep_field_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("drawkit.toml");
        fs::write(
            &path,
            r#"
[source]
dir = "assets/svg"

[registry]
name = "undraw"
homepage = "https://undraw.example"

[convert]
strict_styles = false

[install]
base_url = "https://undraw.example"
package_manager = "npm"
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        let build = config.build_config();

        assert_eq!(build.source_dir, PathBuf::from("assets/svg"));
        assert_eq!(build.extension, "svg");
        assert_eq!(build.registry_name, "undraw");
        assert_eq!(build.homepage, "https://undraw.example");
        assert_eq!(build.files_prefix, "registry/new-york/illustrations");
        assert_eq!(build.style_policy, StylePolicy::Lenient);
        assert_eq!(build.class_name, "w-full h-auto");
        assert_eq!(config.install.package_manager, PackageManager::Npm);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("drawkit.toml");
        fs::write(&path, "[source\ndir = ").unwrap();

        assert!(load_config(&path).is_err());
    }

    #[test]
    fn default_config_template_parses() {
        let config: ConfigFile = toml::from_str(crate::commands::init::DEFAULT_CONFIG).unwrap();

        assert_eq!(config.source.dir, "svgs");
        assert_eq!(config.registry.public_manifest, "public/r/registry.json");
    }
}
