//! Registry builder: converts a directory of SVG files and writes the manifest.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use walkdir::WalkDir;

use drawkit_transform::{
    convert_svg, ComponentEmitter, ReactEmitter, StylePolicy, TransformContext,
};

use crate::asset::{AssetError, SourceAsset};
use crate::manifest::{ManifestError, RegistryItem, RegistryManifest, DEFAULT_SCHEMA};

/// Log a progress line every this many converted assets.
const PROGRESS_INTERVAL: usize = 100;

/// Configuration for a conversion run.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory containing the source SVG files
    pub source_dir: PathBuf,

    /// Extension of source files, without the dot
    pub extension: String,

    /// Directory receiving `<name>/<name>.tsx`
    pub output_dir: PathBuf,

    /// Library copy of the manifest
    pub manifest_path: PathBuf,

    /// Publicly served copy of the manifest
    pub public_manifest_path: PathBuf,

    /// `$schema` URL of the manifest
    pub schema: String,

    /// Registry name
    pub registry_name: String,

    /// Registry homepage
    pub homepage: String,

    /// Prefix of file paths listed in the manifest
    pub files_prefix: String,

    /// Default sizing classes of generated components
    pub class_name: String,

    /// Module the `cn` helper is imported from
    pub utils_import: String,

    /// Handling of malformed style declarations
    pub style_policy: StylePolicy,

    /// Convert assets on the rayon thread pool
    pub parallel: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("svgs"),
            extension: "svg".to_string(),
            output_dir: PathBuf::from("registry/new-york/illustrations"),
            manifest_path: PathBuf::from("registry.json"),
            public_manifest_path: PathBuf::from("public/r/registry.json"),
            schema: DEFAULT_SCHEMA.to_string(),
            registry_name: "illustrations".to_string(),
            homepage: String::new(),
            files_prefix: "registry/new-york/illustrations".to_string(),
            class_name: drawkit_transform::generator::DEFAULT_CLASS_NAME.to_string(),
            utils_import: drawkit_transform::generator::DEFAULT_UTILS_IMPORT.to_string(),
            style_policy: StylePolicy::default(),
            parallel: true,
        }
    }
}

/// Result of a conversion run.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Assets converted and listed in the manifest
    pub converted: usize,

    /// Assets that failed at some stage
    pub errored: usize,

    /// Reserved; no rule currently skips an asset
    pub skipped: usize,

    /// Why each errored asset failed, in discovery order
    pub failures: Vec<AssetFailure>,

    /// Identifiers generated by more than one asset
    pub collisions: Vec<IdentifierCollision>,

    /// The manifest that was written
    pub manifest: Option<RegistryManifest>,

    /// Total run time in milliseconds
    pub duration_ms: u64,
}

/// A single failed asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFailure {
    pub file_name: String,
    pub reason: String,
}

/// Several assets mapping to the same component identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierCollision {
    pub identifier: String,
    pub names: Vec<String>,
}

/// Fatal errors that abort the whole run.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Source directory not found: {0}")]
    SourceNotFound(String),

    #[error("Failed to read source directory: {0}")]
    ReadError(String),

    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

/// A successfully converted asset.
#[derive(Debug)]
struct ConvertedAsset {
    identifier: String,
    item: RegistryItem,
}

/// Batch converter producing components and the registry manifest.
pub struct RegistryBuilder {
    config: BuildConfig,
    emitter: ReactEmitter,
    context: TransformContext,
}

impl RegistryBuilder {
    /// Create a new registry builder.
    pub fn new(config: BuildConfig) -> Self {
        let emitter = ReactEmitter::new()
            .with_class_name(config.class_name.clone())
            .with_utils_import(config.utils_import.clone());
        let context = TransformContext {
            style_policy: config.style_policy,
        };

        Self {
            config,
            emitter,
            context,
        }
    }

    /// Convert every asset and write the manifest to both locations.
    ///
    /// Per-asset failures are logged and counted. Only discovery and
    /// manifest writes can fail the run.
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        let start = Instant::now();

        let paths = self.discover_assets()?;
        tracing::info!("Found {} SVG files to convert", paths.len());

        // Indexed collect keeps discovery order regardless of completion order
        let outcomes: Vec<Result<ConvertedAsset, AssetError>> = if self.config.parallel {
            paths.par_iter().map(|path| self.convert_asset(path)).collect()
        } else {
            paths.iter().map(|path| self.convert_asset(path)).collect()
        };

        let mut report = BuildReport::default();
        let mut manifest = RegistryManifest::new(
            self.config.schema.clone(),
            self.config.registry_name.clone(),
            self.config.homepage.clone(),
        );
        let mut identifiers: Vec<(String, String)> = Vec::new();

        for (path, outcome) in paths.iter().zip(outcomes) {
            match outcome {
                Ok(converted) => {
                    identifiers.push((converted.identifier, converted.item.name.clone()));
                    manifest.items.push(converted.item);
                    report.converted += 1;

                    if report.converted % PROGRESS_INTERVAL == 0 {
                        tracing::info!("Converted {}/{} files...", report.converted, paths.len());
                    }
                }
                Err(e) => {
                    let file_name = display_name(path);
                    tracing::warn!("Error converting {}: {}", file_name, e);
                    report.errored += 1;
                    report.failures.push(AssetFailure {
                        file_name,
                        reason: e.to_string(),
                    });
                }
            }
        }

        report.collisions = find_collisions(&identifiers);
        for collision in &report.collisions {
            tracing::warn!(
                "Identifier {} is generated by several assets: {}",
                collision.identifier,
                collision.names.join(", ")
            );
        }

        tracing::info!("Updating registry manifest...");
        manifest.write_to(&[
            self.config.manifest_path.clone(),
            self.config.public_manifest_path.clone(),
        ])?;

        report.manifest = Some(manifest);
        report.duration_ms = start.elapsed().as_millis() as u64;

        Ok(report)
    }

    /// List source files, sorted by file name.
    fn discover_assets(&self) -> Result<Vec<PathBuf>, BuildError> {
        let source_dir = &self.config.source_dir;

        if !source_dir.is_dir() {
            return Err(BuildError::SourceNotFound(source_dir.display().to_string()));
        }

        let mut paths = Vec::new();

        for entry in WalkDir::new(source_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                // Only the root listing is fatal; a bad asset fails later on read
                Err(e) if e.depth() == 0 => return Err(BuildError::ReadError(e.to_string())),
                Err(e) => {
                    if let Some(path) = e.path().filter(|p| self.has_extension(p)) {
                        paths.push(path.to_path_buf());
                    } else {
                        tracing::debug!("Skipping unreadable entry: {}", e);
                    }
                    continue;
                }
            };

            if !entry.file_type().is_file() || !self.has_extension(entry.path()) {
                continue;
            }

            paths.push(entry.into_path());
        }

        Ok(paths)
    }

    fn has_extension(&self, path: &Path) -> bool {
        path.extension().and_then(|e| e.to_str()) == Some(self.config.extension.as_str())
    }

    /// Read, transform and write one asset.
    fn convert_asset(&self, path: &Path) -> Result<ConvertedAsset, AssetError> {
        let asset = SourceAsset::read(path)?;
        let artifact = convert_svg(&asset.stem, &asset.raw_markup, &self.emitter, &self.context)?;

        let file_name = format!("{}.{}", asset.stem, self.emitter.extension());
        let output_dir = self.config.output_dir.join(&asset.stem);
        fs::create_dir_all(&output_dir).map_err(|source| AssetError::Write {
            path: output_dir.display().to_string(),
            source,
        })?;

        let output_path = output_dir.join(&file_name);
        fs::write(&output_path, &artifact.source).map_err(|source| AssetError::Write {
            path: output_path.display().to_string(),
            source,
        })?;

        tracing::debug!("Converted {} -> {}", asset.file_name, output_path.display());

        let registry_path = format!(
            "{}/{}/{}",
            self.config.files_prefix.trim_end_matches('/'),
            asset.stem,
            file_name
        );

        Ok(ConvertedAsset {
            identifier: artifact.identifier,
            item: RegistryItem::component(&asset.stem, &artifact.title, registry_path),
        })
    }
}

/// Group registry names by identifier and keep groups with several members.
fn find_collisions(identifiers: &[(String, String)]) -> Vec<IdentifierCollision> {
    let mut by_identifier: BTreeMap<&str, Vec<String>> = BTreeMap::new();

    for (identifier, name) in identifiers {
        by_identifier
            .entry(identifier.as_str())
            .or_default()
            .push(name.clone());
    }

    by_identifier
        .into_iter()
        .filter(|(_, names)| names.len() > 1)
        .map(|(identifier, names)| IdentifierCollision {
            identifier: identifier.to_string(),
            names,
        })
        .collect()
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::load_manifest;
    use tempfile::{tempdir, TempDir};

    const VALID_SVG: &str = r#"<svg viewBox="0 0 10 10"><path stroke-width="1" d="M0 0"/></svg>"#;

    fn config_for(temp: &TempDir) -> BuildConfig {
        BuildConfig {
            source_dir: temp.path().join("svgs"),
            output_dir: temp.path().join("out"),
            manifest_path: temp.path().join("registry.json"),
            public_manifest_path: temp.path().join("public").join("r").join("registry.json"),
            registry_name: "test-registry".to_string(),
            homepage: "https://example.com".to_string(),
            files_prefix: "registry/illustrations/".to_string(),
            ..Default::default()
        }
    }

    fn write_sources(temp: &TempDir, files: &[(&str, &str)]) {
        let dir = temp.path().join("svgs");
        fs::create_dir_all(&dir).unwrap();
        for (name, content) in files {
            fs::write(dir.join(name), content).unwrap();
        }
    }

    fn item_names(manifest: &RegistryManifest) -> Vec<&str> {
        manifest.items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn converts_directory_in_sorted_order() {
        let temp = tempdir().unwrap();
        write_sources(
            &temp,
            &[
                ("zebra.svg", VALID_SVG),
                ("3d-world.svg", VALID_SVG),
                ("apple.svg", VALID_SVG),
                ("notes.txt", "ignored"),
            ],
        );

        let report = RegistryBuilder::new(config_for(&temp)).build().unwrap();

        assert_eq!(report.converted, 3);
        assert_eq!(report.errored, 0);
        assert_eq!(report.skipped, 0);

        let manifest = load_manifest(&temp.path().join("registry.json")).unwrap();
        assert_eq!(item_names(&manifest), vec!["3d-world", "apple", "zebra"]);
        assert_eq!(manifest.name, "test-registry");
        assert_eq!(
            manifest.items[0].files[0].path,
            "registry/illustrations/3d-world/3d-world.tsx"
        );
        assert_eq!(manifest.items[0].title, "3d World");

        let component =
            fs::read_to_string(temp.path().join("out/3d-world/3d-world.tsx")).unwrap();
        assert!(component.contains("export const ThreeDWorld"));
        assert!(component.contains(r#"strokeWidth="1""#));
    }

    #[test]
    fn corrupted_asset_is_counted_and_excluded() {
        let temp = tempdir().unwrap();
        write_sources(
            &temp,
            &[
                ("a-first.svg", VALID_SVG),
                ("b-broken.svg", "this is not markup"),
                ("c-third.svg", VALID_SVG),
            ],
        );

        let report = RegistryBuilder::new(config_for(&temp)).build().unwrap();

        assert_eq!(report.converted, 2);
        assert_eq!(report.errored, 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].file_name, "b-broken.svg");
        assert!(report.failures[0].reason.contains("Missing <svg> root"));

        let manifest = load_manifest(&temp.path().join("registry.json")).unwrap();
        assert_eq!(item_names(&manifest), vec!["a-first", "c-third"]);
        assert!(!temp.path().join("out/b-broken").exists());
    }

    #[cfg(unix)]
    #[test]
    fn dangling_links_do_not_abort_the_run() {
        use std::os::unix::fs::symlink;

        let temp = tempdir().unwrap();
        write_sources(&temp, &[("a.svg", VALID_SVG)]);
        let dir = temp.path().join("svgs");
        symlink(temp.path().join("missing.svg"), dir.join("b.svg")).unwrap();
        symlink(temp.path().join("missing.txt"), dir.join("notes.txt")).unwrap();

        let report = RegistryBuilder::new(config_for(&temp)).build().unwrap();

        assert_eq!(report.converted, 1);
        assert_eq!(report.errored, 1);
        assert_eq!(report.failures[0].file_name, "b.svg");
        let manifest = load_manifest(&temp.path().join("registry.json")).unwrap();
        assert_eq!(item_names(&manifest), vec!["a"]);
    }

    #[test]
    fn unreadable_asset_is_counted_as_errored() {
        let temp = tempdir().unwrap();
        write_sources(&temp, &[("good.svg", VALID_SVG)]);
        fs::write(temp.path().join("svgs/binary.svg"), [0xff, 0xfe, 0x00]).unwrap();

        let report = RegistryBuilder::new(config_for(&temp)).build().unwrap();

        assert_eq!(report.converted, 1);
        assert_eq!(report.errored, 1);
        assert_eq!(report.failures[0].file_name, "binary.svg");
        assert!(report.failures[0].reason.starts_with("Failed to read"));
        let manifest = load_manifest(&temp.path().join("registry.json")).unwrap();
        assert_eq!(item_names(&manifest), vec!["good"]);
    }

    #[test]
    fn invalid_identifier_stem_is_counted_as_errored() {
        let temp = tempdir().unwrap();
        write_sources(&temp, &[("good.svg", VALID_SVG), ("my.icon.svg", VALID_SVG)]);

        let report = RegistryBuilder::new(config_for(&temp)).build().unwrap();

        assert_eq!(report.converted, 1);
        assert_eq!(report.errored, 1);
        assert_eq!(report.failures[0].file_name, "my.icon.svg");
        assert!(!temp.path().join("out/my.icon").exists());
        let manifest = load_manifest(&temp.path().join("registry.json")).unwrap();
        assert_eq!(item_names(&manifest), vec!["good"]);
    }

    #[test]
    fn blocked_output_is_counted_as_errored() {
        let temp = tempdir().unwrap();
        write_sources(&temp, &[("one.svg", VALID_SVG)]);
        fs::write(temp.path().join("out"), "blocks the output directory").unwrap();

        let report = RegistryBuilder::new(config_for(&temp)).build().unwrap();

        assert_eq!(report.converted, 0);
        assert_eq!(report.errored, 1);
        assert!(report.failures[0].reason.starts_with("Failed to write"));
        let manifest = load_manifest(&temp.path().join("registry.json")).unwrap();
        assert!(manifest.items.is_empty());
    }

    #[test]
    fn sequential_and_parallel_runs_agree() {
        let temp = tempdir().unwrap();
        let files: Vec<(String, &str)> = (0..40)
            .map(|i| {
                let content = if i % 7 == 3 { "<broken" } else { VALID_SVG };
                (format!("asset-{i:02}.svg"), content)
            })
            .collect();
        let refs: Vec<(&str, &str)> = files.iter().map(|(n, c)| (n.as_str(), *c)).collect();
        write_sources(&temp, &refs);

        let parallel = RegistryBuilder::new(config_for(&temp)).build().unwrap();
        let sequential = RegistryBuilder::new(BuildConfig {
            parallel: false,
            ..config_for(&temp)
        })
        .build()
        .unwrap();

        assert_eq!(parallel.converted, sequential.converted);
        assert_eq!(parallel.errored, sequential.errored);
        assert_eq!(parallel.failures, sequential.failures);
        assert_eq!(parallel.manifest, sequential.manifest);

        let names = item_names(parallel.manifest.as_ref().unwrap());
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn missing_source_directory_is_fatal_and_writes_nothing() {
        let temp = tempdir().unwrap();

        let result = RegistryBuilder::new(config_for(&temp)).build();

        assert!(matches!(result, Err(BuildError::SourceNotFound(_))));
        assert!(!temp.path().join("registry.json").exists());
        assert!(!temp.path().join("public").exists());
    }

    #[test]
    fn source_path_that_is_a_file_is_fatal() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("svgs"), "file, not dir").unwrap();

        let result = RegistryBuilder::new(config_for(&temp)).build();

        assert!(matches!(result, Err(BuildError::SourceNotFound(_))));
    }

    #[test]
    fn unwritable_manifest_is_fatal() {
        let temp = tempdir().unwrap();
        write_sources(&temp, &[("one.svg", VALID_SVG)]);
        fs::write(temp.path().join("public"), "blocks the directory").unwrap();

        let result = RegistryBuilder::new(config_for(&temp)).build();

        assert!(matches!(result, Err(BuildError::Manifest(_))));
    }

    #[test]
    fn writes_both_manifest_copies() {
        let temp = tempdir().unwrap();
        write_sources(&temp, &[("one.svg", VALID_SVG)]);

        RegistryBuilder::new(config_for(&temp)).build().unwrap();

        let library = fs::read_to_string(temp.path().join("registry.json")).unwrap();
        let public =
            fs::read_to_string(temp.path().join("public/r/registry.json")).unwrap();
        assert_eq!(library, public);
        assert!(library.ends_with("}\n"));
    }

    #[test]
    fn empty_directory_writes_empty_manifest() {
        let temp = tempdir().unwrap();
        write_sources(&temp, &[]);

        let report = RegistryBuilder::new(config_for(&temp)).build().unwrap();

        assert_eq!(report.converted, 0);
        let manifest = load_manifest(&temp.path().join("registry.json")).unwrap();
        assert!(manifest.items.is_empty());
    }

    #[test]
    fn reports_identifier_collisions_without_failing() {
        let temp = tempdir().unwrap();
        write_sources(
            &temp,
            &[("3d.svg", VALID_SVG), ("three-d.svg", VALID_SVG), ("other.svg", VALID_SVG)],
        );

        let report = RegistryBuilder::new(config_for(&temp)).build().unwrap();

        assert_eq!(report.converted, 3);
        assert_eq!(
            report.collisions,
            vec![IdentifierCollision {
                identifier: "ThreeD".to_string(),
                names: vec!["3d".to_string(), "three-d".to_string()],
            }]
        );
        assert!(temp.path().join("out/3d/3d.tsx").exists());
        assert!(temp.path().join("out/three-d/three-d.tsx").exists());
    }

    #[test]
    fn lenient_styles_recover_malformed_declarations() {
        let temp = tempdir().unwrap();
        let source = r#"<svg><g style="oops; fill: red"/></svg>"#;
        write_sources(&temp, &[("styled.svg", source)]);

        let strict = RegistryBuilder::new(config_for(&temp)).build().unwrap();
        assert_eq!(strict.errored, 1);

        let lenient = RegistryBuilder::new(BuildConfig {
            style_policy: StylePolicy::Lenient,
            ..config_for(&temp)
        })
        .build()
        .unwrap();
        assert_eq!(lenient.converted, 1);
        let component = fs::read_to_string(temp.path().join("out/styled/styled.tsx")).unwrap();
        assert!(component.contains(r#"<g style={{fill: "red"}}/>"#));
    }
}
