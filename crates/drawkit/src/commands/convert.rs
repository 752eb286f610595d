//! Batch conversion command.

use std::path::PathBuf;

use anyhow::Result;
use drawkit_registry::{BuildConfig, BuildReport, RegistryBuilder};

use crate::config::ConfigFile;

/// Command line overrides for a conversion run.
#[derive(Debug, Default)]
pub struct ConvertOptions {
    pub source: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub sequential: bool,
}

/// Apply command line overrides on top of the file configuration.
fn resolve_config(file_config: &ConfigFile, options: ConvertOptions) -> BuildConfig {
    let mut config = file_config.build_config();

    if let Some(source) = options.source {
        config.source_dir = source;
    }
    if let Some(output) = options.output {
        config.output_dir = output;
    }
    if options.sequential {
        config.parallel = false;
    }

    config
}

/// Run the convert command.
pub fn run(file_config: &ConfigFile, options: ConvertOptions) -> Result<BuildReport> {
    let config = resolve_config(file_config, options);

    tracing::info!(
        "Converting SVG files from {} into {}",
        config.source_dir.display(),
        config.output_dir.display()
    );

    let report = RegistryBuilder::new(config.clone()).build()?;

    tracing::info!("Registry written to {}", config.manifest_path.display());
    tracing::info!("Registry written to {}", config.public_manifest_path.display());
    tracing::info!("Conversion complete in {}ms", report.duration_ms);
    tracing::info!("Converted: {}", report.converted);
    tracing::info!("Errors: {}", report.errored);
    tracing::info!("Skipped: {}", report.skipped);
    if !report.collisions.is_empty() {
        tracing::warn!("Identifier collisions: {}", report.collisions.len());
    }

    Ok(report)
}
