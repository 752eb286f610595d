//! Batch conversion of SVG directories into a component registry.
//!
//! Discovers SVG files, converts each one with `drawkit-transform`, writes the
//! generated components and aggregates them into a shadcn-style manifest.

pub mod asset;
pub mod builder;
pub mod manifest;
pub mod search;

pub use asset::{AssetError, SourceAsset};
pub use builder::{
    AssetFailure, BuildConfig, BuildError, BuildReport, IdentifierCollision, RegistryBuilder,
};
pub use manifest::{
    load_manifest, ManifestError, RegistryFile, RegistryItem, RegistryManifest, COMPONENT_TYPE,
    DEFAULT_SCHEMA,
};
pub use search::{
    filter_items, install_command, normalize_for_search, PackageManager, UnknownPackageManager,
    DEFAULT_RESULT_LIMIT,
};
