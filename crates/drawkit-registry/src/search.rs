//! Manifest queries used by listing and install front-ends.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::manifest::{RegistryItem, RegistryManifest};

/// Maximum number of items returned by a search.
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// Lowercase and drop everything outside `[a-z0-9]`.
pub fn normalize_for_search(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Find items whose name or title contains the query, ignoring case and
/// punctuation.
///
/// A blank query returns the first `limit` items. Results keep manifest order.
pub fn filter_items<'a>(
    manifest: &'a RegistryManifest,
    query: &str,
    limit: usize,
) -> Vec<&'a RegistryItem> {
    if query.trim().is_empty() {
        return manifest.items.iter().take(limit).collect();
    }

    let needle = normalize_for_search(query);

    manifest
        .items
        .iter()
        .filter(|item| {
            normalize_for_search(&item.name).contains(&needle)
                || normalize_for_search(&item.title).contains(&needle)
        })
        .take(limit)
        .collect()
}

/// Package manager used to run the shadcn installer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Pnpm,
    Yarn,
    Npm,
}

impl PackageManager {
    /// Command prefix that runs `shadcn add`.
    fn runner(&self) -> &'static str {
        match self {
            Self::Pnpm => "pnpm dlx shadcn@latest add",
            Self::Yarn => "yarn shadcn@latest add",
            Self::Npm => "npx shadcn@latest add",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Npm => "npm",
        };
        f.write_str(name)
    }
}

impl FromStr for PackageManager {
    type Err = UnknownPackageManager;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pnpm" => Ok(Self::Pnpm),
            "yarn" => Ok(Self::Yarn),
            "npm" => Ok(Self::Npm),
            _ => Err(UnknownPackageManager(s.to_string())),
        }
    }
}

/// Error for package manager names other than pnpm, yarn or npm.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown package manager: {0} (expected pnpm, yarn or npm)")]
pub struct UnknownPackageManager(pub String);

/// Build the command that installs one registry item.
pub fn install_command(base_url: &str, name: &str, package_manager: PackageManager) -> String {
    format!(
        "{} {}/r/{}.json",
        package_manager.runner(),
        base_url.trim_end_matches('/'),
        name
    )
}
