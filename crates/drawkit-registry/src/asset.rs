//! Source assets on disk.

use std::fs;
use std::path::{Path, PathBuf};

/// One SVG file, read once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceAsset {
    /// File name including extension (e.g., "3d-world.svg")
    pub file_name: String,

    /// File name without extension, used as registry name and output directory
    pub stem: String,

    /// Raw file contents
    pub raw_markup: String,
}

impl SourceAsset {
    /// Read an asset from disk.
    pub fn read(path: &Path) -> Result<Self, AssetError> {
        let (Some(file_name), Some(stem)) = (
            path.file_name().and_then(|n| n.to_str()),
            path.file_stem().and_then(|s| s.to_str()),
        ) else {
            return Err(AssetError::InvalidFileName(path.to_path_buf()));
        };

        let raw_markup = fs::read_to_string(path).map_err(|source| AssetError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Ok(Self {
            file_name: file_name.to_string(),
            stem: stem.to_string(),
            raw_markup,
        })
    }
}

/// Errors that fail a single asset without stopping the run.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("File name is not valid UTF-8: {0}")]
    InvalidFileName(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Transform(#[from] drawkit_transform::TransformError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn reads_name_stem_and_markup() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("3d-world.svg");
        fs::write(&path, "<svg></svg>").unwrap();

        let asset = SourceAsset::read(&path).unwrap();

        assert_eq!(asset.file_name, "3d-world.svg");
        assert_eq!(asset.stem, "3d-world");
        assert_eq!(asset.raw_markup, "<svg></svg>");
    }

    #[test]
    fn errors_on_unreadable_content() {
        let temp = tempdir().unwrap();
        let missing = SourceAsset::read(&temp.path().join("gone.svg"));
        assert!(matches!(missing, Err(AssetError::Read { .. })));

        let binary = temp.path().join("binary.svg");
        fs::write(&binary, [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(
            SourceAsset::read(&binary),
            Err(AssetError::Read { .. })
        ));
    }
}
