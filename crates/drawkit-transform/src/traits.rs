//! Trait definitions for component emitters.

use crate::parser::{ParseError, ParsedGraphic};
use crate::style::{StyleError, StylePolicy};

/// Context for transforming an SVG asset.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransformContext {
    /// How malformed inline style declarations are handled
    pub style_policy: StylePolicy,
}

/// Result of transforming an SVG asset into a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentArtifact {
    /// Component type name (e.g., "ThreeDWorld")
    pub identifier: String,

    /// Accessible title (e.g., "3d World")
    pub title: String,

    /// Generated component source
    pub source: String,
}

/// Errors that can occur during transformation.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Style error: {0}")]
    Style(#[from] StyleError),

    #[error("Invalid component identifier {identifier:?} derived from {stem:?}")]
    InvalidIdentifier { stem: String, identifier: String },
}

/// Trait for target-specific component emitters.
pub trait ComponentEmitter: Send + Sync {
    /// Target identifier (e.g., "react")
    fn name(&self) -> &'static str;

    /// File extension of emitted sources
    fn extension(&self) -> &'static str;

    /// Wrap normalized markup into a standalone component source.
    ///
    /// # Arguments
    /// * `identifier` - The component type name
    /// * `title` - Accessible title placed as the first child of the root
    /// * `graphic` - Root `viewBox` and already normalized inner markup
    fn emit(&self, identifier: &str, title: &str, graphic: &ParsedGraphic) -> String;
}
