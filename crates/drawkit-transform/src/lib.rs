//! Pure transforms for turning SVG files into React components.
//!
//! Everything in this crate maps strings to strings: file stems to component
//! identifiers, SVG markup to JSX-ready markup, and graphics to component
//! source. Reading and writing files is left to `drawkit-registry`.

pub mod attributes;
pub mod convert;
pub mod generator;
pub mod identifier;
pub mod parser;
pub mod style;
pub mod text;
pub mod traits;

pub use attributes::normalize_attributes;
pub use convert::{convert_svg, prepare_graphic};
pub use generator::{generate_component, ReactEmitter};
pub use identifier::{is_valid_identifier, to_identifier, to_title};
pub use parser::{parse_svg, ParseError, ParsedGraphic, DEFAULT_VIEW_BOX};
pub use style::{rewrite_styles, StyleDeclarations, StyleError, StylePolicy};
pub use text::escape_text_braces;
pub use traits::{ComponentArtifact, ComponentEmitter, TransformContext, TransformError};
