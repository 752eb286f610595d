//! React component code generator.

use crate::parser::ParsedGraphic;
use crate::traits::ComponentEmitter;

/// Namespace declared on every generated root element.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Sizing classes applied unless the caller overrides them.
pub const DEFAULT_CLASS_NAME: &str = "w-full h-auto";

/// Module providing the `cn` class merging helper.
pub const DEFAULT_UTILS_IMPORT: &str = "@/lib/utils";

/// Emits typed React function components (`.tsx`).
#[derive(Debug, Clone)]
pub struct ReactEmitter {
    class_name: String,
    utils_import: String,
}

impl Default for ReactEmitter {
    fn default() -> Self {
        Self {
            class_name: DEFAULT_CLASS_NAME.to_string(),
            utils_import: DEFAULT_UTILS_IMPORT.to_string(),
        }
    }
}

impl ReactEmitter {
    /// Create a new React emitter with default class name and utils import.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default sizing classes merged with `props.className`.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Set the module the `cn` helper is imported from.
    pub fn with_utils_import(mut self, utils_import: impl Into<String>) -> Self {
        self.utils_import = utils_import.into();
        self
    }
}

impl ComponentEmitter for ReactEmitter {
    fn name(&self) -> &'static str {
        "react"
    }

    fn extension(&self) -> &'static str {
        "tsx"
    }

    fn emit(&self, identifier: &str, title: &str, graphic: &ParsedGraphic) -> String {
        generate_component(
            identifier,
            title,
            graphic,
            &self.class_name,
            &self.utils_import,
        )
    }
}

/// Generate a React component wrapping the given graphic.
///
/// Props are spread onto the root `<svg>` before `className`, so callers can
/// pass any SVG attribute while their classes are merged with the defaults.
pub fn generate_component(
    identifier: &str,
    title: &str,
    graphic: &ParsedGraphic,
    class_name: &str,
    utils_import: &str,
) -> String {
    let view_box = escape_string(&graphic.view_box);
    let class_name = escape_string(class_name);
    let utils_import = escape_string(utils_import);
    let title = escape_jsx_text(title);
    let namespace = SVG_NAMESPACE;

    let content = if graphic.inner_markup.is_empty() {
        String::new()
    } else {
        format!("\n      {}", graphic.inner_markup)
    };

    format!(
        r#"import {{ cn }} from "{utils_import}"
import {{ type SVGProps }} from "react"

export interface {identifier}Props extends SVGProps<SVGSVGElement> {{}}

export const {identifier} = (props: {identifier}Props) => {{
  return (
    <svg
      xmlns="{namespace}"
      viewBox="{view_box}"
      {{...props}}
      className={{cn("{class_name}", props.className)}}
      role="img"
    >
      <title>{title}</title>{content}
    </svg>
  )
}}
"#
    )
}

/// Escape a string for a double-quoted JavaScript or JSX attribute literal.
fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Escape characters with meaning in JSX text children.
fn escape_jsx_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('{', "&#123;")
        .replace('}', "&#125;")
}
