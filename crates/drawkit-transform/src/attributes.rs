//! SVG presentation attribute renaming for JSX.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Hyphenated SVG attributes and their JSX names.
pub const ATTRIBUTE_MAP: [(&str, &str); 16] = [
    ("stroke-width", "strokeWidth"),
    ("stroke-miterlimit", "strokeMiterlimit"),
    ("stroke-linecap", "strokeLinecap"),
    ("stroke-linejoin", "strokeLinejoin"),
    ("stroke-dasharray", "strokeDasharray"),
    ("stroke-dashoffset", "strokeDashoffset"),
    ("fill-opacity", "fillOpacity"),
    ("stroke-opacity", "strokeOpacity"),
    ("font-family", "fontFamily"),
    ("font-size", "fontSize"),
    ("font-weight", "fontWeight"),
    ("text-anchor", "textAnchor"),
    ("text-decoration", "textDecoration"),
    ("clip-path", "clipPath"),
    ("clip-rule", "clipRule"),
    ("fill-rule", "fillRule"),
];

static ATTRIBUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let names = ATTRIBUTE_MAP
        .iter()
        .map(|(kebab, _)| regex::escape(kebab))
        .collect::<Vec<_>>()
        .join("|");
    // Match: <whitespace>stroke-width=" (value is left alone)
    Regex::new(&format!(r#"(\s)({names})=""#)).expect("Invalid attribute regex")
});

/// Rename every mapped `name="value"` attribute to its camelCase form.
///
/// Only names are rewritten; values and surrounding whitespace are kept
/// byte for byte.
pub fn normalize_attributes(markup: &str) -> String {
    ATTRIBUTE_RE
        .replace_all(markup, |caps: &Captures| {
            let kebab = &caps[2];
            let camel = jsx_name(kebab).unwrap_or(kebab);
            format!("{}{}=\"", &caps[1], camel)
        })
        .into_owned()
}

/// Look up the JSX name of a hyphenated attribute.
pub fn jsx_name(kebab: &str) -> Option<&'static str> {
    ATTRIBUTE_MAP
        .iter()
        .find(|(name, _)| *name == kebab)
        .map(|(_, camel)| *camel)
}
