//! Inline style rewriting for JSX.
//!
//! Runs in two ordered stages. First, standalone `isolation` attributes are
//! folded into the `style` attribute of the same start tag (or become one).
//! Then every `style="..."` string is turned into a JSX style object,
//! keeping declaration order.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::identifier::is_valid_identifier;

/// How declarations without a `property: value` shape are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StylePolicy {
    /// Reject the whole style attribute with a [`StyleError`]
    #[default]
    Strict,
    /// Drop the offending declaration and keep going
    Lenient,
}

/// Errors that can occur while restructuring style attributes.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StyleError {
    #[error("Malformed style declaration: {0:?}")]
    MalformedDeclaration(String),
}

/// Ordered, de-duplicated style declarations.
///
/// A repeated property keeps its first position and takes the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclarations {
    entries: Vec<(String, String)>,
}

impl StyleDeclarations {
    /// Create an empty declaration set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a declaration.
    pub fn insert(&mut self, property: String, value: String) {
        match self.entries.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property, value)),
        }
    }

    /// Get the value of a property.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate declarations in order of appearance.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no declarations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as a JSX style expression: `{{color: "red"}}`.
    pub fn to_jsx(&self) -> String {
        let body = self
            .entries
            .iter()
            .map(|(property, value)| format!("{}: \"{}\"", object_key(property), escape_value(value)))
            .collect::<Vec<_>>()
            .join(", ");

        format!("{{{{{body}}}}}")
    }
}

static START_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[A-Za-z][^>]*>").expect("Invalid start tag regex"));

// Attribute values may use either quote style; group 1 or 2 holds the value.
static ISOLATION_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s+isolation=(?:"([^"]*)"|'([^']*)')"#)
        .expect("Invalid isolation attribute regex")
});

// Group 1 is the leading whitespace, group 2 or 3 the value.
static STYLE_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\s)style=(?:"([^"]*)"|'([^']*)')"#).expect("Invalid style attribute regex")
});

static HYPHEN_LETTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-([a-z])").expect("Invalid hyphen regex"));

/// Run both stages: marker merge, then JSX structuring.
pub fn rewrite_styles(markup: &str, policy: StylePolicy) -> Result<String, StyleError> {
    structure_styles(&merge_style_markers(markup), policy)
}

/// Fold `isolation="..."` attributes into the `style` of their start tag.
///
/// The marker becomes the leading declaration whether it comes before or
/// after `style`. A tag without `style` gets a new one in the marker's place.
pub fn merge_style_markers(markup: &str) -> String {
    START_TAG_RE
        .replace_all(markup, |caps: &Captures| merge_tag(&caps[0]))
        .into_owned()
}

fn merge_tag(tag: &str) -> String {
    let Some(marker) = ISOLATION_ATTR_RE.captures(tag) else {
        return tag.to_string();
    };
    let (Some(span), Some(value)) = (marker.get(0), marker.get(1).or_else(|| marker.get(2)))
    else {
        return tag.to_string();
    };
    let declaration = format!("isolation: {}", value.as_str());
    let stripped = format!("{}{}", &tag[..span.start()], &tag[span.end()..]);

    match STYLE_ATTR_RE
        .captures(&stripped)
        .and_then(|c| c.get(2).or_else(|| c.get(3)))
    {
        Some(value) => format!(
            "{}{}; {}{}",
            &stripped[..value.start()],
            declaration,
            value.as_str(),
            &stripped[value.end()..]
        ),
        None => format!(
            "{} style=\"{}\"{}",
            &tag[..span.start()],
            declaration,
            &tag[span.end()..]
        ),
    }
}

/// Replace every `style` attribute with a JSX style object.
pub fn structure_styles(markup: &str, policy: StylePolicy) -> Result<String, StyleError> {
    let mut output = String::with_capacity(markup.len());
    let mut last = 0;

    for caps in STYLE_ATTR_RE.captures_iter(markup) {
        let (Some(span), Some(value)) = (caps.get(0), caps.get(2).or_else(|| caps.get(3))) else {
            continue;
        };
        let declarations = parse_declarations(value.as_str(), policy)?;

        output.push_str(&markup[last..span.start()]);
        output.push_str(&caps[1]);
        output.push_str("style=");
        output.push_str(&declarations.to_jsx());
        last = span.end();
    }

    output.push_str(&markup[last..]);
    Ok(output)
}

/// Parse a CSS declaration list such as `fill: red; stroke-width: 2`.
///
/// Empty declarations are skipped. Each declaration is split at its first
/// colon, so values like `url(http://x)` survive intact.
pub fn parse_declarations(
    style: &str,
    policy: StylePolicy,
) -> Result<StyleDeclarations, StyleError> {
    let mut declarations = StyleDeclarations::new();

    for raw in style.split(';') {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }

        let pair = raw
            .split_once(':')
            .map(|(property, value)| (property.trim(), value.trim()))
            .filter(|(property, value)| !property.is_empty() && !value.is_empty());

        match (pair, policy) {
            (Some((property, value)), _) => {
                declarations.insert(to_camel_case(property), value.to_string())
            }
            (None, StylePolicy::Lenient) => continue,
            (None, StylePolicy::Strict) => {
                return Err(StyleError::MalformedDeclaration(raw.to_string()))
            }
        }
    }

    Ok(declarations)
}

/// Convert a CSS property name to its JSX form (`stroke-width` -> `strokeWidth`).
///
/// Custom properties (`--brand`) are kept verbatim.
pub fn to_camel_case(property: &str) -> String {
    if property.starts_with("--") {
        return property.to_string();
    }
    HYPHEN_LETTER_RE
        .replace_all(property, |caps: &Captures| caps[1].to_uppercase())
        .into_owned()
}

fn object_key(property: &str) -> String {
    if is_valid_identifier(property) {
        property.to_string()
    } else {
        format!("\"{}\"", escape_value(property))
    }
}

fn escape_value(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
