//! Minimal structural parsing of SVG source.
//!
//! This is not a validating XML parser. It strips the prolog, doctype and
//! comments, checks that an `<svg>` root is opened and closed, and hands back
//! the root `viewBox` plus the raw inner markup.

use regex::Regex;
use std::sync::LazyLock;

/// View box used when the root element does not declare one.
pub const DEFAULT_VIEW_BOX: &str = "0 0 100 100";

/// The root element split into the pieces a component needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedGraphic {
    /// Root `viewBox` attribute
    pub view_box: String,

    /// Everything between `<svg ...>` and `</svg>`, trimmed
    pub inner_markup: String,
}

/// Errors that can occur when parsing SVG source.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Missing <svg> root element")]
    MissingRoot,

    #[error("Unclosed <svg> root element - missing </svg>")]
    UnclosedRoot,
}

static XML_PROLOG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<\?xml[^?]*\?>").expect("Invalid XML prolog regex"));

static DOCTYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<!DOCTYPE[^>]*>").expect("Invalid doctype regex"));

// JSX has no comment syntax for markup, so comments are dropped entirely.
static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("Invalid comment regex"));

static ROOT_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<svg\b([^>]*)>").expect("Invalid root open regex"));

static VIEW_BOX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\sviewBox="([^"]*)""#).expect("Invalid viewBox regex"));

const ROOT_CLOSE: &str = "</svg>";

/// Parse SVG source into its root view box and inner markup.
pub fn parse_svg(source: &str) -> Result<ParsedGraphic, ParseError> {
    let without_prolog = XML_PROLOG_RE.replace_all(source, "");
    let without_doctype = DOCTYPE_RE.replace_all(&without_prolog, "");
    let cleaned = COMMENT_RE.replace_all(&without_doctype, "");

    let open = ROOT_OPEN_RE
        .captures(&cleaned)
        .ok_or(ParseError::MissingRoot)?;
    let open_span = open.get(0).ok_or(ParseError::MissingRoot)?;
    let attributes = open.get(1).map_or("", |m| m.as_str());
    let view_box = extract_view_box(attributes);

    // <svg ... /> has no content and no closing tag
    if attributes.trim_end().ends_with('/') {
        return Ok(ParsedGraphic {
            view_box,
            inner_markup: String::new(),
        });
    }

    let close = cleaned
        .rfind(ROOT_CLOSE)
        .filter(|&pos| pos >= open_span.end())
        .ok_or(ParseError::UnclosedRoot)?;

    Ok(ParsedGraphic {
        view_box,
        inner_markup: cleaned[open_span.end()..close].trim().to_string(),
    })
}

/// Extract the `viewBox` value from root attributes.
fn extract_view_box(attributes: &str) -> String {
    VIEW_BOX_RE
        .captures(attributes)
        .and_then(|c| c.get(1))
        .map_or(DEFAULT_VIEW_BOX, |m| m.as_str())
        .to_string()
}
