//! Single-asset conversion: SVG source in, component source out.

use crate::attributes::normalize_attributes;
use crate::identifier::{is_valid_identifier, to_identifier, to_title};
use crate::parser::{parse_svg, ParsedGraphic};
use crate::style::rewrite_styles;
use crate::text::escape_text_braces;
use crate::traits::{ComponentArtifact, ComponentEmitter, TransformContext, TransformError};

/// Convert one SVG file into a component.
///
/// `stem` is the kebab-case file name without extension. Runs parse, attribute
/// renaming and style rewriting before handing the graphic to `emitter`.
pub fn convert_svg<E>(
    stem: &str,
    source: &str,
    emitter: &E,
    ctx: &TransformContext,
) -> Result<ComponentArtifact, TransformError>
where
    E: ComponentEmitter + ?Sized,
{
    let identifier = to_identifier(stem);
    if !is_valid_identifier(&identifier) {
        return Err(TransformError::InvalidIdentifier {
            stem: stem.to_string(),
            identifier,
        });
    }

    let graphic = prepare_graphic(source, ctx)?;
    let title = to_title(stem);
    let source = emitter.emit(&identifier, &title, &graphic);

    Ok(ComponentArtifact {
        identifier,
        title,
        source,
    })
}

/// Parse SVG source and normalize its inner markup for JSX.
///
/// Attribute names are rewritten before styles so the style stage only sees
/// `style` and `isolation` attributes. Text braces are escaped before styles
/// introduce `style={{...}}` expressions.
pub fn prepare_graphic(
    source: &str,
    ctx: &TransformContext,
) -> Result<ParsedGraphic, TransformError> {
    let graphic = parse_svg(source)?;
    let inner_markup = normalize_attributes(&graphic.inner_markup);
    let inner_markup = escape_text_braces(&inner_markup);
    let inner_markup = rewrite_styles(&inner_markup, ctx.style_policy)?;

    Ok(ParsedGraphic {
        inner_markup,
        ..graphic
    })
}
