//! Text content escaping for JSX children.

use regex::Regex;
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"));

/// Replace `{` and `}` in text between tags with character references.
///
/// Braces open expression containers in JSX, so CSS in `<style>` elements or
/// literal braces in `<text>` would otherwise break the component. Tags are
/// copied through unchanged.
pub fn escape_text_braces(markup: &str) -> String {
    let mut output = String::with_capacity(markup.len());
    let mut last = 0;

    for tag in TAG_RE.find_iter(markup) {
        push_escaped(&mut output, &markup[last..tag.start()]);
        output.push_str(tag.as_str());
        last = tag.end();
    }

    push_escaped(&mut output, &markup[last..]);
    output
}

fn push_escaped(output: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '{' => output.push_str("&#123;"),
            '}' => output.push_str("&#125;"),
            _ => output.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn escapes_css_in_style_elements() {
        assert_eq!(
            escape_text_braces(r#"<style>.a{fill:red}</style><rect class="a"/>"#),
            r#"<style>.a&#123;fill:red&#125;</style><rect class="a"/>"#
        );
    }

    #[test]
    fn leaves_braces_inside_tags_alone() {
        let markup = r#"<g data-x="{a}"><text>{b}</text></g>"#;

        assert_eq!(
            escape_text_braces(markup),
            r#"<g data-x="{a}"><text>&#123;b&#125;</text></g>"#
        );
    }

    #[test]
    fn escapes_leading_and_trailing_text() {
        assert_eq!(escape_text_braces("{<g/>}"), "&#123;<g/>&#125;");
        assert_eq!(escape_text_braces("plain"), "plain");
    }
}
