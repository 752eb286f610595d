//! Component identifiers and titles derived from kebab-case file stems.

use regex::Regex;
use std::sync::LazyLock;

/// Spelled-out digits, indexed by value.
const DIGIT_WORDS: [&str; 10] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

static IDENTIFIER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("Invalid identifier regex")
});

/// Convert a kebab-case file stem to a PascalCase identifier.
///
/// Leading digits of every hyphen token are spelled out one by one and the
/// spelled run counts as a word of its own, so `3d-world` becomes
/// `ThreeDWorld` and `24-hours` becomes `TwoFourHours`. Digits later in a
/// token are kept as they are.
pub fn to_identifier(stem: &str) -> String {
    stem.split('-')
        .map(|token| capitalize(&spell_leading_digits(token)))
        .collect()
}

/// Build a human readable title from a kebab-case file stem.
pub fn to_title(stem: &str) -> String {
    stem.split('-').map(capitalize).collect::<Vec<_>>().join(" ")
}

/// Check whether a string can be used as a type name in generated sources.
pub fn is_valid_identifier(s: &str) -> bool {
    IDENTIFIER_RE.is_match(s)
}

fn spell_leading_digits(token: &str) -> String {
    let digits_end = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    let (digits, rest) = token.split_at(digits_end);

    if digits.is_empty() {
        return token.to_string();
    }

    let mut spelled: String = digits
        .bytes()
        .map(|b| DIGIT_WORDS[usize::from(b - b'0')])
        .collect();
    spelled.push_str(&capitalize(rest));
    spelled
}

/// Capitalize first letter of a string.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
