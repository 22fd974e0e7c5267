//! Identifier case conversion between snake_case and camelCase/PascalCase

use std::sync::LazyLock;

use regex::Regex;

static BEFORE_CAPITALIZED_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.)([A-Z][a-z]+)").unwrap());
static LOWER_THEN_UPPER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());
static LOWER_THEN_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([a-z])([0-9])").unwrap());
static LOWER_OR_DIGIT_THEN_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

/// Convert a snake_case identifier to camelCase or PascalCase.
///
/// The identifier is split on `_`. With `capitalize_first` every segment has
/// its first character upper-cased; without it the first segment is kept as
/// given. An empty segment (from consecutive, leading or trailing
/// underscores) is emitted as a literal `_` instead of being collapsed.
///
/// Only first characters change case, so a converted identifier is a fixed
/// point as long as the input had no run of two or more underscores between
/// segments. Such a run leaves `_` markers in the output, which a second
/// conversion splits on again: `standard__lrs` becomes `Standard_Lrs`, then
/// `StandardLrs`.
///
/// ```
/// use recon_tree::case::to_camel;
///
/// assert_eq!(to_camel("standard_lrs", false), "standardLrs");
/// assert_eq!(to_camel("standard_lrs", true), "StandardLrs");
/// assert_eq!(to_camel("Standard", true), "Standard");
/// assert_eq!(to_camel("a__b", true), "A_B");
/// ```
pub fn to_camel(identifier: &str, capitalize_first: bool) -> String {
    let mut segments = identifier.split('_');
    let mut camel = String::with_capacity(identifier.len());

    if !capitalize_first {
        if let Some(first) = segments.next() {
            camel.push_str(first);
        }
    }

    for segment in segments {
        push_capitalized(&mut camel, segment);
    }

    camel
}

fn push_capitalized(out: &mut String, segment: &str) {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
        None => out.push('_'),
    }
}

/// Convert a camelCase or PascalCase identifier to snake_case.
///
/// Word boundaries are inserted before capitalized words, between a
/// lower-case letter and an upper-case letter or digit, and the result is
/// lower-cased. Runs of capitals are treated as one acronym.
///
/// ```
/// use recon_tree::case::to_snake;
///
/// assert_eq!(to_snake("provisioningState"), "provisioning_state");
/// assert_eq!(to_snake("HTTPSProxy"), "https_proxy");
/// assert_eq!(to_snake("already_snake"), "already_snake");
/// ```
pub fn to_snake(identifier: &str) -> String {
    let snake = BEFORE_CAPITALIZED_WORD.replace_all(identifier, "${1}_${2}");
    let snake = LOWER_THEN_UPPER.replace_all(&snake, "${1}_${2}");
    let snake = LOWER_THEN_DIGIT.replace_all(&snake, "${1}_${2}");
    let snake = LOWER_OR_DIGIT_THEN_UPPER.replace_all(&snake, "${1}_${2}");
    snake.to_lowercase()
}
