//! Utility Functions
//!
//! Name casing and literal helpers shared by the resolver, the
//! attribute parser and the emitter.

use once_cell::sync::Lazy;
use regex::Regex;

/// Separator between a hint prefix and the rest of a name (`mail::button`)
pub const HINT_PATH_DELIMITER: &str = "::";

/// Separator between the segments of a type identifier
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Runs of characters that separate words for studly/camel casing
static WORD_SEPARATOR_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-_\s]+").unwrap());

/// Numeric literals as the host language understands them
static NUMERIC_REGEXP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?\s*$").unwrap()
});

/// Uppercase the first character (ASCII only)
pub fn upper_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Lowercase the first character (ASCII only)
pub fn lower_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Convert `foo-bar_baz` to `FooBarBaz`
pub fn studly_case(input: &str) -> String {
    WORD_SEPARATOR_REGEXP
        .split(input)
        .map(upper_first)
        .collect()
}

/// Convert `foo-bar_baz` to `fooBarBaz`
pub fn camel_case(input: &str) -> String {
    lower_first(&studly_case(input))
}

/// Strip one pair of surrounding quotes when the value starts with a quote.
///
/// Mirrors the host's `substr($value, 1, -1)`: the last character is
/// dropped even when it is not the matching quote.
pub fn strip_quotes(value: &str) -> &str {
    if !value.starts_with(['"', '\'']) {
        return value;
    }
    let last_len = value.chars().last().map(char::len_utf8).unwrap_or(0);
    let end = value.len() - last_len;
    if end < 1 {
        return "";
    }
    &value[1..end]
}

/// Whether the host language would treat `value` as a numeric literal
pub fn is_numeric(value: &str) -> bool {
    NUMERIC_REGEXP.is_match(value)
}

/// Split `prefix::rest` at the first hint delimiter
pub fn split_hint(name: &str) -> Option<(&str, &str)> {
    name.split_once(HINT_PATH_DELIMITER)
}

/// Everything after the first occurrence of `search`, or the whole
/// subject when `search` is absent
pub fn str_after<'a>(subject: &'a str, search: &str) -> &'a str {
    if search.is_empty() {
        return subject;
    }
    match subject.find(search) {
        Some(idx) => &subject[idx + search.len()..],
        None => subject,
    }
}

// Tests are in test/ directory
