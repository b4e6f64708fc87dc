//! Binding Parser
//!
//! Tokenizes canonical attribute text (after the rewriter) into the
//! ordered attribute collection of one tag and classifies each value
//! as a literal, a bound expression or an attribute bag spread.

use super::attributes::{Attribute, AttributeKind, BoundAttributeMarks, ParsedAttributes};
use crate::chars;
use crate::expression_parser::{EchoCompiler, EchoSegment};
use crate::util::strip_quotes;

const BIND_PREFIX: &str = "bind:";
const ESCAPED_COLON_PREFIX: &str = "::";
const ATTRIBUTE_BAG_NAME: &str = "attributes";
const ATTRIBUTE_BAG_VARIABLE: &str = "$attributes";
const TRUE_LITERAL: &str = "true";

/// One `name[=value]` pair as written, value still quoted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAttribute<'a> {
    pub name: &'a str,
    pub value: Option<&'a str>,
}

/// Split attribute text into `name[=value]` pairs. Characters that
/// cannot start an attribute name are skipped.
///
/// A value is `"..."` or `'...'` with non-empty content, or else a bare
/// run up to whitespace or `>`. When `=` is not followed by a usable
/// value the attribute has no value and the `=` is skipped.
pub fn tokenize_attributes(text: &str) -> Vec<RawAttribute<'_>> {
    let mut attributes = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        let name_len = rest
            .find(|c: char| !chars::is_attribute_name_char(c))
            .unwrap_or(rest.len());

        if name_len == 0 {
            pos += rest.chars().next().map(char::len_utf8).unwrap_or(1);
            continue;
        }

        let name = &rest[..name_len];
        pos += name_len;

        let value = text[pos..]
            .strip_prefix(chars::EQ)
            .and_then(match_attribute_value);
        if let Some(value) = value {
            pos += 1 + value.len();
        }

        attributes.push(RawAttribute { name, value });
    }

    attributes
}

/// `"[^"]+"`, `'[^']+'` or `[^\s>]+` at the start of `input`
fn match_attribute_value(input: &str) -> Option<&str> {
    let first = input.chars().next()?;
    if chars::is_quote(first) {
        if let Some(close) = input[1..].find(first) {
            if close > 0 {
                return Some(&input[..close + 2]);
            }
        }
    }

    let len = input
        .find(|c: char| chars::is_whitespace(c) || c == chars::GT)
        .unwrap_or(input.len());
    if len == 0 {
        None
    } else {
        Some(&input[..len])
    }
}

/// Turns a literal attribute value into the body of a single-quoted
/// host string: template text has its `'` escaped, embedded echoes are
/// spliced in as `'.expr.'`.
pub fn compile_attribute_echos(echo: &dyn EchoCompiler, value: &str) -> String {
    echo.compile_echos(value)
        .into_iter()
        .map(|segment| match segment {
            EchoSegment::Text(text) => text.replace(chars::SQ, "\\'"),
            EchoSegment::Expr(expr) => format!("'.{}.'", expr),
        })
        .collect()
}

/// Parses the canonical attribute text of a single tag.
pub struct AttributeParser<'e> {
    echo: &'e dyn EchoCompiler,
}

impl<'e> AttributeParser<'e> {
    pub fn new(echo: &'e dyn EchoCompiler) -> Self {
        AttributeParser { echo }
    }

    /// Parse one tag's attributes. The returned bound marks start empty
    /// for every call, so nothing carries over between tags.
    pub fn parse(&self, text: &str) -> ParsedAttributes {
        self.parse_raw(tokenize_attributes(text))
    }

    pub fn parse_raw<'a>(&self, raw: impl IntoIterator<Item = RawAttribute<'a>>) -> ParsedAttributes {
        let mut parsed = ParsedAttributes::default();
        for attribute in raw {
            let attribute = self.classify(attribute);
            record_bound_mark(&mut parsed.bound, &attribute);
            parsed.attributes.insert(attribute);
        }
        parsed
    }

    fn classify(&self, raw: RawAttribute<'_>) -> Attribute {
        // A bare name is a boolean `true` binding
        let (name, value) = match raw.value {
            Some(value) => (raw.name, strip_quotes(value)),
            None => (raw.name, TRUE_LITERAL),
        };
        let bound = raw.value.is_none() || name.starts_with(BIND_PREFIX);
        let name = name.strip_prefix(BIND_PREFIX).unwrap_or(name);

        let name = match name.strip_prefix(ESCAPED_COLON_PREFIX) {
            Some(unescaped) => format!("{}{}", chars::COLON, unescaped),
            None => name.to_string(),
        };

        if !bound {
            let value = format!("'{}'", compile_attribute_echos(self.echo, value));
            return Attribute::literal(name, value);
        }

        let kind = if name == ATTRIBUTE_BAG_NAME && value.trim_start().starts_with(ATTRIBUTE_BAG_VARIABLE) {
            AttributeKind::AttributeBagSpread
        } else {
            AttributeKind::Bound
        };
        Attribute::new(name, value, kind)
    }
}

/// Keep the marks in step with the attribute that wins: a later literal
/// with the same name clears an earlier binding.
fn record_bound_mark(bound: &mut BoundAttributeMarks, attribute: &Attribute) {
    if attribute.kind.is_bound() {
        bound.insert(attribute.name.clone());
    } else {
        bound.shift_remove(&attribute.name);
    }
}
