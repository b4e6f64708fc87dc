//! Attribute Rewriter
//!
//! Text passes that expand attribute shorthands into the canonical
//! `name="value"` / `bind:name="value"` form before tokenizing.
//!
//! The passes run in a fixed order and each one relies on the ones
//! before it: `:$foo` must already read `:foo="$foo"` before the bind
//! prefix is normalized, and the helper expansions emit `:class=` /
//! `:style=` for the last pass to pick up. Quoted values are opaque to
//! every pass.

use crate::chars;
use crate::ml_parser::scan_balanced_parens;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// ` :$name` with no explicit value
static SHORT_BINDING_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s:\$(\w+)").unwrap());

/// `{{ $attributes... }}` echoed at an attribute boundary
static ATTRIBUTE_BAG_REGEXP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|\s+)\{\{\s*(\$attributes\b[^}]*?)\s*\}\}").unwrap()
});

/// `:name=` at an attribute boundary
static BIND_ATTRIBUTE_REGEXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\s+):([\w\-:.@]+)=").unwrap());

const BIND_PREFIX: &str = "bind:";

/// Rewrites one tag's attribute text. Holds the helper names the
/// `@class(...)`/`@style(...)` expansions call.
#[derive(Debug, Clone)]
pub struct AttributeRewriter<'c> {
    class_helper: &'c str,
    style_helper: &'c str,
}

impl<'c> AttributeRewriter<'c> {
    pub fn new(class_helper: &'c str, style_helper: &'c str) -> Self {
        AttributeRewriter {
            class_helper,
            style_helper,
        }
    }

    /// Run every pass, in order
    pub fn rewrite(&self, text: &str) -> String {
        let text = expand_short_bindings(text);
        let text = expand_attribute_bag(&text);
        let text = self.expand_helpers(&text);
        let text = normalize_bind_prefix(&text);
        log::trace!("rewrote attribute text to `{}`", text);
        text.into_owned()
    }

    /// `@class(args)` -> `:class="<class helper>(args)"`, likewise for
    /// `@style`. Double quotes inside the arguments become single quotes
    /// so the result can sit inside a double-quoted attribute.
    pub fn expand_helpers(&self, text: &str) -> String {
        let mut output = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(ch) = rest.chars().next() {
            if let Some((name, helper)) = self.helper_at(rest) {
                let group = &rest[name.len() + 1..];
                if let Some(len) = scan_balanced_parens(group) {
                    let arguments = group[..len].replace(chars::DQ, "'");
                    output.push_str(&format!(":{}=\"{}{}\"", name, helper, arguments));
                    rest = &group[len..];
                    continue;
                }
            }

            // Quoted values are opaque: a helper mentioned inside one is text
            if ch == chars::EQ {
                output.push(ch);
                rest = &rest[1..];
                if let Some(len) = quoted_value_len(rest) {
                    output.push_str(&rest[..len]);
                    rest = &rest[len..];
                }
                continue;
            }

            output.push(ch);
            rest = &rest[ch.len_utf8()..];
        }

        output
    }

    fn helper_at(&self, text: &str) -> Option<(&'static str, &'c str)> {
        if text.starts_with("@class(") {
            Some(("class", self.class_helper))
        } else if text.starts_with("@style(") {
            Some(("style", self.style_helper))
        } else {
            None
        }
    }
}

/// ` :$name` -> ` :name="$name"`
pub fn expand_short_bindings(text: &str) -> Cow<'_, str> {
    replace_outside_values(&SHORT_BINDING_REGEXP, text, |caps| {
        format!(" :{0}=\"${0}\"", &caps[1])
    })
}

/// `{{ $attributes->merge([...]) }}` -> ` :attributes="$attributes->merge([...])"`
pub fn expand_attribute_bag(text: &str) -> Cow<'_, str> {
    replace_outside_values(&ATTRIBUTE_BAG_REGEXP, text, |caps| {
        format!(" :attributes=\"{}\"", &caps[1])
    })
}

/// `:name=value` -> `bind:name=value`; `::name=value` is an escaped
/// colon and stays as it is.
pub fn normalize_bind_prefix(text: &str) -> Cow<'_, str> {
    replace_outside_values(&BIND_ATTRIBUTE_REGEXP, text, |caps| {
        let name = &caps[1];
        if name.starts_with(chars::COLON) {
            caps[0].to_string()
        } else {
            format!(" {}{}=", BIND_PREFIX, name)
        }
    })
}

/// Run `regex` over the attribute text outside quoted values. Text
/// inside `="..."` / `='...'` is copied as written.
fn replace_outside_values<'t>(
    regex: &Regex,
    text: &'t str,
    replace: impl Fn(&Captures) -> String,
) -> Cow<'t, str> {
    let mut output = String::with_capacity(text.len());
    let mut changed = false;

    for (index, (piece, quoted)) in split_at_values(text).into_iter().enumerate() {
        if quoted {
            output.push_str(piece);
            continue;
        }
        let rewritten = regex.replace_all(piece, |caps: &Captures| {
            let matched = &caps[0];
            // `^` only anchors at the start of the whole text
            let anchored_after_value = index > 0
                && caps.get(0).is_some_and(|m| m.start() == 0)
                && !matched.starts_with(char::is_whitespace);
            if anchored_after_value {
                matched.to_string()
            } else {
                replace(caps)
            }
        });
        changed |= matches!(rewritten, Cow::Owned(_));
        output.push_str(&rewritten);
    }

    if changed {
        Cow::Owned(output)
    } else {
        Cow::Borrowed(text)
    }
}

/// Split attribute text into the runs between quoted values and the
/// quoted values themselves, flagged `true`
fn split_at_values(text: &str) -> Vec<(&str, bool)> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find(chars::EQ) {
        let value_start = cursor + offset + 1;
        match quoted_value_len(&text[value_start..]) {
            Some(len) => {
                pieces.push((&text[start..value_start], false));
                pieces.push((&text[value_start..value_start + len], true));
                start = value_start + len;
                cursor = start;
            }
            None => cursor = value_start,
        }
    }

    if start < text.len() {
        pieces.push((&text[start..], false));
    }
    pieces
}

/// Length of the quoted value opening `text`, quotes included. An
/// unterminated value runs to the end.
fn quoted_value_len(text: &str) -> Option<usize> {
    let quote = text.chars().next().filter(|c| chars::is_quote(*c))?;
    Some(text[1..].find(quote).map(|end| end + 2).unwrap_or(text.len()))
}
