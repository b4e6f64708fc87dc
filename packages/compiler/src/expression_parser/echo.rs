/*
 * Echo Compiler
 *
 * Splits a literal attribute value into plain text and the host
 * expressions embedded in it, so the attribute parser can splice
 * the expressions into a single-quoted string concatenation.
 */

use serde::{Deserialize, Serialize};

/// One piece of a compiled literal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EchoSegment {
    /// Template text, emitted inside single quotes
    Text(String),
    /// Generated host expression, spliced between quotes
    Expr(String),
}

/// The narrow capability the compiler needs from the downstream
/// expression compiler.
pub trait EchoCompiler {
    fn compile_echos(&self, value: &str) -> Vec<EchoSegment>;
}

/// Echo delimiters, longest opener first so `{{{` wins over `{{`
const ECHO_FORMS: &[(&str, &str, bool)] = &[
    ("{!!", "!!}", false),
    ("{{{", "}}}", true),
    ("{{", "}}", true),
];

/// Default echo syntax:
///
/// - `{{ expr }}` and `{{{ expr }}}` print `e(expr)` (escaped)
/// - `{!! expr !!}` prints `expr` unescaped
/// - a leading `@` (`@{{ expr }}`) keeps the echo as literal text
#[derive(Debug, Clone)]
pub struct BladeEchoCompiler {
    escape_function: String,
}

impl Default for BladeEchoCompiler {
    fn default() -> Self {
        BladeEchoCompiler {
            escape_function: "e".to_string(),
        }
    }
}

impl BladeEchoCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different escaping helper for `{{ }}` echoes
    pub fn with_escape_function(mut self, name: impl Into<String>) -> Self {
        self.escape_function = name.into();
        self
    }

    /// Match an echo starting at the beginning of `input`. Returns the
    /// trimmed expression, whether it is escaped, and the match length.
    fn match_echo<'a>(&self, input: &'a str) -> Option<(&'a str, bool, usize)> {
        for (open, close, escaped) in ECHO_FORMS {
            let Some(rest) = input.strip_prefix(open) else {
                continue;
            };
            let end = rest.find(close)?;
            let expression = rest[..end].trim();
            if expression.is_empty() {
                return None;
            }
            return Some((expression, *escaped, open.len() + end + close.len()));
        }
        None
    }
}

impl EchoCompiler for BladeEchoCompiler {
    fn compile_echos(&self, value: &str) -> Vec<EchoSegment> {
        let mut segments = Vec::new();
        let mut text = String::new();
        let mut rest = value;

        while let Some(ch) = rest.chars().next() {
            if ch == '@' {
                if let Some((_, _, len)) = self.match_echo(&rest[1..]) {
                    text.push_str(&rest[1..1 + len]);
                    rest = &rest[1 + len..];
                    continue;
                }
            } else if ch == '{' {
                if let Some((expression, escaped, len)) = self.match_echo(rest) {
                    if !text.is_empty() {
                        segments.push(EchoSegment::Text(std::mem::take(&mut text)));
                    }
                    let expression = if escaped {
                        format!("{}({})", self.escape_function, expression)
                    } else {
                        expression.to_string()
                    };
                    segments.push(EchoSegment::Expr(expression));
                    rest = &rest[len..];
                    continue;
                }
            }
            text.push(ch);
            rest = &rest[ch.len_utf8()..];
        }

        if !text.is_empty() {
            segments.push(EchoSegment::Text(text));
        }
        segments
    }
}
