//! Parse Utilities
//!
//! Source locations and spans for tags found in a template.

use crate::chars;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in the template source. `line` and `col` are 0-based,
/// `col` counts characters, not bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseLocation {
    pub offset: usize,
    pub line: usize,
    pub col: usize,
}

impl ParseLocation {
    pub fn new(offset: usize, line: usize, col: usize) -> Self {
        ParseLocation { offset, line, col }
    }

    /// Compute the location of a byte offset by walking the source.
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let mut location = ParseLocation::default();
        location.advance_to(source, offset);
        location
    }

    /// Move forward to `offset`, counting newlines on the way. Offsets
    /// behind the current one leave the location unchanged.
    pub fn advance_to(&mut self, source: &str, offset: usize) {
        if offset <= self.offset {
            return;
        }
        let end = offset.min(source.len());
        for ch in source[self.offset..end].chars() {
            if ch == chars::NEWLINE {
                self.line += 1;
                self.col = 0;
            } else {
                self.col += 1;
            }
        }
        self.offset = end;
    }
}

impl fmt::Display for ParseLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Half-open byte range `[start, end)` of a tag in the template source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseSourceSpan {
    pub start: ParseLocation,
    pub end: ParseLocation,
}

impl ParseSourceSpan {
    pub fn new(start: ParseLocation, end: ParseLocation) -> Self {
        ParseSourceSpan { start, end }
    }

    /// The source text covered by this span
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start.offset..self.end.offset]
    }

    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
