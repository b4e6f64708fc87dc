//! ML Parser Tokens
//!
//! The segment stream produced by the tag scanner: runs of untouched
//! template text interleaved with component and slot tags.

use crate::parse_util::ParseSourceSpan;
use serde::Serialize;

/// Kind of tag recognised by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TagKind {
    /// `<x-name ...>`
    Opening,
    /// `<x-name ... />`
    SelfClosing,
    /// `</x-name>`
    Closing,
    /// `<x-slot ...>`, `<x-slot:name ...>`
    SlotOpening,
    /// `</x-slot>`
    SlotClosing,
}

impl TagKind {
    pub fn is_slot(self) -> bool {
        matches!(self, TagKind::SlotOpening | TagKind::SlotClosing)
    }
}

/// A tag found in the template. Borrowed from the source; consumed as
/// soon as it has been compiled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagMatch<'a> {
    pub kind: TagKind,
    /// Component name without the `x-`/`x:` prefix; `slot` for slot tags
    pub name: &'a str,
    /// Raw attribute text between the name and the closing `>`/`/>`
    pub attributes: &'a str,
    /// Inline slot name of `<x-slot:name>`
    pub inline_name: Option<&'a str>,
    /// `/>` terminated; always true for `SelfClosing`
    pub self_closing: bool,
    pub source_span: ParseSourceSpan,
}

/// One piece of the scanned template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Segment<'a> {
    Text(&'a str),
    Tag(TagMatch<'a>),
}

impl<'a> Segment<'a> {
    pub fn as_tag(&self) -> Option<&TagMatch<'a>> {
        match self {
            Segment::Tag(tag) => Some(tag),
            Segment::Text(_) => None,
        }
    }
}
